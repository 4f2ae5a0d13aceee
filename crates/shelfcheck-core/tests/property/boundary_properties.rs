//! Property tests for boundary key normalization.

use proptest::prelude::*;
use serde_json::json;
use shelfcheck_core::BoundaryKey;

proptest! {
    #[test]
    fn prop_array_and_object_shapes_agree(left in any::<u32>(), right in any::<u32>()) {
        let from_array = BoundaryKey::from_value(&json!([left, right])).unwrap();
        let from_object = BoundaryKey::from_value(&json!({"left": left, "right": right})).unwrap();
        prop_assert_eq!(from_array, from_object);
        prop_assert_eq!(from_array, BoundaryKey::new(left, right));
    }

    #[test]
    fn prop_wrong_arity_is_rejected(items in proptest::collection::vec(any::<u32>(), 0..6)) {
        prop_assume!(items.len() != 2);
        prop_assert!(BoundaryKey::from_value(&json!(items)).is_err());
    }

    #[test]
    fn prop_out_of_range_neighbour_is_rejected(big in (u64::from(u32::MAX) + 1)..u64::MAX) {
        prop_assert!(BoundaryKey::from_value(&json!([0, big])).is_err());
    }
}
