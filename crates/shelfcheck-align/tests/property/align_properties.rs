//! Property tests for the alignment engine.

use proptest::prelude::*;
use shelfcheck_align::{align, EditCosts, EditOp};

fn small_seq() -> impl Strategy<Value = Vec<u8>> {
    // Small alphabet so matches actually happen.
    proptest::collection::vec(0u8..4, 0..12)
}

fn costs() -> impl Strategy<Value = EditCosts> {
    (0u32..6, 0u32..6, 0u32..6).prop_map(|(i, d, s)| EditCosts::new(i, d, s))
}

proptest! {
    #[test]
    fn prop_stripping_placeholders_reconstructs_inputs(a in small_seq(), b in small_seq(), c in costs()) {
        let (_, result) = align(&a, &b, c);
        prop_assert_eq!(result.strip_a(), a.iter().collect::<Vec<_>>());
        prop_assert_eq!(result.strip_b(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_columns_have_equal_length(a in small_seq(), b in small_seq(), c in costs()) {
        let (_, result) = align(&a, &b, c);
        prop_assert_eq!(result.ops.len(), result.aligned_a.len());
        prop_assert_eq!(result.ops.len(), result.aligned_b.len());
        prop_assert!(result.len() >= a.len().max(b.len()));
        prop_assert!(result.len() <= a.len() + b.len());
    }

    #[test]
    fn prop_script_cost_never_below_distance(a in small_seq(), b in small_seq(), c in costs()) {
        let (cost, result) = align(&a, &b, c);
        prop_assert!(result.script_cost(&c) >= cost);
    }

    #[test]
    fn prop_script_cost_equals_distance_for_symmetric_gaps(
        a in small_seq(),
        b in small_seq(),
        gap in 0u32..6,
        sub in 0u32..6,
    ) {
        let c = EditCosts::new(gap, gap, sub);
        let (cost, result) = align(&a, &b, c);
        prop_assert_eq!(result.script_cost(&c), cost);
    }

    #[test]
    fn prop_ops_agree_with_columns(a in small_seq(), b in small_seq(), c in costs()) {
        let (_, result) = align(&a, &b, c);
        for (op, x, y) in result.columns() {
            match op {
                EditOp::Match => prop_assert_eq!(x.item(), y.item()),
                EditOp::Substitute => {
                    prop_assert!(x.item().is_some() && y.item().is_some());
                    prop_assert_ne!(x.item(), y.item());
                }
                EditOp::Delete => prop_assert!(x.item().is_some() && y.is_gap()),
                EditOp::Insert => prop_assert!(x.is_gap() && y.item().is_some()),
            }
        }
    }

    #[test]
    fn prop_self_alignment_is_free(a in small_seq(), c in costs()) {
        let (cost, result) = align(&a, &a, c);
        prop_assert_eq!(cost, 0);
        prop_assert!(result.ops.iter().all(|op| *op == EditOp::Match));
    }

    #[test]
    fn prop_raising_substitution_never_lowers_cost(
        a in small_seq(),
        b in small_seq(),
        ins in 0u32..6,
        del in 0u32..6,
        sub in 0u32..6,
        bump in 1u32..6,
    ) {
        let (low, _) = align(&a, &b, EditCosts::new(ins, del, sub));
        let (high, _) = align(&a, &b, EditCosts::new(ins, del, sub + bump));
        prop_assert!(high >= low);
    }

    #[test]
    fn prop_deterministic(a in small_seq(), b in small_seq(), c in costs()) {
        let (c1, r1) = align(&a, &b, c);
        let (c2, r2) = align(&a, &b, c);
        prop_assert_eq!(c1, c2);
        prop_assert_eq!(r1, r2);
    }
}
