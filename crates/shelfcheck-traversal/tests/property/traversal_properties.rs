//! Property tests for the traversal cursor.

use proptest::prelude::*;
use shelfcheck_core::DetectionRecord;
use shelfcheck_traversal::{advance, advance_counted, remaining, CursorState, GroupIndex, Outcome, ReviewMode, Traversal};
use test_fixtures::{skipped, unresolved};

/// (source, Some(boundary group) | None for unresolved)
fn records() -> impl Strategy<Value = Vec<DetectionRecord>> {
    proptest::collection::vec((0u8..4, proptest::option::of(0u32..3)), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(s, group)| {
                let source = format!("src-{s}");
                match group {
                    None => unresolved(&source, &[], 0.0, 0.0),
                    Some(g) => skipped(&source, g, g + 1, &[], 0.0, 1.0),
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_full_traversal_visits_every_record_once(records in records()) {
        let index = GroupIndex::build(&records);
        let mut visited: Vec<usize> = Traversal::new(&index, index.sources())
            .map(|v| v.map(|v| v.record_index))
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(visited.len(), records.len());
        visited.sort_unstable();
        prop_assert_eq!(visited, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_visit_mode_matches_record_kind(records in records()) {
        let index = GroupIndex::build(&records);
        for visit in Traversal::new(&index, index.sources()) {
            let visit = visit.unwrap();
            let expected = if records[visit.record_index].is_unresolved() {
                ReviewMode::Unresolved
            } else {
                ReviewMode::Skipped
            };
            prop_assert_eq!(visit.mode, expected);
        }
    }

    #[test]
    fn prop_unresolved_precede_skipped_within_source(records in records()) {
        let index = GroupIndex::build(&records);
        let mut last: Option<(String, ReviewMode)> = None;
        for visit in Traversal::new(&index, index.sources()) {
            let visit = visit.unwrap();
            let source = records[visit.record_index].source_id.to_string();
            if let Some((prev_source, prev_mode)) = &last {
                if *prev_source == source {
                    prop_assert!(!(*prev_mode == ReviewMode::Skipped && visit.mode == ReviewMode::Unresolved));
                }
            }
            last = Some((source, visit.mode));
        }
    }

    #[test]
    fn prop_advance_is_deterministic(records in records(), steps in 0usize..45) {
        let index = GroupIndex::build(&records);
        let mut state = CursorState::INITIAL;
        for _ in 0..steps {
            let a = advance(&index, index.sources(), state).unwrap();
            let b = advance(&index, index.sources(), state).unwrap();
            prop_assert_eq!(a, b);
            state = a.1;
        }
    }

    #[test]
    fn prop_remaining_plus_emitted_is_total(records in records(), steps in 0usize..45) {
        let index = GroupIndex::build(&records);
        let mut state = CursorState::INITIAL;
        let mut emitted = 0usize;
        for _ in 0..steps {
            let (outcome, next) = advance(&index, index.sources(), state).unwrap();
            state = next;
            if let Outcome::Item(_) = outcome {
                emitted += 1;
            }
        }
        prop_assert_eq!(emitted + remaining(&index, index.sources(), state).unwrap(), records.len());
    }

    #[test]
    fn prop_any_state_settles_within_bound(
        records in records(),
        source_index in 0usize..6,
        skipped_mode in any::<bool>(),
        unresolved_cursor in prop_oneof![0usize..50, Just(usize::MAX)],
        skipped_group_cursor in prop_oneof![0usize..5, Just(usize::MAX - 1)],
        skipped_item_cursor in prop_oneof![0usize..50, Just(usize::MAX)],
    ) {
        let index = GroupIndex::build(&records);
        let state = CursorState {
            source_index,
            mode: if skipped_mode { ReviewMode::Skipped } else { ReviewMode::Unresolved },
            unresolved_cursor,
            skipped_group_cursor,
            skipped_item_cursor,
        };
        let groups = index
            .sources()
            .get(source_index)
            .and_then(|s| index.bucket(s))
            .map_or(0, |b| b.skipped.len());

        let (_, _, fall_throughs) = advance_counted(&index, index.sources(), state).unwrap();
        prop_assert!(fall_throughs <= 3 + groups);
    }
}
