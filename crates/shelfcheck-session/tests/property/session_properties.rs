//! Property tests for the review session driver.

use proptest::prelude::*;
use shelfcheck_core::{Catalog, ShelfcheckConfig};
use shelfcheck_session::{ReviewSession, SessionStep};
use shelfcheck_traversal::ReviewMode;
use test_fixtures::{sample_catalog, synthetic_records};

fn run_declining(session: &mut ReviewSession<Catalog>) -> usize {
    let mut shown = 0;
    let mut step = session.next().unwrap();
    while let SessionStep::Prompt(prompt) = step {
        shown += 1;
        step = match prompt.mode {
            ReviewMode::Skipped => session.confirm_presence(Some(false)).unwrap(),
            ReviewMode::Unresolved => session.next().unwrap(),
        };
    }
    shown
}

proptest! {
    #[test]
    fn prop_every_record_is_prompted_once(sources in 1usize..5, per_source in 0usize..12, groups in 1u32..4) {
        let records = synthetic_records(sources, per_source, groups);
        let total = records.len();
        let mut session = ReviewSession::new(records, sample_catalog(), &ShelfcheckConfig::default());
        prop_assert_eq!(run_declining(&mut session), total);
        prop_assert_eq!(session.remaining().unwrap(), 0);
    }

    #[test]
    fn prop_snapshot_resume_preserves_progress(steps in 0usize..20) {
        let records = synthetic_records(3, 7, 2);
        let mut session = ReviewSession::new(records.clone(), sample_catalog(), &ShelfcheckConfig::default());
        for _ in 0..steps {
            session.next().unwrap();
        }
        let snapshot = session.snapshot();
        let resumed = ReviewSession::resume(records, sample_catalog(), &ShelfcheckConfig::default(), snapshot).unwrap();
        prop_assert_eq!(resumed.cursor(), session.cursor());
        prop_assert_eq!(resumed.pending(), session.pending());
        prop_assert_eq!(resumed.remaining().unwrap(), session.remaining().unwrap());
    }
}
