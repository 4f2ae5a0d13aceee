//! Review session: prompts, decisions, and the corrections they record.

use shelfcheck_core::errors::SessionError;
use shelfcheck_core::{Catalog, CatalogId, Point, ShelfErrorCode, ShelfcheckConfig, SourceId};
use shelfcheck_session::{
    Choice, OverlayHint, PromptBody, ReviewPrompt, ReviewSession, SessionStep, Verdict,
};
use shelfcheck_traversal::ReviewMode;
use test_fixtures::{sample_catalog, sample_shelf, SAMPLE_SHELF_ORDER};

fn session() -> ReviewSession<Catalog> {
    ReviewSession::new(sample_shelf(), sample_catalog(), &ShelfcheckConfig::default())
}

/// Call `next` until `record` is on screen.
fn show(session: &mut ReviewSession<Catalog>, record: usize) -> ReviewPrompt {
    loop {
        match session.next().unwrap() {
            SessionStep::Prompt(p) if p.record_index == record => return p,
            SessionStep::Prompt(_) => continue,
            other => panic!("record {record} never shown, got {other:?}"),
        }
    }
}

fn option_ids(body: &PromptBody) -> Vec<u32> {
    match body {
        PromptBody::ChooseCandidate { options, .. } => options.iter().map(|o| o.id.0).collect(),
        other => panic!("expected a candidate prompt, got {other:?}"),
    }
}

#[test]
fn next_walks_records_in_review_order() {
    let mut s = session();
    let mut shown = Vec::new();
    while let SessionStep::Prompt(p) = s.next().unwrap() {
        shown.push(p.record_index);
    }
    assert_eq!(shown, SAMPLE_SHELF_ORDER.to_vec());
    assert!(s.next().unwrap().is_exhausted(), "exhaustion repeats");
    assert!(s.ledger().is_empty(), "moving on records nothing");
}

#[test]
fn unresolved_prompt_offers_known_candidates_and_manual_fallback() {
    let mut s = session();
    let prompt = show(&mut s, 0);

    assert_eq!(prompt.mode, ReviewMode::Unresolved);
    assert_eq!(prompt.source_id, SourceId::from("shelf-a"));
    assert_eq!(option_ids(&prompt.body), vec![1, 3], "null candidates are dropped");
    match &prompt.body {
        PromptBody::ChooseCandidate {
            options,
            manual_label,
            manual_options,
        } => {
            assert_eq!(options[0].label, "DS793 .K7 K847 1978, 广东历史:乡土教材");
            assert_eq!(manual_label, "Manually label book");
            assert_eq!(manual_options.len(), 10);
        }
        other => panic!("unexpected body {other:?}"),
    }
    assert_eq!(
        prompt.overlay,
        Some(OverlayHint::Circle {
            center: Point::new(120.0, 40.0),
            radius: 30.0,
        })
    );
}

#[test]
fn candidates_missing_from_catalog_are_not_offered() {
    let mut s = session();
    let prompt = show(&mut s, 8);
    assert_eq!(option_ids(&prompt.body), vec![9]);

    let empty = {
        let mut s = session();
        show(&mut s, 7)
    };
    assert!(option_ids(&empty.body).is_empty());
}

#[test]
fn skipped_prompt_asks_about_first_known_candidate() {
    let mut s = session();
    let prompt = show(&mut s, 1);

    assert_eq!(prompt.mode, ReviewMode::Skipped);
    match &prompt.body {
        PromptBody::ConfirmPresence { target, question } => {
            assert_eq!(target.as_ref().map(|t| t.id), Some(CatalogId(2)));
            assert_eq!(
                question,
                "Is this book DS793.K7 K8477 1985, 广东省市地县概况 in the masked area?"
            );
        }
        other => panic!("unexpected body {other:?}"),
    }
    assert_eq!(
        prompt.overlay,
        Some(OverlayHint::SkipBox {
            left_x: 200.0,
            right_x: 260.0,
            outline_width: 10,
        })
    );

    let gapped = show(&mut s, 6);
    match gapped.body {
        PromptBody::ConfirmPresence { target, .. } => {
            assert_eq!(target.map(|t| t.id), Some(CatalogId(8)));
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn choosing_a_candidate_records_and_advances() {
    let mut s = session();
    show(&mut s, 0);

    let step = s.choose(Choice::Candidate(CatalogId(3))).unwrap();
    assert_eq!(step.prompt().map(|p| p.record_index), Some(2));

    let correction = s.ledger().for_catalog_id(CatalogId(3)).unwrap();
    assert_eq!(correction.record_index, 0);
    assert_eq!(correction.verdict, Verdict::Identified { manual: false });
}

#[test]
fn choice_must_be_offered() {
    let mut s = session();
    show(&mut s, 0);

    let err = s.choose(Choice::Candidate(CatalogId(4))).unwrap_err();
    assert!(matches!(err, SessionError::InvalidChoice { record: 0, .. }));
    assert_eq!(err.error_code(), "SESSION_INVALID_CHOICE");
    assert_eq!(s.pending().map(|p| p.visit.record_index), Some(0), "still pending");

    let err = s.choose(Choice::Manual(CatalogId(99))).unwrap_err();
    assert!(matches!(err, SessionError::InvalidChoice { .. }));

    s.choose(Choice::Manual(CatalogId(4))).unwrap();
    assert_eq!(
        s.ledger().for_catalog_id(CatalogId(4)).unwrap().verdict,
        Verdict::Identified { manual: true }
    );
}

#[test]
fn decisions_require_a_pending_item() {
    let mut s = session();
    let err = s.choose(Choice::Candidate(CatalogId(1))).unwrap_err();
    assert!(matches!(err, SessionError::NoPendingItem));
    assert!(matches!(
        s.confirm_presence(Some(true)),
        Err(SessionError::NoPendingItem)
    ));
    assert!(s.current().is_none());
}

#[test]
fn decision_kind_must_match_pending_record() {
    let mut s = session();
    show(&mut s, 1);

    let err = s.choose(Choice::Candidate(CatalogId(2))).unwrap_err();
    match err {
        SessionError::WrongMode {
            record,
            expected,
            attempted,
        } => {
            assert_eq!(record, 1);
            assert_eq!(expected, "confirm_presence");
            assert_eq!(attempted, "choose");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let err = s.mark_location(Point::new(1.0, 1.0)).unwrap_err();
    assert_eq!(err.error_code(), "SESSION_WRONG_MODE");
}

#[test]
fn unanswered_presence_redisplays_without_advancing() {
    let mut s = session();
    let prompt = show(&mut s, 1);
    let cursor = s.cursor();

    let step = s.confirm_presence(None).unwrap();
    assert_eq!(step, SessionStep::Prompt(prompt));
    assert_eq!(s.cursor(), cursor);
    assert!(s.ledger().is_empty());
}

#[test]
fn declined_presence_records_not_present() {
    let mut s = session();
    show(&mut s, 1);

    let step = s.confirm_presence(Some(false)).unwrap();
    assert_eq!(step.prompt().map(|p| p.record_index), Some(3));
    assert_eq!(
        s.ledger().for_catalog_id(CatalogId(2)).unwrap().verdict,
        Verdict::NotPresent
    );
}

#[test]
fn confirmed_presence_waits_for_a_location() {
    let mut s = session();
    show(&mut s, 1);

    let step = s.confirm_presence(Some(true)).unwrap();
    assert_eq!(step, SessionStep::AwaitingLocation { record_index: 1 });
    assert_eq!(s.current(), Some(step));
    assert!(s.ledger().is_empty());

    let err = s.confirm_presence(Some(true)).unwrap_err();
    assert!(matches!(
        err,
        SessionError::WrongMode {
            expected: "mark_location",
            ..
        }
    ));

    let spot = Point::new(231.0, 52.0);
    let step = s.mark_location(spot).unwrap();
    assert_eq!(step.prompt().map(|p| p.record_index), Some(3));
    assert_eq!(
        s.ledger().for_catalog_id(CatalogId(2)).unwrap().verdict,
        Verdict::Confirmed {
            location: Some(spot)
        }
    );
}

#[test]
fn confirmation_without_location_when_not_required() {
    let mut config = ShelfcheckConfig::default();
    config.review.require_location_on_confirm = false;
    let mut s = ReviewSession::new(sample_shelf(), sample_catalog(), &config);
    show(&mut s, 1);

    let step = s.confirm_presence(Some(true)).unwrap();
    assert_eq!(step.prompt().map(|p| p.record_index), Some(3));
    assert_eq!(
        s.ledger().for_catalog_id(CatalogId(2)).unwrap().verdict,
        Verdict::Confirmed { location: None }
    );
}

#[test]
fn overlay_settings_come_from_config() {
    let config = ShelfcheckConfig::from_toml(
        r#"
        [review]
        overlay_radius = 12.5
        skip_box_outline_width = 3
        manual_option_label = "Other"
        "#,
    )
    .unwrap();
    let mut s = ReviewSession::new(sample_shelf(), sample_catalog(), &config);

    let unresolved = show(&mut s, 0);
    assert!(matches!(
        unresolved.overlay,
        Some(OverlayHint::Circle { radius, .. }) if radius == 12.5
    ));
    assert!(matches!(
        unresolved.body,
        PromptBody::ChooseCandidate { ref manual_label, .. } if manual_label == "Other"
    ));

    let skipped = show(&mut s, 1);
    assert!(matches!(
        skipped.overlay,
        Some(OverlayHint::SkipBox { outline_width: 3, .. })
    ));
}

#[test]
fn later_correction_for_same_item_replaces_earlier() {
    let mut s = session();
    show(&mut s, 0);
    s.choose(Choice::Manual(CatalogId(4))).unwrap();
    // Record 2 is now on screen and also offers catalog id 4.
    s.choose(Choice::Candidate(CatalogId(4))).unwrap();

    assert_eq!(s.ledger().len(), 1);
    let correction = s.ledger().for_catalog_id(CatalogId(4)).unwrap();
    assert_eq!(correction.record_index, 2);
    assert_eq!(correction.verdict, Verdict::Identified { manual: false });
    assert_eq!(s.take_recent_corrections(), vec![0]);
    assert!(s.take_recent_corrections().is_empty());
}

#[test]
fn remaining_excludes_pending_record() {
    let mut s = session();
    assert_eq!(s.remaining().unwrap(), 9);
    show(&mut s, 0);
    assert_eq!(s.remaining().unwrap(), 8);
}

#[test]
fn unknown_source_in_custom_order_is_reported() {
    let mut s = session().with_source_order(vec![SourceId::from("shelf-q")]);
    let err = s.next().unwrap_err();
    assert!(matches!(err, SessionError::Traversal(_)));
    assert_eq!(err.error_code(), "TRAVERSAL_UNKNOWN_SOURCE");
}

#[test]
fn custom_source_order_is_followed() {
    let mut s = session().with_source_order(vec![SourceId::from("shelf-b")]);
    let mut shown = Vec::new();
    while let SessionStep::Prompt(p) = s.next().unwrap() {
        shown.push(p.record_index);
    }
    assert_eq!(shown, vec![5, 6]);
}

#[test]
fn suggest_ranks_catalog_by_call_number() {
    let s = session();
    let matches = s.suggest("DS793 K7 K848");
    assert_eq!(matches.len(), 5);
    assert_eq!(matches[0].id, CatalogId(3));
    assert_eq!(matches[0].cost, 1);
}
