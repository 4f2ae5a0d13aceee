//! The review session driver.

use chrono::Utc;
use shelfcheck_align::{CatalogMatch, CatalogMatcher};
use shelfcheck_core::config::ReviewConfig;
use shelfcheck_core::errors::SessionError;
use shelfcheck_core::{
    CatalogId, CatalogLookup, DetectionRecord, Placement, Point, ShelfcheckConfig, SourceId,
};
use shelfcheck_traversal::{advance, remaining, CursorState, GroupIndex, Outcome, ReviewMode, Visit};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::decision::{Choice, Verdict};
use crate::ledger::{Correction, CorrectionLedger};
use crate::prompt::{CatalogOption, OverlayHint, PromptBody, ReviewPrompt, SessionStep};
use crate::snapshot::{PendingItem, PendingStage, SessionSnapshot};

/// One reviewer working through one set of detection records.
///
/// Holds at most one pending record. Every decision settles the pending record
/// and advances the cursor; [`ReviewSession::next`] moves on without deciding.
pub struct ReviewSession<C> {
    id: String,
    records: Vec<DetectionRecord>,
    index: GroupIndex,
    sources: Vec<SourceId>,
    catalog: C,
    config: ReviewConfig,
    matcher: CatalogMatcher,
    manual_options: Vec<CatalogOption>,
    cursor: CursorState,
    pending: Option<PendingItem>,
    ledger: CorrectionLedger,
}

impl<C: CatalogLookup> ReviewSession<C> {
    /// Start a fresh session. Sources are reviewed in first-seen order.
    pub fn new(records: Vec<DetectionRecord>, catalog: C, config: &ShelfcheckConfig) -> Self {
        let session = Self::assemble(Uuid::new_v4().to_string(), records, catalog, config);
        info!(
            session_id = %session.id,
            records = session.records.len(),
            sources = session.sources.len(),
            "review session started"
        );
        session
    }

    /// Rebuild a session from a snapshot taken over the same records.
    pub fn resume(
        records: Vec<DetectionRecord>,
        catalog: C,
        config: &ShelfcheckConfig,
        snapshot: SessionSnapshot,
    ) -> Result<Self, SessionError> {
        let available = records.len();
        let referenced = snapshot
            .pending
            .iter()
            .map(|p| p.visit.record_index)
            .chain(snapshot.corrections.iter().map(|c| c.record_index));
        for record in referenced {
            if record >= available {
                return Err(SessionError::SnapshotMismatch { record, available });
            }
        }
        if let Some(pending) = snapshot.pending {
            check_pending_mode(&records, pending)?;
        }

        let mut session = Self::assemble(snapshot.session_id, records, catalog, config);
        session.sources = snapshot.sources;
        session.cursor = snapshot.cursor;
        session.pending = snapshot.pending;
        session.ledger = CorrectionLedger::from_corrections(snapshot.corrections);
        info!(
            session_id = %session.id,
            corrections = session.ledger.len(),
            pending = ?session.pending.map(|p| p.visit.record_index),
            "review session resumed"
        );
        Ok(session)
    }

    fn assemble(
        id: String,
        records: Vec<DetectionRecord>,
        catalog: C,
        config: &ShelfcheckConfig,
    ) -> Self {
        let index = GroupIndex::build(&records);
        let sources = index.sources().to_vec();
        let manual_options = labelled_options(&catalog, catalog.ids());
        Self {
            id,
            records,
            index,
            sources,
            catalog,
            config: config.review.clone(),
            matcher: CatalogMatcher::from_config(&config.alignment),
            manual_options,
            cursor: CursorState::INITIAL,
            pending: None,
            ledger: CorrectionLedger::new(),
        }
    }

    /// Review sources in this order instead. Only meaningful before the first `next`.
    pub fn with_source_order(mut self, sources: Vec<SourceId>) -> Self {
        self.sources = sources;
        self
    }

    /// Show the next record. Any pending record is left undecided.
    pub fn next(&mut self) -> Result<SessionStep, SessionError> {
        if let Some(skipped) = self.pending.take() {
            debug!(record = skipped.visit.record_index, "moved on without a decision");
        }

        let (outcome, next) = advance(&self.index, &self.sources, self.cursor)?;
        self.cursor = next;
        match outcome {
            Outcome::Item(visit) => {
                self.pending = Some(PendingItem {
                    visit,
                    stage: PendingStage::AwaitingDecision,
                });
                Ok(SessionStep::Prompt(self.render(visit)))
            }
            Outcome::Exhausted => {
                info!(
                    session_id = %self.id,
                    corrections = self.ledger.len(),
                    "review session exhausted"
                );
                Ok(SessionStep::Exhausted)
            }
        }
    }

    /// Re-render whatever is pending.
    pub fn current(&self) -> Option<SessionStep> {
        self.pending.map(|p| match p.stage {
            PendingStage::AwaitingDecision => SessionStep::Prompt(self.render(p.visit)),
            PendingStage::AwaitingLocation => SessionStep::AwaitingLocation {
                record_index: p.visit.record_index,
            },
        })
    }

    /// Label the pending unresolved record.
    pub fn choose(&mut self, choice: Choice) -> Result<SessionStep, SessionError> {
        let visit = self.pending_for(ReviewMode::Unresolved, PendingStage::AwaitingDecision, "choose")?;
        let record = &self.records[visit.record_index];

        let offered = match choice {
            Choice::Candidate(id) => record.known_candidates().any(|c| c == id),
            Choice::Manual(_) => true,
        };
        if !offered || self.catalog.label(choice.id()).is_none() {
            return Err(SessionError::InvalidChoice {
                record: visit.record_index,
                choice: describe_choice(choice),
            });
        }

        let manual = matches!(choice, Choice::Manual(_));
        self.settle(visit, Some(choice.id()), Verdict::Identified { manual })
    }

    /// Answer the pending presence question. `None` re-displays it.
    pub fn confirm_presence(&mut self, answer: Option<bool>) -> Result<SessionStep, SessionError> {
        let visit = self.pending_for(
            ReviewMode::Skipped,
            PendingStage::AwaitingDecision,
            "confirm_presence",
        )?;
        let target = self.records[visit.record_index].first_candidate();

        match answer {
            None => Ok(SessionStep::Prompt(self.render(visit))),
            Some(false) => self.settle(visit, target, Verdict::NotPresent),
            Some(true) if self.config.require_location_on_confirm => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.stage = PendingStage::AwaitingLocation;
                }
                debug!(record = visit.record_index, "presence confirmed, awaiting location");
                Ok(SessionStep::AwaitingLocation {
                    record_index: visit.record_index,
                })
            }
            Some(true) => self.settle(visit, target, Verdict::Confirmed { location: None }),
        }
    }

    /// Mark where a confirmed item sits.
    pub fn mark_location(&mut self, location: Point) -> Result<SessionStep, SessionError> {
        let visit = self.pending_for(
            ReviewMode::Skipped,
            PendingStage::AwaitingLocation,
            "mark_location",
        )?;
        let target = self.records[visit.record_index].first_candidate();
        self.settle(
            visit,
            target,
            Verdict::Confirmed {
                location: Some(location),
            },
        )
    }

    /// Catalog entries whose call number best matches `query`, for manual labelling.
    pub fn suggest(&self, query: &str) -> Vec<CatalogMatch> {
        self.matcher.rank(query, &self.catalog)
    }

    /// Records the cursor has yet to show, not counting the pending one.
    pub fn remaining(&self) -> Result<usize, SessionError> {
        Ok(remaining(&self.index, &self.sources, self.cursor)?)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            cursor: self.cursor,
            pending: self.pending,
            sources: self.sources.clone(),
            corrections: self.ledger.to_vec(),
            saved_at: Utc::now(),
        }
    }

    /// Slots of corrections added or updated since the last call.
    pub fn take_recent_corrections(&mut self) -> Vec<usize> {
        self.ledger.take_recent()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn pending(&self) -> Option<PendingItem> {
        self.pending
    }

    pub fn ledger(&self) -> &CorrectionLedger {
        &self.ledger
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn pending_for(
        &self,
        mode: ReviewMode,
        stage: PendingStage,
        attempted: &'static str,
    ) -> Result<Visit, SessionError> {
        let pending = self.pending.ok_or(SessionError::NoPendingItem)?;
        if pending.visit.mode != mode || pending.stage != stage {
            return Err(SessionError::WrongMode {
                record: pending.visit.record_index,
                expected: expected_action(pending),
                attempted,
            });
        }
        Ok(pending.visit)
    }

    fn settle(
        &mut self,
        visit: Visit,
        catalog_id: Option<CatalogId>,
        verdict: Verdict,
    ) -> Result<SessionStep, SessionError> {
        let slot = self.ledger.record(Correction {
            record_index: visit.record_index,
            catalog_id,
            verdict,
            recorded_at: Utc::now(),
        });
        debug!(
            record = visit.record_index,
            catalog_id = ?catalog_id,
            ?verdict,
            slot,
            "recorded correction"
        );
        self.pending = None;
        self.next()
    }

    fn render(&self, visit: Visit) -> ReviewPrompt {
        let record = &self.records[visit.record_index];
        let (body, overlay) = match visit.mode {
            ReviewMode::Unresolved => (
                PromptBody::ChooseCandidate {
                    options: labelled_options(&self.catalog, record.known_candidates()),
                    manual_label: self.config.manual_option_label.clone(),
                    manual_options: self.manual_options.clone(),
                },
                record.placement.map(|p| OverlayHint::Circle {
                    center: centre_of(p),
                    radius: self.config.overlay_radius,
                }),
            ),
            ReviewMode::Skipped => {
                let target = record.first_candidate().map(|id| CatalogOption {
                    id,
                    label: self.catalog.label(id).unwrap_or_else(|| {
                        warn!(%id, record = visit.record_index, "skipped record targets an unknown catalog id");
                        format!("#{id}")
                    }),
                });
                let label = target.as_ref().map_or("(unknown)", |t| t.label.as_str());
                let question = format!("Is this book {label} in the masked area?");
                (
                    PromptBody::ConfirmPresence { target, question },
                    record.placement.map(|p| {
                        let (left_x, right_x) = horizontal_extent(p);
                        OverlayHint::SkipBox {
                            left_x,
                            right_x,
                            outline_width: self.config.skip_box_outline_width,
                        }
                    }),
                )
            }
        };

        ReviewPrompt {
            record_index: visit.record_index,
            source_id: record.source_id.clone(),
            mode: visit.mode,
            body,
            overlay,
        }
    }
}

fn labelled_options<C: CatalogLookup + ?Sized>(
    catalog: &C,
    ids: impl IntoIterator<Item = CatalogId>,
) -> Vec<CatalogOption> {
    ids.into_iter()
        .filter_map(|id| match catalog.label(id) {
            Some(label) => Some(CatalogOption { id, label }),
            None => {
                warn!(%id, "dropping catalog id with no label");
                None
            }
        })
        .collect()
}

// A pending item must match the kind of record it points at.
fn check_pending_mode(records: &[DetectionRecord], pending: PendingItem) -> Result<(), SessionError> {
    let record = pending.visit.record_index;
    let actual = if records[record].is_unresolved() {
        ReviewMode::Unresolved
    } else {
        ReviewMode::Skipped
    };
    let location_on_unresolved =
        pending.visit.mode == ReviewMode::Unresolved && pending.stage == PendingStage::AwaitingLocation;
    if pending.visit.mode != actual || location_on_unresolved {
        return Err(SessionError::PendingModeMismatch {
            record,
            pending: match pending.stage {
                PendingStage::AwaitingLocation => "awaiting a location",
                PendingStage::AwaitingDecision => pending.visit.mode.as_str(),
            },
            actual: actual.as_str(),
        });
    }
    Ok(())
}

fn expected_action(pending: PendingItem) -> &'static str {
    match (pending.visit.mode, pending.stage) {
        (_, PendingStage::AwaitingLocation) => "mark_location",
        (ReviewMode::Unresolved, PendingStage::AwaitingDecision) => "choose",
        (ReviewMode::Skipped, PendingStage::AwaitingDecision) => "confirm_presence",
    }
}

fn describe_choice(choice: Choice) -> String {
    match choice {
        Choice::Candidate(id) => format!("candidate {id}"),
        Choice::Manual(id) => format!("manual {id}"),
    }
}

fn centre_of(placement: Placement) -> Point {
    match placement {
        Placement::Point(p) => p,
        Placement::Span(a, b) => Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
    }
}

fn horizontal_extent(placement: Placement) -> (f64, f64) {
    match placement {
        Placement::Point(p) => (p.x, p.x),
        Placement::Span(a, b) => (a.x, b.x),
    }
}
