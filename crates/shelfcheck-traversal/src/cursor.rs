//! The review cursor: a pure state-transition function over [`CursorState`].

use serde::{Deserialize, Serialize};
use shelfcheck_core::errors::TraversalError;
use shelfcheck_core::SourceId;
use tracing::debug;

use crate::group_index::{GroupIndex, SourceBucket};

/// Which list of a source bucket the cursor is walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    /// Records with no boundary context; reviewed by picking a candidate.
    #[default]
    Unresolved,
    /// Records skipped between two neighbours; reviewed by yes/no confirmation.
    Skipped,
}

impl ReviewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Skipped => "skipped",
        }
    }
}

/// Complete traversal state. Nothing else influences what comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub source_index: usize,
    pub mode: ReviewMode,
    pub unresolved_cursor: usize,
    pub skipped_group_cursor: usize,
    pub skipped_item_cursor: usize,
}

impl CursorState {
    /// `(0, Unresolved, 0, 0, 0)`.
    pub const INITIAL: Self = Self {
        source_index: 0,
        mode: ReviewMode::Unresolved,
        unresolved_cursor: 0,
        skipped_group_cursor: 0,
        skipped_item_cursor: 0,
    };

    /// First skipped item of the same source.
    fn enter_skipped(self) -> Self {
        Self {
            mode: ReviewMode::Skipped,
            ..Self::at_source(self.source_index)
        }
    }

    /// First item of the following source.
    fn next_source(self) -> Self {
        Self::at_source(self.source_index + 1)
    }

    fn next_group(self) -> Self {
        Self {
            skipped_group_cursor: self.skipped_group_cursor + 1,
            skipped_item_cursor: 0,
            ..self
        }
    }

    fn at_source(source_index: usize) -> Self {
        Self {
            source_index,
            ..Self::INITIAL
        }
    }
}

/// A record to show the reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visit {
    pub record_index: usize,
    pub mode: ReviewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Item(Visit),
    Exhausted,
}

impl Outcome {
    pub fn visit(self) -> Option<Visit> {
        match self {
            Self::Item(v) => Some(v),
            Self::Exhausted => None,
        }
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

enum Step {
    Emit(Visit, CursorState),
    /// Nothing to show at this position; re-evaluate from the adjusted state.
    FallThrough(CursorState, &'static str),
}

/// Produce the next record to review and the state to resume from.
///
/// Pure: the same `(index, sources, state)` always yields the same result.
/// `sources` is the review order of sources; every entry up to the end must be
/// present in `index`. A `source_index` past the end of `sources` is exhausted.
pub fn advance(
    index: &GroupIndex,
    sources: &[SourceId],
    state: CursorState,
) -> Result<(Outcome, CursorState), TraversalError> {
    advance_counted(index, sources, state).map(|(outcome, next, _)| (outcome, next))
}

/// [`advance`], also reporting how many fall-throughs it took to get there.
///
/// Every fall-through moves to a later mode, group or source, so the count is
/// at most `3 + groups` of the source the state starts in, for any state.
pub fn advance_counted(
    index: &GroupIndex,
    sources: &[SourceId],
    state: CursorState,
) -> Result<(Outcome, CursorState, usize), TraversalError> {
    let mut state = state;
    let mut fall_throughs = 0;
    loop {
        let Some(source_id) = sources.get(state.source_index) else {
            return Ok((Outcome::Exhausted, state, fall_throughs));
        };
        let bucket = index
            .bucket(source_id)
            .ok_or_else(|| TraversalError::UnknownSource {
                source_id: source_id.to_string(),
                position: state.source_index,
            })?;

        match step(bucket, state) {
            Step::Emit(visit, next) => {
                debug!(
                    source = %source_id,
                    record = visit.record_index,
                    mode = visit.mode.as_str(),
                    ?next,
                    "cursor emitted record"
                );
                return Ok((Outcome::Item(visit), next, fall_throughs));
            }
            Step::FallThrough(next, reason) => {
                debug!(source = %source_id, reason, ?next, "cursor fell through");
                fall_throughs += 1;
                state = next;
            }
        }
    }
}

fn step(bucket: &SourceBucket, state: CursorState) -> Step {
    match state.mode {
        ReviewMode::Unresolved => {
            let unresolved = &bucket.unresolved;
            if unresolved.is_empty() {
                return Step::FallThrough(state.enter_skipped(), "no unresolved records");
            }
            let Some(&record_index) = unresolved.get(state.unresolved_cursor) else {
                return Step::FallThrough(state.enter_skipped(), "unresolved records done");
            };

            let mut next = CursorState {
                unresolved_cursor: state.unresolved_cursor + 1,
                ..state
            };
            // Switch now so the next call starts on a skipped record directly.
            if next.unresolved_cursor >= unresolved.len() {
                next = next.enter_skipped();
            }
            Step::Emit(
                Visit {
                    record_index,
                    mode: ReviewMode::Unresolved,
                },
                next,
            )
        }
        ReviewMode::Skipped => {
            let skipped = &bucket.skipped;
            if skipped.is_empty() {
                return Step::FallThrough(state.next_source(), "no skipped groups");
            }
            let Some(group) = skipped.get(state.skipped_group_cursor) else {
                return Step::FallThrough(state.next_source(), "skipped groups done");
            };
            let Some(&record_index) = group.records.get(state.skipped_item_cursor) else {
                return Step::FallThrough(state.next_group(), "group done");
            };

            let mut next = CursorState {
                skipped_item_cursor: state.skipped_item_cursor + 1,
                ..state
            };
            if next.skipped_item_cursor >= group.len() {
                next = next.next_group();
            }
            Step::Emit(
                Visit {
                    record_index,
                    mode: ReviewMode::Skipped,
                },
                next,
            )
        }
    }
}
