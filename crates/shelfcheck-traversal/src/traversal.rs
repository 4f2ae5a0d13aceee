//! Iterator and counting helpers layered over [`advance`].

use shelfcheck_core::errors::TraversalError;
use shelfcheck_core::SourceId;

use crate::cursor::{advance, CursorState, Outcome, Visit};
use crate::group_index::GroupIndex;

/// Walks the review order from a given cursor.
///
/// Yields `Ok(visit)` per record, then stops. An unknown source yields one
/// `Err` and then stops. [`Traversal::state`] is always the state to resume from.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    index: &'a GroupIndex,
    sources: &'a [SourceId],
    state: CursorState,
    finished: bool,
}

impl<'a> Traversal<'a> {
    pub fn new(index: &'a GroupIndex, sources: &'a [SourceId]) -> Self {
        Self::resume(index, sources, CursorState::INITIAL)
    }

    pub fn resume(index: &'a GroupIndex, sources: &'a [SourceId], state: CursorState) -> Self {
        Self {
            index,
            sources,
            state,
            finished: false,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl Iterator for Traversal<'_> {
    type Item = Result<Visit, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match advance(self.index, self.sources, self.state) {
            Ok((Outcome::Item(visit), next)) => {
                self.state = next;
                Some(Ok(visit))
            }
            Ok((Outcome::Exhausted, next)) => {
                self.state = next;
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Traversal<'_> {}

/// Number of records still to be emitted from `state`.
pub fn remaining(
    index: &GroupIndex,
    sources: &[SourceId],
    state: CursorState,
) -> Result<usize, TraversalError> {
    Traversal::resume(index, sources, state).try_fold(0usize, |n, visit| visit.map(|_| n + 1))
}
