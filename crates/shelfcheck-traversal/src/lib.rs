//! # shelfcheck-traversal
//!
//! Groups failed detections by source and walks them in review order.
//!
//! The walk is driven entirely by an explicit [`CursorState`]: [`advance`] is a
//! pure function from `(index, sources, state)` to `(outcome, next_state)`, so a
//! session can be stopped after any item and resumed from the saved state.
//!
//! Order: sources as given; within a source every unresolved record first,
//! then boundary-skipped groups in first-seen order, each group in record order.

pub mod cursor;
pub mod group_index;
pub mod traversal;

pub use cursor::{advance, advance_counted, CursorState, Outcome, ReviewMode, Visit};
pub use group_index::{GroupIndex, SkippedGroup, SourceBucket};
pub use traversal::{remaining, Traversal};
