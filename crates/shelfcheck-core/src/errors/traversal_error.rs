//! Traversal cursor errors.

use super::error_code::ShelfErrorCode;

/// Precondition violations rejected by the traversal cursor.
///
/// Running out of items is not an error; it is reported as an exhausted outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    #[error("source {source_id:?} at position {position} is not present in the group index")]
    UnknownSource { source_id: String, position: usize },
}

impl ShelfErrorCode for TraversalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSource { .. } => "TRAVERSAL_UNKNOWN_SOURCE",
        }
    }
}
