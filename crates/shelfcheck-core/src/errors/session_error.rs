//! Review session errors.

use super::error_code::ShelfErrorCode;
use super::TraversalError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no item is pending a decision")]
    NoPendingItem,

    #[error("record {record} is awaiting {expected}, not {attempted}")]
    WrongMode {
        record: usize,
        expected: &'static str,
        attempted: &'static str,
    },

    #[error("option {choice} is not offered for record {record}")]
    InvalidChoice { record: usize, choice: String },

    #[error("snapshot refers to record {record} but only {available} records were loaded")]
    SnapshotMismatch { record: usize, available: usize },

    #[error("snapshot holds record {record} pending as {pending}, but the record is {actual}")]
    PendingModeMismatch {
        record: usize,
        pending: &'static str,
        actual: &'static str,
    },

    #[error("traversal error: {0}")]
    Traversal(#[from] TraversalError),
}

impl ShelfErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPendingItem => "SESSION_NO_PENDING_ITEM",
            Self::WrongMode { .. } => "SESSION_WRONG_MODE",
            Self::InvalidChoice { .. } => "SESSION_INVALID_CHOICE",
            Self::SnapshotMismatch { .. } => "SESSION_SNAPSHOT_MISMATCH",
            Self::PendingModeMismatch { .. } => "SESSION_PENDING_MODE_MISMATCH",
            Self::Traversal(e) => e.error_code(),
        }
    }
}
