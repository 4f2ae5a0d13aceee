//! Record ingestion errors.

use super::error_code::ShelfErrorCode;

/// Errors raised while turning raw pipeline output into detection records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed boundary key on record {record}: {reason}")]
    MalformedBoundaryKey { record: usize, reason: String },

    #[error("record {record} has an empty source id")]
    EmptySourceId { record: usize },

    #[error("record payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ShelfErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedBoundaryKey { .. } => "INGEST_MALFORMED_BOUNDARY_KEY",
            Self::EmptySourceId { .. } => "INGEST_EMPTY_SOURCE_ID",
            Self::Decode(_) => "INGEST_DECODE",
        }
    }
}
