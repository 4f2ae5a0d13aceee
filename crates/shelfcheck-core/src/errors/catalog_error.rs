//! Catalog loading errors.

use super::error_code::ShelfErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog id: {key:?}")]
    InvalidId { key: String },

    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ShelfErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "CATALOG_INVALID_ID",
            Self::Decode(_) => "CATALOG_DECODE",
        }
    }
}
