use super::{CatalogError, IngestError, SessionError, ShelfErrorCode, TraversalError};

/// Top-level error type for the shelf review engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ShelfErrorCode for ShelfError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Traversal(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Convenience type alias.
pub type ShelfResult<T> = Result<T, ShelfError>;
