//! # shelfcheck-core
//!
//! Foundation crate for the shelf review engine.
//! Defines the detection data model, the catalog, errors, config, and tracing.
//! Every other crate in the workspace depends on this.

pub mod collections;
pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use collections::FxHashMap;
pub use config::ShelfcheckConfig;
pub use errors::{ShelfError, ShelfErrorCode, ShelfResult};
pub use models::{
    BoundaryKey, Catalog, CatalogEntry, CatalogId, DetectionRecord, Placement, Point,
    RawDetectionRecord, SourceId,
};
pub use traits::{CatalogLookup, RecordSource};
