mod boundary;
mod catalog;
mod json_source;
mod record;

pub use boundary::BoundaryKey;
pub use catalog::{Catalog, CatalogEntry, CatalogId};
pub use json_source::JsonRecordSource;
pub use record::{ingest_records, DetectionRecord, Placement, Point, RawDetectionRecord, SourceId};
