mod catalog_lookup;
mod record_source;

pub use catalog_lookup::CatalogLookup;
pub use record_source::RecordSource;
