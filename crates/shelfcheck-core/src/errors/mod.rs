mod catalog_error;
mod error_code;
mod ingest_error;
mod session_error;
mod shelf_error;
mod traversal_error;

pub use catalog_error::CatalogError;
pub use error_code::ShelfErrorCode;
pub use ingest_error::IngestError;
pub use session_error::SessionError;
pub use shelf_error::{ShelfError, ShelfResult};
pub use traversal_error::TraversalError;
