use crate::errors::ShelfResult;
use crate::models::DetectionRecord;

/// Supplies the immutable record sequence a review session is built from.
pub trait RecordSource {
    fn load(&self) -> ShelfResult<Vec<DetectionRecord>>;
}
