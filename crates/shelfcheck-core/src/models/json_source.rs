//! Record source backed by an in-memory JSON document.

use tracing::info;

use super::record::{ingest_records, DetectionRecord, RawDetectionRecord};
use crate::errors::{IngestError, ShelfResult};
use crate::traits::RecordSource;

/// Reads a JSON array of raw records.
pub struct JsonRecordSource {
    payload: String,
}

impl JsonRecordSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl RecordSource for JsonRecordSource {
    fn load(&self) -> ShelfResult<Vec<DetectionRecord>> {
        let raw: Vec<RawDetectionRecord> =
            serde_json::from_str(&self.payload).map_err(IngestError::from)?;
        let records = ingest_records(raw)?;
        info!(records = records.len(), "loaded detection records");
        Ok(records)
    }
}
