//! Detection records produced by the scanning pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BoundaryKey, CatalogId};
use crate::errors::IngestError;

/// Opaque identifier of the originating image or scan.
///
/// Only ever compared for equality; sources carry no ordering of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Image-space location. `z` is present when the pipeline had depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }
}

/// Where a record sits in its source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Centre of an observed but unidentified item.
    Point(Point),
    /// The two neighbouring positions a skipped item was expected between.
    Span(Point, Point),
}

/// Record as delivered by the upstream pipeline, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDetectionRecord {
    pub source_id: String,
    #[serde(default, alias = "between_indices")]
    pub boundary: Option<Value>,
    #[serde(default)]
    pub candidate_ids: Option<Value>,
    #[serde(default)]
    pub placement: Option<Placement>,
}

/// One observed-but-unresolved item. Immutable for the life of a review session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub source_id: SourceId,
    /// Absent for unresolved records, present for boundary-skipped ones.
    pub boundary_key: Option<BoundaryKey>,
    /// Ranked catalog candidates. Gaps are kept so positions stay meaningful.
    pub candidate_ids: Vec<Option<CatalogId>>,
    pub placement: Option<Placement>,
}

impl DetectionRecord {
    /// Normalize a raw record. `index` is only used for error reporting.
    pub fn from_raw(index: usize, raw: RawDetectionRecord) -> Result<Self, IngestError> {
        if raw.source_id.is_empty() {
            return Err(IngestError::EmptySourceId { record: index });
        }

        let boundary_key = match raw.boundary {
            None | Some(Value::Null) => None,
            Some(value) => Some(BoundaryKey::from_value(&value).map_err(|reason| {
                IngestError::MalformedBoundaryKey {
                    record: index,
                    reason,
                }
            })?),
        };

        Ok(Self {
            source_id: SourceId(raw.source_id),
            boundary_key,
            candidate_ids: normalize_candidates(raw.candidate_ids),
            placement: raw.placement,
        })
    }

    pub fn is_unresolved(&self) -> bool {
        self.boundary_key.is_none()
    }

    /// Candidate ids with the gaps removed, in rank order.
    pub fn known_candidates(&self) -> impl Iterator<Item = CatalogId> + '_ {
        self.candidate_ids.iter().flatten().copied()
    }

    pub fn first_candidate(&self) -> Option<CatalogId> {
        self.known_candidates().next()
    }
}

/// Normalize a whole batch, failing on the first malformed record.
pub fn ingest_records(raw: Vec<RawDetectionRecord>) -> Result<Vec<DetectionRecord>, IngestError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| DetectionRecord::from_raw(i, r))
        .collect()
}

// Candidate lists are best-effort: anything that is not an array yields no
// candidates, and entries that are not ids become gaps.
fn normalize_candidates(value: Option<Value>) -> Vec<Option<CatalogId>> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_u64().and_then(|n| u32::try_from(n).ok()).map(CatalogId))
            .collect(),
        Some(Value::Number(n)) => vec![n.as_u64().and_then(|n| u32::try_from(n).ok()).map(CatalogId)],
        _ => Vec::new(),
    }
}
