//! Reviewer inputs and the verdicts they produce.

use serde::{Deserialize, Serialize};
use shelfcheck_core::{CatalogId, Point};

/// Answer to a candidate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// One of the record's own candidates.
    Candidate(CatalogId),
    /// Any labelled catalog entry, picked through the manual option.
    Manual(CatalogId),
}

impl Choice {
    pub fn id(self) -> CatalogId {
        match self {
            Self::Candidate(id) | Self::Manual(id) => id,
        }
    }
}

/// What the reviewer decided about one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// An unresolved record was labelled.
    Identified { manual: bool },
    /// The expected item is not in the skipped span.
    NotPresent,
    /// The expected item is in the skipped span, optionally at a marked location.
    Confirmed { location: Option<Point> },
}
