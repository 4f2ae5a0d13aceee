//! Serializable session state for stop-and-resume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfcheck_core::SourceId;
use shelfcheck_traversal::{CursorState, Visit};

use crate::ledger::Correction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingStage {
    AwaitingDecision,
    /// Presence confirmed, location not yet marked.
    AwaitingLocation,
}

/// The record currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingItem {
    pub visit: Visit,
    pub stage: PendingStage,
}

/// Everything needed to rebuild a session over the same records and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    /// State to advance from once the pending item is settled.
    pub cursor: CursorState,
    pub pending: Option<PendingItem>,
    pub sources: Vec<SourceId>,
    pub corrections: Vec<Correction>,
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
