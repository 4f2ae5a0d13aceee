//! Reviewer corrections collected over a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfcheck_core::{CatalogId, FxHashMap};

use crate::decision::Verdict;

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub record_index: usize,
    /// The catalog item the decision is about. `None` for a skipped record with no known candidate.
    pub catalog_id: Option<CatalogId>,
    pub verdict: Verdict,
    pub recorded_at: DateTime<Utc>,
}

/// Corrections keyed by catalog item.
///
/// A later correction for the same catalog id replaces the earlier one in
/// place. Corrections without a catalog id always take a new slot.
#[derive(Debug, Clone, Default)]
pub struct CorrectionLedger {
    entries: Vec<Correction>,
    slots: FxHashMap<CatalogId, usize>,
    recent: Vec<usize>,
}

impl CorrectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from saved corrections. Nothing is marked recent.
    pub fn from_corrections(corrections: Vec<Correction>) -> Self {
        let mut ledger = Self::new();
        for c in corrections {
            ledger.record(c);
        }
        ledger.recent.clear();
        ledger
    }

    /// Add or update; returns the slot the correction now occupies.
    pub fn record(&mut self, correction: Correction) -> usize {
        let slot = match correction.catalog_id.and_then(|id| self.slots.get(&id).copied()) {
            Some(slot) => {
                self.entries[slot] = correction;
                slot
            }
            None => {
                let slot = self.entries.len();
                if let Some(id) = correction.catalog_id {
                    self.slots.insert(id, slot);
                }
                self.entries.push(correction);
                slot
            }
        };
        if !self.recent.contains(&slot) {
            self.recent.push(slot);
        }
        slot
    }

    /// Slots touched since the last call, in first-touched order.
    pub fn take_recent(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.recent)
    }

    pub fn get(&self, slot: usize) -> Option<&Correction> {
        self.entries.get(slot)
    }

    pub fn for_catalog_id(&self, id: CatalogId) -> Option<&Correction> {
        self.slots.get(&id).map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Correction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Correction> {
        self.entries.clone()
    }
}
