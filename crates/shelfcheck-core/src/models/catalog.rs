//! Reference catalog of known items.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::FxHashMap;
use crate::errors::CatalogError;
use crate::traits::CatalogLookup;

/// Identifier of a catalog entry. Rendered as its decimal string, which is
/// also how the catalog file keys its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(pub u32);

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogEntry {
    #[serde(default)]
    pub call_number: String,
    #[serde(default)]
    pub alt_title: String,
    #[serde(default)]
    pub lang: Option<String>,
}

impl CatalogEntry {
    pub fn new(call_number: impl Into<String>, alt_title: impl Into<String>) -> Self {
        Self {
            call_number: call_number.into(),
            alt_title: alt_title.into(),
            lang: None,
        }
    }

    /// `"{call_number}, {alt_title}"`, or `None` when both parts are blank.
    pub fn label(&self) -> Option<String> {
        let call = self.call_number.trim();
        let title = self.alt_title.trim();
        if call.is_empty() && title.is_empty() {
            return None;
        }
        Some(format!("{call}, {title}"))
    }
}

/// In-memory catalog ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<CatalogId, CatalogEntry>,
    by_call_number: FxHashMap<String, CatalogId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (CatalogId, CatalogEntry)>) -> Self {
        let mut catalog = Self::new();
        for (id, entry) in entries {
            catalog.insert(id, entry);
        }
        catalog
    }

    /// Parse the catalog file shape: a JSON object keyed by decimal id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, CatalogEntry> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (key, entry) in raw {
            let id = key
                .trim()
                .parse::<u32>()
                .map_err(|_| CatalogError::InvalidId { key: key.clone() })?;
            catalog.insert(CatalogId(id), entry);
        }
        Ok(catalog)
    }

    /// Insert or replace an entry. Returns the previous entry for `id`, if any.
    pub fn insert(&mut self, id: CatalogId, entry: CatalogEntry) -> Option<CatalogEntry> {
        let call = entry.call_number.trim().to_string();
        let previous = self.entries.insert(id, entry);
        if let Some(prev) = &previous {
            let prev_call = prev.call_number.trim();
            if self.by_call_number.get(prev_call) == Some(&id) {
                self.by_call_number.remove(prev_call);
            }
        }
        if !call.is_empty() {
            self.by_call_number.insert(call, id);
        }
        previous
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CatalogId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CatalogId, &CatalogEntry)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }

    /// Reverse lookup on the trimmed call number.
    pub fn id_for_call_number(&self, call_number: &str) -> Option<CatalogId> {
        self.by_call_number.get(call_number.trim()).copied()
    }
}

impl CatalogLookup for Catalog {
    fn entry(&self, id: CatalogId) -> Option<&CatalogEntry> {
        self.get(id)
    }

    fn ids(&self) -> Vec<CatalogId> {
        self.entries.keys().copied().collect()
    }
}
