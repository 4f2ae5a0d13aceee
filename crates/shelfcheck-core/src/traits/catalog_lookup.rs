use crate::models::{CatalogEntry, CatalogId};

/// Maps candidate identifiers to catalog entries and display labels.
pub trait CatalogLookup {
    fn entry(&self, id: CatalogId) -> Option<&CatalogEntry>;

    /// Every id the catalog knows, in display order.
    fn ids(&self) -> Vec<CatalogId>;

    fn label(&self, id: CatalogId) -> Option<String> {
        self.entry(id).and_then(CatalogEntry::label)
    }
}
