//! Rank catalog entries against a read label by call-number alignment.

use serde::{Deserialize, Serialize};
use shelfcheck_core::config::AlignmentConfig;
use shelfcheck_core::{CatalogId, CatalogLookup};
use tracing::{debug, warn};

use crate::alignment::EditCosts;
use crate::engine::distance;
use crate::tokenize::tokenize_label;

/// One ranked catalog candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMatch {
    pub id: CatalogId,
    /// Edit distance between the query tokens and the entry's call-number tokens.
    pub cost: u64,
    /// `1 - cost / worst`, in `[0, 1]`. 1.0 is an exact token match.
    pub similarity: f64,
}

pub struct CatalogMatcher {
    costs: EditCosts,
    max_matches: usize,
}

impl CatalogMatcher {
    pub fn new(costs: EditCosts, max_matches: usize) -> Self {
        Self { costs, max_matches }
    }

    pub fn from_config(config: &AlignmentConfig) -> Self {
        Self::new(EditCosts::from(config), config.max_ranked_matches)
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Best catalog matches for `query`, cheapest first, ties broken by id.
    pub fn rank<C: CatalogLookup + ?Sized>(&self, query: &str, catalog: &C) -> Vec<CatalogMatch> {
        let query_tokens = tokenize_label(query);
        let mut matches: Vec<CatalogMatch> = catalog
            .ids()
            .into_iter()
            .filter_map(|id| {
                let Some(entry) = catalog.entry(id) else {
                    warn!(%id, "catalog listed an id it cannot resolve");
                    return None;
                };
                let entry_tokens = tokenize_label(&entry.call_number);
                let cost = distance(&query_tokens, &entry_tokens, self.costs);
                Some(CatalogMatch {
                    id,
                    cost,
                    similarity: self.similarity(cost, query_tokens.len(), entry_tokens.len()),
                })
            })
            .collect();

        matches.sort_by(|x, y| x.cost.cmp(&y.cost).then(x.id.cmp(&y.id)));
        matches.truncate(self.max_matches);
        debug!(query, returned = matches.len(), "ranked catalog matches");
        matches
    }

    /// Cheapest match, if the catalog is non-empty.
    pub fn best<C: CatalogLookup + ?Sized>(&self, query: &str, catalog: &C) -> Option<CatalogMatch> {
        self.rank(query, catalog).into_iter().next()
    }

    fn similarity(&self, cost: u64, query_len: usize, entry_len: usize) -> f64 {
        // Deleting every query token and inserting every entry token bounds the distance.
        let worst = query_len as u64 * u64::from(self.costs.deletion)
            + entry_len as u64 * u64::from(self.costs.insertion);
        if worst == 0 {
            return 1.0;
        }
        (1.0 - cost as f64 / worst as f64).clamp(0.0, 1.0)
    }
}
