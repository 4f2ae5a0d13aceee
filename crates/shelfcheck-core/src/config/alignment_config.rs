//! Alignment engine configuration.

use serde::{Deserialize, Serialize};

/// Operation costs and ranking limits for label alignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlignmentConfig {
    pub insertion_cost: u32,
    pub deletion_cost: u32,
    pub substitution_cost: u32,
    /// Upper bound on catalog matches returned by a ranking call.
    pub max_ranked_matches: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            insertion_cost: 1,
            deletion_cost: 1,
            substitution_cost: 1,
            max_ranked_matches: 5,
        }
    }
}
