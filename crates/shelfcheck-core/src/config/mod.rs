pub mod alignment_config;
pub mod observability_config;
pub mod review_config;

use serde::{Deserialize, Serialize};

pub use alignment_config::AlignmentConfig;
pub use observability_config::ObservabilityConfig;
pub use review_config::ReviewConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ShelfcheckConfig {
    pub alignment: AlignmentConfig,
    pub review: ReviewConfig,
    pub observability: ObservabilityConfig,
}

impl ShelfcheckConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
