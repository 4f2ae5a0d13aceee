//! Review session configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReviewConfig {
    /// Label of the trailing "none of these" option on candidate prompts.
    pub manual_option_label: String,
    /// Radius in pixels of the circle drawn over an unresolved detection.
    pub overlay_radius: f64,
    /// Outline width in pixels of the box drawn over a skipped span.
    pub skip_box_outline_width: u32,
    /// A "yes, it is here" answer waits for a location before advancing.
    pub require_location_on_confirm: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            manual_option_label: "Manually label book".to_string(),
            overlay_radius: 30.0,
            skip_box_outline_width: 10,
            require_location_on_confirm: true,
        }
    }
}
