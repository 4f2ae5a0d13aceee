//! What the reviewer is shown for one record.

use serde::{Deserialize, Serialize};
use shelfcheck_core::{CatalogId, Point, SourceId};
use shelfcheck_traversal::ReviewMode;

/// A selectable catalog entry with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: CatalogId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromptBody {
    /// Pick one of `options`, or fall back to `manual_label` and pick from `manual_options`.
    ChooseCandidate {
        options: Vec<CatalogOption>,
        manual_label: String,
        manual_options: Vec<CatalogOption>,
    },
    /// Yes/no: is `target` inside the highlighted span.
    ConfirmPresence {
        target: Option<CatalogOption>,
        question: String,
    },
}

/// Drawing instruction for the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OverlayHint {
    Circle { center: Point, radius: f64 },
    SkipBox {
        left_x: f64,
        right_x: f64,
        outline_width: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPrompt {
    pub record_index: usize,
    pub source_id: SourceId,
    pub mode: ReviewMode,
    pub body: PromptBody,
    /// Absent when the record carries no placement.
    pub overlay: Option<OverlayHint>,
}

/// Result of any session transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum SessionStep {
    Prompt(ReviewPrompt),
    /// A presence was confirmed; the session waits for [`mark_location`](crate::ReviewSession::mark_location).
    AwaitingLocation { record_index: usize },
    Exhausted,
}

impl SessionStep {
    pub fn prompt(&self) -> Option<&ReviewPrompt> {
        match self {
            Self::Prompt(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
