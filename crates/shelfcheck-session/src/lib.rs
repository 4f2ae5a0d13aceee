//! # shelfcheck-session
//!
//! Drives a reviewer through the failed detections of a shelf scan.
//!
//! A [`ReviewSession`] owns the records, the group index, and the traversal
//! cursor. Each call to [`ReviewSession::next`] shows one record as a
//! [`ReviewPrompt`]; the reviewer's decision is recorded in the
//! [`CorrectionLedger`] and the cursor moves on. A session can be saved as a
//! [`SessionSnapshot`] at any point and resumed later.

pub mod decision;
pub mod ledger;
pub mod prompt;
pub mod session;
pub mod snapshot;

pub use decision::{Choice, Verdict};
pub use ledger::{Correction, CorrectionLedger};
pub use prompt::{CatalogOption, OverlayHint, PromptBody, ReviewPrompt, SessionStep};
pub use session::ReviewSession;
pub use snapshot::{PendingItem, PendingStage, SessionSnapshot};
