//! # shelfcheck-align
//!
//! Wagner–Fischer edit distance over arbitrary comparable elements, with
//! asymmetric operation costs and a full traceback script. Used to compare
//! tokenized labels against catalog entries.

pub mod alignment;
pub mod engine;
pub mod matcher;
pub mod tokenize;

pub use alignment::{AlignmentResult, EditCosts, EditOp, Slot};
pub use engine::{align, distance};
pub use matcher::{CatalogMatch, CatalogMatcher};
pub use tokenize::tokenize_label;
