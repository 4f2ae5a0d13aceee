//! Alignment result types.

use std::fmt;

use serde::{Deserialize, Serialize};
use shelfcheck_core::config::AlignmentConfig;

/// Per-operation costs. A match is always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCosts {
    pub insertion: u32,
    pub deletion: u32,
    pub substitution: u32,
}

impl EditCosts {
    pub const UNIT: Self = Self {
        insertion: 1,
        deletion: 1,
        substitution: 1,
    };

    pub fn new(insertion: u32, deletion: u32, substitution: u32) -> Self {
        Self {
            insertion,
            deletion,
            substitution,
        }
    }

    /// Cost charged for a single operation.
    pub fn of(&self, op: EditOp) -> u64 {
        match op {
            EditOp::Match => 0,
            EditOp::Substitute => u64::from(self.substitution),
            EditOp::Delete => u64::from(self.deletion),
            EditOp::Insert => u64::from(self.insertion),
        }
    }
}

impl Default for EditCosts {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<&AlignmentConfig> for EditCosts {
    fn from(config: &AlignmentConfig) -> Self {
        Self {
            insertion: config.insertion_cost,
            deletion: config.deletion_cost,
            substitution: config.substitution_cost,
        }
    }
}

/// One column of an alignment script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOp {
    Match,
    Substitute,
    /// Element of A with no counterpart in B.
    Delete,
    /// Element of B with no counterpart in A.
    Insert,
}

impl EditOp {
    pub fn symbol(self) -> char {
        match self {
            Self::Match => '=',
            Self::Substitute => '*',
            Self::Delete => 'v',
            Self::Insert => '^',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Match),
            '*' => Some(Self::Substitute),
            'v' => Some(Self::Delete),
            '^' => Some(Self::Insert),
            _ => None,
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An aligned position: an element of the original sequence, or a placeholder.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Item(&'a T),
    Gap,
}

// Manual impls: a slot only holds a reference, so it is Copy for any T.
impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    pub fn item(self) -> Option<&'a T> {
        match self {
            Self::Item(t) => Some(t),
            Self::Gap => None,
        }
    }

    pub fn is_gap(self) -> bool {
        matches!(self, Self::Gap)
    }
}

/// Column-by-column alignment of two sequences.
///
/// Invariant: `ops`, `aligned_a` and `aligned_b` have equal length, and column
/// `k` of each describes the same step, in forward order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<'a, T> {
    pub aligned_a: Vec<Slot<'a, T>>,
    pub aligned_b: Vec<Slot<'a, T>>,
    pub ops: Vec<EditOp>,
}

impl<'a, T> AlignmentResult<'a, T> {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Opcode string, e.g. `"v*=v="`.
    pub fn script(&self) -> String {
        self.ops.iter().map(|op| op.symbol()).collect()
    }

    /// A with placeholders removed.
    pub fn strip_a(&self) -> Vec<&'a T> {
        self.aligned_a.iter().filter_map(|s| s.item()).collect()
    }

    /// B with placeholders removed.
    pub fn strip_b(&self) -> Vec<&'a T> {
        self.aligned_b.iter().filter_map(|s| s.item()).collect()
    }

    /// Sum of per-column costs under `costs`.
    pub fn script_cost(&self, costs: &EditCosts) -> u64 {
        self.ops.iter().map(|op| costs.of(*op)).sum()
    }

    /// Iterate `(op, a, b)` columns in order.
    pub fn columns(&self) -> impl Iterator<Item = (EditOp, Slot<'a, T>, Slot<'a, T>)> + '_ {
        self.ops
            .iter()
            .zip(self.aligned_a.iter().zip(self.aligned_b.iter()))
            .map(|(op, (a, b))| (*op, *a, *b))
    }
}
