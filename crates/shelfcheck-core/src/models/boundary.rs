//! Boundary keys: the pair of neighbouring detections a skipped item sits between.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized, hashable boundary key.
///
/// Upstream emits the neighbour pair either as a two-element array or as an
/// object with `left`/`right` fields. Both shapes collapse to this type at
/// ingestion; nothing downstream ever sees the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryKey {
    pub left: u32,
    pub right: u32,
}

impl BoundaryKey {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Normalize a dynamically-shaped boundary value.
    ///
    /// Returns a human-readable reason on failure; the caller attaches the record index.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => {
                if items.len() != 2 {
                    return Err(format!("expected 2 neighbours, found {}", items.len()));
                }
                Ok(Self {
                    left: neighbour(&items[0], "left")?,
                    right: neighbour(&items[1], "right")?,
                })
            }
            Value::Object(fields) => {
                let left = fields.get("left").ok_or("missing field `left`")?;
                let right = fields.get("right").ok_or("missing field `right`")?;
                Ok(Self {
                    left: neighbour(left, "left")?,
                    right: neighbour(right, "right")?,
                })
            }
            other => Err(format!("expected array or object, found {}", kind(other))),
        }
    }
}

impl fmt::Display for BoundaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

fn neighbour(value: &Value, side: &str) -> Result<u32, String> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("{side} neighbour is not a non-negative index: {value}"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
