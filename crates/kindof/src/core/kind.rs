//! Value kinds and classification.
//!
//! This module defines `ValueKind`, a lightweight closed classification for
//! `Value`. Classification is a partition: for any value exactly one kind
//! applies, and `ValueKind::of` is the single dispatch point every higher
//! layer (coercion, membership, path access) builds on.
//!
//! Quick example:
//! ```rust
//! use kindof::{Value, ValueKind};
//!
//! let v = Value::from(3.14);
//! assert_eq!(ValueKind::of(&v), ValueKind::Number);
//! assert_eq!(ValueKind::Number.name(), "number");
//! ```
//!
//! Note the one asymmetry inherited from the value model: a `Number` whose
//! payload is NaN still classifies as `ValueKind::Number`, but fails the
//! `Value::is_number` predicate. Consumers that dispatch on `is_number`
//! therefore route NaN to their "none of the above" branch.

use crate::core::value::Value;
use core::fmt::{Display, Formatter};

/// Represents the kind of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Date,
    Regexp,
    Error,
}

impl ValueKind {
    /// Get all available kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Undefined,
            Self::Null,
            Self::Boolean,
            Self::Number,
            Self::String,
            Self::Array,
            Self::Object,
            Self::Date,
            Self::Regexp,
            Self::Error,
        ]
    }

    /// Get the kind of a Value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Date(_) => Self::Date,
            Value::Regexp(_) => Self::Regexp,
            Value::Error(_) => Self::Error,
        }
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is scalar (not a collection)
    pub const fn is_scalar(&self) -> bool {
        !self.is_collection()
    }

    /// Check if this kind represents the absence of a value
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Parse from a kind name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undefined" => Some(Self::Undefined),
            "null" | "nil" | "none" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Boolean),
            "number" | "float" | "f64" => Some(Self::Number),
            "string" | "str" | "text" => Some(Self::String),
            "array" | "list" | "vec" => Some(Self::Array),
            "object" | "map" | "dict" => Some(Self::Object),
            "date" | "datetime" => Some(Self::Date),
            "regexp" | "regex" => Some(Self::Regexp),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::Regexp => "regexp",
            Self::Error => "error",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
