//! Runtime kind classification, value coercion and nested-path access.
//!
//! `kindof` is a small toolkit for working with loosely-typed, dynamic data:
//!
//! - **Classification**: [`Value`] is an owned tagged union over the runtime
//!   kinds (null, undefined, boolean, number, string, array, object, date,
//!   regexp, error); [`ValueKind`] is the matching closed tag set and
//!   classification is a partition: exactly one kind per value.
//! - **Equality & membership**: [`compare`] provides deep equality with
//!   same-value number semantics (NaN equals NaN, +0.0 and -0.0 differ),
//!   kind-dispatched membership and first-occurrence deduplication.
//! - **Coercion**: the `coerce_*`/`ensure_*` methods convert any value into
//!   a target kind under a fixed fallback policy, with `None` as the absent
//!   marker and zero-value defaults where they exist.
//! - **Nested paths**: dotted-path read/write ([`Value::get_path`],
//!   [`Value::set_path`]), segment-wise checks, and [`PathSet`] for
//!   enumerating and validating a shape's legal paths up front.
//!
//! Everything is synchronous and pure; the single side effect in the crate is
//! [`Value::set_path`]'s in-place mutation.
//!
//! ```rust
//! use kindof::{json, Value};
//!
//! let mut user = Value::from(json!({"profile": {"age": "42"}}));
//!
//! let age = user.get_path("profile.age").map(Value::ensure_number);
//! assert_eq!(age, Some(42.0));
//!
//! user.set_path("profile.age", Value::number(43.0)).unwrap();
//! assert_eq!(user.kind_at("profile.age"), Some(kindof::ValueKind::Number));
//! ```

#![warn(clippy::all)]

pub mod coerce;
pub mod compare;
pub mod core;
pub mod strings;

// Re-export core types
pub use self::core::{
    display::PrettyConfig,
    error::{ValueError, ValueResult},
    kind::ValueKind,
    path::{Path, PathSet},
    value::{Array, Object, Value},
};

pub use coerce::is_valid_email;
pub use compare::{deep_equal, dedupe, is_equal_arrays, is_equal_objects, is_in_array, same_value};

// Re-export serde_json::json! for convenient Value construction
pub use serde_json::json;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Array, Object, Path, PathSet, Value, ValueError, ValueKind, ValueResult};
    pub use crate::{dedupe, deep_equal, is_in_array};
    pub use serde_json::json;
}
