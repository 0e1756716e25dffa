//! Core building blocks of the value model.
//!
//! ## Components
//!
//! - [`value`] - the central [`Value`] enum covering every runtime kind
//! - [`kind`] - [`ValueKind`] classification (a partition over values)
//! - [`error`] - the typed error for the few operations with a caller contract
//! - [`display`] - canonical rendering and the `dump` debug formatter
//! - [`path`] - dotted-path traversal and shape path enumeration
//! - [`serde`] - serde impls and `serde_json` interop
//!
//! Most users import the re-exports from the crate root.

pub mod display;
pub mod error;
pub mod kind;
pub mod path;
pub mod serde;
pub mod value;

pub use display::PrettyConfig;
pub use error::{ValueError, ValueResult};
pub use kind::ValueKind;
pub use path::{Path, PathSet};
pub use value::{Array, Object, Value};
