//! Nested-path access for `Value`.
//!
//! Dotted paths (`"user.address.city"`) locate values inside nested objects.
//! Two access styles coexist:
//!
//! - **Runtime-checked traversal**: [`Value::get_path`] degrades gracefully
//!   to `None` on any invalid path; [`Value::set_path`] is the one operation
//!   in the crate with a caller contract and a typed error.
//! - **Shape validation up front**: [`PathSet::of`] enumerates every legal
//!   path of a shape once, so callers holding path constants can validate
//!   them against a prototype value at startup instead of discovering typos
//!   at traversal time. Runtime traversal never re-validates against a shape;
//!   it just walks segments.
//!
//! Arrays are leaves for path purposes: a segment never indexes into an
//! array, only into an object.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::core::error::{ValueError, ValueResult};
use crate::core::kind::ValueKind;
use crate::core::value::{Object, Value};

/// A parsed dot-delimited path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a dotted path string.
    ///
    /// Rejects the empty string; every other input splits on `.` as-is, so a
    /// path with empty segments parses but will never resolve.
    pub fn parse(path: &str) -> ValueResult<Self> {
        if path.is_empty() {
            return Err(ValueError::parse_error("path", path));
        }
        Ok(Self {
            segments: path.split('.').map(str::to_owned).collect(),
        })
    }

    /// The path's segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A path always has at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// The set of legal dotted paths through a shape.
///
/// Every non-empty chain of keys descending through nested objects is legal;
/// object-valued keys contribute both their own path and their sub-paths.
/// This is the runtime reflection of a compile-time "paths of a shape"
/// computation: enumerate once, validate constants, then trust runtime
/// traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: BTreeSet<String>,
}

impl PathSet {
    /// Enumerate every legal path of the given shape.
    ///
    /// Non-object shapes have no legal paths.
    pub fn of(shape: &Value) -> Self {
        let mut paths = BTreeSet::new();
        if let Value::Object(map) = shape {
            collect_paths(map, None, &mut paths);
        }
        Self { paths }
    }

    /// Check whether a path is legal for the shape
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Validate a path constant against the shape, for startup checks
    pub fn validate(&self, path: &str) -> ValueResult<()> {
        if self.contains(path) {
            Ok(())
        } else {
            Err(ValueError::path_not_found(path))
        }
    }

    /// Iterate the legal paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Number of legal paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the shape has no legal paths
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn collect_paths(map: &Object, prefix: Option<&str>, out: &mut BTreeSet<String>) {
    for (key, value) in map {
        // Undefined keys are absent to traversal, so they are not paths.
        if value.is_undefined() {
            continue;
        }
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        if let Value::Object(sub) = value {
            collect_paths(sub, Some(&path), out);
        }
        out.insert(path);
    }
}

impl Value {
    // ==================== Path-based access ====================

    /// Read the value at a dotted path.
    ///
    /// Returns `None` if the receiver is not an object, or if any segment
    /// fails to resolve: a missing key, an undefined value, or an attempt to
    /// index past a non-object (scalars and arrays own no keys). Stored
    /// nulls resolve; only absence fails.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        if !self.is_object() {
            return None;
        }
        let mut current = self;
        for segment in path.split('.') {
            match current.as_object().and_then(|map| map.get(segment)) {
                None | Some(Value::Undefined) => {
                    trace!(path, segment, "path lookup missed");
                    return None;
                }
                Some(next) => current = next,
            }
        }
        Some(current)
    }

    /// The kind of the value reachable at a path, if any
    #[must_use]
    pub fn kind_at(&self, path: &str) -> Option<ValueKind> {
        self.get_path(path).map(Value::kind)
    }

    /// Write `value` at a dotted path, mutating in place.
    ///
    /// Every segment except the last must already resolve to an object;
    /// nothing is created along the way. Violating that is a caller error and
    /// surfaces as a typed error, making this the only operation in the crate
    /// that propagates failure instead of substituting a fallback.
    pub fn set_path(&mut self, path: &str, value: Value) -> ValueResult<()> {
        let parsed = Path::parse(path)?;
        let (last, intermediate) = parsed
            .segments()
            .split_last()
            .ok_or_else(|| ValueError::parse_error("path", path))?;

        let mut current = self;
        for segment in intermediate {
            let kind = current.kind();
            let map = current.as_object_mut().ok_or_else(|| {
                debug!(path, segment = segment.as_str(), "set_path hit a non-object");
                ValueError::type_mismatch(ValueKind::Object.name(), kind.name()).at_path(path)
            })?;
            current = map
                .get_mut(segment.as_str())
                .ok_or_else(|| ValueError::path_not_found(path))?;
        }

        let kind = current.kind();
        let map = current
            .as_object_mut()
            .ok_or_else(|| ValueError::type_mismatch(ValueKind::Object.name(), kind.name()).at_path(path))?;
        map.insert(last.clone(), value);
        Ok(())
    }

    /// Check that every key in an explicit segment chain is present.
    ///
    /// Presence is what is tested: a key holding undefined still counts as
    /// present, matching key-ownership semantics rather than value lookup.
    #[must_use]
    pub fn check_nested(&self, segments: &[&str]) -> bool {
        let mut current = self;
        for key in segments {
            match current.as_object().and_then(|map| map.get(*key)) {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }

    /// Walk an explicit segment chain and return the final value only if it
    /// is itself an object; a missing segment or a non-object leaf is `None`.
    #[must_use]
    pub fn parse_object(&self, segments: &[&str]) -> Option<&Value> {
        let mut current = self;
        for key in segments {
            current = current.as_object().and_then(|map| map.get(*key))?;
        }
        current.is_object().then_some(current)
    }

    /// Shallow-copy an object, dropping keys whose values carry no
    /// information: undefined, `false`, null, NaN, or an empty object.
    /// Non-object input is returned unchanged.
    #[must_use]
    pub fn clean_object(&self) -> Value {
        match self {
            Self::Object(map) => {
                let cleaned: Object = map
                    .iter()
                    .filter(|(_, v)| !is_droppable(v))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Self::Object(cleaned)
            }
            _ => self.clone(),
        }
    }
}

fn is_droppable(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null | Value::Boolean(false) => true,
        Value::Number(n) => n.is_nan(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
