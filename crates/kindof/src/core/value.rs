//! The unified `Value` enum.
//!
//! `Value` is the central type of this crate: an owned tagged union over the
//! runtime kinds the library classifies, coerces and traverses. The original
//! runtime also carried a `function` kind; functions are not representable in
//! an owned data model and have no variant here.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

use crate::compare::same_value;
use crate::core::error::{ValueError, ValueResult};
use crate::core::kind::ValueKind;

/// Keyed structure type backing `Value::Object`.
///
/// Insertion order is preserved; key order is observable through display,
/// serialization and `clean_object`.
pub type Object = IndexMap<String, Value>;

/// Sequence type backing `Value::Array`
pub type Array = Vec<Value>;

/// Owned value covering every runtime kind known to the classifier
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value, distinct from null
    Undefined,

    /// Null value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Floating point number; NaN payloads classify as number but fail
    /// the `is_number` predicate
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Array(Array),

    /// Keyed structure (string keys, insertion-ordered)
    Object(Object),

    /// Point in time (UTC)
    Date(DateTime<Utc>),

    /// Compiled regular expression
    Regexp(Regex),

    /// Error value carrying a message
    Error(String),
}

impl Value {
    // ==================== Constructors ====================

    /// Create an undefined value
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create a number value
    pub const fn number(v: f64) -> Self {
        Self::Number(v)
    }

    /// Create a string value from String or &str
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an empty array value
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an empty object value
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    /// Create a date value
    pub const fn date(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }

    /// Create a regexp value by compiling a pattern
    pub fn regexp(pattern: &str) -> ValueResult<Self> {
        Regex::new(pattern)
            .map(Self::Regexp)
            .map_err(|e| ValueError::parse_error("regexp", e.to_string()))
    }

    /// Create an error value
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    // ==================== Classification ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    /// Check if this is undefined
    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if this is anything but undefined
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is a number, excluding NaN.
    ///
    /// A NaN payload keeps the number kind tag but fails this predicate;
    /// every consumer that dispatches on it treats NaN as "none of the above".
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(n) if !n.is_nan())
    }

    /// Check if this is a string
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if this is an array
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is an object with no keys
    #[inline]
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(map) if map.is_empty())
    }

    /// Check if this is a date
    #[inline]
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Check if this is a regexp
    #[inline]
    #[must_use]
    pub fn is_regexp(&self) -> bool {
        matches!(self, Self::Regexp(_))
    }

    /// Check if this is an error value
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Check if this is a non-empty array of objects
    #[must_use]
    pub fn is_array_of_objects(&self) -> bool {
        self.is_array_of(Value::is_object)
    }

    /// Check if this is a non-empty array of arrays
    #[must_use]
    pub fn is_array_of_arrays(&self) -> bool {
        self.is_array_of(Value::is_array)
    }

    /// Check if this is a non-empty array of strings
    #[must_use]
    pub fn is_array_of_strings(&self) -> bool {
        self.is_array_of(Value::is_string)
    }

    /// Check if this is a non-empty array of numbers
    #[must_use]
    pub fn is_array_of_numbers(&self) -> bool {
        self.is_array_of(Value::is_number)
    }

    fn is_array_of(&self, pred: impl Fn(&Value) -> bool) -> bool {
        matches!(self, Self::Array(items) if !items.is_empty() && items.iter().all(pred))
    }

    // ==================== Accessors ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the raw number payload (NaN included)
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array reference
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as mutable array reference
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as object reference
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get as mutable object reference
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get as date
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as regexp reference
    #[inline]
    #[must_use]
    pub fn as_regexp(&self) -> Option<&Regex> {
        match self {
            Self::Regexp(re) => Some(re),
            _ => None,
        }
    }

    /// Try to get the message of an error value
    #[inline]
    #[must_use]
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// Structural equality with same-value number semantics: NaN equals NaN and
// +0.0 is distinct from -0.0, which also makes the relation total (Eq).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => same_value(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Regexp(a), Self::Regexp(b)) => a.as_str() == b.as_str(),
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl From<Regex> for Value {
    fn from(v: Regex) -> Self {
        Self::Regexp(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
