//! Serde support and JSON interop.
//!
//! `Value` round-trips through `serde_json::Value` for everything JSON can
//! represent. The non-JSON kinds are mapped on the way out and never produced
//! on the way in:
//!
//! - `Undefined` serializes as null
//! - `Number` payloads that are NaN or infinite serialize as null
//! - `Date` serializes as an RFC 3339 string
//! - `Regexp` serializes as its pattern string
//! - `Error` serializes as its message string

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::core::error::ValueError;
use crate::core::value::{Array, Object, Value};

/// Largest integer a double represents exactly; whole numbers within this
/// range serialize as JSON integers rather than floats.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
            Self::Date(_) | Self::Regexp(_) | Self::Error(_) => {
                serializer.serialize_str(&self.to_string())
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect::<Array>())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => Self::Null,
            Value::Boolean(b) => Self::Bool(b),
            Value::Number(n) if n.fract() == 0.0 && n.is_finite() && n.abs() <= MAX_SAFE_INTEGER => {
                Self::Number(serde_json::Number::from(n as i64))
            }
            Value::Number(n) => serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Date(_) | Value::Regexp(_) | Value::Error(_) => Self::String(value.to_string()),
        }
    }
}

impl FromStr for Value {
    type Err = ValueError;

    /// Parse a Value from JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindof::Value;
    ///
    /// let value: Value = r#"{"name": "Alice"}"#.parse().unwrap();
    /// assert!(value.is_object());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json = serde_json::from_str::<serde_json::Value>(s)?;
        Ok(json.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        let v = Value::from(json!({"a": 1, "b": [true, null], "c": "x"}));
        assert!(v.is_object());
        assert_eq!(v.get_path("a"), Some(&Value::number(1.0)));
        assert_eq!(v.get_path("c"), Some(&Value::string("x")));
    }

    #[test]
    fn test_json_roundtrip() {
        let v = Value::from(json!({"a": {"b": [1, 2.5, "three"]}, "ok": false}));
        let back = serde_json::Value::from(v.clone());
        assert_eq!(Value::from(back), v);
    }

    #[test]
    fn test_serialize_integers_stay_integral() {
        let v = Value::number(42.0);
        assert_eq!(serde_json::to_string(&v).unwrap(), "42");
        let v = Value::number(1.5);
        assert_eq!(serde_json::to_string(&v).unwrap(), "1.5");
    }

    #[test]
    fn test_serialize_non_json_kinds() {
        assert_eq!(serde_json::to_string(&Value::undefined()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Value::number(f64::NAN)).unwrap(),
            "null"
        );
        let re = Value::regexp("^a$").unwrap();
        assert_eq!(serde_json::to_string(&re).unwrap(), "\"^a$\"");
        assert_eq!(
            serde_json::to_string(&Value::error("boom")).unwrap(),
            "\"Error: boom\""
        );
    }

    #[test]
    fn test_from_str_parses_json() {
        let v = Value::from_str("[1, 2, 3]").unwrap();
        assert!(v.is_array_of_numbers());
        assert!(Value::from_str("not json").is_err());
    }
}
