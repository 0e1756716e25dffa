//! The coercion engine.
//!
//! Every target kind gets a `coerce_*` method returning `Option<T>`, where
//! `None` is the absent marker, and, where a zero-value default exists, an
//! `ensure_*` method that substitutes it. All of them are total: no input
//! errors, it only falls back.
//!
//! The conversion rules are deliberate policy, preserved exactly even where
//! they look arbitrary (an array coerces to the number 0; a non-zero number
//! coerces to a self-keyed object; the date heuristic switches from a
//! seconds-epoch to a milliseconds-epoch reading at ten decimal digits).
//! Downstream callers depend on the exact thresholds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::compare::dedupe;
use crate::core::value::{Array, Object, Value};

/// Numeric timestamps below this are read as a seconds epoch, at or above it
/// as a milliseconds epoch (ten decimal digits covers seconds epochs until
/// the year 2286).
const MILLIS_EPOCH_THRESHOLD: f64 = 9_999_999_999.0;

/// Email-format collaborator pattern, applied to trimmed, lowercased input
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Check a string against the email-format pattern
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

impl Value {
    // ==================== Number ====================

    /// Coerce to a number, or the absent marker.
    ///
    /// Numbers (NaN excluded) pass through, arrays collapse to 0, `true` is 1
    /// while `false` falls through to the fallback, and strings are parsed
    /// after separator normalization: whitespace is stripped and decimal
    /// commas become dots, so `"1 234,5"` reads as `1234.5`.
    #[must_use]
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if !n.is_nan() => Some(*n),
            Self::Array(_) => Some(0.0),
            Self::Boolean(true) => Some(1.0),
            Self::String(s) => parse_number(s),
            _ => {
                trace!(kind = %self.kind(), "number coercion fell through");
                None
            }
        }
    }

    /// Coerce to a number, defaulting to 0
    #[must_use]
    pub fn ensure_number(&self) -> f64 {
        self.coerce_number().unwrap_or(0.0)
    }

    // ==================== String ====================

    /// Coerce to a string, or the absent marker.
    ///
    /// Strings pass through; arrays, numbers, dates and booleans take their
    /// canonical `Display` rendering. NaN fails the number predicate and
    /// falls through.
    #[must_use]
    pub fn coerce_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Number(n) if n.is_nan() => None,
            Self::Array(_) | Self::Number(_) | Self::Date(_) | Self::Boolean(_) => {
                Some(self.to_string())
            }
            _ => None,
        }
    }

    /// Coerce to a string, defaulting to empty
    #[must_use]
    pub fn ensure_string(&self) -> String {
        self.coerce_string().unwrap_or_default()
    }

    // ==================== Array ====================

    /// Coerce to an array, or the absent marker.
    ///
    /// Arrays pass through; a string, number, date, boolean or null is
    /// wrapped into a one-element array. Objects and undefined fall through.
    #[must_use]
    pub fn coerce_array(&self) -> Option<Array> {
        match self {
            Self::Array(items) => Some(items.clone()),
            Self::Number(n) if n.is_nan() => None,
            Self::String(_) | Self::Number(_) | Self::Date(_) | Self::Boolean(_) | Self::Null => {
                Some(vec![self.clone()])
            }
            _ => None,
        }
    }

    /// Coerce to an array, defaulting to empty
    #[must_use]
    pub fn ensure_array(&self) -> Array {
        self.coerce_array().unwrap_or_default()
    }

    /// Deduplicate a true array, passing every other value through unchanged
    #[must_use]
    pub fn ensure_uniq_array(&self) -> Value {
        match self {
            Self::Array(items) => Self::Array(dedupe(items)),
            _ => self.clone(),
        }
    }

    // ==================== Object ====================

    /// Coerce to an object, or the absent marker.
    ///
    /// Objects pass through; a non-empty string or non-zero number becomes a
    /// single-entry object keyed by its own rendering (`5` becomes
    /// `{"5": 5}`). Everything else falls through.
    #[must_use]
    pub fn coerce_object(&self) -> Option<Object> {
        match self {
            Self::Object(map) => Some(map.clone()),
            Self::String(s) if !s.is_empty() => {
                Some(Object::from_iter([(s.clone(), self.clone())]))
            }
            Self::Number(n) if !n.is_nan() && *n != 0.0 => {
                Some(Object::from_iter([(self.to_string(), self.clone())]))
            }
            _ => None,
        }
    }

    /// Coerce to an object, defaulting to empty
    #[must_use]
    pub fn ensure_object(&self) -> Object {
        self.coerce_object().unwrap_or_default()
    }

    // ==================== Date ====================

    /// Coerce to a date, or the absent marker (dates have no zero default).
    ///
    /// Dates pass through. Strings are parsed against the documented formats:
    /// RFC 3339 (`2024-05-01T12:00:00+02:00`), then the naive forms
    /// `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d %H:%M:%S` and `%Y-%m-%d`, all read as
    /// UTC. Numbers are a Unix epoch: seconds below ten decimal digits,
    /// milliseconds from there up.
    #[must_use]
    pub fn coerce_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            Self::String(s) => parse_date(s),
            Self::Number(n) if n.is_finite() => {
                let millis = if *n < MILLIS_EPOCH_THRESHOLD {
                    n * 1000.0
                } else {
                    *n
                };
                DateTime::from_timestamp_millis(millis as i64)
            }
            _ => {
                trace!(kind = %self.kind(), "date coercion fell through");
                None
            }
        }
    }

    // ==================== Boolean ====================

    /// Coerce to a boolean, or the absent marker (booleans have no zero
    /// default).
    ///
    /// Booleans pass through; the strings `"true"`/`"1"` and the number 1 are
    /// true, the strings `"false"`/`"0"` and the number 0 are false, and any
    /// other input is absent.
    #[must_use]
    pub fn coerce_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::String(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            Self::Number(n) if *n == 1.0 => Some(true),
            Self::Number(n) if *n == 0.0 => Some(false),
            _ => None,
        }
    }

    // ==================== Email ====================

    /// Coerce to a normalized email address, or the absent marker.
    ///
    /// The value is coerced to a string, trimmed and lowercased, then
    /// accepted only if the email-format collaborator matches.
    #[must_use]
    pub fn coerce_email(&self) -> Option<String> {
        let email = self.coerce_string()?.trim().to_lowercase();
        if !email.is_empty() && is_valid_email(&email) {
            Some(email)
        } else {
            None
        }
    }
}

/// Parse a number string after separator normalization.
///
/// Strict full-string parsing: try floating point first, then integer.
fn parse_number(s: &str) -> Option<f64> {
    let normalized: String = s
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if let Ok(f) = normalized.parse::<f64>() {
        if !f.is_nan() {
            return Some(f);
        }
    }
    normalized.parse::<i64>().ok().map(|i| i as f64)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    trace!(input = s, "date string did not match any accepted format");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_coerce_number_from_strings() {
        assert_eq!(Value::string("1,5").ensure_number(), 1.5);
        assert_eq!(Value::string("1 234,5").ensure_number(), 1234.5);
        assert_eq!(Value::string("42").ensure_number(), 42.0);
        assert_eq!(Value::string("abc").ensure_number(), 0.0);
        assert_eq!(Value::string("abc").coerce_number(), None);
        assert_eq!(Value::string("").coerce_number(), None);
        // A stringified NaN is not a number.
        assert_eq!(Value::string("NaN").coerce_number(), None);
    }

    #[test]
    fn test_coerce_number_policy_cases() {
        assert_eq!(Value::from(json!([1, 2])).ensure_number(), 0.0);
        assert_eq!(Value::boolean(true).ensure_number(), 1.0);
        // false falls through to the fallback rather than mapping to 0 directly.
        assert_eq!(Value::boolean(false).coerce_number(), None);
        assert_eq!(Value::boolean(false).ensure_number(), 0.0);
        assert_eq!(Value::number(f64::NAN).coerce_number(), None);
        assert_eq!(Value::null().coerce_number(), None);
        assert_eq!(Value::object_empty().coerce_number(), None);
    }

    #[test]
    fn test_coerce_string() {
        assert_eq!(Value::string("x").ensure_string(), "x");
        assert_eq!(Value::number(1.5).ensure_string(), "1.5");
        assert_eq!(Value::number(2.0).ensure_string(), "2");
        assert_eq!(Value::boolean(true).ensure_string(), "true");
        assert_eq!(Value::from(json!([1, "a"])).ensure_string(), "[1, a]");
        assert_eq!(Value::null().coerce_string(), None);
        assert_eq!(Value::object_empty().coerce_string(), None);
        assert_eq!(Value::number(f64::NAN).coerce_string(), None);
        assert_eq!(Value::null().ensure_string(), "");
    }

    #[test]
    fn test_coerce_array_wraps_scalars() {
        assert_eq!(
            Value::string("x").ensure_array(),
            vec![Value::string("x")]
        );
        assert_eq!(Value::null().ensure_array(), vec![Value::null()]);
        let arr = Value::from(json!([1, 2]));
        assert_eq!(Value::Array(arr.ensure_array()), arr);
        // Objects do not wrap.
        assert_eq!(Value::from(json!({"a": 1})).coerce_array(), None);
        assert_eq!(Value::undefined().coerce_array(), None);
        assert_eq!(Value::undefined().ensure_array(), vec![]);
    }

    #[test]
    fn test_coerce_object_self_keys() {
        let from_string = Value::string("key").ensure_object();
        assert_eq!(from_string.get("key"), Some(&Value::string("key")));

        let from_number = Value::number(5.0).ensure_object();
        assert_eq!(from_number.get("5"), Some(&Value::number(5.0)));

        assert_eq!(Value::string("").coerce_object(), None);
        assert_eq!(Value::number(0.0).coerce_object(), None);
        assert_eq!(Value::number(-0.0).coerce_object(), None);
        assert_eq!(Value::null().coerce_object(), None);
        assert!(Value::null().ensure_object().is_empty());
    }

    #[test]
    fn test_coerce_date_epoch_heuristic() {
        // Ten digits and below: seconds. Above: milliseconds. Same instant.
        let from_seconds = Value::number(1_700_000_000.0).coerce_date().unwrap();
        let from_millis = Value::number(1_700_000_000_000.0).coerce_date().unwrap();
        assert_eq!(from_seconds, from_millis);
        assert_eq!(from_seconds.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_coerce_date_strings() {
        let rfc = Value::string("2024-05-01T12:00:00Z").coerce_date().unwrap();
        assert_eq!(rfc.timestamp(), 1_714_564_800);

        let day = Value::string("2024-05-01").coerce_date().unwrap();
        assert_eq!(day.timestamp() % 86_400, 0);

        assert_eq!(Value::string("garbage").coerce_date(), None);
        assert_eq!(Value::null().coerce_date(), None);
        assert_eq!(Value::number(f64::NAN).coerce_date(), None);
    }

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(Value::boolean(true).coerce_boolean(), Some(true));
        assert_eq!(Value::string("1").coerce_boolean(), Some(true));
        assert_eq!(Value::string("true").coerce_boolean(), Some(true));
        assert_eq!(Value::string("0").coerce_boolean(), Some(false));
        assert_eq!(Value::string("yes").coerce_boolean(), None);
        assert_eq!(Value::number(1.0).coerce_boolean(), Some(true));
        assert_eq!(Value::number(0.0).coerce_boolean(), Some(false));
        assert_eq!(Value::number(2.0).coerce_boolean(), None);
        assert_eq!(Value::null().coerce_boolean(), None);
    }

    #[test]
    fn test_ensure_uniq_array() {
        let input = Value::from(json!([1, 1, "1", {"x": 1}, {"x": 1}]));
        let expected = Value::from(json!([1, "1", {"x": 1}]));
        assert_eq!(input.ensure_uniq_array(), expected);

        // Non-arrays pass through unchanged.
        let scalar = Value::number(7.0);
        assert_eq!(scalar.ensure_uniq_array(), scalar);
    }

    #[test]
    fn test_coerce_email() {
        assert_eq!(
            Value::string("  Alice@Example.COM ").coerce_email(),
            Some("alice@example.com".to_owned())
        );
        assert_eq!(Value::string("not-an-email").coerce_email(), None);
        assert_eq!(Value::null().coerce_email(), None);
        assert_eq!(Value::string("").coerce_email(), None);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@sub.example.org"));
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("two words@example.com"));
    }
}
