//! Deep equality and membership.
//!
//! Equality here is the same-value relation, not IEEE numeric equality: NaN
//! equals NaN and +0.0 is distinct from -0.0. That choice makes the relation
//! reflexive and total, so comparison can never fail; "not equal" is the only
//! failure mode.

use crate::core::value::Value;

/// Same-value equality for raw floats: NaN equals NaN (regardless of
/// payload), +0.0 and -0.0 are distinct.
#[inline]
#[must_use]
pub fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/// Deep equality over values.
///
/// Scalars compare by same-value, sequences by length and positional
/// recursion, structures by key set and per-key recursion independent of key
/// order. Total: any pair of values compares, and incomparable pairs are
/// simply not equal.
#[inline]
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// Structural equality restricted to objects.
///
/// True iff both operands are objects and deep-equal; any non-object operand
/// is "not equal", never a failure.
#[must_use]
pub fn is_equal_objects(a: &Value, b: &Value) -> bool {
    a.is_object() && b.is_object() && a == b
}

/// Positional equality for sequences
#[must_use]
pub fn is_equal_arrays(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
}

/// Kind-dispatched membership test.
///
/// Object needles compare structurally against object members only, array
/// needles positionally against array members only, and number/string/boolean
/// needles by same-value against any member. Needles of any other kind
/// (including NaN numbers) never match.
#[must_use]
pub fn is_in_array(haystack: &[Value], needle: &Value) -> bool {
    match needle {
        Value::Object(_) => haystack.iter().any(|el| is_equal_objects(el, needle)),
        Value::Array(items) => haystack
            .iter()
            .any(|el| matches!(el, Value::Array(other) if is_equal_arrays(other, items))),
        Value::Number(n) if n.is_nan() => false,
        Value::Number(_) | Value::String(_) | Value::Boolean(_) => {
            haystack.iter().any(|el| el == needle)
        }
        _ => false,
    }
}

/// Deduplicate a sequence, keeping the first occurrence of each element.
///
/// Built on [`is_in_array`], so elements no membership rule matches (nulls,
/// dates, NaN numbers) are never considered duplicates and all survive.
#[must_use]
pub fn dedupe(items: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::with_capacity(items.len());
    for el in items {
        if !is_in_array(&result, el) {
            result.push(el.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Object;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_same_value() {
        assert!(same_value(f64::NAN, f64::NAN));
        assert!(!same_value(0.0, -0.0));
        assert!(same_value(1.5, 1.5));
        assert!(!same_value(1.0, 2.0));
    }

    #[test]
    fn test_deep_equal_reflexive_on_nan() {
        let v = Value::number(f64::NAN);
        assert!(deep_equal(&v, &v));
    }

    #[test]
    fn test_deep_equal_nested() {
        let a = Value::from(json!({"x": [1, {"y": 2}], "z": "s"}));
        let b = Value::from(json!({"x": [1, {"y": 2}], "z": "s"}));
        let c = Value::from(json!({"x": [1, {"y": 3}], "z": "s"}));
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_is_equal_objects_rejects_non_objects() {
        let obj = Value::from(json!({"a": 1}));
        assert!(is_equal_objects(&obj, &obj.clone()));
        assert!(!is_equal_objects(&obj, &Value::number(5.0)));
        assert!(!is_equal_objects(&Value::null(), &Value::null()));
    }

    #[test]
    fn test_is_equal_arrays() {
        let a = vec![Value::number(1.0), Value::string("x")];
        let b = vec![Value::number(1.0), Value::string("x")];
        let c = vec![Value::number(1.0)];
        assert!(is_equal_arrays(&a, &b));
        assert!(!is_equal_arrays(&a, &c));
    }

    #[test]
    fn test_is_in_array_scalars_do_not_cross_kinds() {
        let haystack = vec![Value::number(1.0), Value::string("1")];
        assert!(is_in_array(&haystack, &Value::number(1.0)));
        assert!(is_in_array(&haystack, &Value::string("1")));
        assert!(!is_in_array(&haystack, &Value::boolean(true)));
    }

    #[test]
    fn test_is_in_array_objects_match_structurally() {
        let member = Value::Object(Object::from_iter([("x".to_owned(), Value::number(1.0))]));
        let haystack = vec![Value::number(1.0), member.clone()];
        assert!(is_in_array(&haystack, &member));

        let other = Value::Object(Object::from_iter([("x".to_owned(), Value::number(2.0))]));
        assert!(!is_in_array(&haystack, &other));
    }

    #[test]
    fn test_is_in_array_other_kinds_never_match() {
        let haystack = vec![Value::null(), Value::undefined()];
        assert!(!is_in_array(&haystack, &Value::null()));
        assert!(!is_in_array(&haystack, &Value::undefined()));
        assert!(!is_in_array(&haystack, &Value::number(f64::NAN)));
    }

    #[test]
    fn test_dedupe() {
        let input = vec![
            Value::number(1.0),
            Value::number(1.0),
            Value::string("1"),
            Value::from(json!({"x": 1})),
            Value::from(json!({"x": 1})),
        ];
        let expected = vec![
            Value::number(1.0),
            Value::string("1"),
            Value::from(json!({"x": 1})),
        ];
        assert_eq!(dedupe(&input), expected);
    }

    #[test]
    fn test_dedupe_keeps_unmatchable_elements() {
        let input = vec![Value::null(), Value::null()];
        assert_eq!(dedupe(&input), input);
    }

    #[test]
    fn test_dedupe_idempotent() {
        let input = vec![
            Value::number(2.0),
            Value::number(2.0),
            Value::boolean(true),
            Value::from(json!([1, 2])),
            Value::from(json!([1, 2])),
        ];
        let once = dedupe(&input);
        let twice = dedupe(&once);
        assert_eq!(once, twice);
    }
}
