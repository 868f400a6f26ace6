//! Standard comparators.
//!
//! | key      | holds when                                        |
//! |----------|---------------------------------------------------|
//! | `=`      | both sides are the same scalar                    |
//! | `!=`     | `=` does not hold                                 |
//! | `>` etc. | both numbers, or both strings, and the order fits |
//! | `jsoneq` | both sides are structurally equal                 |
//!
//! Strings are ordered by Unicode scalar value (UTF-8 byte order). This differs
//! from UTF-16 code unit order when a character in U+E000..=U+FFFF is compared
//! with one above U+FFFF: here `"\u{FFFF}" < "😀"`, in UTF-16 order it is greater.
//!
//! Arrays and objects are never strictly equal to each other: a fetched
//! feature and a prediction are always distinct values. Use `jsoneq` to
//! compare their contents.

use std::cmp::Ordering;

use premise_registry::{CompareSet, Value};

/// Builds the standard compare set. Register it with or without a prefix.
pub fn standard_compare_set() -> CompareSet {
	CompareSet::new()
		.with("=", |a, b| Value::Bool(strict_eq(a, b)))
		.with("jsoneq", |a, b| Value::Bool(json_eq(a, b)))
		.with("!=", |a, b| Value::Bool(!strict_eq(a, b)))
		.with(">", |a, b| ordered(a, b, Ordering::is_gt))
		.with(">=", |a, b| ordered(a, b, Ordering::is_ge))
		.with("<", |a, b| ordered(a, b, Ordering::is_lt))
		.with("<=", |a, b| ordered(a, b, Ordering::is_le))
}

/// Same type and same value, for scalars only. Numbers compare numerically.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Null, Value::Null) => true,
		(Value::Bool(x), Value::Bool(y)) => x == y,
		(Value::Number(_), Value::Number(_)) => number_cmp(a, b) == Some(Ordering::Equal),
		(Value::String(x), Value::String(y)) => x == y,
		_ => false,
	}
}

/// Deep structural equality. Numbers compare numerically, so `1` equals `1.0`.
pub fn json_eq(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Array(xs), Value::Array(ys)) => {
			xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
		}
		(Value::Object(xs), Value::Object(ys)) => {
			xs.len() == ys.len()
				&& xs
					.iter()
					.all(|(key, x)| ys.get(key).is_some_and(|y| json_eq(x, y)))
		}
		_ => strict_eq(a, b),
	}
}

/// Orders two numbers or two strings. Any other pairing is unordered.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
	match (a, b) {
		(Value::Number(_), Value::Number(_)) => number_cmp(a, b),
		(Value::String(x), Value::String(y)) => Some(x.cmp(y)),
		_ => None,
	}
}

fn ordered(a: &Value, b: &Value, accept: fn(Ordering) -> bool) -> Value {
	Value::Bool(compare_values(a, b).is_some_and(accept))
}

fn number_cmp(a: &Value, b: &Value) -> Option<Ordering> {
	if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
		return Some(x.cmp(&y));
	}
	if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
		return Some(x.cmp(&y));
	}
	a.as_f64()?.partial_cmp(&b.as_f64()?)
}
