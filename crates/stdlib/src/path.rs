//! The `get` feature: reads a value out of a JSON state by path.
//!
//! A definition is either a dotted string (`"user.roles.0"`) or an array of
//! segments (`["user", "roles", 0]`). A segment that does not resolve yields
//! `null` rather than an error.

use premise_registry::{BoxError, ValidationError, Value};

enum Segment<'a> {
	Key(&'a str),
	Index(usize),
}

fn segments(definition: &Value) -> Result<Vec<Segment<'_>>, ValidationError> {
	let segments = match definition {
		Value::String(path) => path.split('.').map(Segment::Key).collect::<Vec<_>>(),
		Value::Array(parts) => parts
			.iter()
			.map(|part| match part {
				Value::String(key) => Ok(Segment::Key(key)),
				Value::Number(n) => n
					.as_u64()
					.and_then(|i| usize::try_from(i).ok())
					.map(Segment::Index)
					.ok_or_else(|| ValidationError::new(format!("invalid path index {n}"))),
				other => Err(ValidationError::new(format!(
					"path segments must be strings or indices, got {other}"
				))),
			})
			.collect::<Result<Vec<_>, _>>()?,
		other => {
			return Err(ValidationError::new(format!(
				"path must be a string or an array, got {other}"
			)));
		}
	};

	if segments.is_empty() || segments.iter().any(|s| matches!(s, Segment::Key(""))) {
		return Err(ValidationError::new("path has an empty segment"));
	}
	Ok(segments)
}

/// Validator for the `get` feature.
pub fn validate_path(definition: &Value) -> Result<(), ValidationError> {
	segments(definition).map(|_| ())
}

/// Fetcher for the `get` feature.
pub fn fetch_path(definition: &Value, state: &Value) -> Result<Value, BoxError> {
	let mut current = state;
	for segment in segments(definition)? {
		let next = match (segment, current) {
			(Segment::Key(key), Value::Object(map)) => map.get(key),
			(Segment::Key(key), Value::Array(items)) => {
				key.parse::<usize>().ok().and_then(|i| items.get(i))
			}
			(Segment::Index(i), Value::Array(items)) => items.get(i),
			_ => None,
		};
		match next {
			Some(value) => current = value,
			None => return Ok(Value::Null),
		}
	}
	Ok(current.clone())
}
