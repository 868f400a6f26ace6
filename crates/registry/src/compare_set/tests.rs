use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

use super::*;

fn eq(a: &Value, b: &Value) -> Value {
	json!(a == b)
}

fn keys(flat: &[(String, Comparator)]) -> Vec<&str> {
	flat.iter().map(|(key, _)| key.as_str()).collect()
}

#[test]
fn join_key_drops_empty_segments() {
	assert_eq!(join_key("", "a", "."), "a");
	assert_eq!(join_key("p", "a", "."), "p.a");
	assert_eq!(join_key("p", "", "."), "p");
	assert_eq!(join_key("", "", "."), "");
	assert_eq!(join_key("p.b", "c", "."), "p.b.c");
}

#[test]
fn nested_groups_flatten_to_dotted_keys() {
	let set = CompareSet::new()
		.with("a", eq)
		.with_group("b", CompareSet::new().with("c", eq));

	let flat = set.flatten("p", ".", 32).unwrap();
	assert_eq!(keys(&flat), vec!["p.a", "p.b.c"]);
}

#[test]
fn len_counts_direct_children_only() {
	assert!(CompareSet::new().is_empty());

	let set = CompareSet::new()
		.with("a", eq)
		.with_group("b", CompareSet::new().with("c", eq).with("d", eq));
	assert!(!set.is_empty());
	assert_eq!(set.len(), 2);
	assert_eq!(set.flatten("", ".", 32).unwrap().len(), 3);
}

#[test]
fn empty_prefix_adds_no_leading_separator() {
	let set = CompareSet::new().with("a", eq);
	let flat = set.flatten("", ".", 32).unwrap();
	assert_eq!(keys(&flat), vec!["a"]);
}

#[test]
fn custom_separator_is_used_between_segments() {
	let set = CompareSet::new().with_group("num", CompareSet::new().with(">", eq));
	let flat = set.flatten("std", "/", 32).unwrap();
	assert_eq!(keys(&flat), vec!["std/num/>"]);
}

#[test]
fn insertion_order_is_preserved() {
	let set = CompareSet::new()
		.with("z", eq)
		.with("a", eq)
		.with("m", eq);
	let flat = set.flatten("", ".", 32).unwrap();
	assert_eq!(keys(&flat), vec!["z", "a", "m"]);
}

#[test]
fn flattened_comparators_keep_their_behaviour() {
	let set = CompareSet::new().with("gt", |a: &Value, b: &Value| {
		json!(a.as_i64() > b.as_i64())
	});
	let flat = set.flatten("", ".", 32).unwrap();
	let (_, gt) = &flat[0];
	assert_eq!(gt(&json!(3), &json!(2)), json!(true));
	assert_eq!(gt(&json!(1), &json!(2)), json!(false));
}

#[test]
fn nesting_beyond_limit_is_rejected() {
	let set = CompareSet::new().with_group(
		"a",
		CompareSet::new().with_group("b", CompareSet::new().with("c", eq)),
	);

	assert!(set.flatten("", ".", 3).is_ok());
	match set.flatten("", ".", 2) {
		Err(RuleError::CompareSetTooDeep { prefix, limit }) => {
			assert_eq!(prefix, "a.b");
			assert_eq!(limit, 2);
		}
		Ok(flat) => panic!("expected CompareSetTooDeep, got keys {:?}", keys(&flat)),
		Err(other) => panic!("expected CompareSetTooDeep, got {other:?}"),
	}
}

fn segment() -> impl Strategy<Value = String> {
	"[a-z]{1,6}"
}

proptest! {
	#[test]
	fn leaf_key_is_prefix_then_path(
		prefix in prop::option::of(segment()),
		path in prop::collection::vec(segment(), 1..5),
	) {
		let (leaf, groups) = path.split_last().unwrap();
		let mut set = CompareSet::new().with(leaf.clone(), eq);
		for name in groups.iter().rev() {
			set = CompareSet::new().with_group(name.clone(), set);
		}

		let prefix = prefix.unwrap_or_default();
		let flat = set.flatten(&prefix, ".", 32).unwrap();

		let mut expected: Vec<&str> = Vec::new();
		if !prefix.is_empty() {
			expected.push(&prefix);
		}
		expected.extend(path.iter().map(String::as_str));

		prop_assert_eq!(flat.len(), 1);
		prop_assert_eq!(&flat[0].0, &expected.join("."));
	}
}
