use premise_registry::{CompareSet, RuleError, RuleSystem, RulesConfig, Value, json};

fn lookup(definition: &Value, state: &Value) -> Result<Value, premise_registry::BoxError> {
	let path = definition.as_str().ok_or("expected a key")?;
	Ok(state.get(path).cloned().unwrap_or(Value::Null))
}

#[test]
fn grouped_comparator_checks_state() {
	let mut rules = RuleSystem::<Value>::new();
	rules
		.register_compare_set(
			&CompareSet::new().with("equal", |a: &Value, b: &Value| json!(a == b)),
			"simple",
		)
		.unwrap();
	rules.register_feature("get", lookup).unwrap();

	let rule = rules
		.define_assertion_rule("get", "number", "simple.equal", 10)
		.unwrap();

	assert_eq!(rule.check(&json!({ "number": 10 })).unwrap(), json!(true));
	let err = rule.check(&json!({ "number": 11 })).unwrap_err();
	assert!(err.is_assertion_failure());
	assert_eq!(
		err.to_string(),
		"[assertion fail] compare type is simple.equal, feature type is get, feature 11, prediction is 10"
	);
}

#[test]
fn one_rule_many_states() {
	let mut rules = RuleSystem::<Value>::new();
	rules.register_feature("get", lookup).unwrap();
	rules
		.register_compare("<", |a, b| json!(a.as_f64() < b.as_f64()))
		.unwrap();

	let rule = rules.define_assertion_rule("get", "load", "<", 0.75).unwrap();
	let states = [json!({ "load": 0.1 }), json!({ "load": 0.5 }), json!({ "load": 0.9 })];
	let passed: Vec<bool> = states.iter().map(|s| rule.check(s).is_ok()).collect();
	assert_eq!(passed, vec![true, true, false]);
}

#[test]
fn config_loaded_from_toml_drives_flattening() {
	let config = RulesConfig::from_toml_str("separator = \"/\"\nmax_set_depth = 4").unwrap();
	let mut rules = RuleSystem::<Value>::with_config(config);
	rules
		.register_compare_set(
			&CompareSet::new().with_group(
				"num",
				CompareSet::new().with("eq", |a: &Value, b: &Value| json!(a == b)),
			),
			"std",
		)
		.unwrap();
	assert_eq!(rules.compare_types(), vec!["std/num/eq"]);
	assert!(matches!(
		rules.define_assertion_rule("get", "x", "std/num/eq", 1),
		Err(RuleError::MissingFeature(_))
	));
}
