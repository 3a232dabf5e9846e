//! Schema evaluation through the public API.

use crate::v;
use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::sync::{Arc, Mutex};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[rstest]
#[case::null(Value::Null)]
#[case::array(v(json!([])))]
#[case::number(Value::from(1))]
#[case::string(Value::from("isString"))]
#[case::function(Value::from(Predicate::always()))]
#[case::arguments(Value::from(Arguments::default()))]
fn schema_must_be_an_object(#[case] schema: Value) {
    let kind = schema.kind();
    assert_eq!(
        Validator::new(schema).unwrap_err(),
        ValidatorError::InvalidSchema { kind }
    );
}

// ============================================================================
// RULE KINDS
// ============================================================================

#[test]
fn rule_can_name_a_registered_predicate() {
    let validator = Validator::new(v(json!({"foo": "isString"}))).unwrap();
    assert!(!validator.test(&v(json!({"foo": 1}))).unwrap());
    assert!(validator.test(&v(json!({"foo": "bar"}))).unwrap());
}

#[test]
fn rule_can_be_a_value() {
    let validator = Validator::new(v(json!({"foo": "bar"}))).unwrap();
    assert!(!validator.test(&v(json!({"foo": 1}))).unwrap());
    assert!(validator.test(&v(json!({"foo": "bar"}))).unwrap());

    let validator = Validator::new(v(json!({"foo": 0}))).unwrap();
    assert!(validator.test(&v(json!({"foo": 0}))).unwrap());
    assert!(!validator.test(&v(json!({"foo": "0"}))).unwrap());

    let validator = Validator::new(v(json!({"foo": false}))).unwrap();
    assert!(validator.test(&v(json!({"foo": false}))).unwrap());
}

#[test]
fn rule_can_be_a_list_of_values() {
    let validator = Validator::new(v(json!({"foo": ["bar", "1"]}))).unwrap();
    assert!(validator.test(&v(json!({"foo": "bar"}))).unwrap());
    assert!(!validator.test(&v(json!({"foo": 1}))).unwrap());
    assert!(!validator.test(&v(json!({"foo": "xxx"}))).unwrap());
}

#[test]
fn predicate_receives_value_key_and_data() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let validator = Validator::from_schema(Schema::new().rule(
        "foo",
        Rule::predicate(move |value, key, data, args| {
            let mut seen = sink.lock().unwrap();
            seen.push(value.clone());
            seen.push(Value::from(key));
            seen.push(Value::Object(data.clone()));
            seen.extend(args.iter().cloned());
            true
        }),
    ));

    let data = v(json!({"foo": 1}));
    assert!(validator.test(&data).unwrap());
    assert_eq!(*seen.lock().unwrap(), vec![Value::from(1), Value::from("foo"), data]);
}

#[rstest]
#[case::one(Predicate::new(|_, _, _, _| 1))]
#[case::empty_array(Predicate::new(|_, _, _, _| Vec::<Value>::new()))]
#[case::text(Predicate::new(|_, _, _, _| "hello"))]
#[case::empty_object(Predicate::new(|_, _, _, _| Object::new()))]
#[case::undefined(Predicate::new(|_, _, _, _| Value::Undefined))]
fn truthy_verdicts_are_rejected(#[case] predicate: Predicate) {
    let validator = Validator::from_schema(Schema::new().rule("foo", predicate));
    assert!(!validator.test(&v(json!({"foo": "xxx"}))).unwrap());
}

// ============================================================================
// TEST
// ============================================================================

#[test]
fn non_object_input_passes() {
    let validator = Validator::new(v(json!({}))).unwrap();
    assert!(validator.test(&Value::from("foobar")).unwrap());
}

#[test]
fn one_failing_field_fails_the_whole_input() {
    let validator = Validator::from_schema(
        Schema::new()
            .rule("foo", Rule::predicate(|_, _, _, _| false))
            .rule("bar", Rule::predicate(|_, _, _, _| true)),
    );
    assert!(!validator.test(&v(json!({"foo": 1, "bar": 1}))).unwrap());
}

#[test]
fn all_fields_passing_passes() {
    let validator =
        Validator::from_schema(Schema::new().rule("foo", Rule::predicate(|_, _, _, _| true)));
    assert!(validator.test(&v(json!({"foo": 1}))).unwrap());
}

#[test]
fn unknown_fields_pass() {
    let validator =
        Validator::from_schema(Schema::new().rule("foo", Rule::predicate(|_, _, _, _| false)));
    assert!(validator.test(&v(json!({"xxx": 1}))).unwrap());
}

#[test]
fn age_gate_end_to_end() {
    let validator = Validator::from_schema(Schema::new().rule(
        "age",
        Rule::predicate(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0)),
    ));
    assert!(validator.test(&v(json!({"name": "x", "age": 37}))).unwrap());
    assert!(!validator.test(&v(json!({"name": "x", "age": 12}))).unwrap());
}

#[test]
fn schema_with_dynamic_function_value() {
    let mut schema = Object::new();
    schema.insert(
        "c".into(),
        Value::from(Predicate::new(|v, _, _, _| v.as_str() == Some("c"))),
    );
    let validator = Validator::new(Value::Object(schema)).unwrap();
    assert!(validator.test(&v(json!({"c": "c"}))).unwrap());
    assert!(!validator.test(&v(json!({"c": "d"}))).unwrap());
}

#[test]
#[should_panic(expected = "predicate blew up")]
fn predicate_panics_propagate() {
    let validator = Validator::from_schema(Schema::new().rule(
        "foo",
        Rule::predicate(|_, _, _, _| -> bool { panic!("predicate blew up") }),
    ));
    let _ = validator.test(&v(json!({"foo": 1})));
}

// ============================================================================
// PICK
// ============================================================================

fn pick_schema() -> Schema {
    Schema::new()
        .rule("a", 1)
        .rule("b", "isString")
        .rule("c", Rule::predicate(|v, _, _, _| v.as_str() == Some("c")))
}

#[test]
fn pick_returns_non_objects_as_is() {
    let validator = Validator::new(v(json!({"a": 1}))).unwrap();
    assert_eq!(validator.pick(&v(json!([1, 2]))).unwrap(), v(json!([1, 2])));
    assert_eq!(validator.pick(&Value::Null).unwrap(), Value::Null);
}

#[test]
fn pick_keeps_only_valid_fields() {
    let validator = Validator::from_schema(pick_schema());

    let picked = validator
        .pick(&v(json!({"a": 1, "b": "foo", "c": "c", "z": 100})))
        .unwrap();
    assert_eq!(
        serde_json::to_string(&picked).unwrap(),
        r#"{"a":1.0,"b":"foo","c":"c","z":100.0}"#
    );

    let picked = validator
        .pick(&v(json!({"a": 999, "b": [], "c": "xxx", "z": 123_456})))
        .unwrap();
    assert_eq!(picked, v(json!({"z": 123_456})));
}

#[test]
fn pick_passes_unknown_keys_by_default() {
    let validator = Validator::new(v(json!({"a": 1, "b": "isString"}))).unwrap();

    let input = v(json!({"a": 1, "b": "x", "z": 9}));
    assert_eq!(validator.pick(&input).unwrap(), input);

    let picked = validator.pick(&v(json!({"a": 999, "b": [], "z": 9}))).unwrap();
    assert_eq!(picked, v(json!({"z": 9})));
}
