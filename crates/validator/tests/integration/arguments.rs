//! Validating positional argument lists.

use crate::v;
use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn abc() -> Signature {
    Signature::new(["a", "b", "c"])
}

#[test]
fn arguments_are_mapped_by_signature() {
    let validator = Validator::new(v(json!({"a": 10, "b": 20, "c": 30}))).unwrap();
    let args = Value::from(Arguments::new([
        Value::from(10),
        Value::from(20),
        Value::from("xyz"),
    ]));

    assert!(!validator.test_with(&args, &abc()).unwrap());

    let good = Value::from(Arguments::new([10, 20, 30]));
    assert!(validator.test_with(&good, &abc()).unwrap());
}

#[test]
fn callee_signature_is_used_when_none_given() {
    let validator = Validator::new(v(json!({"a": 10, "b": 20, "c": 30}))).unwrap();
    let args = Arguments::new([Value::from(10), Value::from(20), Value::from("panda")])
        .with_callee(abc());

    assert!(!validator.test(&Value::from(args)).unwrap());
}

#[test]
fn pick_accepts_arguments() {
    let validator = Validator::from_schema(
        Schema::new()
            .rule("a", 1)
            .rule("b", "isString")
            .rule("c", Rule::predicate(|v, _, _, _| v.as_str() == Some("c"))),
    );
    let args =
        Arguments::new([Value::from(1), Value::from("xxx"), v(json!([]))]).with_callee(abc());

    let picked = validator.pick(&Value::from(args)).unwrap();
    assert_eq!(picked, v(json!({"a": 1, "b": "xxx"})));

    let keys: Vec<&str> = picked.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn arguments_without_any_signature_cannot_be_validated() {
    let validator = Validator::new(v(json!({"a": 1}))).unwrap();
    let args = Value::from(Arguments::new([v(json!([]))]));

    assert_eq!(validator.pick(&args).unwrap_err(), ValidatorError::Introspection);
    assert_eq!(validator.test(&args).unwrap_err(), ValidatorError::Introspection);
}

#[test]
fn surplus_arguments_are_dropped() {
    let validator = Validator::new(v(json!({"a": 1}))).unwrap();
    let args = Value::from(Arguments::new([1, 2, 3]));

    let picked = validator.pick_with(&args, &Signature::new(["a"])).unwrap();
    assert_eq!(picked, v(json!({"a": 1})));
}

#[test]
fn missing_arguments_pass() {
    let validator = Validator::new(v(json!({"a": 10, "b": 20, "c": 30}))).unwrap();
    let args = Value::from(Arguments::new([10, 20]));

    assert!(validator.test_with(&args, &abc()).unwrap());

    let picked = validator.pick_with(&args, &abc()).unwrap();
    let picked = picked.as_object().unwrap();
    assert_eq!(picked.len(), 3);
    assert!(picked["c"].is_undefined());
}

#[test]
fn supplied_arguments_are_still_checked_when_others_are_missing() {
    let validator = Validator::new(v(json!({"a": 10, "b": 20, "c": 30}))).unwrap();
    let args = Value::from(Arguments::new([10, 99]));

    assert!(!validator.test_with(&args, &abc()).unwrap());

    let picked = validator.pick_with(&args, &abc()).unwrap();
    let keys: Vec<&str> = picked.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn strict_arity_reports_counts() {
    let validator = Validator::builder(Schema::new().rule("a", 1))
        .arity(ArityPolicy::Strict)
        .build();
    let args = Value::from(Arguments::new([1, 2, 3, 4]));

    assert_eq!(
        validator.test_with(&args, &abc()).unwrap_err(),
        ValidatorError::ArityMismatch {
            expected: 3,
            actual: 4
        }
    );
}
