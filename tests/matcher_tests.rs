//! Matcher semantics: the two wrapper states against concrete candidates,
//! cross-checked against the `predicates` crate's equality predicate.

use mimicry::{Parameter, Value};
use predicates::prelude::*;

#[test]
fn any_accepts_every_candidate() {
    let matcher: Parameter<Value> = Parameter::Any;
    let candidates = [
        Value::Nil,
        Value::Number(0.0),
        Value::from("text"),
        Value::Bool(false),
        Value::List(vec![Value::Nil]),
    ];
    for candidate in &candidates {
        assert!(matcher.matches(candidate));
    }
}

#[test]
fn exact_agrees_with_an_equality_predicate() {
    let expected = 5_i64;
    let matcher = Parameter::Exact(expected);
    let reference = predicate::eq(expected);

    for candidate in [-5, 0, 4, 5, 6, i64::MAX] {
        assert_eq!(
            matcher.matches(&candidate),
            reference.eval(&candidate),
            "disagreement on candidate {candidate}"
        );
    }
}

#[test]
fn exact_compares_structurally_for_dynamic_values() {
    let matcher = Parameter::Exact(Value::List(vec![
        Value::Number(1.0),
        Value::from("two"),
    ]));

    assert!(matcher.matches(&Value::List(vec![
        Value::Number(1.0),
        Value::from("two"),
    ])));
    assert!(!matcher.matches(&Value::List(vec![Value::Number(1.0)])));
    assert!(!matcher.matches(&Value::Nil));
}

#[test]
fn expectation_rows_read_positionally() {
    // One matcher per argument position, the way an expectation table uses them.
    let expectation: (Parameter<Value>, Parameter<i64>) =
        (Parameter::Exact(Value::from("get")), Parameter::Any);

    let calls = [
        (Value::from("get"), 0_i64, true),
        (Value::from("get"), 99, true),
        (Value::from("put"), 0, false),
    ];
    for (method, retries, expected) in calls {
        let hit = expectation.0.matches(&method) && expectation.1.matches(&retries);
        assert_eq!(hit, expected);
    }
}
