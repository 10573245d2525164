//! Property tests for idempotence and ordering.

use proptest::prelude::*;
use serde_json::{json, Value};
use vetting::{ConstraintSet, FieldDescriptor, MessageSchema, RuleKind, SchemaRegistry};

fn schema() -> MessageSchema {
    MessageSchema::new("Record")
        .field(FieldDescriptor::string("a").constraints(ConstraintSet::new().required().max_len(4)))
        .field(
            FieldDescriptor::int("b")
                .constraints(ConstraintSet::new().required().range(-10..=10)),
        )
        .field(
            FieldDescriptor::string("c")
                .repeated()
                .constraints(ConstraintSet::new().pattern("[a-z]*").unwrap()),
        )
}

fn record() -> impl Strategy<Value = Value> {
    (
        "[a-zA-Z]{0,8}",
        -20i64..20,
        prop::collection::vec("[a-zA-Z]{0,3}", 0..6),
    )
        .prop_map(|(a, b, c)| json!({"a": a, "b": b, "c": c}))
}

proptest! {
    #[test]
    fn validation_is_idempotent(message in record()) {
        let engine = SchemaRegistry::new().engine();
        let schema = schema();

        let first = engine.validate(&message, &schema).unwrap();
        let second = engine.validate(&message, &schema).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn violations_follow_declaration_then_element_order(message in record()) {
        let engine = SchemaRegistry::new().engine();
        let report = engine.validate(&message, &schema()).unwrap();

        let field_rank = |name: &str| ["a", "b", "c"].iter().position(|f| *f == name);
        let keys: Vec<_> = report
            .violations()
            .iter()
            .map(|v| (field_rank(&v.field_name), v.path.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();

        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn required_field_reported_at_most_once(b in -20i64..20) {
        let engine = SchemaRegistry::new().engine();
        let report = engine.validate(&json!({"a": "x", "b": b}), &schema()).unwrap();

        let required = report.with_rule(RuleKind::Required).len();
        prop_assert_eq!(required, usize::from(b == 0));
    }
}
