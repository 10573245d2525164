//! Tests for schema registry operations.

use serde_json::json;
use vetting::{
    ConstraintSet, EngineOptions, FieldDescriptor, FieldKind, MessageSchema, RegistryError,
    SchemaRegistry, SchemaResolver,
};

#[test]
fn test_register_and_get() {
    let registry = SchemaRegistry::new();

    registry
        .register(MessageSchema::new("User").field(FieldDescriptor::string("name")))
        .unwrap();

    let schema = registry.get("User");
    assert!(schema.is_some());
    assert_eq!(schema.unwrap().fields().count(), 1);

    let missing = registry.get("Missing");
    assert!(missing.is_none());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = SchemaRegistry::new();

    registry.register(MessageSchema::new("User")).unwrap();

    let result = registry.register(MessageSchema::new("User"));
    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "User"));
}

#[test]
fn test_validate_with_registry() {
    let registry = SchemaRegistry::new();

    registry
        .register(
            MessageSchema::new("User")
                .field(FieldDescriptor::string("name").constraints(ConstraintSet::new().min_len(1)))
                .field(FieldDescriptor::int("age").constraints(ConstraintSet::new().min(0))),
        )
        .unwrap();

    let report = registry
        .validate(
            "User",
            &json!({
                "name": "Alice",
                "age": 30
            }),
        )
        .unwrap();

    assert!(report.is_valid());
    assert!(report.to_validation().is_success());
}

#[test]
fn test_validate_missing_schema() {
    let registry = SchemaRegistry::new();

    let result = registry.validate("Missing", &json!({}));
    assert!(matches!(result, Err(RegistryError::SchemaNotFound(_))));
    assert_eq!(result.unwrap_err().to_string(), "schema 'Missing' not found");
}

#[test]
fn test_registration_order_does_not_matter() {
    let registry = SchemaRegistry::new();

    // Refers to a type registered afterwards
    registry
        .register(MessageSchema::new("Order").field(FieldDescriptor::message("buyer", "Customer")))
        .unwrap();
    assert_eq!(registry.unresolved_types(), vec!["Customer"]);

    registry
        .register(
            MessageSchema::new("Customer")
                .field(FieldDescriptor::string("email").constraints(ConstraintSet::new().required())),
        )
        .unwrap();
    assert!(registry.unresolved_types().is_empty());

    let report = registry
        .validate("Order", &json!({"buyer": {"email": ""}}))
        .unwrap_or_else(|e| panic!("validation failed: {e}"));
    assert_eq!(report.violations()[0].path.to_string(), "buyer.email");
}

#[test]
fn test_unresolved_types_include_map_values() {
    let registry = SchemaRegistry::new();
    registry
        .register(MessageSchema::new("Catalog").field(FieldDescriptor::map(
            "items",
            FieldKind::Message("Item".to_string()),
        )))
        .unwrap();

    assert_eq!(registry.unresolved_types(), vec!["Item"]);
}

#[test]
fn test_registry_is_a_resolver() {
    let registry = SchemaRegistry::new();
    registry.register(MessageSchema::new("User")).unwrap();

    let resolver: &dyn SchemaResolver = &registry;
    assert_eq!(resolver.resolve("User").unwrap().type_name(), "User");
    assert!(resolver.resolve("Missing").is_none());
}

#[test]
fn test_options_reach_engine() {
    let registry = SchemaRegistry::new()
        .with_options(EngineOptions::new().with_max_depth(1).deny_configuration_errors(true));

    let engine = registry.engine();
    assert_eq!(engine.options().max_depth(), Some(1));
    assert!(engine.options().denies_configuration_errors());
}
