//! # Vetting
//!
//! A structural validation engine for schema-described messages that
//! reports ALL constraint violations in one pass, instead of stopping at the
//! first failure.
//!
//! ## Overview
//!
//! A message is a JSON object whose shape is described by a
//! [`MessageSchema`]: named fields, each with a declared kind, a cardinality
//! and a [`ConstraintSet`]. The [`ValidationEngine`] picks a validator for
//! each field from its declared kind, runs it over every value of the field,
//! and descends into nested messages to any depth. Everything it finds is
//! collected in a [`ValidationReport`].
//!
//! ## Core Types
//!
//! - [`FieldPath`]: Locates a value in a nested message (e.g., `items[2].labels["k"]`)
//! - [`ConstraintSet`]: Declarative rules for one field
//! - [`Violation`]: A single failed rule with its path, rule kind and message
//! - [`ConfigurationError`]: A declared rule that cannot apply to its field
//! - [`SchemaRegistry`]: Named message schemas, resolved lazily during validation
//!
//! ## Example
//!
//! ```rust
//! use vetting::{ConstraintSet, FieldDescriptor, MessageSchema, RuleKind, SchemaRegistry};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! registry.register(
//!     MessageSchema::new("Ticket")
//!         .field(FieldDescriptor::string("code").constraints(
//!             ConstraintSet::new().required().pattern("[A-Z]+").unwrap(),
//!         ))
//!         .field(FieldDescriptor::int("priority").constraints(ConstraintSet::new().range(1..=5))),
//! ).unwrap();
//!
//! let report = registry.validate("Ticket", &json!({"code": "abc", "priority": 9})).unwrap();
//!
//! // Both problems are reported
//! assert_eq!(report.violations().len(), 2);
//! assert_eq!(report.violations()[0].rule, RuleKind::Pattern);
//! assert_eq!(report.violations()[1].rule, RuleKind::MaxValue);
//! ```

mod access;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod options;
pub mod path;
pub mod registry;
pub mod report;
pub mod rule;
pub mod schema;
mod validation;
mod validator;

pub use constraint::{Bound, BoundValue, Constraint, ConstraintSet, Pattern, Rule};
pub use engine::ValidationEngine;
pub use error::{ConfigurationError, EngineError, Violation, Violations};
pub use options::EngineOptions;
pub use path::{FieldPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use report::ValidationReport;
pub use rule::RuleKind;
pub use schema::{
    Cardinality, EnumDescriptor, FieldDescriptor, FieldKind, MessageSchema, NumericKind,
    SchemaResolver,
};

/// Type alias for validation results using Violations
pub type ValidationResult<T> = stillwater::Validation<T, Violations>;
