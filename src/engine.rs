//! The validation engine.
//!
//! [`ValidationEngine`] walks a message in schema declaration order, picks a
//! validator for each field from its declared kind, and merges what every
//! validator reports into one [`ValidationReport`].

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;

use crate::access::{field_values, is_defaulted, value_type_name};
use crate::error::EngineError;
use crate::options::EngineOptions;
use crate::path::FieldPath;
use crate::report::ValidationReport;
use crate::schema::{FieldKind, MessageSchema, SchemaResolver};
use crate::validation::ValidationContext;
use crate::validator::{
    BooleanValidator, EnumValidator, FieldValidator, FieldValues, MapValidator, MessageValidator,
    NumericValidator, StringValidator,
};

/// Validates messages against their schemas.
///
/// The engine holds no per-call state; one engine can serve any number of
/// concurrent calls.
///
/// # Example
///
/// ```rust
/// use vetting::{ConstraintSet, FieldDescriptor, MessageSchema, SchemaRegistry, RuleKind};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register(
///     MessageSchema::new("Inner")
///         .field(FieldDescriptor::string("name").constraints(ConstraintSet::new().required())),
/// ).unwrap();
/// let outer = MessageSchema::new("Outer")
///     .field(FieldDescriptor::message("inner", "Inner").constraints(ConstraintSet::new().required()));
///
/// let engine = registry.engine();
/// let report = engine.validate(&json!({"inner": {"name": ""}}), &outer).unwrap();
///
/// assert_eq!(report.violations().len(), 1);
/// assert_eq!(report.violations()[0].path.to_string(), "inner.name");
/// assert_eq!(report.violations()[0].rule, RuleKind::Required);
/// ```
#[derive(Clone)]
pub struct ValidationEngine {
    resolver: Arc<dyn SchemaResolver>,
    options: EngineOptions,
}

impl ValidationEngine {
    /// Creates an engine resolving nested message types through `resolver`.
    pub fn new(resolver: Arc<dyn SchemaResolver>) -> Self {
        Self {
            resolver,
            options: EngineOptions::default(),
        }
    }

    /// Replaces the engine's options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the engine's options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Validates `message` against `schema`.
    ///
    /// Returns every violation found, in declaration order and, within a
    /// repeated field, in element order. Configuration errors met along the
    /// way are returned as warnings in the same report.
    ///
    /// # Errors
    ///
    /// Fails without a report when the message does not have the shape the
    /// schema declares, a nested type cannot be resolved, the depth budget
    /// is exceeded, or (if so configured) a configuration error was met.
    pub fn validate(
        &self,
        message: &Value,
        schema: &MessageSchema,
    ) -> Result<ValidationReport, EngineError> {
        tracing::debug!(message_type = schema.type_name(), "validating message");

        let context = ValidationContext::new(Arc::clone(&self.resolver), self.options.max_depth());
        let report = self.validate_at(message, schema, &FieldPath::root(), &context)?;

        for warning in report.warnings() {
            tracing::warn!(%warning, "constraint cannot be applied");
        }
        if self.options.denies_configuration_errors() {
            if let Some(warning) = report.warnings().first() {
                return Err(EngineError::Configuration(warning.clone()));
            }
        }

        tracing::debug!(
            message_type = schema.type_name(),
            violations = report.violations().len(),
            "validation finished"
        );
        Ok(report)
    }

    /// Validates many messages of the same type in parallel.
    ///
    /// Results are returned in input order, each exactly as
    /// [`validate`](Self::validate) would return it.
    pub fn validate_all(
        &self,
        messages: &[Value],
        schema: &MessageSchema,
    ) -> Vec<Result<ValidationReport, EngineError>> {
        messages
            .par_iter()
            .map(|message| self.validate(message, schema))
            .collect()
    }

    /// Validates `message` as found at `path`.
    pub(crate) fn validate_at(
        &self,
        message: &Value,
        schema: &MessageSchema,
        path: &FieldPath,
        context: &ValidationContext,
    ) -> Result<ValidationReport, EngineError> {
        let object = message.as_object().ok_or_else(|| EngineError::NotAMessage {
            path: path.clone(),
            got: value_type_name(message),
        })?;

        let mut report = ValidationReport::new();
        for field in schema.fields() {
            let field_path = path.push_field(field.name());
            let values = FieldValues {
                message_type: schema.type_name(),
                descriptor: field,
                values: field_values(object, field, &field_path)?,
                path: field_path,
                defaulted: is_defaulted(object, field),
            };
            report.append(select_validator(values).validate(self, context)?);
        }
        Ok(report)
    }
}

/// Picks the validator for a field from its declared kind.
fn select_validator(values: FieldValues<'_>) -> FieldValidator<'_> {
    let descriptor = values.descriptor;
    match descriptor.kind() {
        FieldKind::Boolean => FieldValidator::Boolean(BooleanValidator::new(values)),
        FieldKind::Numeric(kind) => FieldValidator::Numeric(NumericValidator::new(values, *kind)),
        FieldKind::String => FieldValidator::String(StringValidator::new(values)),
        FieldKind::Enum(enum_type) => FieldValidator::Enum(EnumValidator::new(values, enum_type)),
        FieldKind::Map(value_kind) => FieldValidator::Map(MapValidator::new(values, value_kind)),
        FieldKind::Message(type_name) => {
            FieldValidator::Message(MessageValidator::new(values, type_name))
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationEngine>();
    assert_sync::<ValidationEngine>();
};
