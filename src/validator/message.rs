//! Nested message field validation.

use serde_json::Value;

use crate::engine::ValidationEngine;
use crate::error::EngineError;
use crate::path::FieldPath;
use crate::report::ValidationReport;
use crate::validation::ValidationContext;

use super::{FieldValues, KindValidator};

/// Validates message-kind fields by validating each nested message against
/// its own schema.
///
/// The empty message `{}` is the unset value and is not descended into.
pub(crate) struct MessageValidator<'a> {
    field: FieldValues<'a>,
    type_name: &'a str,
}

impl<'a> MessageValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>, type_name: &'a str) -> Self {
        Self { field, type_name }
    }
}

impl<'a> KindValidator<'a> for MessageValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|o| o.is_empty())
    }

    fn descend(
        &self,
        value: &Value,
        path: &FieldPath,
        engine: &ValidationEngine,
        context: &ValidationContext,
    ) -> Result<ValidationReport, EngineError> {
        if !self.field.descriptor.constraint_set().validates_nested() {
            return Ok(ValidationReport::new());
        }
        descend_into(self.type_name, value, path, engine, context)
    }
}

/// Validates `value` as a message of `type_name` one level deeper.
pub(crate) fn descend_into(
    type_name: &str,
    value: &Value,
    path: &FieldPath,
    engine: &ValidationEngine,
    context: &ValidationContext,
) -> Result<ValidationReport, EngineError> {
    let schema = context.resolve(type_name, path)?;
    let nested = context.increment_depth(path)?;
    tracing::trace!(
        path = %path,
        message_type = type_name,
        depth = nested.depth(),
        "descending into nested message"
    );
    engine.validate_at(value, &schema, path, &nested)
}
