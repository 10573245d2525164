//! Enum field validation.

use serde_json::Value;

use crate::constraint::{Constraint, Rule};
use crate::error::Violation;
use crate::path::FieldPath;
use crate::schema::EnumDescriptor;

use super::{message_for, FieldValues, KindValidator};

/// Validates enum fields.
///
/// Values may be given by number or by declared name. The value numbered
/// `0` is the default and counts as unset.
pub(crate) struct EnumValidator<'a> {
    field: FieldValues<'a>,
    descriptor: &'a EnumDescriptor,
}

impl<'a> EnumValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>, descriptor: &'a EnumDescriptor) -> Self {
        Self { field, descriptor }
    }

    fn number(&self, value: &Value) -> Option<i64> {
        match value {
            Value::String(name) => self.descriptor.number_of(name).map(i64::from),
            other => other.as_i64(),
        }
    }
}

impl<'a> KindValidator<'a> for EnumValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, value: &Value) -> bool {
        self.number(value) == Some(0)
    }

    fn distinct_key(&self, value: &Value) -> String {
        match self.number(value) {
            Some(number) => number.to_string(),
            None => value.to_string(),
        }
    }

    fn check_rule(
        &self,
        constraint: &Constraint,
        value: &Value,
        path: &FieldPath,
    ) -> Option<Violation> {
        if !matches!(constraint.rule(), Rule::DefinedOnly) {
            return None;
        }
        let defined = self
            .number(value)
            .is_some_and(|n| self.descriptor.is_defined(n));
        if defined {
            return None;
        }

        let message = message_for(constraint, || {
            format!("value is not declared by enum '{}'", self.descriptor.name())
        });
        let shown = match value {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };
        Some(
            self.field
                .violation(path, constraint.rule().violation_kind(), message)
                .with_value(shown),
        )
    }
}
