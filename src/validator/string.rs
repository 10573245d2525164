//! String field validation.
//!
//! Lengths are counted in Unicode scalar values, not bytes. Patterns must
//! match the whole string.

use serde_json::Value;

use crate::constraint::{Constraint, Rule};
use crate::error::Violation;
use crate::path::FieldPath;

use super::{message_for, FieldValues, KindValidator};

/// Validates `string` fields against length and pattern rules.
pub(crate) struct StringValidator<'a> {
    field: FieldValues<'a>,
}

impl<'a> StringValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>) -> Self {
        Self { field }
    }
}

impl<'a> KindValidator<'a> for StringValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, value: &Value) -> bool {
        value.as_str().is_some_and(str::is_empty)
    }

    fn check_rule(
        &self,
        constraint: &Constraint,
        value: &Value,
        path: &FieldPath,
    ) -> Option<Violation> {
        let s = value.as_str()?;

        let message = match constraint.rule() {
            Rule::Pattern(pattern) if !pattern.matches(s) => message_for(constraint, || {
                format!("must match pattern '{}'", pattern.as_str())
            }),
            Rule::MinLength(min) => {
                let len = s.chars().count();
                if len >= *min {
                    return None;
                }
                message_for(constraint, || {
                    format!("length must be at least {}, got {}", min, len)
                })
            }
            Rule::MaxLength(max) => {
                let len = s.chars().count();
                if len <= *max {
                    return None;
                }
                message_for(constraint, || {
                    format!("length must be at most {}, got {}", max, len)
                })
            }
            _ => return None,
        };

        Some(
            self.field
                .violation(path, constraint.rule().violation_kind(), message)
                .with_value(s),
        )
    }
}
