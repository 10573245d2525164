//! Numeric field validation.

use std::cmp::Ordering;

use serde_json::Value;

use crate::constraint::{Bound, Constraint, Rule};
use crate::error::Violation;
use crate::path::FieldPath;
use crate::rule::RuleKind;
use crate::schema::NumericKind;

use super::{message_for, FieldValues, KindValidator};

/// Validates integer and floating point fields against their bounds.
///
/// Zero is the unset value. A `required` field holding only zeros is
/// reported as missing; otherwise every value written, zero included, is
/// checked against the bounds.
pub(crate) struct NumericValidator<'a> {
    field: FieldValues<'a>,
    kind: NumericKind,
}

impl<'a> NumericValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>, kind: NumericKind) -> Self {
        Self { field, kind }
    }
}

impl<'a> KindValidator<'a> for NumericValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, value: &Value) -> bool {
        match self.kind {
            NumericKind::Int => value.as_i64() == Some(0),
            NumericKind::UInt => value.as_u64() == Some(0),
            NumericKind::Float => value.as_f64() == Some(0.0),
        }
    }

    fn distinct_key(&self, value: &Value) -> String {
        match (self.kind, value.as_f64()) {
            (NumericKind::Float, Some(number)) => number.to_string(),
            _ => value.to_string(),
        }
    }

    fn check_rule(
        &self,
        constraint: &Constraint,
        value: &Value,
        path: &FieldPath,
    ) -> Option<Violation> {
        let Value::Number(number) = value else {
            return None;
        };

        let (bound, relation) = match constraint.rule() {
            Rule::Min(bound) => (bound, lower(bound)),
            Rule::Max(bound) => (bound, upper(bound)),
            _ => return None,
        };
        let rule = constraint.rule().violation_kind();

        let ordering = bound.value.compare(number)?;
        if within(bound, rule, ordering) {
            return None;
        }

        let message = message_for(constraint, || {
            format!("must be {} {}, got {}", relation, bound.value, number)
        });
        Some(
            self.field
                .violation(path, rule, message)
                .with_value(number.to_string()),
        )
    }
}

fn within(bound: &Bound, rule: RuleKind, ordering: Ordering) -> bool {
    match (rule, ordering) {
        (_, Ordering::Equal) => bound.inclusive,
        (RuleKind::MinValue, Ordering::Greater) | (RuleKind::MaxValue, Ordering::Less) => true,
        _ => false,
    }
}

fn lower(bound: &Bound) -> &'static str {
    if bound.inclusive {
        "at least"
    } else {
        "greater than"
    }
}

fn upper(bound: &Bound) -> &'static str {
    if bound.inclusive {
        "at most"
    } else {
        "less than"
    }
}
