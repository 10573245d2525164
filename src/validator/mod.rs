//! Per-kind field validators.
//!
//! Every field kind has its own validator. They share one contract, driven
//! by [`run`]:
//!
//! 1. Report configuration errors for rules the field cannot support.
//! 2. If the field is `required` or `strict` and holds only unset values,
//!    report one `required` violation and stop.
//! 3. Check collection rules (`min_size`, `max_size`, `distinct`).
//! 4. For each value, in order: check kind-specific rules, then descend
//!    into nested messages that are set. The default standing in for an
//!    absent singular field is not checked against rules.

mod boolean;
mod enumeration;
mod map;
mod message;
mod numeric;
mod string;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

use crate::access::ensure_kind;
use crate::constraint::{Constraint, Rule};
use crate::engine::ValidationEngine;
use crate::error::{ConfigurationError, EngineError, Violation};
use crate::path::FieldPath;
use crate::report::ValidationReport;
use crate::rule::RuleKind;
use crate::schema::{FieldDescriptor, FieldKind};
use crate::validation::ValidationContext;

pub(crate) use boolean::BooleanValidator;
pub(crate) use enumeration::EnumValidator;
pub(crate) use map::MapValidator;
pub(crate) use message::MessageValidator;
pub(crate) use numeric::NumericValidator;
pub(crate) use string::StringValidator;

/// The values of one field, ready to be validated.
pub(crate) struct FieldValues<'a> {
    pub(crate) message_type: &'a str,
    pub(crate) descriptor: &'a FieldDescriptor,
    pub(crate) values: Vec<Cow<'a, Value>>,
    pub(crate) path: FieldPath,
    /// The field is singular and absent; its one value is the kind default.
    pub(crate) defaulted: bool,
}

impl<'a> FieldValues<'a> {
    /// Returns the path of the value at `index`.
    pub(crate) fn element_path(&self, index: usize) -> FieldPath {
        if self.descriptor.is_repeated() {
            self.path.push_index(index)
        } else {
            self.path.clone()
        }
    }

    /// Creates a violation of this field.
    pub(crate) fn violation(
        &self,
        path: &FieldPath,
        rule: RuleKind,
        message: String,
    ) -> Violation {
        Violation::new(path.clone(), rule, self.descriptor.name(), message)
    }
}

/// Kind-specific behaviour plugged into [`run`].
pub(crate) trait KindValidator<'a> {
    /// Returns the field being validated.
    fn field(&self) -> &FieldValues<'a>;

    /// Returns true if `value` is this kind's "not set" value.
    fn is_unset(&self, value: &Value) -> bool;

    /// Returns false when presence cannot be told apart from the default.
    fn presence_observable(&self) -> bool {
        true
    }

    /// Returns the number of entries counted by size rules.
    fn entry_count(&self) -> usize {
        self.field().values.len()
    }

    /// Returns the key under which `value` is compared by `distinct`.
    ///
    /// Two values with the same key are the same value of this kind.
    fn distinct_key(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Checks one kind-specific rule against one value.
    fn check_rule(
        &self,
        _constraint: &Constraint,
        _value: &Value,
        _path: &FieldPath,
    ) -> Option<Violation> {
        None
    }

    /// Validates what lives inside one set value.
    fn descend(
        &self,
        _value: &Value,
        _path: &FieldPath,
        _engine: &ValidationEngine,
        _context: &ValidationContext,
    ) -> Result<ValidationReport, EngineError> {
        Ok(ValidationReport::new())
    }
}

/// A validator for one field, selected from its declared kind.
pub(crate) enum FieldValidator<'a> {
    Boolean(BooleanValidator<'a>),
    Numeric(NumericValidator<'a>),
    String(StringValidator<'a>),
    Enum(EnumValidator<'a>),
    Map(MapValidator<'a>),
    Message(MessageValidator<'a>),
}

impl<'a> FieldValidator<'a> {
    /// Runs the validator and returns everything it found.
    pub(crate) fn validate(
        &self,
        engine: &ValidationEngine,
        context: &ValidationContext,
    ) -> Result<ValidationReport, EngineError> {
        match self {
            FieldValidator::Boolean(v) => run(v, engine, context),
            FieldValidator::Numeric(v) => run(v, engine, context),
            FieldValidator::String(v) => run(v, engine, context),
            FieldValidator::Enum(v) => run(v, engine, context),
            FieldValidator::Map(v) => run(v, engine, context),
            FieldValidator::Message(v) => run(v, engine, context),
        }
    }
}

fn run<'a, V: KindValidator<'a>>(
    validator: &V,
    engine: &ValidationEngine,
    context: &ValidationContext,
) -> Result<ValidationReport, EngineError> {
    let field = validator.field();
    let descriptor = field.descriptor;
    let constraints = descriptor.constraint_set();
    let mut report = ValidationReport::new();

    for warning in audit(field.message_type, descriptor, &field.path) {
        report.warn(warning);
    }

    for (index, value) in field.values.iter().enumerate() {
        ensure_kind(descriptor.kind(), value, &field.element_path(index))?;
    }

    if validator.presence_observable()
        && constraints.demands_value()
        && field.values.iter().all(|v| validator.is_unset(v))
    {
        let message = constraints
            .missing_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("field '{}' is required", descriptor.name()));
        report.push(field.violation(&field.path, RuleKind::Required, message));
        return Ok(report);
    }

    if descriptor.is_collection() {
        for constraint in constraints.rules().filter(|c| applies(descriptor, c.rule())) {
            if let Some(violation) = check_collection(validator, constraint) {
                report.push(violation);
            }
        }
    }

    for (index, value) in field.values.iter().enumerate() {
        let path = field.element_path(index);
        if !field.defaulted {
            for constraint in constraints
                .rules()
                .filter(|c| !c.rule().is_collection_rule() && applies(descriptor, c.rule()))
            {
                if let Some(violation) = validator.check_rule(constraint, value, &path) {
                    report.push(violation);
                }
            }
        }
        if !validator.is_unset(value) {
            report.append(validator.descend(value, &path, engine, context)?);
        }
    }

    Ok(report)
}

/// Returns true if `rule` can apply to `field`.
fn applies(field: &FieldDescriptor, rule: &Rule) -> bool {
    match rule {
        Rule::Distinct => field.is_repeated(),
        Rule::MinSize(_) | Rule::MaxSize(_) => field.is_collection(),
        _ => field.kind().supports(rule),
    }
}

/// Returns the configuration errors of `field`, as seen at `path`.
pub(crate) fn audit(
    message_type: &str,
    field: &FieldDescriptor,
    path: &FieldPath,
) -> Vec<ConfigurationError> {
    let constraints = field.constraint_set();
    let mut errors = Vec::new();

    if matches!(field.kind(), FieldKind::Boolean)
        && !field.is_repeated()
        && constraints.demands_value()
    {
        errors.push(ConfigurationError::RequiredOnBoolean {
            message_type: message_type.to_string(),
            field: field.name().to_string(),
            path: path.clone(),
        });
    }

    let inapplicable = |rule: &'static str| ConfigurationError::InapplicableRule {
        message_type: message_type.to_string(),
        field: field.name().to_string(),
        path: path.clone(),
        rule,
        kind: kind_label(field),
    };

    for constraint in constraints.rules() {
        if !applies(field, constraint.rule()) {
            errors.push(inapplicable(constraint.rule().name()));
        }
    }

    if constraints.nested_setting().is_some() && field.kind().message_type().is_none() {
        errors.push(inapplicable("validate_nested"));
    }

    errors
}

fn kind_label(field: &FieldDescriptor) -> String {
    if field.is_repeated() {
        format!("repeated {}", field.kind().name())
    } else {
        field.kind().name().to_string()
    }
}

fn check_collection<'a, V: KindValidator<'a>>(
    validator: &V,
    constraint: &Constraint,
) -> Option<Violation> {
    let field = validator.field();
    let count = validator.entry_count();

    let (message, value) = match constraint.rule() {
        Rule::MinSize(min) if count < *min => (
            message_for(constraint, || {
                format!("must have at least {} entries, got {}", min, count)
            }),
            format!("{} entries", count),
        ),
        Rule::MaxSize(max) if count > *max => (
            message_for(constraint, || {
                format!("must have at most {} entries, got {}", max, count)
            }),
            format!("{} entries", count),
        ),
        Rule::Distinct => {
            let keys = field.values.iter().map(|v| validator.distinct_key(v));
            let duplicates: Vec<Vec<usize>> = find_duplicates(keys)
                .into_values()
                .filter(|indices| indices.len() > 1)
                .collect();
            let first = *duplicates.first()?.first()?;
            (
                message_for(constraint, || {
                    format!("duplicate values at indices {:?}", duplicates)
                }),
                field.values[first].to_string(),
            )
        }
        _ => return None,
    };

    Some(
        field
            .violation(&field.path, constraint.rule().violation_kind(), message)
            .with_value(value),
    )
}

/// Groups element indices by key, in first-occurrence order.
fn find_duplicates(keys: impl IntoIterator<Item = String>) -> IndexMap<String, Vec<usize>> {
    let mut seen: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (i, key) in keys.into_iter().enumerate() {
        seen.entry(key).or_default().push(i);
    }
    seen
}

/// Picks the custom message of `constraint`, or builds the default one.
pub(crate) fn message_for(constraint: &Constraint, default: impl FnOnce() -> String) -> String {
    constraint
        .message()
        .map(str::to_string)
        .unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintSet;

    #[test]
    fn test_audit_clean_field() {
        let field = FieldDescriptor::string("name")
            .constraints(ConstraintSet::new().required().min_len(1));
        assert!(audit("User", &field, &FieldPath::from_field("name")).is_empty());
    }

    #[test]
    fn test_audit_bounds_on_string() {
        let field = FieldDescriptor::string("name").constraints(ConstraintSet::new().min(3));
        let errors = audit("User", &field, &FieldPath::from_field("name"));
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ConfigurationError::InapplicableRule { rule: "min", kind, .. } if kind == "string"
        ));
    }

    #[test]
    fn test_audit_required_boolean() {
        let field = FieldDescriptor::boolean("active").constraints(ConstraintSet::new().required());
        let errors = audit("User", &field, &FieldPath::from_field("active"));
        assert!(matches!(&errors[..], [ConfigurationError::RequiredOnBoolean { .. }]));

        let repeated = FieldDescriptor::boolean("votes")
            .repeated()
            .constraints(ConstraintSet::new().required());
        assert!(audit("User", &repeated, &FieldPath::from_field("votes")).is_empty());
    }

    #[test]
    fn test_audit_collection_rules_need_collections() {
        let field = FieldDescriptor::int("count")
            .constraints(ConstraintSet::new().min_size(1).distinct());
        let errors = audit("Stats", &field, &FieldPath::from_field("count"));
        let rules: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ConfigurationError::InapplicableRule { rule, .. } => *rule,
                _ => "",
            })
            .collect();
        assert_eq!(rules, vec!["min_size", "distinct"]);
    }

    #[test]
    fn test_audit_distinct_on_map() {
        let field = FieldDescriptor::map("labels", FieldKind::String)
            .constraints(ConstraintSet::new().max_size(3).distinct());
        let errors = audit("Doc", &field, &FieldPath::from_field("labels"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_audit_nested_flag_on_scalar() {
        let field = FieldDescriptor::string("name")
            .repeated()
            .constraints(ConstraintSet::new().validate_nested(true));
        let errors = audit("User", &field, &FieldPath::from_field("name"));
        assert!(matches!(
            &errors[..],
            [ConfigurationError::InapplicableRule { rule: "validate_nested", kind, .. }]
                if kind == "repeated string"
        ));
    }

    #[test]
    fn test_find_duplicates_first_occurrence_order() {
        let keys = ["b", "a", "b"].map(String::from);
        let groups: Vec<_> = find_duplicates(keys).into_values().collect();
        assert_eq!(groups, vec![vec![0, 2], vec![1]]);
    }
}
