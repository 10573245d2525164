//! The outcome of one validation call.

use std::fmt::{self, Display};

use stillwater::Validation;

use crate::error::{ConfigurationError, Violation, Violations};
use crate::path::FieldPath;
use crate::rule::RuleKind;
use crate::ValidationResult;

/// Violations and configuration warnings produced by one validation call.
///
/// An empty violation list means the message is valid. Warnings never make a
/// message invalid; they describe constraints that could not be applied.
///
/// # Example
///
/// ```rust
/// use vetting::{ConstraintSet, FieldDescriptor, MessageSchema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register(
///     MessageSchema::new("Flags")
///         .field(FieldDescriptor::boolean("enabled").constraints(ConstraintSet::new().required())),
/// ).unwrap();
///
/// let report = registry.validate("Flags", &json!({"enabled": false})).unwrap();
/// assert!(report.is_valid());
/// assert_eq!(report.warnings().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    warnings: Vec<ConfigurationError>,
}

impl ValidationReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Records a warning unless the same defect was already recorded.
    pub(crate) fn warn(&mut self, warning: ConfigurationError) {
        if !self.warnings.iter().any(|w| w.same_defect(&warning)) {
            self.warnings.push(warning);
        }
    }

    /// Appends another report, keeping this report's entries first.
    pub(crate) fn append(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
        for warning in other.warnings {
            self.warn(warning);
        }
    }

    /// Returns true if no violation was found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the configuration warnings.
    pub fn warnings(&self) -> &[ConfigurationError] {
        &self.warnings
    }

    /// Returns true if any configuration warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns all violations at the given path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&Violation> {
        self.violations.iter().filter(|v| &v.path == path).collect()
    }

    /// Returns all violations of the given rule.
    pub fn with_rule(&self, rule: RuleKind) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule == rule).collect()
    }

    /// Converts the violations into a `Validation`, dropping warnings.
    pub fn to_validation(&self) -> ValidationResult<()> {
        match Violations::from_vec(self.violations.clone()) {
            Some(violations) => Validation::Failure(violations),
            None => Validation::Success(()),
        }
    }

    /// Splits the report into its violations and warnings.
    pub fn into_parts(self) -> (Vec<Violation>, Vec<ConfigurationError>) {
        (self.violations, self.warnings)
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            writeln!(f, "Valid")?;
        } else {
            writeln!(f, "Invalid with {} violation(s):", self.violations.len())?;
            for (i, violation) in self.violations.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, violation)?;
            }
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {}", warning)?;
        }
        Ok(())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationReport>();
    assert_sync::<ValidationReport>();
};
