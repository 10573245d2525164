//! Constraint violation types.
//!
//! This module provides [`Violation`] for a single failed constraint and
//! [`Violations`] for accumulating several of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::FieldPath;
use crate::rule::RuleKind;

/// A single failed constraint.
///
/// `Violation` captures:
/// - **path**: where in the message tree the failing value lives
/// - **rule**: which rule failed
/// - **message**: human-readable description
/// - **field_name**: the declared name of the field the rule belongs to
/// - **value**: the offending value, rendered as a string (optional)
///
/// # Example
///
/// ```rust
/// use vetting::{FieldPath, RuleKind, Violation};
///
/// let violation = Violation::new(
///     FieldPath::root().push_field("code"),
///     RuleKind::Pattern,
///     "code",
///     "must match pattern '[A-Z]+'",
/// )
/// .with_value("abc");
///
/// assert_eq!(violation.rule.code(), "pattern");
/// assert_eq!(violation.value.as_deref(), Some("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The path to the value that failed validation.
    pub path: FieldPath,
    /// The rule that failed.
    pub rule: RuleKind,
    /// Human-readable message.
    pub message: String,
    /// The declared name of the field.
    pub field_name: String,
    /// The offending value, if it is worth showing.
    pub value: Option<String>,
}

impl Violation {
    /// Creates a violation without an offending value.
    pub fn new(
        path: FieldPath,
        rule: RuleKind,
        field_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path,
            rule,
            message: message.into(),
            field_name: field_name.into(),
            value: None,
        }
    }

    /// Returns the violation with the offending value attached.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..self
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {} [{}]", path_str, self.message, self.rule)?;

        if let Some(ref value) = self.value {
            write!(f, " (got: {})", value)?;
        }

        Ok(())
    }
}

impl std::error::Error for Violation {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
};

/// A non-empty collection of violations.
///
/// `Violations` wraps a `NonEmptyVec<Violation>` so that a failed
/// `Validation<T, Violations>` always carries at least one violation.
///
/// # Combining
///
/// `Violations` implements `Semigroup`; combining keeps the left-hand
/// violations first.
///
/// ```rust
/// use vetting::{FieldPath, RuleKind, Violation, Violations};
/// use stillwater::prelude::*;
///
/// let first = Violations::single(Violation::new(
///     FieldPath::from_field("name"), RuleKind::Required, "name", "is required",
/// ));
/// let second = Violations::single(Violation::new(
///     FieldPath::from_field("age"), RuleKind::MinValue, "age", "too small",
/// ));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().field_name, "name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Creates a collection containing a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a collection from a vec, or `None` if it is empty.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        NonEmptyVec::from_vec(violations).map(Self)
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns all violations at the given path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&Violation> {
        self.0.iter().filter(|v| &v.path == path).collect()
    }

    /// Returns all violations of the given rule.
    pub fn with_rule(&self, rule: RuleKind) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.rule == rule).collect()
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Converts this collection into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} violation(s):", self.len())?;
        for (i, violation) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violations>();
    assert_sync::<Violations>();
};
