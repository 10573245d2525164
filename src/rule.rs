//! Rule identifiers carried by violations.

use std::fmt::{self, Display};

/// The kind of rule a [`Violation`](crate::Violation) reports.
///
/// Every variant has a stable machine-readable [`code`](RuleKind::code) for
/// programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// A required (or strict) field holds only unset values.
    Required,
    /// A numeric value is below its lower bound.
    MinValue,
    /// A numeric value is above its upper bound.
    MaxValue,
    /// A string does not match its pattern.
    Pattern,
    /// A string has fewer characters than allowed.
    MinLength,
    /// A string has more characters than allowed.
    MaxLength,
    /// A repeated or map field has fewer entries than allowed.
    MinSize,
    /// A repeated or map field has more entries than allowed.
    MaxSize,
    /// A repeated field contains duplicate elements.
    Distinct,
    /// An enum value is not declared by its enum type.
    DefinedEnum,
}

impl RuleKind {
    /// Returns the machine-readable code for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinValue => "min_value",
            RuleKind::MaxValue => "max_value",
            RuleKind::Pattern => "pattern",
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::MinSize => "min_size",
            RuleKind::MaxSize => "max_size",
            RuleKind::Distinct => "distinct",
            RuleKind::DefinedEnum => "defined_enum",
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
