//! Declarative field constraints.
//!
//! A [`ConstraintSet`] describes everything a single field must satisfy. It is
//! built once from schema metadata with consuming builder methods and never
//! changes afterwards.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;

use regex::Regex;
use serde_json::Number;

use crate::rule::RuleKind;

/// A numeric bound value.
///
/// Integers are kept exact so that bounds near `i64::MAX` or `u64::MAX`
/// compare correctly; floats compare as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundValue {
    /// An integer bound.
    Int(i128),
    /// A floating point bound.
    Float(f64),
}

impl BoundValue {
    /// Compares a JSON number against this bound value.
    ///
    /// Returns `None` only when the comparison is undefined (NaN bound).
    pub fn compare(&self, number: &Number) -> Option<Ordering> {
        let exact = number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from));
        match (exact, self) {
            (Some(n), BoundValue::Int(bound)) => Some(n.cmp(bound)),
            (Some(n), BoundValue::Float(bound)) => (n as f64).partial_cmp(bound),
            (None, BoundValue::Int(bound)) => number.as_f64()?.partial_cmp(&(*bound as f64)),
            (None, BoundValue::Float(bound)) => number.as_f64()?.partial_cmp(bound),
        }
    }
}

impl Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundValue::Int(n) => write!(f, "{}", n),
            BoundValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<i32> for BoundValue {
    fn from(value: i32) -> Self {
        BoundValue::Int(value.into())
    }
}

impl From<i64> for BoundValue {
    fn from(value: i64) -> Self {
        BoundValue::Int(value.into())
    }
}

impl From<u64> for BoundValue {
    fn from(value: u64) -> Self {
        BoundValue::Int(value.into())
    }
}

impl From<f64> for BoundValue {
    fn from(value: f64) -> Self {
        BoundValue::Float(value)
    }
}

/// A lower or upper numeric bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    /// The bound value.
    pub value: BoundValue,
    /// Whether a value equal to the bound is allowed.
    pub inclusive: bool,
}

/// A compiled string pattern.
///
/// Patterns must match the whole string, not a substring of it.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
}

impl Pattern {
    /// Compiles `source` as a full-string pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            regex,
            source: source.to_string(),
        })
    }

    /// Returns true if the whole of `value` matches.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Returns the pattern as it was declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// A single kind-specific rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Numeric lower bound.
    Min(Bound),
    /// Numeric upper bound.
    Max(Bound),
    /// String must match the pattern.
    Pattern(Pattern),
    /// String must have at least this many characters.
    MinLength(usize),
    /// String must have at most this many characters.
    MaxLength(usize),
    /// Repeated or map field must have at least this many entries.
    MinSize(usize),
    /// Repeated or map field must have at most this many entries.
    MaxSize(usize),
    /// Repeated field elements must be pairwise distinct.
    Distinct,
    /// Enum values must be declared by the enum type.
    DefinedOnly,
}

impl Rule {
    /// Returns the rule's declared name, as used in configuration errors.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Pattern(_) => "pattern",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::MinSize(_) => "min_size",
            Rule::MaxSize(_) => "max_size",
            Rule::Distinct => "distinct",
            Rule::DefinedOnly => "defined_only",
        }
    }

    /// Returns the kind of violation this rule produces.
    pub fn violation_kind(&self) -> RuleKind {
        match self {
            Rule::Min(_) => RuleKind::MinValue,
            Rule::Max(_) => RuleKind::MaxValue,
            Rule::Pattern(_) => RuleKind::Pattern,
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
            Rule::MinSize(_) => RuleKind::MinSize,
            Rule::MaxSize(_) => RuleKind::MaxSize,
            Rule::Distinct => RuleKind::Distinct,
            Rule::DefinedOnly => RuleKind::DefinedEnum,
        }
    }

    /// Returns true for rules that apply to a whole collection rather than
    /// to individual values.
    pub fn is_collection_rule(&self) -> bool {
        matches!(self, Rule::MinSize(_) | Rule::MaxSize(_) | Rule::Distinct)
    }
}

/// A rule together with its optional custom message.
#[derive(Debug, Clone)]
pub struct Constraint {
    rule: Rule,
    message: Option<String>,
}

impl Constraint {
    /// Returns the rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Returns the custom message, if one was declared.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The constraints declared on one field.
///
/// # Example
///
/// ```rust
/// use vetting::ConstraintSet;
///
/// let constraints = ConstraintSet::new()
///     .required()
///     .if_missing("a product code is needed")
///     .pattern(r"[A-Z]{3}-\d{4}")
///     .unwrap()
///     .error("product codes look like ABC-1234");
///
/// assert!(constraints.is_required());
/// assert_eq!(constraints.rules().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    required: bool,
    strict: bool,
    validate_nested: Option<bool>,
    if_missing: Option<String>,
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required: at least one value must be set.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Treats the field as required even without an explicit `required`.
    ///
    /// On repeated and map fields this turns "zero entries" into a
    /// violation.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Enables or disables validation of nested message values.
    ///
    /// Message fields are validated recursively unless this is set to
    /// `false`. Declaring it on a field that holds no messages is a
    /// configuration error.
    pub fn validate_nested(mut self, enabled: bool) -> Self {
        self.validate_nested = Some(enabled);
        self
    }

    /// Sets the message reported when a required field is unset.
    pub fn if_missing(mut self, message: impl Into<String>) -> Self {
        self.if_missing = Some(message.into());
        self
    }

    /// Adds an inclusive lower bound.
    pub fn min(self, value: impl Into<BoundValue>) -> Self {
        self.push(Rule::Min(Bound {
            value: value.into(),
            inclusive: true,
        }))
    }

    /// Adds an exclusive lower bound.
    pub fn min_exclusive(self, value: impl Into<BoundValue>) -> Self {
        self.push(Rule::Min(Bound {
            value: value.into(),
            inclusive: false,
        }))
    }

    /// Adds an inclusive upper bound.
    pub fn max(self, value: impl Into<BoundValue>) -> Self {
        self.push(Rule::Max(Bound {
            value: value.into(),
            inclusive: true,
        }))
    }

    /// Adds an exclusive upper bound.
    pub fn max_exclusive(self, value: impl Into<BoundValue>) -> Self {
        self.push(Rule::Max(Bound {
            value: value.into(),
            inclusive: false,
        }))
    }

    /// Adds both bounds of an inclusive range.
    ///
    /// Equivalent to `.min(start).max(end)`.
    pub fn range(self, range: RangeInclusive<i64>) -> Self {
        self.min(*range.start()).max(*range.end())
    }

    /// Adds a full-string regex pattern.
    ///
    /// Returns an error if the pattern does not compile.
    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Pattern::new(pattern)?;
        Ok(self.push(Rule::Pattern(pattern)))
    }

    /// Adds a minimum string length, counted in characters.
    pub fn min_len(self, min: usize) -> Self {
        self.push(Rule::MinLength(min))
    }

    /// Adds a maximum string length, counted in characters.
    pub fn max_len(self, max: usize) -> Self {
        self.push(Rule::MaxLength(max))
    }

    /// Adds a minimum entry count for repeated or map fields.
    pub fn min_size(self, min: usize) -> Self {
        self.push(Rule::MinSize(min))
    }

    /// Adds a maximum entry count for repeated or map fields.
    pub fn max_size(self, max: usize) -> Self {
        self.push(Rule::MaxSize(max))
    }

    /// Requires the elements of a repeated field to be distinct.
    pub fn distinct(self) -> Self {
        self.push(Rule::Distinct)
    }

    /// Requires enum values to be declared by the enum type.
    pub fn defined_only(self) -> Self {
        self.push(Rule::DefinedOnly)
    }

    /// Sets a custom error message for the most recent rule.
    ///
    /// If no rules have been added yet, this sets the `if_missing` message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        match self.constraints.last_mut() {
            Some(last) => last.message = Some(message.into()),
            None => self.if_missing = Some(message.into()),
        }
        self
    }

    fn push(mut self, rule: Rule) -> Self {
        self.constraints.push(Constraint {
            rule,
            message: None,
        });
        self
    }

    /// Returns true if the field was declared required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if either `required` or `strict` was declared.
    pub fn demands_value(&self) -> bool {
        self.required || self.strict
    }

    /// Returns the explicit nested-validation setting, if any.
    pub fn nested_setting(&self) -> Option<bool> {
        self.validate_nested
    }

    /// Returns true unless nested validation was explicitly disabled.
    pub fn validates_nested(&self) -> bool {
        self.validate_nested.unwrap_or(true)
    }

    /// Returns the custom missing-value message, if any.
    pub fn missing_message(&self) -> Option<&str> {
        self.if_missing.as_deref()
    }

    /// Returns the declared rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn number(value: serde_json::Value) -> Number {
        match value {
            serde_json::Value::Number(n) => n,
            other => panic!("not a number: {}", other),
        }
    }

    #[test]
    fn test_bound_compare_integers() {
        let bound = BoundValue::from(10);
        assert_eq!(bound.compare(&number(json!(5))), Some(Ordering::Less));
        assert_eq!(bound.compare(&number(json!(10))), Some(Ordering::Equal));
        assert_eq!(bound.compare(&number(json!(11))), Some(Ordering::Greater));
    }

    #[test]
    fn test_bound_compare_large_unsigned() {
        let bound = BoundValue::from(i64::MAX);
        assert_eq!(
            bound.compare(&number(json!(u64::MAX))),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_bound_compare_mixed() {
        let bound = BoundValue::from(0.5);
        assert_eq!(bound.compare(&number(json!(0))), Some(Ordering::Less));
        assert_eq!(bound.compare(&number(json!(1))), Some(Ordering::Greater));

        let bound = BoundValue::from(1);
        assert_eq!(bound.compare(&number(json!(0.99))), Some(Ordering::Less));
    }

    #[test]
    fn test_pattern_matches_whole_string() {
        let pattern = Pattern::new("[A-Z]+").unwrap();
        assert!(pattern.matches("ABC"));
        assert!(!pattern.matches("ABCd"));
        assert!(!pattern.matches("xABC"));
        assert_eq!(pattern.as_str(), "[A-Z]+");
    }

    #[test]
    fn test_pattern_alternation_is_anchored() {
        let pattern = Pattern::new("a|b").unwrap();
        assert!(pattern.matches("a"));
        assert!(!pattern.matches("ab"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(ConstraintSet::new().pattern("[invalid").is_err());
    }

    #[test]
    fn test_error_targets_last_rule() {
        let set = ConstraintSet::new().min_len(2).max_len(5).error("too long");
        let messages: Vec<_> = set.rules().map(|c| c.message()).collect();
        assert_eq!(messages, vec![None, Some("too long")]);
        assert_eq!(set.missing_message(), None);
    }

    #[test]
    fn test_error_without_rules_sets_missing_message() {
        let set = ConstraintSet::new().required().error("give me a name");
        assert_eq!(set.missing_message(), Some("give me a name"));
    }

    #[test]
    fn test_range_adds_two_bounds() {
        let set = ConstraintSet::new().range(1..=10);
        let names: Vec<_> = set.rules().map(|c| c.rule().name()).collect();
        assert_eq!(names, vec!["min", "max"]);
    }

    #[test]
    fn test_nested_defaults_to_enabled() {
        let set = ConstraintSet::new();
        assert!(set.validates_nested());
        assert_eq!(set.nested_setting(), None);

        let set = set.validate_nested(false);
        assert!(!set.validates_nested());
    }

    #[test]
    fn test_demands_value() {
        assert!(!ConstraintSet::new().demands_value());
        assert!(ConstraintSet::new().required().demands_value());
        assert!(ConstraintSet::new().strict().demands_value());
    }
}
