//! Schema-authoring defects detected while validating.

use crate::path::FieldPath;

/// A declared constraint that cannot meaningfully apply to its field.
///
/// Configuration errors describe problems with the schema, not with the
/// data. They are collected next to violations (warning level) so that a
/// consumer can tell "the data is bad" apart from "the declared rules are
/// contradictory".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// `required` (or `strict`) declared on a singular boolean field.
    ///
    /// A boolean has no encoding that distinguishes `false` from "not set",
    /// so the rule can never be enforced.
    #[error("{message_type}.{field} ({path}): 'required' has no effect on a boolean field")]
    RequiredOnBoolean {
        /// The message type declaring the field.
        message_type: String,
        /// The field name.
        field: String,
        /// Where the field was first encountered.
        path: FieldPath,
    },

    /// A rule declared on a field kind that cannot support it.
    #[error("{message_type}.{field} ({path}): rule '{rule}' cannot apply to a {kind} field")]
    InapplicableRule {
        /// The message type declaring the field.
        message_type: String,
        /// The field name.
        field: String,
        /// Where the field was first encountered.
        path: FieldPath,
        /// The declared rule name.
        rule: &'static str,
        /// The field's kind, prefixed with its cardinality when repeated.
        kind: String,
    },
}

impl ConfigurationError {
    /// Returns the message type declaring the offending field.
    pub fn message_type(&self) -> &str {
        match self {
            ConfigurationError::RequiredOnBoolean { message_type, .. }
            | ConfigurationError::InapplicableRule { message_type, .. } => message_type,
        }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &str {
        match self {
            ConfigurationError::RequiredOnBoolean { field, .. }
            | ConfigurationError::InapplicableRule { field, .. } => field,
        }
    }

    /// Returns the path at which the field was first encountered.
    pub fn path(&self) -> &FieldPath {
        match self {
            ConfigurationError::RequiredOnBoolean { path, .. }
            | ConfigurationError::InapplicableRule { path, .. } => path,
        }
    }

    /// Returns true if both errors describe the same schema defect,
    /// regardless of where in the data it was met.
    pub fn same_defect(&self, other: &ConfigurationError) -> bool {
        match (self, other) {
            (
                ConfigurationError::RequiredOnBoolean { .. },
                ConfigurationError::RequiredOnBoolean { .. },
            ) => self.message_type() == other.message_type() && self.field() == other.field(),
            (
                ConfigurationError::InapplicableRule { rule: a, .. },
                ConfigurationError::InapplicableRule { rule: b, .. },
            ) => {
                a == b
                    && self.message_type() == other.message_type()
                    && self.field() == other.field()
            }
            _ => false,
        }
    }
}
