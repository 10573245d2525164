//! Hard failures that stop a validation call.

use crate::error::ConfigurationError;
use crate::path::FieldPath;

/// A failure that prevents validation from being attempted at all.
///
/// These are collaborator contract violations (the value does not have the
/// shape its schema declares, a referenced message type does not exist, ...),
/// not validation outcomes. They are returned immediately and not retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A value validated as a message is not a JSON object.
    #[error("{path}: expected a message object, got {got}")]
    NotAMessage {
        /// Where the value was found.
        path: FieldPath,
        /// The JSON type actually found.
        got: &'static str,
    },

    /// A field value does not match the field's declared kind.
    #[error("{path}: expected a {expected} value, got {got}")]
    KindMismatch {
        /// Where the value was found.
        path: FieldPath,
        /// The declared kind.
        expected: &'static str,
        /// The JSON type actually found.
        got: &'static str,
    },

    /// A repeated field is not an array, or a singular field is.
    #[error("{path}: {}", cardinality_message(.repeated))]
    CardinalityMismatch {
        /// Where the value was found.
        path: FieldPath,
        /// Whether the field was declared repeated.
        repeated: bool,
    },

    /// A message-kind field refers to a type the resolver does not know.
    #[error("{path}: unknown message type '{type_name}'")]
    UnknownMessageType {
        /// Where the reference was followed.
        path: FieldPath,
        /// The unresolved type name.
        type_name: String,
    },

    /// Nesting went deeper than the configured work budget.
    #[error("{path}: maximum nesting depth {max_depth} exceeded")]
    DepthExceeded {
        /// Where the budget ran out.
        path: FieldPath,
        /// The configured limit.
        max_depth: usize,
    },

    /// A configuration error promoted to a hard failure.
    #[error("configuration error: {0}")]
    Configuration(ConfigurationError),
}

fn cardinality_message(repeated: &bool) -> &'static str {
    if *repeated {
        "repeated field must be an array"
    } else {
        "singular field must not be an array"
    }
}
