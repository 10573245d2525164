//! Field kinds.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::constraint::Rule;

/// The representation of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Signed integers (`int32`, `int64`, `sint*`, `sfixed*`).
    Int,
    /// Unsigned integers (`uint32`, `uint64`, `fixed*`).
    UInt,
    /// Floating point (`float`, `double`).
    Float,
}

/// An enum type: its name and declared values.
///
/// The value numbered `0` is the enum's default; a field holding it is
/// considered unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    values: IndexMap<String, i32>,
}

impl EnumDescriptor {
    /// Creates an enum type with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    /// Declares a value.
    pub fn value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.insert(name.into(), number);
        self
    }

    /// Returns the enum type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number declared for `name`.
    pub fn number_of(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }

    /// Returns true if some value is declared with `number`.
    pub fn is_defined(&self, number: i64) -> bool {
        self.values.values().any(|&n| i64::from(n) == number)
    }
}

/// The declared type category of a field.
///
/// Validation strategy is chosen from this kind alone, never from the
/// runtime shape of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// `bool`
    Boolean,
    /// Any numeric scalar.
    Numeric(NumericKind),
    /// `string`
    String,
    /// An enum type.
    Enum(Arc<EnumDescriptor>),
    /// A map whose values have the given kind. Keys are strings.
    Map(Box<FieldKind>),
    /// A nested message, by type name.
    Message(String),
}

impl FieldKind {
    /// Returns the kind's display name.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Numeric(NumericKind::Int) => "int",
            FieldKind::Numeric(NumericKind::UInt) => "uint",
            FieldKind::Numeric(NumericKind::Float) => "float",
            FieldKind::String => "string",
            FieldKind::Enum(_) => "enum",
            FieldKind::Map(_) => "map",
            FieldKind::Message(_) => "message",
        }
    }

    /// Returns the message type this kind validates into, looking through
    /// map values.
    pub fn message_type(&self) -> Option<&str> {
        match self {
            FieldKind::Message(type_name) => Some(type_name.as_str()),
            FieldKind::Map(values) => values.message_type(),
            _ => None,
        }
    }

    /// Returns true if a value-level rule can apply to this kind.
    ///
    /// Collection rules (`min_size`, `max_size`, `distinct`) depend on
    /// cardinality rather than kind and are not covered here.
    pub fn supports(&self, rule: &Rule) -> bool {
        matches!(
            (self, rule),
            (FieldKind::Numeric(_), Rule::Min(_) | Rule::Max(_))
                | (
                    FieldKind::String,
                    Rule::Pattern(_) | Rule::MinLength(_) | Rule::MaxLength(_)
                )
                | (FieldKind::Enum(_), Rule::DefinedOnly)
        )
    }

    /// Returns the value a singular field of this kind holds when it is
    /// absent.
    pub fn default_value(&self) -> Value {
        match self {
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::Numeric(NumericKind::Float) => json!(0.0),
            FieldKind::Numeric(_) | FieldKind::Enum(_) => json!(0),
            FieldKind::String => Value::String(String::new()),
            FieldKind::Map(_) | FieldKind::Message(_) => Value::Object(Default::default()),
        }
    }
}
