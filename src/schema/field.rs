//! Field descriptors.

use std::sync::Arc;

use crate::constraint::ConstraintSet;

use super::kind::{EnumDescriptor, FieldKind, NumericKind};

/// Whether a field holds one value or a sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// A single value.
    #[default]
    Singular,
    /// An ordered sequence of values.
    Repeated,
}

/// Everything the engine needs to know about one declared field.
///
/// # Example
///
/// ```rust
/// use vetting::{ConstraintSet, FieldDescriptor};
///
/// let tags = FieldDescriptor::string("tags")
///     .repeated()
///     .constraints(ConstraintSet::new().distinct().max_size(8));
///
/// assert!(tags.is_repeated());
/// assert_eq!(tags.kind().name(), "string");
/// ```
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    cardinality: Cardinality,
    constraints: ConstraintSet,
}

impl FieldDescriptor {
    /// Creates a singular, unconstrained field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            cardinality: Cardinality::Singular,
            constraints: ConstraintSet::new(),
        }
    }

    /// Creates a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Creates a signed integer field.
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Numeric(NumericKind::Int))
    }

    /// Creates an unsigned integer field.
    pub fn uint(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Numeric(NumericKind::UInt))
    }

    /// Creates a floating point field.
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Numeric(NumericKind::Float))
    }

    /// Creates a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Creates an enum field.
    pub fn enumeration(name: impl Into<String>, descriptor: impl Into<Arc<EnumDescriptor>>) -> Self {
        Self::new(name, FieldKind::Enum(descriptor.into()))
    }

    /// Creates a map field with string keys and values of `values` kind.
    pub fn map(name: impl Into<String>, values: FieldKind) -> Self {
        Self::new(name, FieldKind::Map(Box::new(values)))
    }

    /// Creates a nested message field of type `type_name`.
    pub fn message(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Message(type_name.into()))
    }

    /// Makes the field repeated.
    ///
    /// Map fields are collections already; their cardinality is ignored.
    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    /// Sets the field's constraints.
    pub fn constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns the declared cardinality.
    ///
    /// This is what was declared; a repeated map still reports `Repeated`.
    /// Use [`is_repeated`](Self::is_repeated) to ask how values are read.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Returns true if the field holds a sequence of values.
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated && !matches!(self.kind, FieldKind::Map(_))
    }

    /// Returns true if the field holds entries that can be counted.
    pub fn is_collection(&self) -> bool {
        self.is_repeated() || matches!(self.kind, FieldKind::Map(_))
    }

    /// Returns the declared constraints.
    pub fn constraint_set(&self) -> &ConstraintSet {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_is_never_repeated() {
        let field = FieldDescriptor::map("labels", FieldKind::String).repeated();
        assert!(!field.is_repeated());
        assert!(field.is_collection());
    }

    #[test]
    fn test_cardinality_getter() {
        assert_eq!(FieldDescriptor::string("name").cardinality(), Cardinality::Singular);
        let tags = FieldDescriptor::string("tags").repeated();
        assert_eq!(tags.cardinality(), Cardinality::Repeated);
        assert!(tags.is_repeated());
    }

    #[test]
    fn test_singular_is_not_a_collection() {
        let field = FieldDescriptor::int("count");
        assert!(!field.is_repeated());
        assert!(!field.is_collection());
    }
}
