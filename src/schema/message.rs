//! Message schemas.

use indexmap::IndexMap;

use super::field::FieldDescriptor;

/// The declared fields of one message type, in declaration order.
///
/// Declaration order is the order in which violations are reported.
#[derive(Debug, Clone)]
pub struct MessageSchema {
    type_name: String,
    fields: IndexMap<String, FieldDescriptor>,
}

impl MessageSchema {
    /// Creates a message type with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Declares a field.
    ///
    /// Redeclaring a name replaces the earlier descriptor but keeps its
    /// position.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    /// Returns the message type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Returns the field named `name`.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Returns the message types referenced by this schema's fields, in
    /// declaration order and without duplicates.
    pub fn referenced_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for type_name in self.fields().filter_map(|f| f.kind().message_type()) {
            if !types.contains(&type_name) {
                types.push(type_name);
            }
        }
        types
    }
}
