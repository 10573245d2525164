//! Traits for schema resolution.
//!
//! This module provides the [`SchemaResolver`] trait through which the
//! engine looks up nested message types by name.

use std::sync::Arc;

use super::message::MessageSchema;

/// Resolves message type names to their schemas.
///
/// Message-kind fields refer to their type by name, which is what allows a
/// type to contain itself. The engine resolves names lazily while walking
/// the data, so a self-referential schema only recurses as deep as the
/// data does.
///
/// The `Send + Sync` bounds let one resolver back validations on many
/// threads at once.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use vetting::{FieldDescriptor, MessageSchema, SchemaRegistry, SchemaResolver};
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register(MessageSchema::new("Node").field(FieldDescriptor::message("next", "Node")))
///     .unwrap();
///
/// let resolver: Arc<dyn SchemaResolver> = Arc::new(registry);
/// assert!(resolver.resolve("Node").is_some());
/// assert!(resolver.resolve("Edge").is_none());
/// ```
pub trait SchemaResolver: Send + Sync {
    /// Returns the schema registered for `type_name`, if any.
    fn resolve(&self, type_name: &str) -> Option<Arc<MessageSchema>>;
}
