//! Schema registry for named message schemas and type resolution.
//!
//! This module provides the [`SchemaRegistry`] type that stores message
//! schemas by type name and resolves message-kind fields during validation.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crate::engine::ValidationEngine;
use crate::error::{ConfigurationError, EngineError};
use crate::options::EngineOptions;
use crate::path::FieldPath;
use crate::report::ValidationReport;
use crate::schema::{MessageSchema, SchemaResolver};
use crate::validator::audit;

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<IndexMap<String, Arc<MessageSchema>>>>;

/// A thread-safe registry of message schemas, keyed by type name.
///
/// Message-kind fields name their type; the registry resolves those names
/// lazily while validating, so schemas may refer to each other (or to
/// themselves) in any registration order.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same storage.
///
/// # Example
///
/// ```rust
/// use vetting::{ConstraintSet, FieldDescriptor, MessageSchema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
///
/// // A tree node refers to its own type
/// registry.register(
///     MessageSchema::new("Node")
///         .field(FieldDescriptor::string("label").constraints(ConstraintSet::new().required()))
///         .field(FieldDescriptor::message("children", "Node").repeated()),
/// ).unwrap();
///
/// let report = registry.validate("Node", &json!({
///     "label": "root",
///     "children": [{"label": "leaf"}, {"label": ""}]
/// })).unwrap();
///
/// assert_eq!(report.violations().len(), 1);
/// assert_eq!(report.violations()[0].path.to_string(), "children[1].label");
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
    options: EngineOptions,
}

impl SchemaRegistry {
    /// Creates a new empty registry with default engine options.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(IndexMap::new())),
            options: EngineOptions::default(),
        }
    }

    /// Sets the options passed to every engine this registry creates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::{EngineOptions, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new()
    ///     .with_options(EngineOptions::new().with_max_depth(16));
    /// assert_eq!(registry.engine().options().max_depth(), Some(16));
    /// ```
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers a schema under its type name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the type name is already
    /// registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::{MessageSchema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register(MessageSchema::new("User")).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register(MessageSchema::new("User")).is_err());
    /// ```
    pub fn register(&self, schema: MessageSchema) -> Result<(), RegistryError> {
        let mut schemas = self.schemas.write();
        let name = schema.type_name().to_string();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(message_type = %name, fields = schema.fields().count(), "registered schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Retrieves a schema by type name.
    pub fn get(&self, type_name: &str) -> Option<Arc<MessageSchema>> {
        self.schemas.read().get(type_name).cloned()
    }

    /// Returns the registered type names in registration order.
    pub fn type_names(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }

    /// Returns the message types referenced by registered schemas that are
    /// not themselves registered.
    ///
    /// This should be called after all schemas are registered. The result is
    /// sorted and free of duplicates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::{FieldDescriptor, MessageSchema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register(
    ///     MessageSchema::new("Order").field(FieldDescriptor::message("buyer", "Customer")),
    /// ).unwrap();
    ///
    /// assert_eq!(registry.unresolved_types(), vec!["Customer"]);
    /// ```
    pub fn unresolved_types(&self) -> Vec<String> {
        let schemas = self.schemas.read();
        let mut unresolved: Vec<String> = schemas
            .values()
            .flat_map(|schema| schema.referenced_types())
            .filter(|name| !schemas.contains_key(*name))
            .map(str::to_string)
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Reports every configuration error in the registered schemas without
    /// validating any data.
    ///
    /// Each defect is reported once, with the path of the field relative to
    /// its own message type. Validation reports the same defects as
    /// warnings, located where they were met in the data.
    pub fn audit(&self) -> Vec<ConfigurationError> {
        let schemas = self.schemas.read();
        schemas
            .values()
            .flat_map(|schema| {
                schema.fields().flat_map(move |field| {
                    audit(
                        schema.type_name(),
                        field,
                        &FieldPath::from_field(field.name()),
                    )
                })
            })
            .collect()
    }

    /// Creates an engine resolving message types through this registry.
    pub fn engine(&self) -> ValidationEngine {
        ValidationEngine::new(Arc::new(self.clone())).with_options(self.options.clone())
    }

    /// Validates a message against a registered schema.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the type is not registered,
    /// or `RegistryError::Engine` if validation itself could not complete.
    pub fn validate(
        &self,
        type_name: &str,
        message: &Value,
    ) -> Result<ValidationReport, RegistryError> {
        let schema = self
            .get(type_name)
            .ok_or_else(|| RegistryError::SchemaNotFound(type_name.to_string()))?;

        Ok(self.engine().validate(message, &schema)?)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
            options: self.options.clone(),
        }
    }
}

impl SchemaResolver for SchemaRegistry {
    fn resolve(&self, type_name: &str) -> Option<Arc<MessageSchema>> {
        self.get(type_name)
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a type name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a type name that isn't registered.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// Validation could not complete.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaRegistry>();
    assert_sync::<SchemaRegistry>();
};
