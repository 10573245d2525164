//! Per-call validation context.
//!
//! This module provides the [`ValidationContext`] type that carries the
//! schema resolver and depth tracking through one validation call.

use std::sync::Arc;

use crate::error::EngineError;
use crate::path::FieldPath;
use crate::schema::{MessageSchema, SchemaResolver};

/// Validation context carries the resolver and nesting depth.
///
/// A fresh context is created for every top-level call and passed down the
/// recursion, so nothing about one call is visible to another.
#[derive(Clone)]
pub(crate) struct ValidationContext {
    resolver: Arc<dyn SchemaResolver>,
    depth: usize,
    max_depth: Option<usize>,
}

impl ValidationContext {
    /// Creates a root context.
    pub(crate) fn new(resolver: Arc<dyn SchemaResolver>, max_depth: Option<usize>) -> Self {
        Self {
            resolver,
            depth: 0,
            max_depth,
        }
    }

    /// Returns a context one nesting level deeper.
    ///
    /// Fails with [`EngineError::DepthExceeded`] once the configured budget
    /// is spent.
    pub(crate) fn increment_depth(&self, path: &FieldPath) -> Result<Self, EngineError> {
        let depth = self.depth + 1;
        if let Some(max_depth) = self.max_depth {
            if depth > max_depth {
                return Err(EngineError::DepthExceeded {
                    path: path.clone(),
                    max_depth,
                });
            }
        }
        Ok(Self {
            resolver: Arc::clone(&self.resolver),
            depth,
            max_depth: self.max_depth,
        })
    }

    /// Returns the current nesting depth; the root message is at depth 0.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Resolves a nested message type.
    pub(crate) fn resolve(
        &self,
        type_name: &str,
        path: &FieldPath,
    ) -> Result<Arc<MessageSchema>, EngineError> {
        self.resolver
            .resolve(type_name)
            .ok_or_else(|| EngineError::UnknownMessageType {
                path: path.clone(),
                type_name: type_name.to_string(),
            })
    }
}
