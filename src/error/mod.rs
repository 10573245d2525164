//! Error types for validation outcomes and failures.
//!
//! Three taxonomies are kept apart:
//! - [`Violation`] / [`Violations`]: the data fails a declared constraint.
//! - [`ConfigurationError`]: a declared constraint cannot apply to its field.
//! - [`EngineError`]: a collaborator broke its contract and validation could
//!   not even be attempted.

mod configuration;
mod engine;
mod violation;

pub use configuration::ConfigurationError;
pub use engine::EngineError;
pub use violation::{Violation, Violations};
