//! Message schema descriptors.
//!
//! This module describes the shape of messages: which fields a message type
//! declares, of which kind, with which cardinality and constraints. The
//! engine only reads these descriptors; they are built once up front.
//!
//! # Example
//!
//! ```rust
//! use vetting::{ConstraintSet, FieldDescriptor, MessageSchema};
//!
//! let schema = MessageSchema::new("Customer")
//!     .field(FieldDescriptor::string("name").constraints(ConstraintSet::new().required()))
//!     .field(FieldDescriptor::uint("age").constraints(ConstraintSet::new().max(150)))
//!     .field(FieldDescriptor::message("addresses", "Address").repeated());
//!
//! assert_eq!(schema.type_name(), "Customer");
//! assert_eq!(schema.fields().count(), 3);
//! assert_eq!(schema.referenced_types(), vec!["Address"]);
//! ```

mod field;
mod kind;
mod message;
mod traits;

pub use field::{Cardinality, FieldDescriptor};
pub use kind::{EnumDescriptor, FieldKind, NumericKind};
pub use message::MessageSchema;
pub use traits::SchemaResolver;
