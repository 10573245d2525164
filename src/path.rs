//! Field paths for locating values inside nested messages.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types for building
//! and representing the root-to-field chain of a value inside a message tree.

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Paths are built from segments that represent field access, repeated-field
/// indexing, or map-entry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// A field access (e.g., `user`, `email`)
    Field(String),
    /// A repeated-field element (e.g., `[0]`, `[42]`)
    Index(usize),
    /// A map entry (e.g., `["en"]`)
    Key(String),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Creates a new map key segment.
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }
}

/// The location of a value inside a nested message.
///
/// `FieldPath` represents locations like `orders[0].items["sku"].price`.
/// Paths are values: extending one returns a new path and leaves the
/// receiver untouched, so a shared prefix can be reused across siblings.
///
/// # Example
///
/// ```rust
/// use vetting::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("orders")
///     .push_index(0)
///     .push_field("note");
///
/// assert_eq!(path.to_string(), "orders[0].note");
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path representing the validated message itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Returns a new path with a map key segment appended.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_child_appends_segment() {
        let path = FieldPath::root().child(PathSegment::field("inner"));
        assert_eq!(path.len(), 1);
        assert_eq!(path.last(), Some(&PathSegment::Field("inner".to_string())));
    }

    #[test]
    fn test_field_with_index_and_key() {
        let path = FieldPath::root()
            .push_field("orders")
            .push_index(3)
            .push_field("labels")
            .push_key("en");
        assert_eq!(path.to_string(), r#"orders[3].labels["en"]"#);
    }

    #[test]
    fn test_path_immutability() {
        let base = FieldPath::root().push_field("items");
        let path_a = base.push_index(0);
        let path_b = base.push_index(1);

        assert_eq!(base.to_string(), "items");
        assert_eq!(path_a.to_string(), "items[0]");
        assert_eq!(path_b.to_string(), "items[1]");
    }

    #[test]
    fn test_parent_path() {
        let path = FieldPath::root()
            .push_field("items")
            .push_index(0)
            .push_field("name");

        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "items[0]");

        let root = parent.parent().unwrap().parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_structural_ordering() {
        let a0 = FieldPath::root().push_field("a").push_index(0);
        let a2 = FieldPath::root().push_field("a").push_index(2);
        let b = FieldPath::root().push_field("b");

        assert!(a0 < a2);
        assert!(a2 < b);
        assert!(FieldPath::root() < a0);
    }

    #[test]
    fn test_equality() {
        let path1 = FieldPath::root().push_field("a").push_index(0);
        let path2 = FieldPath::from_field("a").push_index(0);
        let path3 = FieldPath::root().push_field("a").push_index(1);

        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
    }
}
