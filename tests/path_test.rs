//! Integration tests for FieldPath.

use pretty_assertions::assert_eq;
use vetting::{FieldPath, PathSegment};

#[test]
fn test_path_construction_and_display() {
    // Root path
    assert_eq!(FieldPath::root().to_string(), "");

    // Simple field
    assert_eq!(FieldPath::root().push_field("name").to_string(), "name");

    // Element of a repeated root-level field
    assert_eq!(FieldPath::root().push_index(0).to_string(), "[0]");

    // Complex nested path
    let path = FieldPath::root()
        .push_field("orders")
        .push_index(0)
        .push_field("labels")
        .push_key("region");
    assert_eq!(path.to_string(), r#"orders[0].labels["region"]"#);
}

#[test]
fn test_path_segments_preserved() {
    let path = FieldPath::root()
        .push_field("data")
        .push_index(42)
        .push_key("k");

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            &PathSegment::Field("data".to_string()),
            &PathSegment::Index(42),
            &PathSegment::Key("k".to_string()),
        ]
    );
}

#[test]
fn test_path_is_immutable() {
    let base = FieldPath::root().push_field("items");

    let path1 = base.push_index(0);
    let path2 = base.push_index(1);
    let path3 = base.child(PathSegment::field("count"));

    // Base path unchanged
    assert_eq!(base.to_string(), "items");

    // Each branch is independent
    assert_eq!(path1.to_string(), "items[0]");
    assert_eq!(path2.to_string(), "items[1]");
    assert_eq!(path3.to_string(), "items.count");
}

#[test]
fn test_path_equality() {
    let path1 = FieldPath::root().push_field("a").push_index(0);
    let path2 = FieldPath::root().push_field("a").push_index(0);
    let path3 = FieldPath::root().push_field("a").push_index(1);
    let path4 = FieldPath::root().push_field("b").push_index(0);

    assert_eq!(path1, path2);
    assert_ne!(path1, path3);
    assert_ne!(path1, path4);
}

#[test]
fn test_path_ordering_is_segment_by_segment() {
    let a0 = FieldPath::root().push_field("a").push_index(0);
    let a1 = FieldPath::root().push_field("a").push_index(1);
    let b = FieldPath::root().push_field("b");

    assert!(a0 < a1);
    assert!(a1 < b);
    assert!(FieldPath::root() < a0);
}

#[test]
fn test_parent_and_last() {
    let path = FieldPath::from_field("inner").push_field("name");

    assert_eq!(path.len(), 2);
    assert_eq!(path.parent(), Some(FieldPath::from_field("inner")));
    assert_eq!(path.last(), Some(&PathSegment::field("name")));
    assert_eq!(FieldPath::root().parent(), None);
}
