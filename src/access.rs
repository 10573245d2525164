//! Reading field values out of message instances.
//!
//! Messages are JSON objects keyed by field name. A missing key and an
//! explicit `null` both mean "not set".

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::EngineError;
use crate::path::FieldPath;
use crate::schema::{FieldDescriptor, FieldKind, NumericKind};

/// Returns the ordered values of `field` in `message`.
///
/// - repeated fields: the array elements, or nothing when absent
/// - map fields: the map object, or an empty map when absent
/// - singular fields: the value, or the kind's default when absent
pub(crate) fn field_values<'a>(
    message: &'a Map<String, Value>,
    field: &FieldDescriptor,
    path: &FieldPath,
) -> Result<Vec<Cow<'a, Value>>, EngineError> {
    let raw = present_value(message, field);

    if field.is_repeated() {
        return match raw {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.iter().map(Cow::Borrowed).collect()),
            Some(_) => Err(EngineError::CardinalityMismatch {
                path: path.clone(),
                repeated: true,
            }),
        };
    }

    match raw {
        None => Ok(vec![Cow::Owned(field.kind().default_value())]),
        Some(Value::Array(_)) => Err(EngineError::CardinalityMismatch {
            path: path.clone(),
            repeated: false,
        }),
        Some(value) => Ok(vec![Cow::Borrowed(value)]),
    }
}

/// Returns true if a singular field is absent and its value will be the
/// kind's default rather than something the sender wrote.
pub(crate) fn is_defaulted(message: &Map<String, Value>, field: &FieldDescriptor) -> bool {
    !field.is_repeated() && present_value(message, field).is_none()
}

fn present_value<'a>(message: &'a Map<String, Value>, field: &FieldDescriptor) -> Option<&'a Value> {
    message.get(field.name()).filter(|v| !v.is_null())
}

/// Checks that `value` has the JSON shape `kind` declares.
pub(crate) fn ensure_kind(kind: &FieldKind, value: &Value, path: &FieldPath) -> Result<(), EngineError> {
    let conforms = match kind {
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Numeric(NumericKind::Int) => value.is_i64(),
        FieldKind::Numeric(NumericKind::UInt) => value.is_u64(),
        FieldKind::Numeric(NumericKind::Float) => value.is_number(),
        FieldKind::String => value.is_string(),
        FieldKind::Enum(_) => {
            value.is_string() || value.as_i64().is_some_and(|n| i32::try_from(n).is_ok())
        }
        FieldKind::Map(_) | FieldKind::Message(_) => value.is_object(),
    };

    if conforms {
        Ok(())
    } else {
        Err(EngineError::KindMismatch {
            path: path.clone(),
            expected: kind.name(),
            got: value_type_name(value),
        })
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_absent_singular_yields_default() {
        let message = object(json!({}));
        let field = FieldDescriptor::string("name");
        let values = field_values(&message, &field, &FieldPath::from_field("name")).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].as_ref(), &json!(""));
    }

    #[test]
    fn test_null_is_absent() {
        let message = object(json!({"tags": null}));
        let field = FieldDescriptor::string("tags").repeated();
        let values = field_values(&message, &field, &FieldPath::from_field("tags")).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_defaulted_only_for_absent_singular_fields() {
        let message = object(json!({"count": 0, "note": null, "tags": []}));
        assert!(!is_defaulted(&message, &FieldDescriptor::int("count")));
        assert!(is_defaulted(&message, &FieldDescriptor::string("note")));
        assert!(is_defaulted(&message, &FieldDescriptor::string("name")));
        assert!(!is_defaulted(&message, &FieldDescriptor::string("tags").repeated()));
        assert!(!is_defaulted(&message, &FieldDescriptor::string("other").repeated()));
    }

    #[test]
    fn test_repeated_values_in_order() {
        let message = object(json!({"ids": [3, 1, 2]}));
        let field = FieldDescriptor::int("ids").repeated();
        let values = field_values(&message, &field, &FieldPath::from_field("ids")).unwrap();
        let ids: Vec<_> = values.iter().map(|v| v.as_i64().unwrap()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_repeated_field_must_be_array() {
        let message = object(json!({"ids": 3}));
        let field = FieldDescriptor::int("ids").repeated();
        let err = field_values(&message, &field, &FieldPath::from_field("ids")).unwrap_err();
        assert!(matches!(err, EngineError::CardinalityMismatch { repeated: true, .. }));
    }

    #[test]
    fn test_singular_field_must_not_be_array() {
        let message = object(json!({"id": [3]}));
        let field = FieldDescriptor::int("id");
        let err = field_values(&message, &field, &FieldPath::from_field("id")).unwrap_err();
        assert!(matches!(err, EngineError::CardinalityMismatch { repeated: false, .. }));
    }

    #[test]
    fn test_ensure_kind() {
        let path = FieldPath::from_field("x");
        let int = FieldKind::Numeric(NumericKind::Int);
        let uint = FieldKind::Numeric(NumericKind::UInt);
        let float = FieldKind::Numeric(NumericKind::Float);

        assert!(ensure_kind(&int, &json!(-4), &path).is_ok());
        assert!(ensure_kind(&int, &json!(1.5), &path).is_err());
        assert!(ensure_kind(&uint, &json!(-4), &path).is_err());
        assert!(ensure_kind(&float, &json!(4), &path).is_ok());
        assert!(ensure_kind(&FieldKind::Boolean, &json!("true"), &path).is_err());

        let err = ensure_kind(&FieldKind::String, &json!(7), &path).unwrap_err();
        assert_eq!(
            err,
            EngineError::KindMismatch {
                path,
                expected: "string",
                got: "number",
            }
        );
    }
}
