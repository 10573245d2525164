//! Map field validation.

use serde_json::Value;

use crate::access::ensure_kind;
use crate::engine::ValidationEngine;
use crate::error::EngineError;
use crate::path::FieldPath;
use crate::report::ValidationReport;
use crate::schema::FieldKind;
use crate::validation::ValidationContext;

use super::message::descend_into;
use super::{FieldValues, KindValidator};

/// Validates map fields.
///
/// A map with no entries is unset. Size rules count entries. Entries whose
/// values are messages are validated recursively under `Key` path segments,
/// in the map's iteration order.
pub(crate) struct MapValidator<'a> {
    field: FieldValues<'a>,
    values: &'a FieldKind,
}

impl<'a> MapValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>, values: &'a FieldKind) -> Self {
        Self { field, values }
    }
}

impl<'a> KindValidator<'a> for MapValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|o| o.is_empty())
    }

    fn entry_count(&self) -> usize {
        self.field
            .values
            .iter()
            .filter_map(|v| v.as_object())
            .map(|o| o.len())
            .sum()
    }

    fn descend(
        &self,
        value: &Value,
        path: &FieldPath,
        engine: &ValidationEngine,
        context: &ValidationContext,
    ) -> Result<ValidationReport, EngineError> {
        let mut report = ValidationReport::new();
        let Some(entries) = value.as_object() else {
            return Ok(report);
        };
        let nested = self.field.descriptor.constraint_set().validates_nested();

        for (key, entry) in entries {
            let entry_path = path.push_key(key);
            ensure_kind(self.values, entry, &entry_path)?;
            if let FieldKind::Message(type_name) = self.values {
                let empty = entry.as_object().is_some_and(|o| o.is_empty());
                if nested && !empty {
                    report.append(descend_into(type_name, entry, &entry_path, engine, context)?);
                }
            }
        }

        Ok(report)
    }
}
