//! Boolean field validation.

use serde_json::Value;

use super::{FieldValues, KindValidator};

/// Validates `bool` fields.
///
/// A boolean has no "unset" state: `false` is indistinguishable from a field
/// that was never written. `required` on a singular boolean is therefore
/// reported as a configuration error rather than checked. Repeated booleans
/// can still be empty, which is observable.
pub(crate) struct BooleanValidator<'a> {
    field: FieldValues<'a>,
}

impl<'a> BooleanValidator<'a> {
    pub(crate) fn new(field: FieldValues<'a>) -> Self {
        Self { field }
    }
}

impl<'a> KindValidator<'a> for BooleanValidator<'a> {
    fn field(&self) -> &FieldValues<'a> {
        &self.field
    }

    fn is_unset(&self, _value: &Value) -> bool {
        false
    }

    fn presence_observable(&self) -> bool {
        self.field.descriptor.is_repeated()
    }
}
