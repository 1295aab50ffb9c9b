use super::FieldValidator;
use crate::error::{CURRENT_FIELD, FieldError};
use crate::value::Value;

/// Fails when the field holds its zero value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Required;

impl FieldValidator for Required {
    fn on_field(&self) -> bool {
        true
    }

    fn validate(&self, value: &dyn Value) -> Option<FieldError> {
        value
            .is_zero()
            .then(|| FieldError::missing_field([CURRENT_FIELD]))
    }
}
