//! The struct walker.
//!
//! Runs every tagged field of a struct through its validator and merges the
//! results. Walking never fails: all problems come back in one aggregate so a
//! caller sees every bad field at once.

use crate::error::{FieldError, FieldErrorExt};
use crate::validators::{FieldValidator, SKIP, Validator, one_of_groups};
use crate::value::{Fields, Value};

/// Validate a struct against its `#[validate("...")]` tags.
///
/// Returns `None` when every field is valid. Values that are not structs
/// have nothing to validate and also return `None`.
///
/// Field-level errors are reported under the field's serialized name (or its
/// Rust name); one-of errors name every member of the offending group.
pub fn validate(obj: &dyn Value) -> Option<FieldError> {
    let Some(parent) = obj.as_fields() else {
        tracing::debug!("value is not a struct, nothing to validate");
        return None;
    };

    let fields = parent.fields();
    let groups = one_of_groups(&fields);
    let mut evaluated: Vec<Validator> = Vec::new();
    let mut errs: Option<FieldError> = None;

    for field in &fields {
        let Some(tag) = field.tag.filter(|t| !t.is_empty() && *t != SKIP) else {
            continue;
        };
        let name = field.name();
        let validator = Validator::from_tag(tag);
        tracing::trace!(field = name, directive = tag, "validating field");

        if validator.on_parent() {
            match &validator {
                Validator::OneOf(one_of) => {
                    if !one_of.already_in(&evaluated) {
                        tracing::trace!(group = %one_of.group, "checking one-of group");
                        let group_errs = groups
                            .iter()
                            .find(|g| g.group == one_of.group)
                            .and_then(|g| g.check());
                        errs = errs.also(group_errs);
                        evaluated.push(validator.clone());
                    }
                }
                Validator::Default | Validator::Required(_) | Validator::QualifiedName(_) => {}
            }
        }

        if validator.on_field() {
            errs = errs.also(validator.validate(field.value).via_field(name));
        }
    }

    errs
}

/// Method-call form of [`validate`], implemented for every [`Fields`] type.
pub trait Validate {
    fn validate(&self) -> Option<FieldError>;
}

impl<T: Fields + Value> Validate for T {
    fn validate(&self) -> Option<FieldError> {
        validate(self)
    }
}
