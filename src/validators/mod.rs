//! Validator plugins and the tag → plugin registry.
//!
//! The set of directives is closed and dispatched by [`Validator::from_tag`].
//! Directives nobody recognizes resolve to [`Validator::Default`], which
//! accepts everything, so tags meant for other tooling are inert.

mod one_of;
mod qualified_name;
mod required;

pub use one_of::{OneOf, OneOfGroup, one_of_groups};
pub use qualified_name::{QualifiedName, is_qualified_name};
pub use required::Required;

use crate::error::FieldError;
use crate::tag::parse_tag;
use crate::value::Value;

/// Tag value that removes a field from validation.
pub const SKIP: &str = "-";

/// A single validation rule.
///
/// A rule runs against the field's own value when [`on_field`] is true and
/// against the whole enclosing struct when [`on_parent`] is true.
///
/// [`on_field`]: FieldValidator::on_field
/// [`on_parent`]: FieldValidator::on_parent
pub trait FieldValidator {
    fn on_field(&self) -> bool {
        false
    }

    fn on_parent(&self) -> bool {
        false
    }

    /// Checks `value`, returning `None` when it is valid.
    ///
    /// Field-level rules report against [`CURRENT_FIELD`](crate::CURRENT_FIELD);
    /// parent-level rules report the sibling field names themselves.
    fn validate(&self, value: &dyn Value) -> Option<FieldError>;
}

/// The closed set of known directives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validator {
    /// Unknown directive. Checks nothing.
    Default,
    Required(Required),
    QualifiedName(QualifiedName),
    OneOf(OneOf),
}

impl Validator {
    /// Parses `tag` and builds the validator its directive names.
    pub fn from_tag(tag: &str) -> Self {
        let tag = parse_tag(tag);
        match tag.name {
            "Required" => Validator::Required(Required),
            "QualifiedName" => Validator::QualifiedName(QualifiedName::new(tag.options)),
            "OneOf" => Validator::OneOf(OneOf::new(tag.options)),
            other => {
                tracing::debug!(directive = other, "ignoring unknown validation directive");
                Validator::Default
            }
        }
    }

    fn as_dyn(&self) -> Option<&dyn FieldValidator> {
        match self {
            Validator::Default => None,
            Validator::Required(v) => Some(v),
            Validator::QualifiedName(v) => Some(v),
            Validator::OneOf(v) => Some(v),
        }
    }
}

impl FieldValidator for Validator {
    fn on_field(&self) -> bool {
        self.as_dyn().is_none_or(|v| v.on_field())
    }

    fn on_parent(&self) -> bool {
        self.as_dyn().is_some_and(|v| v.on_parent())
    }

    fn validate(&self, value: &dyn Value) -> Option<FieldError> {
        self.as_dyn().and_then(|v| v.validate(value))
    }
}
