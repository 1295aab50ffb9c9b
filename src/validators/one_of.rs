use super::{FieldValidator, Validator};
use crate::error::FieldError;
use crate::tag::{TagOptions, parse_tag};
use crate::value::{Field, Value};

/// Requires exactly one field of a named group to be set.
///
/// Every member of the group carries `#[validate("OneOf,<group>")]`; the
/// group name may be empty. The rule runs against the enclosing struct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneOf {
    pub group: String,
}

impl OneOf {
    pub fn new(options: TagOptions<'_>) -> Self {
        OneOf {
            group: options.first().to_string(),
        }
    }

    /// Whether a validator for the same group is already in `validators`.
    pub fn already_in(&self, validators: &[Validator]) -> bool {
        validators
            .iter()
            .any(|v| matches!(v, Validator::OneOf(other) if other.group == self.group))
    }
}

impl FieldValidator for OneOf {
    fn on_parent(&self) -> bool {
        true
    }

    fn validate(&self, parent: &dyn Value) -> Option<FieldError> {
        let Some(parent) = parent.as_fields() else {
            tracing::debug!(group = %self.group, "one-of rule applied to a non-struct value");
            return None;
        };
        let fields = parent.fields();
        one_of_groups(&fields)
            .iter()
            .find(|g| g.group == self.group)
            .and_then(OneOfGroup::check)
    }
}

/// The members of one one-of group, in declaration order.
#[derive(Debug)]
pub struct OneOfGroup<'a> {
    pub group: &'static str,
    pub members: Vec<Field<'a>>,
}

impl OneOfGroup<'_> {
    /// Counts the set members: none or several is an error naming every member.
    pub fn check(&self) -> Option<FieldError> {
        let names = self.members.iter().map(Field::name);
        match self.members.iter().filter(|f| !f.value.is_zero()).count() {
            0 => Some(FieldError::missing_one_of(names)),
            1 => None,
            _ => Some(FieldError::multiple_one_of(names)),
        }
    }
}

/// Indexes the `OneOf` fields of a struct by group, groups ordered by their
/// first member.
pub fn one_of_groups<'a>(fields: &[Field<'a>]) -> Vec<OneOfGroup<'a>> {
    let mut groups: Vec<OneOfGroup<'a>> = Vec::new();
    for field in fields {
        let Some(tag) = field.tag.map(parse_tag) else {
            continue;
        };
        if tag.name != "OneOf" {
            continue;
        }
        let group = tag.options.first();
        match groups.iter_mut().find(|g| g.group == group) {
            Some(existing) => existing.members.push(*field),
            None => groups.push(OneOfGroup {
                group,
                members: vec![*field],
            }),
        }
    }
    groups
}
