use super::FieldValidator;
use crate::error::{CURRENT_FIELD, FieldError};
use crate::tag::TagOptions;
use crate::value::Value;
use regex::Regex;
use std::sync::LazyLock;

const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";
const QUALIFIED_NAME_ERR_MSG: &str = "must consist of alphanumeric characters, '-', '_' or '.', \
     and must start and end with an alphanumeric character";
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS1123_SUBDOMAIN_ERR_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case \
     alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";
const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

static QUALIFIED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", QUALIFIED_NAME_FMT)).unwrap());

static DNS1123_SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^{label}(\\.{label})*$",
        label = DNS1123_LABEL_FMT
    ))
    .unwrap()
});

/// Checks that a string field is a Kubernetes qualified name.
///
/// With the `Required` option an empty string is reported as a missing field;
/// without it an empty string is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QualifiedName {
    pub required: bool,
}

impl QualifiedName {
    pub fn new(options: TagOptions<'_>) -> Self {
        QualifiedName {
            required: options.contains("Required"),
        }
    }
}

impl FieldValidator for QualifiedName {
    fn on_field(&self) -> bool {
        true
    }

    fn validate(&self, value: &dyn Value) -> Option<FieldError> {
        let Some(s) = value.as_str() else {
            return Some(FieldError::new("failed to marshal field", [CURRENT_FIELD]));
        };
        if s.is_empty() {
            return self
                .required
                .then(|| FieldError::missing_field([CURRENT_FIELD]));
        }
        let errs = is_qualified_name(s);
        if errs.is_empty() {
            None
        } else {
            Some(FieldError::invalid_key_name(s, CURRENT_FIELD, errs))
        }
    }
}

/// Tests `value` against the qualified-name grammar: a name part of at most 63
/// characters, optionally preceded by a DNS subdomain and `/`.
///
/// Returns one message per violation; an empty list means the name is valid.
pub fn is_qualified_name(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    let parts: Vec<&str> = value.split('/').collect();
    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                errs.push("prefix part must be non-empty".to_string());
            } else {
                errs.extend(
                    is_dns1123_subdomain(prefix)
                        .into_iter()
                        .map(|msg| format!("prefix part {}", msg)),
                );
            }
            *name
        }
        _ => {
            errs.push(format!(
                "a qualified name {} with an optional DNS subdomain prefix and '/' (e.g. 'example.com/MyName')",
                regex_error(
                    QUALIFIED_NAME_ERR_MSG,
                    QUALIFIED_NAME_FMT,
                    &["MyName", "my.name", "123-abc"]
                )
            ));
            return errs;
        }
    };

    if name.is_empty() {
        errs.push("name part must be non-empty".to_string());
    } else if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        errs.push(format!(
            "name part {}",
            max_len_error(QUALIFIED_NAME_MAX_LENGTH)
        ));
    }
    if !QUALIFIED_NAME_RE.is_match(name) {
        errs.push(format!(
            "name part {}",
            regex_error(
                QUALIFIED_NAME_ERR_MSG,
                QUALIFIED_NAME_FMT,
                &["MyName", "my.name", "123-abc"]
            )
        ));
    }
    errs
}

fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(max_len_error(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(value) {
        errs.push(regex_error(
            DNS1123_SUBDOMAIN_ERR_MSG,
            &format!("{label}(\\.{label})*", label = DNS1123_LABEL_FMT),
            &["example.com"],
        ));
    }
    errs
}

fn max_len_error(length: usize) -> String {
    format!("must be no more than {} characters", length)
}

// Matches the wording Kubernetes uses, including its double space before "or".
fn regex_error(msg: &str, fmt: &str, examples: &[&str]) -> String {
    let mut s = format!("{} (e.g. ", msg);
    for (i, example) in examples.iter().enumerate() {
        if i > 0 {
            s.push_str(" or ");
        }
        s.push_str(&format!("'{}', ", example));
    }
    s.push_str(&format!("regex used for validation is '{}')", fmt));
    s
}
