use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder path used by field-level validators; the walker replaces it
/// with the field's name via [`FieldError::via_field`].
pub const CURRENT_FIELD: &str = "";

/// A single validation failure and the field paths it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub message: String,
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.paths.join(", "))?;
        if let Some(details) = &self.details {
            write!(f, "\n{}", details)?;
        }
        Ok(())
    }
}

/// An accumulated set of field validation failures.
///
/// A `FieldError` always holds at least one issue; "no errors" is spelled
/// `Option::<FieldError>::None`. Use [`FieldErrorExt`] to combine optional
/// aggregates without matching on them by hand.
///
/// ```rust
/// use apis_validators::{FieldError, FieldErrorExt};
///
/// let errs = None::<FieldError>
///     .also(Some(FieldError::missing_field(["name"])))
///     .via_field("spec");
/// assert_eq!(errs.error_string(), "missing field(s): spec.name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldError {
    issues: Vec<FieldIssue>,
}

impl FieldError {
    /// A single-issue error with the given message and paths.
    pub fn new<I, S>(message: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError {
            issues: vec![FieldIssue {
                message: message.into(),
                paths: paths.into_iter().map(Into::into).collect(),
                details: None,
            }],
        }
    }

    /// Sets the details of every issue in this error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        for issue in &mut self.issues {
            issue.details = Some(details.clone());
        }
        self
    }

    pub fn missing_field<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::new("missing field(s)", paths)
    }

    pub fn disallowed_fields<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::new("must not set the field(s)", paths)
    }

    pub fn invalid_value(value: impl fmt::Display, path: impl Into<String>) -> Self {
        FieldError::new(format!("invalid value: {}", value), [path])
    }

    /// An invalid map key or label name. `details` are joined with `", "`.
    pub fn invalid_key_name<I, S>(key: &str, path: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let details: Vec<S> = details.into_iter().collect();
        let err = FieldError::new(format!("invalid key name {:?}", key), [path]);
        if details.is_empty() {
            return err;
        }
        let joined = details
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(", ");
        err.with_details(joined)
    }

    pub fn out_of_bounds_value(
        value: impl fmt::Display,
        lower: impl fmt::Display,
        upper: impl fmt::Display,
        path: impl Into<String>,
    ) -> Self {
        FieldError::new(
            format!("expected {} <= {} <= {}", lower, value, upper),
            [path],
        )
    }

    /// More than one field of a one-of group is set.
    pub fn multiple_one_of<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::new("expected exactly one, got both", paths)
    }

    /// No field of a one-of group is set.
    pub fn missing_one_of<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldError::new("expected exactly one, got neither", paths)
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Appends the issues of `other` after this error's issues.
    ///
    /// Order is preserved and nothing is deduplicated.
    pub fn also(mut self, other: impl Into<Option<FieldError>>) -> Self {
        if let Some(other) = other.into() {
            self.issues.extend(other.issues);
        }
        self
    }

    /// Nests every path under the field `name`: `x` becomes `name.x`.
    pub fn via_field(self, name: &str) -> Self {
        self.map_paths(|path| join_path(name, path))
    }

    /// Nests every path under the index `index`: `x` becomes `[index].x`.
    pub fn via_index(self, index: usize) -> Self {
        let segment = format!("[{}]", index);
        self.map_paths(|path| join_path(&segment, path))
    }

    /// Nests every path under the map key `key`: `x` becomes `[key].x`.
    pub fn via_key(self, key: &str) -> Self {
        let segment = format!("[{}]", key);
        self.map_paths(|path| join_path(&segment, path))
    }

    /// Shorthand for `via_index(index).via_field(name)`, yielding `name[index]`.
    pub fn via_field_index(self, name: &str, index: usize) -> Self {
        self.via_index(index).via_field(name)
    }

    /// Shorthand for `via_key(key).via_field(name)`, yielding `name[key]`.
    pub fn via_field_key(self, name: &str, key: &str) -> Self {
        self.via_key(key).via_field(name)
    }

    fn map_paths(mut self, f: impl Fn(&str) -> String) -> Self {
        for issue in &mut self.issues {
            for path in &mut issue.paths {
                *path = f(path);
            }
        }
        self
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        prefix.to_string()
    } else if path.starts_with('[') {
        format!("{}{}", prefix, path)
    } else {
        format!("{}.{}", prefix, path)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// Combinators for an optional [`FieldError`], where `None` means valid.
///
/// None of these ever panic on `None` receivers or arguments.
pub trait FieldErrorExt {
    fn also(self, other: Option<FieldError>) -> Option<FieldError>;
    fn via_field(self, name: &str) -> Option<FieldError>;
    fn via_index(self, index: usize) -> Option<FieldError>;
    fn via_key(self, key: &str) -> Option<FieldError>;
    fn via_field_index(self, name: &str, index: usize) -> Option<FieldError>;
    fn via_field_key(self, name: &str, key: &str) -> Option<FieldError>;
    /// Renders the aggregate, `""` for `None`.
    fn error_string(&self) -> String;
}

impl FieldErrorExt for Option<FieldError> {
    fn also(self, other: Option<FieldError>) -> Option<FieldError> {
        match (self, other) {
            (None, other) => other,
            (this, None) => this,
            (Some(this), Some(other)) => Some(this.also(other)),
        }
    }

    fn via_field(self, name: &str) -> Option<FieldError> {
        self.map(|e| e.via_field(name))
    }

    fn via_index(self, index: usize) -> Option<FieldError> {
        self.map(|e| e.via_index(index))
    }

    fn via_key(self, key: &str) -> Option<FieldError> {
        self.map(|e| e.via_key(key))
    }

    fn via_field_index(self, name: &str, index: usize) -> Option<FieldError> {
        self.map(|e| e.via_field_index(name, index))
    }

    fn via_field_key(self, name: &str, key: &str) -> Option<FieldError> {
        self.map(|e| e.via_field_key(name, key))
    }

    fn error_string(&self) -> String {
        self.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}
