//! Declarative, tag-driven validation for API structs.
//!
//! Fields are annotated with a `#[validate("...")]` directive and checked by
//! [`validate`], which reports every failure as a [`FieldError`] whose paths
//! use the fields' serialized names:
//!
//! ```text
//! #[derive(Validate)] struct → validate(&obj) → Option<FieldError>
//! ```
//!
//! # Directives
//!
//! | Tag                       | Checks |
//! |---------------------------|--------|
//! | `Required`                | the field is not its zero value |
//! | `QualifiedName[,Required]`| the string is a Kubernetes qualified name |
//! | `OneOf,<group>`           | exactly one field of `<group>` is set |
//! | `-`                       | the field is skipped |
//!
//! Options may be separated by `,` or `;`. Unknown directives are ignored.
//!
//! # Quick Start
//!
//! ```rust
//! use apis_validators::{FieldErrorExt, Validate};
//!
//! #[derive(Validate, serde::Serialize)]
//! struct Route {
//!     #[serde(rename = "serviceName")]
//!     #[validate("QualifiedName,Required")]
//!     service_name: String,
//!     #[validate("OneOf,target")]
//!     revision: Option<String>,
//!     #[validate("OneOf,target")]
//!     configuration: Option<String>,
//! }
//!
//! let route = Route {
//!     service_name: "v@lid".into(),
//!     revision: None,
//!     configuration: None,
//! };
//! let errs = route.validate();
//! assert_eq!(errs.as_ref().map(|e| e.issues().len()), Some(2));
//! assert!(errs.error_string().starts_with("invalid key name \"v@lid\": serviceName"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `derive` | yes     | Re-exports `#[derive(Validate)]` from `apis-validators-derive`. |

pub mod error;
pub mod tag;
pub mod validate;
pub mod validators;
pub mod value;

pub use error::*;
pub use validate::{Validate, validate};
pub use value::{Field, Fields, Value};

#[cfg(feature = "derive")]
pub use apis_validators_derive::Validate;
