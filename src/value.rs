//! Runtime view of struct fields, standing in for reflection.
//!
//! `#[derive(Validate)]` implements [`Fields`] and [`Value`] for a struct; the
//! impls in this module cover the standard library types a field is likely to
//! have.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Anything a validator can inspect.
pub trait Value {
    /// Whether this is the type's zero value: empty string, zero number,
    /// `None`, empty collection, or a struct whose fields are all zero.
    fn is_zero(&self) -> bool;

    /// The string view of this value, `None` if it is not a string.
    fn as_str(&self) -> Option<&str> {
        None
    }

    /// The struct view of this value, `None` if it is not a struct.
    fn as_fields(&self) -> Option<&dyn Fields> {
        None
    }

    /// Whether the type is a string. An unset `Option<Self>` reads as `""`
    /// only when this holds.
    fn is_string_type() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// A struct whose fields can be enumerated in declaration order.
pub trait Fields {
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One field of a [`Fields`] implementor.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// The Rust field name.
    pub ident: &'static str,
    /// The serialized name, when serde renames the field.
    pub json: Option<&'static str>,
    /// The raw `#[validate("...")]` tag, if any.
    pub tag: Option<&'static str>,
    pub value: &'a dyn Value,
}

impl Field<'_> {
    /// The name errors are reported under: the serialized name unless it is
    /// absent or `-`, else the Rust field name.
    pub fn name(&self) -> &'static str {
        match self.json {
            Some(json) if !json.is_empty() && json != "-" => json,
            _ => self.ident,
        }
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("json", &self.json)
            .field("tag", &self.tag)
            .field("is_zero", &self.value.is_zero())
            .finish()
    }
}

// ─── Strings ────────────────────────────────────────────────────────────────

impl Value for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl Value for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_str(&self) -> Option<&str> {
        Some(String::as_str(self))
    }

    fn is_string_type() -> bool {
        true
    }
}

macro_rules! impl_value_for_str_pointers {
    ($($ptr:ty),+) => {
        $(
            impl Value for $ptr {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }

                fn as_str(&self) -> Option<&str> {
                    Some(&**self)
                }

                fn is_string_type() -> bool {
                    true
                }
            }
        )+
    };
}

impl_value_for_str_pointers!(&str, Cow<'_, str>, Box<str>, Rc<str>, Arc<str>);

// ─── Scalars ────────────────────────────────────────────────────────────────

macro_rules! impl_value_for_numbers {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Value for $ty {
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_value_for_numbers!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_value_for_numbers!(0.0 => f32, f64);

impl Value for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Value for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Value for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl Value for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

// ─── Wrappers ───────────────────────────────────────────────────────────────

impl<T: Value> Value for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    /// An unset optional string reads as `""`; any other unset optional is
    /// not a string.
    fn as_str(&self) -> Option<&str> {
        match self {
            Some(inner) => inner.as_str(),
            None => T::is_string_type().then_some(""),
        }
    }

    fn as_fields(&self) -> Option<&dyn Fields> {
        self.as_ref().and_then(|inner| inner.as_fields())
    }

    fn is_string_type() -> bool {
        T::is_string_type()
    }
}

macro_rules! impl_value_for_pointers {
    ($($ptr:ty),+) => {
        $(
            impl<T: Value> Value for $ptr {
                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }

                fn as_str(&self) -> Option<&str> {
                    (**self).as_str()
                }

                fn as_fields(&self) -> Option<&dyn Fields> {
                    (**self).as_fields()
                }

                fn is_string_type() -> bool {
                    T::is_string_type()
                }
            }
        )+
    };
}

impl_value_for_pointers!(&T, Box<T>, Rc<T>, Arc<T>);

// ─── Collections ────────────────────────────────────────────────────────────

impl<T> Value for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Value for &[T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Value for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Value for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Value for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Value for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Value for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// ─── JSON ───────────────────────────────────────────────────────────────────

impl Value for serde_json::Value {
    fn is_zero(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::Bool(b) => !*b,
            serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
            serde_json::Value::String(s) => s.is_empty(),
            serde_json::Value::Array(a) => a.is_empty(),
            serde_json::Value::Object(o) => o.is_empty(),
        }
    }

    fn as_str(&self) -> Option<&str> {
        serde_json::Value::as_str(self)
    }
}
