//! A dynamically typed element.
//!
//! `OrderedCollection<Value>` is the closest thing to an untyped array: it
//! can hold numbers, strings, booleans, an explicit null, and the absent
//! marker side by side.

use std::borrow::Cow;
use std::fmt;

use crate::element::Element;
use crate::element::render_number;

/// A dynamically typed value.
///
/// Equality is strict: values of different variants are never equal, and
/// `Number(NaN)` is not equal to itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value was ever assigned.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl Value {
    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        return match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        };
    }

    /// The numeric payload, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        return match self {
            Value::Number(n) => Some(*n),
            _ => None,
        };
    }
}

impl Element for Value {
    fn render(&self) -> Cow<'_, str> {
        return match self {
            Value::Undefined => Cow::Borrowed("undefined"),
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Number(n) => Cow::Owned(render_number(*n)),
            Value::Str(s) => Cow::Borrowed(s.as_str()),
        };
    }

    fn is_absent(&self) -> bool {
        return matches!(self, Value::Undefined);
    }

    fn is_null(&self) -> bool {
        return matches!(self, Value::Null);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.render());
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        return Value::Str(s.to_string());
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        return Value::Str(s);
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        return Value::Bool(b);
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        return Value::Number(n);
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        return Value::Number(f64::from(n));
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        return Value::Number(f64::from(n));
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to the absent marker, not to null.
    fn from(value: Option<T>) -> Value {
        return match value {
            Some(inner) => inner.into(),
            None => Value::Undefined,
        };
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
        };
    }
}
