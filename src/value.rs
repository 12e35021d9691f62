//! Dynamic value representation for configuration data.
//!
//! This module provides the [`Value`] enum which represents any value a
//! key can hold: a scalar (string, integer, float, boolean) or a nested
//! [`Container`]. Exactly one tag is active at a time; there is no
//! implicit coercion between tags. The typed `as_*` accessors fail with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch) when the tag does
//! not match.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use nestini::Value;
//!
//! // From primitives
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let flag = Value::from(true);
//!
//! // From textual form, with type inference
//! let inferred = nestini::guess_type("3.5").unwrap();
//! assert_eq!(inferred, Value::Float(3.5));
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use nestini::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use nestini::Value;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_int().unwrap(), 42);
//! assert!(value.as_str().is_err());
//! ```

use crate::{Container, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any configuration value.
///
/// This enum is a closed sum over the four scalar kinds plus nested
/// containers. It's particularly useful when:
///
/// - The structure isn't known at compile time
/// - Building configuration trees programmatically
/// - Inspecting parsed files generically
///
/// # Examples
///
/// ```rust
/// use nestini::Value;
///
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_int());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Container(Container),
}

impl Value {
    /// Returns the name of the active tag, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Value;
    ///
    /// assert_eq!(Value::Int(1).type_name(), "int");
    /// assert_eq!(Value::Bool(true).type_name(), "bool");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Container(_) => "container",
        }
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a nested container.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// If the value is a string, returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str().unwrap(), "hello");
    /// assert!(Value::from(42).as_str().is_err());
    /// ```
    #[inline]
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }

    /// If the value is an integer, returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Value;
    ///
    /// assert_eq!(Value::Int(42).as_int().unwrap(), 42);
    /// assert!(Value::Float(42.5).as_int().is_err());
    /// ```
    #[inline]
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }

    /// If the value is a float, returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other tag.
    #[inline]
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(Error::type_mismatch("float", other.type_name())),
        }
    }

    /// If the value is a boolean, returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other tag.
    #[inline]
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }

    /// If the value is a container, returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContainer`] for any other tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::{guess_type, Value};
    ///
    /// let value = guess_type("(a=1,b=2)").unwrap();
    /// assert_eq!(value.as_container().unwrap().len(), 2);
    /// assert!(Value::Int(1).as_container().is_err());
    /// ```
    #[inline]
    pub fn as_container(&self) -> Result<&Container> {
        match self {
            Value::Container(c) => Ok(c),
            _ => Err(Error::NotAContainer),
        }
    }

    /// If the value is a container, returns a mutable reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContainer`] for any other tag.
    #[inline]
    pub fn as_container_mut(&mut self) -> Result<&mut Container> {
        match self {
            Value::Container(c) => Ok(c),
            _ => Err(Error::NotAContainer),
        }
    }

    /// If the value is a container, consumes the value and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContainer`] for any other tag.
    #[inline]
    pub fn into_container(self) -> Result<Container> {
        match self {
            Value::Container(c) => Ok(c),
            _ => Err(Error::NotAContainer),
        }
    }
}

/// Writes the canonical textual form of the value.
///
/// Scalars use their literal spelling: integers in base 10, booleans as
/// lowercase `true`/`false`, strings verbatim. A float that happens to be
/// integral keeps a trailing `.0` so its tag survives re-parsing. A
/// container renders in its nested form, wrapped in parentheses.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => {
                if fl.is_finite() && fl.fract() == 0.0 {
                    write!(f, "{:.1}", fl)
                } else {
                    write!(f, "{}", fl)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Container(c) => write!(f, "({})", c),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(fl) => serializer.serialize_f64(*fl),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Container(c) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(c.len()))?;
                for entry in c.iter() {
                    map.serialize_entry(&entry.key, &entry.value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use crate::Entry;
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, integer, float, boolean, or map")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Int(value as i64))
                } else {
                    Ok(Value::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut container = Container::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    container.push(Entry::new(key, value));
                }
                Ok(Value::Container(container))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting scalars from Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(Error::type_mismatch("float", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl TryFrom<Value> for Container {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_container()
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Container(value)
    }
}
