//! Error types for parsing and model operations.
//!
//! Every failure in this crate is reported through the single [`Error`]
//! enum; nothing in the library panics on malformed input or retries on
//! the caller's behalf. Recovery policy belongs to the caller.
//!
//! ## Error Categories
//!
//! - **Parse errors**: empty input, fields without an `=` separator,
//!   nesting beyond the configured depth limit
//! - **Type errors**: requesting a scalar kind that does not match a
//!   value's actual tag
//! - **Lookup errors**: missing keys or sections
//!
//! ## Examples
//!
//! ```rust
//! use nestini::{parse_container, Error};
//!
//! let result = parse_container("   ");
//! assert!(matches!(result, Err(Error::EmptyInput)));
//! ```

use thiserror::Error;

/// Represents all possible errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The container parser was given blank or whitespace-only text
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A field lacks an `=` separator or has an empty key
    #[error("malformed field `{field}`: expected `key=value`")]
    MalformedField { field: String },

    /// A container-specific operation was attempted on a non-container value
    #[error("value is not a container")]
    NotAContainer,

    /// An accessor requested a scalar kind that does not match the value's tag
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A key lookup missed
    #[error("key `{0}` not found")]
    KeyNotFound(String),

    /// A section lookup missed
    #[error("section `{0}` not found")]
    SectionNotFound(String),

    /// An overwrite was requested with zero replacement values
    #[error("no values provided")]
    NoValuesProvided,

    /// Container nesting went past the configured recursion limit
    #[error("container nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },
}

impl Error {
    /// Creates a [`Error::MalformedField`] for the given field text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Error;
    ///
    /// let err = Error::malformed_field("novalue");
    /// assert!(err.to_string().contains("novalue"));
    /// ```
    pub fn malformed_field(field: &str) -> Self {
        Error::MalformedField {
            field: field.to_string(),
        }
    }

    /// Creates a [`Error::TypeMismatch`] from the expected and found tag names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Error;
    ///
    /// let err = Error::type_mismatch("int", "string");
    /// assert!(err.to_string().contains("expected int"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a [`Error::KeyNotFound`] for the given key name.
    pub fn key_not_found(name: &str) -> Self {
        Error::KeyNotFound(name.to_string())
    }

    /// Creates a [`Error::SectionNotFound`] for the given section name.
    pub fn section_not_found(name: &str) -> Self {
        Error::SectionNotFound(name.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
