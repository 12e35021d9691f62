//! Container values: the recursive `key=value` grammar.
//!
//! A container is an ordered sequence of [`Entry`] key/value pairs,
//! written textually as a comma-separated list of `key=value` fields.
//! A value may itself be a container wrapped in parentheses, nested to
//! arbitrary depth:
//!
//! ```text
//! EngramClassName="EngramEntry_CryoGun",EngramHidden=True,EngramPointsCost=0
//! key2=(key=(bob=bab),wow=22.1)
//! ```
//!
//! This module provides the three core operations of the grammar:
//!
//! - [`split_top_level`]: split a field list at top-level commas only,
//!   ignoring commas nested inside `(...)`
//! - [`guess_type`]: infer the [`Value`] tag of a trimmed textual value
//! - [`parse_container`] / [`serialize_container`]: convert between the
//!   textual form and the in-memory tree
//!
//! ## Examples
//!
//! ```rust
//! use nestini::{parse_container, serialize_container};
//!
//! let container = parse_container("a=1,b=(c=2,d=3),e=4").unwrap();
//! assert_eq!(container.len(), 3);
//!
//! // Entry order is preserved; the root is not re-wrapped in parens
//! assert_eq!(serialize_container(&container), "a=1,b=(c=2,d=3),e=4");
//! ```

use crate::{Error, ParseOptions, Result, Value};
use std::fmt;

/// One `key=value` pair within a [`Container`] or
/// [`Section`](crate::Section).
///
/// Key uniqueness is never an `Entry` invariant; whether two entries may
/// share a key is decided by the owning section's duplicate-key policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    /// Creates an entry from a key and anything convertible to a [`Value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::{Entry, Value};
    ///
    /// let entry = Entry::new("port", 7777);
    /// assert_eq!(entry.value, Value::Int(7777));
    /// ```
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses a single `key=value` line, classifying the value by
    /// [`guess_type`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedField`] when the `=` separator is
    /// missing or the key is empty after trimming, and propagates
    /// container-parse errors from the value side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::{Entry, Value};
    ///
    /// let entry = Entry::parse("MaxPlayers=70").unwrap();
    /// assert_eq!(entry.key, "MaxPlayers");
    /// assert_eq!(entry.value, Value::Int(70));
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        parse_entry(line, DEFAULT_OPTIONS.max_depth, &DEFAULT_OPTIONS)
    }

    /// Renders the entry as one `key=value` line.
    ///
    /// A container value is wrapped in parentheses; scalars use their
    /// canonical literal spelling.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered sequence of [`Entry`] values.
///
/// Order is significant: iteration, serialization, and lookups all
/// follow insertion order, and a parse → serialize round trip preserves
/// it exactly. Keys are not required to be unique.
///
/// # Examples
///
/// ```rust
/// use nestini::{Container, Entry, Value};
///
/// let mut container = Container::new();
/// container.push(Entry::new("first", 1));
/// container.push(Entry::new("second", 2));
///
/// let keys: Vec<_> = container.iter().map(|e| e.key.as_str()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container(Vec<Entry>);

impl Container {
    /// Creates an empty `Container`.
    #[must_use]
    pub fn new() -> Self {
        Container(Vec::new())
    }

    /// Creates an empty `Container` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Container(Vec::with_capacity(capacity))
    }

    /// Appends an entry, preserving insertion order.
    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    /// Returns the first entry with the given key, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::parse_container;
    ///
    /// let container = parse_container("(Bob=1,Bob2=2)").unwrap();
    /// let entry = container.find_key("Bob2").unwrap();
    /// assert_eq!(entry.value.as_int().unwrap(), 2);
    /// ```
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<&Entry> {
        self.0.iter().find(|entry| entry.key == key)
    }

    /// Returns a mutable reference to the first entry with the given key.
    #[must_use]
    pub fn find_key_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.0.iter_mut().find(|entry| entry.key == key)
    }

    /// Returns the entries as a slice, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the container holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }
}

/// Renders the container in its root textual form: fields joined with
/// `,`, without outer parentheses. Nested container values are wrapped.
impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl IntoIterator for Container {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Entry> for Container {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Container(iter.into_iter().collect())
    }
}

impl From<Vec<Entry>> for Container {
    fn from(entries: Vec<Entry>) -> Self {
        Container(entries)
    }
}

const DEFAULT_OPTIONS: ParseOptions = ParseOptions::new();

/// Splits a comma-separated field list at top-level commas only.
///
/// `(` and `)` act as depth markers, so commas inside nested containers
/// never split. The trailing field is emitted even without a terminating
/// comma; a trailing empty field is dropped. Overall paren balance is
/// not validated here.
///
/// # Examples
///
/// ```rust
/// use nestini::split_top_level;
///
/// let fields = split_top_level("a=1,b=(c=2,d=3),e=4");
/// assert_eq!(fields, vec!["a=1", "b=(c=2,d=3)", "e=4"]);
/// ```
#[must_use]
pub fn split_top_level(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut open_parens: usize = 0;

    for ch in input.chars() {
        match ch {
            '(' => open_parens += 1,
            ')' => open_parens = open_parens.saturating_sub(1),
            ',' if open_parens == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Net paren depth change over `s`: opens minus closes. Used by the
/// line-oriented reader to detect container values spanning lines.
pub(crate) fn paren_depth_delta(s: &str) -> isize {
    let mut delta = 0isize;
    for ch in s.chars() {
        match ch {
            '(' => delta += 1,
            ')' => delta -= 1,
            _ => {}
        }
    }
    delta
}

/// Whether `text` is one container wrapped in a single matching paren
/// pair: the leading `(` must close at the final `)`, not earlier.
/// `(a=1),(b=2)` is a field list, not a wrapped container.
fn is_wrapped(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'(' || bytes[bytes.len() - 1] != b')' {
        return false;
    }

    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != text.len() - 1 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Infers the [`Value`] of a trimmed textual value.
///
/// Decision order (first match wins):
///
/// 1. wrapped in `(` `)` → container parse; a parse failure propagates
/// 2. parseable as `f64` with a genuine decimal component → `Float`
/// 3. parseable as `i64` → `Int`
/// 4. `true` / `false`, ASCII case-insensitive → `Bool`
/// 5. anything else → `String` (the trimmed text, verbatim)
///
/// Integer-looking text such as `"3"` classifies as `Int` even though it
/// is float-parseable; `"3.0"` classifies as `Float`.
///
/// # Examples
///
/// ```rust
/// use nestini::{guess_type, Value};
///
/// assert_eq!(guess_type("3").unwrap(), Value::Int(3));
/// assert_eq!(guess_type("3.0").unwrap(), Value::Float(3.0));
/// assert_eq!(guess_type("True").unwrap(), Value::Bool(true));
/// assert_eq!(guess_type("hello").unwrap(), Value::String("hello".into()));
/// assert!(guess_type("(a=1,b=2)").unwrap().is_container());
/// ```
pub fn guess_type(text: &str) -> Result<Value> {
    guess_type_with_options(text, &DEFAULT_OPTIONS)
}

/// Like [`guess_type`], with an explicit recursion depth limit for
/// nested container parsing.
pub fn guess_type_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    guess_at(text, options.max_depth, options)
}

fn guess_at(text: &str, remaining: usize, options: &ParseOptions) -> Result<Value> {
    let trimmed = text.trim();

    if trimmed.starts_with('(') && trimmed.ends_with(')') {
        return parse_at(trimmed, remaining, options).map(Value::Container);
    }

    if let Ok(float) = trimmed.parse::<f64>() {
        // "3" must stay an int; only a genuine decimal component (or a
        // form with no integer spelling, like "3.0" or "1e3") is a float
        if float.fract() != 0.0 || trimmed.parse::<i64>().is_err() {
            return Ok(Value::Float(float));
        }
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(Value::Int(int));
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }

    Ok(Value::String(trimmed.to_string()))
}

/// Parses a comma-separated list of `key=value` fields into a
/// [`Container`], recursing into parenthesized values.
///
/// The input may be a bare field list or the same wrapped in one layer
/// of `(` `)`; a matching wrapping pair is stripped before splitting.
/// `()` parses to an empty container.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for blank or whitespace-only input
/// - [`Error::MalformedField`] for a field without `=` or with an empty key
/// - [`Error::DepthExceeded`] when nesting passes the default depth limit
///
/// # Examples
///
/// ```rust
/// use nestini::parse_container;
///
/// let container = parse_container("(key=(bob=bab),wow=22.1)").unwrap();
/// let nested = container.find_key("key").unwrap().value.as_container().unwrap();
/// assert_eq!(nested.find_key("bob").unwrap().value.as_str().unwrap(), "bab");
/// ```
pub fn parse_container(text: &str) -> Result<Container> {
    parse_container_with_options(text, &DEFAULT_OPTIONS)
}

/// Like [`parse_container`], with an explicit recursion depth limit.
///
/// # Examples
///
/// ```rust
/// use nestini::{parse_container_with_options, Error, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// let result = parse_container_with_options("a=(b=(c=1))", &options);
/// assert_eq!(result, Err(Error::DepthExceeded { limit: 2 }));
/// ```
pub fn parse_container_with_options(text: &str, options: &ParseOptions) -> Result<Container> {
    parse_at(text.trim(), options.max_depth, options)
}

fn parse_at(text: &str, remaining: usize, options: &ParseOptions) -> Result<Container> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    if remaining == 0 {
        return Err(Error::DepthExceeded {
            limit: options.max_depth,
        });
    }

    // Redundant wrapping layers collapse: ((SetName=x)) and (SetName=x)
    // denote the same container
    let mut inner = text;
    while is_wrapped(inner) {
        inner = inner[1..inner.len() - 1].trim();
    }

    let fields = split_top_level(inner);
    let mut container = Container::with_capacity(fields.len());
    for field in fields {
        container.push(parse_entry(&field, remaining, options)?);
    }

    Ok(container)
}

fn parse_entry(field: &str, remaining: usize, options: &ParseOptions) -> Result<Entry> {
    let Some((key, value)) = field.split_once('=') else {
        return Err(Error::malformed_field(field.trim()));
    };

    let key = key.trim();
    if key.is_empty() || key.contains('(') || key.contains(')') {
        return Err(Error::malformed_field(field.trim()));
    }

    let value = guess_at(value.trim(), remaining.saturating_sub(1), options)?;
    Ok(Entry::new(key, value))
}

/// Serializes a container to its root textual form.
///
/// Fields are joined with `,`; nested containers are wrapped as
/// `key=(...)`. The root itself is NOT wrapped; only containers used
/// as values carry parentheses. Whitespace trimmed away during parsing
/// is not reintroduced.
///
/// # Examples
///
/// ```rust
/// use nestini::{parse_container, serialize_container};
///
/// let container = parse_container("( a = 1 , b = ( c = 2 ) )").unwrap();
/// assert_eq!(serialize_container(&container), "a=1,b=(c=2)");
/// ```
#[must_use]
pub fn serialize_container(container: &Container) -> String {
    container.to_string()
}
