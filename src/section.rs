//! Sections: named groups of key/value entries.
//!
//! A [`Section`] is the `[name]` block of an INI file: an ordered
//! sequence of [`Entry`] values plus a read-only handle to the owning
//! file's duplicate-key policy. Whether repeated assignment of a key
//! accumulates entries or replaces the existing one is decided by that
//! policy, never by the section's own structure.
//!
//! ## Mutation surface
//!
//! - [`Section::add_key`] always appends, even when the key exists
//! - [`Section::add_or_replace_key`] replaces the first match in place
//! - [`Section::safely_add_key`] picks between the two by consulting the
//!   policy; prefer this entry point
//! - [`Section::overwrite_key`] replaces every occurrence of an allowed
//!   duplicate with a fresh set of values
//!
//! ## Examples
//!
//! ```rust
//! use nestini::Section;
//!
//! let mut section = Section::new("ServerSettings");
//! section.add_key("MaxPlayers", 70);
//! section.add_parsed_key("DifficultyOffset=1.0").unwrap();
//!
//! assert_eq!(
//!     section.to_string(),
//!     "[ServerSettings]\nMaxPlayers=70\nDifficultyOffset=1.0\n"
//! );
//! ```

use crate::{DuplicatePolicy, Entry, Error, Result, Value};
use std::fmt;

/// A named, ordered group of key/value entries.
///
/// Entry order reflects insertion order and is preserved by
/// serialization; lookups return the first match.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    keys: Vec<Entry>,
    policy: DuplicatePolicy,
}

impl Section {
    /// Creates an empty section with no allowed duplicate keys.
    ///
    /// Sections created through
    /// [`IniFile::get_or_create_section`](crate::IniFile::get_or_create_section)
    /// share the file's policy instead.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, DuplicatePolicy::default())
    }

    pub(crate) fn with_policy(name: impl Into<String>, policy: DuplicatePolicy) -> Self {
        Section {
            name: name.into(),
            keys: Vec::new(),
            policy,
        }
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entries as a slice, in insertion order.
    #[must_use]
    pub fn keys(&self) -> &[Entry] {
        &self.keys
    }

    /// Returns the policy handle this section consults for safe
    /// mutations.
    #[must_use]
    pub fn policy(&self) -> &DuplicatePolicy {
        &self.policy
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the section holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Appends an entry, no matter whether the key already exists.
    /// This can create duplicate keys.
    pub fn add_key(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.keys.push(Entry::new(key, value));
    }

    /// Appends an entry parsed from one `key=value` line, classifying
    /// the value with [`guess_type`](crate::guess_type).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedField`] for a line without `=` or with
    /// an empty key, and propagates container-parse errors.
    pub fn add_parsed_key(&mut self, line: &str) -> Result<()> {
        let entry = Entry::parse(line)?;
        self.keys.push(entry);
        Ok(())
    }

    /// Replaces the value of the first entry with the given key,
    /// preserving its position; appends a new entry when the key is
    /// absent. Use this if you don't want duplicate keys.
    pub fn add_or_replace_key(&mut self, key: &str, value: impl Into<Value>) {
        if let Some(entry) = self.keys.iter_mut().find(|entry| entry.key == key) {
            entry.value = value.into();
        } else {
            self.keys.push(Entry::new(key, value));
        }
    }

    /// Adds the key according to the duplicate-key policy: appends when
    /// the key is an allowed duplicate, replaces the first match
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::IniFile;
    ///
    /// let mut file = IniFile::new(["multi"]);
    /// let section = file.get_or_create_section("s");
    ///
    /// section.safely_add_key("multi", 1);
    /// section.safely_add_key("multi", 2);
    /// assert_eq!(section.check_for_multiple_keys("multi"), 2);
    ///
    /// section.safely_add_key("single", 1);
    /// section.safely_add_key("single", 2);
    /// assert_eq!(section.check_for_multiple_keys("single"), 1);
    /// ```
    pub fn safely_add_key(&mut self, key: &str, value: impl Into<Value>) {
        if self.policy.allows(key) {
            self.add_key(key, value);
        } else {
            self.add_or_replace_key(key, value);
        }
    }

    /// Replaces every entry for an allowed-duplicate key with one entry
    /// per supplied value, in the supplied order. For a key not allowed
    /// to duplicate, only the first match is replaced with the first
    /// value and the extra values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValuesProvided`] when `values` is empty.
    pub fn overwrite_key(&mut self, key: &str, values: Vec<Value>) -> Result<()> {
        if values.is_empty() {
            return Err(Error::NoValuesProvided);
        }

        if self.policy.allows(key) {
            self.remove_multiple_keys(key);
            for value in values {
                self.add_key(key, value);
            }
        } else if let Some(value) = values.into_iter().next() {
            self.add_or_replace_key(key, value);
        }

        Ok(())
    }

    /// Returns the first entry with the given key, if any.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Entry> {
        self.keys.iter().find(|entry| entry.key == key)
    }

    /// Returns a mutable reference to the first entry with the given key.
    #[must_use]
    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.keys.iter_mut().find(|entry| entry.key == key)
    }

    /// Returns every entry with the given key, in original order.
    #[must_use]
    pub fn get_multiple_keys(&self, key: &str) -> Vec<&Entry> {
        self.keys.iter().filter(|entry| entry.key == key).collect()
    }

    /// Returns the number of entries sharing the given key: 0 if
    /// absent, 1 if unique, more if duplicated. Collaborators use this
    /// to decide between the single- and multi-key accessors.
    #[must_use]
    pub fn check_for_multiple_keys(&self, key: &str) -> usize {
        self.keys.iter().filter(|entry| entry.key == key).count()
    }

    /// Removes the first entry with the given key, returning it.
    pub fn remove_key(&mut self, key: &str) -> Option<Entry> {
        let index = self.keys.iter().position(|entry| entry.key == key)?;
        Some(self.keys.remove(index))
    }

    /// Removes every entry with the given key, returning how many were
    /// removed.
    pub fn remove_multiple_keys(&mut self, key: &str) -> usize {
        let before = self.keys.len();
        self.keys.retain(|entry| entry.key != key);
        before - self.keys.len()
    }

    /// Removes all entries.
    pub fn remove_all_keys(&mut self) {
        self.keys.clear();
    }

    /// Renders every entry as a `key=value` string, in order.
    #[must_use]
    pub fn all_keys_to_strings(&self) -> Vec<String> {
        self.keys.iter().map(Entry::to_line).collect()
    }

    /// Renders only the section header: `[name]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestini::Section;
    ///
    /// assert_eq!(Section::new("default").header(), "[default]");
    /// ```
    #[must_use]
    pub fn header(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// Renders the section in INI form: the `[name]` header line followed
/// by one `key=value` line per entry, each newline-terminated.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for entry in &self.keys {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_allowed(allowed: &[&str]) -> Section {
        Section::with_policy("test", DuplicatePolicy::new(allowed.iter().copied()))
    }

    #[test]
    fn test_add_key_allows_duplicates() {
        let mut section = Section::new("test");
        section.add_key("k", 1);
        section.add_key("k", 2);
        assert_eq!(section.check_for_multiple_keys("k"), 2);
    }

    #[test]
    fn test_add_or_replace_key_preserves_position() {
        let mut section = Section::new("test");
        section.add_key("a", 1);
        section.add_key("b", 2);
        section.add_or_replace_key("a", 10);

        assert_eq!(section.len(), 2);
        assert_eq!(section.keys()[0].key, "a");
        assert_eq!(section.keys()[0].value, Value::Int(10));
    }

    #[test]
    fn test_safely_add_key_dedupes_by_default() {
        let mut section = with_allowed(&[]);
        section.safely_add_key("k", 1);
        section.safely_add_key("k", 2);

        assert_eq!(section.check_for_multiple_keys("k"), 1);
        assert_eq!(section.get_key("k").unwrap().value, Value::Int(2));
    }

    #[test]
    fn test_safely_add_key_accumulates_allowed() {
        let mut section = with_allowed(&["k"]);
        section.safely_add_key("k", 1);
        section.safely_add_key("k", 2);

        let entries = section.get_multiple_keys("k");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, Value::Int(1));
        assert_eq!(entries[1].value, Value::Int(2));
    }

    #[test]
    fn test_overwrite_key_allowed_duplicate() {
        let mut section = with_allowed(&["k"]);
        section.add_key("k", 1);
        section.add_key("other", 0);
        section.add_key("k", 2);

        section
            .overwrite_key("k", vec![Value::Int(7), Value::Int(8), Value::Int(9)])
            .unwrap();

        let values: Vec<_> = section
            .get_multiple_keys("k")
            .iter()
            .map(|e| e.value.clone())
            .collect();
        assert_eq!(values, vec![Value::Int(7), Value::Int(8), Value::Int(9)]);
        assert_eq!(section.len(), 4);
    }

    #[test]
    fn test_overwrite_key_unique_takes_first_value() {
        let mut section = with_allowed(&[]);
        section.add_key("k", 1);

        section
            .overwrite_key("k", vec![Value::Int(7), Value::Int(8)])
            .unwrap();

        assert_eq!(section.check_for_multiple_keys("k"), 1);
        assert_eq!(section.get_key("k").unwrap().value, Value::Int(7));
    }

    #[test]
    fn test_overwrite_key_requires_values() {
        let mut section = Section::new("test");
        assert_eq!(
            section.overwrite_key("k", Vec::new()).unwrap_err(),
            Error::NoValuesProvided
        );
    }

    #[test]
    fn test_remove_key_first_match_only() {
        let mut section = Section::new("test");
        section.add_key("k", 1);
        section.add_key("k", 2);

        let removed = section.remove_key("k").unwrap();
        assert_eq!(removed.value, Value::Int(1));
        assert_eq!(section.get_key("k").unwrap().value, Value::Int(2));

        assert!(section.remove_key("absent").is_none());
    }

    #[test]
    fn test_remove_multiple_keys() {
        let mut section = Section::new("test");
        section.add_key("k", 1);
        section.add_key("j", 2);
        section.add_key("k", 3);

        assert_eq!(section.remove_multiple_keys("k"), 2);
        assert_eq!(section.len(), 1);
        assert_eq!(section.keys()[0].key, "j");
    }

    #[test]
    fn test_remove_all_keys() {
        let mut section = Section::new("test");
        section.add_key("k", 1);
        section.remove_all_keys();
        assert!(section.is_empty());
    }

    #[test]
    fn test_add_parsed_key_and_render() {
        let mut section = Section::new("test");
        section.add_key("test", "test");
        section.add_parsed_key("test2=test2").unwrap();

        assert_eq!(
            section.to_string().trim(),
            "[test]\ntest=test\ntest2=test2"
        );
        assert_eq!(
            section.all_keys_to_strings(),
            vec!["test=test", "test2=test2"]
        );
    }

    #[test]
    fn test_container_values_render_wrapped() {
        let mut section = Section::new("test");
        let container = crate::parse_container("Bob=1,Bob2=2").unwrap();
        section.add_key("test3", container);

        assert_eq!(
            section.all_keys_to_strings(),
            vec!["test3=(Bob=1,Bob2=2)"]
        );
    }
}
