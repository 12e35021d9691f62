//! The file model and the line-oriented (de)serializer.
//!
//! An [`IniFile`] owns an ordered sequence of [`Section`]s and the
//! duplicate-key policy every section consults. The policy, a set of
//! key names permitted to appear more than once, is fixed when the
//! file is constructed and shared read-only with each section.
//!
//! ## Examples
//!
//! ```rust
//! use nestini::{deserialize_file, serialize_file};
//!
//! let text = "[default]\nkey=value\nkey2=(key=(bob=bab),wow=22.1)\n";
//! let file = deserialize_file(text, Vec::<String>::new()).unwrap();
//!
//! let section = file.get_section("default").unwrap();
//! let nested = section.get_key("key2").unwrap().value.as_container().unwrap();
//! let bob = nested.find_key("key").unwrap().value.as_container().unwrap();
//! assert_eq!(bob.find_key("bob").unwrap().value.as_str().unwrap(), "bab");
//!
//! assert_eq!(serialize_file(&file), text);
//! ```

use crate::container::{guess_type_with_options, paren_depth_delta};
use crate::{Entry, Error, ParseOptions, Result, Section, Value};
use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

/// The set of key names allowed to appear more than once in a section.
///
/// A cheap, cloneable handle: the file and all its sections share one
/// underlying set, which is immutable after construction. Keys outside
/// the set are deduplicated by every "safe" mutation.
///
/// # Examples
///
/// ```rust
/// use nestini::DuplicatePolicy;
///
/// let policy = DuplicatePolicy::new(["OverrideNamedEngramEntries"]);
/// assert!(policy.allows("OverrideNamedEngramEntries"));
/// assert!(!policy.allows("MaxPlayers"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DuplicatePolicy(Arc<IndexSet<String>>);

impl DuplicatePolicy {
    /// Creates a policy from the allowed duplicate key names.
    pub fn new<I, S>(allowed_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DuplicatePolicy(Arc::new(
            allowed_keys.into_iter().map(Into::into).collect(),
        ))
    }

    /// Returns `true` if the key may appear more than once.
    #[must_use]
    pub fn allows(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns the allowed key names, in the order they were supplied.
    pub fn allowed_keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl PartialEq for DuplicatePolicy {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// An in-memory INI file: a duplicate-key policy and an ordered
/// sequence of sections.
///
/// Section names need not be unique in the underlying sequence; lookup
/// returns the first match, so effective semantics are
/// first-match-wins.
///
/// # Examples
///
/// ```rust
/// use nestini::IniFile;
///
/// let mut file = IniFile::new(Vec::<String>::new());
/// file.add_key_to_section("default", "key", "value");
///
/// let entry = file.find_key_in_section("default", "key").unwrap();
/// assert_eq!(entry.value.as_str().unwrap(), "value");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IniFile {
    policy: DuplicatePolicy,
    sections: Vec<Section>,
}

impl IniFile {
    /// Creates an empty file whose sections allow the given keys to
    /// duplicate.
    pub fn new<I, S>(allowed_duplicate_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IniFile {
            policy: DuplicatePolicy::new(allowed_duplicate_keys),
            sections: Vec::new(),
        }
    }

    /// Returns the sections as a slice, in insertion order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the file's duplicate-key policy.
    #[must_use]
    pub fn policy(&self) -> &DuplicatePolicy {
        &self.policy
    }

    /// Returns the first section with the given name, if any.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    /// Returns a mutable reference to the first section with the given
    /// name.
    #[must_use]
    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.name() == name)
    }

    /// Returns the first section with the given name, creating it (with
    /// the file's policy) when absent.
    pub fn get_or_create_section(&mut self, name: &str) -> &mut Section {
        let index = match self
            .sections
            .iter()
            .position(|section| section.name() == name)
        {
            Some(index) => index,
            None => {
                self.sections
                    .push(Section::with_policy(name, self.policy.clone()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Appends the key to the named section, creating the section when
    /// absent. Duplicate keys are not checked; see
    /// [`IniFile::safely_add_key_to_section`] for the policy-aware
    /// variant.
    pub fn add_key_to_section(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.get_or_create_section(section).add_key(key, value);
    }

    /// Adds the key to the named section according to the duplicate-key
    /// policy, creating the section when absent.
    pub fn safely_add_key_to_section(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<Value>,
    ) {
        self.get_or_create_section(section).safely_add_key(key, value);
    }

    /// Replaces the first matching key in the named section (or appends
    /// it), creating the section when absent.
    pub fn update_or_create_key_in_section(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<Value>,
    ) {
        self.get_or_create_section(section)
            .add_or_replace_key(key, value);
    }

    /// Returns the first entry with the given key in the named section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] or [`Error::KeyNotFound`] when
    /// the lookup misses.
    pub fn find_key_in_section(&self, section: &str, key: &str) -> Result<&Entry> {
        let section = self
            .get_section(section)
            .ok_or_else(|| Error::section_not_found(section))?;
        section
            .get_key(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Removes the first section with the given name, returning it.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let index = self
            .sections
            .iter()
            .position(|section| section.name() == name)?;
        Some(self.sections.remove(index))
    }

    /// Removes all sections.
    pub fn remove_all_sections(&mut self) {
        self.sections.clear();
    }

    /// Renders the file in INI form: each section's header followed by
    /// its `key=value` lines.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// Renders the file in INI form. Equivalent to [`IniFile::serialize`].
#[must_use]
pub fn serialize_file(file: &IniFile) -> String {
    file.serialize()
}

/// Parses INI text into an [`IniFile`] with the given duplicate-key
/// policy.
///
/// Blank lines and lines starting with `;` or `#` are ignored, as are
/// key lines appearing before any `[section]` header and lines without
/// an `=` separator. Values are classified by the type guesser; a value
/// opening a `(` that is still unclosed at end-of-line continues across
/// physical lines until its parens balance.
///
/// Repeated keys in the input are kept as-is (append semantics) so the
/// text survives a round trip; the policy governs later programmatic
/// mutation.
///
/// # Errors
///
/// Propagates container-parse failures from malformed `(...)` values.
///
/// # Examples
///
/// ```rust
/// use nestini::deserialize_file;
///
/// let file = deserialize_file("[bob]\ntest=1\ntest2=1\ntest2=2\n", ["test2"]).unwrap();
/// let section = file.get_section("bob").unwrap();
/// assert_eq!(section.check_for_multiple_keys("test2"), 2);
/// ```
pub fn deserialize_file<I, S>(text: &str, allowed_duplicate_keys: I) -> Result<IniFile>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    deserialize_file_with_options(text, allowed_duplicate_keys, &ParseOptions::new())
}

/// Like [`deserialize_file`], with an explicit recursion depth limit
/// for container values.
pub fn deserialize_file_with_options<I, S>(
    text: &str,
    allowed_duplicate_keys: I,
    options: &ParseOptions,
) -> Result<IniFile>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut file = IniFile::new(allowed_duplicate_keys);
    let mut current: Option<usize> = None;
    let mut lines = text.lines();

    while let Some(raw) = lines.next() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            file.sections
                .push(Section::with_policy(name, file.policy.clone()));
            current = Some(file.sections.len() - 1);
            continue;
        }

        let Some(index) = current else {
            continue;
        };
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let mut value_text = value.trim().to_string();
        if value_text.starts_with('(') {
            // A container value may span physical lines; keep reading
            // until its parens balance
            let mut depth = paren_depth_delta(&value_text);
            while depth > 0 {
                let Some(continuation) = lines.next() else {
                    break;
                };
                let continuation = continuation.trim();
                depth += paren_depth_delta(continuation);
                value_text.push_str(continuation);
            }
        }

        let value = guess_type_with_options(&value_text, options)?;
        file.sections[index].add_key(key.trim(), value);
    }

    Ok(file)
}
