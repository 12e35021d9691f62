//! # nestini
//!
//! A parser and serializer for INI-style configuration files whose
//! values carry a recursive, parenthesis-delimited "container" grammar.
//!
//! ## What does that look like?
//!
//! Game servers commonly store deeply nested settings records inside
//! flat INI files, one record per key:
//!
//! ```text
//! [ServerSettings]
//! MaxPlayers=70
//! HarvestAmountMultiplier=1.5
//! ConfigOverrideItemCraftingCosts=(ItemClassString="PrimalItem_C",BaseCraftingResourceRequirements=(ResourceItemTypeString="Stone_C",BaseResourceRequirement=10.0))
//! ```
//!
//! A value is either a scalar (string, integer, float, or boolean,
//! inferred from its textual form) or a parenthesized, comma-separated
//! list of further `key=value` pairs, nested to arbitrary depth.
//!
//! ## Key Features
//!
//! - **Recursive containers**: comma splitting is paren-depth aware, so
//!   nested records parse correctly however deep they go
//! - **Type inference**: `3` is an [`Value::Int`], `3.0` a
//!   [`Value::Float`], `True` a [`Value::Bool`], everything else a
//!   string; no annotations in the file
//! - **Order preserving**: entries serialize in insertion order; a
//!   parse → serialize round trip reproduces the structure exactly
//! - **Duplicate-key policy**: a per-file set of key names that may
//!   legitimately repeat (game configs rely on this); all other keys
//!   deduplicate on safe mutation
//! - **Defined failure modes**: malformed fields, empty input, and
//!   runaway nesting surface as typed [`Error`] values, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use nestini::{deserialize_file, serialize_file};
//!
//! let text = "\
//! [default]
//! key=value
//! key2=(key=(bob=bab),wow=22.1)
//! ";
//!
//! let file = deserialize_file(text, Vec::<String>::new()).unwrap();
//!
//! // Walk into the nested containers
//! let section = file.get_section("default").unwrap();
//! let outer = section.get_key("key2").unwrap().value.as_container().unwrap();
//! let inner = outer.find_key("key").unwrap().value.as_container().unwrap();
//! assert_eq!(inner.find_key("bob").unwrap().value.as_str().unwrap(), "bab");
//!
//! // Reproduce the text
//! assert_eq!(serialize_file(&file), text);
//! ```
//!
//! ## Working with containers directly
//!
//! ```rust
//! use nestini::{container, parse_container, serialize_container};
//!
//! let parsed = parse_container("(Bob=1,Bob2=2)").unwrap();
//! assert_eq!(parsed.find_key("Bob2").unwrap().value.as_int().unwrap(), 2);
//!
//! let built = container! {
//!     "Bob" => 1,
//!     "Bob2" => 2,
//! };
//! assert_eq!(parsed, built);
//!
//! // A root container is not wrapped; nested ones are
//! assert_eq!(serialize_container(&built), "Bob=1,Bob2=2");
//! ```
//!
//! ## Duplicate keys
//!
//! ```rust
//! use nestini::IniFile;
//!
//! let mut file = IniFile::new(["OverrideEngramEntries"]);
//! let section = file.get_or_create_section("ServerSettings");
//!
//! // Allowed duplicates accumulate
//! section.safely_add_key("OverrideEngramEntries", 1);
//! section.safely_add_key("OverrideEngramEntries", 2);
//! assert_eq!(section.check_for_multiple_keys("OverrideEngramEntries"), 2);
//!
//! // Everything else replaces in place
//! section.safely_add_key("MaxPlayers", 50);
//! section.safely_add_key("MaxPlayers", 70);
//! assert_eq!(section.check_for_multiple_keys("MaxPlayers"), 1);
//! ```
//!
//! ## Scope
//!
//! The crate is a pure in-memory transformation: no file I/O, no
//! logging, no threads. Reading and writing disk files, and any CLI on
//! top, belong to the caller. The model is single-threaded; wrap an
//! [`IniFile`] in your own synchronization if you must share it.

pub mod container;
pub mod error;
pub mod file;
pub mod format;
pub mod macros;
pub mod options;
pub mod section;
pub mod value;

pub use container::{
    guess_type, guess_type_with_options, parse_container, parse_container_with_options,
    serialize_container, split_top_level, Container, Entry,
};
pub use error::{Error, Result};
pub use file::{
    deserialize_file, deserialize_file_with_options, serialize_file, DuplicatePolicy, IniFile,
};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use section::Section;
pub use value::Value;
