//! Text Format Reference
//!
//! This module documents the configuration text format handled by this
//! library: flat INI-style files whose values may carry a recursive,
//! parenthesis-delimited container grammar. The format is common in
//! game-server configuration, where a single key holds a deeply nested
//! settings record.
//!
//! # Grammar
//!
//! ```text
//! file        := (section)*
//! section     := "[" name "]" NEWLINE (keyline)*
//! keyline     := key "=" value NEWLINE
//! value       := scalar | container
//! container   := "(" field ("," field)* ")"   ; bare, without parens, at parse-root
//! field       := key "=" value
//! scalar      := text that is not wrapped in a "(" ")" pair
//! ```
//!
//! Lines that are empty or start with `;` or `#` are ignored. A
//! key-line's value, if it begins with `(`, may span multiple physical
//! lines until its matching `)` is found.
//!
//! # Scalars
//!
//! Scalar leaves carry no type annotations; the concrete type is
//! inferred from the textual form, first match wins:
//!
//! | Type | Example | Rule |
//! |------|---------|------|
//! | Container | `(a=1,b=2)` | wrapped in a matching `(` `)` pair |
//! | Float | `22.1`, `3.0` | float-parseable with a decimal component |
//! | Int | `42`, `-7` | integer-parseable |
//! | Bool | `true`, `True`, `FALSE` | ASCII case-insensitive literals |
//! | String | `hello`, `"Quoted"` | anything else, verbatim |
//!
//! Note that `3` is an `Int` even though it parses as a float, and that
//! double quotes are ordinary characters: `"EngramEntry_CryoGun"`
//! round-trips with its quotes intact.
//!
//! # Nesting and commas
//!
//! Commas split fields only at paren depth zero, so nested containers
//! may freely contain commas:
//!
//! ```text
//! ConfigOverrideSupplyCrateItems=(SupplyCrateClassString="Crate_C",ItemSets=((SetName=Saddle,SetWeight=0.015)))
//! ```
//!
//! Redundant wrapping layers collapse: `((a=1))` denotes the same
//! container as `(a=1)`.
//!
//! # Canonical output
//!
//! Serialization trims the whitespace that parsing discarded and emits
//! canonical scalar spellings: base-10 integers, lowercase booleans,
//! floats that keep a decimal point (`3.0`, never `3`). A container at
//! the root of a standalone parse is not wrapped in outer parens; a
//! container used as a value always is.
//!
//! # Duplicate keys
//!
//! The grammar permits the same key to occur repeatedly in one section.
//! Whether repeated assignment through the model accumulates entries or
//! replaces the first one is a per-file policy; see
//! [`DuplicatePolicy`](crate::DuplicatePolicy).
