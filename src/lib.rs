//! A hand-rolled recursive-descent parser and canonical dump serializer for
//! TOML v1.0.0 documents.
//!
//! The parser builds a tree of [`Key`] nodes rather than handing back a
//! generic `serde`-style value: each node remembers whether it came from a
//! `[table]` header, a `[[table]]` header, a dotted key, or an inline table,
//! which is what lets redefinition conflicts (re-opening a closed table,
//! assigning the same key twice) be rejected the way the TOML spec requires
//! rather than silently overwritten.

/// Resource limits and dump options.
pub mod config;
/// The broken-down date/time record shared by all four datetime value kinds.
pub mod datetime;
/// Error types returned by the parser and lookup API.
pub mod error;
/// Cursor sources and byte sinks used by the tokenizer and the dump serializer.
pub mod io;
/// The key-tree node type and the redefinition rules that govern merging into it.
pub mod key;
/// Small helpers that do not belong to any single module.
pub mod misc;
/// Pure character classifiers shared by every scalar and structural parser.
pub mod predicates;
/// Serialization of a parsed key tree back to text.
pub mod stringify;
/// A one-codepoint-at-a-time cursor with a two-token lookback and backtrack.
pub mod tokenizer;
/// The scalar and composite value types a parsed key can hold.
pub mod value;

/// Recursive-descent parser that turns TOML source text into a [`Key`] tree.
pub mod parser;

///
/// tomletta API
///

/// Returns the current version of the crate.
pub use misc::get_version as version;

/// Reads and parses a TOML-encoded file from disc (requires the `std` feature).
#[cfg(feature = "std")]
pub use misc::read_toml_file as read_file;

/// Destination implementation for writing dump output to a memory buffer.
pub use io::destinations::buffer::Buffer as BufferDestination;
/// Destination implementation for writing dump output to a file (requires `std`).
#[cfg(feature = "std")]
pub use io::destinations::file::File as FileDestination;
/// Source implementation for reading TOML data from a memory buffer.
pub use io::sources::buffer::Buffer as BufferSource;
/// Source implementation for reading TOML data from a file (requires `std`).
#[cfg(feature = "std")]
pub use io::sources::file::File as FileSource;

/// The key-tree node produced by parsing, and the kind tag distinguishing
/// tables, array-of-tables, and plain keys.
pub use key::{Key, KeyKind};
/// The parsed value a [`Key`] leaf can hold.
pub use value::{FloatValue, Value};

/// Parses a TOML document from a string, using the default [`config::ParserConfig`].
pub use parser::parse_str;
/// Parses a TOML document from raw bytes.
pub use parser::parse_bytes;
/// Parses a TOML document, enforcing the given resource limits.
pub use parser::parse_with_config;

/// Parser resource-limit configuration.
pub use config::ParserConfig;
/// Dump output configuration.
pub use config::DumpConfig;

/// The error type returned by parsing, lookup, and casting.
pub use error::{ErrorKind, TomlError};

/// Dumps a parsed key tree to the canonical JSON-shaped text format.
pub use stringify::canonical::dump_to_string as to_canonical_json;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn parses_then_dumps_a_small_document() {
        let root = parse_str("title = \"TOML Example\"\n\n[owner]\nname = \"Tom\"\n").unwrap();
        assert_eq!(root.lookup("title").unwrap().as_str().unwrap(), "TOML Example");
        assert_eq!(root.lookup("owner.name").unwrap().as_str().unwrap(), "Tom");
        let json = to_canonical_json(&root, DumpConfig::default());
        assert!(json.contains(r#""title":{"type":"string","value":"TOML Example"}"#));
    }

    #[test]
    fn reports_version_from_cargo_metadata() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
