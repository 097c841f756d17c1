//! Small helpers that do not belong to any single module.

use crate::error::{TomlError, TomlResult};
use crate::key::Key;
use crate::parser;

/// Returns the current version of the crate.
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Reads a TOML document from disk and parses it with the default configuration.
#[cfg(feature = "std")]
pub fn read_toml_file(path: &str) -> TomlResult<Key> {
    let text = std::fs::read_to_string(path).map_err(TomlError::from)?;
    parser::parse_str(&text)
}
