//! Serialization of a parsed key tree back to text.

pub(crate) mod common;

/// Canonical JSON-shaped dump, the format used for conformance testing.
pub mod canonical;
