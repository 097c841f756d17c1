//! Error types returned by the parser and lookup API.

pub mod messages;

use std::fmt;

/// The broad class a [`TomlError`] belongs to.
///
/// These mirror the five failure categories a caller needs to branch on:
/// malformed syntax, an incompatible key redefinition, a type mismatch on
/// lookup, a missing key, and I/O failures from the file-loading helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source text does not conform to the grammar.
    Decode,
    /// A key was defined in a way that conflicts with an earlier definition.
    Redefine,
    /// A value was asked for as a type it does not hold.
    Cast,
    /// A dotted path did not resolve to any key.
    Lookup,
    /// Reading or writing the underlying source/destination failed.
    Io,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Decode => "decode error",
            ErrorKind::Redefine => "redefinition error",
            ErrorKind::Cast => "cast error",
            ErrorKind::Lookup => "lookup error",
            ErrorKind::Io => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while parsing, looking up, or casting a TOML value.
///
/// `line` and `column` are 1-based and refer to the position the tokenizer
/// had reached when the failure was detected; for [`ErrorKind::Lookup`] and
/// [`ErrorKind::Cast`] errors raised outside of parsing, both are `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlError {
    kind: ErrorKind,
    message: String,
    line: usize,
    column: usize,
}

impl TomlError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind, message: message.into(), line, column }
    }

    /// Constructs an error with no position, for failures that happen outside of parsing
    /// (lookup, casting, I/O).
    pub fn without_position(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, 0, 0)
    }

    pub fn decode(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Decode, message, line, column)
    }

    pub fn redefine(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Redefine, message, line, column)
    }

    pub fn cast(message: impl Into<String>) -> Self {
        Self::without_position(ErrorKind::Cast, message)
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::without_position(ErrorKind::Lookup, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::without_position(ErrorKind::Io, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 || self.column > 0 {
            write!(f, "{}: {} (line {}, column {})", self.kind, self.message, self.line, self.column)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for TomlError {}

impl From<std::io::Error> for TomlError {
    fn from(err: std::io::Error) -> Self {
        TomlError::io(err.to_string())
    }
}

pub type TomlResult<T> = Result<T, TomlError>;
