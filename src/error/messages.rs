//! Centralized error message text, kept apart from the error type itself so
//! parser code reads as `messages::UNTERMINATED_STRING` rather than an inline literal.

pub const EMPTY_INPUT: &str = "input is empty";
pub const UNTERMINATED_BASIC_STRING: &str = "unterminated basic string";
pub const UNTERMINATED_LITERAL_STRING: &str = "unterminated literal string";
pub const UNTERMINATED_MULTILINE_STRING: &str = "unterminated multi-line string";
pub const UNTERMINATED_ARRAY: &str = "unterminated array";
pub const UNTERMINATED_INLINE_TABLE: &str = "unterminated inline table";
pub const UNTERMINATED_TABLE_HEADER: &str = "unterminated table header";
pub const INVALID_ESCAPE: &str = "invalid escape sequence";
pub const INVALID_UNICODE_ESCAPE: &str = "invalid unicode escape";
pub const INVALID_UNICODE_SCALAR: &str = "escape does not name a valid Unicode scalar value";
pub const INVALID_NUMBER: &str = "invalid number literal";
pub const INVALID_LEADING_ZERO: &str = "leading zeros are not permitted";
pub const INVALID_UNDERSCORE: &str = "underscores must be surrounded by digits";
pub const INVALID_DATETIME: &str = "invalid date/time literal";
pub const INVALID_BOOLEAN: &str = "invalid boolean literal";
pub const MISSING_KEY_VALUE_SEPARATOR: &str = "expected '=' after key";
pub const MISSING_NEWLINE_AFTER_VALUE: &str = "expected newline or comment after value";
pub const EMPTY_BARE_KEY: &str = "bare keys must not be empty";
pub const EMPTY_DOTTED_SEGMENT: &str = "dotted key segments must not be empty";
pub const KEY_ALREADY_DEFINED: &str = "key is already defined and cannot be redefined here";
pub const INLINE_TABLE_NOT_EXTENDABLE: &str = "inline tables are closed and cannot be extended";
pub const ARRAY_OF_TABLES_NAME_CONFLICT: &str = "array of tables name conflicts with an existing non-array key";
pub const DOCUMENT_TOO_LARGE: &str = "source document exceeds the configured size limit";
pub const TOO_MANY_LINES: &str = "source document exceeds the configured line-count limit";
pub const IDENTIFIER_TOO_LONG: &str = "key identifier exceeds the configured length limit";
pub const TOO_MANY_SUBKEYS: &str = "table exceeds the configured subkey limit";
pub const ARRAY_TOO_LONG: &str = "array exceeds the configured length limit";
pub const STRING_TOO_LONG: &str = "string exceeds the configured byte length limit";
pub const NESTING_TOO_DEEP: &str = "array/inline-table nesting exceeds the configured depth limit";

pub fn unexpected_character(c: char) -> String {
    format!("unexpected character '{c}'")
}

pub fn wrong_type(expected: &str, found: &str) -> String {
    format!("value is a {found}, expected a {expected}")
}

pub fn key_not_found(path: &str) -> String {
    format!("key '{path}' was not found")
}
