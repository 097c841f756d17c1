//! Integration tests for parser error handling.

use tomletta::{parse_str, parse_with_config, ErrorKind, ParserConfig};

#[test]
fn empty_document_parses_to_an_empty_root() {
    let root = parse_str("").unwrap();
    assert!(root.get_child("x").is_none());
}

#[test]
fn reports_an_unexpected_character_at_the_start_of_a_line() {
    let err = parse_str("@ = 1\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn reports_a_missing_key_value_separator() {
    let err = parse_str("a 1\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn reports_an_unterminated_basic_string() {
    let err = parse_str("a = \"unterminated\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn reports_an_unterminated_array() {
    let err = parse_str("a = [1, 2\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn reports_an_unterminated_inline_table() {
    let err = parse_str("a = { x = 1\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn reports_a_redefined_keyleaf() {
    let err = parse_str("a = 1\na = 2\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Redefine);
}

#[test]
fn reports_a_redefined_table_header() {
    let err = parse_str("[a]\n[a]\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Redefine);
}

#[test]
fn reports_invalid_underscore_placement() {
    let err = parse_str("n = _1\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn error_display_includes_line_and_column() {
    let err = parse_str("a = 1\na = 2\n").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("line"));
    assert!(text.contains("column"));
}

#[test]
fn rejects_an_identifier_over_the_configured_limit() {
    let long_key = "x".repeat(10);
    let config = ParserConfig::new().with_max_identifier_bytes(4);
    let source = format!("{long_key} = 1\n");
    let err = parse_with_config(&source, config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn rejects_an_array_over_the_configured_length_limit() {
    let config = ParserConfig::new().with_max_array_len(2);
    let err = parse_with_config("a = [1, 2, 3]\n", config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn rejects_nesting_past_the_configured_depth_limit() {
    let config = ParserConfig::new().with_max_depth(1);
    let err = parse_with_config("a = [[1]]\n", config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn cast_on_the_wrong_value_kind_reports_a_cast_error() {
    let root = parse_str("a = 1\n").unwrap();
    let err = root.lookup("a").unwrap().as_str().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cast);
}

#[test]
fn lookup_on_a_missing_path_reports_a_lookup_error() {
    let root = parse_str("a = 1\n").unwrap();
    let err = root.lookup("missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}
