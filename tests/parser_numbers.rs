//! Integration tests for numeric literal parsing.

use tomletta::{parse_str, ErrorKind};

#[test]
fn parses_a_plain_decimal_integer() {
    let root = parse_str("n = 1234\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), 1234);
}

#[test]
fn parses_a_negative_integer() {
    let root = parse_str("n = -17\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), -17);
}

#[test]
fn parses_zero_without_triggering_the_leading_zero_rule() {
    let root = parse_str("n = 0\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), 0);
}

#[test]
fn rejects_a_leading_zero_on_a_nonzero_integer() {
    let err = parse_str("n = 0755\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn parses_a_float_with_an_exponent() {
    let root = parse_str("n = 1.5e10\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_float().unwrap(), 1.5e10);
}

#[test]
fn parses_a_float_with_a_negative_exponent() {
    let root = parse_str("n = 5e-3\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_float().unwrap(), 5e-3);
}

#[test]
fn underscores_are_legal_between_decimal_digits() {
    let root = parse_str("n = 1_000_000\n").unwrap();
    assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), 1_000_000);
}

#[test]
fn rejects_a_doubled_underscore() {
    let err = parse_str("n = 1__000\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn rejects_a_trailing_underscore() {
    let err = parse_str("n = 1000_\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn parses_octal_and_binary_integers() {
    let root = parse_str("o = 0o17\nb = 0b1010\n").unwrap();
    assert_eq!(root.lookup("o").unwrap().as_integer().unwrap(), 15);
    assert_eq!(root.lookup("b").unwrap().as_integer().unwrap(), 10);
}
