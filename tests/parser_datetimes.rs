//! Integration tests for the four datetime value shapes.

use tomletta::{parse_str, Value};

#[test]
fn parses_an_offset_datetime_with_a_zulu_suffix() {
    let root = parse_str("d = 1979-05-27T07:32:00Z\n").unwrap();
    let dt = root.lookup("d").unwrap().as_datetime().unwrap();
    assert_eq!((dt.year, dt.month, dt.day), (1979, 5, 27));
    assert_eq!((dt.hour, dt.minute, dt.second), (7, 32, 0));
    assert_eq!(dt.offset_minutes, Some(0));
    assert!(dt.offset_is_z);
}

#[test]
fn parses_an_offset_datetime_with_a_signed_offset() {
    let root = parse_str("d = 1979-05-27T00:32:00-07:00\n").unwrap();
    let dt = root.lookup("d").unwrap().as_datetime().unwrap();
    assert_eq!(dt.offset_minutes, Some(-7 * 60));
    assert!(!dt.offset_is_z);
}

#[test]
fn parses_a_datetime_with_fractional_seconds() {
    let root = parse_str("d = 1979-05-27T00:32:00.999999Z\n").unwrap();
    let dt = root.lookup("d").unwrap().as_datetime().unwrap();
    assert_eq!(dt.nanosecond, 999_999_000);
}

#[test]
fn parses_a_local_datetime_with_no_offset() {
    let root = parse_str("d = 1979-05-27T07:32:00\n").unwrap();
    assert!(matches!(root.get_child("d").unwrap().value, Some(Value::LocalDateTime(_))));
}

#[test]
fn parses_a_space_separated_local_datetime() {
    let root = parse_str("d = 1979-05-27 07:32:00\n").unwrap();
    assert!(matches!(root.get_child("d").unwrap().value, Some(Value::LocalDateTime(_))));
}

#[test]
fn parses_a_local_date_alone() {
    let root = parse_str("d = 1979-05-27\n").unwrap();
    assert!(matches!(root.get_child("d").unwrap().value, Some(Value::LocalDate(_))));
}

#[test]
fn parses_a_local_time_alone() {
    let root = parse_str("d = 07:32:00\n").unwrap();
    assert!(matches!(root.get_child("d").unwrap().value, Some(Value::LocalTime(_))));
}

#[test]
fn a_bare_date_followed_by_an_ordinary_bare_token_does_not_consume_it_as_a_time() {
    let root = parse_str("a = [1979-05-27, 3]\n").unwrap();
    let items = root.lookup("a").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Value::LocalDate(_)));
    assert_eq!(items[1].as_integer().unwrap(), 3);
}

#[test]
fn a_bare_date_followed_by_a_space_then_a_comma_backtracks_cleanly() {
    let root = parse_str("a = [1979-05-27 , 3]\n").unwrap();
    let items = root.lookup("a").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Value::LocalDate(_)));
    assert_eq!(items[1].as_integer().unwrap(), 3);
}

#[test]
fn rejects_a_day_past_the_end_of_its_month() {
    assert!(parse_str("d = 1979-02-30\n").is_err());
    assert!(parse_str("d = 1979-04-31\n").is_err());
}

#[test]
fn accepts_february_29th_only_in_a_leap_year() {
    assert!(parse_str("d = 1980-02-29\n").is_ok());
    assert!(parse_str("d = 1979-02-29\n").is_err());
}
