//! Parses a raw, already-delimited token into an integer or float [`Value`].
//!
//! The token has already been collected by the driver as the run of
//! non-delimiter characters following a digit, `+`, or `-`; this module's
//! job is purely to classify and validate that text.

use crate::error::{messages, TomlError};
use crate::value::{FloatValue, Value};

/// Parses `raw` (e.g. `"3_000"`, `"0xDEAD_BEEF"`, `"-1.5e10"`, `"inf"`) as an
/// integer or float, per the rules in [`validate_underscores`] and the
/// leading-zero restriction on decimal integers.
pub fn parse(raw: &str, line: usize, column: usize) -> Result<Value, TomlError> {
    if raw == "inf" || raw == "+inf" {
        return Ok(float_value(f64::INFINITY, raw));
    }
    if raw == "-inf" {
        return Ok(float_value(f64::NEG_INFINITY, raw));
    }
    if raw == "nan" || raw == "+nan" || raw == "-nan" {
        return Ok(float_value(f64::NAN, raw));
    }

    // TOML only permits lowercase radix prefixes; `0X`/`0O`/`0B` fall through
    // to the decimal/float path below and are rejected there.
    if let Some(rest) = raw.strip_prefix("0x") {
        return parse_radix(rest, 16, raw, line, column);
    }
    if let Some(rest) = raw.strip_prefix("0o") {
        return parse_radix(rest, 8, raw, line, column);
    }
    if let Some(rest) = raw.strip_prefix("0b") {
        return parse_radix(rest, 2, raw, line, column);
    }

    let is_float = raw.contains('.') || raw.contains('e') || raw.contains('E');
    if is_float {
        parse_float(raw, line, column)
    } else {
        parse_decimal_integer(raw, line, column)
    }
}

fn float_value(value: f64, raw: &str) -> Value {
    Value::Float(FloatValue::new(value, 0, false, raw.replace('_', "")))
}

fn parse_radix(digits: &str, radix: u32, raw: &str, line: usize, column: usize) -> Result<Value, TomlError> {
    validate_underscores(digits, radix == 16, line, column)?;
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        return Err(TomlError::decode(messages::INVALID_NUMBER, line, column));
    }
    i64::from_str_radix(&cleaned, radix)
        .map(Value::Integer)
        .map_err(|_| TomlError::decode(format!("{}: '{}'", messages::INVALID_NUMBER, raw), line, column))
}

fn parse_decimal_integer(raw: &str, line: usize, column: usize) -> Result<Value, TomlError> {
    let (sign, body) = split_sign(raw);
    validate_underscores(body, false, line, column)?;
    let cleaned: String = body.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        return Err(TomlError::decode(messages::INVALID_NUMBER, line, column));
    }
    if cleaned.len() > 1 && cleaned.starts_with('0') {
        return Err(TomlError::decode(messages::INVALID_LEADING_ZERO, line, column));
    }
    let text = format!("{sign}{cleaned}");
    text.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| TomlError::decode(format!("{}: '{}'", messages::INVALID_NUMBER, raw), line, column))
}

fn parse_float(raw: &str, line: usize, column: usize) -> Result<Value, TomlError> {
    let (sign, body) = split_sign(raw);
    validate_underscores(body, false, line, column)?;

    let scientific = body.contains('e') || body.contains('E');
    let mantissa = body.split(['e', 'E']).next().unwrap_or(body);
    let int_part = mantissa.split('.').next().unwrap_or(mantissa);
    let cleaned_int: String = int_part.chars().filter(|c| *c != '_').collect();
    if cleaned_int.len() > 1 && cleaned_int.starts_with('0') {
        return Err(TomlError::decode(messages::INVALID_LEADING_ZERO, line, column));
    }

    let precision = mantissa
        .split_once('.')
        .map(|(_, frac)| frac.chars().filter(|c| *c != '_').count())
        .unwrap_or(0);

    let cleaned: String = body.chars().filter(|c| *c != '_').collect();
    let text = format!("{sign}{cleaned}");
    text.parse::<f64>()
        .map(|value| Value::Float(FloatValue::new(value, precision, scientific, text)))
        .map_err(|_| TomlError::decode(format!("{}: '{}'", messages::INVALID_NUMBER, raw), line, column))
}

fn split_sign(raw: &str) -> (&str, &str) {
    if let Some(rest) = raw.strip_prefix('+') {
        ("", rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        ("-", rest)
    } else {
        ("", raw)
    }
}

/// An underscore is only legal strictly between two digits (or, for hex
/// bodies, two hex digits): never leading, trailing, or doubled.
fn validate_underscores(body: &str, hex: bool, line: usize, column: usize) -> Result<(), TomlError> {
    let is_digit = |c: char| if hex { c.is_ascii_hexdigit() } else { c.is_ascii_digit() };
    let chars: Vec<char> = body.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            continue;
        }
        let before_ok = i > 0 && is_digit(chars[i - 1]);
        let after_ok = i + 1 < chars.len() && is_digit(chars[i + 1]);
        if !before_ok || !after_ok {
            return Err(TomlError::decode(messages::INVALID_UNDERSCORE, line, column));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_integer() {
        assert_eq!(parse("42", 1, 1).unwrap().as_integer().unwrap(), 42);
    }

    #[test]
    fn parses_negative_integer() {
        assert_eq!(parse("-17", 1, 1).unwrap().as_integer().unwrap(), -17);
    }

    #[test]
    fn rejects_leading_zero() {
        assert!(parse("0123", 1, 1).is_err());
    }

    #[test]
    fn zero_itself_is_fine() {
        assert_eq!(parse("0", 1, 1).unwrap().as_integer().unwrap(), 0);
    }

    #[test]
    fn underscores_between_digits_are_accepted() {
        assert_eq!(parse("1_000_000", 1, 1).unwrap().as_integer().unwrap(), 1_000_000);
    }

    #[test]
    fn leading_underscore_is_rejected() {
        assert!(parse("_1", 1, 1).is_err());
    }

    #[test]
    fn trailing_underscore_is_rejected() {
        assert!(parse("1_", 1, 1).is_err());
    }

    #[test]
    fn doubled_underscore_is_rejected() {
        assert!(parse("1__2", 1, 1).is_err());
    }

    #[test]
    fn parses_hex_binary_and_octal() {
        assert_eq!(parse("0xFF", 1, 1).unwrap().as_integer().unwrap(), 255);
        assert_eq!(parse("0o17", 1, 1).unwrap().as_integer().unwrap(), 15);
        assert_eq!(parse("0b101", 1, 1).unwrap().as_integer().unwrap(), 5);
    }

    #[test]
    fn parses_float_with_precision_and_exponent() {
        let v = parse("3.140", 1, 1).unwrap();
        assert_eq!(v.as_float().unwrap(), 3.14);
        let v = parse("6.022e23", 1, 1).unwrap();
        assert!((v.as_float().unwrap() - 6.022e23).abs() < 1e15);
    }

    #[test]
    fn rejects_uppercase_radix_prefixes() {
        assert!(parse("0XFF", 1, 1).is_err());
        assert!(parse("0O17", 1, 1).is_err());
        assert!(parse("0B101", 1, 1).is_err());
    }

    #[test]
    fn parses_inf_and_nan() {
        assert!(parse("inf", 1, 1).unwrap().as_float().unwrap().is_infinite());
        assert!(parse("-inf", 1, 1).unwrap().as_float().unwrap().is_infinite());
        assert!(parse("nan", 1, 1).unwrap().as_float().unwrap().is_nan());
    }
}
