//! Classifies and parses a raw token into one of the four datetime [`Value`] shapes.

use crate::datetime::DateTime;
use crate::error::{messages, TomlError};
use crate::value::Value;

/// Parses `raw`, the already-assembled `YYYY-MM-DD[ T]HH:MM:SS[.fff][offset]`
/// (or a bare `YYYY-MM-DD` / bare `HH:MM:SS[.fff]`) text, into the matching
/// [`Value`] variant.
pub fn parse(raw: &str, line: usize, column: usize) -> Result<Value, TomlError> {
    let bytes = raw.as_bytes();
    let has_date = bytes.len() >= 10 && bytes[4] == b'-' && bytes[7] == b'-';

    if has_date {
        let (year, month, day) = parse_date(&raw[0..10], line, column)?;
        let mut dt = DateTime::new();
        dt.year = year;
        dt.month = month;
        dt.day = day;

        if raw.len() == 10 {
            return Ok(Value::LocalDate(dt));
        }

        let sep = bytes[10];
        if sep != b'T' && sep != b't' && sep != b' ' {
            return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
        }
        let rest = &raw[11..];
        let (hour, minute, second, nanosecond, fraction_digits, offset_minutes, offset_is_z) =
            parse_time_and_offset(rest, line, column)?;
        dt.hour = hour;
        dt.minute = minute;
        dt.second = second;
        dt.nanosecond = nanosecond;
        dt.fraction_digits = fraction_digits;
        dt.offset_minutes = offset_minutes;
        dt.offset_is_z = offset_is_z;

        if offset_minutes.is_some() {
            Ok(Value::OffsetDateTime(dt))
        } else {
            Ok(Value::LocalDateTime(dt))
        }
    } else {
        let (hour, minute, second, nanosecond, fraction_digits, offset_minutes, offset_is_z) =
            parse_time_and_offset(raw, line, column)?;
        if offset_minutes.is_some() {
            return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
        }
        let mut dt = DateTime::new();
        dt.hour = hour;
        dt.minute = minute;
        dt.second = second;
        dt.nanosecond = nanosecond;
        dt.fraction_digits = fraction_digits;
        let _ = offset_is_z;
        Ok(Value::LocalTime(dt))
    }
}

fn two_digits(s: &str, line: usize, column: usize) -> Result<u8, TomlError> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }
    Ok(s.parse().unwrap())
}

fn parse_date(s: &str, line: usize, column: usize) -> Result<(i32, u8, u8), TomlError> {
    let year = &s[0..4];
    let month = &s[5..7];
    let day = &s[8..10];
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }
    let year: i32 = year.parse().map_err(|_| TomlError::decode(messages::INVALID_DATETIME, line, column))?;
    let month = two_digits(month, line, column)?;
    let day = two_digits(day, line, column)?;
    if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }
    Ok((year, month, day))
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `month` is assumed already checked to be in `1..=12`.
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

type TimeParts = (u8, u8, u8, u32, u8, Option<i32>, bool);

fn parse_time_and_offset(s: &str, line: usize, column: usize) -> Result<TimeParts, TomlError> {
    if s.len() < 8 || s.as_bytes()[2] != b':' || s.as_bytes()[5] != b':' {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }
    let hour = two_digits(&s[0..2], line, column)?;
    let minute = two_digits(&s[3..5], line, column)?;
    let second = two_digits(&s[6..8], line, column)?;
    if hour > 23 || minute > 59 || second > 60 {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }

    let mut rest = &s[8..];
    let mut nanosecond = 0u32;
    let mut fraction_digits = 0u8;
    if let Some(stripped) = rest.strip_prefix('.') {
        let digits_end = stripped.find(|c: char| !c.is_ascii_digit()).unwrap_or(stripped.len());
        let digits = &stripped[..digits_end];
        if digits.is_empty() || digits.len() > 9 {
            return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
        }
        fraction_digits = digits.len() as u8;
        let padded = format!("{:0<9}", digits);
        nanosecond = padded.parse().map_err(|_| TomlError::decode(messages::INVALID_DATETIME, line, column))?;
        rest = &stripped[digits_end..];
    }

    if rest.is_empty() {
        return Ok((hour, minute, second, nanosecond, fraction_digits, None, false));
    }

    if rest == "Z" || rest == "z" {
        return Ok((hour, minute, second, nanosecond, fraction_digits, Some(0), true));
    }

    let sign = match rest.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(TomlError::decode(messages::INVALID_DATETIME, line, column)),
    };
    let offset_body = &rest[1..];
    if offset_body.len() != 5 || offset_body.as_bytes()[2] != b':' {
        return Err(TomlError::decode(messages::INVALID_DATETIME, line, column));
    }
    let offset_hour: i32 = two_digits(&offset_body[0..2], line, column)? as i32;
    let offset_minute: i32 = two_digits(&offset_body[3..5], line, column)? as i32;
    let minutes = sign * (offset_hour * 60 + offset_minute);
    Ok((hour, minute, second, nanosecond, fraction_digits, Some(minutes), false))
}
