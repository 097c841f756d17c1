//! Recursive-descent parser that turns TOML source text into a [`Key`] tree.

mod datetimes;
mod numbers;
mod strings;

use crate::config::ParserConfig;
use crate::error::{messages, ErrorKind, TomlError};
use crate::key::{Key, KeyKind};
use crate::predicates::{is_bare_key_char, is_bare_key_start, is_newline, is_whitespace};
use crate::tokenizer::Tokenizer;
use crate::value::Value;

/// Parses a complete TOML document from a string slice, using the default
/// [`ParserConfig`].
pub fn parse_str(source: &str) -> Result<Key, TomlError> {
    parse_with_config(source, ParserConfig::default())
}

/// Parses a complete TOML document from raw bytes.
pub fn parse_bytes(source: &[u8]) -> Result<Key, TomlError> {
    parse_with_config(&String::from_utf8_lossy(source), ParserConfig::default())
}

/// Parses a complete TOML document, enforcing the given resource limits.
pub fn parse_with_config(source: &str, config: ParserConfig) -> Result<Key, TomlError> {
    log::debug!("parsing {} bytes", source.len());
    if source.len() > config.max_source_bytes() {
        return Err(TomlError::new(ErrorKind::Decode, messages::DOCUMENT_TOO_LARGE, 1, 1));
    }
    let line_count = source.bytes().filter(|b| *b == b'\n').count() + 1;
    if line_count > config.max_lines() {
        return Err(TomlError::new(ErrorKind::Decode, messages::TOO_MANY_LINES, line_count, 1));
    }

    let mut tok = Tokenizer::new(source.as_bytes());
    let mut root = Key::root();
    let mut current_path: Vec<String> = Vec::new();

    let result = (|| {
        loop {
            skip_insignificant(&mut tok);
            if !tok.more() {
                break;
            }

            if tok.current() == '[' {
                tok.advance();
                if tok.current() == '[' {
                    tok.advance();
                    parse_array_table_header(&mut tok, &config, &mut root, &mut current_path)?;
                } else {
                    parse_standard_table_header(&mut tok, &config, &mut root, &mut current_path)?;
                }
            } else {
                parse_key_value_line(&mut tok, &config, &mut root, &current_path)?;
            }
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            log::debug!("parsed {} top-level keys", root.subkeys.len());
            Ok(root)
        }
        Err(err) => {
            log::warn!("parse failed at line {} column {}: {}", err.line(), err.column(), err.message());
            Err(err)
        }
    }
}

/// Skips runs of whitespace, newlines, and full-line or trailing comments.
fn skip_insignificant(tok: &mut Tokenizer) {
    loop {
        while tok.more() && (is_whitespace(tok.current()) || is_newline(tok.current())) {
            tok.advance();
        }
        if tok.current() == '#' {
            while tok.more() && !is_newline(tok.current()) {
                tok.advance();
            }
            continue;
        }
        break;
    }
}

fn skip_whitespace(tok: &mut Tokenizer) {
    while is_whitespace(tok.current()) {
        tok.advance();
    }
}

/// After a value or a table header, only whitespace, an optional comment,
/// then a newline or end-of-input may follow on the same line.
fn expect_end_of_line(tok: &mut Tokenizer, line: usize, column: usize) -> Result<(), TomlError> {
    skip_whitespace(tok);
    if tok.current() == '#' {
        while tok.more() && !is_newline(tok.current()) {
            tok.advance();
        }
    }
    if tok.more() && !is_newline(tok.current()) {
        return Err(TomlError::decode(messages::MISSING_NEWLINE_AFTER_VALUE, line, column));
    }
    Ok(())
}

fn parse_key_segment(tok: &mut Tokenizer, config: &ParserConfig, line: usize, column: usize) -> Result<String, TomlError> {
    let segment = match tok.current() {
        '"' => strings::parse(tok, '"', true, line, column)?,
        '\'' => strings::parse(tok, '\'', false, line, column)?,
        c if is_bare_key_start(c) => {
            let mut s = String::new();
            while is_bare_key_char(tok.current()) {
                s.push(tok.current());
                tok.advance();
            }
            s
        }
        c => return Err(TomlError::decode(messages::unexpected_character(c), line, column)),
    };
    if segment.is_empty() {
        return Err(TomlError::decode(messages::EMPTY_BARE_KEY, line, column));
    }
    if segment.len() > config.max_identifier_bytes() {
        return Err(TomlError::decode(messages::IDENTIFIER_TOO_LONG, line, column));
    }
    Ok(segment)
}

fn parse_dotted_key(tok: &mut Tokenizer, config: &ParserConfig, line: usize, column: usize) -> Result<Vec<String>, TomlError> {
    let mut segments = vec![parse_key_segment(tok, config, line, column)?];
    loop {
        skip_whitespace(tok);
        if tok.current() != '.' {
            break;
        }
        tok.advance();
        skip_whitespace(tok);
        segments.push(parse_key_segment(tok, config, line, column)?);
    }
    Ok(segments)
}

fn parse_key_value_line(
    tok: &mut Tokenizer,
    config: &ParserConfig,
    root: &mut Key,
    current_path: &[String],
) -> Result<(), TomlError> {
    let line = tok.line();
    let column = tok.column();
    let segments = parse_dotted_key(tok, config, line, column)?;
    skip_whitespace(tok);
    if tok.current() != '=' {
        return Err(TomlError::decode(messages::MISSING_KEY_VALUE_SEPARATOR, line, column));
    }
    tok.advance();
    skip_whitespace(tok);
    let value = parse_value(tok, config, 0, line, column)?;
    expect_end_of_line(tok, line, column)?;

    let context = navigate_existing(root, current_path)
        .ok_or_else(|| TomlError::decode(messages::ARRAY_OF_TABLES_NAME_CONFLICT, line, column))?;
    insert_dotted(context, &segments, value, config, line, column)
}

fn navigate_existing<'k>(root: &'k mut Key, path: &[String]) -> Option<&'k mut Key> {
    let mut node = root;
    for segment in path {
        node = node.get_child_mut(segment)?;
    }
    Some(node)
}

/// Walks `segments` from `root`, creating `Key`-kind intermediates as
/// needed, and attaches `value` as a leaf at the final segment.
fn insert_dotted(
    root: &mut Key,
    segments: &[String],
    value: Value,
    config: &ParserConfig,
    line: usize,
    column: usize,
) -> Result<(), TomlError> {
    let mut value = Some(value);
    let mut node = root;
    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        let incoming = if is_last {
            Key::leaf(segment.clone(), value.take().expect("value consumed once"))
        } else {
            Key::new(KeyKind::Key, segment.clone())
        };
        node = node.add_subkey(segment, incoming, line, column)?;
        if node.subkeys.len() > config.max_subkeys() {
            return Err(TomlError::decode(messages::TOO_MANY_SUBKEYS, line, column));
        }
    }
    Ok(())
}

fn parse_standard_table_header(
    tok: &mut Tokenizer,
    config: &ParserConfig,
    root: &mut Key,
    current_path: &mut Vec<String>,
) -> Result<(), TomlError> {
    let line = tok.line();
    let column = tok.column();
    skip_whitespace(tok);
    let segments = parse_dotted_key(tok, config, line, column)?;
    skip_whitespace(tok);
    if tok.current() != ']' {
        return Err(TomlError::decode(messages::UNTERMINATED_TABLE_HEADER, line, column));
    }
    tok.advance();
    expect_end_of_line(tok, line, column)?;
    log::trace!("table header [{}]", segments.join("."));

    let mut node = root;
    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        let kind = if is_last { KeyKind::TableLeaf } else { KeyKind::Table };
        let incoming = Key::new(kind, segment.clone());
        node = node.add_subkey(segment, incoming, line, column)?;
        if node.subkeys.len() > config.max_subkeys() {
            return Err(TomlError::decode(messages::TOO_MANY_SUBKEYS, line, column));
        }
    }
    *current_path = segments;
    Ok(())
}

fn parse_array_table_header(
    tok: &mut Tokenizer,
    config: &ParserConfig,
    root: &mut Key,
    current_path: &mut Vec<String>,
) -> Result<(), TomlError> {
    let line = tok.line();
    let column = tok.column();
    skip_whitespace(tok);
    let segments = parse_dotted_key(tok, config, line, column)?;
    skip_whitespace(tok);
    if tok.current() != ']' {
        return Err(TomlError::decode(messages::UNTERMINATED_TABLE_HEADER, line, column));
    }
    tok.advance();
    if tok.current() != ']' {
        return Err(TomlError::decode(messages::UNTERMINATED_TABLE_HEADER, line, column));
    }
    tok.advance();
    expect_end_of_line(tok, line, column)?;
    log::trace!("array-of-tables header [[{}]]", segments.join("."));

    let (last, prefix) = segments.split_last().expect("dotted key always has at least one segment");
    let mut node = root;
    for segment in prefix {
        node = node.add_subkey(segment, Key::new(KeyKind::Table, segment.clone()), line, column)?;
    }
    let array_table = node.add_subkey(last, Key::new(KeyKind::ArrayTable, last.clone()), line, column)?;
    array_table.push_array_table_row();
    if let Some(Value::Array(rows)) = &array_table.value {
        if rows.len() > config.max_array_len() {
            return Err(TomlError::decode(messages::ARRAY_TOO_LONG, line, column));
        }
    }
    *current_path = segments;
    Ok(())
}

fn parse_value(tok: &mut Tokenizer, config: &ParserConfig, depth: usize, line: usize, column: usize) -> Result<Value, TomlError> {
    if depth > config.max_depth() {
        return Err(TomlError::decode(messages::NESTING_TOO_DEEP, line, column));
    }
    match tok.current() {
        '"' => {
            let s = strings::parse(tok, '"', true, line, column)?;
            check_string_len(&s, config, line, column)?;
            Ok(Value::String(s))
        }
        '\'' => {
            let s = strings::parse(tok, '\'', false, line, column)?;
            check_string_len(&s, config, line, column)?;
            Ok(Value::String(s))
        }
        '[' => parse_array(tok, config, depth, line, column),
        '{' => parse_inline_table(tok, config, depth, line, column),
        't' => parse_literal_word(tok, "true", Value::Boolean(true), line, column),
        'f' => parse_literal_word(tok, "false", Value::Boolean(false), line, column),
        c if c == '+' || c == '-' || c.is_ascii_digit() || c == 'i' || c == 'n' => parse_number_or_datetime(tok, line, column),
        c => Err(TomlError::decode(messages::unexpected_character(c), line, column)),
    }
}

fn check_string_len(s: &str, config: &ParserConfig, line: usize, column: usize) -> Result<(), TomlError> {
    if s.len() > config.max_string_bytes() {
        return Err(TomlError::decode(messages::STRING_TOO_LONG, line, column));
    }
    Ok(())
}

fn parse_literal_word(tok: &mut Tokenizer, word: &str, value: Value, line: usize, column: usize) -> Result<Value, TomlError> {
    for expected in word.chars() {
        if tok.current() != expected {
            return Err(TomlError::decode(messages::INVALID_BOOLEAN, line, column));
        }
        tok.advance();
    }
    Ok(value)
}

fn is_delimiter(c: char) -> bool {
    c == '\0' || is_whitespace(c) || is_newline(c) || c == ',' || c == ']' || c == '}' || c == '#'
}

fn read_bare_token(tok: &mut Tokenizer) -> String {
    let mut s = String::new();
    while tok.more() && !is_delimiter(tok.current()) {
        s.push(tok.current());
        tok.advance();
    }
    s
}

fn looks_like_plain_date(raw: &str) -> bool {
    let b = raw.as_bytes();
    b.len() == 10 && b[4] == b'-' && b[7] == b'-' && b.iter().enumerate().all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

fn looks_like_datetime(raw: &str) -> bool {
    looks_like_plain_date(raw) || raw.contains(':')
}

/// Reads a bare numeric-or-datetime token, reassembling a space-separated
/// `YYYY-MM-DD HH:MM:SS` pair (RFC 3339 permits a space in place of `T`) by
/// speculatively consuming past the space and backtracking if what follows
/// does not look like a time.
fn parse_number_or_datetime(tok: &mut Tokenizer, line: usize, column: usize) -> Result<Value, TomlError> {
    let mut raw = read_bare_token(tok);

    if looks_like_plain_date(&raw) {
        if tok.current() == 'T' || tok.current() == 't' {
            raw.push(tok.current());
            tok.advance();
            raw.push_str(&read_bare_token(tok));
        } else if tok.current() == ' ' {
            tok.advance();
            let maybe_time = read_bare_token(tok);
            if maybe_time.len() >= 8 && maybe_time.as_bytes()[2] == b':' {
                raw.push('T');
                raw.push_str(&maybe_time);
            } else {
                tok.backtrace(1 + maybe_time.chars().count());
            }
        }
    }

    if looks_like_datetime(&raw) {
        datetimes::parse(&raw, line, column)
    } else {
        numbers::parse(&raw, line, column)
    }
}

fn parse_array(tok: &mut Tokenizer, config: &ParserConfig, depth: usize, line: usize, column: usize) -> Result<Value, TomlError> {
    tok.advance(); // consume '['
    let mut items = Vec::new();
    loop {
        skip_array_insignificant(tok);
        if tok.current() == ']' {
            tok.advance();
            return Ok(Value::Array(items));
        }
        if !tok.more() {
            return Err(TomlError::decode(messages::UNTERMINATED_ARRAY, line, column));
        }
        if items.len() >= config.max_array_len() {
            return Err(TomlError::decode(messages::ARRAY_TOO_LONG, line, column));
        }
        items.push(parse_value(tok, config, depth + 1, tok.line(), tok.column())?);
        skip_array_insignificant(tok);
        match tok.current() {
            ',' => tok.advance(),
            ']' => {
                tok.advance();
                return Ok(Value::Array(items));
            }
            _ => return Err(TomlError::decode(messages::UNTERMINATED_ARRAY, line, column)),
        }
    }
}

fn skip_array_insignificant(tok: &mut Tokenizer) {
    loop {
        while tok.more() && (is_whitespace(tok.current()) || is_newline(tok.current())) {
            tok.advance();
        }
        if tok.current() == '#' {
            while tok.more() && !is_newline(tok.current()) {
                tok.advance();
            }
            continue;
        }
        break;
    }
}

fn parse_inline_table(tok: &mut Tokenizer, config: &ParserConfig, depth: usize, line: usize, column: usize) -> Result<Value, TomlError> {
    tok.advance(); // consume '{'
    let mut table = Key::new(KeyKind::TableLeaf, "");
    skip_whitespace(tok);
    if tok.current() == '}' {
        tok.advance();
        return Ok(Value::InlineTable(Box::new(table)));
    }
    loop {
        skip_whitespace(tok);
        let entry_line = tok.line();
        let entry_column = tok.column();
        let segments = parse_dotted_key(tok, config, entry_line, entry_column)?;
        skip_whitespace(tok);
        if tok.current() != '=' {
            return Err(TomlError::decode(messages::MISSING_KEY_VALUE_SEPARATOR, entry_line, entry_column));
        }
        tok.advance();
        skip_whitespace(tok);
        let value = parse_value(tok, config, depth + 1, entry_line, entry_column)?;
        insert_dotted(&mut table, &segments, value, config, entry_line, entry_column)?;
        skip_whitespace(tok);
        match tok.current() {
            ',' => {
                tok.advance();
            }
            '}' => {
                tok.advance();
                return Ok(Value::InlineTable(Box::new(table)));
            }
            _ => return Err(TomlError::decode(messages::UNTERMINATED_INLINE_TABLE, line, column)),
        }
    }
}
