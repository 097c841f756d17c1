//! Basic and literal string scalars, single- and multi-line, including
//! escape-sequence and Unicode-scalar-value handling for basic strings.

use crate::error::{messages, TomlError};
use crate::predicates::is_forbidden_control;
use crate::tokenizer::Tokenizer;

/// Parses a basic (`"..."`/`"""..."""`) or literal (`'...'`/`'''...'''`)
/// string. `quote` is the delimiter character (`"` or `'`); `escapes` is
/// false for literal strings, which take their content verbatim.
pub fn parse(tok: &mut Tokenizer, quote: char, escapes: bool, line: usize, column: usize) -> Result<String, TomlError> {
    tok.advance(); // consume the opening quote

    let multiline = if tok.current() == quote {
        tok.advance();
        if tok.current() == quote {
            tok.advance();
            true
        } else {
            return Ok(String::new());
        }
    } else {
        false
    };

    if multiline {
        if tok.current() == '\r' && tok.prev() != '\r' {
            // leave for the '\n' check below; a lone \r is otherwise content
        }
        if tok.current() == '\n' {
            tok.advance();
        }
    }

    let mut out = String::new();
    loop {
        if !tok.more() {
            let msg = if multiline { messages::UNTERMINATED_MULTILINE_STRING } else { unterminated_message(quote) };
            return Err(TomlError::decode(msg, line, column));
        }

        let c = tok.current();

        if c == quote {
            let mut quote_run = 0;
            while tok.current() == quote && quote_run < 5 {
                quote_run += 1;
                tok.advance();
            }
            if multiline {
                if quote_run >= 3 {
                    for _ in 0..(quote_run - 3) {
                        out.push(quote);
                    }
                    return Ok(out);
                }
                for _ in 0..quote_run {
                    out.push(quote);
                }
                continue;
            } else {
                // single-line: the first quote always closes the string.
                out.extend(std::iter::repeat(quote).take(quote_run.saturating_sub(1)));
                return Ok(out);
            }
        }

        if !multiline && (c == '\n' || c == '\r') {
            return Err(TomlError::decode(unterminated_message(quote), line, column));
        }

        if is_forbidden_control(c) {
            return Err(TomlError::decode(messages::unexpected_character(c), tok.line(), tok.column()));
        }

        if escapes && c == '\\' {
            tok.advance();
            if multiline && (tok.current() == '\n' || tok.current() == '\r' || tok.current() == ' ' || tok.current() == '\t') {
                // line-ending backslash: trim all following whitespace/newlines
                while tok.more() && (tok.current() == ' ' || tok.current() == '\t' || tok.current() == '\n' || tok.current() == '\r') {
                    tok.advance();
                }
                continue;
            }
            out.push(parse_escape(tok, line, column)?);
            continue;
        }

        out.push(c);
        tok.advance();
    }
}

fn unterminated_message(quote: char) -> &'static str {
    if quote == '"' {
        messages::UNTERMINATED_BASIC_STRING
    } else {
        messages::UNTERMINATED_LITERAL_STRING
    }
}

fn parse_escape(tok: &mut Tokenizer, line: usize, column: usize) -> Result<char, TomlError> {
    let c = tok.current();
    let result = match c {
        'b' => Ok('\u{8}'),
        't' => Ok('\t'),
        'n' => Ok('\n'),
        'f' => Ok('\u{c}'),
        'r' => Ok('\r'),
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        'u' => {
            tok.advance();
            return parse_unicode_escape(tok, 4, line, column);
        }
        'U' => {
            tok.advance();
            return parse_unicode_escape(tok, 8, line, column);
        }
        _ => Err(TomlError::decode(messages::INVALID_ESCAPE, line, column)),
    };
    tok.advance();
    result
}

fn parse_unicode_escape(tok: &mut Tokenizer, digit_count: usize, line: usize, column: usize) -> Result<char, TomlError> {
    let mut code: u32 = 0;
    for _ in 0..digit_count {
        let c = tok.current();
        let digit = c.to_digit(16).ok_or_else(|| TomlError::decode(messages::INVALID_UNICODE_ESCAPE, line, column))?;
        code = code * 16 + digit;
        tok.advance();
    }
    char::from_u32(code).ok_or_else(|| TomlError::decode(messages::INVALID_UNICODE_SCALAR, line, column))
}
