//! A one-codepoint-at-a-time cursor with a two-token lookback and a
//! single-step backtrack, used by every scalar and structural parser.

use crate::io::traits::decode_utf8_at;

/// Reads `source` one UTF-8 code point at a time, exposing the current
/// character plus the previous two (`prev`, `prev_prev`) so parsers that
/// need a short lookback
/// — underscore-flanking digit checks, escape-sequence dispatch — don't
/// have to re-peek the source themselves.
///
/// Positions are tracked as 1-based `line`/`column` pairs. `backtrace(n)`
/// rewinds the cursor by `n` tokens (plus the two already buffered in
/// `prev`/`prev_prev`) and recomputes `line`/`column` from a table of each
/// line's length recorded as it is consumed, rather than re-scanning from
/// the start of the source.
pub struct Tokenizer<'a> {
    source: &'a [u8],
    cursor: usize,
    token: char,
    prev: char,
    prev_prev: char,
    has_token: bool,
    line: usize,
    column: usize,
    line_lengths: Vec<usize>,
}

const SENTINEL: char = '\0';

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        let mut tokenizer = Self {
            source,
            cursor: 0,
            token: SENTINEL,
            prev: SENTINEL,
            prev_prev: SENTINEL,
            has_token: true,
            line: 1,
            column: 0,
            line_lengths: vec![0],
        };
        tokenizer.advance();
        tokenizer.advance();
        tokenizer
    }

    /// Decodes the next UTF-8 code point and advances the byte cursor by its
    /// width (not necessarily 1), so multi-byte content inside string
    /// literals round-trips as the scalar values it actually encodes rather
    /// than as separate Latin-1 bytes.
    fn read_byte(&mut self) -> char {
        match decode_utf8_at(self.source, self.cursor) {
            Some((c, width)) => {
                self.cursor += width;
                c
            }
            None => SENTINEL,
        }
    }

    /// Advances to the next byte, shifting `token` into `prev` and `prev` into `prev_prev`.
    pub fn advance(&mut self) {
        self.prev_prev = self.prev;
        self.prev = self.token;
        let next = self.read_byte();
        if next == SENTINEL && self.cursor >= self.source.len() {
            self.has_token = false;
        }
        self.token = next;

        if self.prev == '\n' {
            self.line += 1;
            self.column = 0;
            if self.line_lengths.len() <= self.line {
                self.line_lengths.push(0);
            }
        }
        self.column += 1;
        if self.line_lengths.len() <= self.line {
            self.line_lengths.push(self.column);
        } else {
            self.line_lengths[self.line] = self.column;
        }
    }

    /// Rewinds the cursor by `count` tokens plus the two already buffered
    /// ahead, then re-primes `token`/`prev`/`prev_prev` from there.
    pub fn backtrace(&mut self, count: usize) {
        log::trace!("backtrace({count}) from line {} column {}", self.line, self.column);
        let pre_count = count + 2;
        self.cursor = self.cursor.saturating_sub(pre_count);

        let mut remaining = pre_count;
        while self.line > 0 && remaining > self.column {
            remaining -= self.column;
            self.line -= 1;
            self.column = self.line_lengths.get(self.line).copied().unwrap_or(0);
        }
        self.column = self.column.saturating_sub(remaining);

        self.has_token = true;
        self.advance();
        self.advance();
    }

    pub fn current(&self) -> char {
        self.token
    }

    pub fn prev(&self) -> char {
        self.prev
    }

    pub fn prev_prev(&self) -> char {
        self.prev_prev
    }

    pub fn more(&self) -> bool {
        self.has_token
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
