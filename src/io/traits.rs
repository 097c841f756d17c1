//! Cursor and sink abstractions used by the tokenizer and the canonical dump serializer.

/// A character-at-a-time cursor over raw UTF-8 input bytes.
///
/// The tokenizer drives a `Source` one code point at a time; it never needs
/// random access beyond the single-step backtrack it manages itself.
pub trait Source {
    /// Advances the cursor past the current UTF-8 code point.
    fn next(&mut self);
    /// Decodes and returns the UTF-8 code point under the cursor, or `None` past the end.
    fn current(&mut self) -> Option<char>;
    /// True while the cursor has not yet run past the end of the input.
    fn more(&mut self) -> bool;
    /// Rewinds the cursor to the start of the input.
    fn reset(&mut self);
    /// Current byte offset of the cursor.
    fn position(&self) -> usize;
    /// Moves the cursor to an absolute byte offset.
    fn seek(&mut self, position: usize);
}

/// A byte sink used by the canonical dump serializer.
pub trait Destination {
    fn add_byte(&mut self, byte: u8);
    fn add_bytes(&mut self, bytes: &str);
    fn clear(&mut self);
}

/// Number of bytes a UTF-8 code point starting with `first_byte` occupies,
/// judging only from its leading bits. Falls back to 1 for a stray
/// continuation/invalid leading byte so callers always make progress.
pub(crate) fn utf8_char_len(first_byte: u8) -> usize {
    if first_byte & 0x80 == 0 {
        1
    } else if first_byte & 0xE0 == 0xC0 {
        2
    } else if first_byte & 0xF0 == 0xE0 {
        3
    } else if first_byte & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Decodes the UTF-8 scalar value starting at `pos` in `bytes`, returning the
/// decoded `char` and its width in bytes. Malformed input decodes to
/// `char::REPLACEMENT_CHARACTER` with a width of 1 rather than panicking, so
/// a cursor built on this never gets stuck.
pub(crate) fn decode_utf8_at(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    if pos >= bytes.len() {
        return None;
    }
    let width = utf8_char_len(bytes[pos]).min(bytes.len() - pos);
    match std::str::from_utf8(&bytes[pos..pos + width]) {
        Ok(s) => s.chars().next().map(|c| (c, c.len_utf8())),
        Err(_) => Some((char::REPLACEMENT_CHARACTER, 1)),
    }
}
