//! String escaping shared by the canonical dump serializer.

/// Appends `value` to `out` with the named JSON escapes (`\" \\ \b \n \r \t \f`)
/// applied and every other non-printable byte escaped as `\u00XX`.
pub(crate) fn escape_json_string(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        let mut out = String::new();
        escape_json_string(r#"a"b\c"#, &mut out);
        assert_eq!(out, r#"a\"b\\c"#);
    }

    #[test]
    fn escapes_named_control_characters() {
        let mut out = String::new();
        escape_json_string("a\tb\nc", &mut out);
        assert_eq!(out, "a\\tb\\nc");
    }

    #[test]
    fn escapes_other_control_bytes_as_unicode_escapes() {
        let mut out = String::new();
        escape_json_string("\u{1}", &mut out);
        assert_eq!(out, "\\u0001");
    }

    #[test]
    fn passes_through_printable_unicode() {
        let mut out = String::new();
        escape_json_string("café", &mut out);
        assert_eq!(out, "café");
    }
}
