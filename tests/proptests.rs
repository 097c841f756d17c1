//! Property-based tests using proptest
//!
//! These tests use property-based testing to verify parser and tokenizer
//! behavior across a wide range of inputs.

use proptest::prelude::*;
use tomletta::{parse_str, to_canonical_json, DumpConfig};

// =============================================================================
// Integer round-trip
// =============================================================================

proptest! {
    /// Any 64-bit signed integer, written as a plain decimal literal, parses
    /// back to the same value and re-dumps to the same decimal text.
    #[test]
    fn test_integer_round_trips(n in any::<i64>()) {
        let source = format!("n = {n}\n");
        let root = parse_str(&source).unwrap();
        prop_assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), n);
        let json = to_canonical_json(&root, DumpConfig::default());
        prop_assert_eq!(json, format!(r#"{{"n":{{"type":"integer","value":"{n}"}}}}"#));
    }

    /// Underscores between every pair of digits are always legal in a
    /// decimal integer and never change the parsed value.
    #[test]
    fn test_underscored_integer_matches_plain(n in 1_0000i64..999_999_999i64) {
        let digits = n.to_string();
        let mut underscored = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 {
                underscored.push('_');
            }
            underscored.push(c);
        }
        let source = format!("n = {underscored}\n");
        let root = parse_str(&source).unwrap();
        prop_assert_eq!(root.lookup("n").unwrap().as_integer().unwrap(), n);
    }
}

// =============================================================================
// String escaping round-trip
// =============================================================================

proptest! {
    /// Any printable-ASCII string, written as a quoted basic string with `"`
    /// and `\` escaped, parses back to exactly the original string.
    #[test]
    fn test_basic_string_round_trips(s in "[ -~]{0,40}") {
        let escaped: String = s.chars().flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            other => vec![other],
        }).collect();
        let source = format!("s = \"{escaped}\"\n");
        let root = parse_str(&source).unwrap();
        prop_assert_eq!(root.lookup("s").unwrap().as_str().unwrap(), s);
    }

    /// Any string made only of bare-key-safe characters round-trips as a
    /// bare dotted-key segment.
    #[test]
    fn test_bare_key_round_trips(key in "[A-Za-z][A-Za-z0-9_-]{0,15}") {
        let source = format!("{key} = 1\n");
        let root = parse_str(&source).unwrap();
        prop_assert_eq!(root.lookup(&key).unwrap().as_integer().unwrap(), 1);
    }
}

// =============================================================================
// Structural fuzzing — the parser must never panic
// =============================================================================

proptest! {
    /// Arbitrary printable-ASCII byte soup must never make the parser panic;
    /// it either parses or returns an `Err`, nothing else.
    #[test]
    fn test_parser_never_panics_on_arbitrary_input(s in "[ -~\\n]{0,200}") {
        let _ = parse_str(&s);
    }

    /// A well-formed array of N plain integers always parses to an array of
    /// length N, for any N within the configured limit.
    #[test]
    fn test_array_length_matches_element_count(n in 0usize..50) {
        let elements: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let source = format!("a = [{}]\n", elements.join(", "));
        let root = parse_str(&source).unwrap();
        let items = root.lookup("a").unwrap().as_array().unwrap();
        prop_assert_eq!(items.len(), n);
    }
}
