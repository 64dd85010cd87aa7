#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

// === Numbers ===

#[test]
fn plain_digit_run() {
    assert_eq!(number("100", 0), 3);
    assert_eq!(number("7", 0), 1);
}

#[test]
fn separators_between_digits_are_included() {
    assert_eq!(number("100_000", 0), 7);
    assert_eq!(number("1_2_3", 0), 5);
}

#[test]
fn trailing_separator_is_excluded() {
    assert_eq!(number("100_000_", 0), 7);
    assert_eq!(number("5_", 0), 1);
}

#[test]
fn doubled_separator_ends_the_number() {
    assert_eq!(number("1__2", 0), 1);
}

#[test]
fn number_stops_at_non_digit() {
    assert_eq!(number("42 + 1", 0), 2);
    assert_eq!(number("3.14", 0), 1);
}

#[test]
fn number_mid_buffer() {
    assert_eq!(number("x = 100_000 ", 4), 11);
}

// === Strings ===

#[test]
fn closed_string_includes_both_quotes() {
    let source = "\"a\" beyond string~";
    assert_eq!(string(source, 0), 3);
    assert_eq!(&source[0..3], "\"a\"");
}

#[test]
fn escaped_quote_does_not_terminate() {
    let source = r#""a\"b" rest"#;
    assert_eq!(string(source, 0), 6);
    assert_eq!(&source[0..6], r#""a\"b""#);
}

#[test]
fn escaped_backslash_leaves_the_quote_live() {
    let source = r#""a\\" rest"#;
    assert_eq!(string(source, 0), 5);
}

#[test]
fn unterminated_string_runs_to_the_end() {
    assert_eq!(string("\"never closed", 0), 13);
}

#[test]
fn empty_string_literal() {
    assert_eq!(string("\"\"x", 0), 2);
}

#[test]
fn multibyte_content_is_spanned_whole() {
    let source = "\"héllo\" tail";
    assert_eq!(string(source, 0), 8);
    assert_eq!(&source[0..8], "\"héllo\"");
}

// === Whitespace ===

#[test]
fn ascii_whitespace_run() {
    assert_eq!(whitespace("  \t x", 0), 4);
}

#[test]
fn unicode_whitespace_is_one_run() {
    // Ordinary space + PUNCTUATION SPACE (U+2008) + space.
    let source = " \u{2008} x";
    assert_eq!(whitespace(source, 0), 5);
}

#[test]
fn letters_are_not_whitespace() {
    assert_eq!(whitespace("x  ", 0), 0);
    assert!(!is_whitespace("a"));
    assert!(!is_whitespace(" a"));
}

#[test]
fn whitespace_runs_to_buffer_end() {
    assert_eq!(whitespace("ab   ", 2), 5);
}

// === Identifiers ===

#[test]
fn ident_run_stops_at_symbol() {
    assert_eq!(identifier("name.first", 0), 4);
    assert_eq!(identifier("snake_case ", 0), 10);
}

#[test]
fn ident_may_contain_digits() {
    assert_eq!(identifier("item2 ", 0), 5);
}

#[test]
fn ident_begin_excludes_digits() {
    assert!(is_ident_begin("a"));
    assert!(is_ident_begin("_"));
    assert!(is_ident_begin("é"));
    assert!(!is_ident_begin("9"));
    assert!(!is_ident_begin("."));
}

// === Properties ===

proptest! {
    #[test]
    fn number_never_ends_on_a_separator(digits in "[0-9_]{1,12}") {
        let source = format!("1{digits}");
        let end = number(&source, 0);
        prop_assert!(end >= 1);
        prop_assert!(!source[..end].ends_with('_'));
    }

    #[test]
    fn number_consumes_every_plain_digit_run(digits in "[0-9]{1,12}") {
        prop_assert_eq!(number(&digits, 0), digits.len());
    }

    #[test]
    fn whitespace_end_is_monotonic(tail in "[ \tx]{0,12}") {
        let end = whitespace(&tail, 0);
        prop_assert!(end <= tail.len());
        prop_assert!(tail[..end].chars().all(char::is_whitespace));
    }
}
