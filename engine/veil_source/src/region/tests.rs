#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;

// === Construction ===

#[test]
fn new_keeps_offsets() {
    let region = Region::new(2, 5);
    assert_eq!(region.begin, 2);
    assert_eq!(region.end, 5);
}

#[test]
fn len_counts_bytes() {
    assert_eq!(Region::new(0, 1).len(), 1);
    assert_eq!(Region::new(10, 14).len(), 4);
}

#[test]
fn constructed_regions_are_never_empty() {
    assert!(!Region::new(3, 4).is_empty());
}

// === Resolution ===

#[test]
fn literal_resolves_against_source() {
    let source = "hello {{ name }}";
    assert_eq!(Region::new(0, 5).literal(source), "hello");
    assert_eq!(Region::new(9, 13).literal(source), "name");
}

#[test]
fn literal_handles_multibyte_boundaries() {
    let source = "héllo";
    // 'é' occupies bytes 1..3.
    assert_eq!(Region::new(1, 3).literal(source), "é");
    assert_eq!(Region::new(0, source.len()).literal(source), source);
}

#[test]
fn pointer_delegates_to_line_lookup() {
    let source = "a\nbc";
    let pointer = Region::new(2, 4).pointer(source);
    assert_eq!(pointer.line, 2);
    assert_eq!(pointer.text, "bc");
}
