#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use veil_source::Region;

use super::*;

// === Accessors ===

#[test]
fn bare_diagnostic_has_only_a_reason() {
    let diagnostic = Diagnostic::new("unexpected token");
    assert_eq!(diagnostic.reason(), "unexpected token");
    assert_eq!(diagnostic.help(), None);
    assert_eq!(diagnostic.name(), None);
    assert!(diagnostic.pointer().is_none());
}

#[test]
fn builders_attach_context() {
    let pointer = Region::new(0, 2).pointer("hi there");
    let diagnostic = Diagnostic::new("unexpected token")
        .with_help("expected beginning of expression or tag")
        .with_name("index.html")
        .with_pointer(pointer.clone());
    assert_eq!(
        diagnostic.help(),
        Some("expected beginning of expression or tag")
    );
    assert_eq!(diagnostic.name(), Some("index.html"));
    assert_eq!(diagnostic.pointer(), Some(&pointer));
}

// === Rendering ===

#[test]
fn display_reason_only() {
    let diagnostic = Diagnostic::new("unexpected end of source");
    assert_eq!(diagnostic.to_string(), "error: unexpected end of source");
}

#[test]
fn display_with_pointer_and_help() {
    let diagnostic = Diagnostic::new("unexpected token")
        .with_pointer(Region::new(3, 4).pointer("ab %cd"))
        .with_help("expected beginning of expression or tag");
    let expected = "\
error: unexpected token
1:4
   |
 1 | ab %cd
   |    ^
   |
help: expected beginning of expression or tag";
    assert_eq!(diagnostic.to_string(), expected);
}

#[test]
fn display_names_the_template() {
    let diagnostic = Diagnostic::new("unexpected marker").with_name("base.html");
    assert_eq!(
        diagnostic.to_string(),
        "error: unexpected marker\n --> base.html"
    );
}
