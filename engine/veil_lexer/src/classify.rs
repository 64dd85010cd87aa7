//! Content classifiers for block interiors.
//!
//! Each classifier starts at a byte offset whose grapheme the dispatcher has
//! already inspected, munches forward, and returns the end offset of the
//! span. No classifier allocates or looks behind its start.

use crate::cursor::Graphemes;

/// A single ASCII decimal digit.
pub(crate) fn is_digit(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b'0'..=b'9'])
}

/// Whitespace by the Unicode property, not the ASCII range.
pub(crate) fn is_whitespace(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(char::is_whitespace)
}

/// A grapheme that can begin an identifier.
pub(crate) fn is_ident_begin(grapheme: &str) -> bool {
    grapheme == "_" || grapheme.chars().next().is_some_and(char::is_alphabetic)
}

/// A grapheme that can continue an identifier.
fn is_ident_continue(grapheme: &str) -> bool {
    grapheme == "_" || grapheme.chars().next().is_some_and(char::is_alphanumeric)
}

/// End offset of the number starting at `start`.
///
/// Decimal digits with single `_` separators; a separator is included only
/// when a digit immediately follows, so a trailing or doubled `_` ends the
/// number before the separator itself.
pub(crate) fn number(source: &str, start: usize) -> usize {
    let mut graphemes = Graphemes::new(source, start);
    let mut end = start;
    while let Some(current) = graphemes.current() {
        if is_digit(current) {
            end = graphemes.offset() + current.len();
        } else if !(current == "_" && graphemes.peek().is_some_and(is_digit)) {
            break;
        }
        graphemes.advance();
    }
    end
}

/// End offset of the string starting at the `"` at `start`.
///
/// A `\` marks the next grapheme escaped, suppressing its significance as a
/// terminator. The closing quote, when found, is inside the span; an
/// unterminated string runs to the end of the buffer.
pub(crate) fn string(source: &str, start: usize) -> usize {
    let mut graphemes = Graphemes::new(source, start);
    graphemes.advance(); // opening quote
    let mut escaped = false;
    while let Some(current) = graphemes.advance() {
        if escaped {
            escaped = false;
        } else if current == "\\" {
            escaped = true;
        } else if current == "\"" {
            return graphemes.offset();
        }
    }
    source.len()
}

/// End offset of the whitespace run starting at `start`.
pub(crate) fn whitespace(source: &str, start: usize) -> usize {
    let mut graphemes = Graphemes::new(source, start);
    let mut end = start;
    while let Some(current) = graphemes.current() {
        if !is_whitespace(current) {
            break;
        }
        end = graphemes.offset() + current.len();
        graphemes.advance();
    }
    end
}

/// End offset of the identifier starting at `start`.
pub(crate) fn identifier(source: &str, start: usize) -> usize {
    let mut graphemes = Graphemes::new(source, start);
    let mut end = start;
    while let Some(current) = graphemes.current() {
        if !is_ident_continue(current) {
            break;
        }
        end = graphemes.offset() + current.len();
        graphemes.advance();
    }
    end
}

#[cfg(test)]
mod tests;
