//! Lexer error types.
//!
//! Tokenization halts on the first failure: these are template-author syntax
//! errors, not transient faults, so there is no resynchronization and no
//! retry. An [`Error`] pairs the machine-readable [`ErrorKind`] with an
//! optional [`Diagnostic`] carrying the human-readable report.

use thiserror::Error as ThisError;
use veil_diagnostic::Diagnostic;
use veil_source::Region;

use crate::token::Token;

/// Why tokenization gave up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ErrorKind {
    /// A grapheme inside a block matched no known classification.
    #[error("unexpected token")]
    UnexpectedToken,
    /// A non-begin marker appeared while scanning literal text.
    #[error("unexpected marker")]
    UnexpectedMarker,
    /// The source ended while an expression or tag was still open.
    #[error("unexpected end of source")]
    UnterminatedBlock,
    /// The source bytes are not valid UTF-8.
    #[error("source is not valid unicode")]
    InvalidEncoding,
}

/// A fatal tokenization error.
#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
    diagnostic: Option<Diagnostic>,
}

impl Error {
    /// The machine-readable failure class.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The full report, when one was built.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    /// Attach the template name to the carried diagnostic.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.map(|d| d.with_name(name));
        self
    }

    #[cold]
    pub(crate) fn unexpected_token(region: Region, source: &str) -> Self {
        Self {
            kind: ErrorKind::UnexpectedToken,
            diagnostic: Some(
                Diagnostic::new("unexpected token")
                    .with_help("expected a literal, identifier, operator, or closing marker")
                    .with_pointer(region.pointer(source)),
            ),
        }
    }

    #[cold]
    pub(crate) fn unexpected_marker(region: Region, source: &str) -> Self {
        Self {
            kind: ErrorKind::UnexpectedMarker,
            diagnostic: Some(
                Diagnostic::new("unexpected token")
                    .with_help("expected beginning of expression or tag")
                    .with_pointer(region.pointer(source)),
            ),
        }
    }

    #[cold]
    pub(crate) fn unterminated_block(region: Region, source: &str, end_token: Token) -> Self {
        Self {
            kind: ErrorKind::UnterminatedBlock,
            diagnostic: Some(
                Diagnostic::new("unexpected end of source")
                    .with_help(format!("block is not closed, expected {end_token}"))
                    .with_pointer(region.pointer(source)),
            ),
        }
    }

    #[cold]
    pub(crate) fn invalid_encoding(valid_up_to: usize, bytes: &[u8]) -> Self {
        // The prefix up to the failure is valid by definition; point at its
        // end so the author can find the offending byte.
        let diagnostic = match std::str::from_utf8(&bytes[..valid_up_to]) {
            Ok(prefix) => Diagnostic::new("source is not valid unicode")
                .with_help(format!("invalid byte sequence at offset {valid_up_to}"))
                .with_pointer(Region::new(valid_up_to, valid_up_to + 1).pointer(prefix)),
            Err(_) => Diagnostic::new("source is not valid unicode")
                .with_help(format!("invalid byte sequence at offset {valid_up_to}")),
        };
        Self {
            kind: ErrorKind::InvalidEncoding,
            diagnostic: Some(diagnostic),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kinds_render_their_reason() {
        assert_eq!(ErrorKind::UnexpectedToken.to_string(), "unexpected token");
        assert_eq!(
            ErrorKind::UnterminatedBlock.to_string(),
            "unexpected end of source"
        );
    }

    #[test]
    fn error_display_matches_its_kind() {
        let error = Error::unexpected_token(Region::new(0, 1), "%");
        assert_eq!(error.to_string(), "unexpected token");
        assert_eq!(error.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn diagnostics_carry_a_pointer() {
        let error = Error::unexpected_marker(Region::new(5, 7), "text }} x");
        let diagnostic = error.diagnostic().unwrap();
        assert_eq!(diagnostic.reason(), "unexpected token");
        assert_eq!(diagnostic.pointer().unwrap().begin, 5);
    }

    #[test]
    fn with_name_threads_through_to_the_diagnostic() {
        let error =
            Error::unterminated_block(Region::new(3, 8), "{{ hello", Token::EndExpression)
                .with_name("index.html");
        assert_eq!(error.diagnostic().unwrap().name(), Some("index.html"));
    }

    #[test]
    fn encoding_error_points_past_the_valid_prefix() {
        let error = Error::invalid_encoding(2, b"ok\xFF");
        assert_eq!(error.kind(), ErrorKind::InvalidEncoding);
        let pointer = error.diagnostic().unwrap().pointer().unwrap();
        assert_eq!(pointer.line, 1);
        assert_eq!(pointer.begin, 2);
    }
}
