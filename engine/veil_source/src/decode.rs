//! UTF-8 boundary check for byte sources.
//!
//! Templates arrive as in-memory bytes. Character classification requires
//! text, so the engine validates once, up front, and reports the first
//! offending offset instead of scanning into garbage.

use std::fmt;

/// The source bytes are not valid UTF-8.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EncodingError {
    /// Number of leading bytes that are valid UTF-8.
    pub valid_up_to: usize,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source is not valid utf-8 after byte {}",
            self.valid_up_to
        )
    }
}

impl std::error::Error for EncodingError {}

/// Validate `bytes` as UTF-8 text.
pub fn decode(bytes: &[u8]) -> Result<&str, EncodingError> {
    std::str::from_utf8(bytes).map_err(|error| EncodingError {
        valid_up_to: error.valid_up_to(),
    })
}
