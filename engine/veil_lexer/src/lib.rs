//! Tokenizer for Veil templates.
//!
//! Template source is a mix of literal text and blocks — expressions and tags
//! — fenced by configurable markers. The [`Lexer`] walks the source in two
//! modes: outside a block it hands raw text to the pattern scanner to find
//! the next marker; inside a block it classifies content grapheme by grapheme
//! into numbers, strings, identifiers, keywords, and operators.
//!
//! ```
//! use veil_lexer::{Builder, Lexer, Token};
//!
//! let syntax = Builder::new()
//!     .with_expression("{{", "}}")
//!     .with_tag("{#", "#}")
//!     .with_whitespace_trim("~")
//!     .build();
//!
//! let mut lexer = Lexer::new("hello {{ name }}", &syntax);
//! let first = lexer.next_token().unwrap().unwrap();
//! assert_eq!(first.token, Token::Raw);
//! assert_eq!(first.region.literal("hello {{ name }}"), "hello ");
//! ```
//!
//! The syntax is compiled once and shared read-only by any number of lexers;
//! each lexer owns the only mutable state for its source buffer.

mod classify;
mod cursor;
mod error;
mod lexer;
mod marker;
mod state;
mod syntax;
mod token;

pub use cursor::Graphemes;
pub use error::{Error, ErrorKind};
pub use lexer::Lexer;
pub use marker::Marker;
pub use syntax::{Builder, Syntax};
pub use token::{Keyword, Operator, Pair, Token};
pub use veil_diagnostic::Diagnostic;
pub use veil_source::{Pointer, Region};
