//! The two-state tokenizer.

use tracing::trace;
use veil_source::{decode, Region};

use crate::classify;
use crate::cursor::Graphemes;
use crate::error::Error;
use crate::state::State;
use crate::syntax::Syntax;
use crate::token::{Keyword, Operator, Pair, Token};

/// Pull-based tokenizer over one source buffer.
///
/// A lexer owns the only mutable tokenization state — cursor, scanning mode,
/// lookahead buffer, trim flag — and is constructed per buffer, never reused.
/// The [`Syntax`] it consults is immutable and may be shared by any number of
/// lexers running over different sources.
#[derive(Debug)]
pub struct Lexer<'source> {
    source: &'source str,
    syntax: &'source Syntax<'source>,
    state: State,
    /// Byte offset of the next unconsumed byte. Monotonically non-decreasing;
    /// the lookahead buffer below is the only form of "rewind".
    cursor: usize,
    /// One already-classified token waiting to be returned. A marker lands
    /// here when the literal text before it must come out first; the buffer
    /// is drained before any new scanning and never holds more than one pair.
    buffer: Option<Pair>,
    /// Set when a block closes with a trim marker; strips the left edge of
    /// the next raw span.
    left_trim: bool,
    done: bool,
}

impl<'source> Lexer<'source> {
    /// Create a lexer over `source`.
    pub fn new(source: &'source str, syntax: &'source Syntax<'source>) -> Self {
        Self {
            source,
            syntax,
            state: State::Default,
            cursor: 0,
            buffer: None,
            left_trim: false,
            done: false,
        }
    }

    /// Create a lexer over raw bytes, validating them as UTF-8 first.
    pub fn from_bytes(
        bytes: &'source [u8],
        syntax: &'source Syntax<'source>,
    ) -> Result<Self, Error> {
        match decode(bytes) {
            Ok(source) => Ok(Self::new(source, syntax)),
            Err(error) => Err(Error::invalid_encoding(error.valid_up_to, bytes)),
        }
    }

    /// The buffer this lexer reads from.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Produce the next token span.
    ///
    /// Returns `Ok(None)` at the end of the stream, and keeps returning it on
    /// every later call. Whitespace inside blocks is consumed internally and
    /// never surfaces here. On an error the lexer halts: the error is
    /// returned once and subsequent calls behave as exhausted.
    pub fn next_token(&mut self) -> Result<Option<Pair>, Error> {
        if self.done {
            return Ok(None);
        }
        if let Some(pair) = self.buffer.take() {
            return Ok(Some(pair));
        }
        let result = loop {
            let step = match self.state {
                State::Default => self.scan_text(),
                State::Inside { end_token } => self.scan_block(end_token),
            };
            match step {
                // Whitespace stays internal; keep the machine moving.
                Ok(Some(pair)) if pair.token == Token::Whitespace => continue,
                other => break other,
            }
        };
        match &result {
            Ok(Some(_)) => {}
            Ok(None) => self.done = true,
            Err(error) => {
                trace!(%error, "tokenization halted");
                self.done = true;
            }
        }
        result
    }

    /// Scan literal text for the next begin marker.
    fn scan_text(&mut self) -> Result<Option<Pair>, Error> {
        let len = self.source.len();
        // The pending left trim belongs to this raw-span slot whether or not
        // any text actually sits here.
        let left = std::mem::take(&mut self.left_trim);
        if self.cursor >= len {
            return Ok(None);
        }
        let Some((marker, region)) = self.syntax.find_at(self.source, self.cursor) else {
            let raw = self.raw_pair(self.cursor, len, left, false);
            self.cursor = len;
            return Ok(raw);
        };
        trace!(?marker, begin = region.begin, "marker found");
        if !marker.is_begin() {
            return Err(Error::unexpected_marker(region, self.source));
        }
        self.state = State::Inside {
            end_token: marker.end_token(),
        };
        let text_begin = self.cursor;
        let text_end = region.begin;
        self.cursor = region.end;
        let marker_pair = Pair::new(marker.token(), region);
        match self.raw_pair(text_begin, text_end, left, marker.is_trim()) {
            Some(raw) => {
                // Two tokens came out of one scanner lookup: stash the marker
                // and hand the text back first.
                self.buffer = Some(marker_pair);
                Ok(Some(raw))
            }
            None => Ok(Some(marker_pair)),
        }
    }

    /// Scan classified content until the marker closing the open block.
    fn scan_block(&mut self, end_token: Token) -> Result<Option<Pair>, Error> {
        if self.cursor >= self.source.len() {
            trace!("source ended inside a block");
            return Err(Error::unterminated_block(
                self.unterminated_region(),
                self.source,
                end_token,
            ));
        }
        if let Some((marker, region)) = self.syntax.starts_at(self.source, self.cursor) {
            if marker.is_begin() {
                trace!(?marker, "begin marker inside an open block");
                return Err(Error::unexpected_token(region, self.source));
            }
            if marker.token() != end_token {
                // Emitted anyway; the parser sees both tokens and reports the
                // mismatch with more context than the lexer has.
                trace!(expected = %end_token, found = %marker.token(), "mismatched closing marker");
            }
            if marker.is_trim() {
                self.left_trim = true;
            }
            self.state = State::Default;
            self.cursor = region.end;
            return Ok(Some(Pair::new(marker.token(), region)));
        }
        let graphemes = Graphemes::new(self.source, self.cursor);
        let Some(current) = graphemes.current() else {
            // Unreachable while the cursor stays on a character boundary.
            return Err(Error::unterminated_block(
                self.unterminated_region(),
                self.source,
                end_token,
            ));
        };
        let begin = self.cursor;
        let pair = match current {
            "+" => self.symbol(begin, current, Token::Operator(Operator::Add)),
            "-" => self.symbol(begin, current, Token::Operator(Operator::Subtract)),
            "*" => self.symbol(begin, current, Token::Operator(Operator::Multiply)),
            "/" => self.symbol(begin, current, Token::Operator(Operator::Divide)),
            "." => self.symbol(begin, current, Token::Period),
            "," => self.symbol(begin, current, Token::Comma),
            ":" => self.symbol(begin, current, Token::Colon),
            "|" => self.symbol(begin, current, Token::Pipe),
            "=" => self.symbol(begin, current, Token::Operator(Operator::Equal)),
            "!" => self.with_equal_lookahead(
                begin,
                current,
                &graphemes,
                Token::Exclamation,
                Operator::NotEqual,
            ),
            ">" => self.with_equal_lookahead(
                begin,
                current,
                &graphemes,
                Token::Operator(Operator::Greater),
                Operator::GreaterOrEqual,
            ),
            "<" => self.with_equal_lookahead(
                begin,
                current,
                &graphemes,
                Token::Operator(Operator::Lesser),
                Operator::LesserOrEqual,
            ),
            "\"" => self.munch(begin, classify::string(self.source, begin), Token::String),
            _ if classify::is_digit(current) => {
                self.munch(begin, classify::number(self.source, begin), Token::Number)
            }
            _ if classify::is_whitespace(current) => self.munch(
                begin,
                classify::whitespace(self.source, begin),
                Token::Whitespace,
            ),
            _ if classify::is_ident_begin(current) => {
                let end = classify::identifier(self.source, begin);
                let token = resolve_word(&self.source[begin..end]);
                self.munch(begin, end, token)
            }
            _ => {
                let region = Region::new(begin, begin + current.len());
                return Err(Error::unexpected_token(region, self.source));
            }
        };
        Ok(Some(pair))
    }

    /// Emit a fixed token covering exactly the current grapheme.
    fn symbol(&mut self, begin: usize, current: &str, token: Token) -> Pair {
        self.cursor = begin + current.len();
        Pair::new(token, Region::new(begin, self.cursor))
    }

    /// One-grapheme lookahead for the `!=` / `>=` / `<=` forms.
    fn with_equal_lookahead(
        &mut self,
        begin: usize,
        current: &str,
        graphemes: &Graphemes<'source>,
        single: Token,
        double: Operator,
    ) -> Pair {
        if graphemes.peek() == Some("=") {
            self.cursor = begin + current.len() + 1;
            Pair::new(Token::Operator(double), Region::new(begin, self.cursor))
        } else {
            self.symbol(begin, current, single)
        }
    }

    /// Emit a classifier-delimited token and advance to its end.
    fn munch(&mut self, begin: usize, end: usize, token: Token) -> Pair {
        self.cursor = end;
        Pair::new(token, Region::new(begin, end))
    }

    /// Trim-adjust and emit a raw text span, or nothing if it trims away.
    fn raw_pair(&self, begin: usize, end: usize, left: bool, right: bool) -> Option<Pair> {
        if end <= begin {
            return None;
        }
        let mut begin = begin;
        let mut end = end;
        if left {
            begin = end - self.source[begin..end].trim_start().len();
        }
        if right {
            end = begin + self.source[begin..end].trim_end().len();
        }
        if end > begin {
            Some(Pair::new(Token::Raw, Region::new(begin, end)))
        } else {
            None
        }
    }

    /// Region for the unterminated-block report: cursor to buffer end, or
    /// the final byte when the cursor already sits at the end.
    fn unterminated_region(&self) -> Region {
        let len = self.source.len();
        debug_assert!(len > 0, "a block cannot open in an empty source");
        if self.cursor < len {
            Region::new(self.cursor, len)
        } else {
            Region::new(len.saturating_sub(1), len)
        }
    }
}

/// Resolve a munched identifier to its keyword, boolean, or identifier token.
fn resolve_word(word: &str) -> Token {
    match word {
        "true" => Token::Bool(true),
        "false" => Token::Bool(false),
        _ => match Keyword::from_ident(word) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier,
        },
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Pair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(pair)) => Some(Ok(pair)),
            Ok(None) => None,
            Err(error) => Some(Err(error)),
        }
    }
}
