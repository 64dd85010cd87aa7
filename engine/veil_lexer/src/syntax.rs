//! Delimiter configuration and pattern construction.

use std::borrow::Cow;

use veil_scan::PatternSet;
use veil_source::Region;

use crate::marker::Marker;

/// Collects delimiter configuration for a [`Syntax`].
///
/// Expressions and tags are independently optional; omitting one disables
/// that block category entirely. The whitespace-trim sigil, when given,
/// produces the trim variant of every configured marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder<'a> {
    expression: Option<(&'a str, &'a str)>,
    tag: Option<(&'a str, &'a str)>,
    whitespace: Option<&'a str>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expression delimiters, e.g. `{{` and `}}`.
    #[must_use]
    pub fn with_expression(mut self, open: &'a str, close: &'a str) -> Self {
        self.expression = Some((open, close));
        self
    }

    /// Set the tag delimiters, e.g. `{#` and `#}`.
    #[must_use]
    pub fn with_tag(mut self, open: &'a str, close: &'a str) -> Self {
        self.tag = Some((open, close));
        self
    }

    /// Set the whitespace-trim sigil, e.g. `~`.
    #[must_use]
    pub fn with_whitespace_trim(mut self, sigil: &'a str) -> Self {
        self.whitespace = Some(sigil);
        self
    }

    /// Compile the configuration into an immutable [`Syntax`].
    ///
    /// Marker order is stable for a given configuration: each category
    /// contributes open, close, then (with a sigil) open-trim and close-trim,
    /// expressions before tags. The trim composites place the sigil on the
    /// inner side of the base delimiter: open `{{` + sigil `~` gives `{{~`,
    /// close `}}` gives `~}}`.
    pub fn build(self) -> Syntax<'a> {
        let mut markers: Vec<(Marker, Cow<'a, str>)> = Vec::new();
        let categories = [
            (
                self.expression,
                Marker::BeginExpression,
                Marker::EndExpression,
                Marker::BeginExpressionTrim,
                Marker::EndExpressionTrim,
            ),
            (
                self.tag,
                Marker::BeginTag,
                Marker::EndTag,
                Marker::BeginTagTrim,
                Marker::EndTagTrim,
            ),
        ];
        for (delimiters, begin, end, begin_trim, end_trim) in categories {
            let Some((open, close)) = delimiters else {
                continue;
            };
            markers.push((begin, Cow::Borrowed(open)));
            markers.push((end, Cow::Borrowed(close)));
            if let Some(sigil) = self.whitespace {
                markers.push((begin_trim, Cow::Owned(format!("{open}{sigil}"))));
                markers.push((end_trim, Cow::Owned(format!("{sigil}{close}"))));
            }
        }
        let patterns = PatternSet::new(
            markers
                .iter()
                .map(|(marker, pattern)| (marker.id(), pattern.as_bytes())),
        );
        Syntax { markers, patterns }
    }
}

/// A compiled marker set.
///
/// Base delimiter strings stay borrowed from the caller; the trim composites
/// are owned here and live exactly as long as the syntax. A syntax holds no
/// mutable state after construction — compile it once and share it across
/// every lexer tokenizing with these delimiters.
#[derive(Debug)]
pub struct Syntax<'a> {
    markers: Vec<(Marker, Cow<'a, str>)>,
    patterns: PatternSet,
}

impl<'a> Syntax<'a> {
    /// The registered markers and their patterns, in registration order.
    pub fn markers(&self) -> impl Iterator<Item = (Marker, &str)> {
        self.markers
            .iter()
            .map(|(marker, pattern)| (*marker, pattern.as_ref()))
    }

    /// `true` when no markers are configured; every source is one raw span.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Nearest marker at or after `at`.
    pub(crate) fn find_at(&self, source: &str, at: usize) -> Option<(Marker, Region)> {
        let found = self.patterns.find_at(source.as_bytes(), at)?;
        let marker = Marker::from_id(found.id)?;
        Some((marker, Region::new(found.begin, found.end)))
    }

    /// Marker anchored exactly at `at`.
    pub(crate) fn starts_at(&self, source: &str, at: usize) -> Option<(Marker, Region)> {
        let found = self.patterns.starts_at(source.as_bytes(), at)?;
        let marker = Marker::from_id(found.id)?;
        Some((marker, Region::new(found.begin, found.end)))
    }
}
