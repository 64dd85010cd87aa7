//! Pattern registration and search.

use memchr::memmem::Finder;

/// A pattern occurrence inside a source buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match {
    /// Identifier the pattern was registered under.
    pub id: usize,
    /// Byte offset of the first matched byte.
    pub begin: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Match {
    /// Length of the matched pattern in bytes.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Registered patterns are non-empty, so matches are too.
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }
}

#[derive(Debug)]
struct Pattern {
    id: usize,
    bytes: Vec<u8>,
    finder: Finder<'static>,
}

/// An immutable, ordered set of byte patterns.
///
/// Search is one substring scan per pattern ([`memchr::memmem`]); the set is
/// intended for a handful of short marker strings, where that beats building
/// an automaton and keeps results trivially deterministic.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Build a set from `(id, pattern)` pairs.
    ///
    /// Registration order is significant: it breaks ties between distinct
    /// patterns matching at the same position with the same length, so a
    /// given configuration always produces the same answers.
    ///
    /// # Contract
    ///
    /// Patterns must be non-empty. Ids are opaque to the scanner and may
    /// repeat, though callers typically keep them unique.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = (usize, P)>,
        P: AsRef<[u8]>,
    {
        let patterns = patterns
            .into_iter()
            .map(|(id, pattern)| {
                let bytes = pattern.as_ref().to_vec();
                debug_assert!(!bytes.is_empty(), "empty patterns match everywhere");
                let finder = Finder::new(&bytes).into_owned();
                Pattern { id, bytes, finder }
            })
            .collect();
        Self { patterns }
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` when no patterns are registered; every search misses.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find the nearest occurrence of any pattern at or after `at`.
    ///
    /// Ties on the begin offset prefer the longest pattern — where a trim
    /// variant and its plain prefix both match, the superstring wins — and
    /// then the earliest-registered pattern.
    pub fn find_at(&self, haystack: &[u8], at: usize) -> Option<Match> {
        let rest = haystack.get(at..)?;
        let mut best: Option<Match> = None;
        for pattern in &self.patterns {
            let Some(position) = pattern.finder.find(rest) else {
                continue;
            };
            let begin = at + position;
            let found = Match {
                id: pattern.id,
                begin,
                end: begin + pattern.bytes.len(),
            };
            let better = match best {
                None => true,
                Some(current) => {
                    found.begin < current.begin
                        || (found.begin == current.begin && found.len() > current.len())
                }
            };
            if better {
                best = Some(found);
            }
        }
        best
    }

    /// Find the longest pattern anchored exactly at `at`.
    ///
    /// Same tie-break as [`find_at`](Self::find_at): length first, then
    /// registration order.
    pub fn starts_at(&self, haystack: &[u8], at: usize) -> Option<Match> {
        let rest = haystack.get(at..)?;
        let mut best: Option<Match> = None;
        for pattern in &self.patterns {
            if !rest.starts_with(&pattern.bytes) {
                continue;
            }
            let found = Match {
                id: pattern.id,
                begin: at,
                end: at + pattern.bytes.len(),
            };
            let better = match best {
                None => true,
                Some(current) => found.len() > current.len(),
            };
            if better {
                best = Some(found);
            }
        }
        best
    }
}
