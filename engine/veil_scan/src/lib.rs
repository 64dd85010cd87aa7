//! Multi-pattern scanner for template markers.
//!
//! A [`PatternSet`] is built once from an ordered list of `(id, pattern)`
//! pairs and answers two questions against a source buffer:
//!
//! - [`find_at`](PatternSet::find_at): where is the nearest upcoming
//!   occurrence of any registered pattern?
//! - [`starts_at`](PatternSet::starts_at): does some pattern sit exactly at
//!   this offset?
//!
//! Patterns may share prefixes and differ in length — a whitespace-trim
//! marker like `{{~` is a strict superstring of its plain form `{{` and wins
//! only where it actually matches. The set is immutable after construction
//! and safe to share across any number of concurrent scans.

mod pattern;

pub use pattern::{Match, PatternSet};
