//! Line-relative projection of a [`Region`] for diagnostic display.

use std::fmt;

use crate::region::Region;

/// A rendered view of a [`Region`] against the line that contains it.
///
/// Pointers are transient: computed on demand from a region and the full
/// source buffer via [`Region::pointer`], never stored by the engine itself.
/// The line text is owned so a pointer can travel inside a diagnostic after
/// the source borrow ends.
///
/// # Invariant
///
/// `end > begin` in line-relative space, mirroring the region invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pointer {
    /// 1-based line number containing the region's start.
    pub line: usize,
    /// Text of that line, without the newline or a trailing `\r`.
    pub text: String,
    /// Region begin relative to the line start.
    pub begin: usize,
    /// Region end relative to the line start, clamped to the line.
    pub end: usize,
}

/// Find the line containing `region.begin` by accumulating byte lengths of
/// `\n`-separated lines.
///
/// A begin offset past the last line yields a pointer at the end of the last
/// line. That is a defensive fallback, not a normal case.
pub(crate) fn locate(source: &str, region: Region) -> Pointer {
    let mut consumed = 0;
    let mut last = (1, "");
    for (index, line) in source.split('\n').enumerate() {
        let number = index + 1;
        // The `\n` itself belongs to this line for accounting purposes.
        if region.begin < consumed + line.len() + 1 {
            let text = line.strip_suffix('\r').unwrap_or(line);
            let begin = region.begin - consumed;
            // Clamp a region that runs past the line, but keep it non-empty.
            let end = (region.end - consumed).min(text.len()).max(begin + 1);
            return Pointer {
                line: number,
                text: text.to_owned(),
                begin,
                end,
            };
        }
        consumed += line.len() + 1;
        last = (number, line);
    }
    let text = last.1.strip_suffix('\r').unwrap_or(last.1);
    Pointer {
        line: last.0,
        text: text.to_owned(),
        begin: text.len(),
        end: text.len() + 1,
    }
}

impl fmt::Display for Pointer {
    /// Render the caret block:
    ///
    /// ```text
    /// 3:4
    ///    |
    ///  3 | line3
    ///    |    ^^
    ///    |
    /// ```
    ///
    /// The gutter is `digits(line) + 2` columns wide.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = decimal_width(self.line);
        let gutter = " ".repeat(digits + 2);
        writeln!(f, "{}:{}", self.line, self.begin + 1)?;
        writeln!(f, "{gutter}|")?;
        writeln!(f, "{:>width$} | {}", self.line, self.text, width = digits + 1)?;
        writeln!(
            f,
            "{gutter}|{blank:>pad$}{caret}",
            blank = "",
            pad = self.begin + 1,
            caret = "^".repeat(self.end - self.begin)
        )?;
        write!(f, "{gutter}|")
    }
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
