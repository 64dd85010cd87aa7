//! The diagnostic value type and its plain-text rendering.

use std::fmt;

use veil_source::Pointer;

/// A report describing why tokenization (or any later stage) gave up.
///
/// Populated in one shot at the failure site — a diagnostic is never built
/// incrementally across calls. The pointer owns its line text, so the report
/// remains valid after the source buffer goes away.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    reason: String,
    help: Option<String>,
    name: Option<String>,
    pointer: Option<Pointer>,
}

impl Diagnostic {
    /// Create a diagnostic with a reason and nothing else.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            help: None,
            name: None,
            pointer: None,
        }
    }

    /// Attach an actionable hint.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach the name of the template being processed.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a source pointer.
    #[must_use]
    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// What went wrong.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// How to fix it, when known.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The template the source came from, when known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Where it happened, when known.
    pub fn pointer(&self) -> Option<&Pointer> {
        self.pointer.as_ref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.reason)?;
        if let Some(name) = &self.name {
            write!(f, "\n --> {name}")?;
        }
        if let Some(pointer) = &self.pointer {
            write!(f, "\n{pointer}")?;
        }
        if let Some(help) = &self.help {
            write!(f, "\nhelp: {help}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
