//! Human-readable error reports for template authors.
//!
//! A [`Diagnostic`] is a finished report: what went wrong, where in the
//! source (a [`Pointer`]), which template it came from, and how to fix it.
//! It is built whole at the failure site and presented verbatim; rendering is
//! plain text — color and terminal concerns live with the caller.

mod diagnostic;

pub use diagnostic::Diagnostic;
pub use veil_source::Pointer;
