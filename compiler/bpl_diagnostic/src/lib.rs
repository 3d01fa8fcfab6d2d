//! Diagnostics for the Boogie front end.
//!
//! The parser never aborts on bad input. Every problem becomes a
//! [`Diagnostic`] in an [`Errors`] collector owned by one parse call;
//! the parse succeeds iff the collector's error count is zero.

mod diagnostic;
pub mod emitter;
mod errors;
pub mod span_utils;
mod syntax;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use emitter::{ColorMode, TerminalEmitter};
pub use errors::Errors;
pub use syntax::SyntaxError;
