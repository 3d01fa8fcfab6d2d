//! Per-parse diagnostics collector.

use bpl_ir::Position;

use crate::{Diagnostic, DiagnosticKind, Severity, SyntaxError};

/// Accumulates diagnostics for one source unit.
///
/// Warnings are recorded but never counted as errors.
#[derive(Clone, Debug, Default)]
pub struct Errors {
    filename: String,
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl Errors {
    pub fn new(filename: impl Into<String>) -> Self {
        Errors {
            filename: filename.into(),
            diagnostics: Vec::new(),
            error_count: 0,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn syntax_error(&mut self, pos: Position, error: &SyntaxError) {
        self.push(Severity::Error, DiagnosticKind::Syntax, pos, error.to_string());
    }

    pub fn semantic_error(&mut self, pos: Position, message: impl Into<String>) {
        self.push(Severity::Error, DiagnosticKind::Semantic, pos, message.into());
    }

    pub fn lexical_error(&mut self, pos: Position, message: impl Into<String>) {
        self.push(Severity::Error, DiagnosticKind::Lexical, pos, message.into());
    }

    pub fn warning(&mut self, kind: DiagnosticKind, pos: Position, message: impl Into<String>) {
        self.push(Severity::Warning, kind, pos, message.into());
    }

    fn push(&mut self, severity: Severity, kind: DiagnosticKind, pos: Position, message: String) {
        if severity == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(Diagnostic {
            severity,
            kind,
            filename: self.filename.clone(),
            pos,
            message,
        });
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Diagnostics in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
