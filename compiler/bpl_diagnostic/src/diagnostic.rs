use std::fmt;

use bpl_ir::Position;

/// Diagnostic severity. Only errors count toward failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which stage produced the diagnostic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DiagnosticKind {
    /// Unclassifiable input or malformed preprocessor directive.
    Lexical,
    /// Token did not fit the grammar.
    Syntax,
    /// Grammatical construct breaking a rule checkable during parsing.
    Semantic,
}

/// One reported problem.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub filename: String,
    pub pos: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `file(line,col): error: message`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {}: {}",
            self.filename, self.pos.line, self.pos.col, self.severity, self.message
        )
    }
}
