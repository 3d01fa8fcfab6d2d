//! Lexer error types.

use bpl_ir::{Position, Span};
use thiserror::Error;

/// Input the scanner could not classify. The token stream carries a
/// `TokenKind::Error` placeholder at the same span.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub pos: Position,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl LexErrorKind {
    /// Classify the text of a failed match.
    pub(crate) fn from_slice(text: &str) -> Self {
        if text.starts_with("/*") {
            LexErrorKind::UnterminatedComment
        } else if text.starts_with('"') {
            LexErrorKind::UnterminatedString
        } else {
            LexErrorKind::InvalidCharacter(text.chars().next().unwrap_or('\0'))
        }
    }
}
