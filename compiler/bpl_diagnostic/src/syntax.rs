//! Syntax error messages.

use std::fmt;

use bpl_ir::TokenKind;

/// A grammar mismatch.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum SyntaxError {
    /// A specific terminal was required.
    Expected(TokenKind),
    /// No alternative of the named production matched.
    Invalid(&'static str),
    /// A construct with its own fixed wording.
    Message(&'static str),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Expected(kind) => write!(f, "{} expected", kind.expected_name()),
            SyntaxError::Invalid(production) => write!(f, "invalid {production}"),
            SyntaxError::Message(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_table() {
        assert_eq!(
            SyntaxError::Expected(TokenKind::Semicolon).to_string(),
            "\";\" expected"
        );
        assert_eq!(SyntaxError::Expected(TokenKind::Ident).to_string(), "ident expected");
        assert_eq!(SyntaxError::Invalid("Type").to_string(), "invalid Type");
    }
}
