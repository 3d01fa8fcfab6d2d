//! Scanner for the Boogie front end.
//!
//! [`lex`] turns source text into a [`TokenList`] ending in `Eof`. Every
//! token carries its literal text, byte span and 1-based position.
//! Identifier escapes (`\int`) are kept in the text; the parser strips them.
//! Unclassifiable input becomes a `TokenKind::Error` token plus a
//! [`LexError`].

mod convert;
mod lex_error;
mod preprocess;
mod raw_token;

use bpl_diagnostic::span_utils::LineOffsetTable;
use bpl_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
pub use preprocess::{preprocess, PreprocessWarning, Preprocessed};

use raw_token::RawToken;

/// Scanner output.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Tokenize `source`.
pub fn lex(source: &str) -> LexOutput {
    let table = LineOffsetTable::build(source);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let text = logos.slice();
        let pos = table.position(source, span.start);
        match result {
            Ok(raw) => {
                if let Some(kind) = convert::convert(raw) {
                    tokens.push(Token::new(kind, text, span, pos));
                }
            }
            Err(()) => {
                errors.push(LexError {
                    span,
                    pos,
                    kind: LexErrorKind::from_slice(text),
                });
                tokens.push(Token::new(TokenKind::Error, text, span, pos));
            }
        }
    }

    let end = Span::from_range(source.len()..source.len());
    let eof_pos = table.position(source, end.start);
    tokens.push(Token::new(TokenKind::Eof, "", end, eof_pos));

    LexOutput { tokens, errors }
}
