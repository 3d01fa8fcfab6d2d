//! Shared types for the Boogie front end: source locations, tokens, and
//! the syntax tree the parser builds.

pub mod ast;
mod keywords;
mod span;
mod token;

pub use keywords::{bitvector_width, is_keyword, sanitize_identifier, unescape_identifier, KEYWORDS};
pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenList};
