//! Token cursor with error-distance tracking.
//!
//! The cursor holds the last consumed token and the one-token lookahead.
//! Placeholder `Error` tokens from the scanner are skipped silently; they
//! were reported when the source was scanned.
//!
//! The error distance counts valid tokens consumed since the last reported
//! syntax error. A new error is only reported once the distance reaches
//! [`MIN_ERROR_DISTANCE`], which keeps one mistake from producing a cascade.

use bpl_ir::{Span, Token, TokenKind, TokenList};

/// Valid tokens that must be consumed between two reported errors.
pub const MIN_ERROR_DISTANCE: u32 = 2;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Index of the lookahead token.
    pos: usize,
    /// Index of the last consumed token.
    prev: usize,
    error_distance: u32,
}

impl<'a> Cursor<'a> {
    /// `tokens` must end in `Eof`, as `bpl_lexer::lex` guarantees.
    pub fn new(tokens: &'a TokenList) -> Self {
        let mut cursor = Cursor {
            tokens,
            pos: 0,
            prev: 0,
            error_distance: MIN_ERROR_DISTANCE,
        };
        cursor.skip_invalid();
        cursor.prev = cursor.pos;
        cursor
    }

    fn skip_invalid(&mut self) {
        while self.pos + 1 < self.tokens.len() && !self.tokens[self.pos].kind.is_valid_terminal() {
            self.pos += 1;
        }
    }

    /// The lookahead token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// The last consumed token; the first token before anything is consumed.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.prev]
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        self.tokens[self.prev].span
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the lookahead and return it. At `Eof` the cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        tracing::trace!(pos = self.pos, kind = ?token.kind, "advance");
        self.prev = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
            self.skip_invalid();
        }
        self.error_distance = self.error_distance.saturating_add(1);
        token
    }

    /// Record a syntax error at this point. Returns whether it should be
    /// reported; either way the distance restarts from zero.
    pub fn take_error_slot(&mut self) -> bool {
        let report = self.error_distance >= MIN_ERROR_DISTANCE;
        self.error_distance = 0;
        report
    }

    #[cfg(test)]
    pub fn error_distance(&self) -> u32 {
        self.error_distance
    }
}

#[cfg(test)]
mod tests;
