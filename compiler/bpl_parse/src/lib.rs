//! Recursive descent parser for Boogie programs.
//!
//! One token of lookahead, no backtracking. Grammar mismatches are reported
//! into an [`Errors`] collector and parsing carries on with placeholder
//! nodes, so one pass reports every independent problem. A [`Program`] is
//! only handed out when the collector ends with zero errors.

mod cursor;
mod error;
mod grammar;
mod recovery;
mod stack;

pub use cursor::{Cursor, MIN_ERROR_DISTANCE};
pub use error::SourceError;
pub use recovery::{synchronize, TokenSet};

use std::io::Read;
use std::path::Path;

use bpl_diagnostic::span_utils::LineOffsetTable;
use bpl_diagnostic::{Diagnostic, DiagnosticKind, Errors, SyntaxError};
use bpl_ir::ast::{Ident, Program};
use bpl_ir::{unescape_identifier, Position, Span, Token, TokenKind, TokenList};

/// Path that names standard input instead of a file.
pub const STDIN_PATH: &str = "stdin.bpl";

/// Knobs for [`parse_file`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Names considered defined by `#if` directives.
    pub defines: Vec<String>,
    /// Report only the file name, not the full path, in diagnostics.
    pub use_base_name: bool,
}

/// Result of parsing one source unit.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    /// Present iff `error_count == 0`.
    pub program: Option<Program>,
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Parser state for a single source unit.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    lines: LineOffsetTable,
    errors: Errors,
}

impl<'a> Parser<'a> {
    /// `source` must be the text `tokens` were scanned from.
    pub fn new(tokens: &'a TokenList, source: &'a str, errors: Errors) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            lines: LineOffsetTable::build(source),
            errors,
        }
    }

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    /// Consume the lookahead if it is `kind`.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report it missing. Never advances on mismatch.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.syntax_error(SyntaxError::Expected(kind));
            false
        }
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    /// Report a grammar mismatch at the lookahead, unless another error was
    /// reported too recently.
    fn syntax_error(&mut self, error: SyntaxError) {
        let pos = self.current().pos;
        if self.cursor.take_error_slot() {
            tracing::debug!(%pos, %error, "syntax error");
            self.errors.syntax_error(pos, &error);
        } else {
            tracing::debug!(%pos, %error, "syntax error suppressed");
        }
    }

    /// Report a well-formedness problem at the last consumed token, gated
    /// like a syntax error.
    fn semantic_error(&mut self, message: impl Into<String>) {
        let pos = self.cursor.previous().pos;
        if self.cursor.take_error_slot() {
            self.errors.semantic_error(pos, message);
        }
    }

    /// Report a well-formedness problem at `span`. Never suppressed.
    fn semantic_error_at(&mut self, span: Span, message: impl Into<String>) {
        let pos = self.lines.position(self.source, span.start);
        self.errors.semantic_error(pos, message);
    }

    /// `Ident`, with a leading `\` escape stripped.
    fn expect_ident(&mut self) -> Ident {
        self.expect_ident_escaped().0
    }

    /// Like [`Parser::expect_ident`], also telling whether the source
    /// spelling was escaped.
    fn expect_ident_escaped(&mut self) -> (Ident, bool) {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            let name = unescape_identifier(&token.text);
            let escaped = name.len() != token.text.len();
            (Ident::new(name, token.span), escaped)
        } else {
            self.syntax_error(SyntaxError::Expected(TokenKind::Ident));
            (Ident::new("", self.current_span()), false)
        }
    }

    /// `Ident {"," Ident}`
    fn parse_idents(&mut self) -> Vec<Ident> {
        let mut idents = vec![self.expect_ident()];
        while self.eat(TokenKind::Comma) {
            idents.push(self.expect_ident());
        }
        idents
    }

    /// Parse a whole program and hand back the collector.
    pub fn parse_program(mut self) -> (Program, Errors) {
        let program = self.parse_declarations();
        (program, self.errors)
    }
}

/// Parse an in-memory source with no defines.
pub fn parse_str(source: &str, filename: &str) -> ParseOutput {
    parse_source(source, filename, &[])
}

/// Preprocess, scan and parse `source`.
pub fn parse_source(source: &str, filename: &str, defines: &[String]) -> ParseOutput {
    let mut errors = Errors::new(filename);

    let preprocessed = bpl_lexer::preprocess(source, defines);
    for warning in &preprocessed.warnings {
        errors.warning(
            DiagnosticKind::Lexical,
            Position::new(warning.line, 1),
            warning.message.as_str(),
        );
    }

    let lexed = bpl_lexer::lex(&preprocessed.text);
    for error in &lexed.errors {
        errors.lexical_error(error.pos, error.kind.to_string());
    }

    let parser = Parser::new(&lexed.tokens, &preprocessed.text, errors);
    let (program, errors) = parser.parse_program();
    let error_count = errors.error_count();
    tracing::debug!(filename, error_count, "parsed");

    ParseOutput {
        program: (error_count == 0).then_some(program),
        diagnostics: errors.into_diagnostics(),
        error_count,
    }
}

/// Read and parse `path`, or standard input for [`STDIN_PATH`].
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParseOutput, SourceError> {
    let path = path.as_ref();
    let source = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(SourceError::Stdin)?;
        text
    } else {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
            path: path.to_path_buf(),
        })?
    };

    Ok(parse_source(&source, &source_name(path, options), &options.defines))
}

/// Name diagnostics use for `path`.
pub fn source_name(path: &Path, options: &ParseOptions) -> String {
    match path.file_name() {
        Some(name) if options.use_base_name => name.to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests;
