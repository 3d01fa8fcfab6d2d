//! Parser tests.
//!
//! - `parser`: declarations, expressions, statements and attributes
//! - `recovery`: error reporting, error distance and resynchronization
//! - `properties`: whitespace and comment insensitivity
//! - `files`: reading sources from disk

mod parser;
mod recovery;

use crate::{parse_str, ParseOutput};

pub(super) fn parse_source(source: &str) -> ParseOutput {
    parse_str(source, "test.bpl")
}

/// Messages of all reported errors, in order.
pub(super) fn error_messages(output: &ParseOutput) -> Vec<String> {
    output.errors().map(|d| d.message.clone()).collect()
}
