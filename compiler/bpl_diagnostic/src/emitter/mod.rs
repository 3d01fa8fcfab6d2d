//! Terminal Emitter
//!
//! Renders diagnostics as `file(line,col): error: message` lines, with
//! optional ANSI color on the severity label.

use std::fmt;
use std::io::{self, Write};

use crate::{Diagnostic, Severity};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if !self.colors {
            return writeln!(self.writer, "{diagnostic}");
        }
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        writeln!(
            self.writer,
            "{}({},{}): {color}{}{}: {}",
            diagnostic.filename,
            diagnostic.pos.line,
            diagnostic.pos.col,
            diagnostic.severity,
            colors::RESET,
            diagnostic.message
        )
    }

    pub fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(diag)?;
        }
        Ok(())
    }

    /// `N parse errors detected in FILE`, or nothing when clean.
    pub fn emit_summary(&mut self, filename: &str, error_count: usize) -> io::Result<()> {
        if error_count == 0 {
            return Ok(());
        }
        writeln!(
            self.writer,
            "{error_count} parse error{} detected in {filename}",
            plural_s(error_count)
        )
    }

    /// A failure outside any source position, such as an unreadable file.
    pub fn emit_failure(&mut self, message: &dyn fmt::Display) -> io::Result<()> {
        if self.colors {
            writeln!(self.writer, "{}error{}: {message}", colors::ERROR, colors::RESET)
        } else {
            writeln!(self.writer, "error: {message}")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests;
