//! Boogie printer.
//!
//! Turns a syntax tree back into source text that parses to the same tree.
//! Identifiers that collide with keywords or bitvector type names are
//! written with a leading `\`.
//!
//! # Modules
//!
//! - [`emitter`]: output sink
//! - [`printer`]: the tree walk

pub mod emitter;
pub mod printer;

use std::io::{self, Write};

use bpl_ir::ast::{Expr, Program, Type};

pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use printer::{Printer, INDENT_WIDTH};

/// Print a whole program, ending in a single newline.
pub fn print_program(program: &Program) -> String {
    let mut printer = Printer::new();
    printer.program(program);
    printer.finish()
}

/// Stream a program into `writer`. Same text as [`print_program`].
pub fn write_program<W: Write>(program: &Program, writer: W) -> io::Result<W> {
    let mut printer = Printer::with_emitter(WriteEmitter::new(writer));
    printer.program(program);
    printer.into_emitter().finish()
}

/// Print one expression on a single line.
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::new();
    printer.expr(expr);
    printer.finish_fragment()
}

pub fn print_type(ty: &Type) -> String {
    let mut printer = Printer::new();
    printer.ty(ty);
    printer.finish_fragment()
}
