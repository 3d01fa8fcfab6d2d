//! The printer: declarations, statements, expressions and types.
//!
//! Output is a canonical layout, not the input layout: one declaration
//! per line (contracts and bodies indented below), commands one per line,
//! expressions on one line with the fewest parentheses that reparse to the
//! same tree.

mod decl;
mod expr;
mod stmt;
mod ty;

use bpl_ir::ast::{AttrParam, Attribute, Trigger};
use bpl_ir::sanitize_identifier;

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

pub struct Printer<E: Emitter = StringEmitter> {
    out: E,
    depth: usize,
}

impl Printer<StringEmitter> {
    pub fn new() -> Self {
        Printer::with_emitter(StringEmitter::new())
    }

    pub fn finish(self) -> String {
        let mut out = self.out;
        out.ensure_trailing_newline();
        out.output()
    }

    /// Output without trailing-newline normalization, for fragments.
    pub fn finish_fragment(self) -> String {
        self.out.output()
    }
}

impl Default for Printer<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> Printer<E> {
    pub fn with_emitter(out: E) -> Self {
        Printer { out, depth: 0 }
    }

    pub fn into_emitter(self) -> E {
        self.out
    }

    fn text(&mut self, text: &str) {
        self.out.emit(text);
    }

    fn space(&mut self) {
        self.out.emit_space();
    }

    fn ident(&mut self, name: &str) {
        self.out.emit(&sanitize_identifier(name));
    }

    /// Start a new line at the current depth.
    fn line(&mut self) {
        self.out.emit_indent(self.depth * INDENT_WIDTH);
    }

    fn newline(&mut self) {
        self.out.emit_newline();
    }

    fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Items separated by `", "`.
    fn comma_list<T>(&mut self, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(", ");
            }
            f(self, item);
        }
    }

    fn idents<'n>(&mut self, names: impl IntoIterator<Item = &'n str>) {
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                self.text(", ");
            }
            self.ident(name);
        }
    }

    /// Each attribute followed by a space.
    fn attributes(&mut self, attributes: &[Attribute]) {
        for attr in attributes {
            self.attribute(attr);
            self.space();
        }
    }

    fn attribute(&mut self, attr: &Attribute) {
        self.text("{:");
        self.ident(&attr.key);
        if !attr.params.is_empty() {
            self.space();
            self.comma_list(&attr.params, |p, param| match param {
                AttrParam::String(s) => {
                    p.text("\"");
                    p.text(s);
                    p.text("\"");
                }
                AttrParam::Expr(e) => p.expr(e),
            });
        }
        self.text("}");
    }

    fn triggers(&mut self, triggers: &[Trigger]) {
        for trigger in triggers {
            if trigger.positive {
                self.text("{");
            } else {
                self.text("{:nopats ");
            }
            self.comma_list(&trigger.exprs, |p, e| p.expr(e));
            self.text("} ");
        }
    }
}
