//! Top-level declarations.

use bpl_ir::ast::{
    Constant, Declaration, Formal, Function, Implementation, Procedure, Program, SpecClause,
    TypeCtorDecl, TypeSynonymDecl, TypeVariable, Variable,
};

use super::Printer;
use crate::emitter::Emitter;

/// Whether a blank line separates this declaration from its neighbours.
fn stands_apart(decl: &Declaration) -> bool {
    match decl {
        Declaration::Procedure(_) | Declaration::Implementation(_) => true,
        Declaration::Function(f) => f.body.is_some(),
        _ => false,
    }
}

impl<E: Emitter> Printer<E> {
    pub fn program(&mut self, program: &Program) {
        let mut previous: Option<&Declaration> = None;
        for decl in &program.declarations {
            if previous.is_some_and(|p| stands_apart(p) || stands_apart(decl)) {
                self.newline();
            }
            self.declaration(decl);
            previous = Some(decl);
        }
    }

    pub fn declaration(&mut self, decl: &Declaration) {
        self.line();
        match decl {
            Declaration::Constant(c) => self.constant(c),
            Declaration::TypeCtor(t) => self.type_ctor(t),
            Declaration::TypeSynonym(t) => self.type_synonym(t),
            Declaration::Function(f) => self.function(f),
            Declaration::Axiom(a) => {
                self.text("axiom ");
                self.attributes(&a.attributes);
                self.expr(&a.expr);
                self.text(";");
            }
            Declaration::GlobalVariable(v) => self.var_decl(v),
            Declaration::Procedure(p) => self.procedure(p),
            Declaration::Implementation(i) => self.implementation(i),
        }
        self.newline();
    }

    fn constant(&mut self, c: &Constant) {
        self.text("const ");
        self.attributes(&c.attributes);
        if c.unique {
            self.text("unique ");
        }
        self.ident(&c.name);
        self.text(": ");
        self.ty(&c.ty);
        if let Some(parents) = &c.parents {
            self.text(" extends");
            if !parents.is_empty() {
                self.space();
            }
            self.comma_list(parents, |p, parent| {
                if parent.unique {
                    p.text("unique ");
                }
                p.ident(&parent.parent.name);
            });
            if c.children_complete {
                self.text(" complete");
            }
        }
        self.text(";");
    }

    /// Parameter names are not kept, so they print as `_0 _1 ...`.
    fn type_ctor(&mut self, t: &TypeCtorDecl) {
        self.text("type ");
        self.attributes(&t.attributes);
        self.ident(&t.name);
        for i in 0..t.arity {
            self.text(&format!(" _{i}"));
        }
        self.text(";");
    }

    fn type_synonym(&mut self, t: &TypeSynonymDecl) {
        self.text("type ");
        self.attributes(&t.attributes);
        self.ident(&t.name);
        for param in &t.type_params {
            self.space();
            self.ident(&param.name);
        }
        self.text(" = ");
        self.ty(&t.body);
        self.text(";");
    }

    fn function(&mut self, f: &Function) {
        self.text("function ");
        self.attributes(&f.attributes);
        self.ident(&f.name);
        if !f.type_params.is_empty() {
            self.type_params(&f.type_params);
        }
        self.text("(");
        self.comma_list(&f.formals, |p, formal| p.function_formal(formal));
        self.text(")");
        if f.result.name.is_some() || !f.result.attributes.is_empty() {
            self.text(" returns (");
            self.function_formal(&f.result);
            self.text(")");
        } else {
            self.text(": ");
            self.ty(&f.result.ty);
        }
        match &f.body {
            Some(body) => {
                self.text(" { ");
                self.expr(body);
                self.text(" }");
            }
            None => self.text(";"),
        }
    }

    fn function_formal(&mut self, formal: &Formal) {
        self.attributes(&formal.attributes);
        if let Some(name) = &formal.name {
            self.ident(name);
            self.text(": ");
        }
        self.ty(&formal.ty);
    }

    /// `var {attrs} x: T [where e];` without line handling.
    pub(super) fn var_decl(&mut self, var: &Variable) {
        self.text("var ");
        self.attributes(&var.attributes);
        self.ident(&var.name);
        self.text(": ");
        self.ty(&var.ty);
        if let Some(where_clause) = &var.where_clause {
            self.text(" where ");
            self.expr(where_clause);
        }
        self.text(";");
    }

    fn signature(
        &mut self,
        name: &str,
        type_params: &[TypeVariable],
        ins: &[Formal],
        outs: &[Formal],
        with_formal_attributes: bool,
    ) {
        self.ident(name);
        if !type_params.is_empty() {
            self.type_params(type_params);
        }
        self.text("(");
        self.comma_list(ins, |p, formal| p.proc_formal(formal, with_formal_attributes));
        self.text(")");
        if !outs.is_empty() {
            self.text(" returns (");
            self.comma_list(outs, |p, formal| p.proc_formal(formal, with_formal_attributes));
            self.text(")");
        }
    }

    fn proc_formal(&mut self, formal: &Formal, with_attributes: bool) {
        if with_attributes {
            self.attributes(&formal.attributes);
        }
        if let Some(name) = &formal.name {
            self.ident(name);
            self.text(": ");
        }
        self.ty(&formal.ty);
        if let Some(where_clause) = &formal.where_clause {
            self.text(" where ");
            self.expr(where_clause);
        }
    }

    fn procedure(&mut self, p: &Procedure) {
        self.text("procedure ");
        self.attributes(&p.attributes);
        self.signature(&p.name, &p.type_params, &p.ins, &p.outs, true);
        self.text(";");
        self.indented(|printer| {
            for clause in &p.requires {
                printer.spec_clause("requires", clause);
            }
            if !p.modifies.is_empty() {
                printer.newline();
                printer.line();
                printer.text("modifies ");
                printer.idents(p.modifies.iter().map(|m| m.name.as_str()));
                printer.text(";");
            }
            for clause in &p.ensures {
                printer.spec_clause("ensures", clause);
            }
        });
    }

    fn spec_clause(&mut self, keyword: &str, clause: &SpecClause) {
        self.newline();
        self.line();
        if clause.free {
            self.text("free ");
        }
        self.text(keyword);
        self.space();
        self.attributes(&clause.attributes);
        self.expr(&clause.expr);
        self.text(";");
    }

    /// Implementation formals never print attributes: the grammar rejects
    /// them there, and copies synthesized from a procedure body keep the
    /// procedure's.
    fn implementation(&mut self, i: &Implementation) {
        self.text("implementation ");
        self.attributes(&i.attributes);
        self.signature(&i.name, &i.type_params, &i.ins, &i.outs, false);
        self.space();
        self.body(&i.locals, &i.body);
    }
}
