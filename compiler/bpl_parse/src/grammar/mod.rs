//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one family of constructs:
//!
//! - `attr`: `{:key params}` attributes and `{e, ...}` triggers
//! - `decl`: top-level declarations, procedure signatures and bodies
//! - `expr`: the expression precedence chain and atoms
//! - `stmt`: statement lists, commands and structured commands
//! - `ty`: types
//!
//! Shared pieces used by several of them (identifier groups, typed
//! variable lists, type parameters) live here.

mod attr;
mod decl;
mod expr;
mod stmt;
mod ty;

use bpl_ir::ast::{Attribute, Expr, Ident, Type, TypeVariable, Variable};
use bpl_ir::TokenKind;

use crate::Parser;

/// One name out of an `x, y: T where e` group.
pub(crate) struct TypedIdent {
    pub name: Ident,
    pub ty: Type,
    pub where_clause: Option<Expr>,
}

impl TypedIdent {
    fn into_variable(self, attributes: Vec<Attribute>) -> Variable {
        Variable {
            name: self.name.name,
            ty: self.ty,
            where_clause: self.where_clause,
            attributes,
            span: self.name.span,
        }
    }
}

impl Parser<'_> {
    /// `"<" Idents ">"`
    pub(crate) fn parse_type_params(&mut self) -> Vec<TypeVariable> {
        self.expect(TokenKind::Lt);
        let names = self.parse_idents();
        self.expect(TokenKind::Gt);
        names
            .into_iter()
            .map(|id| TypeVariable {
                name: id.name,
                span: id.span,
            })
            .collect()
    }

    /// `Idents ":" Type ["where" Expression]`
    ///
    /// A where-clause in a context that does not allow one is parsed, reported
    /// and dropped.
    fn parse_ids_type_where(&mut self, allow_where: bool, context: &str) -> Vec<TypedIdent> {
        let names = self.parse_idents();
        self.expect(TokenKind::Colon);
        let ty = self.parse_type();
        let mut where_clause = None;
        if self.eat(TokenKind::Where) {
            let expr = self.parse_expression();
            if allow_where {
                where_clause = Some(expr);
            } else {
                self.semantic_error(format!("where clause not allowed on {context}"));
            }
        }
        names
            .into_iter()
            .map(|name| TypedIdent {
                name,
                ty: ty.clone(),
                where_clause: where_clause.clone(),
            })
            .collect()
    }

    /// `IdsTypeWhere {"," IdsTypeWhere}`
    fn parse_ids_type_wheres(&mut self, allow_where: bool, context: &str) -> Vec<TypedIdent> {
        let mut out = self.parse_ids_type_where(allow_where, context);
        while self.eat(TokenKind::Comma) {
            out.extend(self.parse_ids_type_where(allow_where, context));
        }
        out
    }

    /// `{Attribute} IdsTypeWhere {"," {Attribute} IdsTypeWhere}`
    ///
    /// Each group's attributes are attached to every name in that group.
    pub(crate) fn parse_attrs_ids_type_wheres(
        &mut self,
        allow_attrs: bool,
        allow_where: bool,
        context: &str,
    ) -> Vec<(Vec<Attribute>, TypedIdent)> {
        let mut out = Vec::new();
        loop {
            let mut attributes = self.parse_attributes();
            if !allow_attrs && !attributes.is_empty() {
                self.semantic_error(format!("attributes are not allowed on {context}"));
                attributes.clear();
            }
            for typed in self.parse_ids_type_where(allow_where, context) {
                out.push((attributes.clone(), typed));
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        out
    }

    /// Bound variables of a quantifier. Where-clauses are rejected.
    pub(crate) fn parse_bound_vars(&mut self) -> Vec<Variable> {
        self.parse_attrs_ids_type_wheres(true, false, "bound variables")
            .into_iter()
            .map(|(attributes, typed)| typed.into_variable(attributes))
            .collect()
    }

    /// `"var" {Attribute} IdsTypeWheres ";"`, appended to `out`.
    pub(crate) fn parse_var_decl(&mut self, context: &str, out: &mut Vec<Variable>) {
        self.expect(TokenKind::Var);
        let attributes = self.parse_attributes();
        for typed in self.parse_ids_type_wheres(true, context) {
            out.push(typed.into_variable(attributes.clone()));
        }
        self.expect(TokenKind::Semicolon);
    }

    /// Zero or more local `var` declarations.
    pub(crate) fn parse_local_vars(&mut self) -> Vec<Variable> {
        let mut locals = Vec::new();
        while self.check(TokenKind::Var) {
            self.parse_var_decl("local variables", &mut locals);
        }
        locals
    }
}
