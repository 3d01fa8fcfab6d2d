//! Top-level declarations.
//!
//! A program is any sequence of `const`, `type`, `function`, `axiom`,
//! `var`, `procedure` and `implementation` declarations. Some source
//! declarations expand to several entries:
//!
//! - each name in a `const` or `var` group is its own declaration
//! - a non-inline function with a body is followed by its definition axiom
//! - a procedure with a body is followed by an implementation of it

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{
    has_bool_attribute, Attribute, Axiom, BinaryOp, Constant, ConstantParent, Declaration, Expr,
    ExprKind, Formal, Function, Ident, Implementation, NAryOp, Procedure, Program, QuantifierExpr,
    QuantifierKind, SpecClause, StmtList, Trigger, Type, TypeCtorDecl, TypeKind, TypeSynonymDecl,
    TypeVariable, Variable,
};
use bpl_ir::TokenKind;

use crate::recovery::{synchronize, DECL_SYNC, SPEC_START, TYPE_START};
use crate::Parser;

/// `{Attribute} Ident [TypeParams] ProcFormals ["returns" ProcFormals]`
struct Signature {
    name: Ident,
    type_params: Vec<TypeVariable>,
    ins: Vec<Formal>,
    outs: Vec<Formal>,
    attributes: Vec<Attribute>,
}

/// Contract clauses of a procedure, in source order per kind.
#[derive(Default)]
struct Specs {
    requires: Vec<SpecClause>,
    modifies: Vec<Ident>,
    ensures: Vec<SpecClause>,
}

impl Parser<'_> {
    pub(crate) fn parse_declarations(&mut self) -> Program {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            let kind = self.current_kind();
            tracing::debug!(?kind, pos = %self.current().pos, "declaration");
            match kind {
                TokenKind::Const => self.parse_consts(&mut declarations),
                TokenKind::Function => self.parse_function(&mut declarations),
                TokenKind::Axiom => declarations.push(Declaration::Axiom(self.parse_axiom())),
                TokenKind::Type => self.parse_type_decls(&mut declarations),
                TokenKind::Var => self.parse_global_vars(&mut declarations),
                TokenKind::Procedure => self.parse_procedure(&mut declarations),
                TokenKind::Implementation => {
                    declarations.push(Declaration::Implementation(self.parse_implementation()));
                }
                _ => {
                    self.syntax_error(SyntaxError::Invalid("Declaration"));
                    synchronize(&mut self.cursor, DECL_SYNC);
                }
            }
        }
        Program { declarations }
    }

    /// `"const" {Attribute} ["unique"] Idents ":" Type [OrderSpec] ";"`
    fn parse_consts(&mut self, out: &mut Vec<Declaration>) {
        self.advance();
        let attributes = self.parse_attributes();
        let unique = self.eat(TokenKind::Unique);
        let names = self.parse_idents();
        self.expect(TokenKind::Colon);
        let ty = self.parse_type();
        let (parents, children_complete) = if self.check(TokenKind::Extends) {
            self.parse_order_spec()
        } else {
            (None, false)
        };
        self.expect(TokenKind::Semicolon);

        for name in names {
            out.push(Declaration::Constant(Constant {
                name: name.name,
                ty: ty.clone(),
                unique,
                parents: parents.clone(),
                children_complete,
                attributes: attributes.clone(),
                span: name.span,
            }));
        }
    }

    /// `"extends" [["unique"] Ident {"," ["unique"] Ident}] ["complete"]`
    fn parse_order_spec(&mut self) -> (Option<Vec<ConstantParent>>, bool) {
        self.expect(TokenKind::Extends);
        let mut parents = Vec::new();
        if self.check(TokenKind::Ident) || self.check(TokenKind::Unique) {
            loop {
                let unique = self.eat(TokenKind::Unique);
                let parent = self.expect_ident();
                parents.push(ConstantParent { parent, unique });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let complete = self.eat(TokenKind::Complete);
        (Some(parents), complete)
    }

    /// ```text
    /// "function" {Attribute} Ident [TypeParams] "(" [VarOrType {"," VarOrType}] ")"
    ///     ("returns" "(" VarOrType ")" | ":" Type)
    ///     ("{" Expression "}" | ";")
    /// ```
    fn parse_function(&mut self, out: &mut Vec<Declaration>) {
        let start = self.advance().span;
        let attributes = self.parse_attributes();
        let name = self.expect_ident();
        let type_params = if self.check(TokenKind::Lt) {
            self.parse_type_params()
        } else {
            Vec::new()
        };

        self.expect(TokenKind::LParen);
        let mut formals = Vec::new();
        if TYPE_START.contains(self.current_kind()) || self.check(TokenKind::LBrace) {
            formals.push(self.parse_var_or_type(true));
            while self.eat(TokenKind::Comma) {
                formals.push(self.parse_var_or_type(true));
            }
        }
        self.expect(TokenKind::RParen);

        let result = if self.eat(TokenKind::Returns) {
            self.expect(TokenKind::LParen);
            let result = self.parse_var_or_type(false);
            self.expect(TokenKind::RParen);
            Some(result)
        } else if self.eat(TokenKind::Colon) {
            let ty = self.parse_type();
            Some(Formal {
                name: None,
                span: ty.span,
                ty,
                where_clause: None,
                incoming: false,
                attributes: Vec::new(),
            })
        } else {
            match formals.last() {
                // `function g(bool);` reads as a formal named `bool` with no type.
                Some(last)
                    if self.check(TokenKind::Semicolon)
                        && formals.iter().all(|f| f.name.is_none()) =>
                {
                    let span = last.span;
                    self.semantic_error_at(span, "the type of the last parameter is unspecified");
                }
                _ => self.syntax_error(SyntaxError::Invalid("Function")),
            }
            None
        };

        let body = if self.eat(TokenKind::LBrace) {
            let body = self.parse_expression();
            self.expect(TokenKind::RBrace);
            Some(body)
        } else if self.eat(TokenKind::Semicolon) {
            None
        } else {
            self.syntax_error(SyntaxError::Invalid("Function"));
            None
        };

        let result = result.unwrap_or_else(|| {
            let span = self.previous_span();
            Formal {
                name: None,
                ty: Type::dummy(span),
                where_clause: None,
                incoming: false,
                attributes: Vec::new(),
                span,
            }
        });
        self.name_positional_formals(&mut formals);

        let inline = has_bool_attribute(&attributes, "inline");
        let mut function = Function {
            name: name.name,
            type_params,
            formals,
            result,
            body: None,
            attributes,
            span: self.span_from(start),
        };
        match body {
            Some(body) if inline => {
                function.body = Some(body);
                out.push(Declaration::Function(function));
            }
            Some(body) => {
                let axiom = definition_axiom(&function, body);
                out.push(Declaration::Function(function));
                out.push(Declaration::Axiom(axiom));
            }
            None => out.push(Declaration::Function(function)),
        }
    }

    /// `{Attribute} Type [":" Type]`. In the two-part form the first type
    /// must be a bare name and becomes the formal's name.
    fn parse_var_or_type(&mut self, incoming: bool) -> Formal {
        let attributes = self.parse_attributes();
        let start = self.current_span();
        let first = self.parse_type();
        let (name, ty) = if self.eat(TokenKind::Colon) {
            let name = first.as_bare_name();
            if name.is_none() {
                self.semantic_error("expected identifier before ':'");
            }
            (name, self.parse_type())
        } else {
            (None, first)
        };
        Formal {
            name,
            ty,
            where_clause: None,
            incoming,
            attributes,
            span: self.span_from(start),
        }
    }

    /// Once any formal is named, an unnamed formal that parsed as a bare
    /// type name is really a parameter name sharing the type of the formal
    /// after it. Walks right to left. Basic, map and bitvector types stay
    /// positional.
    fn name_positional_formals(&mut self, formals: &mut [Formal]) {
        if formals.iter().all(|f| f.name.is_none()) {
            return;
        }
        let mut next_ty: Option<Type> = None;
        for formal in formals.iter_mut().rev() {
            if formal.name.is_some() {
                next_ty = Some(formal.ty.clone());
                continue;
            }
            let name = match &formal.ty.kind {
                TypeKind::Unresolved { name, args } if args.is_empty() => name.clone(),
                TypeKind::Unresolved { .. } => {
                    self.semantic_error_at(formal.span, "expecting an identifier as parameter name");
                    continue;
                }
                _ => {
                    next_ty = Some(formal.ty.clone());
                    continue;
                }
            };
            let Some(ty) = next_ty.clone() else {
                self.semantic_error_at(formal.span, "the type of the last parameter is unspecified");
                break;
            };
            formal.name = Some(name);
            formal.ty = ty;
        }
    }

    /// `"axiom" {Attribute} Expression ";"`
    fn parse_axiom(&mut self) -> Axiom {
        let start = self.advance().span;
        let attributes = self.parse_attributes();
        let expr = self.parse_expression();
        self.expect(TokenKind::Semicolon);
        Axiom {
            expr,
            attributes,
            span: self.span_from(start),
        }
    }

    /// `"type" {Attribute} UserDefinedType {"," UserDefinedType} ";"`
    fn parse_type_decls(&mut self, out: &mut Vec<Declaration>) {
        self.advance();
        let attributes = self.parse_attributes();
        loop {
            out.push(self.parse_type_decl(attributes.clone()));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Semicolon);
    }

    /// `Ident {Ident} ["=" Type]`. With `=` it is a synonym whose parameters
    /// are type variables; without, a constructor of that arity.
    fn parse_type_decl(&mut self, attributes: Vec<Attribute>) -> Declaration {
        let name = self.expect_ident();
        let mut params = Vec::new();
        while self.check(TokenKind::Ident) {
            params.push(self.expect_ident());
        }
        if self.eat(TokenKind::Eq) {
            let body = self.parse_type();
            Declaration::TypeSynonym(TypeSynonymDecl {
                name: name.name,
                type_params: params
                    .into_iter()
                    .map(|p| TypeVariable {
                        name: p.name,
                        span: p.span,
                    })
                    .collect(),
                body,
                attributes,
                span: self.span_from(name.span),
            })
        } else {
            Declaration::TypeCtor(TypeCtorDecl {
                name: name.name,
                arity: params.len(),
                attributes,
                span: self.span_from(name.span),
            })
        }
    }

    /// `"var" {Attribute} IdsTypeWheres ";"`
    fn parse_global_vars(&mut self, out: &mut Vec<Declaration>) {
        let mut vars = Vec::new();
        self.parse_var_decl("global variables", &mut vars);
        out.extend(vars.into_iter().map(Declaration::GlobalVariable));
    }

    /// `"procedure" Signature (";" {Spec} | {Spec} ImplBody)`
    fn parse_procedure(&mut self, out: &mut Vec<Declaration>) {
        let start = self.advance().span;
        let signature = self.parse_proc_signature(true);
        let mut specs = Specs::default();
        let mut body = None;

        if self.eat(TokenKind::Semicolon) {
            while SPEC_START.contains(self.current_kind()) {
                self.parse_spec(&mut specs);
            }
        } else if SPEC_START.contains(self.current_kind()) || self.check(TokenKind::LBrace) {
            while SPEC_START.contains(self.current_kind()) {
                self.parse_spec(&mut specs);
            }
            body = Some(self.parse_impl_body());
        } else {
            self.syntax_error(SyntaxError::Invalid("Procedure"));
        }

        let span = self.span_from(start);
        let implementation = body.map(|(locals, body)| Implementation {
            name: signature.name.name.clone(),
            type_params: signature.type_params.clone(),
            ins: strip_where_clauses(&signature.ins),
            outs: strip_where_clauses(&signature.outs),
            locals,
            body,
            attributes: signature.attributes.clone(),
            span,
        });

        out.push(Declaration::Procedure(Procedure {
            name: signature.name.name,
            type_params: signature.type_params,
            ins: signature.ins,
            outs: signature.outs,
            requires: specs.requires,
            modifies: specs.modifies,
            ensures: specs.ensures,
            attributes: signature.attributes,
            span,
        }));
        if let Some(implementation) = implementation {
            out.push(Declaration::Implementation(implementation));
        }
    }

    /// `"implementation" Signature ImplBody`
    fn parse_implementation(&mut self) -> Implementation {
        let start = self.advance().span;
        let signature = self.parse_proc_signature(false);
        let (locals, body) = self.parse_impl_body();
        Implementation {
            name: signature.name.name,
            type_params: signature.type_params,
            ins: signature.ins,
            outs: signature.outs,
            locals,
            body,
            attributes: signature.attributes,
            span: self.span_from(start),
        }
    }

    /// Where-clauses and formal attributes are only allowed when
    /// `procedure_formals` is set; implementation signatures reject both.
    fn parse_proc_signature(&mut self, procedure_formals: bool) -> Signature {
        let attributes = self.parse_attributes();
        let name = self.expect_ident();
        let type_params = if self.check(TokenKind::Lt) {
            self.parse_type_params()
        } else {
            Vec::new()
        };
        let ins = self.parse_proc_formals(true, procedure_formals);
        let outs = if self.eat(TokenKind::Returns) {
            self.parse_proc_formals(false, procedure_formals)
        } else {
            Vec::new()
        };
        Signature {
            name,
            type_params,
            ins,
            outs,
            attributes,
        }
    }

    /// `"(" [AttrsIdsTypeWheres] ")"`
    fn parse_proc_formals(&mut self, incoming: bool, procedure_formals: bool) -> Vec<Formal> {
        let context = if procedure_formals {
            "procedure formals"
        } else {
            "the 'implementation' copies of formals"
        };
        self.expect(TokenKind::LParen);
        let mut formals = Vec::new();
        if self.check(TokenKind::Ident) || self.check(TokenKind::LBrace) {
            let groups =
                self.parse_attrs_ids_type_wheres(procedure_formals, procedure_formals, context);
            formals.extend(groups.into_iter().map(|(attributes, typed)| Formal {
                name: Some(typed.name.name),
                ty: typed.ty,
                where_clause: typed.where_clause,
                incoming,
                attributes,
                span: typed.name.span,
            }));
        }
        self.expect(TokenKind::RParen);
        formals
    }

    /// One `modifies`, `requires` or `ensures` clause, optionally `free`.
    fn parse_spec(&mut self, specs: &mut Specs) {
        let start = self.current_span();
        if self.eat(TokenKind::Modifies) {
            if self.check(TokenKind::Ident) {
                specs.modifies.extend(self.parse_idents());
            }
            self.expect(TokenKind::Semicolon);
            return;
        }

        let free = self.eat(TokenKind::Free);
        let is_requires = match self.current_kind() {
            TokenKind::Requires => true,
            TokenKind::Ensures => false,
            _ => {
                self.syntax_error(SyntaxError::Invalid("SpecPrePost"));
                return;
            }
        };
        self.advance();
        let attributes = self.parse_attributes();
        let expr = self.parse_expression();
        self.expect(TokenKind::Semicolon);
        let clause = SpecClause {
            free,
            expr,
            attributes,
            span: self.span_from(start),
        };
        if is_requires {
            specs.requires.push(clause);
        } else {
            specs.ensures.push(clause);
        }
    }

    /// `"{" {LocalVars} StmtList`
    fn parse_impl_body(&mut self) -> (Vec<Variable>, StmtList) {
        self.expect(TokenKind::LBrace);
        let locals = self.parse_local_vars();
        let body = self.parse_stmt_list();
        (locals, body)
    }
}

fn strip_where_clauses(formals: &[Formal]) -> Vec<Formal> {
    formals
        .iter()
        .map(|formal| Formal {
            where_clause: None,
            ..formal.clone()
        })
        .collect()
}

/// `forall <tps> xs :: {(f(xs) : R)} (f(xs) : R) == body`
///
/// Unnamed formals are bound as `_0`, `_1`, ... by position. With nothing
/// to bind, the axiom is the bare equation and keeps the attributes itself.
fn definition_axiom(function: &Function, body: Expr) -> Axiom {
    let span = body.span;
    let bound_vars: Vec<Variable> = function
        .formals
        .iter()
        .enumerate()
        .map(|(i, formal)| Variable {
            name: formal.name.clone().unwrap_or_else(|| format!("_{i}")),
            ty: formal.ty.clone(),
            where_clause: None,
            attributes: Vec::new(),
            span: formal.span,
        })
        .collect();

    let args = bound_vars
        .iter()
        .map(|var| Expr::ident(var.name.clone(), var.span))
        .collect();
    let call = Expr::nary(NAryOp::FunctionCall(function.name.clone()), args, span);
    let call = Expr::nary(NAryOp::TypeCoercion(function.result.ty.clone()), vec![call], span);
    let equation = Expr::binary(BinaryOp::Eq, call.clone(), body);

    if bound_vars.is_empty() && function.type_params.is_empty() {
        return Axiom {
            expr: equation,
            attributes: function.attributes.clone(),
            span,
        };
    }

    let quantifier = QuantifierExpr {
        kind: QuantifierKind::Forall,
        type_params: function.type_params.clone(),
        bound_vars,
        attributes: function.attributes.clone(),
        triggers: vec![Trigger {
            positive: true,
            exprs: vec![call],
            span,
        }],
        body: equation,
    };
    Axiom {
        expr: Expr::new(ExprKind::Quantifier(Box::new(quantifier)), span),
        attributes: Vec::new(),
        span,
    }
}
