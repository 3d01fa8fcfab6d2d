//! Core parser tests.
//!
//! Declarations, the expression precedence chain, statements and
//! attribute/trigger handling on well-formed input, plus the local
//! well-formedness errors the parser itself reports.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bpl_ir::ast::{
    AttrParam, BasicType, BinaryOp, BlockTail, CmdKind, Declaration, ElseBranch, Expr, ExprKind,
    FloatValue, Literal, NAryOp, Program, QuantifierKind, StmtList, StructuredCmd, TransferKind,
    TypeKind, UnaryOp,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

use super::{error_messages, parse_source};
use crate::parse_source as parse_with_defines;

fn program(source: &str) -> Program {
    let output = parse_source(source);
    assert_eq!(output.error_count, 0, "unexpected errors: {:?}", output.diagnostics);
    output.program.expect("program without errors")
}

/// The proposition of the first axiom in `axiom <expr>;`.
fn axiom_expr(expr: &str) -> Expr {
    let program = program(&format!("axiom {expr};"));
    let axiom = program.axioms().next().expect("one axiom");
    axiom.expr.clone()
}

fn int(expr: &Expr) -> i64 {
    match &expr.kind {
        ExprKind::Literal(Literal::Int(value)) => i64::try_from(value).unwrap(),
        other => panic!("Expected integer literal, got {other:?}"),
    }
}

fn ident(expr: &Expr) -> &str {
    match &expr.kind {
        ExprKind::Ident(name) => name,
        other => panic!("Expected identifier, got {other:?}"),
    }
}

fn nary(expr: &Expr) -> (&NAryOp, &[Expr]) {
    match &expr.kind {
        ExprKind::NAry { op, args } => (op, args),
        other => panic!("Expected n-ary expression, got {other:?}"),
    }
}

fn implementation_body(source: &str) -> StmtList {
    let program = program(source);
    let implementation = program.implementations().next().expect("one implementation");
    implementation.body.clone()
}

// Expressions

#[test]
fn test_parse_binary_precedence() {
    let expr = axiom_expr("1 + 2 * 3 == 7");
    let (op, eq_lhs, _) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Eq);

    let (op, left, right) = eq_lhs.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(int(left), 1);
    let (op, l, r) = right.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Mul);
    assert_eq!((int(l), int(r)), (2, 3));
}

#[test]
fn test_power_is_right_associative() {
    let expr = axiom_expr("2 ** 3 ** 2 == 512");
    let (_, pow, _) = expr.as_binary().unwrap();
    let (op, left, right) = pow.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Pow);
    assert_eq!(int(left), 2);
    let (op, l, r) = right.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Pow);
    assert_eq!((int(l), int(r)), (3, 2));
}

#[test]
fn test_additive_is_left_associative() {
    let expr = axiom_expr("a - b - c == 0");
    let (_, sub, _) = expr.as_binary().unwrap();
    let (op, left, right) = sub.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(ident(right), "c");
    let (op, l, r) = left.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!((ident(l), ident(r)), ("a", "b"));
}

#[test]
fn test_implication_nests_right() {
    let expr = axiom_expr("a ==> b ==> c");
    let (op, left, right) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Imp);
    assert_eq!(ident(left), "a");
    let (op, l, r) = right.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Imp);
    assert_eq!((ident(l), ident(r)), ("b", "c"));
}

#[test]
fn test_explies_swaps_and_chains_left() {
    // a <== b <== c  is  c ==> (b ==> a)
    let expr = axiom_expr("a <== b <== c");
    let (op, left, right) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Imp);
    assert_eq!(ident(left), "c");
    let (op, l, r) = right.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Imp);
    assert_eq!((ident(l), ident(r)), ("b", "a"));
}

#[test]
fn test_equivalence_is_lowest() {
    let expr = axiom_expr("a ==> b <==> c && d");
    let (op, left, right) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Iff);
    assert_eq!(left.as_binary().unwrap().0, BinaryOp::Imp);
    assert_eq!(right.as_binary().unwrap().0, BinaryOp::And);
}

#[test]
fn test_logical_chain() {
    let expr = axiom_expr("a || b || c");
    let (op, left, _) = expr.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Or);
    assert_eq!(left.as_binary().unwrap().0, BinaryOp::Or);
}

#[test]
fn test_unicode_operators() {
    let expr = axiom_expr("(∀ x: int • x ≤ x ∧ ¬(x ≠ x))");
    let ExprKind::Quantifier(q) = &expr.kind else {
        panic!("Expected quantifier");
    };
    assert_eq!(q.kind, QuantifierKind::Forall);
    let (op, left, right) = q.body.as_binary().unwrap();
    assert_eq!(op, BinaryOp::And);
    assert_eq!(left.as_binary().unwrap().0, BinaryOp::Le);
    let (op, _) = nary(right);
    assert_eq!(op, &NAryOp::Unary(UnaryOp::Not));
}

#[test]
fn test_unary_nests() {
    let expr = axiom_expr("- -x == x");
    let (_, neg, _) = expr.as_binary().unwrap();
    let (op, args) = nary(neg);
    assert_eq!(op, &NAryOp::Unary(UnaryOp::Neg));
    assert!(matches!(nary(&args[0]).0, NAryOp::Unary(UnaryOp::Neg)));
}

#[test]
fn test_escaped_identifier() {
    let expr = axiom_expr("\\int == 1");
    let (_, left, _) = expr.as_binary().unwrap();
    assert_eq!(ident(left), "int");

    let program = program("var \\int: int;");
    let Declaration::GlobalVariable(var) = &program.declarations[0] else {
        panic!("Expected global variable");
    };
    assert_eq!(var.name, "int");
    assert_eq!(var.ty.kind, TypeKind::Basic(BasicType::Int));
}

#[test]
fn test_literals() {
    let expr = axiom_expr("f(1bv8, 2.5, 1e3, true, RNE, 0x1.8e0f24e8)");
    let (op, args) = nary(&expr);
    assert_eq!(op, &NAryOp::FunctionCall("f".into()));
    assert_eq!(
        args[0].kind,
        ExprKind::Literal(Literal::Bv {
            value: BigInt::from(1),
            width: 8
        })
    );
    assert!(matches!(args[1].kind, ExprKind::Literal(Literal::Real(_))));
    assert!(matches!(args[2].kind, ExprKind::Literal(Literal::Real(_))));
    assert_eq!(args[3].kind, ExprKind::Literal(Literal::Bool(true)));
    assert!(matches!(args[4].kind, ExprKind::Literal(Literal::RoundingMode(_))));
    assert!(matches!(args[5].kind, ExprKind::Literal(Literal::Float(_))));
}

#[test]
fn test_hex_float_with_negative_exponent() {
    let expr = axiom_expr("x == 0x10.2e-3f53e11");
    let (_, _, right) = expr.as_binary().unwrap();
    let ExprKind::Literal(Literal::Float(float)) = &right.kind else {
        panic!("Expected float literal, got {:?}", right.kind);
    };
    assert_eq!((float.significand_size, float.exponent_size), (53, 11));
    assert!(matches!(
        &float.value,
        FloatValue::Finite { fraction_digits: 1, exponent: -3, .. }
    ));
}

#[test]
fn test_old_and_arith_coercions() {
    let expr = axiom_expr("old(x) == int(real(1))");
    let (_, left, right) = expr.as_binary().unwrap();
    assert!(matches!(left.kind, ExprKind::Old(_)));
    let (op, args) = nary(right);
    assert!(matches!(op, NAryOp::ArithCoercion(_)));
    assert!(matches!(nary(&args[0]).0, NAryOp::ArithCoercion(_)));
}

#[test]
fn test_type_coercion() {
    let expr = axiom_expr("(x : bv8) == y");
    let (_, left, _) = expr.as_binary().unwrap();
    let (op, args) = nary(left);
    let NAryOp::TypeCoercion(ty) = op else {
        panic!("Expected type coercion");
    };
    assert_eq!(ty.kind, TypeKind::Bv(8));
    assert_eq!(ident(&args[0]), "x");
}

#[test]
fn test_map_select_store_and_extract() {
    let expr = axiom_expr("m[i, j] == m[i := v][k] ++ x[8:0]");
    let (_, select, concat) = expr.as_binary().unwrap();
    assert_eq!(nary(select).0, &NAryOp::MapSelect { arity: 2 });

    let (op, parts) = nary(concat);
    assert_eq!(op, &NAryOp::BvConcat);
    let (op, args) = nary(&parts[0]);
    assert_eq!(op, &NAryOp::MapSelect { arity: 1 });
    assert_eq!(nary(&args[0]).0, &NAryOp::MapStore { arity: 1 });

    let (op, args) = nary(&parts[1]);
    assert_eq!(op, &NAryOp::BvExtract { upper: 8, lower: 0 });
    assert_eq!(args.len(), 1);
}

#[test]
fn test_store_without_indexes() {
    let expr = axiom_expr("m[:= v] == m[]");
    let (_, store, select) = expr.as_binary().unwrap();
    assert_eq!(nary(store).0, &NAryOp::MapStore { arity: 0 });
    assert_eq!(nary(select).0, &NAryOp::MapSelect { arity: 0 });
}

#[test]
fn test_if_then_else() {
    let expr = axiom_expr("(if a then 1 else 2) == 1");
    let (_, ite, _) = expr.as_binary().unwrap();
    let (op, args) = nary(ite);
    assert_eq!(op, &NAryOp::IfThenElse);
    assert_eq!(args.len(), 3);
}

#[test]
fn test_let_expression() {
    let expr = axiom_expr("(var x, y := 1, 2; {:weight 3} x == y)");
    let ExprKind::Let(let_expr) = &expr.kind else {
        panic!("Expected let expression");
    };
    let names: Vec<_> = let_expr.vars.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(let_expr.values.len(), 2);
    assert_eq!(let_expr.attributes[0].key, "weight");
}

#[test]
fn test_code_expression() {
    let expr = axiom_expr("|{ var b: bool; A: b := true; goto B, C; B: return b; C: assume b; return !b; }|");
    let ExprKind::Code(code) = &expr.kind else {
        panic!("Expected code expression");
    };
    assert_eq!(code.locals.len(), 1);
    assert_eq!(code.blocks.len(), 3);
    assert_eq!(code.blocks[0].label, "A");
    assert_eq!(code.blocks[0].cmds.len(), 1);
    let TransferKind::Goto(targets) = &code.blocks[0].transfer.kind else {
        panic!("Expected goto");
    };
    assert_eq!(targets.len(), 2);
    assert!(matches!(code.blocks[1].transfer.kind, TransferKind::ReturnExpr(_)));
}

// Quantifiers, attributes and triggers

#[test]
fn test_attributes_and_triggers() {
    let expr = axiom_expr("(forall x: int, y: int :: {:myattr 1} {x, y} {:nopats f(x)} f(x) == y)");
    let ExprKind::Quantifier(q) = &expr.kind else {
        panic!("Expected quantifier");
    };
    assert_eq!(q.bound_vars.len(), 2);

    assert_eq!(q.attributes.len(), 1);
    assert_eq!(q.attributes[0].key, "myattr");
    let [AttrParam::Expr(param)] = q.attributes[0].params.as_slice() else {
        panic!("Expected one expression parameter");
    };
    assert_eq!(int(param), 1);

    assert_eq!(q.triggers.len(), 2);
    assert!(q.triggers[0].positive);
    let names: Vec<_> = q.triggers[0].exprs.iter().map(ident).collect();
    assert_eq!(names, ["x", "y"]);
    assert!(!q.triggers[1].positive);
    assert_eq!(q.triggers[1].exprs.len(), 1);
}

#[test]
fn test_string_attribute_params() {
    let program = program("axiom {:msg \"hello\", 2} true;");
    let axiom = program.axioms().next().unwrap();
    assert_eq!(axiom.attributes[0].params[0], AttrParam::String("hello".into()));
    assert!(matches!(axiom.attributes[0].params[1], AttrParam::Expr(_)));
}

#[test]
fn test_type_parameters_on_quantifier() {
    let expr = axiom_expr("(forall <T> x: T :: x == x)");
    let ExprKind::Quantifier(q) = &expr.kind else {
        panic!("Expected quantifier");
    };
    assert_eq!(q.type_params.len(), 1);
    assert_eq!(q.type_params[0].name, "T");
}

#[test]
fn test_lambda() {
    let expr = axiom_expr("(lambda i: int :: i + 1)[0] == 1");
    let (_, select, _) = expr.as_binary().unwrap();
    let (op, args) = nary(select);
    assert_eq!(op, &NAryOp::MapSelect { arity: 1 });
    let ExprKind::Quantifier(q) = &args[0].kind else {
        panic!("Expected lambda");
    };
    assert_eq!(q.kind, QuantifierKind::Lambda);
}

// Declarations

#[test]
fn test_consts_with_order_spec() {
    let program = program("const {:x} unique a, b: T extends unique p, q complete;");
    assert_eq!(program.declarations.len(), 2);
    for decl in &program.declarations {
        let Declaration::Constant(c) = decl else {
            panic!("Expected constant");
        };
        assert!(c.unique);
        assert!(c.children_complete);
        assert_eq!(c.attributes[0].key, "x");
        let parents = c.parents.as_ref().unwrap();
        assert_eq!(parents.len(), 2);
        assert!(parents[0].unique);
        assert!(!parents[1].unique);
        assert_eq!(parents[1].parent.name, "q");
    }
}

#[test]
fn test_const_without_order_spec() {
    let program = program("const c: int; const d: int extends;");
    let Declaration::Constant(c) = &program.declarations[0] else {
        panic!("Expected constant");
    };
    assert_eq!(c.parents, None);
    let Declaration::Constant(d) = &program.declarations[1] else {
        panic!("Expected constant");
    };
    assert_eq!(d.parents, Some(Vec::new()));
}

#[test]
fn test_type_declarations() {
    let program = program("type T, U a b; type {:s} S a = [a]int;");
    let kinds: Vec<_> = program
        .declarations
        .iter()
        .map(|d| match d {
            Declaration::TypeCtor(t) => (t.name.clone(), t.arity),
            Declaration::TypeSynonym(s) => (s.name.clone(), s.type_params.len()),
            other => panic!("Expected type declaration, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        [("T".to_string(), 0), ("U".to_string(), 2), ("S".to_string(), 1)]
    );
    let Declaration::TypeSynonym(s) = &program.declarations[2] else {
        panic!("Expected synonym");
    };
    assert!(matches!(s.body.kind, TypeKind::Map(_)));
}

#[test]
fn test_types() {
    let program = program(
        "var a: bv32; var b: \\bv32; var m: <a>[a, int]bool; var c: C int (D bool) [int]int; var r: (real);",
    );
    let types: Vec<_> = program
        .declarations
        .iter()
        .map(|d| match d {
            Declaration::GlobalVariable(v) => v.ty.kind.clone(),
            other => panic!("Expected variable, got {other:?}"),
        })
        .collect();
    assert_eq!(types[0], TypeKind::Bv(32));
    assert!(matches!(&types[1], TypeKind::Unresolved { name, args } if name == "bv32" && args.is_empty()));
    let TypeKind::Map(map) = &types[2] else {
        panic!("Expected map type");
    };
    assert_eq!(map.type_params.len(), 1);
    assert_eq!(map.args.len(), 2);
    assert_eq!(map.result.kind, TypeKind::Basic(BasicType::Bool));
    let TypeKind::Unresolved { name, args } = &types[3] else {
        panic!("Expected constructor application");
    };
    assert_eq!(name, "C");
    assert_eq!(args.len(), 3);
    assert!(matches!(args[2].kind, TypeKind::Map(_)));
    assert_eq!(types[4], TypeKind::Basic(BasicType::Real));
}

#[test]
fn test_global_var_where_clause() {
    let program = program("var {:a} x, y: int where x > 0;");
    assert_eq!(program.declarations.len(), 2);
    let Declaration::GlobalVariable(y) = &program.declarations[1] else {
        panic!("Expected variable");
    };
    assert_eq!(y.name, "y");
    assert!(y.where_clause.is_some());
    assert_eq!(y.attributes[0].key, "a");
}

#[test]
fn test_function_positional_formals() {
    let program = program("function f(int, x: bool) returns (bool);");
    let function = program.functions().next().unwrap();
    let formals: Vec<_> = function
        .formals
        .iter()
        .map(|f| (f.name.clone(), f.ty.kind.clone()))
        .collect();
    assert_eq!(
        formals,
        [
            (None, TypeKind::Basic(BasicType::Int)),
            (Some("x".to_string()), TypeKind::Basic(BasicType::Bool)),
        ]
    );
    assert!(!function.result.incoming);
}

#[test]
fn test_function_bare_names_take_following_type() {
    let program = program("function f(a, b: int, c: bool): bool;");
    let function = program.functions().next().unwrap();
    let formals: Vec<_> = function
        .formals
        .iter()
        .map(|f| (f.name.clone().unwrap(), f.ty.kind.clone()))
        .collect();
    assert_eq!(
        formals,
        [
            ("a".to_string(), TypeKind::Basic(BasicType::Int)),
            ("b".to_string(), TypeKind::Basic(BasicType::Int)),
            ("c".to_string(), TypeKind::Basic(BasicType::Bool)),
        ]
    );
    assert_eq!(function.result.name, None);
}

#[test]
fn test_function_definition_becomes_axiom() {
    let program = program("function {:w} f(x: int, int): int { x + 1 }");
    assert_eq!(program.declarations.len(), 2);
    let function = program.functions().next().unwrap();
    assert!(function.body.is_none());

    let axiom = program.axioms().next().unwrap();
    let ExprKind::Quantifier(q) = &axiom.expr.kind else {
        panic!("Expected quantified definition");
    };
    assert_eq!(q.kind, QuantifierKind::Forall);
    let names: Vec<_> = q.bound_vars.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["x", "_1"]);
    assert_eq!(q.attributes[0].key, "w");
    assert_eq!(q.triggers.len(), 1);

    let (op, call, _) = q.body.as_binary().unwrap();
    assert_eq!(op, BinaryOp::Eq);
    let (op, args) = nary(call);
    assert!(matches!(op, NAryOp::TypeCoercion(_)));
    assert_eq!(nary(&args[0]).0, &NAryOp::FunctionCall("f".into()));
}

#[test]
fn test_nullary_definition_is_bare_equation() {
    let program = program("function {:w} c(): int { 3 }");
    let axiom = program.axioms().next().unwrap();
    assert_eq!(axiom.expr.as_binary().unwrap().0, BinaryOp::Eq);
    assert_eq!(axiom.attributes[0].key, "w");
}

#[test]
fn test_inline_function_keeps_body() {
    let program = program("function {:inline} f(x: int): int { x }");
    assert_eq!(program.declarations.len(), 1);
    assert!(program.functions().next().unwrap().body.is_some());
}

#[test]
fn test_procedure_with_body_synthesizes_implementation() {
    let program = program(
        "procedure {:p} P(x: int where x > 0) returns (r: int)
           requires x > 0; free ensures r > 0; modifies g, h;
         { r := x; }",
    );
    assert_eq!(program.declarations.len(), 2);
    let procedure = program.procedures().next().unwrap();
    assert_eq!(procedure.requires.len(), 1);
    assert!(procedure.ensures[0].free);
    assert_eq!(procedure.modifies.len(), 2);
    assert!(procedure.ins[0].where_clause.is_some());
    assert!(procedure.ins[0].incoming);
    assert!(!procedure.outs[0].incoming);

    let implementation = program.implementations().next().unwrap();
    assert_eq!(implementation.name, "P");
    assert!(implementation.ins[0].where_clause.is_none());
    assert_eq!(implementation.attributes[0].key, "p");
}

#[test]
fn test_specs_after_semicolon() {
    let program = program("procedure P(); requires true; modifies; ensures {:e} true;");
    let procedure = program.procedures().next().unwrap();
    assert_eq!(procedure.requires.len(), 1);
    assert_eq!(procedure.ensures.len(), 1);
    assert!(procedure.modifies.is_empty());
    assert_eq!(program.implementations().count(), 0);
}

#[test]
fn test_implementation_with_locals() {
    let program = program("implementation P<T>(x: T) { var {:l} a, b: int; var c: bool where c; }");
    let implementation = program.implementations().next().unwrap();
    assert_eq!(implementation.type_params.len(), 1);
    assert_eq!(implementation.locals.len(), 3);
    assert!(implementation.locals[2].where_clause.is_some());
    assert_eq!(implementation.locals[0].attributes[0].key, "l");
}

#[test]
fn test_preprocessor_defines() {
    let source = "#if A\nconst a: int;\n#else\nconst b: int;\n#endif\n";
    let output = parse_with_defines(source, "test.bpl", &["A".to_string()]);
    let program = output.program.unwrap();
    assert_eq!(program.declarations[0].name(), Some("a"));

    let program = parse_source(source).program.unwrap();
    assert_eq!(program.declarations[0].name(), Some("b"));
}

// Statements

#[test]
fn test_big_block_assembly() {
    let body = implementation_body("procedure P() { L: x := 1; if (*) { } y := 2; }");
    assert_eq!(body.big_blocks.len(), 2);

    let first = &body.big_blocks[0];
    assert_eq!(first.label.as_deref(), Some("L"));
    assert_eq!(first.cmds.len(), 1);
    assert!(matches!(first.cmds[0].kind, CmdKind::Assign { .. }));
    let Some(BlockTail::Structured(StructuredCmd::If(if_cmd))) = &first.tail else {
        panic!("Expected if tail");
    };
    assert!(if_cmd.guard.is_none());
    assert_eq!(if_cmd.then_branch.big_blocks.len(), 1);
    assert!(if_cmd.then_branch.big_blocks[0].cmds.is_empty());

    let second = &body.big_blocks[1];
    assert_eq!(second.label, None);
    assert_eq!(second.cmds.len(), 1);
    assert!(second.tail.is_none());
}

#[test]
fn test_empty_body_has_one_block() {
    let body = implementation_body("procedure P() { }");
    assert_eq!(body.big_blocks.len(), 1);
    assert!(body.big_blocks[0].cmds.is_empty());
    assert!(body.big_blocks[0].tail.is_none());
    assert_eq!(body.big_blocks[0].span, body.end);
}

#[test]
fn test_labels_split_blocks() {
    let body = implementation_body("procedure P() { A: B: x := 1; goto A; C: return; }");
    let labels: Vec<_> = body.big_blocks.iter().map(|b| b.label.as_deref()).collect();
    assert_eq!(labels, [Some("A"), Some("B"), Some("C")]);
    assert!(matches!(
        &body.big_blocks[1].tail,
        Some(BlockTail::Transfer(t)) if matches!(t.kind, TransferKind::Goto(_))
    ));
    assert!(matches!(
        &body.big_blocks[2].tail,
        Some(BlockTail::Transfer(t)) if t.kind == TransferKind::Return
    ));
}

#[test]
fn test_simple_commands() {
    let body = implementation_body(
        "procedure P() {
           assert {:msg \"m\"} x > 0;
           assume y;
           havoc a, b;
           m[i][j] := 1;
           a, b := b, a;
           yield;
         }",
    );
    let cmds = &body.big_blocks[0].cmds;
    assert_eq!(cmds.len(), 6);
    let CmdKind::Assert { attributes, .. } = &cmds[0].kind else {
        panic!("Expected assert");
    };
    assert_eq!(attributes[0].key, "msg");
    assert!(matches!(cmds[1].kind, CmdKind::Assume { .. }));
    assert!(matches!(&cmds[2].kind, CmdKind::Havoc { vars } if vars.len() == 2));
    let CmdKind::Assign { lhss, .. } = &cmds[3].kind else {
        panic!("Expected assignment");
    };
    assert_eq!(lhss[0].root().name, "m");
    assert!(matches!(&cmds[4].kind, CmdKind::Assign { lhss, rhss } if lhss.len() == 2 && rhss.len() == 2));
    assert_eq!(cmds[5].kind, CmdKind::Yield);
}

#[test]
fn test_calls() {
    let body = implementation_body(
        "procedure P() {
           call x, y := Q(1, 2);
           free call R();
           async call {:a} S();
           par {:p} A() | z := B(3);
         }",
    );
    let cmds = &body.big_blocks[0].cmds;
    let CmdKind::Call(call) = &cmds[0].kind else {
        panic!("Expected call");
    };
    assert_eq!(call.callee.name, "Q");
    assert_eq!(call.outs.len(), 2);
    assert_eq!(call.ins.len(), 2);
    assert!(matches!(&cmds[1].kind, CmdKind::Call(c) if c.is_free && !c.is_async));
    assert!(matches!(&cmds[2].kind, CmdKind::Call(c) if c.is_async && c.attributes.len() == 1));

    let CmdKind::ParCall { calls, attributes } = &cmds[3].kind else {
        panic!("Expected parallel call");
    };
    assert_eq!(calls.len(), 2);
    assert_eq!(attributes[0].key, "p");
    assert!(calls.iter().all(|c| c.attributes[0].key == "p"));
    assert_eq!(calls[1].outs[0].name, "z");
}

#[test]
fn test_while_with_invariants() {
    let body = implementation_body(
        "procedure P() { while (i < n) invariant i >= 0; free invariant {:f} true; { i := i + 1; break; } }",
    );
    let Some(BlockTail::Structured(StructuredCmd::While(w))) = &body.big_blocks[0].tail else {
        panic!("Expected while");
    };
    assert!(w.guard.is_some());
    assert_eq!(w.invariants.len(), 2);
    assert!(!w.invariants[0].free);
    assert!(w.invariants[1].free);
    assert!(w.invariants[0].attributes.is_empty());
    assert_eq!(w.invariants[1].attributes[0].key, "f");
    assert!(matches!(
        &w.body.big_blocks[0].tail,
        Some(BlockTail::Structured(StructuredCmd::Break(b))) if b.label.is_none()
    ));
}

#[test]
fn test_else_if_chain() {
    let body = implementation_body("procedure P() { if (a) { } else if (b) { break L; } else { x := 1; } }");
    let Some(BlockTail::Structured(StructuredCmd::If(outer))) = &body.big_blocks[0].tail else {
        panic!("Expected if");
    };
    let Some(ElseBranch::If(inner)) = &outer.else_branch else {
        panic!("Expected else-if");
    };
    assert!(matches!(inner.else_branch, Some(ElseBranch::Block(_))));
    assert!(matches!(
        &inner.then_branch.big_blocks[0].tail,
        Some(BlockTail::Structured(StructuredCmd::Break(b))) if b.label.as_deref() == Some("L")
    ));
}

// Local well-formedness errors

#[test]
fn test_malformed_hex_float() {
    let output = parse_source("axiom x == 0x1.zz;");
    assert_eq!(error_messages(&output), ["incorrectly formatted floating point"]);
}

#[test]
fn test_function_with_unspecified_parameter_type() {
    let output = parse_source("function g(bool);");
    assert!(output.program.is_none());
    assert_eq!(
        error_messages(&output),
        ["the type of the last parameter is unspecified"]
    );
}

#[test]
fn test_trailing_positional_formals_stay_unnamed() {
    let program = program(
        "function f(x: int, int): int;\n\
         function h(a, b: int, bv8, m: [int]bool): bool;",
    );
    let mut functions = program.functions();

    let f = functions.next().unwrap();
    assert_eq!(f.formals[0].name.as_deref(), Some("x"));
    assert_eq!(f.formals[1].name, None);
    assert!(matches!(f.formals[1].ty.kind, TypeKind::Basic(BasicType::Int)));

    let h = functions.next().unwrap();
    let names: Vec<_> = h.formals.iter().map(|p| p.name.as_deref()).collect();
    assert_eq!(names, [Some("a"), Some("b"), None, Some("m")]);
    assert!(matches!(h.formals[0].ty.kind, TypeKind::Basic(BasicType::Int)));
    assert!(matches!(h.formals[2].ty.kind, TypeKind::Bv(8)));
}

#[test]
fn test_function_last_formal_unnamed() {
    let output = parse_source("function g(x: int, y): bool;");
    assert_eq!(
        error_messages(&output),
        ["the type of the last parameter is unspecified"]
    );
}

#[test]
fn test_function_formal_with_type_arguments() {
    let output = parse_source("function g(C int, x: bool): bool;");
    assert_eq!(error_messages(&output), ["expecting an identifier as parameter name"]);
}

#[test]
fn test_function_formal_name_must_be_identifier() {
    let output = parse_source("function g(int: bool): bool;");
    assert_eq!(error_messages(&output), ["expected identifier before ':'"]);
}

#[test]
fn test_implication_mixture() {
    let output = parse_source("axiom a ==> b <== c;");
    assert_eq!(
        error_messages(&output),
        ["illegal mixture of ==> and <==, use parentheses to disambiguate"]
    );
}

#[test]
fn test_and_or_mixture() {
    let output = parse_source("axiom a && b || c;");
    assert_eq!(
        error_messages(&output),
        ["illegal mixture of && and ||, use parentheses to disambiguate"]
    );
    assert_eq!(parse_source("axiom (a && b) || c;").error_count, 0);
}

#[test]
fn test_triggers_rejected_where_only_attributes_allowed() {
    let output = parse_source("axiom {x} true;");
    assert_eq!(
        error_messages(&output),
        ["only attributes, not triggers, allowed here"]
    );
}

#[test]
fn test_nopats_needs_one_expression() {
    let output = parse_source("axiom (forall x: int :: {:nopats} true);");
    assert_eq!(
        error_messages(&output),
        ["the 'nopats' quantifier attribute expects a single expression parameter"]
    );
}

#[test]
fn test_lambda_triggers_rejected() {
    let output = parse_source("axiom (lambda x: int :: {x} x)[0] == 0;");
    assert_eq!(
        error_messages(&output),
        ["triggers not allowed in lambda expressions"]
    );
}

#[test]
fn test_where_clause_on_bound_variable() {
    let output = parse_source("axiom (forall x: int where x > 0 :: true);");
    assert_eq!(
        error_messages(&output),
        ["where clause not allowed on bound variables"]
    );
}

#[test]
fn test_implementation_formal_restrictions() {
    let output = parse_source("implementation P({:a} x: int) returns (y: int where y > 0) { }");
    assert_eq!(
        error_messages(&output),
        [
            "attributes are not allowed on the 'implementation' copies of formals",
            "where clause not allowed on the 'implementation' copies of formals",
        ]
    );
}

#[test]
fn test_extract_diagnostics() {
    let cases = [
        ("axiom x[a:0] == y;", "arguments of extract need to be integer literals"),
        ("axiom x[8:0, 1] == y;", "bitvectors only have one dimension"),
        ("axiom x[8:0 := y] == y;", "assignment to bitvectors is not possible"),
        ("axiom (8:0) == y;", "parentheses around bitvector bounds are not allowed"),
        ("axiom 8:0 == y;", "bitvector bounds in illegal position"),
    ];
    for (source, message) in cases {
        let output = parse_source(source);
        assert_eq!(error_messages(&output), [message], "{source}");
    }
}

#[test]
fn test_code_expression_block_with_two_labels() {
    let output = parse_source("axiom |{ A: B: return true; }|;");
    assert_eq!(
        error_messages(&output),
        ["code expression blocks can only have one label"]
    );
}
