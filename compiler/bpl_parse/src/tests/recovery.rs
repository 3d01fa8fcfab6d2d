//! Error reporting and recovery tests.
//!
//! Covers suppression of cascading errors through the error distance,
//! resynchronization at declaration and statement boundaries, and the
//! relationship between the error count and the returned program.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bpl_diagnostic::{DiagnosticKind, Severity};
use bpl_ir::Position;
use pretty_assertions::assert_eq;

use super::{error_messages, parse_source};

#[test]
fn test_missing_semicolon_then_next_declaration() {
    let output = parse_source("axiom a < b < c;\nconst x: ;");
    assert_eq!(error_messages(&output), ["\";\" expected", "invalid Type"]);
    assert_eq!(output.error_count, 2);
    assert!(output.program.is_none());

    let positions: Vec<Position> = output.errors().map(|d| d.pos).collect();
    assert_eq!(positions, [Position::new(1, 13), Position::new(2, 10)]);
    assert!(output.errors().all(|d| d.kind == DiagnosticKind::Syntax));
}

#[test]
fn test_cascade_is_suppressed() {
    // `)` cannot start a declaration, but the parser is still within the
    // error distance of the `;` mismatch.
    let output = parse_source("const c: int ) ;");
    assert_eq!(error_messages(&output), ["\";\" expected"]);
}

#[test]
fn test_distant_errors_are_all_reported() {
    let output = parse_source("const a: ;\nconst b: int;\nconst c: ;");
    assert_eq!(error_messages(&output), ["invalid Type", "invalid Type"]);
}

#[test]
fn test_garbage_between_declarations() {
    let output = parse_source("const a: int;\n) ] 1 2 3\nconst b: int;\nconst c: ;");
    assert_eq!(error_messages(&output), ["invalid Declaration", "invalid Type"]);
}

#[test]
fn test_and_or_mixture_reports_once() {
    let output = parse_source("axiom a && b || c && d;");
    assert_eq!(
        error_messages(&output),
        ["illegal mixture of && and ||, use parentheses to disambiguate"]
    );
    assert!(output.program.is_none());
}

#[test]
fn test_statement_recovery() {
    let output = parse_source("procedure P() { x := 1; ) y := 2; }\nconst c: int;");
    assert_eq!(error_messages(&output), ["invalid StmtList"]);
    assert_eq!(output.errors().next().unwrap().pos, Position::new(1, 25));
}

#[test]
fn test_broken_command_resumes_after_semicolon() {
    let output = parse_source("procedure P() { assert a < b < c; x := 1; }");
    assert_eq!(error_messages(&output), ["\";\" expected"]);
    assert_eq!(output.errors().next().unwrap().pos, Position::new(1, 30));

    let output = parse_source("procedure P() { assert a < b < c; x := 1; ) y := 2; }");
    assert_eq!(error_messages(&output), ["\";\" expected", "invalid StmtList"]);
}

#[test]
fn test_statement_recovery_stops_at_next_declaration() {
    let output = parse_source("procedure P() { x := 1; ]\nprocedure Q() { }\nconst d: ;");
    let messages = error_messages(&output);
    assert_eq!(messages.first().map(String::as_str), Some("invalid StmtList"));
    assert_eq!(messages.last().map(String::as_str), Some("invalid Type"));
}

#[test]
fn test_ungated_bitrange_errors() {
    // Both sides are reported even though they are only a few tokens apart.
    let output = parse_source("axiom 8:0 == 1:0;");
    assert_eq!(
        error_messages(&output),
        [
            "bitvector bounds in illegal position",
            "bitvector bounds in illegal position",
        ]
    );
    let positions: Vec<Position> = output.errors().map(|d| d.pos).collect();
    assert_eq!(positions, [Position::new(1, 7), Position::new(1, 14)]);
}

#[test]
fn test_lexical_error_fails_the_parse() {
    // The parser skips the placeholder token; only the scanner reports.
    let output = parse_source("const x: int;\n@\nconst y: int;");
    assert_eq!(output.error_count, 1);
    assert!(output.program.is_none());
    let error = output.errors().next().unwrap();
    assert_eq!(error.kind, DiagnosticKind::Lexical);
    assert_eq!(error.pos, Position::new(2, 1));
    assert_eq!(error.message, "invalid character '@'");
}

#[test]
fn test_unterminated_comment() {
    let output = parse_source("const x: int; /* never closed");
    assert_eq!(error_messages(&output), ["unterminated block comment"]);
}

#[test]
fn test_preprocessor_warnings_are_not_errors() {
    let output = parse_source("#endif\nconst x: int;\n#if A\n");
    assert_eq!(output.error_count, 0);
    assert!(output.program.is_some());

    let warnings: Vec<_> = output.warnings().collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.severity == Severity::Warning));
    assert!(warnings.iter().all(|w| w.kind == DiagnosticKind::Lexical));
    assert_eq!(warnings[0].pos, Position::new(1, 1));
    assert_eq!(warnings[0].message, "#endif without matching #if");
    assert_eq!(warnings[1].pos, Position::new(3, 1));
    assert_eq!(warnings[1].message, "#if without matching #endif");
}

#[test]
fn test_diagnostic_display() {
    let output = parse_source("const x: ;");
    let error = output.errors().next().unwrap();
    assert_eq!(error.to_string(), "test.bpl(1,10): error: invalid Type");
}

#[test]
fn test_program_present_iff_no_errors() {
    let sources = [
        "",
        "const x: int;",
        "axiom (forall x: int :: x == x);",
        "procedure P() { }",
        "const x: int",
        "axiom a ==> b <== c;",
        "function f(bool);",
        "var x: int; @",
        "type T = ;",
        "procedure P() { if (x) { } else { ) }",
        "#if A\nconst x: int;\n",
    ];
    for source in sources {
        let output = parse_source(source);
        let counted = output.diagnostics.iter().filter(|d| d.is_error()).count();
        assert_eq!(output.error_count, counted, "{source:?}");
        assert_eq!(output.program.is_some(), output.error_count == 0, "{source:?}");
        assert_eq!(output.has_errors(), output.error_count > 0, "{source:?}");
    }
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("axiom {}true{};", "(".repeat(depth), ")".repeat(depth));
    let output = parse_source(&source);
    assert_eq!(output.error_count, 0);

    let depth = 300;
    let source = format!(
        "procedure P() {{ {}{} }}",
        "if (*) { ".repeat(depth),
        "} ".repeat(depth)
    );
    assert_eq!(parse_source(&source).error_count, 0);
}
