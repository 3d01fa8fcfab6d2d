#![allow(clippy::unwrap_used)]

use bpl_ir::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::DiagnosticKind;

fn sample() -> Diagnostic {
    Diagnostic {
        severity: Severity::Warning,
        kind: DiagnosticKind::Lexical,
        filename: "m.bpl".into(),
        pos: Position::new(2, 5),
        message: "#endif without #if".into(),
    }
}

#[test]
fn test_plain_output_matches_display() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    emitter.emit(&sample()).unwrap();
    emitter.emit_summary("m.bpl", 2).unwrap();
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "m.bpl(2,5): warning: #endif without #if\n2 parse errors detected in m.bpl\n"
    );
}

#[test]
fn test_colored_output_wraps_label() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&sample()).unwrap();
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(out.contains("\x1b[1;33mwarning\x1b[0m"));
}

#[test]
fn test_summary_silent_when_clean() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary("m.bpl", 0).unwrap();
    assert!(emitter.into_inner().is_empty());
}

#[test]
fn test_failure_has_no_position() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_failure(&"cannot open a.bpl").unwrap();
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(out, "error: cannot open a.bpl\n");
}
