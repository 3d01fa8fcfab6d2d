use bpl_ir::TokenKind;

use super::*;

fn tokens(source: &str) -> TokenList {
    bpl_lexer::lex(source).tokens
}

#[test]
fn test_first_error_is_always_reported() {
    let list = tokens("x");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.take_error_slot());
    assert!(!cursor.take_error_slot());
}

#[test]
fn test_two_tokens_rearm_reporting() {
    let list = tokens("a b c");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.take_error_slot());
    cursor.advance();
    assert!(!cursor.take_error_slot());
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.error_distance(), 2);
    assert!(cursor.take_error_slot());
}

#[test]
fn test_invalid_tokens_are_skipped() {
    let list = tokens("@ a @ @ b");
    let mut cursor = Cursor::new(&list);
    assert_eq!(cursor.current().text, "a");
    cursor.advance();
    assert_eq!(cursor.current().text, "b");
    assert_eq!(cursor.previous().text, "a");
}

#[test]
fn test_advance_stops_at_eof() {
    let list = tokens("a");
    let mut cursor = Cursor::new(&list);
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_kind(), TokenKind::Eof);
}
