use super::*;

#[test]
fn test_kind_count_fits_recovery_sets() {
    assert!(TokenKind::COUNT <= 128);
}

#[test]
fn test_error_is_not_a_terminal() {
    assert!(!TokenKind::Error.is_valid_terminal());
    assert!(TokenKind::Eof.is_valid_terminal());
    assert!(TokenKind::RoundTowardZero.is_valid_terminal());
}

#[test]
fn test_expected_name_quotes_spellings_only() {
    assert_eq!(TokenKind::Semicolon.expected_name(), "\";\"");
    assert_eq!(TokenKind::Implementation.expected_name(), "\"implementation\"");
    assert_eq!(TokenKind::Ident.expected_name(), "ident");
    assert_eq!(TokenKind::Eof.expected_name(), "EOF");
}

#[test]
fn test_unicode_alternates_share_ascii_spelling() {
    assert_eq!(TokenKind::Iff.spelling(), "<==>");
    assert_eq!(TokenKind::QSep.spelling(), "::");
    assert_eq!(TokenKind::Forall.to_string(), "forall");
}

#[test]
fn test_token_list_indexing() {
    let mut list = TokenList::new();
    list.push(Token::dummy(TokenKind::Ident));
    list.push(Token::dummy(TokenKind::Eof));
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].kind, TokenKind::Eof);
    assert_eq!(list.kinds(), vec![TokenKind::Ident, TokenKind::Eof]);
}
