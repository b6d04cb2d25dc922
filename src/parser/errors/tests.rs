//! Integration tests for the errors module

use super::*;
use text_size::{TextRange, TextSize};

#[test]
fn test_error_module_exports() {
    let _code = ErrorCode::E0201;
    let _kind = ParseErrorKind::ModuleNotFound;

    let _err = ParseError::new(
        "test error",
        TextRange::empty(TextSize::new(0)),
        ErrorCode::E0101,
    );
}

#[test]
fn test_complete_error_workflow() {
    // Port list opened at 9, text ends at 40 without ')'
    let open_paren = TextRange::new(TextSize::new(9), TextSize::new(10));
    let error_pos = TextRange::empty(TextSize::new(40));

    let err = ParseError::builder(ErrorCode::E0202)
        .message("port list is never closed")
        .range(error_pos)
        .hint("add ')' after the last port")
        .related("port list opened here", open_paren)
        .build();

    assert_eq!(err.code, ErrorCode::E0202);
    assert_eq!(err.kind(), ParseErrorKind::PortDeclaration);
    assert!(err.message.contains("never closed"));
    assert_eq!(err.related[0].range, open_paren);
}

#[test]
fn test_error_code_exhaustiveness() {
    let codes = [
        ErrorCode::E0101,
        ErrorCode::E0201,
        ErrorCode::E0202,
        ErrorCode::E0203,
        ErrorCode::E0204,
        ErrorCode::E0205,
        ErrorCode::E0301,
        ErrorCode::E0401,
        ErrorCode::E0402,
    ];

    for code in codes {
        assert!(code.as_str().starts_with('E'));
        assert_eq!(code.as_str().len(), 5);
        assert!(!code.default_message().is_empty());
        assert!(!code.kind().as_str().is_empty());
    }
}

#[test]
fn test_with_hint_replaces_hint() {
    let err = ParseError::builder(ErrorCode::E0205)
        .message("bit range bounds must be integer literals")
        .hint("first")
        .build()
        .with_hint("second");

    assert_eq!(err.hint.as_deref(), Some("second"));
    assert!(err.render("").ends_with("hint: second"));
}
