use crate::ast::Span;
use crate::error::InversoError;
use std::sync::Arc;

fn sample_span() -> Span {
    Span {
        start: 3,
        end: 4,
        line: 1,
        col: 4,
    }
}

#[test]
fn test_error_creation_and_display() {
    let parse_error = InversoError::parse(
        "Unexpected operator",
        sample_span(),
        "<formula>",
        Arc::from("x +* 1"),
    );
    let display = format!("{}", parse_error);
    assert!(display.contains("Parse error: Unexpected operator"));
    assert!(display.contains("<formula>:1:4"));

    let with_suggestion = InversoError::parse_with_suggestion(
        "Unexpected operator",
        sample_span(),
        "<formula>",
        Arc::from("x +* 1"),
        "Remove one of the operators",
    );
    let display = format!("{}", with_suggestion);
    assert!(display.contains("Unexpected operator"));
    assert!(display.contains("Remove one of the operators"));

    let invalid = InversoError::InvalidProblem("c = 0".to_string());
    assert_eq!(format!("{}", invalid), "Invalid problem: c = 0");

    let config = InversoError::Config("empty range".to_string());
    assert_eq!(format!("{}", config), "Configuration error: empty range");

    let engine = InversoError::Engine("out of attempts".to_string());
    assert_eq!(format!("{}", engine), "Engine error: out of attempts");
}

#[test]
fn test_error_message_strips_category_and_location() {
    let parse_error = InversoError::parse(
        "Unexpected operator",
        sample_span(),
        "<formula>",
        Arc::from("x +* 1"),
    );
    assert_eq!(parse_error.message(), "Unexpected operator");
    assert_eq!(
        InversoError::Config("bad margin".to_string()).message(),
        "bad margin"
    );
}

#[test]
fn test_parse_error_keeps_source_text() {
    let source: Arc<str> = Arc::from("(x + 1)/(3x - 2");
    let error = InversoError::parse("Missing ')'", Span::at(15), "<formula>", source.clone());

    match error {
        InversoError::Parse(details) => {
            assert_eq!(&*details.source_text, &*source);
            assert_eq!(details.span.start, 15);
            assert_eq!(details.span.col, 16);
            assert!(details.suggestion.is_none());
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_error_from_fmt_error() {
    let error: InversoError = std::fmt::Error.into();
    assert!(matches!(error, InversoError::Engine(_)));
}
