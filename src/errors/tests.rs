//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, SourceError};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            spelling: "@".to_string(),
        },
        Position::new(3, 10),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedLeadingDotLiteral {
            spelling: ".".to_string(),
        },
        Position::new(42, 7),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_malformed_leading_dot_error() {
    let error = Error::new(
        ErrorImpl::MalformedLeadingDotLiteral {
            spelling: ".".to_string(),
        },
        Position::new(1, 0),
    );

    assert_eq!(error.get_error_name(), "MalformedLeadingDotLiteral");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("followed by a digit")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_source_unreadable_error() {
    let error = Error::new(
        ErrorImpl::SourceUnreadable {
            message: "stream did not contain valid UTF-8".to_string(),
        },
        Position::new(2, 0),
    );

    assert_eq!(error.get_error_name(), "SourceUnreadable");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            spelling: "#".to_string(),
        },
        Position::new(1, 0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_names_line() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            spelling: "@".to_string(),
        },
        Position::new(5, 2),
    );

    assert_eq!(error.to_string(), "illegal character: @ line: 5");
}

#[test]
fn test_source_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
    let error: SourceError = io.into();

    assert!(matches!(error, SourceError::Io(_)));
    assert_eq!(error.to_string(), "bad bytes");
    assert_eq!(SourceError::EndOfInput.to_string(), "end of input");
}
