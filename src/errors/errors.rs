use std::{fmt::Display, io};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MalformedLeadingDotLiteral { .. } => "MalformedLeadingDotLiteral",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedLeadingDotLiteral { spelling } => ErrorTip::Suggestion(format!(
                "`{}` must be followed by a digit, did you mean `0{}`?",
                spelling, spelling
            )),
            ErrorImpl::SourceUnreadable { message } => {
                ErrorTip::Suggestion(format!("Scanning stopped here: {}", message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} line: {}", self.internal_error, self.position.line)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {spelling}")]
    IllegalCharacter { spelling: String },
    #[error("illegal character: {spelling} (no digits after leading dot)")]
    MalformedLeadingDotLiteral { spelling: String },
    #[error("unable to read source: {message}")]
    SourceUnreadable { message: String },
}

/// Failure modes of a [`CharacterSource`](crate::lexer::source::CharacterSource).
///
/// `EndOfInput` is the expected terminal signal, not a failure.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("end of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}
