use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A recorded, non-fatal parse diagnostic.
#[derive(Debug, Clone, PartialEq)]
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
            ErrorImpl::NoParseRule { .. } => "NoParseRule",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoParseRule { kind } => match kind {
                TokenKind::Illegal => ErrorTip::None,
                _ => ErrorTip::Suggestion(format!(
                    "`{}` cannot start an expression",
                    kind
                )),
            },
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no parse rule for token kind {kind}")]
    NoParseRule { kind: TokenKind },
    #[error("expected token kind {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
}
