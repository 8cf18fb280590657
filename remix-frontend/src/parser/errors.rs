//! Parse error types for the C parser
//! 
//! This module defines all error types that can occur during parsing.

use crate::lexer::Token;
use remix_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: Token,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEndOfFile {
        expected: String,
        location: SourceLocation,
    },

    #[error("expected {expected}, found {found}")]
    InvalidExpression {
        expected: String,
        found: String,
        location: SourceLocation,
    },
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedToken { expected, found } => {
                CompilerError::parse_error(expected, found.token_type.to_string(), found.span.start)
            }
            ParseError::UnexpectedEndOfFile { expected, location } => {
                CompilerError::parse_error(expected, "end of file".to_string(), location)
            }
            ParseError::InvalidExpression { expected, found, location } => {
                CompilerError::parse_error(expected, found, location)
            }
        }
    }
}
