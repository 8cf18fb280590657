//! Error handling for the C to Go remixer
//!
//! Every phase reports failure through [`CompilerError`]. A translation
//! that fails produces no output text at all, only one of these.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of translation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Lexical error at {location}: {message}")]
    LexError {
        location: SourceLocation,
        message: String,
    },

    #[error("Parse error at {location}: expected {expected}, found {found}")]
    ParseError {
        location: SourceLocation,
        expected: String,
        found: String,
    },

    #[error("Lowering error at {location}: unsupported {construct}: {reason}")]
    LoweringError {
        construct: String,
        reason: String,
        location: SourceLocation,
    },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a lexer error
    pub fn lexer_error(message: String, location: SourceLocation) -> Self {
        CompilerError::LexError { location, message }
    }

    /// Create a parse error
    pub fn parse_error(expected: String, found: String, location: SourceLocation) -> Self {
        CompilerError::ParseError { location, expected, found }
    }

    /// Create a lowering error
    pub fn lowering_error(construct: String, reason: String, location: SourceLocation) -> Self {
        CompilerError::LoweringError { construct, reason, location }
    }

    /// Location the error points at, if it came from the input text
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            CompilerError::LexError { location, .. }
            | CompilerError::ParseError { location, .. }
            | CompilerError::LoweringError { location, .. } => Some(location),
            CompilerError::IoError { .. } => None,
        }
    }

    /// Short phase name, used in logs and status messages
    pub fn phase(&self) -> &'static str {
        match self {
            CompilerError::LexError { .. } => "lex",
            CompilerError::ParseError { .. } => "parse",
            CompilerError::LoweringError { .. } => "lowering",
            CompilerError::IoError { .. } => "io",
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}
