//! Lowering errors
//!
//! A construct that parsed fine but has no rendering in the target dialect.
//! Each error converts into [`CompilerError::LoweringError`].

use remix_common::{CompilerError, SourceLocation};
use remix_frontend::Type;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoweringError {
    #[error("type '{ty}' has no Go equivalent")]
    UnsupportedType { ty: Type, location: SourceLocation },

    #[error("builtin '{name}' has no Go equivalent")]
    UnsupportedBuiltin { name: String, location: SourceLocation },

    #[error("main must take no parameters or (int, char **), found ({found})")]
    UnsupportedMainSignature { found: String, location: SourceLocation },

    #[error("{description}")]
    UnsupportedExpression { description: String, location: SourceLocation },

    #[error("main is declared more than once")]
    DuplicateMain { location: SourceLocation },

    #[error("identifier '{name}' {reason}")]
    ReservedIdentifier { name: String, reason: String, location: SourceLocation },
}

impl LoweringError {
    /// The kind of construct that could not be lowered
    pub fn construct(&self) -> &'static str {
        match self {
            LoweringError::UnsupportedType { .. } => "type",
            LoweringError::UnsupportedBuiltin { .. } => "builtin",
            LoweringError::UnsupportedMainSignature { .. } => "main signature",
            LoweringError::UnsupportedExpression { .. } => "expression",
            LoweringError::DuplicateMain { .. } => "main declaration",
            LoweringError::ReservedIdentifier { .. } => "identifier",
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            LoweringError::UnsupportedType { location, .. }
            | LoweringError::UnsupportedBuiltin { location, .. }
            | LoweringError::UnsupportedMainSignature { location, .. }
            | LoweringError::UnsupportedExpression { location, .. }
            | LoweringError::ReservedIdentifier { location, .. }
            | LoweringError::DuplicateMain { location } => location,
        }
    }
}

impl From<LoweringError> for CompilerError {
    fn from(err: LoweringError) -> Self {
        CompilerError::lowering_error(
            err.construct().to_string(),
            err.to_string(),
            err.location().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_compiler_error() {
        let err = LoweringError::UnsupportedBuiltin {
            name: "printf".to_string(),
            location: SourceLocation::new("hello.c", 2, 5, 17),
        };

        let compiler_error = CompilerError::from(err);
        assert_eq!(compiler_error.phase(), "lowering");
        assert_eq!(
            compiler_error.to_string(),
            "Lowering error at hello.c:2:5: unsupported builtin: builtin 'printf' has no Go equivalent"
        );
    }

    #[test]
    fn test_unsupported_type_message() {
        let err = LoweringError::UnsupportedType {
            ty: Type::pointer_to(Type::Int),
            location: SourceLocation::dummy(),
        };
        assert_eq!(err.construct(), "type");
        assert_eq!(err.to_string(), "type 'int*' has no Go equivalent");
    }
}
