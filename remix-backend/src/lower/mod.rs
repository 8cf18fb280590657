//! Lowering: input-dialect AST to target-dialect tree
//!
//! Every construct either has a fixed rendering or fails with a
//! [`LoweringError`]; nothing is passed through as a guess.

mod function;
mod statements;
mod expressions;

use crate::errors::LoweringError;
use crate::go_ast::{GoFile, GoType};
use crate::imports::{Facility, ImportSet};
use log::debug;
use remix_common::SourceLocation;
use remix_frontend::{FunctionDeclaration, Program, Type};
use std::collections::HashSet;

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// Per-program lowering state
pub(crate) struct Lowerer<'a> {
    /// Functions declared in the program; any other callee is a builtin
    functions: HashSet<&'a str>,
    /// Packages the emitted file imports
    packages: Vec<&'static str>,
    /// `main` binds the argument count with the `len` builtin
    counts_arguments: bool,
    /// Whether the function being lowered is `main`
    in_main: bool,
}

impl<'a> Lowerer<'a> {
    fn new(program: &'a Program, imports: &ImportSet) -> Self {
        Self {
            functions: program.functions.iter().map(|f| f.name.as_str()).collect(),
            packages: imports.packages(),
            counts_arguments: imports.contains(Facility::ProcessArguments),
            in_main: false,
        }
    }

    /// Reject a name that is not an ordinary identifier in the emitted Go
    pub(crate) fn check_name(&self, name: &str, location: &SourceLocation) -> Result<(), LoweringError> {
        let reason = if GO_KEYWORDS.contains(&name) {
            "is a Go keyword".to_string()
        } else if name == "_" {
            "is Go's blank identifier".to_string()
        } else if self.packages.contains(&name) {
            format!("shadows the imported {} package", name)
        } else {
            return Ok(());
        };

        Err(LoweringError::ReservedIdentifier {
            name: name.to_string(),
            reason,
            location: location.clone(),
        })
    }

    /// Function names live in package scope, next to Go's own
    pub(crate) fn check_function_name(&self, function: &FunctionDeclaration) -> Result<(), LoweringError> {
        let location = &function.span.start;
        self.check_name(&function.name, location)?;

        let reason = match function.name.as_str() {
            "init" => "names Go's package initializer",
            "len" if self.counts_arguments => "shadows the len builtin that counts os.Args",
            _ => return Ok(()),
        };

        Err(LoweringError::ReservedIdentifier {
            name: function.name.clone(),
            reason: reason.to_string(),
            location: location.clone(),
        })
    }
}

/// Map a source type to its Go rendering
pub(crate) fn lower_type(ty: &Type, location: &SourceLocation) -> Result<GoType, LoweringError> {
    match ty {
        Type::Int => Ok(GoType::Int),
        // C promotes char to int in arithmetic, Go's byte does not
        Type::Char | Type::Void | Type::Pointer(_) | Type::Array(_) => Err(LoweringError::UnsupportedType {
            ty: ty.clone(),
            location: location.clone(),
        }),
    }
}

/// Lower a whole program. The import block comes from `imports`, which must
/// have been resolved against the same program.
pub fn lower_program(program: &Program, imports: &ImportSet) -> Result<GoFile, LoweringError> {
    let mut seen_main = false;
    for function in program.functions.iter().filter(|f| f.is_main()) {
        if seen_main {
            return Err(LoweringError::DuplicateMain {
                location: function.span.start.clone(),
            });
        }
        seen_main = true;
    }

    let mut lowerer = Lowerer::new(program, imports);
    let functions = program
        .functions
        .iter()
        .map(|function| lowerer.lower_function(function))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("lowered {} functions, imports {:?}", functions.len(), imports.packages());

    Ok(GoFile {
        package: "main".to_string(),
        imports: imports.packages().into_iter().map(String::from).collect(),
        functions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go_ast::*;
    use crate::imports::ImportResolver;
    use remix_frontend::Frontend;

    fn lower(source: &str) -> Result<GoFile, LoweringError> {
        let program = Frontend::parse_source(source).unwrap();
        let imports = ImportResolver::new().resolve(&program);
        lower_program(&program, &imports)
    }

    #[test]
    fn test_lower_type() {
        let loc = SourceLocation::dummy();
        assert_eq!(lower_type(&Type::Int, &loc), Ok(GoType::Int));
        assert!(lower_type(&Type::Char, &loc).is_err());
        assert!(lower_type(&Type::Void, &loc).is_err());
        assert!(lower_type(&Type::pointer_to(Type::Char), &loc).is_err());
    }

    #[test]
    fn test_argument_vector_bindings_come_first() {
        let file = lower("int main(int argc, char **argv) { int a = 1; }").unwrap();
        let main = &file.functions[0];

        assert_eq!(file.imports, vec!["os".to_string()]);
        assert!(main.params.is_empty());
        assert_eq!(main.result, None);
        assert_eq!(
            main.body[0],
            GoStmt::ShortVarDecl {
                name: "argc".to_string(),
                value: GoExpr::call(GoExpr::ident("len"), vec![GoExpr::selector("os", "Args")]),
            }
        );
        assert_eq!(
            main.body[1],
            GoStmt::ShortVarDecl { name: "argv".to_string(), value: GoExpr::selector("os", "Args") }
        );
        assert_eq!(main.body.len(), 3);
    }

    #[test]
    fn test_return_in_main_becomes_exit() {
        let file = lower("int main() { return 7; }").unwrap();
        assert_eq!(
            file.functions[0].body,
            vec![GoStmt::Expr(GoExpr::call(GoExpr::selector("os", "Exit"), vec![GoExpr::IntLiteral(7)]))]
        );
    }

    #[test]
    fn test_return_elsewhere_is_kept() {
        let file = lower("int seven() { return 7; }").unwrap();
        assert_eq!(file.functions[0].body, vec![GoStmt::Return(Some(GoExpr::IntLiteral(7)))]);
        assert_eq!(file.functions[0].result, Some(GoType::Int));
    }

    #[test]
    fn test_duplicate_main() {
        let err = lower("int main() { } int main() { }").unwrap_err();
        assert!(matches!(err, LoweringError::DuplicateMain { ref location } if location.offset == 15));
    }

    #[test]
    fn test_unknown_callee_is_builtin() {
        let err = lower("int main() { printf(1); }").unwrap_err();
        assert_eq!(
            err,
            LoweringError::UnsupportedBuiltin {
                name: "printf".to_string(),
                location: SourceLocation::new("<input>", 1, 14, 13),
            }
        );
    }

    #[test]
    fn test_call_to_later_function_is_allowed() {
        assert!(lower("int main() { helper(); } void helper() { }").is_ok());
    }
}
