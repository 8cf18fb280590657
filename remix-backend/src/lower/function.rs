//! Function lowering

use super::{lower_type, Lowerer};
use crate::errors::LoweringError;
use crate::go_ast::{GoExpr, GoFunction, GoParam, GoStmt};
use crate::signature::MainSignature;
use log::debug;
use remix_frontend::{FunctionDeclaration, Type};

impl<'a> Lowerer<'a> {
    pub(crate) fn lower_function(&mut self, function: &FunctionDeclaration) -> Result<GoFunction, LoweringError> {
        debug!("lowering function '{}'", function.name);
        self.check_function_name(function)?;

        if function.is_main() {
            return self.lower_main(function);
        }

        self.in_main = false;

        let params = function
            .parameters
            .iter()
            .map(|p| {
                self.check_name(&p.name, &p.span.start)?;
                Ok(GoParam {
                    name: p.name.clone(),
                    ty: lower_type(&p.param_type, &p.span.start)?,
                })
            })
            .collect::<Result<Vec<_>, LoweringError>>()?;

        let result = match function.return_type {
            Type::Void => None,
            ref ty => Some(lower_type(ty, &function.span.start)?),
        };

        Ok(GoFunction {
            name: function.name.clone(),
            params,
            result,
            body: self.lower_block(&function.body)?,
        })
    }

    /// `main` takes no parameters and returns nothing in Go; the argument
    /// vector comes from `os.Args`
    fn lower_main(&mut self, main: &FunctionDeclaration) -> Result<GoFunction, LoweringError> {
        if !matches!(main.return_type, Type::Int | Type::Void) {
            return Err(LoweringError::UnsupportedMainSignature {
                found: format!("returning {}", main.return_type),
                location: main.span.start.clone(),
            });
        }

        self.in_main = true;

        let mut body = Vec::new();
        if let MainSignature::ArgumentVector { count, vector } = MainSignature::classify(main)? {
            for (name, param) in [&count, &vector].into_iter().zip(&main.parameters) {
                self.check_name(name, &param.span.start)?;
            }
            body.push(GoStmt::ShortVarDecl {
                name: count,
                value: GoExpr::call(GoExpr::ident("len"), vec![GoExpr::selector("os", "Args")]),
            });
            body.push(GoStmt::ShortVarDecl {
                name: vector,
                value: GoExpr::selector("os", "Args"),
            });
        }
        body.extend(self.lower_block(&main.body)?);

        self.in_main = false;

        Ok(GoFunction {
            name: main.name.clone(),
            params: Vec::new(),
            result: None,
            body,
        })
    }
}
