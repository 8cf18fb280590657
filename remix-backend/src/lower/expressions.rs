//! Expression lowering

use super::Lowerer;
use crate::errors::LoweringError;
use crate::go_ast::GoExpr;
use remix_frontend::{Expression, ExpressionKind, UnaryOp};

impl<'a> Lowerer<'a> {
    /// Lower an expression used for its value
    pub(crate) fn lower_expression(&self, expr: &Expression) -> Result<GoExpr, LoweringError> {
        match &expr.kind {
            ExpressionKind::IntegerLiteral(value) => Ok(GoExpr::IntLiteral(*value)),

            ExpressionKind::Identifier(name) => {
                self.check_name(name, &expr.span.start)?;
                Ok(GoExpr::ident(name.as_str()))
            }

            ExpressionKind::Binary { op, left, right } => Ok(GoExpr::Binary {
                op: *op,
                left: Box::new(self.lower_expression(left)?),
                right: Box::new(self.lower_expression(right)?),
            }),

            ExpressionKind::Unary { op: UnaryOp::Negate, operand, .. } => Ok(GoExpr::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(self.lower_expression(operand)?),
            }),

            // Go's ++ and -- are statements, never values
            ExpressionKind::Unary { op, .. } => Err(LoweringError::UnsupportedExpression {
                description: format!("{} used as a value", op),
                location: expr.span.start.clone(),
            }),

            ExpressionKind::Call { callee, arguments } => {
                if !self.functions.contains(callee.as_str()) {
                    return Err(LoweringError::UnsupportedBuiltin {
                        name: callee.clone(),
                        location: expr.span.start.clone(),
                    });
                }

                let arguments = arguments
                    .iter()
                    .map(|a| self.lower_expression(a))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(GoExpr::call(GoExpr::ident(callee.as_str()), arguments))
            }

            ExpressionKind::Assignment { .. } => Err(LoweringError::UnsupportedExpression {
                description: "assignment used as a value".to_string(),
                location: expr.span.start.clone(),
            }),
        }
    }
}
