//! Statement lowering

use super::{lower_type, Lowerer};
use crate::errors::LoweringError;
use crate::go_ast::{GoElse, GoExpr, GoStmt};
use remix_frontend::{
    Block, ElseBranch, Expression, ExpressionKind, Statement, StatementKind, UnaryOp,
};

impl<'a> Lowerer<'a> {
    pub(crate) fn lower_block(&self, block: &Block) -> Result<Vec<GoStmt>, LoweringError> {
        block.statements.iter().map(|s| self.lower_statement(s)).collect()
    }

    pub(crate) fn lower_statement(&self, statement: &Statement) -> Result<GoStmt, LoweringError> {
        match &statement.kind {
            StatementKind::VariableDeclaration { name, declared_type, initializer } => {
                let ty = lower_type(declared_type, &statement.span.start)?;
                self.check_name(name, &statement.span.start)?;

                Ok(match initializer {
                    Some(value) => GoStmt::ShortVarDecl {
                        name: name.clone(),
                        value: self.lower_expression(value)?,
                    },
                    None => GoStmt::VarDecl { name: name.clone(), ty },
                })
            }

            StatementKind::Expression(expr) => self.lower_expression_statement(expr),

            StatementKind::If { condition, then_block, else_branch } => {
                let else_branch = match else_branch {
                    Some(ElseBranch::Block(block)) => Some(GoElse::Block(self.lower_block(block)?)),
                    Some(ElseBranch::If(nested)) => Some(GoElse::If(Box::new(self.lower_statement(nested)?))),
                    None => None,
                };

                Ok(GoStmt::If {
                    condition: self.lower_expression(condition)?,
                    then_body: self.lower_block(then_block)?,
                    else_branch,
                })
            }

            StatementKind::While { condition, body } => Ok(GoStmt::For {
                condition: self.lower_expression(condition)?,
                body: self.lower_block(body)?,
            }),

            StatementKind::Return(Some(value)) if self.in_main => Ok(GoStmt::Expr(GoExpr::call(
                GoExpr::selector("os", "Exit"),
                vec![self.lower_expression(value)?],
            ))),

            StatementKind::Return(value) => Ok(GoStmt::Return(
                value.as_ref().map(|e| self.lower_expression(e)).transpose()?,
            )),

            StatementKind::Block(block) => Ok(GoStmt::Block(self.lower_block(block)?)),
        }
    }

    /// Go only allows calls, assignments and `++`/`--` as statements
    fn lower_expression_statement(&self, expr: &Expression) -> Result<GoStmt, LoweringError> {
        match &expr.kind {
            ExpressionKind::Assignment { op, target, value } => {
                self.check_name(target, &expr.span.start)?;
                Ok(GoStmt::Assign {
                    target: target.clone(),
                    op: *op,
                    value: self.lower_expression(value)?,
                })
            }

            // Go has only the postfix statement form; as a statement the
            // prefix form has the same effect
            ExpressionKind::Unary { op: op @ (UnaryOp::Increment | UnaryOp::Decrement), operand, .. } => {
                match operand.as_identifier() {
                    Some(target) => {
                        self.check_name(target, &operand.span.start)?;
                        Ok(GoStmt::IncDec { target: target.to_string(), op: *op })
                    }
                    None => Err(LoweringError::UnsupportedExpression {
                        description: format!("{} applied to a {}", op, operand.kind.describe()),
                        location: operand.span.start.clone(),
                    }),
                }
            }

            ExpressionKind::Call { .. } => Ok(GoStmt::Expr(self.lower_expression(expr)?)),

            other => Err(LoweringError::UnsupportedExpression {
                description: format!("{} used as a statement", other.describe()),
                location: expr.span.start.clone(),
            }),
        }
    }
}
