//! Assignment expression parsing

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser, OPERATOR_COST};
use remix_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse assignment expression
    pub fn parse_assignment_expression(&mut self) -> Result<Expression, CompilerError> {
        let left = self.parse_equality_expression()?;

        let Some(op) = self.parse_assignment_operator() else {
            return Ok(left);
        };

        self.spend_nesting(OPERATOR_COST)?;
        let right = self.parse_assignment_expression()?;
        let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());

        let target = match left.kind {
            ExpressionKind::Identifier(name) => name,
            other => {
                return Err(ParseError::InvalidExpression {
                    expected: "identifier as assignment target".to_string(),
                    found: other.describe().to_string(),
                    location: left.span.start,
                }
                .into());
            }
        };

        Ok(Expression::new(
            ExpressionKind::Assignment {
                op,
                target,
                value: Box::new(right),
            },
            span,
        ))
    }

    /// Consume an assignment operator, if one is next
    fn parse_assignment_operator(&mut self) -> Option<AssignOp> {
        let op = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Equal) => AssignOp::Assign,
            Some(TokenType::PlusEqual) => AssignOp::AddAssign,
            Some(TokenType::MinusEqual) => AssignOp::SubAssign,
            Some(TokenType::StarEqual) => AssignOp::MulAssign,
            Some(TokenType::SlashEqual) => AssignOp::DivAssign,
            Some(TokenType::PercentEqual) => AssignOp::ModAssign,
            _ => return None,
        };
        self.advance();
        Some(op)
    }
}
