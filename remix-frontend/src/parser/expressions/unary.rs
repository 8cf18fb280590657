//! Prefix unary expression parsing

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser, OPERATOR_COST};
use remix_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse unary expression
    pub fn parse_unary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start_location = self.current_location();

        let op = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Minus) => UnaryOp::Negate,
            Some(TokenType::PlusPlus) => UnaryOp::Increment,
            Some(TokenType::MinusMinus) => UnaryOp::Decrement,
            _ => return self.parse_postfix_expression(),
        };
        self.spend_nesting(OPERATOR_COST)?;
        self.advance();

        let operand = self.parse_unary_expression()?;

        // ++ and -- need something to store into
        if op != UnaryOp::Negate && operand.as_identifier().is_none() {
            return Err(ParseError::InvalidExpression {
                expected: format!("identifier after {}", op),
                found: operand.kind.describe().to_string(),
                location: operand.span.start,
            }
            .into());
        }

        let span = SourceSpan::new(start_location, operand.span.end.clone());
        Ok(Expression::new(
            ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
                fixity: Fixity::Prefix,
            },
            span,
        ))
    }
}
