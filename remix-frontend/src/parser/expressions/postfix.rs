//! Postfix expression parsing: calls and `++`/`--`

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser, GROUP_COST};
use remix_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse postfix expression
    pub fn parse_postfix_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut expr = self.parse_primary_expression()?;

        if self.check(&TokenType::LeftParen) {
            expr = self.parse_call(expr)?;
        }

        let op = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::PlusPlus) => UnaryOp::Increment,
            Some(TokenType::MinusMinus) => UnaryOp::Decrement,
            _ => return Ok(expr),
        };

        if expr.as_identifier().is_none() {
            return Err(ParseError::InvalidExpression {
                expected: format!("identifier before {}", op),
                found: expr.kind.describe().to_string(),
                location: expr.span.start,
            }
            .into());
        }
        self.advance();

        let span = SourceSpan::new(expr.span.start.clone(), self.last_end.clone());
        Ok(Expression::new(
            ExpressionKind::Unary {
                op,
                operand: Box::new(expr),
                fixity: Fixity::Postfix,
            },
            span,
        ))
    }

    /// Parse the argument list of a call to `callee`
    fn parse_call(&mut self, callee: Expression) -> Result<Expression, CompilerError> {
        let start_location = callee.span.start.clone();

        let name = match callee.kind {
            ExpressionKind::Identifier(name) => name,
            other => {
                return Err(ParseError::InvalidExpression {
                    expected: "function name before (".to_string(),
                    found: other.describe().to_string(),
                    location: start_location,
                }
                .into());
            }
        };

        self.spend_nesting(GROUP_COST)?;
        self.expect(TokenType::LeftParen, "function call")?;

        let mut arguments = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenType::RightParen, "function call")?;

        Ok(Expression::new(
            ExpressionKind::Call {
                callee: name,
                arguments,
            },
            self.span_from(start_location),
        ))
    }
}
