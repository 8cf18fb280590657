//! Primary expression parsing

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{Parser, GROUP_COST};
use remix_common::CompilerError;

impl Parser {
    /// Parse primary expression: literal, identifier or parenthesized expression
    pub fn parse_primary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start_location = self.current_location();

        let kind = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::IntLiteral(value)) => ExpressionKind::IntegerLiteral(*value),
            Some(TokenType::Identifier(name)) => ExpressionKind::Identifier(name.clone()),
            Some(TokenType::LeftParen) => {
                self.spend_nesting(GROUP_COST)?;
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenType::RightParen, "parenthesized expression")?;
                // Grouping is not kept in the tree
                return Ok(expr);
            }
            _ => return Err(self.error_at_current("expression").into()),
        };
        self.advance();

        Ok(Expression::new(kind, self.span_from(start_location)))
    }
}
