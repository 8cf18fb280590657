//! Binary expression parsing with operator precedence

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{Parser, OPERATOR_COST};
use remix_common::{CompilerError, SourceSpan};

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());
    Expression::new(
        ExpressionKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl Parser {
    /// Parse equality expression
    pub fn parse_equality_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_relational_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::EqualEqual) => BinaryOp::Equal,
                Some(TokenType::BangEqual) => BinaryOp::NotEqual,
                _ => break,
            };
            self.spend_nesting(OPERATOR_COST)?;
            self.advance();

            let right = self.parse_relational_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse relational expression
    pub fn parse_relational_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_additive_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Less) => BinaryOp::Less,
                Some(TokenType::Greater) => BinaryOp::Greater,
                Some(TokenType::LessEqual) => BinaryOp::LessEqual,
                Some(TokenType::GreaterEqual) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.spend_nesting(OPERATOR_COST)?;
            self.advance();

            let right = self.parse_additive_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse additive expression
    pub fn parse_additive_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Plus) => BinaryOp::Add,
                Some(TokenType::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.spend_nesting(OPERATOR_COST)?;
            self.advance();

            let right = self.parse_multiplicative_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse multiplicative expression
    pub fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let op = match self.peek().map(|t| &t.token_type) {
                Some(TokenType::Star) => BinaryOp::Mul,
                Some(TokenType::Slash) => BinaryOp::Div,
                Some(TokenType::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.spend_nesting(OPERATOR_COST)?;
            self.advance();

            let right = self.parse_unary_expression()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }
}
