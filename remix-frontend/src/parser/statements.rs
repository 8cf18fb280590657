//! Statement parsing
//! 
//! This module handles parsing of all statement types. The bodies of `if`,
//! `else` and `while` are always stored as blocks; a single unbraced
//! statement is wrapped in one.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{Parser, GROUP_COST, OPERATOR_COST};
use remix_common::CompilerError;

impl Parser {
    /// Parse a brace-delimited block
    pub fn parse_block(&mut self) -> Result<Block, CompilerError> {
        let start_location = self.current_location();
        let depth = self.depth;

        self.spend_nesting(GROUP_COST)?;
        self.expect(TokenType::LeftBrace, "block")?;

        let mut statements = Vec::new();
        while !self.check(&TokenType::RightBrace) && !self.check(&TokenType::EndOfFile) {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenType::RightBrace, "block")?;
        self.depth = depth;

        Ok(Block::new(statements, self.span_from(start_location)))
    }

    /// Parse statement
    pub fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let start_location = self.current_location();
        let depth = self.depth;

        let kind = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::LeftBrace) => StatementKind::Block(self.parse_block()?),
            Some(TokenType::If) => {
                self.advance();
                self.parse_if_statement()?
            }
            Some(TokenType::While) => {
                self.advance();
                self.parse_while_statement()?
            }
            Some(TokenType::Return) => {
                self.advance();
                self.parse_return_statement()?
            }
            _ if self.is_type_start() => self.parse_variable_declaration()?,
            _ => {
                let expr = self.parse_expression()?;
                self.expect(TokenType::Semicolon, "expression statement")?;
                StatementKind::Expression(expr)
            }
        };
        self.depth = depth;

        Ok(Statement::new(kind, self.span_from(start_location)))
    }

    /// Parse a branch body, wrapping an unbraced statement in a block
    fn parse_branch_body(&mut self) -> Result<Block, CompilerError> {
        if self.check(&TokenType::LeftBrace) {
            return self.parse_block();
        }

        self.spend_nesting(GROUP_COST)?;
        let statement = self.parse_statement()?;
        let span = statement.span.clone();
        Ok(Block::new(vec![statement], span))
    }

    /// Parse a branch condition. Its nesting is released once it is complete,
    /// so only the statement nesting carries over into the branches.
    fn parse_condition(&mut self) -> Result<Expression, CompilerError> {
        let depth = self.depth;
        let condition = self.parse_expression()?;
        self.depth = depth;
        Ok(condition)
    }

    /// Parse if statement (after `if`)
    fn parse_if_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::LeftParen, "if statement")?;
        let condition = self.parse_condition()?;
        self.expect(TokenType::RightParen, "if condition")?;

        let then_block = self.parse_branch_body()?;

        let else_branch = if self.match_token(&TokenType::Else) {
            if self.check(&TokenType::If) {
                self.spend_nesting(OPERATOR_COST)?;
                Some(ElseBranch::If(Box::new(self.parse_statement()?)))
            } else {
                Some(ElseBranch::Block(self.parse_branch_body()?))
            }
        } else {
            None
        };

        Ok(StatementKind::If {
            condition,
            then_block,
            else_branch,
        })
    }

    /// Parse while statement (after `while`)
    fn parse_while_statement(&mut self) -> Result<StatementKind, CompilerError> {
        self.expect(TokenType::LeftParen, "while statement")?;
        let condition = self.parse_condition()?;
        self.expect(TokenType::RightParen, "while condition")?;

        let body = self.parse_branch_body()?;

        Ok(StatementKind::While { condition, body })
    }

    /// Parse return statement (after `return`)
    fn parse_return_statement(&mut self) -> Result<StatementKind, CompilerError> {
        let value = if self.check(&TokenType::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenType::Semicolon, "return statement")?;
        Ok(StatementKind::Return(value))
    }

    /// Parse a local variable declaration with an optional initializer
    fn parse_variable_declaration(&mut self) -> Result<StatementKind, CompilerError> {
        let base_type = self.parse_type_specifier()?;
        let (name, declared_type) = self.parse_declarator(base_type, "variable declaration")?;

        let initializer = if self.match_token(&TokenType::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenType::Semicolon, "variable declaration")?;

        Ok(StatementKind::VariableDeclaration {
            name,
            declared_type,
            initializer,
        })
    }
}
