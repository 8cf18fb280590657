//! C Recursive Descent Parser
//! 
//! Parses tokens into an Abstract Syntax Tree (AST). Parsing is all or
//! nothing: the first grammar violation aborts with a [`ParseError`], there is
//! no error recovery.

pub mod errors;
pub mod types;
pub mod declarations;
pub mod statements;
pub mod expressions;

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use remix_common::{CompilerError, SourceLocation, SourceSpan};
use std::collections::VecDeque;

pub use errors::ParseError;

/// Nesting budget of a single statement, spent by every level of recursion
/// and every node that deepens the tree. Later phases walk the tree
/// recursively, so the budget also bounds their stack use.
pub const MAX_NESTING: usize = 256;

/// Cost of a level that re-enters the whole expression or statement grammar:
/// a parenthesized expression, a call's argument list, a block
pub(crate) const GROUP_COST: usize = 4;

/// Cost of an operator node
pub(crate) const OPERATOR_COST: usize = 1;

/// C Parser
pub struct Parser {
    pub(crate) tokens: VecDeque<Token>,
    /// End of the most recently consumed token, used to close spans
    pub(crate) last_end: SourceLocation,
    eof_location: SourceLocation,
    /// Nesting budget spent so far
    pub(crate) depth: usize,
}

impl Parser {
    /// Create a new parser over a token stream ending in `EndOfFile`
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_location = tokens
            .last()
            .map(|t| t.span.end.clone())
            .unwrap_or_else(SourceLocation::dummy);
        let last_end = tokens
            .first()
            .map(|t| t.span.start.clone())
            .unwrap_or_else(SourceLocation::dummy);

        Self {
            tokens: tokens.into(),
            last_end,
            eof_location,
            depth: 0,
        }
    }

    /// Spend `cost` of the nesting budget, failing once it is exhausted.
    /// Callers restore `depth` once the construct they are parsing is done.
    pub(crate) fn spend_nesting(&mut self, cost: usize) -> Result<(), CompilerError> {
        if self.depth + cost > MAX_NESTING {
            return Err(ParseError::InvalidExpression {
                expected: "less deeply nested code".to_string(),
                found: "nesting too deep".to_string(),
                location: self.current_location(),
            }
            .into());
        }
        self.depth += cost;
        Ok(())
    }

    /// Peek at current token without consuming
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Peek at the type of the token `n` positions ahead
    pub(crate) fn peek_nth_type(&self, n: usize) -> Option<&TokenType> {
        self.tokens.get(n).map(|t| &t.token_type)
    }

    /// Get current token and advance
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.last_end = token.span.end.clone();
        Some(token)
    }

    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        if let Some(token) = self.peek() {
            std::mem::discriminant(&token.token_type) == std::mem::discriminant(token_type)
        } else {
            matches!(token_type, TokenType::EndOfFile)
        }
    }

    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Build an error describing the current token as unexpected
    pub(crate) fn error_at_current(&self, expected: impl Into<String>) -> ParseError {
        match self.peek() {
            Some(token) if token.token_type != TokenType::EndOfFile => ParseError::UnexpectedToken {
                expected: expected.into(),
                found: token.clone(),
            },
            _ => ParseError::UnexpectedEndOfFile {
                expected: expected.into(),
                location: self.current_location(),
            },
        }
    }

    /// Expect and consume a specific token type
    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, ParseError> {
        if self.check(&token_type) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.error_at_current(format!("{} in {}", token_type, context)))
    }

    /// Expect and consume an identifier, returning its name
    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String, ParseError> {
        if let Some(TokenType::Identifier(name)) = self.peek_nth_type(0) {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_at_current(format!("identifier in {}", context)))
        }
    }

    /// Get current location for error reporting
    pub(crate) fn current_location(&self) -> SourceLocation {
        if let Some(token) = self.peek() {
            token.span.start.clone()
        } else {
            self.eof_location.clone()
        }
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn span_from(&self, start: SourceLocation) -> SourceSpan {
        SourceSpan::new(start, self.last_end.clone())
    }

    /// Parse a complete program
    pub fn parse_program(&mut self) -> Result<Program, CompilerError> {
        let start_location = self.current_location();
        let mut functions = Vec::new();

        while !self.check(&TokenType::EndOfFile) {
            functions.push(self.parse_function_declaration()?);
        }

        Ok(Program {
            functions,
            span: SourceSpan::new(start_location, self.current_location()),
        })
    }
}
