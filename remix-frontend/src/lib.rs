//! C to Go Remixer - Frontend
//! 
//! This crate provides the frontend components for the remixer:
//! - Lexer: tokenizes source text of the supported C subset
//! - Parser: builds AST from tokens
//! - AST: abstract syntax tree definitions
//! - Types: the closed set of source types

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod types;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Parser, ParseError};
pub use ast::{
    AssignOp, BinaryOp, Block, ElseBranch, Expression, ExpressionKind, Fixity,
    FunctionDeclaration, Parameter, Program, Statement, StatementKind, UnaryOp,
};
pub use types::Type;

use log::debug;
use remix_common::CompilerError;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse source code into an AST
    pub fn parse_source(source: &str) -> Result<Program, CompilerError> {
        Self::parse_named(source, "<input>")
    }

    /// Parse source code whose diagnostics should name `filename`
    pub fn parse_named(source: &str, filename: &str) -> Result<Program, CompilerError> {
        // Tokenize
        let mut lexer = Lexer::with_filename(source, filename);
        let tokens = lexer.tokenize()?;
        debug!("{}: {} tokens", filename, tokens.len());

        // Parse
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program()?;
        debug!("{}: parsed {} functions", filename, program.functions.len());

        Ok(program)
    }

    /// Tokenize source code (for `--print-tokens`)
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }
}
