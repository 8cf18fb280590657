//! Expression parsing
//! 
//! Precedence climbs from assignment (loosest, right associative) through
//! equality, relational, additive and multiplicative levels down to unary,
//! postfix and primary expressions.

mod primary;
mod postfix;
mod unary;
mod binary;
mod assignment;

use crate::ast::*;
use crate::parser::Parser;
use remix_common::CompilerError;

impl Parser {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_assignment_expression()
    }
}
