//! Expression AST nodes
//! 
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::{AssignOp, BinaryOp, Fixity, UnaryOp};
use remix_common::SourceSpan;
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Integer literal
    IntegerLiteral(i64),

    /// Identifier reference
    Identifier(String),

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Unary operation, prefix or postfix
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
        fixity: Fixity,
    },

    /// Call of a named function
    Call {
        callee: String,
        arguments: Vec<Expression>,
    },

    /// Assignment to a named variable
    Assignment {
        op: AssignOp,
        target: String,
        value: Box<Expression>,
    },
}

impl ExpressionKind {
    /// Short human-readable name, used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            ExpressionKind::IntegerLiteral(_) => "integer literal",
            ExpressionKind::Identifier(_) => "identifier",
            ExpressionKind::Binary { .. } => "binary expression",
            ExpressionKind::Unary { .. } => "unary expression",
            ExpressionKind::Call { .. } => "function call",
            ExpressionKind::Assignment { .. } => "assignment",
        }
    }
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Identifier name, if this expression is a bare identifier
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            ExpressionKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}
