//! Statement AST nodes
//! 
//! This module defines statements, blocks, function declarations and the
//! program root.

use crate::types::Type;
use super::expressions::Expression;
use remix_common::SourceSpan;
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Local variable declaration
    VariableDeclaration {
        name: String,
        declared_type: Type,
        initializer: Option<Expression>,
    },

    /// Expression statement
    Expression(Expression),

    /// If statement; both branches are always blocks
    If {
        condition: Expression,
        then_block: Block,
        else_branch: Option<ElseBranch>,
    },

    /// While loop
    While {
        condition: Expression,
        body: Block,
    },

    /// Return statement
    Return(Option<Expression>),

    /// Nested scope
    Block(Block),
}

/// What follows `else`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElseBranch {
    Block(Block),
    /// `else if (...)`, always a `StatementKind::If`
    If(Box<Statement>),
}

/// Brace-delimited statement sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: SourceSpan,
}

impl Block {
    pub fn new(statements: Vec<Statement>, span: SourceSpan) -> Self {
        Self { statements, span }
    }

    /// Visit every statement in this block and in all nested blocks, in
    /// source order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Statement)) {
        for statement in &self.statements {
            statement.walk(visit);
        }
    }
}

impl Statement {
    pub fn new(kind: StatementKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Visit this statement, then every statement nested inside it
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Statement)) {
        visit(self);
        match &self.kind {
            StatementKind::If { then_block, else_branch, .. } => {
                then_block.walk(visit);
                match else_branch {
                    Some(ElseBranch::Block(block)) => block.walk(visit),
                    Some(ElseBranch::If(statement)) => statement.walk(visit),
                    None => {}
                }
            }
            StatementKind::While { body, .. } => body.walk(visit),
            StatementKind::Block(block) => block.walk(visit),
            StatementKind::VariableDeclaration { .. }
            | StatementKind::Expression(_)
            | StatementKind::Return(_) => {}
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub span: SourceSpan,
}

/// Function declaration with its body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: Block,
    pub span: SourceSpan,
}

impl FunctionDeclaration {
    pub fn is_main(&self) -> bool {
        self.name == "main"
    }
}

/// Root of the tree: the top-level functions in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub functions: Vec<FunctionDeclaration>,
    pub span: SourceSpan,
}

impl Program {
    /// The first function named `main`, if any
    pub fn main_function(&self) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|f| f.is_main())
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|f| f.name == name)
    }
}
