//! Abstract Syntax Tree definitions
//! 
//! This module defines the AST nodes for the supported C subset. The tree
//! is built once by the parser and only read afterwards.

pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{AssignOp, BinaryOp, Fixity, UnaryOp};
pub use expressions::{Expression, ExpressionKind};
pub use statements::{
    Block, ElseBranch, FunctionDeclaration, Parameter, Program, Statement, StatementKind,
};
