//! Target-dialect syntax tree
//!
//! Lowering builds this tree; the printer renders it. Only shapes the
//! lowering can produce are representable, so the printer has no failure
//! mode.

use remix_frontend::{AssignOp, BinaryOp, UnaryOp};
use serde::Serialize;
use std::fmt;

/// One Go source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoFile {
    pub package: String,
    /// Import paths, already deduplicated and sorted
    pub imports: Vec<String>,
    pub functions: Vec<GoFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoFunction {
    pub name: String,
    pub params: Vec<GoParam>,
    pub result: Option<GoType>,
    pub body: Vec<GoStmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoParam {
    pub name: String,
    pub ty: GoType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoType {
    Int,
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::Int => write!(f, "int"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GoStmt {
    /// `name := value`
    ShortVarDecl { name: String, value: GoExpr },
    /// `var name ty`
    VarDecl { name: String, ty: GoType },
    /// `target op value`
    Assign {
        target: String,
        op: AssignOp,
        value: GoExpr,
    },
    /// `target++` / `target--`
    IncDec { target: String, op: UnaryOp },
    Expr(GoExpr),
    If {
        condition: GoExpr,
        then_body: Vec<GoStmt>,
        else_branch: Option<GoElse>,
    },
    /// Condition-only `for` loop
    For { condition: GoExpr, body: Vec<GoStmt> },
    Return(Option<GoExpr>),
    Block(Vec<GoStmt>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GoElse {
    Block(Vec<GoStmt>),
    /// Always a `GoStmt::If`
    If(Box<GoStmt>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GoExpr {
    IntLiteral(i64),
    Ident(String),
    /// `package.Name`
    Selector { package: String, name: String },
    Binary {
        op: BinaryOp,
        left: Box<GoExpr>,
        right: Box<GoExpr>,
    },
    /// Prefix operator; Go has no prefix `++`/`--`, only `-` appears here
    Unary { op: UnaryOp, operand: Box<GoExpr> },
    Call {
        function: Box<GoExpr>,
        arguments: Vec<GoExpr>,
    },
}

impl GoExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        GoExpr::Ident(name.into())
    }

    pub fn selector(package: impl Into<String>, name: impl Into<String>) -> Self {
        GoExpr::Selector {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn call(function: GoExpr, arguments: Vec<GoExpr>) -> Self {
        GoExpr::Call {
            function: Box::new(function),
            arguments,
        }
    }
}
