//! Canonical Go layout
//!
//! One tab per nesting level, opening braces on the declaration line, one
//! blank line between top-level declarations and no trailing newline.
//! Parentheses are emitted only where operator precedence needs them.

use crate::go_ast::*;
use remix_frontend::UnaryOp;
use std::fmt;

/// Render a whole file
pub fn print_file(file: &GoFile) -> String {
    let mut sections = vec![format!("package {}", file.package)];

    if !file.imports.is_empty() {
        let mut block = String::from("import (\n");
        for path in &file.imports {
            block.push_str(&format!("\t\"{}\"\n", path));
        }
        block.push(')');
        sections.push(block);
    }

    for function in &file.functions {
        sections.push(print_function(function));
    }

    sections.join("\n\n")
}

/// Render one function declaration
pub fn print_function(function: &GoFunction) -> String {
    let params = function
        .params
        .iter()
        .map(|p| format!("{} {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ");

    let mut printer = Printer::new();
    printer.out.push_str(&format!("func {}({})", function.name, params));
    if let Some(result) = function.result {
        printer.out.push_str(&format!(" {}", result));
    }
    printer.out.push_str(" {\n");

    if function.body.is_empty() {
        // An empty function body keeps one blank line
        printer.out.push('\n');
    } else {
        printer.indent = 1;
        printer.statements(&function.body);
    }

    printer.out.push('}');
    printer.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line_start(&mut self) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
    }

    /// Each statement on its own line at the current depth
    fn statements(&mut self, statements: &[GoStmt]) {
        for statement in statements {
            self.line_start();
            self.statement(statement);
            self.out.push('\n');
        }
    }

    /// `{`, the statements one level deeper, then `}` at the current depth
    fn block(&mut self, statements: &[GoStmt]) {
        self.out.push_str("{\n");
        self.indent += 1;
        self.statements(statements);
        self.indent -= 1;
        self.line_start();
        self.out.push('}');
    }

    fn statement(&mut self, statement: &GoStmt) {
        match statement {
            GoStmt::ShortVarDecl { name, value } => {
                self.out.push_str(&format!("{} := {}", name, value));
            }
            GoStmt::VarDecl { name, ty } => {
                self.out.push_str(&format!("var {} {}", name, ty));
            }
            GoStmt::Assign { target, op, value } => {
                self.out.push_str(&format!("{} {} {}", target, op, value));
            }
            GoStmt::IncDec { target, op } => {
                self.out.push_str(&format!("{}{}", target, op));
            }
            GoStmt::Expr(expr) => self.out.push_str(&expr.to_string()),
            GoStmt::If { condition, then_body, else_branch } => {
                self.if_statement(condition, then_body, else_branch.as_ref());
            }
            GoStmt::For { condition, body } => {
                self.out.push_str(&format!("for {} ", condition));
                self.block(body);
            }
            GoStmt::Return(Some(value)) => self.out.push_str(&format!("return {}", value)),
            GoStmt::Return(None) => self.out.push_str("return"),
            GoStmt::Block(body) => self.block(body),
        }
    }

    fn if_statement(&mut self, condition: &GoExpr, then_body: &[GoStmt], else_branch: Option<&GoElse>) {
        self.out.push_str(&format!("if {} ", condition));
        self.block(then_body);

        match else_branch {
            Some(GoElse::Block(body)) => {
                self.out.push_str(" else ");
                self.block(body);
            }
            Some(GoElse::If(nested)) => {
                self.out.push_str(" else ");
                self.statement(nested);
            }
            None => {}
        }
    }
}

/// Binding strength of an expression; operands and calls bind tightest
fn precedence(expr: &GoExpr) -> u8 {
    match expr {
        GoExpr::Binary { op, .. } => op.precedence(),
        GoExpr::Unary { .. } => 4,
        GoExpr::IntLiteral(_) | GoExpr::Ident(_) | GoExpr::Selector { .. } | GoExpr::Call { .. } => 5,
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &GoExpr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for GoExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoExpr::IntLiteral(value) => write!(f, "{}", value),
            GoExpr::Ident(name) => write!(f, "{}", name),
            GoExpr::Selector { package, name } => write!(f, "{}.{}", package, name),
            GoExpr::Binary { op, left, right } => {
                // Every Go binary operator is left associative
                write_operand(f, left, precedence(left) < op.precedence())?;
                write!(f, " {} ", op)?;
                write_operand(f, right, precedence(right) <= op.precedence())
            }
            GoExpr::Unary { op, operand } => {
                write!(f, "{}", op)?;
                // `- -x` must not print as `--x`
                let nested_negation = matches!(**operand, GoExpr::Unary { op: UnaryOp::Negate, .. })
                    || matches!(**operand, GoExpr::IntLiteral(v) if v < 0);
                write_operand(f, operand, precedence(operand) < 4 || nested_negation)
            }
            GoExpr::Call { function, arguments } => {
                write!(f, "{}(", function)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
