//! Expression nodes and the helpers that build them.
//!
//! The parser goes through these helpers too, so desugared constructs such as
//! `for` loops produce exactly the trees a hand-built AST would.

use super::ast::{Expr, Operator};

// LITERALS

/// Integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: i64,
}

/// Variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// `name = value`. Updates the innermost frame that already binds `name`,
/// otherwise creates the binding in the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentExpr {
    pub assignee: String,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExpr {
    pub body: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_body: Box<Expr>,
    pub else_body: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileExpr {
    pub condition: Box<Expr>,
    pub body: Box<Expr>,
}

/// Positional call, `name(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}

/// One `label = value` pair of a labelled call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledArgument {
    pub label: String,
    pub value: Expr,
}

/// Call by parameter name, `name[b = 1, a = 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledCallExpr {
    pub callee: String,
    pub arguments: Vec<LabelledArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintlnExpr {
    pub argument: Box<Expr>,
}

pub fn number(value: i64) -> Expr {
    Expr::Number(NumberExpr { value })
}

pub fn symbol(name: impl Into<String>) -> Expr {
    Expr::Symbol(SymbolExpr { value: name.into() })
}

pub fn assignment(name: impl Into<String>, value: Expr) -> Expr {
    Expr::Assignment(AssignmentExpr {
        assignee: name.into(),
        value: Box::new(value),
    })
}

pub fn binary(operator: Operator, left: Expr, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn add(left: Expr, right: Expr) -> Expr {
    binary(Operator::Add, left, right)
}

pub fn subtract(left: Expr, right: Expr) -> Expr {
    binary(Operator::Subtract, left, right)
}

pub fn multiply(left: Expr, right: Expr) -> Expr {
    binary(Operator::Multiply, left, right)
}

pub fn divide(left: Expr, right: Expr) -> Expr {
    binary(Operator::Divide, left, right)
}

pub fn less(left: Expr, right: Expr) -> Expr {
    binary(Operator::Less, left, right)
}

pub fn less_equals(left: Expr, right: Expr) -> Expr {
    binary(Operator::LessEquals, left, right)
}

pub fn greater(left: Expr, right: Expr) -> Expr {
    binary(Operator::Greater, left, right)
}

pub fn greater_equals(left: Expr, right: Expr) -> Expr {
    binary(Operator::GreaterEquals, left, right)
}

pub fn equals(left: Expr, right: Expr) -> Expr {
    binary(Operator::Equals, left, right)
}

pub fn not_equals(left: Expr, right: Expr) -> Expr {
    binary(Operator::NotEquals, left, right)
}

pub fn block(body: Vec<Expr>) -> Expr {
    Expr::Block(BlockExpr { body })
}

pub fn if_expr(condition: Expr, then_body: Expr, else_body: Option<Expr>) -> Expr {
    Expr::If(IfExpr {
        condition: Box::new(condition),
        then_body: Box::new(then_body),
        else_body: else_body.map(Box::new),
    })
}

pub fn while_expr(condition: Expr, body: Expr) -> Expr {
    Expr::While(WhileExpr {
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        callee: name.into(),
        arguments,
    })
}

pub fn labelled_call(name: impl Into<String>, arguments: Vec<(&str, Expr)>) -> Expr {
    Expr::LabelledCall(LabelledCallExpr {
        callee: name.into(),
        arguments: arguments
            .into_iter()
            .map(|(label, value)| LabelledArgument {
                label: label.to_string(),
                value,
            })
            .collect(),
    })
}

pub fn println(argument: Expr) -> Expr {
    Expr::Println(PrintlnExpr {
        argument: Box::new(argument),
    })
}

/// `for(name in start to end) body`, rewritten into
/// `{ name = start; while(name < end) { body; name = name + 1; } }`.
pub fn for_in(name: &str, start: Expr, end: Expr, body: Expr) -> Expr {
    block(vec![
        assignment(name, start),
        while_expr(
            less(symbol(name), end),
            block(vec![body, assignment(name, add(symbol(name), number(1)))]),
        ),
    ])
}
