use std::rc::Rc;

use crate::{lexer::tokens::TokenKind, parser::lookups::BindingPower, stack::ensure_sufficient_stack};

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, BlockExpr, CallExpr, IfExpr, LabelledCallExpr, NumberExpr,
        PrintlnExpr, SymbolExpr, WhileExpr,
    },
    statements::{FnDeclStmt, GlobalDeclStmt},
};

/// Binary operators, already normalised from their source tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl Operator {
    /// Returns the operator a token stands for, if it is a binary operator at all.
    pub fn from_token(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Dash => Some(Operator::Subtract),
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            TokenKind::Less => Some(Operator::Less),
            TokenKind::LessEquals => Some(Operator::LessEquals),
            TokenKind::Greater => Some(Operator::Greater),
            TokenKind::GreaterEquals => Some(Operator::GreaterEquals),
            TokenKind::Equals => Some(Operator::Equals),
            TokenKind::NotEquals => Some(Operator::NotEquals),
            _ => None,
        }
    }

    pub fn binding_power(&self) -> BindingPower {
        match self {
            Operator::Add | Operator::Subtract => BindingPower::Additive,
            Operator::Multiply | Operator::Divide => BindingPower::Multiplicative,
            Operator::Less
            | Operator::LessEquals
            | Operator::Greater
            | Operator::GreaterEquals
            | Operator::Equals
            | Operator::NotEquals => BindingPower::Relational,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Less => "<",
            Operator::LessEquals => "<=",
            Operator::Greater => ">",
            Operator::GreaterEquals => ">=",
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
        }
    }
}

/// Expression
///
/// Every node evaluates to exactly one integer. Nodes own their children;
/// the tree is never shared or mutated after parsing.
///
/// A long operator chain nests as deep as it is long, so `Clone` and
/// `PartialEq` grow the stack as they recurse and `Drop` does not recurse at all.
#[derive(Debug)]
pub enum Expr {
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Block(BlockExpr),
    If(IfExpr),
    While(WhileExpr),
    Call(CallExpr),
    LabelledCall(LabelledCallExpr),
    Println(PrintlnExpr),
}

impl Expr {
    /// Moves every direct child of this node into `out`, leaving cheap
    /// placeholders behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        fn take(slot: &mut Expr) -> Expr {
            std::mem::replace(slot, Expr::Number(NumberExpr { value: 0 }))
        }

        match self {
            Expr::Number(_) | Expr::Symbol(_) => {}
            Expr::Assignment(assignment) => out.push(take(&mut assignment.value)),
            Expr::Binary(binary) => {
                out.push(take(&mut binary.left));
                out.push(take(&mut binary.right));
            }
            Expr::Block(block) => out.append(&mut block.body),
            Expr::If(if_expr) => {
                out.push(take(&mut if_expr.condition));
                out.push(take(&mut if_expr.then_body));
                if let Some(else_body) = if_expr.else_body.take() {
                    out.push(*else_body);
                }
            }
            Expr::While(while_expr) => {
                out.push(take(&mut while_expr.condition));
                out.push(take(&mut while_expr.body));
            }
            Expr::Call(call) => out.append(&mut call.arguments),
            Expr::LabelledCall(call) => {
                out.extend(call.arguments.iter_mut().map(|argument| take(&mut argument.value)))
            }
            Expr::Println(println) => out.push(take(&mut println.argument)),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Number(number) => Expr::Number(number.clone()),
            Expr::Symbol(symbol) => Expr::Symbol(symbol.clone()),
            Expr::Assignment(assignment) => Expr::Assignment(assignment.clone()),
            Expr::Binary(binary) => Expr::Binary(binary.clone()),
            Expr::Block(block) => Expr::Block(block.clone()),
            Expr::If(if_expr) => Expr::If(if_expr.clone()),
            Expr::While(while_expr) => Expr::While(while_expr.clone()),
            Expr::Call(call) => Expr::Call(call.clone()),
            Expr::LabelledCall(call) => Expr::LabelledCall(call.clone()),
            Expr::Println(println) => Expr::Println(println.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Number(a), Expr::Number(b)) => a == b,
            (Expr::Symbol(a), Expr::Symbol(b)) => a == b,
            (Expr::Assignment(a), Expr::Assignment(b)) => a == b,
            (Expr::Binary(a), Expr::Binary(b)) => a == b,
            (Expr::Block(a), Expr::Block(b)) => a == b,
            (Expr::If(a), Expr::If(b)) => a == b,
            (Expr::While(a), Expr::While(b)) => a == b,
            (Expr::Call(a), Expr::Call(b)) => a == b,
            (Expr::LabelledCall(a), Expr::LabelledCall(b)) => a == b,
            (Expr::Println(a), Expr::Println(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for Expr {}

/// A definition outside of any function body.
///
/// Function definitions are shared with the interpreter's function table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    Global(GlobalDeclStmt),
    Function(Rc<FnDeclStmt>),
}

impl TopLevel {
    pub fn name(&self) -> &str {
        match self {
            TopLevel::Global(global) => &global.identifier,
            TopLevel::Function(function) => &function.identifier,
        }
    }
}

/// Top-level definitions in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub definitions: Vec<TopLevel>,
}

impl Program {
    pub fn new(definitions: Vec<TopLevel>) -> Self {
        Program { definitions }
    }
}
