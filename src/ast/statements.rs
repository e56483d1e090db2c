use std::rc::Rc;

use super::ast::{Expr, TopLevel};

/// `global name = value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalDeclStmt {
    pub identifier: String,
    pub assigned_value: Expr,
}

/// `define name(a, b) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<String>,
    pub body: Expr,
}

impl FnDeclStmt {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

pub fn define_global(name: impl Into<String>, assigned_value: Expr) -> TopLevel {
    TopLevel::Global(GlobalDeclStmt {
        identifier: name.into(),
        assigned_value,
    })
}

pub fn define_function(name: impl Into<String>, parameters: &[&str], body: Expr) -> TopLevel {
    TopLevel::Function(Rc::new(FnDeclStmt {
        identifier: name.into(),
        parameters: parameters.iter().map(|parameter| parameter.to_string()).collect(),
        body,
    }))
}
