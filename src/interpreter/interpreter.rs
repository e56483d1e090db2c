//! Main interpreter module.
//!
//! This module contains the Interpreter structure, which owns everything a
//! running program can observe: the frame chain, the function table, and the
//! output sink. Expressions are evaluated by [`eval_expression`], top-level
//! definitions are registered by [`register_definition`].

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        ast::{Expr, Program},
        statements::FnDeclStmt,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    environment::Environment, expr::eval_expression, output::Output,
    stmt::register_definition,
};

/// Default limit on nested calls before `StackExhausted` is raised.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Knobs for a single interpreter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of nested function calls.
    pub max_call_depth: usize,
    /// Where `println` writes.
    pub output: Output,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            output: Output::Stdout,
        }
    }
}

/// A tree-walking evaluator.
///
/// The interpreter keeps its state between calls, so statements evaluated one
/// by one (as in a REPL) see the bindings and functions left by earlier ones.
pub struct Interpreter {
    /// Frame chain, global frame first
    pub environment: Environment,
    /// Registered functions by name
    pub functions: HashMap<String, Rc<FnDeclStmt>>,
    /// Maximum number of nested calls
    pub max_call_depth: usize,
    /// Sink for `println`
    pub output: Output,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the default configuration, printing to stdout.
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Interpreter {
            environment: Environment::new(),
            functions: HashMap::new(),
            max_call_depth: config.max_call_depth,
            output: config.output,
        }
    }

    /// Evaluates `expr` in the current frame.
    pub fn interpret(&mut self, expr: &Expr) -> Result<i64, Error> {
        eval_expression(self, expr)
    }

    /// Evaluates one REPL statement.
    ///
    /// A failing statement leaves earlier bindings in place, so the session can
    /// carry on.
    pub fn interpret_one(&mut self, expr: &Expr) -> Result<i64, Error> {
        self.interpret(expr)
    }

    /// Registers every definition of `program` in order, then runs the body of
    /// `main` in the global frame and returns its value.
    pub fn run_program(&mut self, program: &Program) -> Result<i64, Error> {
        self.register(program)?;

        let main = match self.functions.get("main") {
            Some(main) if main.arity() == 0 => Rc::clone(main),
            _ => return Err(Error::runtime(ErrorImpl::MissingEntryPoint)),
        };

        tracing::debug!("running main");

        self.interpret(&main.body)
    }

    /// Registers functions and evaluates globals in order, without running `main`.
    pub fn register(&mut self, program: &Program) -> Result<(), Error> {
        for definition in &program.definitions {
            register_definition(self, definition)?;
        }
        Ok(())
    }

    /// Value bound to `name` in the global frame.
    pub fn get_value(&self, name: &str) -> Option<i64> {
        self.environment.global(name)
    }

    /// Looks up a registered function.
    pub fn get_function(&self, name: &str) -> Option<Rc<FnDeclStmt>> {
        self.functions.get(name).cloned()
    }

    /// Returns and clears the output captured by an [`Output::Buffer`] sink.
    pub fn take_output(&mut self) -> String {
        self.output.take()
    }
}
