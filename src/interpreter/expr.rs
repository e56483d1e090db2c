use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        ast::{Expr, Operator},
        expressions::LabelledArgument,
        statements::FnDeclStmt,
    },
    errors::errors::{Error, ErrorImpl},
    stack::ensure_sufficient_stack,
};

use super::interpreter::Interpreter;

/// Evaluates an expression in the interpreter's current frame.
pub fn eval_expression(interpreter: &mut Interpreter, expression: &Expr) -> Result<i64, Error> {
    ensure_sufficient_stack(|| -> Result<i64, Error> {
        match expression {
            Expr::Number(number) => Ok(number.value),
            Expr::Symbol(symbol) => interpreter
                .environment
                .lookup(&symbol.value)
                .ok_or_else(|| {
                    Error::runtime(ErrorImpl::UnboundName {
                        name: symbol.value.clone(),
                    })
                }),
            Expr::Assignment(assignment) => {
                let value = eval_expression(interpreter, &assignment.value)?;
                interpreter
                    .environment
                    .assign(&assignment.assignee, value);
                Ok(value)
            }
            Expr::Binary(binary) => {
                let left = eval_expression(interpreter, &binary.left)?;
                let right = eval_expression(interpreter, &binary.right)?;
                apply_operator(binary.operator, left, right)
            }
            Expr::Block(block) => {
                let mut value = 0;
                for expr in &block.body {
                    value = eval_expression(interpreter, expr)?;
                }
                Ok(value)
            }
            Expr::If(if_expr) => {
                if eval_expression(interpreter, &if_expr.condition)? != 0 {
                    eval_expression(interpreter, &if_expr.then_body)
                } else if let Some(else_body) = &if_expr.else_body {
                    eval_expression(interpreter, else_body)
                } else {
                    Ok(1)
                }
            }
            Expr::While(while_expr) => {
                while eval_expression(interpreter, &while_expr.condition)? != 0 {
                    eval_expression(interpreter, &while_expr.body)?;
                }
                Ok(1)
            }
            Expr::Call(call) => {
                let function = resolve_function(interpreter, &call.callee)?;

                if function.arity() != call.arguments.len() {
                    return Err(Error::runtime(ErrorImpl::Arity {
                        function: call.callee.clone(),
                        expected: function.arity(),
                        received: call.arguments.len(),
                    }));
                }

                let mut bindings = HashMap::with_capacity(function.arity());
                for (parameter, argument) in function.parameters.iter().zip(&call.arguments) {
                    let value = eval_expression(interpreter, argument)?;
                    bindings.insert(parameter.clone(), value);
                }

                call_function(interpreter, &function, bindings)
            }
            Expr::LabelledCall(call) => {
                let function = resolve_function(interpreter, &call.callee)?;
                let arguments = match_labels(&function, &call.arguments)?;

                let mut bindings = HashMap::with_capacity(function.arity());
                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    let value = eval_expression(interpreter, argument)?;
                    bindings.insert(parameter.clone(), value);
                }

                call_function(interpreter, &function, bindings)
            }
            Expr::Println(println) => {
                let value = eval_expression(interpreter, &println.argument)?;
                interpreter.output.println(value);
                Ok(value)
            }
        }
    })
}

/// Applies a binary operator. Comparisons yield `1` or `0`.
pub fn apply_operator(operator: Operator, left: i64, right: i64) -> Result<i64, Error> {
    let value = match operator {
        Operator::Add => left.wrapping_add(right),
        Operator::Subtract => left.wrapping_sub(right),
        Operator::Multiply => left.wrapping_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(Error::runtime(ErrorImpl::DivisionByZero));
            }
            left.wrapping_div(right)
        }
        Operator::Less => (left < right) as i64,
        Operator::LessEquals => (left <= right) as i64,
        Operator::Greater => (left > right) as i64,
        Operator::GreaterEquals => (left >= right) as i64,
        Operator::Equals => (left == right) as i64,
        Operator::NotEquals => (left != right) as i64,
    };

    Ok(value)
}

fn resolve_function(interpreter: &Interpreter, name: &str) -> Result<Rc<FnDeclStmt>, Error> {
    interpreter.get_function(name).ok_or_else(|| {
        Error::runtime(ErrorImpl::UndefinedFunction {
            function: name.to_string(),
        })
    })
}

/// Orders labelled arguments by parameter declaration.
///
/// Every label must name a parameter, appear once, and every parameter must
/// be given.
fn match_labels<'a>(
    function: &FnDeclStmt,
    arguments: &'a [LabelledArgument],
) -> Result<Vec<&'a Expr>, Error> {
    let mut by_label: HashMap<&str, &'a Expr> = HashMap::with_capacity(arguments.len());

    for argument in arguments {
        if !function.parameters.contains(&argument.label) {
            return Err(Error::runtime(ErrorImpl::UnknownLabel {
                function: function.identifier.clone(),
                label: argument.label.clone(),
            }));
        }

        if by_label.insert(&argument.label, &argument.value).is_some() {
            return Err(Error::runtime(ErrorImpl::DuplicateLabel {
                function: function.identifier.clone(),
                label: argument.label.clone(),
            }));
        }
    }

    function
        .parameters
        .iter()
        .map(|parameter| {
            by_label.get(parameter.as_str()).copied().ok_or_else(|| {
                Error::runtime(ErrorImpl::MissingLabel {
                    function: function.identifier.clone(),
                    label: parameter.clone(),
                })
            })
        })
        .collect()
}

/// Runs `function`'s body in a fresh frame holding `bindings`.
///
/// The new frame's parent is the caller's current frame, so the callee can read
/// and assign the caller's locals. The frame is popped whether or not the
/// body succeeds.
fn call_function(
    interpreter: &mut Interpreter,
    function: &FnDeclStmt,
    bindings: HashMap<String, i64>,
) -> Result<i64, Error> {
    if interpreter.environment.depth() >= interpreter.max_call_depth {
        return Err(Error::runtime(ErrorImpl::StackExhausted {
            depth: interpreter.max_call_depth,
        }));
    }

    let caller = interpreter.environment.push_frame(bindings);

    tracing::debug!(
        name = %function.identifier,
        depth = interpreter.environment.depth(),
        "calling function"
    );

    let result = eval_expression(interpreter, &function.body);
    interpreter.environment.pop_frame(caller);

    result
}
