use std::rc::Rc;

use crate::{ast::ast::TopLevel, errors::errors::Error};

use super::{expr::eval_expression, interpreter::Interpreter};

/// Registers one top-level definition.
///
/// Functions go into the function table; global initializers are evaluated
/// and bound in the global frame. A later definition with the same name
/// replaces an earlier one.
pub fn register_definition(
    interpreter: &mut Interpreter,
    definition: &TopLevel,
) -> Result<(), Error> {
    match definition {
        TopLevel::Function(function) => {
            tracing::debug!(
                name = %function.identifier,
                arity = function.arity(),
                "registered function"
            );

            interpreter
                .functions
                .insert(function.identifier.clone(), Rc::clone(function));
        }
        TopLevel::Global(global) => {
            let value = eval_expression(interpreter, &global.assigned_value)?;

            tracing::debug!(name = %global.identifier, value, "defined global");

            interpreter
                .environment
                .define_global(&global.identifier, value);
        }
    }

    Ok(())
}
