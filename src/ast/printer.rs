//! Pretty printer producing source text the parser accepts.
//!
//! `Display` on [`Expr`] prints the node as a statement (a `line` of the
//! grammar), so a printed statement list parses back with
//! `parse_statements`, and a printed [`Program`] with `parse_program`.
//! Binary operands are parenthesised only when precedence or left
//! associativity requires it.

use std::fmt::{self, Display, Write};

use crate::{parser::lookups::BindingPower, stack::ensure_sufficient_stack};

use super::ast::{Expr, Operator, Program, TopLevel};

const INDENT: &str = "  ";

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, self, 0)
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopLevel::Global(global) => {
                write!(f, "global {} = ", global.identifier)?;
                write_expr(f, &global.assigned_value, BindingPower::Default)?;
                f.write_char(';')
            }
            TopLevel::Function(function) => {
                write!(
                    f,
                    "define {}({}) ",
                    function.identifier,
                    function.parameters.join(", ")
                )?;
                write_line(f, &function.body, 0)
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            writeln!(f, "{}", definition)?;
        }
        Ok(())
    }
}

/// Writes `expr` in expression position, wrapping it in parentheses when it
/// binds looser than `min_bp`.
fn write_expr(f: &mut impl Write, expr: &Expr, min_bp: BindingPower) -> fmt::Result {
    ensure_sufficient_stack(|| -> fmt::Result {
        match expr {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Symbol(symbol) => f.write_str(&symbol.value),
            Expr::Binary(binary) => {
                let bp = binary.operator.binding_power();
                let parenthesise = bp < min_bp;
                if parenthesise {
                    f.write_char('(')?;
                }
                write_expr(f, &binary.left, bp)?;
                write!(f, " {} ", binary.operator)?;
                write_expr(f, &binary.right, bp.next())?;
                if parenthesise {
                    f.write_char(')')?;
                }
                Ok(())
            }
            Expr::Call(call) => {
                write!(f, "{}(", call.callee)?;
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_expr(f, argument, BindingPower::Default)?;
                }
                f.write_char(')')
            }
            Expr::LabelledCall(call) => {
                write!(f, "{}[", call.callee)?;
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = ", argument.label)?;
                    write_expr(f, &argument.value, BindingPower::Default)?;
                }
                f.write_char(']')
            }
            // Statement forms have no expression syntax.
            Expr::Assignment(_) | Expr::Block(_) | Expr::If(_) | Expr::While(_) | Expr::Println(_) => {
                write_line(f, expr, 0)
            }
        }
    })
}

/// Writes `expr` as a statement. `depth` is the nesting level of the
/// enclosing block, used to indent nested block bodies.
fn write_line(f: &mut impl Write, expr: &Expr, depth: usize) -> fmt::Result {
    ensure_sufficient_stack(|| -> fmt::Result {
        match expr {
            Expr::Println(println) => {
                f.write_str("println(")?;
                write_expr(f, &println.argument, BindingPower::Default)?;
                f.write_str(");")
            }
            Expr::While(while_expr) => {
                f.write_str("while(")?;
                write_expr(f, &while_expr.condition, BindingPower::Default)?;
                f.write_str(") ")?;
                write_line(f, &while_expr.body, depth)
            }
            Expr::If(if_expr) => {
                f.write_str("if(")?;
                write_expr(f, &if_expr.condition, BindingPower::Default)?;
                f.write_str(") ")?;
                write_line(f, &if_expr.then_body, depth)?;
                if let Some(else_body) = &if_expr.else_body {
                    f.write_str(" else ")?;
                    write_line(f, else_body, depth)?;
                }
                Ok(())
            }
            Expr::Assignment(assignment) => {
                write!(f, "{} = ", assignment.assignee)?;
                write_expr(f, &assignment.value, BindingPower::Default)?;
                f.write_char(';')
            }
            Expr::Block(block) => {
                if block.body.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{\n")?;
                for line in &block.body {
                    f.write_str(&INDENT.repeat(depth + 1))?;
                    write_line(f, line, depth + 1)?;
                    f.write_char('\n')?;
                }
                f.write_str(&INDENT.repeat(depth))?;
                f.write_char('}')
            }
            Expr::Number(_)
            | Expr::Symbol(_)
            | Expr::Binary(_)
            | Expr::Call(_)
            | Expr::LabelledCall(_) => {
                write_expr(f, expr, BindingPower::Default)?;
                f.write_char(';')
            }
        }
    })
}
