//! Unit tests for the interpreter module.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Program,
        expressions::*,
        statements::{define_function, define_global},
    },
    errors::errors::ErrorImpl,
    parser::parser::{parse_program, parse_statements},
};

use super::{
    environment::Environment,
    expr::apply_operator,
    interpreter::{Interpreter, InterpreterConfig},
    output::Output,
};

fn buffered() -> Interpreter {
    Interpreter::with_config(InterpreterConfig {
        output: Output::buffer(),
        ..InterpreterConfig::default()
    })
}

/// Runs statements one by one in a fresh interpreter and returns it.
fn run_statements(source: &str) -> Interpreter {
    let mut interpreter = buffered();
    for statement in parse_statements(source, None).unwrap() {
        interpreter.interpret_one(&statement).unwrap();
    }
    interpreter
}

fn run_program(source: &str) -> Result<i64, crate::errors::errors::Error> {
    let program = parse_program(source, None)?;
    buffered().run_program(&program)
}

fn eval(source: &str) -> i64 {
    let mut interpreter = buffered();
    let mut value = 0;
    for statement in parse_statements(source, None).unwrap() {
        value = interpreter.interpret(&statement).unwrap();
    }
    value
}

#[test]
fn test_environment_lookup_walks_parents() {
    let mut environment = Environment::new();
    environment.assign("x", 1);

    let caller = environment.push_frame(HashMap::from([("y".to_string(), 2)]));
    assert_eq!(caller, 0);
    assert_eq!(environment.depth(), 1);
    assert_eq!(environment.lookup("x"), Some(1));
    assert_eq!(environment.lookup("y"), Some(2));
    assert_eq!(environment.find_binding("x"), Some(0));
    assert_eq!(environment.find_binding("y"), Some(1));
    assert_eq!(environment.lookup("z"), None);

    environment.pop_frame(caller);
    assert_eq!(environment.depth(), 0);
    assert_eq!(environment.lookup("y"), None);
}

#[test]
fn test_environment_assign_updates_where_bound() {
    let mut environment = Environment::new();
    environment.assign("x", 1);

    let caller = environment.push_frame(HashMap::new());
    environment.assign("x", 5);
    environment.assign("fresh", 7);
    assert_eq!(environment.current_bindings().get("fresh"), Some(&7));
    assert!(!environment.current_bindings().contains_key("x"));
    environment.pop_frame(caller);

    assert_eq!(environment.global("x"), Some(5));
    assert_eq!(environment.global("fresh"), None);
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval("(1 - 2 * 3) + 4;"), -1);
    assert_eq!(eval("7 / 2;"), 3);
    assert_eq!(eval("0 - 7 / 2;"), -3);
    assert_eq!(eval("(0 - 7) / 2;"), -3);
    assert_eq!(eval("10 - 4 - 3;"), 3);
}

#[test]
fn test_arithmetic_wraps() {
    assert_eq!(
        apply_operator(crate::ast::ast::Operator::Add, i64::MAX, 1).unwrap(),
        i64::MIN
    );
    assert_eq!(
        apply_operator(crate::ast::ast::Operator::Divide, i64::MIN, -1).unwrap(),
        i64::MIN
    );
}

#[test]
fn test_comparisons_yield_zero_or_one() {
    assert_eq!(eval("1 < 2;"), 1);
    assert_eq!(eval("2 < 1;"), 0);
    assert_eq!(eval("2 <= 2;"), 1);
    assert_eq!(eval("3 > 2;"), 1);
    assert_eq!(eval("2 >= 3;"), 0);
    assert_eq!(eval("4 == 4;"), 1);
    assert_eq!(eval("4 != 4;"), 0);
    assert_eq!(eval("4 != 5;"), 1);
}

#[test]
fn test_division_by_zero() {
    let mut interpreter = buffered();
    let error = interpreter.interpret(&divide(number(1), number(0))).unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_error_name(), "ArithmeticError");
    assert!(error.get_position().is_null());
}

#[test]
fn test_if_values() {
    assert_eq!(eval("if(0) 5; else 7;"), 7);
    assert_eq!(eval("if(1) 5;"), 5);
    assert_eq!(eval("if(0) 5;"), 1);
    assert_eq!(eval("if(0 - 3) 5; else 7;"), 5);
}

#[test]
fn test_while_with_false_condition_never_runs() {
    let mut interpreter = run_statements("x = 3; while(0) x = 99;");

    assert_eq!(interpreter.get_value("x"), Some(3));
    assert_eq!(interpreter.interpret(&while_expr(number(0), number(5))).unwrap(), 1);
}

#[test]
fn test_block_values() {
    assert_eq!(eval("{}"), 0);
    assert_eq!(eval("{ 1; 2; 3; }"), 3);
}

#[test]
fn test_while_loop_counts_to_ten() {
    let interpreter = run_statements("i = 0; while(i < 10) { i = i + 1; }");

    assert_eq!(interpreter.get_value("i"), Some(10));
}

#[test]
fn test_for_loop_steps_twice_per_iteration() {
    let interpreter = run_statements("for(i in 1 to 10) { i = i + 1; }");

    assert_eq!(interpreter.get_value("i"), Some(11));
}

#[test]
fn test_assignment_returns_value() {
    assert_eq!(eval("x = 4 * 5;"), 20);
}

#[test]
fn test_unbound_name() {
    let mut interpreter = buffered();
    let error = interpreter.interpret(&symbol("missing")).unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnboundName {
            name: "missing".to_string()
        }
    );
}

#[test]
fn test_factorial() {
    let source = "define fact(n){ if(n<2){1;}else{n*fact(n-1);} } define main(){ fact(5); }";

    assert_eq!(run_program(source).unwrap(), 120);
}

#[test]
fn test_labelled_call() {
    let source = "define power(n){ n*n; } define main(){ power[n=5]; }";

    assert_eq!(run_program(source).unwrap(), 25);
}

#[test]
fn test_labelled_call_orders_by_parameter() {
    let source = "define sub(a, b){ a - b; } define main(){ sub[b=1, a=10]; }";

    assert_eq!(run_program(source).unwrap(), 9);
}

#[test]
fn test_labelled_call_label_errors() {
    let missing = run_program("define f(a, b){ a; } define main(){ f[a=1]; }").unwrap_err();
    assert_eq!(
        missing.get_error_impl(),
        &ErrorImpl::MissingLabel {
            function: "f".to_string(),
            label: "b".to_string()
        }
    );

    let unknown = run_program("define f(a){ a; } define main(){ f[a=1, c=2]; }").unwrap_err();
    assert_eq!(unknown.get_error_name(), "UnknownLabelError");

    let duplicate = run_program("define f(a){ a; } define main(){ f[a=1, a=2]; }").unwrap_err();
    assert_eq!(duplicate.get_error_name(), "DuplicateLabelError");
}

#[test]
fn test_undefined_function() {
    let error = run_program("define main(){ nope(1); }").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UndefinedFunction {
            function: "nope".to_string()
        }
    );
}

#[test]
fn test_arity_mismatch() {
    let error = run_program("define f(a){ a; } define main(){ f(1, 2); }").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::Arity {
            function: "f".to_string(),
            expected: 1,
            received: 2
        }
    );
}

#[test]
fn test_missing_entry_point() {
    let error = run_program("define helper(){ 1; }").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::MissingEntryPoint);

    let error = run_program("define main(x){ x; }").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::MissingEntryPoint);

    let error = run_program("").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::MissingEntryPoint);
}

#[test]
fn test_callee_assigns_caller_locals() {
    let source = "
        define bump() { counter = counter + 1; }
        define run() { counter = 0; bump(); bump(); counter; }
        define main() { run(); }
    ";

    assert_eq!(run_program(source).unwrap(), 2);
}

#[test]
fn test_callee_locals_do_not_leak() {
    let source = "
        define set() { local = 5; }
        define main() { set(); local; }
    ";
    let error = run_program(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnboundNameError");
}

#[test]
fn test_parameters_shadow_caller() {
    let source = "
        define f(x) { x = x + 100; x; }
        define main() { x = 1; f(2) + x; }
    ";

    assert_eq!(run_program(source).unwrap(), 103);
}

#[test]
fn test_globals_and_redefinition() {
    let program = Program::new(vec![
        define_global("a", number(2)),
        define_global("b", multiply(symbol("a"), number(10))),
        define_function("main", &[], block(vec![number(1)])),
        define_function("main", &[], block(vec![add(symbol("a"), symbol("b"))])),
    ]);
    let mut interpreter = buffered();

    assert_eq!(interpreter.run_program(&program).unwrap(), 22);
    assert_eq!(interpreter.get_value("b"), Some(20));
}

#[test]
fn test_global_cannot_see_later_definition() {
    let error = run_program("global a = b; global b = 1; define main(){ a; }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnboundNameError");
}

#[test]
fn test_println_output() {
    let mut interpreter = run_statements("i = 0; while(i < 3) { println(i); i = i + 1; }");

    assert_eq!(interpreter.take_output(), "0\n1\n2\n");
    assert_eq!(interpreter.take_output(), "");
    assert_eq!(interpreter.interpret(&println(number(9))).unwrap(), 9);
    assert_eq!(interpreter.take_output(), "9\n");
}

#[test]
fn test_non_capturing_outputs() {
    for output in [Output::Stdout, Output::Silent] {
        let mut interpreter = Interpreter::with_config(InterpreterConfig {
            output,
            ..InterpreterConfig::default()
        });

        assert_eq!(interpreter.interpret(&println(number(4))).unwrap(), 4);
        assert_eq!(interpreter.take_output(), "");
    }

    let mut output = Output::buffer();
    output.println(-3);
    output.println(i64::MAX);
    assert_eq!(output.take(), format!("-3\n{}\n", i64::MAX));
    assert_eq!(output, Output::buffer());
}

#[test]
fn test_stack_exhausted() {
    let program = parse_program("define loop(n){ loop(n + 1); } define main(){ loop(0); }", None)
        .unwrap();
    let mut interpreter = Interpreter::with_config(InterpreterConfig {
        max_call_depth: 100,
        output: Output::Silent,
    });
    let error = interpreter.run_program(&program).unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::StackExhausted { depth: 100 });
    assert_eq!(interpreter.environment.depth(), 0);
}

#[test]
fn test_frames_popped_after_failure() {
    let mut interpreter = buffered();
    let program = parse_program("define bad(){ 1 / 0; } define main(){ 0; }", None).unwrap();
    interpreter.run_program(&program).unwrap();

    assert!(interpreter.interpret(&call("bad", vec![])).is_err());
    assert_eq!(interpreter.environment.depth(), 0);

    interpreter.interpret(&assignment("y", number(3))).unwrap();
    assert_eq!(interpreter.get_value("y"), Some(3));
}

#[test]
fn test_deep_recursion_within_limit() {
    let source = "
        define sum(n) { if(n == 0) { 0; } else { n + sum(n - 1); } }
        define main() { sum(5000); }
    ";

    assert_eq!(run_program(source).unwrap(), 12_502_500);
}

#[test]
fn test_long_sum_chain() {
    let terms = 200_000;
    let source = format!("define main() {{ {}1; }}", "1 + ".repeat(terms));
    let program = parse_program(&source, None).unwrap();

    let mut interpreter = buffered();
    assert_eq!(interpreter.run_program(&program).unwrap(), terms as i64 + 1);

    drop(program);
    drop(interpreter);
}
