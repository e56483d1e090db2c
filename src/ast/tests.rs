//! Unit tests for the AST module.

use pretty_assertions::assert_eq;

use super::{
    ast::{Expr, Operator, Program, TopLevel},
    expressions::*,
    statements::{define_function, define_global},
};
use crate::{
    lexer::tokens::TokenKind,
    parser::parser::{parse_program, parse_statements},
};

#[test]
fn test_operator_from_token() {
    assert_eq!(Operator::from_token(TokenKind::Plus), Some(Operator::Add));
    assert_eq!(Operator::from_token(TokenKind::Slash), Some(Operator::Divide));
    assert_eq!(
        Operator::from_token(TokenKind::NotEquals),
        Some(Operator::NotEquals)
    );
    assert_eq!(
        Operator::from_token(TokenKind::GreaterEquals),
        Some(Operator::GreaterEquals)
    );
    assert_eq!(Operator::from_token(TokenKind::Assignment), None);
    assert_eq!(Operator::from_token(TokenKind::Semicolon), None);
}

#[test]
fn test_for_in_shape() {
    let desugared = for_in("i", number(1), symbol("n"), println(symbol("i")));

    let Expr::Block(outer) = &desugared else {
        panic!("expected a block, got {:?}", desugared);
    };
    assert_eq!(outer.body[0], assignment("i", number(1)));
    assert_eq!(
        outer.body[1],
        while_expr(
            less(symbol("i"), symbol("n")),
            block(vec![
                println(symbol("i")),
                assignment("i", add(symbol("i"), number(1))),
            ])
        )
    );
}

#[test]
fn test_top_level_name_and_arity() {
    let function = define_function("add", &["a", "b"], block(vec![]));
    assert_eq!(function.name(), "add");
    let TopLevel::Function(function) = function else {
        panic!("expected a function");
    };
    assert_eq!(function.arity(), 2);

    assert_eq!(define_global("limit", number(3)).name(), "limit");
}

#[test]
fn test_print_minimal_parentheses() {
    let expr = multiply(add(number(1), number(2)), number(3));
    assert_eq!(expr.to_string(), "(1 + 2) * 3;");

    let expr = add(number(1), multiply(number(2), number(3)));
    assert_eq!(expr.to_string(), "1 + 2 * 3;");

    let expr = subtract(number(10), subtract(number(4), number(3)));
    assert_eq!(expr.to_string(), "10 - (4 - 3);");

    let expr = subtract(subtract(number(10), number(4)), number(3));
    assert_eq!(expr.to_string(), "10 - 4 - 3;");

    let expr = less(symbol("a"), less(symbol("b"), symbol("c")));
    assert_eq!(expr.to_string(), "a < (b < c);");
}

#[test]
fn test_print_calls() {
    assert_eq!(
        call("f", vec![number(1), add(symbol("x"), number(2))]).to_string(),
        "f(1, x + 2);"
    );
    assert_eq!(
        labelled_call("power", vec![("n", number(5)), ("m", symbol("k"))]).to_string(),
        "power[n = 5, m = k];"
    );
    assert_eq!(call("g", vec![]).to_string(), "g();");
}

#[test]
fn test_print_statements() {
    let expr = if_expr(
        less(symbol("n"), number(2)),
        block(vec![number(1)]),
        Some(block(vec![])),
    );
    assert_eq!(expr.to_string(), "if(n < 2) {\n  1;\n} else {}");

    let expr = while_expr(
        symbol("x"),
        block(vec![block(vec![println(symbol("x"))]), assignment("x", number(0))]),
    );
    assert_eq!(
        expr.to_string(),
        "while(x) {\n  {\n    println(x);\n  }\n  x = 0;\n}"
    );
}

#[test]
fn test_print_program() {
    let program = Program::new(vec![
        define_global("base", number(10)),
        define_function("main", &[], block(vec![call("f", vec![symbol("base")])])),
    ]);

    assert_eq!(
        program.to_string(),
        "global base = 10;\n\ndefine main() {\n  f(base);\n}\n"
    );
}

#[test]
fn test_print_round_trip_program() {
    let source = "
        global limit = 3 * (2 + 1);
        define fact(n) { if(n < 2) { 1; } else { n * fact(n - 1); } }
        define main() {
            total = 0;
            for(i in 0 to limit) { total = total + power[n = i]; }
            while(total > 100) total = total - (100 - 1);
            println(total != 0);
            {}
            fact(5) / (2 - 1);
        }
    ";
    let program = parse_program(source, None).unwrap();
    let printed = program.to_string();

    assert_eq!(parse_program(&printed, None).unwrap(), program);
}

#[test]
fn test_print_round_trip_statements() {
    let source = "if(a) { b = 1; } else if(c) d = 2; else { }\nx = (1 - 2) - (3 - 4);";
    let statements = parse_statements(source, None).unwrap();
    let printed: Vec<String> = statements.iter().map(|s| s.to_string()).collect();

    assert_eq!(parse_statements(&printed.join("\n"), None).unwrap(), statements);
}

#[test]
fn test_print_long_chain() {
    let mut expr = number(0);
    for i in 1..100_000 {
        expr = subtract(expr, number(i));
    }
    let printed = expr.to_string();

    assert!(printed.starts_with("0 - 1 - 2 - "));
    assert_eq!(parse_statements(&printed, None).unwrap(), vec![expr]);
}
