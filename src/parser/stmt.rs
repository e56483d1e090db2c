use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, TopLevel},
        expressions::{assignment, block, for_in, if_expr, println, while_expr},
        statements::{FnDeclStmt, GlobalDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    stack::ensure_sufficient_stack,
};

use super::{expr::parse_expr, parser::Parser};

/// line := println | whileExpr | ifExpr | assign | exprStmt | block | forIn
pub fn parse_line(parser: &mut Parser) -> Result<Expr, Error> {
    ensure_sufficient_stack(|| -> Result<Expr, Error> {
        if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()?) {
            return handler(parser);
        }

        if starts_assignment(parser)? {
            parse_assignment_stmt(parser)
        } else {
            parse_expression_stmt(parser)
        }
    })
}

/// True when the input starts with `IDENT =`. A `==` lexes as its own token,
/// so it never looks like an assignment. Consumes nothing.
fn starts_assignment(parser: &mut Parser) -> Result<bool, Error> {
    parser.lookahead(|parser| -> Result<bool, Error> {
        Ok(parser.advance()?.kind == TokenKind::Identifier
            && parser.advance()?.kind == TokenKind::Assignment)
    })
}

fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(condition)
}

pub fn parse_println_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let argument = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(println(argument))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let condition = parse_condition(parser)?;
    let body = parse_line(parser)?;

    Ok(while_expr(condition, body))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;

    let condition = parse_condition(parser)?;
    let then_body = parse_line(parser)?;

    let else_body = if parser.current_token_kind()? == TokenKind::Else {
        parser.advance()?;
        Some(parse_line(parser)?)
    } else {
        None
    };

    Ok(if_expr(condition, then_body, else_body))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    loop {
        match parser.current_token_kind()? {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected("unterminated block, expected `}`")),
            _ => statements.push(parse_line(parser)?),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(block(statements))
}

/// forIn := "for" "(" IDENT "in" expr "to" expr ")" line
///
/// Desugared here into an assignment followed by a `while` loop.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    parser.expect(TokenKind::OpenParen)?;

    let error = parser.unexpected("expected loop variable after `for(`");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::In)?;
    let start = parse_expr(parser)?;
    parser.expect(TokenKind::To)?;
    let end = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_line(parser)?;

    Ok(for_in(&name, start, end, body))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(assignment(name, value))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(expr)
}

/// topLevel := globalDef | funcDef
pub fn parse_top_level(parser: &mut Parser) -> Result<TopLevel, Error> {
    let token = parser.current_token()?;

    match parser.get_top_level_handler(token.kind) {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::TrailingInput { token: token.value },
            token.span.start,
        )),
    }
}

/// globalDef := "global" IDENT "=" expr ";"
pub fn parse_global_decl_stmt(parser: &mut Parser) -> Result<TopLevel, Error> {
    parser.advance()?;

    let error = parser.unexpected("expected identifier after `global`");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(TopLevel::Global(GlobalDeclStmt {
        identifier,
        assigned_value,
    }))
}

/// funcDef := "define" IDENT "(" (IDENT ("," IDENT)*)? ")" block
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<TopLevel, Error> {
    parser.advance()?;

    let error = parser.unexpected("expected function name after `define`");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind()? != TokenKind::CloseParen {
        loop {
            let error = parser.unexpected("expected parameter name");
            parameters.push(parser.expect_error(TokenKind::Identifier, Some(error))?.value);

            if parser.current_token_kind()? == TokenKind::Comma {
                parser.advance()?;
            } else {
                break;
            }
        }
    }

    let error = parser.unexpected("expected `,` or `)` in parameter list");
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    if parser.current_token_kind()? != TokenKind::OpenCurly {
        return Err(parser.unexpected("expected `{` to start the function body"));
    }
    let body = parse_block_stmt(parser)?;

    Ok(TopLevel::Function(Rc::new(FnDeclStmt {
        identifier,
        parameters,
        body,
    })))
}
