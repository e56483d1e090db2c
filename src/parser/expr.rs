use crate::{
    ast::{
        ast::{Expr, Operator},
        expressions::{
            binary, number, symbol, CallExpr, LabelledArgument, LabelledCallExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    stack::ensure_sufficient_stack,
};

use super::{lookups::BindingPower, parser::Parser};

/// expr := comparative
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_comparative(parser)
}

pub fn parse_comparative(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Relational)
}

pub fn parse_additive(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Additive)
}

pub fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative)
}

/// Parses one precedence layer: a term of the next tighter layer followed by
/// any number of `(operator, term)` pairs of this layer, folded to the left.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    if bp == BindingPower::Primary {
        return parse_primary_expr(parser);
    }

    ensure_sufficient_stack(|| -> Result<Expr, Error> {
        let mut left = parse_binary_expr(parser, bp.next())?;

        loop {
            let operator = match Operator::from_token(parser.current_token_kind()?) {
                Some(operator) if operator.binding_power() == bp => operator,
                _ => break,
            };
            parser.advance()?;

            let right = parse_binary_expr(parser, bp.next())?;
            left = binary(operator, left, right);
        }

        Ok(left)
    })
}

/// primary := "(" expr ")" | INTEGER | call | labelledCall | IDENT
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind()? {
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Identifier => parse_symbol_expr(parser),
        _ => {
            let token = parser.current_token()?;
            Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span.start,
            ))
        }
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.value.parse() {
        Ok(value) => Ok(number(value)),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

/// An identifier is a call when followed by `(`, a labelled call when followed
/// by `[`, and a variable reference otherwise.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    match parser.current_token_kind()? {
        TokenKind::OpenParen => parse_call_expr(parser, name),
        TokenKind::OpenBracket => parse_labelled_call_expr(parser, name),
        _ => Ok(symbol(name)),
    }
}

pub fn parse_call_expr(parser: &mut Parser, callee: String) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind()? != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind()? == TokenKind::Comma {
                parser.advance()?;
            } else {
                break;
            }
        }
    }

    let error = parser.unexpected("expected `,` or `)` in argument list");
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(Expr::Call(CallExpr { callee, arguments }))
}

pub fn parse_labelled_call_expr(parser: &mut Parser, callee: String) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut arguments = vec![];
    if parser.current_token_kind()? != TokenKind::CloseBracket {
        loop {
            let error = parser.unexpected("expected parameter label");
            let label = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
            parser.expect(TokenKind::Assignment)?;
            let value = parse_expr(parser)?;
            arguments.push(LabelledArgument { label, value });

            if parser.current_token_kind()? == TokenKind::Comma {
                parser.advance()?;
            } else {
                break;
            }
        }
    }

    let error = parser.unexpected("expected `,` or `]` in labelled argument list");
    parser.expect_error(TokenKind::CloseBracket, Some(error))?;

    Ok(Expr::LabelledCall(LabelledCallExpr { callee, arguments }))
}
