use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, TopLevel},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

/// Precedence layers, loosest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

impl BindingPower {
    /// The next tighter layer. `Primary` is the tightest and maps to itself.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type TopLevelHandler = fn(&mut Parser) -> Result<TopLevel, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements introduced by a reserved word or brace
    parser.stmt(TokenKind::Println, parse_println_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);

    // Top-level definitions
    parser.top_level(TokenKind::Global, parse_global_decl_stmt);
    parser.top_level(TokenKind::Define, parse_fn_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type TopLevelLookup = HashMap<TokenKind, TopLevelHandler>;
