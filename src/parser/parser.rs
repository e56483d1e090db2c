//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the two entry points,
//! [`parse_program`] and [`parse_statements`]. The parser pulls tokens from
//! the lexer cursor on demand and keeps lookup tables for:
//! - Statement handlers, keyed by the token that introduces the statement
//! - Top-level definition handlers

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::{Expr, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, StmtHandler, StmtLookup, TopLevelHandler, TopLevelLookup,
    },
    stmt::{parse_line, parse_top_level},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'src> {
    /// Cursor over the source text
    lexer: Lexer<'src>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for top-level definition handlers
    top_level_lookup: TopLevelLookup,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser over `source`. `file` names the source in
    /// positions and defaults to `"shell"`.
    pub fn new(source: &'src str, file: Option<String>) -> Self {
        Parser {
            lexer: Lexer::new(source, file),
            stmt_lookup: HashMap::new(),
            top_level_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Result<Token, Error> {
        self.lexer.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<TokenKind, Error> {
        Ok(self.lexer.peek()?.kind)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.lexer.advance()
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if the current token matches.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token()?;
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.value },
                    token.span.start,
                )),
            }
        } else {
            self.advance()
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an `UnexpectedTokenDetailed` error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        match self.current_token() {
            Ok(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value,
                    message: String::from(message),
                },
                token.span.start,
            ),
            Err(error) => error,
        }
    }

    /// Checks if there is any input left.
    pub fn has_tokens(&self) -> bool {
        !self.lexer.at_eof()
    }

    /// Runs `f` and rewinds the input to where it was before, whatever `f` returns.
    pub fn lookahead<T>(&mut self, f: impl FnOnce(&mut Parser<'src>) -> T) -> T {
        let checkpoint = self.lexer.checkpoint();
        let result = f(self);
        self.lexer.restore(checkpoint);
        result
    }

    /// Returns the handler for statements introduced by `kind`.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the handler for top-level definitions introduced by `kind`.
    pub fn get_top_level_handler(&self, kind: TokenKind) -> Option<TopLevelHandler> {
        self.top_level_lookup.get(&kind).copied()
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a top-level definition handler for a token.
    pub fn top_level(&mut self, kind: TokenKind, top_level_fn: TopLevelHandler) {
        self.top_level_lookup.insert(kind, top_level_fn);
    }

    /// Returns the current position in the source.
    pub fn get_position(&self) -> Position {
        self.lexer.get_position()
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }
}

fn create_parser(source: &str, file: Option<String>) -> Parser<'_> {
    let mut parser = Parser::new(source, file);
    create_token_lookups(&mut parser);
    parser
}

/// Parses a whole program: a sequence of `global` and `define` definitions.
///
/// Input that is not a top-level definition fails with `TrailingInput`.
/// Nothing is evaluated here, so a failed parse leaves no partial state behind.
pub fn parse_program(source: &str, file: Option<String>) -> Result<Program, Error> {
    let mut parser = create_parser(source, file);

    let mut definitions = vec![];
    while parser.has_tokens() {
        definitions.push(parse_top_level(&mut parser)?);
    }

    tracing::debug!(
        file = %parser.file(),
        definitions = definitions.len(),
        "parsed program"
    );

    Ok(Program::new(definitions))
}

/// Parses a sequence of statements, consuming the whole input.
pub fn parse_statements(source: &str, file: Option<String>) -> Result<Vec<Expr>, Error> {
    let mut parser = create_parser(source, file);

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_line(&mut parser)?);
    }

    Ok(body)
}
