use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, PATTERNS, TRIVIA};

/// A cursor over source text that scans tokens on demand.
///
/// Trivia is skipped eagerly, so the cursor always rests on the start of the
/// next token (or the end of input). Cloning or checkpointing is cheap, which
/// is what the parser relies on for backtracking.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            file: file_name,
        };
        lexer.skip_trivia();
        lexer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn checkpoint(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    fn skip_trivia(&mut self) {
        if let Some(matched) = TRIVIA.find(self.remainder()) {
            self.pos += matched.end();
        }
    }

    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Scans the token at the cursor without consuming it.
    pub fn peek(&self) -> Result<Token, Error> {
        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span(0)));
        }

        let remaining = self.remainder();
        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                let value = matched.as_str();
                return Ok(MK_TOKEN!(
                    (pattern.handler)(value),
                    String::from(value),
                    self.span(value.len())
                ));
            }
        }

        let token = remaining.chars().next().map(String::from).unwrap_or_default();
        Err(Error::new(
            ErrorImpl::UnrecognisedToken { token },
            self.get_position(),
        ))
    }

    /// Consumes the token at the cursor and the trivia that follows it.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self.peek()?;
        self.pos += token.value.len();
        if token.kind == TokenKind::EOF {
            self.pos = self.source.len();
        }
        self.skip_trivia();
        Ok(token)
    }
}

/// Scans the whole source into a token list, ending with `EOF`.
///
/// The parser never needs this; it exists for diagnostics.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.advance()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(tokens)
}
