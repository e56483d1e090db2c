use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::{Span, MK_DEFAULT_PATTERN};

lazy_static! {
    /// Words that always lex as their keyword token.
    ///
    /// Keywords are reserved outright: none of them, not even `in`, `to` or
    /// `println`, can name a variable, parameter or function. Only a whole
    /// identifier match counts, so `into` or `iffy` are ordinary names.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("global", TokenKind::Global);
        map.insert("define", TokenKind::Define);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("to", TokenKind::To);
        map.insert("println", TokenKind::Println);
        map
    };

    /// Whitespace and `//` comments, skipped at every token boundary.
    pub static ref TRIVIA: Regex = Regex::new(r"^(?:\s+|//[^\n]*)+").unwrap();

    /// Tried in order; two-character operators precede their one-character prefixes.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: |_| TokenKind::Number },
        MK_DEFAULT_PATTERN!(TokenKind::OpenParen, "("),
        MK_DEFAULT_PATTERN!(TokenKind::CloseParen, ")"),
        MK_DEFAULT_PATTERN!(TokenKind::OpenCurly, "{"),
        MK_DEFAULT_PATTERN!(TokenKind::CloseCurly, "}"),
        MK_DEFAULT_PATTERN!(TokenKind::OpenBracket, "["),
        MK_DEFAULT_PATTERN!(TokenKind::CloseBracket, "]"),
        MK_DEFAULT_PATTERN!(TokenKind::Comma, ","),
        MK_DEFAULT_PATTERN!(TokenKind::Semicolon, ";"),
        MK_DEFAULT_PATTERN!(TokenKind::Equals, "=="),
        MK_DEFAULT_PATTERN!(TokenKind::NotEquals, "!="),
        MK_DEFAULT_PATTERN!(TokenKind::Assignment, "="),
        MK_DEFAULT_PATTERN!(TokenKind::LessEquals, "<="),
        MK_DEFAULT_PATTERN!(TokenKind::Less, "<"),
        MK_DEFAULT_PATTERN!(TokenKind::GreaterEquals, ">="),
        MK_DEFAULT_PATTERN!(TokenKind::Greater, ">"),
        MK_DEFAULT_PATTERN!(TokenKind::Plus, "+"),
        MK_DEFAULT_PATTERN!(TokenKind::Dash, "-"),
        MK_DEFAULT_PATTERN!(TokenKind::Star, "*"),
        MK_DEFAULT_PATTERN!(TokenKind::Slash, "/"),
    ];
}

/// Maps the matched text of a pattern to the kind of token it produces.
pub type RegexHandler = fn(&str) -> TokenKind;

pub struct RegexPattern {
    pub regex: Regex,
    pub handler: RegexHandler,
}

fn symbol_handler(matched: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Global,
    Define,
    If,
    Else,
    While,
    For,
    In,
    To,
    Println,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => {
                write!(f, "{} ({}) @{}", self.kind, self.value, self.span.start.0)
            }
            _ => write!(f, "{} @{}", self.kind, self.span.start.0),
        }
    }
}
