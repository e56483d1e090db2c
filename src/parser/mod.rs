//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser that reads tokens straight off the lexer
//! cursor. It handles:
//!
//! - Top-level definitions (`global`, `define`)
//! - Statements (`println`, `while`, `if`, `for`, blocks, assignments)
//! - Expressions, one function per precedence layer
//!   (comparative → additive → multiplicative → primary)
//!
//! Statements introduced by a reserved word are dispatched through a lookup
//! table; assignments are told apart from expression statements with a
//! two-token lookahead that consumes nothing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
