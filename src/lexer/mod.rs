//! Lexical analysis.
//!
//! The lexer is a cursor over the source text rather than a token stream:
//! the parser asks it for the next token, consumes it, or rewinds to an
//! earlier checkpoint. It handles:
//!
//! - Recognition of reserved words, identifiers, integers and operators
//! - Skipping whitespace and `//` comments at every token boundary
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
