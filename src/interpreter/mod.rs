//! Tree-walking evaluator.
//!
//! Walks the AST produced by the parser and computes one integer per node.
//! It handles:
//!
//! - Top-level registration of functions and globals
//! - Expression evaluation against a chain of frames
//! - Positional and labelled calls, each in a frame linked to the caller's
//! - `println` output through a configurable sink

pub mod environment;
pub mod expr;
pub mod interpreter;
pub mod output;
pub mod stmt;

#[cfg(test)]
mod tests;
