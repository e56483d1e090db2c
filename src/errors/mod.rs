//! Error types and error handling.
//!
//! This module defines the errors raised while lexing, parsing and
//! evaluating. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each failure kind
//! - Helpful error messages and suggestions

pub mod errors;
