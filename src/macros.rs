//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_PATTERN!` - Creates a pattern table entry for a fixed token
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a pattern entry whose handler always yields the same token kind.
///
/// The literal is escaped and anchored at the start of the remaining input.
///
/// # Example
///
/// ```ignore
/// MK_DEFAULT_PATTERN!(TokenKind::Plus, "+")
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_PATTERN {
    ($kind:expr, $value:literal) => {
        RegexPattern {
            regex: Regex::new(&format!("^{}", regex::escape($value))).unwrap(),
            handler: |_matched: &str| $kind,
        }
    };
}
