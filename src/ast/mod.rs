/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: `Expr`, `TopLevel`, `Program` and the binary `Operator`
/// - expressions: Expression node structs and builder helpers
/// - statements: Top-level definition structs
/// - printer: Source-text pretty printer
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
