use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error raised during evaluation, which has no source position.
    pub fn runtime(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_runtime(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnexpectedToken { .. }
                | ErrorImpl::UnexpectedTokenDetailed { .. }
                | ErrorImpl::NumberParseError { .. }
                | ErrorImpl::TrailingInput { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::UnboundName { .. } => "UnboundNameError",
            ErrorImpl::UndefinedFunction { .. } => "UndefinedFunctionError",
            ErrorImpl::Arity { .. } => "ArityError",
            ErrorImpl::MissingLabel { .. } => "MissingLabelError",
            ErrorImpl::UnknownLabel { .. } => "UnknownLabelError",
            ErrorImpl::DuplicateLabel { .. } => "DuplicateLabelError",
            ErrorImpl::DivisionByZero => "ArithmeticError",
            ErrorImpl::MissingEntryPoint => "MissingEntryPointError",
            ErrorImpl::StackExhausted { .. } => "StackExhaustedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` at top level, expected `define` or `global`",
                token
            )),
            ErrorImpl::UnboundName { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` is not bound in any scope", name))
            }
            ErrorImpl::UndefinedFunction { function } => {
                ErrorTip::Suggestion(format!("Function `{}` is not defined", function))
            }
            ErrorImpl::Arity {
                function,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Function `{}` expects {} arguments, received {}",
                function, expected, received
            )),
            ErrorImpl::MissingLabel { function, label } => ErrorTip::Suggestion(format!(
                "Call to `{}` is missing a value for parameter `{}`",
                function, label
            )),
            ErrorImpl::UnknownLabel { function, label } => ErrorTip::Suggestion(format!(
                "Function `{}` has no parameter named `{}`",
                function, label
            )),
            ErrorImpl::DuplicateLabel { function, label } => ErrorTip::Suggestion(format!(
                "Parameter `{}` of `{}` is given more than once",
                label, function
            )),
            ErrorImpl::DivisionByZero => ErrorTip::Suggestion(String::from("Division by zero")),
            ErrorImpl::MissingEntryPoint => ErrorTip::Suggestion(String::from(
                "Define a `main()` function taking no parameters",
            )),
            ErrorImpl::StackExhausted { depth } => ErrorTip::Suggestion(format!(
                "Call depth exceeded {}, is there unbounded recursion?",
                depth
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.is_null() {
            write!(f, "{}: {}", self.get_error_name(), self.internal_error)
        } else {
            write!(
                f,
                "{}: {} at {}:{}",
                self.get_error_name(),
                self.internal_error,
                self.position.1,
                self.position.0
            )
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("trailing input starting at {token:?}")]
    TrailingInput { token: String },
    #[error("name {name:?} is not bound")]
    UnboundName { name: String },
    #[error("function {function:?} is not defined")]
    UndefinedFunction { function: String },
    #[error("function {function:?} expects {expected} arguments, received {received}")]
    Arity {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("call to {function:?} is missing label {label:?}")]
    MissingLabel { function: String, label: String },
    #[error("function {function:?} has no parameter {label:?}")]
    UnknownLabel { function: String, label: String },
    #[error("label {label:?} given more than once in call to {function:?}")]
    DuplicateLabel { function: String, label: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("program has no zero-argument main() function")]
    MissingEntryPoint,
    #[error("call depth exceeded {depth}")]
    StackExhausted { depth: usize },
}
