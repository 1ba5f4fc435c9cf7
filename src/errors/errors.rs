use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidCast { .. } => "InvalidCast",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::AssignFloatToInt { .. } => "AssignFloatToInt",
            ErrorImpl::BreakOutsideOfLoop => "BreakOutsideOfLoop",
            ErrorImpl::UnknownOperation { .. } => "UnknownOperation",
            ErrorImpl::JumpTargetAsValue { .. } => "JumpTargetAsValue",
            ErrorImpl::JumpBeforeFirstLine { .. } => "JumpBeforeFirstLine",
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
                "Invalid number: `{}`, case labels must be integers",
                token
            )),
            ErrorImpl::InvalidCast { cast } => ErrorTip::Suggestion(format!(
                "Unknown cast `{}`, expected `static_cast<int>` or `static_cast<float>`",
                cast
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::UnknownVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` is not declared", variable))
            }
            ErrorImpl::AssignFloatToInt { variable } => ErrorTip::Suggestion(format!(
                "Cannot assign a float value to the int variable `{}`, use static_cast<int>",
                variable
            )),
            ErrorImpl::BreakOutsideOfLoop => ErrorTip::Suggestion(String::from(
                "`break` may only appear inside a while loop or a switch",
            )),
            ErrorImpl::UnknownOperation { operator } => {
                ErrorTip::Suggestion(format!("No instruction exists for operator `{}`", operator))
            }
            ErrorImpl::JumpTargetAsValue { .. } | ErrorImpl::JumpBeforeFirstLine { .. } => {
                ErrorTip::None
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid cast {cast:?}")]
    InvalidCast { cast: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("undefined variable {variable:?}")]
    UnknownVariable { variable: String },
    #[error("trying to assign a float value to the integer variable {variable:?}")]
    AssignFloatToInt { variable: String },
    #[error("break used outside of loop or switch")]
    BreakOutsideOfLoop,
    #[error("no such operation {operator:?}")]
    UnknownOperation { operator: String },
    #[error("jump target {target} used as a value")]
    JumpTargetAsValue { target: String },
    #[error("jump back by {offset} from line {line} lands before the first line")]
    JumpBeforeFirstLine { line: usize, offset: usize },
}

/// Attaches a source position to errors raised by position-unaware helpers
/// such as the symbol table and the opcode templates.
pub trait WithPosition<T> {
    fn at(self, position: &Position) -> Result<T, Error>;
}

impl<T> WithPosition<T> for Result<T, ErrorImpl> {
    fn at(self, position: &Position) -> Result<T, Error> {
        self.map_err(|error_impl| Error::new(error_impl, position.clone()))
    }
}
