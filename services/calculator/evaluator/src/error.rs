use derive_more::Display;
use strum_macros::AsRefStr;

use telemetry::IsErr;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum EvalError {
    #[display(fmt = "Syntax Error at position {}: {}", position, message)]
    Syntax { position: usize, message: String },

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Expression nested deeper than {} levels", limit)]
    DepthExceeded { limit: usize },
}

impl std::error::Error for EvalError {}

/// Machine readable classification of an [`EvalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    SyntaxError,
    DivisionByZero,
    DepthExceeded,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Syntax { .. } => ErrorKind::SyntaxError,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
        }
    }
}

// Malformed input is the caller's problem, tripping the depth guard is not
impl IsErr for EvalError {
    fn is_err(&self) -> bool {
        matches!(self, EvalError::DepthExceeded { .. })
    }
}
