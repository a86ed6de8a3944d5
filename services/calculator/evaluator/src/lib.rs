//! Evaluates integer arithmetic written in prefix notation, e.g. `(+ (- 1 2) 3)`.
//!
//! ```text
//! expression := integer
//!             | "(" operator " " expression " " expression ")"
//! operator   := "+" | "-" | "*" | "/"
//! integer    := optional "-" sign, one or more decimal digits
//! ```
//!
//! The meaning of `/`, the whitespace rules and the nesting limit are set
//! through [`EvaluatorConfig`].

pub use config::{EvaluatorConfig, Whitespace, MAX_DEPTH};
pub use error::{ErrorKind, EvalError};
pub use eval::Evaluator;
pub use expr::Expr;
pub use operation::Operation;
pub use parser::{parse, parse_with};
pub use value::{DivisionPolicy, Value};

mod config;
mod error;
mod eval;
mod expr;
mod operation;
mod parser;
mod value;

/// Evaluates `input` with the default configuration
pub fn evaluate(input: &str) -> Result<Value, EvalError> {
    Evaluator::default().evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(evaluate("(+ 1 2)")?, Value::from(3));
        assert_eq!(evaluate("-17")?, Value::from(-17));
        assert_eq!(evaluate("(/ 1 0)"), Err(EvalError::DivisionByZero));
        assert!(matches!(
            evaluate("(+ 1 2"),
            Err(EvalError::Syntax { position: 6, .. })
        ));
        Ok(())
    }
}
