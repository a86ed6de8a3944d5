use log::{debug, warn};

use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::expr::Expr;
use crate::operation::Operation;
use crate::parser::parse_with;
use crate::value::Value;

/// Parses and evaluates prefix expressions under a fixed configuration
///
/// Holds no state between calls, so a single instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Evaluator {
        Evaluator { config }
    }

    pub fn parse(&self, input: &str) -> Result<Expr, EvalError> {
        parse_with(input, &self.config).map_err(|e| {
            if let EvalError::DepthExceeded { limit } = &e {
                warn!("Rejected expression nested deeper than {}", limit);
            }
            e
        })
    }

    pub fn eval(&self, e: &Expr) -> Result<Value, EvalError> {
        match e {
            Expr::Constant(v) => Ok(Value::Int(v.clone())),
            Expr::Application(op, l, r) => {
                let left = self.eval(l)?;
                let right = self.eval(r)?;

                match op {
                    Operation::Add => Ok(left + right),
                    Operation::Sub => Ok(left - right),
                    Operation::Mul => Ok(left * right),
                    Operation::Div => left.divide(right, self.config.division),
                }
            }
        }
    }

    pub fn evaluate(&self, input: &str) -> Result<Value, EvalError> {
        let expr = self.parse(input)?;
        let value = self.eval(&expr)?;
        debug!("Evaluated {} to {}", expr, value);
        Ok(value)
    }
}
