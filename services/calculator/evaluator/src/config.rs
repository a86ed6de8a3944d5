use serde::Deserialize;

use crate::value::DivisionPolicy;

/// Token separation rules
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Whitespace {
    /// Exactly one space between tokens and nowhere else
    Strict,
    /// Any run of whitespace between tokens, optional padding inside
    /// parentheses and around the whole expression
    Lenient,
}

impl Default for Whitespace {
    fn default() -> Self {
        Whitespace::Strict
    }
}

/// Upper bound for `EvaluatorConfig::depth`
///
/// Parsing recurses once per nested application, so a larger limit could
/// exhaust an 8 MiB main thread stack before the limit is reached.
pub const MAX_DEPTH: usize = 512;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Maximum number of nested applications, capped at `MAX_DEPTH`
    pub depth: usize,
    pub division: DivisionPolicy,
    pub whitespace: Whitespace,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            depth: 128,
            division: DivisionPolicy::default(),
            whitespace: Whitespace::default(),
        }
    }
}
