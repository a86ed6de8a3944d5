use serde::Deserialize;

use evaluator::{EvaluatorConfig, MAX_DEPTH};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Plain
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub output: OutputFormat,
    pub evaluator: EvaluatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            output: OutputFormat::default(),
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl Config {
    /// Reads an optional `calculator.toml`, then applies `APP_` environment
    /// variables on top
    ///
    /// An `evaluator.depth` above `evaluator::MAX_DEPTH` is rejected.
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let mut cfg = ::config::Config::new();
        cfg.merge(::config::File::with_name("calculator").required(false))?;
        cfg.merge(::config::Environment::new().prefix("APP").separator("_"))?;
        let config: Config = cfg.try_into()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ::config::ConfigError> {
        if self.evaluator.depth > MAX_DEPTH {
            return Err(::config::ConfigError::Message(format!(
                "evaluator.depth is {} but may be at most {}",
                self.evaluator.depth, MAX_DEPTH
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use evaluator::{DivisionPolicy, Whitespace};

    use super::*;

    #[test]
    fn test_from_env() -> Result<(), Box<dyn std::error::Error>> {
        std::env::set_var("APP_OUTPUT", "json");
        std::env::set_var("APP_EVALUATOR_DEPTH", "16");
        std::env::set_var("APP_EVALUATOR_DIVISION", "exact");

        let config = Config::from_env();

        std::env::remove_var("APP_OUTPUT");
        std::env::remove_var("APP_EVALUATOR_DEPTH");
        std::env::remove_var("APP_EVALUATOR_DIVISION");

        let config = config?;
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.evaluator.depth, 16);
        assert_eq!(config.evaluator.division, DivisionPolicy::Exact);
        assert_eq!(config.evaluator.whitespace, Whitespace::Strict);

        std::env::set_var("APP_EVALUATOR_DEPTH", "100000");
        let too_deep = Config::from_env();
        std::env::remove_var("APP_EVALUATOR_DEPTH");

        match too_deep {
            Err(::config::ConfigError::Message(message)) => {
                assert_eq!(message, "evaluator.depth is 100000 but may be at most 512")
            }
            r => panic!("{:?} was not rejected", r),
        }
        Ok(())
    }

    #[test]
    fn test_validate_depth() -> Result<(), Box<dyn std::error::Error>> {
        let mut config = Config::default();
        config.evaluator.depth = MAX_DEPTH;
        assert_eq!(config.clone().validate()?.evaluator.depth, MAX_DEPTH);

        config.evaluator.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        Ok(())
    }
}
