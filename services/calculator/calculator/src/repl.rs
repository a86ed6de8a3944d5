use std::error::Error;
use std::io::{self, BufRead, Write};

use log::debug;
use serde::Serialize;

use evaluator::{EvalError, Evaluator, Value};
use telemetry::Measure;

use crate::config::{Config, OutputFormat};

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("repl", "evaluate");
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    Metrics,
    Blank,
    Evaluate(&'a str),
}

impl<'a> From<&'a str> for Command<'a> {
    fn from(line: &'a str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Command::Quit,
            ":metrics" => Command::Metrics,
            "" => Command::Blank,
            _ => Command::Evaluate(line),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    kind: String,
    message: String,
}

#[derive(Serialize)]
struct Response<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorResponse>,
}

impl<'a> Response<'a> {
    fn new(input: &'a str, result: &Result<Value, EvalError>) -> Self {
        match result {
            Ok(v) => Response {
                input,
                result: Some(v.to_string()),
                error: None,
            },
            Err(e) => Response {
                input,
                result: None,
                error: Some(ErrorResponse {
                    kind: e.kind().as_ref().to_string(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

/// Only the line terminator is removed, the evaluator decides what other
/// whitespace means
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub struct Repl {
    evaluator: Evaluator,
    prompt: String,
    output: OutputFormat,
}

impl Repl {
    pub fn new(config: &Config) -> Repl {
        Repl {
            evaluator: Evaluator::new(config.evaluator),
            prompt: config.prompt.clone(),
            output: config.output,
        }
    }

    /// Evaluates one expression per line until `:quit` or end of input
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<(), Box<dyn Error>> {
        let mut buffer = String::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                debug!("End of input");
                break;
            }

            match Command::from(strip_terminator(&buffer)) {
                Command::Quit => break,
                Command::Blank => continue,
                Command::Metrics => match telemetry::encode() {
                    Ok(text) => write!(output, "{}", text)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                },
                Command::Evaluate(line) => self.respond(line, &mut output)?,
            }
        }
        Ok(())
    }

    fn respond<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        let result = EVALUATE_MEASURE.stats(|| self.evaluator.evaluate(line));

        match self.output {
            OutputFormat::Plain => match result {
                Ok(v) => writeln!(output, "{}", v),
                Err(e) => writeln!(output, "error: {}", e),
            },
            OutputFormat::Json => {
                let response = Response::new(line, &result);
                writeln!(output, "{}", serde_json::to_string(&response)?)
            }
        }
    }
}
