use std::borrow::Cow;

use nom::IResult;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{cut, map, map_res, opt, recognize},
    error::{ErrorKind, ParseError},
    sequence::pair,
};
use num::BigInt;

use crate::config::{EvaluatorConfig, Whitespace, MAX_DEPTH};
use crate::error::EvalError;
use crate::expr::Expr;
use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq)]
enum Failure<'a> {
    Unexpected {
        input: &'a str,
        expected: Cow<'static, str>,
    },
    TooDeep(usize),
}

impl<'a> ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Failure::Unexpected {
            input,
            expected: Cow::Owned(format!("{:?}", kind).to_lowercase()),
        }
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: &'a str, c: char) -> Self {
        Failure::Unexpected {
            input,
            expected: Cow::Owned(format!("'{}'", c)),
        }
    }
}

/// Characters of remaining input quoted in a syntax error
const EXCERPT_CHARS: usize = 20;

fn excerpt(input: &str) -> Cow<'_, str> {
    match input.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => Cow::Owned(format!("{}…", &input[..end])),
        None => Cow::Borrowed(input),
    }
}

impl<'a> Failure<'a> {
    fn into_error(self, source: &str) -> EvalError {
        match self {
            Failure::TooDeep(limit) => EvalError::DepthExceeded { limit },
            Failure::Unexpected { input, expected } => {
                let message = if input.is_empty() {
                    format!("Unexpected end of input: expected {}", expected)
                } else {
                    format!(
                        "Unexpected token at \"{}\": expected {}",
                        excerpt(input),
                        expected
                    )
                };
                EvalError::Syntax {
                    position: source.len() - input.len(),
                    message,
                }
            }
        }
    }
}

type ParseResult<'a, O> = IResult<&'a str, O, Failure<'a>>;

/// Replaces a recoverable error with one naming what was expected at `i`
fn expecting<'a, O>(
    what: &'static str,
    i: &'a str,
    result: ParseResult<'a, O>,
) -> ParseResult<'a, O> {
    result.map_err(|e| match e {
        nom::Err::Error(_) => nom::Err::Error(Failure::Unexpected {
            input: i,
            expected: Cow::Borrowed(what),
        }),
        e => e,
    })
}

fn parse_constant(i: &str) -> ParseResult<'_, BigInt> {
    map_res(recognize(pair(opt(char('-')), digit1)), |digit_str: &str| {
        digit_str.parse::<BigInt>()
    })(i)
}

fn parse_operation(i: &str) -> ParseResult<'_, Operation> {
    let result = map_res(recognize(one_of("+-*/")), |symbol: &str| {
        symbol.parse::<Operation>()
    })(i);
    expecting("operator", i, result)
}

struct Grammar {
    whitespace: Whitespace,
    limit: usize,
}

impl Grammar {
    fn separator<'a>(&self, i: &'a str) -> ParseResult<'a, ()> {
        match self.whitespace {
            Whitespace::Strict => map(char(' '), |_| ())(i),
            Whitespace::Lenient => {
                let result = map(multispace1, |_| ())(i);
                expecting("whitespace", i, result)
            }
        }
    }

    fn padding<'a>(&self, i: &'a str) -> ParseResult<'a, ()> {
        match self.whitespace {
            Whitespace::Strict => Ok((i, ())),
            Whitespace::Lenient => map(multispace0, |_| ())(i),
        }
    }

    /// `depth` is the number of applications enclosing `i`
    fn parse_expression<'a>(&self, i: &'a str, depth: usize) -> ParseResult<'a, Expr> {
        let result = alt((
            |i: &'a str| self.parse_application(i, depth),
            map(parse_constant, Expr::Constant),
        ))(i);
        expecting("expression", i, result)
    }

    fn parse_application<'a>(&self, i: &'a str, depth: usize) -> ParseResult<'a, Expr> {
        let (i, _) = char('(')(i)?;
        if depth >= self.limit {
            return Err(nom::Err::Failure(Failure::TooDeep(self.limit)));
        }
        // Past the opening paren this can only be an application
        cut(|i: &'a str| self.parse_operands(i, depth + 1))(i)
    }

    fn parse_operands<'a>(&self, i: &'a str, depth: usize) -> ParseResult<'a, Expr> {
        let (i, _) = self.padding(i)?;
        let (i, op) = parse_operation(i)?;
        let (i, _) = self.separator(i)?;
        let (i, left) = self.parse_expression(i, depth)?;
        let (i, _) = self.separator(i)?;
        let (i, right) = self.parse_expression(i, depth)?;
        let (i, _) = self.padding(i)?;
        let (i, _) = char(')')(i)?;

        Ok((i, Expr::application(op, left, right)))
    }

    fn parse_complete<'a>(&self, i: &'a str) -> ParseResult<'a, Expr> {
        let (i, _) = self.padding(i)?;
        let (i, expr) = self.parse_expression(i, 0)?;
        let (i, _) = self.padding(i)?;
        if !i.is_empty() {
            return Err(nom::Err::Failure(Failure::Unexpected {
                input: i,
                expected: Cow::Borrowed("end of input"),
            }));
        }
        Ok((i, expr))
    }
}

pub fn parse_with(i: &str, config: &EvaluatorConfig) -> Result<Expr, EvalError> {
    let grammar = Grammar {
        whitespace: config.whitespace,
        limit: config.depth.min(MAX_DEPTH),
    };

    match grammar.parse_complete(i) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into_error(i)),
        Err(nom::Err::Incomplete(_)) => Err(EvalError::Syntax {
            position: i.len(),
            message: "Incomplete input".to_string(),
        }),
    }
}

pub fn parse(i: &str) -> Result<Expr, EvalError> {
    parse_with(i, &EvaluatorConfig::default())
}
