use std::ops::{Add, Mul, Sub};

use num::integer::div_floor;
use num::{BigInt, BigRational, ToPrimitive, Zero};
use serde::Deserialize;

use crate::error::EvalError;

/// How `/` treats operands that do not divide exactly
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DivisionPolicy {
    /// Integer quotient rounded toward zero
    Truncate,
    /// Integer quotient rounded toward negative infinity
    Floor,
    /// Exact rational quotient
    Exact,
    /// IEEE-754 double quotient
    Float,
}

impl Default for DivisionPolicy {
    fn default() -> Self {
        DivisionPolicy::Truncate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(BigInt),
    Rational(BigRational),
    Float(f64),
}

/// Two values coerced to a common representation
enum Promoted {
    Ints(BigInt, BigInt),
    Ratios(BigRational, BigRational),
    Floats(f64, f64),
}

impl Promoted {
    fn new(left: Value, right: Value) -> Promoted {
        use Value::*;
        match (left, right) {
            (Int(l), Int(r)) => Promoted::Ints(l, r),
            (Int(l), Rational(r)) => Promoted::Ratios(BigRational::from_integer(l), r),
            (Rational(l), Int(r)) => Promoted::Ratios(l, BigRational::from_integer(r)),
            (Rational(l), Rational(r)) => Promoted::Ratios(l, r),
            (l, r) => Promoted::Floats(l.as_float(), r.as_float()),
        }
    }
}

impl Value {
    /// Collapses rationals with a unit denominator back into integers
    pub fn rational(r: BigRational) -> Value {
        if r.is_integer() {
            Value::Int(r.to_integer())
        } else {
            Value::Rational(r)
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Value::Int(i) => i.to_f64().unwrap_or(f64::NAN),
            Value::Rational(r) => r.to_f64().unwrap_or(f64::NAN),
            Value::Float(f) => *f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(i) => i.is_zero(),
            Value::Rational(r) => r.is_zero(),
            Value::Float(f) => *f == 0.0,
        }
    }

    /// Divides `self` by `rhs`, a zero divisor is an error under every policy
    pub fn divide(self, rhs: Value, policy: DivisionPolicy) -> Result<Value, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        let quotient = match (Promoted::new(self, rhs), policy) {
            (Promoted::Floats(l, r), _) => Value::Float(l / r),
            // Rounded once from the exact quotient, operands may not fit in an f64
            (Promoted::Ints(l, r), DivisionPolicy::Float) => {
                Value::Float(Value::Rational(BigRational::new(l, r)).as_float())
            }
            (Promoted::Ratios(l, r), DivisionPolicy::Float) => {
                Value::Float(Value::Rational(l / r).as_float())
            }
            (Promoted::Ints(l, r), DivisionPolicy::Truncate) => Value::Int(l / r),
            (Promoted::Ints(l, r), DivisionPolicy::Floor) => Value::Int(div_floor(l, r)),
            (Promoted::Ints(l, r), DivisionPolicy::Exact) => {
                Value::rational(BigRational::new(l, r))
            }
            (Promoted::Ratios(l, r), DivisionPolicy::Truncate) => {
                Value::Int((l / r).trunc().to_integer())
            }
            (Promoted::Ratios(l, r), DivisionPolicy::Floor) => {
                Value::Int((l / r).floor().to_integer())
            }
            (Promoted::Ratios(l, r), DivisionPolicy::Exact) => Value::rational(l / r),
        };
        Ok(quotient)
    }
}

macro_rules! op {
    ( $t: ty, $f: ident ) => {
        impl $t for Value {
            type Output = Value;

            fn $f(self, rhs: Self) -> Self::Output {
                match Promoted::new(self, rhs) {
                    Promoted::Ints(l, r) => Value::Int(l.$f(r)),
                    Promoted::Ratios(l, r) => Value::rational(l.$f(r)),
                    Promoted::Floats(l, r) => Value::Float(l.$f(r)),
                }
            }
        }
    };
}

op!(Add, add);
op!(Sub, sub);
op!(Mul, mul);

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(BigInt::from(i))
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}
