use num::BigInt;

use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(BigInt),
    Application(Operation, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn application(op: Operation, left: Expr, right: Expr) -> Expr {
        Expr::Application(op, Box::new(left), Box::new(right))
    }

    /// Number of nested applications, a constant has depth zero
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) => 0,
            Expr::Application(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }
}

impl From<i64> for Expr {
    fn from(i: i64) -> Self {
        Expr::Constant(BigInt::from(i))
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{}", v),
            Expr::Application(op, l, r) => write!(f, "({} {} {})", op, l, r),
        }
    }
}
