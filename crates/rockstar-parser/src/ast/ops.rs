//! Operators of Rockstar expressions.
//!
//! Operators are spelled with words (`plus`, `is as high as`) or symbols
//! (`+`). Precedence is expressed as binding powers for the Pratt loop in
//! the expression parser.

use std::fmt;

/// Binary operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical (precedence 1)
    /// `or`
    Or,
    /// `nor`
    Nor,

    // Logical (precedence 2)
    /// `and`
    And,

    // Equality and ordering (precedence 3)
    /// `is`
    Eq,
    /// `ain't`, `isn't`, `is not`
    Ne,
    /// `is less than` and friends
    Lt,
    /// `is as low as` and friends
    Le,
    /// `is greater than` and friends
    Gt,
    /// `is as high as` and friends
    Ge,

    // Additive (precedence 4)
    /// `plus`, `with`, `+`
    Add,
    /// `minus`, `without`, `-`
    Sub,

    // Multiplicative (precedence 5)
    /// `times`, `of`, `*`
    Mul,
    /// `over`, `between`, `/`
    Div,
}

impl BinaryOp {
    /// (left, right) binding power. All binary operators are
    /// left-associative.
    pub fn binding_power(self) -> (u8, u8) {
        use BinaryOp::*;
        match self {
            Or | Nor => (1, 2),
            And => (3, 4),
            Eq | Ne | Lt | Le | Gt | Ge => (5, 6),
            Add | Sub => (7, 8),
            Mul | Div => (9, 10),
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div)
    }

    pub fn is_ordering(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Nor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "or",
            BinaryOp::Nor => "nor",
            BinaryOp::And => "and",
            BinaryOp::Eq => "is",
            BinaryOp::Ne => "ain't",
            BinaryOp::Lt => "is less than",
            BinaryOp::Le => "is as low as",
            BinaryOp::Gt => "is greater than",
            BinaryOp::Ge => "is as high as",
            BinaryOp::Add => "plus",
            BinaryOp::Sub => "minus",
            BinaryOp::Mul => "times",
            BinaryOp::Div => "over",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `not`
    Not,
}

impl UnaryOp {
    /// Binds tighter than every binary operator.
    pub fn binding_power() -> u8 {
        11
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => f.write_str("not"),
        }
    }
}
