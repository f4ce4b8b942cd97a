//! The dynamic value model.
//!
//! Every Rockstar value is a [`Value`]. Generated code keeps values boxed
//! so one storage slot can hold a number now and a string later; each
//! polymorphic operation dispatches on the tag with an exhaustive match.

use std::cmp::Ordering;
use std::fmt;

use crate::{RuntimeError, ValueKind};

/// A tagged runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Uninitialised or unknown.
    Mysterious,
    /// Explicit absence.
    Null,
}

/// Arithmetic operators with defined cross-kind rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Arithmetic {
    pub fn verb(self) -> &'static str {
        match self {
            Arithmetic::Add => "add",
            Arithmetic::Subtract => "subtract",
            Arithmetic::Multiply => "multiply",
            Arithmetic::Divide => "divide",
        }
    }

    /// Apply to two numbers with IEEE-754 semantics.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Arithmetic::Add => left + right,
            Arithmetic::Subtract => left - right,
            Arithmetic::Multiply => left * right,
            Arithmetic::Divide => left / right,
        }
    }
}

/// Ordering comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Comparison {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Comparison::Less => ordering == Ordering::Less,
            Comparison::LessEqual => ordering != Ordering::Greater,
            Comparison::Greater => ordering == Ordering::Greater,
            Comparison::GreaterEqual => ordering != Ordering::Less,
        }
    }
}

/// An operation applied to operand kinds it has no meaning for.
///
/// Carries no location; the VM attaches the line being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandMismatch {
    pub operation: &'static str,
    pub left: ValueKind,
    pub right: ValueKind,
}

impl OperandMismatch {
    pub fn at_line(self, line: u32) -> RuntimeError {
        RuntimeError::TypeMismatch {
            operation: self.operation,
            left: self.left.name(),
            right: self.right.name(),
            line,
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Mysterious => ValueKind::Mysterious,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Booleans are themselves; numbers are truthy when non-zero, text when
    /// non-empty; mysterious and null are always falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::Mysterious | Value::Null => false,
        }
    }

    /// The textual form written by output statements.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Apply an arithmetic operator.
    ///
    /// Number with number uses float arithmetic. `Add` with a string on
    /// either side concatenates the textual forms of both operands. Every
    /// other pairing is a mismatch.
    pub fn arithmetic(&self, op: Arithmetic, other: &Value) -> Result<Value, OperandMismatch> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(op.apply(*a, *b))),
            (Value::Text(_), _) | (_, Value::Text(_)) if op == Arithmetic::Add => {
                Ok(self.concat(other))
            }
            _ => Err(OperandMismatch {
                operation: op.verb(),
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// Concatenate textual forms.
    pub fn concat(&self, other: &Value) -> Value {
        let mut text = self.to_text();
        text.push_str(&other.to_text());
        Value::Text(text)
    }

    /// Equality never fails: values of different kinds are simply unequal.
    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }

    /// Ordering comparison, defined for number pairs and string pairs.
    pub fn compare(&self, op: Comparison, other: &Value) -> Result<bool, OperandMismatch> {
        let ordering = match (self, other) {
            (Value::Number(a), Value::Number(b)) => match a.partial_cmp(b) {
                Some(ordering) => ordering,
                None => return Ok(false),
            },
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => {
                return Err(OperandMismatch {
                    operation: "compare",
                    left: self.kind(),
                    right: other.kind(),
                });
            }
        };
        Ok(op.holds(ordering))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display is already the shortest round-tripping decimal
            // and drops a zero fraction ("1337", not "1337.0").
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Mysterious => f.write_str("mysterious"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
