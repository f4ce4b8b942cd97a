//! Expression AST nodes.
//!
//! Nodes borrow from the arena. Variable references keep their raw surface
//! text; classifying and normalising the name is the compiler's job.

use crate::ast::{BinaryOp, UnaryOp};
use rockstar_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Number, string or constant word
    Literal(Literal<'ast>),
    /// Number spelled as a sentence
    Poetic(PoeticNumber<'ast>),
    /// Variable or pronoun
    Variable(VariableRef<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Prefix operation
    Unary(&'ast UnaryExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Poetic(e) => e.span,
            Self::Variable(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'ast> {
    pub kind: LiteralKind<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Number(f64),
    String(&'ast str),
    Bool(bool),
    Mysterious,
    Null,
}

/// A poetic number literal, already decoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoeticNumber<'ast> {
    pub value: f64,
    /// The words the number was decoded from.
    pub text: &'ast str,
    pub span: Span,
}

/// A reference to a variable as written in the source.
///
/// `text` is the exact source slice, e.g. `"Doctor FeelGOOD"`, `"my thing"`
/// or `"it"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableRef<'ast> {
    pub text: &'ast str,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub left: &'ast Expr<'ast>,
    pub op: BinaryOp,
    pub right: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: &'ast Expr<'ast>,
    pub span: Span,
}
