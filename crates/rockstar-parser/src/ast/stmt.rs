//! Statement AST nodes.

use crate::ast::expr::{Expr, VariableRef};
use rockstar_core::Span;

/// A statement. Every non-blank line holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// `Put .. into ..`, `Let .. be ..`, `X is ..`, `X says ..`
    Assign(AssignStmt<'ast>),
    /// `Say`, `Shout`, `Whisper`, `Scream`
    Output(OutputStmt<'ast>),
    /// `Build X up`
    Increment(StepStmt<'ast>),
    /// `Knock X down`
    Decrement(StepStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Assign(s) => s.span,
            Self::Output(s) => s.span,
            Self::Increment(s) | Self::Decrement(s) => s.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    pub target: VariableRef<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

impl AssignStmt<'_> {
    /// True when the target is written before the value (`Let`, `is`,
    /// `says`), which decides what a pronoun inside the value refers to.
    pub fn target_first(&self) -> bool {
        self.target.span.col < self.value.span().col
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputStmt<'ast> {
    pub kind: OutputKind,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

/// The output verbs. They all write one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Say,
    Shout,
    Whisper,
    Scream,
}

impl OutputKind {
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "say" => Some(Self::Say),
            "shout" => Some(Self::Shout),
            "whisper" => Some(Self::Whisper),
            "scream" => Some(Self::Scream),
            _ => None,
        }
    }
}

/// Increment or decrement by `count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStmt<'ast> {
    pub target: VariableRef<'ast>,
    pub count: u32,
    pub span: Span,
}
