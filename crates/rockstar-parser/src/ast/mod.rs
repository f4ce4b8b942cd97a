//! Abstract syntax tree for Rockstar programs and the parser that builds it.

pub mod expr;
pub mod ops;
pub mod stmt;

mod expr_parser;
mod parser;
mod poetic;
mod stmt_parser;

pub use rockstar_core::{ParseError, ParseErrorKind, ParseErrors};

pub use expr::*;
pub use ops::*;
pub use parser::Parser;
pub use poetic::{poetic_number, poetic_string};
pub use stmt::*;

/// A parsed program: its statements in source order.
///
/// All nodes live in the arena passed to [`Parser::parse`].
#[derive(Debug, Clone, Copy)]
pub struct Program<'ast> {
    statements: &'ast [Stmt<'ast>],
}

impl<'ast> Program<'ast> {
    pub(crate) fn new(statements: &'ast [Stmt<'ast>]) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &'ast [Stmt<'ast>] {
        self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
