//! Expression compiler.
//!
//! [`ExprCompiler`] emits the code that leaves an expression's value on the
//! stack and reports what kinds that value may have, so enclosing operators
//! can pick typed instructions or insert tag checks.

mod binary;
mod identifiers;
mod literals;
mod unary;

use rockstar_core::CompileError;
use rockstar_parser::ast::Expr;

use crate::context::CompilationContext;
use crate::emit::BytecodeEmitter;
use crate::expr_info::ExprInfo;

type Result<T> = std::result::Result<T, CompileError>;

pub struct ExprCompiler<'a, 'v, 'pool> {
    ctx: &'a mut CompilationContext<'v>,
    emitter: &'a mut BytecodeEmitter<'pool>,
}

impl<'a, 'v, 'pool> ExprCompiler<'a, 'v, 'pool> {
    pub fn new(
        ctx: &'a mut CompilationContext<'v>,
        emitter: &'a mut BytecodeEmitter<'pool>,
    ) -> Self {
        Self { ctx, emitter }
    }

    /// Compile an expression, leaving its value on the stack.
    pub fn compile(&mut self, expr: &Expr<'_>) -> Result<ExprInfo> {
        match expr {
            Expr::Literal(lit) => literals::compile_literal(self, &lit.kind),
            Expr::Poetic(poetic) => literals::compile_poetic(self, poetic),
            Expr::Variable(variable) => identifiers::compile_variable(self, variable),
            Expr::Binary(bin) => binary::compile_binary(self, bin),
            Expr::Unary(un) => unary::compile_unary(self, un),
        }
    }

    pub(crate) fn ctx(&mut self) -> &mut CompilationContext<'v> {
        self.ctx
    }

    pub(crate) fn emitter(&mut self) -> &mut BytecodeEmitter<'pool> {
        self.emitter
    }
}
