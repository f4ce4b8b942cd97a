//! Statement compiler.
//!
//! [`StmtCompiler`] emits each statement in source order. Every statement
//! leaves the value stack as it found it.

mod assignment;
mod output;
mod step;

use rockstar_core::CompileError;
use rockstar_parser::ast::Stmt;

use crate::context::CompilationContext;
use crate::emit::BytecodeEmitter;
use crate::expr::ExprCompiler;

type Result<T> = std::result::Result<T, CompileError>;

pub struct StmtCompiler<'a, 'v, 'pool> {
    ctx: &'a mut CompilationContext<'v>,
    emitter: &'a mut BytecodeEmitter<'pool>,
}

impl<'a, 'v, 'pool> StmtCompiler<'a, 'v, 'pool> {
    pub fn new(
        ctx: &'a mut CompilationContext<'v>,
        emitter: &'a mut BytecodeEmitter<'pool>,
    ) -> Self {
        Self { ctx, emitter }
    }

    pub fn compile(&mut self, stmt: &Stmt<'_>) -> Result<()> {
        self.emitter.set_line(stmt.span().line);
        log::trace!("line {}: {:?}", stmt.span().line, stmt);

        match stmt {
            Stmt::Assign(assign) => assignment::compile_assign(self, assign),
            Stmt::Output(output) => output::compile_output(self, output),
            Stmt::Increment(step) => step::compile_step(self, step, true),
            Stmt::Decrement(step) => step::compile_step(self, step, false),
        }
    }

    fn ctx(&mut self) -> &mut CompilationContext<'v> {
        self.ctx
    }

    fn emitter(&mut self) -> &mut BytecodeEmitter<'pool> {
        self.emitter
    }

    fn expr(&mut self) -> ExprCompiler<'_, 'v, 'pool> {
        ExprCompiler::new(self.ctx, self.emitter)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use bumpalo::Bump;
    use rockstar_core::CompileError;
    use rockstar_parser::Parser;

    use super::StmtCompiler;
    use crate::bytecode::{BytecodeChunk, ConstantPool};
    use crate::context::CompilationContext;
    use crate::emit::BytecodeEmitter;
    use crate::options::CompileOptions;
    use crate::storage::StorageAllocator;

    /// Compile every statement of `source`, without the final `Return`.
    pub fn compile_stmts(
        source: &str,
    ) -> Result<(BytecodeChunk, ConstantPool, StorageAllocator), CompileError> {
        let options = CompileOptions::new();
        let arena = Bump::new();
        let program = Parser::parse(source, &arena, options.vocabulary()).expect("parse");

        let mut pool = ConstantPool::new();
        let mut ctx = CompilationContext::new(&options);
        let mut emitter = BytecodeEmitter::new(&mut pool);
        for stmt in program.statements() {
            StmtCompiler::new(&mut ctx, &mut emitter).compile(stmt)?;
        }
        let chunk = emitter.chunk().clone();
        Ok((chunk, pool, ctx.into_storage()))
    }
}
