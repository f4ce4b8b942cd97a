//! Assignment compilation.

use rockstar_parser::ast::AssignStmt;

use super::{Result, StmtCompiler};

/// Evaluate the value, then store it in the target's slot.
///
/// The target's identity is resolved in source order relative to the
/// value, so a pronoun refers to whatever was named before it on the line.
/// The slot itself is created only after the value compiled, which keeps
/// `Let X be X plus 1` an unbound read when `X` is new.
pub fn compile_assign(compiler: &mut StmtCompiler<'_, '_, '_>, assign: &AssignStmt<'_>) -> Result<()> {
    let identity = if assign.target_first() {
        let identity = compiler.ctx().identity(&assign.target)?;
        compiler.expr().compile(assign.value)?;
        identity
    } else {
        compiler.expr().compile(assign.value)?;
        compiler.ctx().identity(&assign.target)?
    };

    let slot = compiler.ctx().slot_for(&identity, assign.target.span)?;
    compiler.emitter().emit_set_field(slot);
    Ok(())
}
