//! `Build X up` and `Knock X down`.

use rockstar_parser::ast::StepStmt;

use super::{Result, StmtCompiler};
use crate::bytecode::OpCode;

/// Add or subtract `count` from a numeric variable in place.
pub fn compile_step(
    compiler: &mut StmtCompiler<'_, '_, '_>,
    step: &StepStmt<'_>,
    up: bool,
) -> Result<()> {
    let identity = compiler.ctx().identity(&step.target)?;
    match compiler.ctx().slot_to_read(&identity, step.target.span)? {
        Some(slot) => compiler.emitter().emit_get_field(slot),
        None => compiler.emitter().emit(OpCode::PushMysterious),
    }

    compiler.emitter().emit_expect_number(0);
    compiler.emitter().emit_number(f64::from(step.count))?;
    compiler
        .emitter()
        .emit(if up { OpCode::AddF64 } else { OpCode::SubF64 });

    let slot = compiler.ctx().slot_for(&identity, step.target.span)?;
    compiler.emitter().emit_set_field(slot);
    Ok(())
}
