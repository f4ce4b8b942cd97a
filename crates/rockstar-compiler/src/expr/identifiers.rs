//! Variable reference compilation.

use rockstar_core::ValueKind;
use rockstar_parser::ast::VariableRef;

use super::{ExprCompiler, Result};
use crate::bytecode::OpCode;
use crate::expr_info::ExprInfo;

/// Resolve the reference and load its slot.
///
/// A variable that was never assigned is an error, or reads as mysterious
/// when the unbound policy allows it.
pub fn compile_variable(
    compiler: &mut ExprCompiler<'_, '_, '_>,
    variable: &VariableRef<'_>,
) -> Result<ExprInfo> {
    let identity = compiler.ctx().identity(variable)?;
    match compiler.ctx().slot_to_read(&identity, variable.span)? {
        Some(slot) => {
            compiler.emitter().emit_get_field(slot);
            Ok(ExprInfo::new(compiler.ctx().declared_kinds(slot)))
        }
        None => {
            log::debug!("'{identity}' read before assignment, using mysterious");
            compiler.emitter().emit(OpCode::PushMysterious);
            Ok(ExprInfo::of(ValueKind::Mysterious))
        }
    }
}
