//! Literal expression compilation.

use rockstar_core::{Value, ValueKind};
use rockstar_parser::ast::{LiteralKind, PoeticNumber};

use super::{ExprCompiler, Result};
use crate::expr_info::ExprInfo;

pub fn compile_literal(
    compiler: &mut ExprCompiler<'_, '_, '_>,
    kind: &LiteralKind<'_>,
) -> Result<ExprInfo> {
    let value = match kind {
        LiteralKind::Number(n) => Value::Number(*n),
        LiteralKind::String(s) => Value::Text((*s).to_string()),
        LiteralKind::Bool(b) => Value::Boolean(*b),
        LiteralKind::Mysterious => Value::Mysterious,
        LiteralKind::Null => Value::Null,
    };
    compiler.emitter().emit_value(&value)?;
    Ok(ExprInfo::of(value.kind()))
}

/// Poetic numbers arrive decoded and are ordinary number constants here.
pub fn compile_poetic(
    compiler: &mut ExprCompiler<'_, '_, '_>,
    poetic: &PoeticNumber<'_>,
) -> Result<ExprInfo> {
    compiler.emitter().emit_number(poetic.value)?;
    Ok(ExprInfo::of(ValueKind::Number))
}
