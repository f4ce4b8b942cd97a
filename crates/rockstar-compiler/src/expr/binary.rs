//! Binary operator compilation.

use rockstar_core::CompileError;
use rockstar_parser::ast::BinaryExpr;

use super::{ExprCompiler, Result};
use crate::expr_info::ExprInfo;
use crate::operators::{BinaryPlan, plan_binary};

/// Both operands are always evaluated, left first.
pub fn compile_binary(
    compiler: &mut ExprCompiler<'_, '_, '_>,
    bin: &BinaryExpr<'_>,
) -> Result<ExprInfo> {
    let left = compiler.compile(bin.left)?;
    let right = compiler.compile(bin.right)?;

    let (plan, result) = plan_binary(bin.op, left, right).map_err(|message| {
        CompileError::TypeMismatch {
            message,
            span: bin.span,
        }
    })?;

    let emitter = compiler.emitter();
    match plan {
        BinaryPlan::Typed {
            op,
            check_left,
            check_right,
        } => {
            if check_left {
                emitter.emit_expect_number(1);
            }
            if check_right {
                emitter.emit_expect_number(0);
            }
            emitter.emit(op);
        }
        BinaryPlan::Runtime(function) => emitter.emit_call_runtime(function)?,
        BinaryPlan::Dispatch(op) => emitter.emit(op),
    }

    Ok(result)
}
