//! Prefix operator compilation.

use rockstar_parser::ast::UnaryExpr;

use super::{ExprCompiler, Result};
use crate::expr_info::ExprInfo;
use crate::operators::plan_unary;

pub fn compile_unary(
    compiler: &mut ExprCompiler<'_, '_, '_>,
    un: &UnaryExpr<'_>,
) -> Result<ExprInfo> {
    compiler.compile(un.operand)?;
    let (op, result) = plan_unary(un.op);
    compiler.emitter().emit(op);
    Ok(result)
}
