//! Operator selection.
//!
//! Given the kinds the operands may have, decide which instruction sequence
//! implements an operator and what kinds the result may have. Operand
//! pairs that can never succeed are rejected here; everything else is
//! either proven safe statically or checked by the VM at runtime.

use rockstar_core::{RuntimeFn, ValueKind, ValueKinds};
use rockstar_parser::ast::{BinaryOp, UnaryOp};

use crate::bytecode::OpCode;
use crate::expr_info::ExprInfo;

/// How to emit a binary operator once both operands are on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryPlan {
    /// Number instruction, preceded by a tag check on each operand not
    /// already known to be a number.
    Typed {
        op: OpCode,
        check_left: bool,
        check_right: bool,
    },
    /// Runtime routine that dispatches on the operand tags.
    Runtime(RuntimeFn),
    /// Instruction that dispatches on the operand tags itself.
    Dispatch(OpCode),
}

/// The plan for `left op right` and the kinds of its result, or a message
/// saying why the operands can never work.
pub fn plan_binary(
    op: BinaryOp,
    left: ExprInfo,
    right: ExprInfo,
) -> Result<(BinaryPlan, ExprInfo), String> {
    let (l, r) = (left.kinds, right.kinds);
    let both_may_be = |kind| l.may_be(kind) && r.may_be(kind);

    match op {
        BinaryOp::Add => {
            if left.is_number() && right.is_number() {
                Ok((typed(OpCode::AddF64, left, right), ExprInfo::of(ValueKind::Number)))
            } else if left.is_text() || right.is_text() {
                Ok((BinaryPlan::Runtime(RuntimeFn::Concat), ExprInfo::of(ValueKind::Text)))
            } else if !l.may_be(ValueKind::Text)
                && !r.may_be(ValueKind::Text)
                && !both_may_be(ValueKind::Number)
            {
                Err(mismatch(op, l, r))
            } else {
                let result = ValueKinds::NUMBER | ValueKinds::TEXT;
                Ok((BinaryPlan::Runtime(RuntimeFn::Add), ExprInfo::new(result)))
            }
        }
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            if !both_may_be(ValueKind::Number) {
                return Err(mismatch(op, l, r));
            }
            let opcode = match op {
                BinaryOp::Sub => OpCode::SubF64,
                BinaryOp::Mul => OpCode::MulF64,
                _ => OpCode::DivF64,
            };
            Ok((typed(opcode, left, right), ExprInfo::of(ValueKind::Number)))
        }
        BinaryOp::Eq | BinaryOp::Ne => {
            let opcode = if op == BinaryOp::Eq {
                OpCode::Equal
            } else {
                OpCode::NotEqual
            };
            Ok((BinaryPlan::Dispatch(opcode), ExprInfo::of(ValueKind::Boolean)))
        }
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            if !both_may_be(ValueKind::Number) && !both_may_be(ValueKind::Text) {
                return Err(mismatch(op, l, r));
            }
            let opcode = match op {
                BinaryOp::Lt => OpCode::Less,
                BinaryOp::Le => OpCode::LessEqual,
                BinaryOp::Gt => OpCode::Greater,
                _ => OpCode::GreaterEqual,
            };
            Ok((BinaryPlan::Dispatch(opcode), ExprInfo::of(ValueKind::Boolean)))
        }
        BinaryOp::And | BinaryOp::Or | BinaryOp::Nor => {
            let opcode = match op {
                BinaryOp::And => OpCode::And,
                BinaryOp::Or => OpCode::Or,
                _ => OpCode::Nor,
            };
            Ok((BinaryPlan::Dispatch(opcode), ExprInfo::of(ValueKind::Boolean)))
        }
    }
}

/// The instruction for a prefix operator and the kinds of its result.
pub fn plan_unary(op: UnaryOp) -> (OpCode, ExprInfo) {
    match op {
        UnaryOp::Not => (OpCode::Not, ExprInfo::of(ValueKind::Boolean)),
    }
}

fn typed(op: OpCode, left: ExprInfo, right: ExprInfo) -> BinaryPlan {
    BinaryPlan::Typed {
        op,
        check_left: !left.is_number(),
        check_right: !right.is_number(),
    }
}

fn mismatch(op: BinaryOp, left: ValueKinds, right: ValueKinds) -> String {
    format!(
        "'{op}' cannot be applied to {} and {}",
        left.describe(),
        right.describe()
    )
}
