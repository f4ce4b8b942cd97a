//! Bytecode operation codes.
//!
//! Each opcode is a single byte, with operands following inline
//! (big-endian).

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Bytecode operation codes.
///
/// The VM is a stack machine over dynamic values. Most operations pop
/// their operands and push one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // =========================================================================
    // Constants
    // =========================================================================
    /// Push constant from pool (8-bit index).
    /// Operand: u8 constant index
    Constant = 0,
    /// Push constant from pool (16-bit index).
    /// Operand: u16 constant index
    ConstantWide,
    /// Push boolean true.
    PushTrue,
    /// Push boolean false.
    PushFalse,
    /// Push null.
    PushNull,
    /// Push mysterious.
    PushMysterious,

    // =========================================================================
    // Storage slots
    // =========================================================================
    /// Push the value of a field of the unit.
    /// Operand: u16 field index
    GetField,
    /// Pop a value into a field of the unit.
    /// Operand: u16 field index
    SetField,

    // =========================================================================
    // Typed arithmetic (operands already known to be numbers)
    // =========================================================================
    AddF64,
    SubF64,
    MulF64,
    DivF64,

    // =========================================================================
    // Type-tag checks
    // =========================================================================
    /// Fault unless the value `depth` entries below the top is a number.
    /// Operand: u8 depth (0 = top)
    ExpectNumber,

    // =========================================================================
    // Tag-dispatching comparisons and logic
    // =========================================================================
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    /// Push the negated truthiness of the top value.
    Not,
    And,
    Or,
    Nor,

    // =========================================================================
    // Runtime support and output
    // =========================================================================
    /// Call a runtime routine.
    /// Operands: u16 constant index (routine hash), u8 argument count
    CallRuntime,
    /// Pop a value and write its text followed by a newline.
    WriteLine,
    /// End of the entry routine.
    Return,
}

impl OpCode {
    /// Convert from u8, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Size of the operands in bytes, not counting the opcode itself.
    pub fn operand_size(&self) -> usize {
        match self {
            OpCode::Constant | OpCode::ExpectNumber => 1,
            OpCode::ConstantWide | OpCode::GetField | OpCode::SetField => 2,
            OpCode::CallRuntime => 3,
            OpCode::PushTrue
            | OpCode::PushFalse
            | OpCode::PushNull
            | OpCode::PushMysterious
            | OpCode::AddF64
            | OpCode::SubF64
            | OpCode::MulF64
            | OpCode::DivF64
            | OpCode::Equal
            | OpCode::NotEqual
            | OpCode::Less
            | OpCode::LessEqual
            | OpCode::Greater
            | OpCode::GreaterEqual
            | OpCode::Not
            | OpCode::And
            | OpCode::Or
            | OpCode::Nor
            | OpCode::WriteLine
            | OpCode::Return => 0,
        }
    }

    /// Get the name of this opcode for debugging.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::Constant => "CONSTANT",
            OpCode::ConstantWide => "CONSTANT_WIDE",
            OpCode::PushTrue => "PUSH_TRUE",
            OpCode::PushFalse => "PUSH_FALSE",
            OpCode::PushNull => "PUSH_NULL",
            OpCode::PushMysterious => "PUSH_MYSTERIOUS",
            OpCode::GetField => "GET_FIELD",
            OpCode::SetField => "SET_FIELD",
            OpCode::AddF64 => "ADD_F64",
            OpCode::SubF64 => "SUB_F64",
            OpCode::MulF64 => "MUL_F64",
            OpCode::DivF64 => "DIV_F64",
            OpCode::ExpectNumber => "EXPECT_NUMBER",
            OpCode::Equal => "EQUAL",
            OpCode::NotEqual => "NOT_EQUAL",
            OpCode::Less => "LESS",
            OpCode::LessEqual => "LESS_EQUAL",
            OpCode::Greater => "GREATER",
            OpCode::GreaterEqual => "GREATER_EQUAL",
            OpCode::Not => "NOT",
            OpCode::And => "AND",
            OpCode::Or => "OR",
            OpCode::Nor => "NOR",
            OpCode::CallRuntime => "CALL_RUNTIME",
            OpCode::WriteLine => "WRITE_LINE",
            OpCode::Return => "RETURN",
        }
    }
}
