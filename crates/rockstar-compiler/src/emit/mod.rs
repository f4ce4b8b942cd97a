//! Bytecode emitter for the Rockstar compiler.
//!
//! [`BytecodeEmitter`] is the target-side surface the code generator
//! drives: constant loads, field loads and stores, runtime calls and line
//! output. It owns the chunk being built and borrows the unit's constant
//! pool.

use rockstar_core::{CompileError, RuntimeFn, Span, Value};

use crate::bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
use crate::storage::SlotId;

type Result<T> = std::result::Result<T, CompileError>;

pub struct BytecodeEmitter<'pool> {
    chunk: BytecodeChunk,
    constants: &'pool mut ConstantPool,
    /// Source line for debug info
    current_line: u32,
}

impl<'pool> BytecodeEmitter<'pool> {
    pub fn new(constants: &'pool mut ConstantPool) -> Self {
        Self {
            chunk: BytecodeChunk::new(),
            constants,
            current_line: 1,
        }
    }

    /// Set current source line for debug info.
    pub fn set_line(&mut self, line: u32) {
        self.current_line = line;
    }

    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    // ==========================================================================
    // Basic Emission
    // ==========================================================================

    pub fn emit(&mut self, op: OpCode) {
        self.chunk.write_op(op, self.current_line);
    }

    pub fn emit_byte(&mut self, op: OpCode, byte: u8) {
        self.chunk.write_op(op, self.current_line);
        self.chunk.write_byte(byte, self.current_line);
    }

    pub fn emit_u16(&mut self, op: OpCode, value: u16) {
        self.chunk.write_op(op, self.current_line);
        self.chunk.write_u16(value, self.current_line);
    }

    /// Emit a constant load, narrow or wide depending on the pool index.
    pub fn emit_constant(&mut self, constant: Constant) -> Result<()> {
        let index = self.add_constant(constant)?;
        if index < 256 {
            self.emit_byte(OpCode::Constant, index as u8);
        } else {
            self.emit_u16(OpCode::ConstantWide, index);
        }
        Ok(())
    }

    fn add_constant(&mut self, constant: Constant) -> Result<u16> {
        let index = self.constants.add(constant);
        u16::try_from(index).map_err(|_| CompileError::LimitExceeded {
            message: format!("more than {} constants", u16::MAX as u32 + 1),
            span: Span::point(self.current_line, 1),
        })
    }

    // ==========================================================================
    // Values
    // ==========================================================================

    /// Push a dynamic value. Numbers and text go through the pool, the
    /// other kinds have dedicated instructions.
    pub fn emit_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Number(n) => self.emit_number(*n),
            Value::Text(s) => self.emit_text(s),
            Value::Boolean(b) => {
                self.emit_bool(*b);
                Ok(())
            }
            Value::Mysterious => {
                self.emit(OpCode::PushMysterious);
                Ok(())
            }
            Value::Null => {
                self.emit(OpCode::PushNull);
                Ok(())
            }
        }
    }

    pub fn emit_number(&mut self, value: f64) -> Result<()> {
        self.emit_constant(Constant::Number(value))
    }

    pub fn emit_text(&mut self, value: &str) -> Result<()> {
        self.emit_constant(Constant::Text(value.to_string()))
    }

    pub fn emit_bool(&mut self, value: bool) {
        self.emit(if value {
            OpCode::PushTrue
        } else {
            OpCode::PushFalse
        });
    }

    // ==========================================================================
    // Fields
    // ==========================================================================

    pub fn emit_get_field(&mut self, slot: SlotId) {
        self.emit_u16(OpCode::GetField, slot.index());
    }

    pub fn emit_set_field(&mut self, slot: SlotId) {
        self.emit_u16(OpCode::SetField, slot.index());
    }

    // ==========================================================================
    // Checks, runtime calls and output
    // ==========================================================================

    /// Fault at runtime unless the value `depth` below the top is a number.
    pub fn emit_expect_number(&mut self, depth: u8) {
        self.emit_byte(OpCode::ExpectNumber, depth);
    }

    /// Call a runtime routine on the top `arity` values.
    pub fn emit_call_runtime(&mut self, function: RuntimeFn) -> Result<()> {
        let index = self.add_constant(Constant::RuntimeFn(function.hash()))?;
        self.emit_u16(OpCode::CallRuntime, index);
        self.chunk.write_byte(function.arity(), self.current_line);
        Ok(())
    }

    pub fn emit_write_line(&mut self) {
        self.emit(OpCode::WriteLine);
    }

    /// Terminate the routine and hand back the chunk.
    pub fn finish(mut self) -> BytecodeChunk {
        self.emit(OpCode::Return);
        self.chunk
    }

    /// The chunk built so far, without a terminating `Return`.
    pub fn chunk(&self) -> &BytecodeChunk {
        &self.chunk
    }
}
