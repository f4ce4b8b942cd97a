//! Bytecode types for the Rockstar compiler.
//!
//! - [`OpCode`] - The instruction set for the VM
//! - [`BytecodeChunk`] - Compiled bytecode for the entry routine
//! - [`Constant`] and [`ConstantPool`] - Unit-level constant storage

mod chunk;
mod constant;
mod opcode;

pub use chunk::BytecodeChunk;
pub use constant::{Constant, ConstantPool};
pub use opcode::OpCode;
