//! Human-readable listing of a compiled program.

use std::fmt::Write;

use rockstar_core::RuntimeFn;

use crate::bytecode::{Constant, OpCode};
use crate::CompiledProgram;

impl CompiledProgram {
    /// Render the field table and the entry routine, one instruction per
    /// line, with constants and field names resolved.
    ///
    /// ```text
    /// == Rockstar ==
    /// field 0 x (x)
    /// 0000    1 CONSTANT 0 ; 123
    /// 0002    | SET_FIELD 0 ; x
    /// ```
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.name);
        for (index, field) in self.fields.iter().enumerate() {
            let _ = writeln!(out, "field {index} {} ({})", field.slot_name, field.canonical_name);
        }

        let chunk = &self.entry;
        let mut offset = 0;
        let mut previous_line = None;
        while offset < chunk.len() {
            let line = chunk.line_at(offset);
            let _ = match line {
                Some(line) if previous_line == Some(line) => write!(out, "{offset:04}    | "),
                Some(line) => write!(out, "{offset:04} {line:>4} "),
                None => write!(out, "{offset:04}    ? "),
            };
            previous_line = line;

            let Some(op) = chunk.read_op(offset) else {
                let byte = chunk.read_byte(offset).unwrap_or(0);
                let _ = writeln!(out, "<invalid {byte:#04x}>");
                offset += 1;
                continue;
            };
            let _ = writeln!(out, "{}", self.describe(op, offset + 1));
            offset += 1 + op.operand_size();
        }
        out
    }

    fn describe(&self, op: OpCode, operands: usize) -> String {
        let chunk = &self.entry;
        let name = op.name();
        match op {
            OpCode::Constant => match chunk.read_byte(operands) {
                Some(index) => format!("{name} {index} ; {}", self.constant_text(u32::from(index))),
                None => format!("{name} <truncated>"),
            },
            OpCode::ConstantWide => match chunk.read_u16(operands) {
                Some(index) => format!("{name} {index} ; {}", self.constant_text(u32::from(index))),
                None => format!("{name} <truncated>"),
            },
            OpCode::GetField | OpCode::SetField => match chunk.read_u16(operands) {
                Some(index) => {
                    let field = self
                        .fields
                        .get(usize::from(index))
                        .map_or("<unknown>", |f| f.canonical_name.as_str());
                    format!("{name} {index} ; {field}")
                }
                None => format!("{name} <truncated>"),
            },
            OpCode::ExpectNumber => match chunk.read_byte(operands) {
                Some(depth) => format!("{name} {depth}"),
                None => format!("{name} <truncated>"),
            },
            OpCode::CallRuntime => {
                match (chunk.read_u16(operands), chunk.read_byte(operands + 2)) {
                    (Some(index), Some(argc)) => {
                        let function = match self.constants.get(u32::from(index)) {
                            Some(Constant::RuntimeFn(hash)) => {
                                RuntimeFn::from_hash(*hash).map_or("<unknown>", |f| f.name())
                            }
                            _ => "<not a function>",
                        };
                        format!("{name} {function}/{argc}")
                    }
                    _ => format!("{name} <truncated>"),
                }
            }
            _ => name.to_string(),
        }
    }

    fn constant_text(&self, index: u32) -> String {
        self.constants
            .get(index)
            .map_or_else(|| "<missing>".to_string(), |c| c.to_string())
    }
}
