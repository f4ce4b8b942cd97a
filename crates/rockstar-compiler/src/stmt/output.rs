//! `Say`, `Shout`, `Whisper` and `Scream`.

use rockstar_core::RuntimeFn;
use rockstar_parser::ast::OutputStmt;

use super::{Result, StmtCompiler};

/// All four output verbs print the value's text form followed by a newline.
pub fn compile_output(compiler: &mut StmtCompiler<'_, '_, '_>, output: &OutputStmt<'_>) -> Result<()> {
    compiler.expr().compile(output.value)?;
    compiler.emitter().emit_call_runtime(RuntimeFn::ToText)?;
    compiler.emitter().emit_write_line();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::compile_stmts;
    use crate::bytecode::OpCode;

    #[test]
    fn number_is_converted_to_text() {
        let (chunk, _, _) = compile_stmts("Put 123 into X\nShout X").unwrap();
        chunk.assert_opcodes(&[
            OpCode::Constant,
            OpCode::SetField,
            OpCode::GetField,
            OpCode::CallRuntime,
            OpCode::WriteLine,
        ]);
    }

    #[test]
    fn string_literal_still_goes_through_to_text() {
        let (chunk, _, _) = compile_stmts("Whisper \"hello\"").unwrap();
        chunk.assert_opcodes(&[OpCode::Constant, OpCode::CallRuntime, OpCode::WriteLine]);
    }

    #[test]
    fn output_lines_are_recorded() {
        let (chunk, _, _) = compile_stmts("X is 1\n\nScream X").unwrap();
        let last = chunk.len() - 1;
        assert_eq!(chunk.line_at(last), Some(3));
    }
}
