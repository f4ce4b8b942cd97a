//! Rockstar Compiler
//!
//! Turns a parsed Rockstar [`Program`] into a [`CompiledProgram`]: one
//! bytecode routine, its constant pool and the fields it reads and writes.
//!
//! ## Modules
//!
//! - [`names`]: variable classification, canonical names and pronoun history
//! - [`storage`]: the per-unit field registry
//! - [`bytecode`]: bytecode types (OpCode, BytecodeChunk, ConstantPool)
//! - [`emit`]: high-level bytecode emitter
//! - [`expr`]: expression compiler with static kind tracking
//! - [`stmt`]: statement compiler
//! - [`operators`]: operator planning from operand kinds
//! - [`options`]: compile options
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use rockstar_compiler::{CompileOptions, Compiler};
//! use rockstar_parser::Parser;
//!
//! let options = CompileOptions::new();
//! let arena = Bump::new();
//! let program = Parser::parse("My thing is 5\nShout my thing", &arena, options.vocabulary()).unwrap();
//!
//! let compiled = Compiler::compile(&program, &options).unwrap();
//! assert_eq!(compiled.fields[0].slot_name, "my__thing");
//! ```

pub mod bytecode;
pub mod context;
mod disassemble;
pub mod emit;
pub mod expr;
mod expr_info;
pub mod names;
pub mod operators;
pub mod options;
pub mod stmt;
pub mod storage;

pub use bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
pub use context::CompilationContext;
pub use emit::BytecodeEmitter;
pub use expr::ExprCompiler;
pub use expr_info::ExprInfo;
pub use names::{NameNormalizer, PronounHistory, VariableIdentity, VariableKind};
pub use options::{CompileOptions, UnboundPolicy};
pub use stmt::StmtCompiler;
pub use storage::{SlotId, StorageAllocator, StorageSlot};

pub use rockstar_core::CompileError;

use rockstar_parser::Program;

/// A compiled unit, ready to run.
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    /// Name of the unit that owns every field.
    pub name: String,
    /// One field per distinct variable, indexed by [`SlotId`].
    pub fields: Vec<StorageSlot>,
    /// The entry routine. Runs every statement in source order.
    pub entry: BytecodeChunk,
    pub constants: ConstantPool,
}

impl CompiledProgram {
    /// Field by slot name, e.g. `"doctor__feelgood"`.
    pub fn field(&self, slot_name: &str) -> Option<&StorageSlot> {
        self.fields.iter().find(|f| f.slot_name == slot_name)
    }
}

/// The compiler entry point.
pub struct Compiler;

impl Compiler {
    /// Compile a program.
    ///
    /// Each call gets its own pronoun history and field registry. The first
    /// error aborts the compilation.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(
        program: &Program<'_>,
        options: &CompileOptions,
    ) -> Result<CompiledProgram, CompileError> {
        log::debug!(
            "compiling {} statements into '{}'",
            program.len(),
            options.unit_name()
        );

        let mut constants = ConstantPool::new();
        let mut ctx = CompilationContext::new(options);
        let mut emitter = BytecodeEmitter::new(&mut constants);

        for stmt in program.statements() {
            StmtCompiler::new(&mut ctx, &mut emitter).compile(stmt)?;
        }

        let entry = emitter.finish();
        let storage = ctx.into_storage();
        log::debug!(
            "compiled '{}': {} bytes, {} fields, {} constants",
            storage.owner(),
            entry.len(),
            storage.len(),
            constants.len()
        );

        Ok(CompiledProgram {
            name: storage.owner().to_string(),
            fields: storage.into_slots(),
            entry,
            constants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use rockstar_parser::Parser;

    fn compile(source: &str) -> Result<CompiledProgram, CompileError> {
        let options = CompileOptions::new();
        let arena = Bump::new();
        let program = Parser::parse(source, &arena, options.vocabulary()).unwrap();
        Compiler::compile(&program, &options)
    }

    #[test]
    fn empty_program_just_returns() {
        let compiled = compile("").unwrap();
        compiled.entry.assert_opcodes(&[OpCode::Return]);
        assert!(compiled.fields.is_empty());
        assert_eq!(compiled.name, "Rockstar");
    }

    #[test]
    fn fields_follow_first_assignment_order() {
        let compiled = compile("Put 1 into Doctor Feelgood\nThe boy is 2\nA boy is 3").unwrap();
        let names: Vec<_> = compiled.fields.iter().map(|f| f.slot_name.as_str()).collect();
        assert_eq!(names, ["doctor__feelgood", "the__boy", "a__boy"]);
        assert!(compiled.field("the__boy").is_some());
    }

    #[test]
    fn unit_name_comes_from_options() {
        let options = CompileOptions::new().with_unit_name("Greatest Hits");
        let arena = Bump::new();
        let program = Parser::parse("X is 1", &arena, options.vocabulary()).unwrap();
        let compiled = Compiler::compile(&program, &options).unwrap();
        assert_eq!(compiled.name, "Greatest Hits");
    }

    #[test]
    fn compilations_do_not_share_pronouns() {
        compile("Put 1 into X").unwrap();
        assert!(matches!(
            compile("Shout it"),
            Err(CompileError::UnresolvedPronoun { .. })
        ));
    }

    #[test]
    fn first_error_aborts() {
        let err = compile("X is 1\nShout Y\nShout it").unwrap_err();
        assert!(matches!(err, CompileError::UnboundVariable { ref name, .. } if name == "y"));
        assert_eq!(err.span().line, 2);
    }

    #[test]
    fn unbound_reads_can_be_mysterious() {
        let options = CompileOptions::new().with_unbound_reads(UnboundPolicy::Mysterious);
        let arena = Bump::new();
        let program = Parser::parse("Shout Y", &arena, options.vocabulary()).unwrap();
        let compiled = Compiler::compile(&program, &options).unwrap();
        compiled.entry.assert_contains_opcodes(&[OpCode::PushMysterious, OpCode::WriteLine]);
        assert!(compiled.fields.is_empty());
    }

    #[test]
    fn static_type_mismatch_is_rejected() {
        let err = compile("X is 1\nPut \"a\" minus 2 into X").unwrap_err();
        assert!(matches!(err, CompileError::TypeMismatch { .. }));
    }
}
