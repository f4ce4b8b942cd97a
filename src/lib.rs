//! Rockstar
//!
//! Compiles Rockstar programs to bytecode and runs them.
//!
//! The pipeline is split across the workspace:
//!
//! - `rockstar-parser` turns source text into an arena-allocated AST
//! - `rockstar-compiler` resolves variable names, allocates storage and
//!   emits bytecode
//! - [`vm`] executes the compiled program
//!
//! ```
//! let mut out = Vec::new();
//! rockstar::run("Rockstar is a big bad monster\nShout Rockstar", &mut out).unwrap();
//! assert_eq!(out, b"1337\n");
//! ```

pub mod vm;

use std::io::Write;

use bumpalo::Bump;
use rockstar_compiler::Compiler;
use rockstar_parser::Parser;

pub use rockstar_compiler::{CompileOptions, CompiledProgram, UnboundPolicy};
pub use rockstar_core::{
    CompileError, LexError, ParseError, ParseErrorKind, ParseErrors, RockstarError, RuntimeError,
    Span, Value,
};
pub use rockstar_parser::Vocabulary;
pub use vm::Vm;

/// Parse and compile `source`.
///
/// The AST lives in a temporary arena; the compiled program owns
/// everything it needs.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile(source: &str, options: &CompileOptions) -> Result<CompiledProgram, RockstarError> {
    let arena = Bump::new();
    let program = Parser::parse(source, &arena, options.vocabulary())?;
    let compiled = Compiler::compile(&program, options)?;
    log::debug!("'{}' ready: {} fields", compiled.name, compiled.fields.len());
    Ok(compiled)
}

/// Compile `source` with default options and run it.
pub fn run(source: &str, out: &mut impl Write) -> Result<(), RockstarError> {
    run_with(source, &CompileOptions::default(), out)
}

/// Compile `source` with `options` and run it.
pub fn run_with(
    source: &str,
    options: &CompileOptions,
    out: &mut impl Write,
) -> Result<(), RockstarError> {
    let program = compile(source, options)?;
    Vm::run(&program, out)?;
    Ok(())
}
