//! Rockstar Core
//!
//! Types shared by the parser, the compiler and the VM:
//!
//! - [`Span`]: line/column locations for diagnostics
//! - [`error`]: the error hierarchy for every phase
//! - [`Value`]: the tagged dynamic value and its coercion rules
//! - [`ValueKinds`]: compile-time sets of possible value kinds
//! - [`RuntimeFn`]: runtime support routines referenced by generated code

pub mod error;
mod runtime_fn;
mod span;
mod value;
mod value_kind;

pub use error::{
    CompileError, LexError, ParseError, ParseErrorKind, ParseErrors, RockstarError, RuntimeError,
};
pub use runtime_fn::{RuntimeFn, RuntimeFnHash};
pub use span::Span;
pub use value::{Arithmetic, Comparison, OperandMismatch, Value};
pub use value_kind::{ValueKind, ValueKinds};
