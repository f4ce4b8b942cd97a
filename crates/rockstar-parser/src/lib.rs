//! Rockstar Parser crate.
//!
//! Turns Rockstar source into an arena-allocated AST:
//! - Lexical analysis (line-aware tokens, comments, `'s` contractions)
//! - Statement and expression parsing with per-line error recovery
//! - Poetic number and string literal decoding
//! - The [`Vocabulary`] of pronouns, common prefixes and keywords, shared
//!   with the compiler's name normalizer
//!
//! # Example
//!
//! ```
//! use rockstar_parser::{Parser, Vocabulary};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let vocabulary = Vocabulary::rockstar();
//! let source = "Rockstar is a big bad monster\nShout Rockstar";
//!
//! match Parser::parse(source, &arena, &vocabulary) {
//!     Ok(program) => println!("Parsed {} statements", program.len()),
//!     Err(errors) => eprintln!("Parse errors: {}", errors),
//! }
//! ```

pub mod ast;
pub mod lexer;
mod vocabulary;

pub use ast::{Parser, Program};
pub use lexer::{Lexer, Token, TokenKind};
pub use vocabulary::{ConstantWord, Vocabulary};
