//! Error types for every phase of the Rockstar pipeline.
//!
//! ```text
//! RockstarError
//! ├── LexError      - tokenization
//! ├── ParseError    - statement/expression structure (with ParseErrorKind)
//! ├── CompileError  - name resolution and code generation
//! └── RuntimeError  - faults raised while the generated program executes
//! ```
//!
//! Compile-time errors are fatal: the first one aborts the whole
//! compilation and no partial output is produced.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Lexer Errors
// ============================================================================

/// Errors raised while splitting a line into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unterminated string at {span}")]
    UnterminatedString { span: Span },

    #[error("unterminated comment at {span}")]
    UnterminatedComment { span: Span },

    #[error("invalid number at {span}: {detail}")]
    InvalidNumber { span: Span, detail: String },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedComment { span }
            | LexError::InvalidNumber { span, .. } => *span,
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Categories of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A specific word or symbol was expected.
    ExpectedToken,
    /// A token appeared where nothing of its kind may.
    UnexpectedToken,
    /// The line ended too early.
    UnexpectedEndOfLine,
    /// An expression was expected.
    ExpectedExpression,
    /// A variable name was expected.
    ExpectedVariable,
    /// The line does not start a known statement.
    ExpectedStatement,
    /// A literal could not be decoded.
    InvalidLiteral,
    /// Tokenization failed.
    Lex,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::ExpectedToken => "expected token",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnexpectedEndOfLine => "unexpected end of line",
            ParseErrorKind::ExpectedExpression => "expected expression",
            ParseErrorKind::ExpectedVariable => "expected variable",
            ParseErrorKind::ExpectedStatement => "expected statement",
            ParseErrorKind::InvalidLiteral => "invalid literal",
            ParseErrorKind::Lex => "lexical error",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error with location and context.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn expected_token(span: Span, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken,
            span,
            format!("expected {expected}, found {found}"),
        )
    }

    pub fn unexpected_token(span: Span, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            span,
            format!("unexpected {found}"),
        )
    }

    pub fn unexpected_end_of_line(span: Span, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEndOfLine,
            span,
            format!("line ended, expected {expected}"),
        )
    }

    pub fn expected_expression(span: Span, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedExpression,
            span,
            format!("expected expression, found {found}"),
        )
    }

    pub fn expected_variable(span: Span, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedVariable,
            span,
            format!("expected variable, found {found}"),
        )
    }

    /// Render the error with the offending source line and a caret marker.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = format!("Error at {}: {}\n", self.span, self.kind);
        if !self.message.is_empty() {
            output.push_str(&format!("  {}\n", self.message));
        }

        let line_text = source.lines().nth(self.span.line.saturating_sub(1) as usize);
        if let Some(line_text) = line_text {
            output.push_str("  |\n");
            output.push_str(&format!("{:>3} | {}\n", self.span.line, line_text));
            let indent = " ".repeat(self.span.col.saturating_sub(1) as usize);
            let marker = "^".repeat(self.span.len.max(1) as usize);
            output.push_str(&format!("  | {indent}{marker}\n"));
        }
        output
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex, error.span(), error.to_string())
    }
}

/// Every parse error found in a program, in source order.
///
/// The parser keeps going after a bad line so a single run reports all of
/// them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    pub fn into_vec(self) -> Vec<ParseError> {
        self.errors
    }
}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

// ============================================================================
// Compile Errors
// ============================================================================

/// Errors raised while resolving names and generating code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// The surface text matches none of the variable naming shapes.
    #[error("at {span}: '{text}' is not a valid variable name")]
    MalformedVariableName { text: String, span: Span },

    /// A pronoun was used before any variable had been referenced.
    #[error("at {span}: pronoun '{pronoun}' does not refer to any earlier variable")]
    UnresolvedPronoun { pronoun: String, span: Span },

    /// A variable was read before anything was assigned to it.
    #[error("at {span}: variable '{name}' is read before it is assigned")]
    UnboundVariable { name: String, span: Span },

    /// Operand kinds are statically known to be incompatible.
    #[error("at {span}: {message}")]
    TypeMismatch { message: String, span: Span },

    /// The program needs more storage slots or constants than the target allows.
    #[error("at {span}: {message}")]
    LimitExceeded { message: String, span: Span },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::MalformedVariableName { span, .. }
            | CompileError::UnresolvedPronoun { span, .. }
            | CompileError::UnboundVariable { span, .. }
            | CompileError::TypeMismatch { span, .. }
            | CompileError::LimitExceeded { span, .. } => *span,
            CompileError::Internal { .. } => Span::default(),
        }
    }
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Faults raised by the generated program while it executes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// An operation received a value of a kind it has no meaning for.
    #[error("line {line}: cannot {operation} {left} and {right}")]
    TypeMismatch {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
        line: u32,
    },

    /// A type-tag check emitted by the compiler failed.
    #[error("line {line}: expected a number, got {actual}")]
    ExpectedNumber { actual: &'static str, line: u32 },

    #[error("value stack underflow at offset {offset}")]
    StackUnderflow { offset: usize },

    #[error("invalid opcode {byte:#04x} at offset {offset}")]
    InvalidOpcode { byte: u8, offset: usize },

    #[error("truncated instruction at offset {offset}")]
    TruncatedInstruction { offset: usize },

    #[error("constant {index} is missing or has the wrong kind")]
    BadConstant { index: u32 },

    #[error("field {index} does not exist")]
    BadField { index: u16 },

    #[error("no runtime function with hash {hash:#018x}")]
    UnknownRuntimeFunction { hash: u64 },

    #[error("runtime function '{name}' takes {expected} argument(s), got {got}")]
    RuntimeArity {
        name: &'static str,
        expected: u8,
        got: u8,
    },

    #[error("output failed: {message}")]
    Output { message: String },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Any error from compiling or running a Rockstar program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RockstarError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseErrors),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl RockstarError {
    pub fn is_parse(&self) -> bool {
        matches!(self, RockstarError::Lex(_) | RockstarError::Parse(_))
    }

    pub fn is_compile(&self) -> bool {
        matches!(self, RockstarError::Compile(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, RockstarError::Runtime(_))
    }
}

impl From<ParseError> for RockstarError {
    fn from(error: ParseError) -> Self {
        RockstarError::Parse(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_messages_carry_location() {
        let err = CompileError::UnresolvedPronoun {
            pronoun: "it".into(),
            span: Span::new(4, 7, 2),
        };
        assert_eq!(
            err.to_string(),
            "at 4:7: pronoun 'it' does not refer to any earlier variable"
        );
        assert_eq!(err.span(), Span::new(4, 7, 2));
    }

    #[test]
    fn lex_error_converts_to_parse_error() {
        let lex = LexError::UnterminatedString {
            span: Span::new(2, 5, 1),
        };
        let parse: ParseError = lex.into();
        assert_eq!(parse.kind, ParseErrorKind::Lex);
        assert_eq!(parse.span, Span::new(2, 5, 1));
    }

    #[test]
    fn display_with_source_points_at_column() {
        let source = "Put 1 into X\nShout 5 into\n";
        let err = ParseError::unexpected_token(Span::new(2, 9, 4), "'into'");
        let rendered = err.display_with_source(source);
        assert!(rendered.contains("  2 | Shout 5 into"));
        assert!(rendered.contains("  |         ^^^^"));
    }

    #[test]
    fn parse_errors_display_one_per_line() {
        let mut errors = ParseErrors::new();
        errors.push(ParseError::expected_variable(Span::new(1, 1, 1), "'5'"));
        errors.push(ParseError::expected_variable(Span::new(3, 1, 1), "'6'"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string().lines().count(), 2);
    }

    #[test]
    fn unified_error_classification() {
        let err: RockstarError = CompileError::Internal {
            message: "x".into(),
        }
        .into();
        assert!(err.is_compile());
        assert!(!err.is_runtime());

        let err: RockstarError = ParseError::expected_variable(Span::default(), "'1'").into();
        assert!(err.is_parse());
    }
}
