//! Token types produced by the lexer.

use rockstar_core::Span;
use std::fmt;

/// A token.
///
/// The lexeme lives in the AST arena so the source string can be dropped
/// once parsing is done. `offset` is the byte offset of the token in the
/// original source and is how the parser recovers raw line text.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'ast> {
    pub kind: TokenKind,
    pub lexeme: &'ast str,
    pub span: Span,
    pub offset: u32,
}

impl<'ast> Token<'ast> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'ast str, span: Span, offset: u32) -> Self {
        Self {
            kind,
            lexeme,
            span,
            offset,
        }
    }

    /// Byte offset just past the token.
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.offset + self.span.len
    }

    /// True for a word equal to `word`, ignoring ASCII case.
    #[inline]
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.lexeme.eq_ignore_ascii_case(word)
    }

    /// True for a word matching any of `words`.
    pub fn is_any_word(&self, words: &[&str]) -> bool {
        self.kind == TokenKind::Word && words.iter().any(|w| self.lexeme.eq_ignore_ascii_case(w))
    }

    /// Short description for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.lexeme, self.span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters and apostrophes: `Tommy`, `ain't`.
    Word,
    /// Unsigned decimal: `123`, `3.14`.
    Number,
    /// Double-quoted text; the lexeme excludes the quotes.
    String,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `,`
    Comma,
    /// Sentence punctuation: `.`, `!`, `?`, `;`, `:`
    Punct,
    /// Statement terminator.
    Newline,
    /// A character that could not be tokenized; the error is recorded.
    Error,
    Eof,
}

impl TokenKind {
    /// Tokens that may trail a statement without meaning anything.
    #[inline]
    pub fn is_trailing_punct(self) -> bool {
        matches!(self, TokenKind::Punct | TokenKind::Comma)
    }

    #[inline]
    pub fn ends_line(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}
