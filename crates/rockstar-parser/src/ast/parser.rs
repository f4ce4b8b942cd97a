//! Parser state and token navigation.
//!
//! The parser owns the full token stream and walks it by index. Statement
//! and expression rules live in `stmt_parser.rs` and `expr_parser.rs`;
//! this file holds the shared plumbing: lookahead, line handling, error
//! recovery and variable extents.

use bumpalo::Bump;
use bumpalo::collections::Vec as BVec;
use rockstar_core::{LexError, ParseError, ParseErrors};
use rustc_hash::FxHashMap;

use crate::ast::{Program, VariableRef};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::vocabulary::Vocabulary;

pub struct Parser<'src, 'ast> {
    pub(super) source: &'src str,
    pub(super) arena: &'ast Bump,
    pub(super) vocabulary: &'src Vocabulary,
    tokens: Vec<Token<'ast>>,
    pos: usize,
    /// Lexer errors keyed by the index of their `Error` token. An entry is
    /// removed once it has been reported or the token swallowed by a
    /// verbatim literal.
    lex_errors: FxHashMap<usize, LexError>,
}

impl<'src, 'ast> Parser<'src, 'ast> {
    /// Parse a whole program.
    ///
    /// Parsing continues after a bad line, so every error in the program is
    /// reported at once.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse(
        source: &'src str,
        arena: &'ast Bump,
        vocabulary: &'src Vocabulary,
    ) -> Result<Program<'ast>, ParseErrors> {
        let mut parser = Self::new(source, arena, vocabulary);
        let mut statements = BVec::new_in(arena);
        let mut errors = ParseErrors::new();

        loop {
            while parser.check(TokenKind::Newline) {
                parser.advance();
            }
            if parser.check(TokenKind::Eof) {
                break;
            }

            let result = parser
                .parse_statement()
                .and_then(|stmt| parser.finish_line().map(|()| stmt));
            match result {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    errors.push(error);
                    parser.skip_line(&mut errors);
                }
            }
        }

        if !errors.is_empty() {
            log::debug!("parse failed with {} error(s)", errors.len());
            return Err(errors);
        }
        log::debug!("parsed {} statement(s)", statements.len());
        Ok(Program::new(statements.into_bump_slice()))
    }

    fn new(source: &'src str, arena: &'ast Bump, vocabulary: &'src Vocabulary) -> Self {
        let (tokens, errors) = Lexer::new(source, arena).tokenize();
        let lex_errors = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind == TokenKind::Error)
            .map(|(index, _)| index)
            .zip(errors)
            .collect();

        Self {
            source,
            arena,
            vocabulary,
            tokens,
            pos: 0,
            lex_errors,
        }
    }

    // ------------------------------------------------------------------
    // Token navigation
    // ------------------------------------------------------------------

    #[inline]
    pub(super) fn peek(&self) -> &Token<'ast> {
        self.peek_nth(0)
    }

    /// Lookahead; clamps to the trailing `Eof`.
    pub(super) fn peek_nth(&self, n: usize) -> &Token<'ast> {
        let index = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(super) fn advance(&mut self) -> Token<'ast> {
        let token = self.tokens[self.pos];
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    #[inline]
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.peek().is_word(word)
    }

    pub(super) fn eat_word(&mut self, word: &str) -> Option<Token<'ast>> {
        if self.check_word(word) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(super) fn expect_word(&mut self, word: &str) -> Result<Token<'ast>, ParseError> {
        if let Some(token) = self.eat_word(word) {
            return Ok(token);
        }
        let expected = format!("'{word}'");
        Err(self.error_here(|token| {
            if token.kind.ends_line() {
                ParseError::unexpected_end_of_line(token.span, &expected)
            } else {
                ParseError::expected_token(token.span, &expected, &token.describe())
            }
        }))
    }

    /// An error for the current token. A lexer error recorded for the
    /// token takes precedence over `fallback`.
    pub(super) fn error_here(&mut self, fallback: impl FnOnce(&Token<'ast>) -> ParseError) -> ParseError {
        match self.lex_errors.remove(&self.pos) {
            Some(error) => error.into(),
            None => fallback(self.peek()),
        }
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Accept trailing punctuation and the line terminator.
    fn finish_line(&mut self) -> Result<(), ParseError> {
        while self.peek().kind.is_trailing_punct() {
            self.advance();
        }
        if self.peek().kind.ends_line() {
            self.advance();
            return Ok(());
        }
        Err(self.error_here(|token| ParseError::unexpected_token(token.span, &token.describe())))
    }

    /// Error recovery: drop the rest of the line, reporting any lexer
    /// errors on it.
    fn skip_line(&mut self, errors: &mut ParseErrors) {
        while !self.peek().kind.ends_line() {
            if let Some(error) = self.lex_errors.remove(&self.pos) {
                errors.push(error.into());
            }
            self.advance();
        }
        self.advance();
    }

    /// Consume the tokens of a verbatim literal up to the end of the line,
    /// returning the last one consumed. Lexer errors inside are discarded
    /// because the literal does not use those tokens.
    pub(super) fn consume_verbatim(&mut self) -> Option<Token<'ast>> {
        let mut last = None;
        while !self.peek().kind.ends_line() {
            self.lex_errors.remove(&self.pos);
            last = Some(self.advance());
        }
        last
    }

    /// Raw source from `offset` to the end of its line, copied to the arena.
    pub(super) fn rest_of_line(&self, offset: u32) -> &'ast str {
        let rest = &self.source[offset as usize..];
        let end = rest.find('\n').unwrap_or(rest.len());
        self.arena.alloc_str(&rest[..end])
    }

    // ------------------------------------------------------------------
    // Variables
    // ------------------------------------------------------------------

    /// Parse a variable reference, deciding how many words it spans.
    ///
    /// - a pronoun is one word
    /// - a common prefix takes the following word
    /// - a capitalised word takes every following capitalised word
    /// - anything else is a single word
    ///
    /// Reserved words never start or continue a name. Whether the text is
    /// a well-formed name is decided later by the compiler.
    pub(super) fn parse_variable(&mut self) -> Result<VariableRef<'ast>, ParseError> {
        let first = *self.peek();
        if first.kind != TokenKind::Word || self.vocabulary.is_keyword(first.lexeme) {
            return Err(self.error_here(|token| {
                if token.kind.ends_line() {
                    ParseError::unexpected_end_of_line(token.span, "a variable")
                } else {
                    ParseError::expected_variable(token.span, &token.describe())
                }
            }));
        }
        self.advance();
        let mut last = first;

        if self.vocabulary.is_pronoun(first.lexeme) {
            // single word
        } else if self.vocabulary.is_common_prefix(first.lexeme) {
            let next = *self.peek();
            if next.kind != TokenKind::Word || self.vocabulary.is_reserved(next.lexeme) {
                return Err(self.error_here(|token| {
                    ParseError::expected_variable(token.span, &token.describe())
                }));
            }
            last = self.advance();
        } else if starts_uppercase(first.lexeme) {
            while self.peek().kind == TokenKind::Word
                && starts_uppercase(self.peek().lexeme)
                && !self.vocabulary.is_reserved(self.peek().lexeme)
            {
                last = self.advance();
            }
        }

        let text = &self.source[first.offset as usize..last.end_offset() as usize];
        Ok(VariableRef {
            text: self.arena.alloc_str(text),
            span: first.span.to(last.span),
        })
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
