//! Statement parsing.
//!
//! One statement per line. The leading word picks the statement; a line
//! that starts with a variable is a literal assignment (`is`) or a poetic
//! string (`says`).

use super::parser::Parser;
use crate::ast::expr::{Expr, Literal, LiteralKind, PoeticNumber};
use crate::ast::poetic::{poetic_number, poetic_string};
use crate::ast::stmt::*;
use crate::lexer::{Token, TokenKind};
use rockstar_core::{ParseError, ParseErrorKind};

const IS_WORDS: &[&str] = &["is", "are", "was", "were"];
const SAYS_WORDS: &[&str] = &["says", "said"];

impl<'src, 'ast> Parser<'src, 'ast> {
    /// Parse one statement. The caller handles the line terminator.
    pub fn parse_statement(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let token = *self.peek();

        if token.kind == TokenKind::Word {
            if token.is_word("put") {
                return self.parse_put();
            }
            if token.is_word("let") {
                return self.parse_let();
            }
            if let Some(kind) = OutputKind::from_word(token.lexeme) {
                return self.parse_output(kind);
            }
            if token.is_word("build") {
                return self.parse_step("up").map(Stmt::Increment);
            }
            if token.is_word("knock") {
                return self.parse_step("down").map(Stmt::Decrement);
            }
            if !self.vocabulary.is_keyword(token.lexeme) {
                return self.parse_variable_statement();
            }
        }

        Err(self.error_here(|token| {
            ParseError::new(
                ParseErrorKind::ExpectedStatement,
                token.span,
                format!("expected a statement, found {}", token.describe()),
            )
        }))
    }

    /// `Put <expr> into <variable>`
    fn parse_put(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.advance().span;
        let value = self.parse_expr(0)?;
        self.expect_word("into")?;
        let target = self.parse_variable()?;

        Ok(Stmt::Assign(AssignStmt {
            target,
            value,
            span: start.to(target.span),
        }))
    }

    /// `Let <variable> be <expr>`
    fn parse_let(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.advance().span;
        let target = self.parse_variable()?;
        self.expect_word("be")?;
        let value = self.parse_expr(0)?;

        Ok(Stmt::Assign(AssignStmt {
            target,
            value,
            span: start.to(value.span()),
        }))
    }

    /// `Say|Shout|Whisper|Scream <expr>`
    fn parse_output(&mut self, kind: OutputKind) -> Result<Stmt<'ast>, ParseError> {
        let start = self.advance().span;
        let value = self.parse_expr(0)?;

        Ok(Stmt::Output(OutputStmt {
            kind,
            value,
            span: start.to(value.span()),
        }))
    }

    /// `Build <variable> up[, up]` and `Knock <variable> down[, down]`
    fn parse_step(&mut self, step_word: &str) -> Result<StepStmt<'ast>, ParseError> {
        let start = self.advance().span;
        let target = self.parse_variable()?;

        let mut count = 0u32;
        let mut end = target.span;
        loop {
            if let Some(token) = self.eat_word(step_word) {
                count += 1;
                end = token.span;
            } else if count > 0
                && self.check(TokenKind::Comma)
                && self.peek_nth(1).is_word(step_word)
            {
                self.advance();
            } else {
                break;
            }
        }

        if count == 0 {
            self.expect_word(step_word)?;
        }

        Ok(StepStmt {
            target,
            count,
            span: start.to(end),
        })
    }

    /// `<variable> is <literal or poetic number>` or `<variable> says <text>`
    fn parse_variable_statement(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let target = self.parse_variable()?;
        let verb = *self.peek();

        let value = if verb.is_any_word(IS_WORDS) {
            self.advance();
            self.parse_is_value(verb)?
        } else if verb.is_any_word(SAYS_WORDS) {
            self.advance();
            self.parse_poetic_string(verb)
        } else {
            return Err(self.error_here(|token| {
                ParseError::expected_token(token.span, "'is' or 'says'", &token.describe())
            }));
        };

        Ok(Stmt::Assign(AssignStmt {
            target,
            value,
            span: target.span.to(value.span()),
        }))
    }

    /// A single literal token, or otherwise a poetic number built from the
    /// raw words after `verb`.
    fn parse_is_value(&mut self, verb: Token<'ast>) -> Result<&'ast Expr<'ast>, ParseError> {
        if self.peek().kind.ends_line() {
            return Err(ParseError::unexpected_end_of_line(
                self.peek().span,
                "a literal or poetic number",
            ));
        }

        if self.check(TokenKind::Error) {
            return Err(self.error_here(|token| {
                ParseError::new(ParseErrorKind::InvalidLiteral, token.span, "invalid literal")
            }));
        }

        if self.is_last_on_line(1) {
            if let Some(kind) = self.literal_kind(self.peek()) {
                let token = self.advance();
                return Ok(self.arena.alloc(Expr::Literal(Literal {
                    kind,
                    span: token.span,
                })));
            }
        }

        let first = *self.peek();
        let text = self.rest_of_line(verb.end_offset());
        let last = self.consume_verbatim().unwrap_or(first);
        let span = first.span.to(last.span);

        let Some(value) = poetic_number(text) else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidLiteral,
                span,
                format!("'{}' is neither a literal nor a poetic number", text.trim()),
            ));
        };

        Ok(self.arena.alloc(Expr::Poetic(PoeticNumber {
            value,
            text: text.trim(),
            span,
        })))
    }

    fn parse_poetic_string(&mut self, verb: Token<'ast>) -> &'ast Expr<'ast> {
        let raw = self.rest_of_line(verb.end_offset());
        let text = poetic_string(raw);
        let span = match self.consume_verbatim() {
            Some(last) => verb.span.to(last.span),
            None => verb.span,
        };

        self.arena.alloc(Expr::Literal(Literal {
            kind: LiteralKind::String(text),
            span,
        }))
    }

    /// True when only trailing punctuation follows the token `n` ahead.
    fn is_last_on_line(&self, n: usize) -> bool {
        let mut n = n;
        while self.peek_nth(n).kind.is_trailing_punct() {
            n += 1;
        }
        self.peek_nth(n).kind.ends_line()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::vocabulary::Vocabulary;
    use bumpalo::Bump;
    use rockstar_core::ParseErrorKind;

    fn parse_one<'ast>(source: &str, arena: &'ast Bump) -> Stmt<'ast> {
        let vocabulary = Vocabulary::rockstar();
        let program = Parser::parse(source, arena, &vocabulary).unwrap();
        assert_eq!(program.statements().len(), 1);
        program.statements()[0]
    }

    #[test]
    fn poetic_number_assignment() {
        let arena = Bump::new();
        let Stmt::Assign(assign) = parse_one("Rockstar is a big bad monster", &arena) else {
            panic!("expected assignment");
        };
        assert_eq!(assign.target.text, "Rockstar");
        let Expr::Poetic(poetic) = assign.value else {
            panic!("expected poetic number, got {:?}", assign.value);
        };
        assert_eq!(poetic.value, 1337.0);
        assert_eq!(poetic.text, "a big bad monster");
    }

    #[test]
    fn literal_assignment() {
        let arena = Bump::new();
        let Stmt::Assign(assign) = parse_one("The message is \"pass\".", &arena) else {
            panic!("expected assignment");
        };
        assert_eq!(assign.target.text, "The message");
        assert!(matches!(
            assign.value,
            Expr::Literal(Literal { kind: LiteralKind::String("pass"), .. })
        ));
    }

    #[test]
    fn constant_words_are_literals() {
        let arena = Bump::new();
        let Stmt::Assign(assign) = parse_one("my heart was nothing", &arena) else {
            panic!("expected assignment");
        };
        assert!(matches!(
            assign.value,
            Expr::Literal(Literal { kind: LiteralKind::Null, .. })
        ));
    }

    #[test]
    fn number_followed_by_words_is_poetic() {
        let arena = Bump::new();
        let Stmt::Assign(assign) = parse_one("Tommy was 5 feet tall", &arena) else {
            panic!("expected assignment");
        };
        // digits contribute no letters
        assert!(matches!(assign.value, Expr::Poetic(PoeticNumber { value, .. }) if *value == 44.0));
    }

    #[test]
    fn says_keeps_the_rest_of_the_line() {
        let arena = Bump::new();
        let Stmt::Assign(assign) = parse_one("My song says Hello, San Francisco! #1", &arena) else {
            panic!("expected assignment");
        };
        assert!(matches!(
            assign.value,
            Expr::Literal(Literal { kind: LiteralKind::String("Hello, San Francisco! #1"), .. })
        ));
    }

    #[test]
    fn put_and_let() {
        let arena = Bump::new();
        let Stmt::Assign(put) = parse_one("Put 123 into X", &arena) else {
            panic!("expected assignment");
        };
        assert_eq!(put.target.text, "X");

        let Stmt::Assign(let_stmt) = parse_one("Let my balance be my balance plus 5", &arena) else {
            panic!("expected assignment");
        };
        assert_eq!(let_stmt.target.text, "my balance");
        assert!(matches!(let_stmt.value, Expr::Binary(b) if b.op == BinaryOp::Add));
    }

    #[test]
    fn output_statements() {
        let arena = Bump::new();
        for (source, kind) in [
            ("Say it", OutputKind::Say),
            ("Shout it!", OutputKind::Shout),
            ("Whisper it", OutputKind::Whisper),
            ("Scream it", OutputKind::Scream),
        ] {
            let Stmt::Output(output) = parse_one(source, &arena) else {
                panic!("expected output for {source}");
            };
            assert_eq!(output.kind, kind);
        }
    }

    #[test]
    fn build_up_counts_steps() {
        let arena = Bump::new();
        let Stmt::Increment(step) = parse_one("Build my world up, up, up", &arena) else {
            panic!("expected increment");
        };
        assert_eq!(step.count, 3);
        assert_eq!(step.target.text, "my world");

        let Stmt::Decrement(step) = parse_one("Knock it down", &arena) else {
            panic!("expected decrement");
        };
        assert_eq!(step.count, 1);
    }

    #[test]
    fn build_without_up_is_an_error() {
        let arena = Bump::new();
        let vocabulary = Vocabulary::rockstar();
        let errors = Parser::parse("Build X", &arena, &vocabulary).unwrap_err();
        assert_eq!(errors.first().unwrap().kind, ParseErrorKind::UnexpectedEndOfLine);
    }

    #[test]
    fn every_bad_line_is_reported() {
        let arena = Bump::new();
        let vocabulary = Vocabulary::rockstar();
        let source = "Put 1 X\nShout X\nLet into be 4\nX is \"open";
        let errors = Parser::parse(source, &arena, &vocabulary).unwrap_err();
        let lines: Vec<u32> = errors.iter().map(|e| e.span.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(errors.iter().nth(2).unwrap().kind, ParseErrorKind::Lex);
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let arena = Bump::new();
        let vocabulary = Vocabulary::rockstar();
        let source = "(the intro)\n\nPut 1 into X (one)\n\n\nShout X\n";
        let program = Parser::parse(source, &arena, &vocabulary).unwrap();
        assert_eq!(program.statements().len(), 2);
    }

    #[test]
    fn dangling_words_after_statement_fail() {
        let arena = Bump::new();
        let vocabulary = Vocabulary::rockstar();
        let errors = Parser::parse("Shout X into", &arena, &vocabulary).unwrap_err();
        assert_eq!(errors.first().unwrap().kind, ParseErrorKind::UnexpectedToken);
    }
}
