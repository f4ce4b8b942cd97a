//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! Most Rockstar operators are words, and the comparisons span several of
//! them (`is as high as`), so operator lookahead returns how many tokens
//! the operator occupies.

use super::parser::Parser;
use crate::ast::expr::*;
use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Token, TokenKind};
use crate::vocabulary::ConstantWord;
use rockstar_core::{ParseError, ParseErrorKind};

const GREATER_WORDS: &[&str] = &["higher", "greater", "bigger", "stronger"];
const LESS_WORDS: &[&str] = &["lower", "less", "smaller", "weaker"];
const AT_LEAST_WORDS: &[&str] = &["high", "great", "big", "strong"];
const AT_MOST_WORDS: &[&str] = &["low", "little", "small", "weak"];

impl<'src, 'ast> Parser<'src, 'ast> {
    /// Parse an expression with a minimum binding power.
    pub fn parse_expr(&mut self, min_bp: u8) -> Result<&'ast Expr<'ast>, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while let Some((op, width)) = self.peek_binary_op() {
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break;
            }

            for _ in 0..width {
                self.advance();
            }
            let rhs = self.parse_expr(r_bp)?;
            let span = lhs.span().to(rhs.span());
            lhs = self.arena.alloc(Expr::Binary(self.arena.alloc(BinaryExpr {
                left: lhs,
                op,
                right: rhs,
                span,
            })));
        }

        Ok(lhs)
    }

    /// Literals, `not`, and variable references.
    fn parse_prefix(&mut self) -> Result<&'ast Expr<'ast>, ParseError> {
        let token = *self.peek();

        if let Some(kind) = self.literal_kind(&token) {
            self.advance();
            return Ok(self.arena.alloc(Expr::Literal(Literal {
                kind,
                span: token.span,
            })));
        }

        match token.kind {
            TokenKind::Number => Err(ParseError::new(
                ParseErrorKind::InvalidLiteral,
                token.span,
                format!("invalid number '{}'", token.lexeme),
            )),
            TokenKind::Word if token.is_word("not") => {
                self.advance();
                let operand = self.parse_expr(UnaryOp::binding_power())?;
                Ok(self.arena.alloc(Expr::Unary(self.arena.alloc(UnaryExpr {
                    op: UnaryOp::Not,
                    operand,
                    span: token.span.to(operand.span()),
                }))))
            }
            TokenKind::Word if !self.vocabulary.is_keyword(token.lexeme) => {
                let variable = self.parse_variable()?;
                Ok(self.arena.alloc(Expr::Variable(variable)))
            }
            _ => Err(self.error_here(|token| {
                if token.kind.ends_line() {
                    ParseError::unexpected_end_of_line(token.span, "an expression")
                } else {
                    ParseError::expected_expression(token.span, &token.describe())
                }
            })),
        }
    }

    /// The literal a single token spells, if any.
    pub(super) fn literal_kind(&self, token: &Token<'ast>) -> Option<LiteralKind<'ast>> {
        match token.kind {
            TokenKind::Number => token.lexeme.parse().ok().map(LiteralKind::Number),
            TokenKind::String => Some(LiteralKind::String(token.lexeme)),
            TokenKind::Word => Some(match self.vocabulary.constant(token.lexeme)? {
                ConstantWord::True => LiteralKind::Bool(true),
                ConstantWord::False => LiteralKind::Bool(false),
                ConstantWord::Null => LiteralKind::Null,
                ConstantWord::Mysterious => LiteralKind::Mysterious,
                ConstantWord::EmptyString => LiteralKind::String(""),
            }),
            _ => None,
        }
    }

    /// The binary operator at the cursor and how many tokens it spans.
    fn peek_binary_op(&self) -> Option<(BinaryOp, usize)> {
        let token = self.peek();
        let op = match token.kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Word => match token.lexeme.to_ascii_lowercase().as_str() {
                "plus" | "with" => BinaryOp::Add,
                "minus" | "without" => BinaryOp::Sub,
                "times" | "of" => BinaryOp::Mul,
                "over" | "between" => BinaryOp::Div,
                "and" => BinaryOp::And,
                "or" => BinaryOp::Or,
                "nor" => BinaryOp::Nor,
                "isn't" | "isnt" | "ain't" | "aint" => BinaryOp::Ne,
                "is" => return Some(self.peek_comparison()),
                _ => return None,
            },
            _ => return None,
        };
        Some((op, 1))
    }

    /// Comparisons introduced by `is`.
    fn peek_comparison(&self) -> (BinaryOp, usize) {
        let first = self.peek_nth(1);
        let second = self.peek_nth(2);
        let third = self.peek_nth(3);

        if first.is_word("not") {
            (BinaryOp::Ne, 2)
        } else if first.is_any_word(GREATER_WORDS) && second.is_word("than") {
            (BinaryOp::Gt, 3)
        } else if first.is_any_word(LESS_WORDS) && second.is_word("than") {
            (BinaryOp::Lt, 3)
        } else if first.is_word("as") && second.is_any_word(AT_LEAST_WORDS) && third.is_word("as") {
            (BinaryOp::Ge, 4)
        } else if first.is_word("as") && second.is_any_word(AT_MOST_WORDS) && third.is_word("as") {
            (BinaryOp::Le, 4)
        } else {
            (BinaryOp::Eq, 1)
        }
    }
}
