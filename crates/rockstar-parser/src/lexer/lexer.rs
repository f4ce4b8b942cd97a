//! Line-aware lexer for Rockstar source.
//!
//! Produces the whole token stream up front. Newlines are tokens because
//! they terminate statements; parenthesised comments and horizontal
//! whitespace are skipped. Lexemes are copied into the arena.

use bumpalo::Bump;
use rockstar_core::{LexError, Span};

use super::cursor::{Cursor, is_blank, is_word_continue, is_word_start};
use super::token::{Token, TokenKind};

pub struct Lexer<'src, 'ast> {
    cursor: Cursor<'src>,
    arena: &'ast Bump,
    tokens: Vec<Token<'ast>>,
    errors: Vec<LexError>,
}

impl<'src, 'ast> Lexer<'src, 'ast> {
    pub fn new(source: &'src str, arena: &'ast Bump) -> Self {
        Self {
            cursor: Cursor::new(source),
            arena,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the whole source. The stream always ends with `Eof`.
    pub fn tokenize(mut self) -> (Vec<Token<'ast>>, Vec<LexError>) {
        loop {
            self.cursor.eat_while(is_blank);
            let Some(c) = self.cursor.peek() else {
                break;
            };

            let line = self.cursor.line();
            let col = self.cursor.column();
            let start = self.cursor.offset();

            match c {
                '\n' => {
                    self.cursor.advance();
                    self.push(TokenKind::Newline, "\n", Span::new(line, col, 1), start);
                }
                '(' => self.skip_comment(line, col),
                '"' => self.scan_string(line, col, start),
                c if c.is_ascii_digit() => self.scan_number(line, col, start),
                c if is_word_start(c) => self.scan_word(line, col, start),
                _ => self.scan_symbol(c, line, col, start),
            }
        }

        let eof = Span::point(self.cursor.line(), self.cursor.column());
        let offset = self.cursor.offset();
        self.push(TokenKind::Eof, "", eof, offset);
        (self.tokens, self.errors)
    }

    fn push(&mut self, kind: TokenKind, lexeme: &str, span: Span, offset: u32) {
        let lexeme = self.arena.alloc_str(lexeme);
        self.tokens.push(Token::new(kind, lexeme, span, offset));
    }

    fn push_consumed(&mut self, kind: TokenKind, line: u32, col: u32, start: u32) {
        let text = self.cursor.slice_from(start);
        let span = Span::new(line, col, text.len() as u32);
        self.push(kind, text, span, start);
    }

    fn error(&mut self, error: LexError, start: u32) {
        let span = error.span();
        self.errors.push(error);
        self.push(TokenKind::Error, "", span, start);
    }

    /// Comments run from `(` to the matching `)` on the same line.
    fn skip_comment(&mut self, line: u32, col: u32) {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != ')' && c != '\n');
        if self.cursor.check(|c| c == ')') {
            self.cursor.advance();
        } else {
            let start = self.cursor.offset();
            self.error(
                LexError::UnterminatedComment {
                    span: Span::new(line, col, 1),
                },
                start,
            );
        }
    }

    fn scan_string(&mut self, line: u32, col: u32, start: u32) {
        self.cursor.advance();
        let content_start = self.cursor.offset();
        self.cursor.eat_while(|c| c != '"' && c != '\n');
        if !self.cursor.check(|c| c == '"') {
            self.error(
                LexError::UnterminatedString {
                    span: Span::new(line, col, 1),
                },
                start,
            );
            return;
        }
        let content = self.cursor.slice_from(content_start);
        self.cursor.advance();
        let span = Span::new(line, col, self.cursor.offset() - start);
        self.push(TokenKind::String, content, span, start);
    }

    fn scan_number(&mut self, line: u32, col: u32, start: u32) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let has_fraction = self.cursor.check(|c| c == '.')
            && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        if self.cursor.slice_from(start).parse::<f64>().is_err() {
            let text = self.cursor.slice_from(start).to_string();
            let span = Span::new(line, col, text.len() as u32);
            self.error(
                LexError::InvalidNumber {
                    span,
                    detail: format!("'{text}' is not a number"),
                },
                start,
            );
            return;
        }
        self.push_consumed(TokenKind::Number, line, col, start);
    }

    /// Words; a trailing `'s` is split off as the word `is`.
    fn scan_word(&mut self, line: u32, col: u32, start: u32) {
        self.cursor.eat_while(is_word_continue);
        let text = self.cursor.slice_from(start);

        if text.len() > 2 && (text.ends_with("'s") || text.ends_with("'S")) {
            let stem_len = text.len() as u32 - 2;
            let stem = &text[..stem_len as usize];
            self.push(TokenKind::Word, stem, Span::new(line, col, stem_len), start);
            self.push(
                TokenKind::Word,
                "is",
                Span::new(line, col + stem_len, 2),
                start + stem_len,
            );
            return;
        }

        self.push_consumed(TokenKind::Word, line, col, start);
    }

    fn scan_symbol(&mut self, c: char, line: u32, col: u32, start: u32) {
        self.cursor.advance();
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            '.' | '!' | '?' | ';' | ':' => TokenKind::Punct,
            _ => {
                self.error(
                    LexError::UnexpectedChar {
                        ch: c,
                        span: Span::new(line, col, c.len_utf8() as u32),
                    },
                    start,
                );
                return;
            }
        };
        self.push_consumed(kind, line, col, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let arena = Bump::new();
        let (tokens, errors) = Lexer::new(source, &arena).tokenize();
        assert!(errors.is_empty(), "{errors:?}");
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn assignment_line() {
        assert_eq!(
            kinds("Put 123 into X\n"),
            vec![
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn string_lexeme_excludes_quotes() {
        let arena = Bump::new();
        let (tokens, _) = Lexer::new("The message is \"pass\"", &arena).tokenize();
        let string = tokens[3];
        assert_eq!(string.kind, TokenKind::String);
        assert_eq!(string.lexeme, "pass");
        assert_eq!(string.span, Span::new(1, 16, 6));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("Shout X (loudly)"),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn apostrophe_s_becomes_is() {
        let arena = Bump::new();
        let (tokens, _) = Lexer::new("Tommy's a rebel", &arena).tokenize();
        assert_eq!(tokens[0].lexeme, "Tommy");
        assert_eq!(tokens[1].lexeme, "is");
        assert_eq!(tokens[1].span, Span::new(1, 6, 2));
        assert_eq!(tokens[2].lexeme, "a");
    }

    #[test]
    fn contractions_stay_whole() {
        let arena = Bump::new();
        let (tokens, _) = Lexer::new("X ain't Y", &arena).tokenize();
        assert_eq!(tokens[1].lexeme, "ain't");
    }

    #[test]
    fn decimal_numbers_and_trailing_period() {
        let arena = Bump::new();
        let (tokens, _) = Lexer::new("X is 3.14.", &arena).tokenize();
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].lexeme, "3.14");
        assert_eq!(tokens[3].kind, TokenKind::Punct);
    }

    #[test]
    fn offsets_index_the_source() {
        let source = "Let my balance be 1000000\nShout my balance";
        let arena = Bump::new();
        let (tokens, _) = Lexer::new(source, &arena).tokenize();
        let shout = tokens.iter().find(|t| t.is_word("shout")).unwrap();
        assert_eq!(&source[shout.offset as usize..shout.end_offset() as usize], "Shout");
        assert_eq!(shout.span.line, 2);
    }

    #[test]
    fn unterminated_string_is_reported() {
        let arena = Bump::new();
        let (tokens, errors) = Lexer::new("X is \"oops\nShout X", &arena).tokenize();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexError::UnterminatedString { .. }));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Error));
        assert!(tokens.iter().any(|t| t.is_word("shout")));
    }

    #[test]
    fn unexpected_character_is_reported() {
        let arena = Bump::new();
        let (_, errors) = Lexer::new("Shout X # Y", &arena).tokenize();
        assert!(matches!(errors[0], LexError::UnexpectedChar { ch: '#', .. }));
    }
}
