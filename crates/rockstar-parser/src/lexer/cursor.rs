/// Character cursor over the whole program text.
///
/// Tracks byte offset, line and column as it advances so every token can
/// be mapped back to its line for poetic literals and diagnostics.
pub struct Cursor<'src> {
    source: &'src str,
    /// Unconsumed text.
    rest: &'src str,
    offset: u32,
    /// 1-indexed.
    line: u32,
    /// 1-indexed, byte-based.
    column: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(f)
    }

    /// Consume one character, updating line and column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.rest.chars().next()?;
        let len = ch.len_utf8();
        self.rest = &self.rest[len..];
        self.offset += len as u32;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += len as u32;
        }
        Some(ch)
    }

    /// Consume characters while `f` holds.
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) {
        while self.check(&f) {
            self.advance();
        }
    }

    /// Text consumed since `start`.
    pub fn slice_from(&self, start: u32) -> &'src str {
        &self.source[start as usize..self.offset as usize]
    }
}

/// Characters that may start a word.
#[inline]
pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Characters that may continue a word. Apostrophes allow `ain't`.
#[inline]
pub fn is_word_continue(c: char) -> bool {
    c.is_alphabetic() || c == '\''
}

/// Horizontal whitespace; newlines are statement terminators.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}
