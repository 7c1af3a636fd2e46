use sheetscript_core::Span;

/// A saved read position. Tokens are cut from a mark to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    offset: u32,
    line: u32,
    col: u32,
}

/// Character reader over one source text.
pub struct Cursor<'src> {
    source: &'src str,
    rest: &'src str,
    at: Mark,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            at: Mark {
                offset: 0,
                line: 1,
                col: 1,
            },
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Where the next unread character sits.
    #[inline]
    pub fn mark(&self) -> Mark {
        self.at
    }

    /// Span from `start` up to the cursor.
    pub fn span_since(&self, start: Mark) -> Span {
        Span::new(start.offset, self.at.offset, start.line, start.col)
    }

    /// Text from `start` up to the cursor.
    pub fn text_since(&self, start: Mark) -> &'src str {
        &self.source[start.offset as usize..self.at.offset as usize]
    }

    pub fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// `n` characters past the current one.
    #[inline]
    pub fn lookahead(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    #[inline]
    pub fn current_is(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current()?;
        let width = ch.len_utf8();

        self.rest = &self.rest[width..];
        self.at.offset += width as u32;
        if ch == '\n' {
            self.at.line += 1;
            self.at.col = 1;
        } else {
            self.at.col += width as u32;
        }

        Some(ch)
    }

    /// Step over `prefix` if the input starts with it.
    pub fn bump_str(&mut self, prefix: &str) -> bool {
        if !self.starts_with(prefix) {
            return false;
        }
        for _ in prefix.chars() {
            self.bump();
        }
        true
    }

    /// Skip a run of matching characters and return it.
    pub fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.at;
        while self.current_is(&pred) {
            self.bump();
        }
        self.text_since(start)
    }

    /// Skip one `+` or `-`.
    pub fn bump_sign(&mut self) {
        if matches!(self.current(), Some('+' | '-')) {
            self.bump();
        }
    }
}

pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_moves_the_mark() {
        let mut cursor = Cursor::new("let");
        let start = cursor.mark();
        assert_eq!(cursor.bump(), Some('l'));
        assert_eq!(cursor.current(), Some('e'));
        assert_eq!(cursor.span_since(start), Span::new(0, 1, 1, 1));
        assert_eq!(cursor.text_since(start), "l");
    }

    #[test]
    fn bump_str_is_all_or_nothing() {
        let mut cursor = Cursor::new("*/x");
        assert!(!cursor.bump_str("*x"));
        assert_eq!(cursor.current(), Some('*'));
        assert!(cursor.bump_str("*/"));
        assert_eq!(cursor.current(), Some('x'));
        cursor.bump();
        assert!(cursor.at_end());
    }

    #[test]
    fn bump_while_returns_the_run() {
        let mut cursor = Cursor::new("count_2 = 1");
        assert_eq!(cursor.bump_while(is_name_char), "count_2");
        assert_eq!(cursor.current(), Some(' '));
    }

    #[test]
    fn newlines_reset_the_column() {
        let mut cursor = Cursor::new("a\n  b");
        cursor.bump();
        cursor.bump();
        cursor.bump_while(|c| c == ' ');
        let start = cursor.mark();
        cursor.bump();
        assert_eq!(cursor.span_since(start), Span::new(4, 5, 2, 3));
    }

    #[test]
    fn columns_count_bytes() {
        let mut cursor = Cursor::new("é!");
        cursor.bump();
        let here = cursor.mark();
        assert_eq!(cursor.span_since(here), Span::point(2, 1, 3));
        assert_eq!(cursor.lookahead(0), Some('!'));
        assert_eq!(cursor.lookahead(1), None);
    }

    #[test]
    fn signs() {
        let mut cursor = Cursor::new("-5");
        cursor.bump_sign();
        assert_eq!(cursor.current(), Some('5'));
        cursor.bump_sign();
        assert_eq!(cursor.current(), Some('5'));
    }

    #[test]
    fn name_characters() {
        assert!(is_name_start('_'));
        assert!(!is_name_start('7'));
        assert!(is_name_char('7'));
        assert!(!is_name_char('.'));
    }
}
