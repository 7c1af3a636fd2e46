//! Main lexer implementation for SheetScript.
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s,
//! dispatching on the first character of each token. Lexemes are copied
//! into the arena so the source may be dropped once parsing is done.

use bumpalo::Bump;
use sheetscript_core::LexError;

use super::cursor::{Cursor, Mark, is_name_char, is_name_start};
use super::token::{Token, TokenKind, lookup_keyword};

/// Lexer for SheetScript source code.
///
/// Errors do not stop scanning: the offending text becomes a
/// [`TokenKind::Error`] token and the error is recorded for the parser.
pub struct Lexer<'src, 'ast> {
    cursor: Cursor<'src>,
    arena: &'ast Bump,
    errors: Vec<LexError>,
    finished: bool,
}

impl<'src, 'ast> Lexer<'src, 'ast> {
    pub fn new(source: &'src str, arena: &'ast Bump) -> Self {
        Self {
            cursor: Cursor::new(source),
            arena,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Take accumulated errors, leaving an empty vec.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan the next token. Returns [`TokenKind::Eof`] forever once input ends.
    pub fn next_token(&mut self) -> Token<'ast> {
        if let Err(error) = self.skip_trivia() {
            return self.error_token(error);
        }

        let start = self.cursor.mark();
        let Some(c) = self.cursor.current() else {
            self.finished = true;
            return Token::new(TokenKind::Eof, "", self.cursor.span_since(start));
        };

        match c {
            '"' => self.scan_string(start),
            c if c.is_ascii_digit() => self.scan_number(start),
            '.' if self.digit_at(1) => self.scan_number(start),
            '+' | '-' if self.sign_starts_number() => self.scan_number(start),
            c if is_name_start(c) => {
                let text = self.cursor.bump_while(is_name_char);
                let kind = lookup_keyword(text).unwrap_or(TokenKind::Identifier);
                self.token(kind, start)
            }
            _ => self.scan_punctuation(start),
        }
    }

    fn digit_at(&self, n: usize) -> bool {
        self.cursor.lookahead(n).is_some_and(|c| c.is_ascii_digit())
    }

    /// A `+`/`-` is a sign only when a number follows it directly.
    fn sign_starts_number(&self) -> bool {
        self.digit_at(1) || (self.cursor.lookahead(1) == Some('.') && self.digit_at(2))
    }

    /// Whitespace, `//` line comments and `/* */` block comments.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        self.cursor.bump_str("\u{FEFF}");

        loop {
            self.cursor.bump_while(char::is_whitespace);

            let start = self.cursor.mark();
            if self.cursor.bump_str("//") {
                self.cursor.bump_while(|c| c != '\n');
            } else if self.cursor.bump_str("/*") {
                while !self.cursor.bump_str("*/") {
                    if self.cursor.bump().is_none() {
                        let span = self.cursor.span_since(start);
                        return Err(LexError::UnterminatedComment { span });
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn token(&self, kind: TokenKind, start: Mark) -> Token<'ast> {
        let lexeme = self.arena.alloc_str(self.cursor.text_since(start));
        Token::new(kind, lexeme, self.cursor.span_since(start))
    }

    fn error_token(&mut self, error: LexError) -> Token<'ast> {
        let span = error.span();
        let lexeme: &'ast str = self
            .arena
            .alloc_str(span.slice(self.cursor.source()).unwrap_or(""));
        self.errors.push(error);
        Token::new(TokenKind::Error, lexeme, span)
    }

    /// A double-quoted, single-line string. Escapes stay raw; the parser
    /// decodes them.
    fn scan_string(&mut self, start: Mark) -> Token<'ast> {
        self.cursor.bump();

        loop {
            match self.cursor.current() {
                None | Some('\n' | '\r') => {
                    let span = self.cursor.span_since(start);
                    return self.error_token(LexError::UnterminatedString { span });
                }
                Some('"') => {
                    self.cursor.bump();
                    return self.token(TokenKind::String, start);
                }
                Some('\\') => {
                    self.cursor.bump();
                    if self.cursor.current_is(|c| c != '\n' && c != '\r') {
                        self.cursor.bump();
                    }
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// `[+-]? (digits ('.' digits)? | '.' digits) ([eE] [+-]? digits)?`
    fn scan_number(&mut self, start: Mark) -> Token<'ast> {
        self.cursor.bump_sign();
        self.cursor.bump_while(|c| c.is_ascii_digit());

        // `5.plus(x)` sends to `5`, so a fraction needs a digit after the dot
        if self.cursor.current() == Some('.') && self.digit_at(1) {
            self.cursor.bump();
            self.cursor.bump_while(|c| c.is_ascii_digit());
        }

        if matches!(self.cursor.current(), Some('e' | 'E')) {
            let signed = matches!(self.cursor.lookahead(1), Some('+' | '-'));
            if self.digit_at(if signed { 2 } else { 1 }) {
                self.cursor.bump();
                self.cursor.bump_sign();
                self.cursor.bump_while(|c| c.is_ascii_digit());
            }
        }

        if self.cursor.current_is(is_name_char) {
            self.cursor.bump_while(is_name_char);
            let span = self.cursor.span_since(start);
            return self.error_token(LexError::InvalidNumber {
                span,
                detail: "identifier characters directly after digits".to_string(),
            });
        }

        self.token(TokenKind::Number, start)
    }

    fn scan_punctuation(&mut self, start: Mark) -> Token<'ast> {
        let kind = match self.cursor.bump() {
            Some('(') => TokenKind::LeftParen,
            Some(')') => TokenKind::RightParen,
            Some('{') => TokenKind::LeftBrace,
            Some('}') => TokenKind::RightBrace,
            Some(';') => TokenKind::Semicolon,
            Some(',') => TokenKind::Comma,
            Some('.') => TokenKind::Dot,
            Some('=') => TokenKind::Equal,
            Some('?') => TokenKind::Question,
            Some(':') => TokenKind::Colon,
            Some(ch) => {
                let span = self.cursor.span_since(start);
                return self.error_token(LexError::UnexpectedChar { ch, span });
            }
            None => TokenKind::Eof,
        };
        self.token(kind, start)
    }
}

impl<'src, 'ast> Iterator for Lexer<'src, 'ast> {
    type Item = Token<'ast>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetscript_core::Span;

    fn tokenize(source: &str) -> Vec<(TokenKind, String)> {
        let arena = Bump::new();
        Lexer::new(source, &arena)
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    fn token_kinds(source: &str) -> Vec<TokenKind> {
        let arena = Bump::new();
        Lexer::new(source, &arena).map(|t| t.kind).collect()
    }

    #[test]
    fn empty_source() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("   \n\t ", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert!(!lexer.has_errors());
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            token_kinds("class fn constructor let return new this true false _rawVal box2"),
            vec![
                TokenKind::Class,
                TokenKind::Fn,
                TokenKind::Constructor,
                TokenKind::Let,
                TokenKind::Return,
                TokenKind::New,
                TokenKind::This,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Identifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            token_kinds("( ) { } ; , . = ? :"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Equal,
                TokenKind::Question,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn numbers_keep_source_text() {
        assert_eq!(
            tokenize("42 -7 +3 2.50 .5 -0.25 1e10 2.5E-3"),
            vec![
                (TokenKind::Number, "42".to_string()),
                (TokenKind::Number, "-7".to_string()),
                (TokenKind::Number, "+3".to_string()),
                (TokenKind::Number, "2.50".to_string()),
                (TokenKind::Number, ".5".to_string()),
                (TokenKind::Number, "-0.25".to_string()),
                (TokenKind::Number, "1e10".to_string()),
                (TokenKind::Number, "2.5E-3".to_string()),
            ]
        );
    }

    #[test]
    fn number_then_method_call() {
        assert_eq!(
            tokenize("0.notEquals(x)"),
            vec![
                (TokenKind::Number, "0".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Identifier, "notEquals".to_string()),
                (TokenKind::LeftParen, "(".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::RightParen, ")".to_string()),
            ]
        );
    }

    #[test]
    fn lone_sign_is_an_error() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("- x", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

        let errors = lexer.take_errors();
        assert!(matches!(errors[..], [LexError::UnexpectedChar { ch: '-', .. }]));
    }

    #[test]
    fn digits_followed_by_letters() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("12ab", &arena);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "12ab");
        assert!(matches!(lexer.take_errors()[..], [LexError::InvalidNumber { .. }]));
    }

    #[test]
    fn strings_keep_escapes_raw() {
        assert_eq!(
            tokenize(r#""hello" "say \"hi\"" """#),
            vec![
                (TokenKind::String, r#""hello""#.to_string()),
                (TokenKind::String, r#""say \"hi\"""#.to_string()),
                (TokenKind::String, r#""""#.to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_string() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("\"abc\nreturn", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert_eq!(lexer.next_token().kind, TokenKind::Return);
        assert!(lexer.has_errors());
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            token_kinds("let // trailing\n/* block\n comment */ x"),
            vec![TokenKind::Let, TokenKind::Identifier]
        );
    }

    #[test]
    fn unterminated_comment() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("a /* never closed", &arena);
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert!(matches!(
            lexer.take_errors()[..],
            [LexError::UnterminatedComment { .. }]
        ));
    }

    #[test]
    fn token_spans() {
        let arena = Bump::new();
        let tokens: Vec<_> = Lexer::new("let x\n  = 5;", &arena).collect();

        assert_eq!(tokens[1].span, Span::new(4, 5, 1, 5));
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.col, 3);
        assert_eq!(tokens[3].span, Span::new(10, 11, 2, 5));
    }

    #[test]
    fn unexpected_character() {
        let arena = Bump::new();
        let mut lexer = Lexer::new("x @ y", &arena);
        let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Error, TokenKind::Identifier]
        );
        assert_eq!(lexer.take_errors().len(), 1);
    }
}
