//! Parser infrastructure for SheetScript.
//!
//! Provides the [`Parser`] struct with token navigation and the public
//! entry points. Expression and statement rules live in `expr_parser` and
//! `stmt_parser`.

use bumpalo::Bump;
use sheetscript_core::{ParseError, ParseErrorKind, ParseErrors, Span};

use crate::ast::{Expr, Script, Stmt};
use crate::lexer::{Lexer, Token, TokenKind};

/// Recursive-descent parser over an eagerly scanned token buffer.
///
/// The `'ast` lifetime is the arena holding AST nodes and token lexemes.
/// The source only needs to live for the call to [`Parser::new`].
pub struct Parser<'ast> {
    pub(super) buffer: Vec<Token<'ast>>,
    pub(super) position: usize,
    /// Lexer errors found while filling the buffer.
    pub(super) errors: ParseErrors,
    pub(super) arena: &'ast Bump,
}

impl<'ast> Parser<'ast> {
    /// Tokenize `source` into the buffer. The buffer always ends with `Eof`.
    pub fn new(source: &str, arena: &'ast Bump) -> Self {
        let mut lexer = Lexer::new(source, arena);
        let mut buffer = Vec::with_capacity(source.len() / 4 + 1);
        let mut errors = ParseErrors::new();

        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Error {
                for lex_error in lexer.take_errors() {
                    errors.push(lex_error.into());
                }
            }

            let is_eof = token.kind == TokenKind::Eof;
            buffer.push(token);
            if is_eof {
                break;
            }
        }

        Self {
            buffer,
            position: 0,
            errors,
            arena,
        }
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// Parse a whole program: one or more statements.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse(source: &str, arena: &'ast Bump) -> Result<Script<'ast>, ParseErrors> {
        let mut parser = Parser::new(source, arena);
        let result = parser
            .parse_script()
            .map(|(statements, span)| Script::new(statements, span));
        parser.finish(result)
    }

    /// Parse a single expression that must span the whole input.
    pub fn expression(source: &str, arena: &'ast Bump) -> Result<&'ast Expr<'ast>, ParseErrors> {
        let mut parser = Parser::new(source, arena);
        let result = parser
            .parse_expr()
            .and_then(|expr| parser.expect_end().map(|()| expr));
        parser.finish(result)
    }

    /// Parse a single statement that must span the whole input.
    pub fn statement(source: &str, arena: &'ast Bump) -> Result<Stmt<'ast>, ParseErrors> {
        let mut parser = Parser::new(source, arena);
        let result = parser
            .parse_statement()
            .and_then(|stmt| parser.expect_end().map(|()| stmt));
        parser.finish(result)
    }

    /// Lexer errors take precedence: a syntax error after an invalid token
    /// only restates it.
    fn finish<T>(&mut self, result: Result<T, ParseError>) -> Result<T, ParseErrors> {
        if !self.errors.is_empty() {
            return Err(std::mem::take(&mut self.errors));
        }
        result.map_err(ParseErrors::from)
    }

    // ========================================================================
    // Token navigation
    // ========================================================================

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> &Token<'ast> {
        self.peek_nth(0)
    }

    /// Peek ahead n tokens; past the end this keeps answering `Eof`.
    pub fn peek_nth(&self, n: usize) -> &Token<'ast> {
        let last = self.buffer.len() - 1;
        &self.buffer[(self.position + n).min(last)]
    }

    /// Get the current token and advance. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token<'ast> {
        let token = *self.peek();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'ast>> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail with "expected X, found Y".
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'ast>, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let token = *self.peek();
        if token.kind == TokenKind::Eof {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                token.span,
                format!("expected {}, found end of file", kind),
            ));
        }
        Err(ParseError::expected_token(
            token.span,
            kind.description(),
            &token.describe(),
        ))
    }

    /// Span of the most recently consumed token.
    pub(super) fn previous_span(&self) -> Span {
        self.position
            .checked_sub(1)
            .and_then(|index| self.buffer.get(index))
            .map(|token| token.span)
            .unwrap_or_default()
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        let token = *self.peek();
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::TrailingInput,
                token.span,
                format!("unexpected {} after end of input", token.describe()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_ends_with_eof() {
        let arena = Bump::new();
        let parser = Parser::new("let x = 1;", &arena);
        assert_eq!(parser.buffer.len(), 6);
        assert_eq!(parser.buffer.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn navigation() {
        let arena = Bump::new();
        let mut parser = Parser::new("return x;", &arena);

        assert!(parser.check(TokenKind::Return));
        assert_eq!(parser.peek_nth(1).kind, TokenKind::Identifier);
        assert_eq!(parser.peek_nth(10).kind, TokenKind::Eof);

        assert!(parser.eat(TokenKind::Let).is_none());
        assert!(parser.eat(TokenKind::Return).is_some());
        assert_eq!(parser.advance().lexeme, "x");
        assert_eq!(parser.previous_span(), Span::new(7, 8, 1, 8));
        parser.advance();
        assert!(parser.is_eof());

        // Advancing at the end keeps answering Eof
        assert_eq!(parser.advance().kind, TokenKind::Eof);
        assert!(parser.is_eof());
    }

    #[test]
    fn expect_reports_found_token() {
        let arena = Bump::new();
        let mut parser = Parser::new("let = 3;", &arena);
        parser.advance();

        let error = parser.expect(TokenKind::Identifier).unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::ExpectedToken);
        assert_eq!(error.message, "expected identifier, found '='");
    }

    #[test]
    fn expect_at_eof() {
        let arena = Bump::new();
        let mut parser = Parser::new("", &arena);
        let error = parser.expect(TokenKind::Semicolon).unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::UnexpectedEof);
    }

    #[test]
    fn lexer_errors_are_reported() {
        let arena = Bump::new();
        let errors = Parser::parse("let x = 1 @ 2;", &arena).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().map(|e| e.kind), Some(ParseErrorKind::InvalidToken));
    }

    #[test]
    fn trailing_input_rejected() {
        let arena = Bump::new();
        let errors = Parser::expression("x y", &arena).unwrap_err();
        assert_eq!(errors.first().map(|e| e.kind), Some(ParseErrorKind::TrailingInput));

        let errors = Parser::statement("return 1; return 2;", &arena).unwrap_err();
        assert_eq!(errors.first().map(|e| e.kind), Some(ParseErrorKind::TrailingInput));
    }
}
