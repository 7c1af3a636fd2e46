//! Expression parsing.
//!
//! The grammar has only three levels, so this is plain recursive descent:
//! ternary, then chained method calls, then primaries.

use super::parser::Parser;
use crate::ast::expr::*;
use crate::ast::Ident;
use crate::lexer::TokenKind;
use sheetscript_core::{ParseError, ParseErrorKind, Span};

impl<'ast> Parser<'ast> {
    /// Parse a full expression.
    pub fn parse_expr(&mut self) -> Result<&'ast Expr<'ast>, ParseError> {
        let condition = self.parse_method_chain()?;

        if self.eat(TokenKind::Question).is_none() {
            return Ok(condition);
        }

        let then_expr = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        // Right-associative: `a ? b : c ? d : e` nests in the else branch
        let else_expr = self.parse_expr()?;
        let span = condition.span().merge(else_expr.span());

        Ok(self.arena.alloc(Expr::Ternary(self.arena.alloc(TernaryExpr {
            condition,
            then_expr,
            else_expr,
            span,
        }))))
    }

    /// Parse a primary followed by any number of `.name(args)` sends.
    fn parse_method_chain(&mut self) -> Result<&'ast Expr<'ast>, ParseError> {
        let mut receiver = self.parse_primary()?;

        while self.eat(TokenKind::Dot).is_some() {
            let name = self.expect_ident()?;
            if !self.check(TokenKind::LeftParen) {
                let token = *self.peek();
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedToken,
                    token.span,
                    format!(
                        "expected '(' after method name '{}', found {}",
                        name.name,
                        token.describe()
                    ),
                ));
            }
            let args = self.parse_arguments()?;
            let span = receiver.span().merge(self.previous_span());

            receiver = self
                .arena
                .alloc(Expr::MethodCall(self.arena.alloc(MethodCallExpr {
                    receiver,
                    method: name,
                    args,
                    span,
                })));
        }

        Ok(receiver)
    }

    fn parse_primary(&mut self) -> Result<&'ast Expr<'ast>, ParseError> {
        let token = *self.peek();

        let expr = match token.kind {
            TokenKind::Number => {
                self.advance();
                Expr::Literal(LiteralExpr {
                    kind: LiteralKind::Number(token.lexeme),
                    span: token.span,
                })
            }
            TokenKind::String => {
                self.advance();
                let text = self.decode_string(token.lexeme, token.span)?;
                Expr::Literal(LiteralExpr {
                    kind: LiteralKind::String(text),
                    span: token.span,
                })
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Expr::Literal(LiteralExpr {
                    kind: LiteralKind::Bool(token.kind == TokenKind::True),
                    span: token.span,
                })
            }
            TokenKind::New => {
                self.advance();
                let class = self.expect_ident()?;
                let args = self.parse_arguments()?;
                let span = token.span.merge(self.previous_span());
                Expr::New(self.arena.alloc(NewExpr { class, args, span }))
            }
            TokenKind::Identifier => {
                self.advance();
                let ident = Ident::new(token.lexeme, token.span);
                if self.check(TokenKind::LeftParen) {
                    let args = self.parse_arguments()?;
                    let span = token.span.merge(self.previous_span());
                    Expr::Call(self.arena.alloc(CallExpr {
                        callee: ident,
                        args,
                        span,
                    }))
                } else {
                    Expr::Variable(ident)
                }
            }
            TokenKind::This => {
                self.advance();
                if self.is_field_access() {
                    self.advance(); // '.'
                    let field = self.expect_ident()?;
                    let span = token.span.merge(field.span);
                    Expr::FieldAccess(self.arena.alloc(FieldAccessExpr { field, span }))
                } else {
                    Expr::Variable(Ident::new(token.lexeme, token.span))
                }
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let close = self.expect(TokenKind::RightParen)?;
                Expr::Paren(self.arena.alloc(ParenExpr {
                    expr: inner,
                    span: token.span.merge(close.span),
                }))
            }
            TokenKind::Eof => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof,
                    token.span,
                    "expected expression, found end of file",
                ));
            }
            _ => return Err(ParseError::expected_expression(token.span, &token.describe())),
        };

        Ok(self.arena.alloc(expr))
    }

    /// After `this`: `.name` not followed by `(` reads a field.
    fn is_field_access(&self) -> bool {
        self.peek().kind == TokenKind::Dot
            && self.peek_nth(1).kind == TokenKind::Identifier
            && self.peek_nth(2).kind != TokenKind::LeftParen
    }

    /// Parse `( expr, ... )`.
    pub(super) fn parse_arguments(&mut self) -> Result<&'ast [Expr<'ast>], ParseError> {
        self.expect(TokenKind::LeftParen)?;

        let mut args = bumpalo::collections::Vec::new_in(self.arena);
        if !self.check(TokenKind::RightParen) {
            args.push(*self.parse_expr()?);
            while self.eat(TokenKind::Comma).is_some() {
                args.push(*self.parse_expr()?);
            }
        }

        self.expect(TokenKind::RightParen)?;
        Ok(args.into_bump_slice())
    }

    pub(super) fn expect_ident(&mut self) -> Result<Ident<'ast>, ParseError> {
        let token = *self.peek();
        if token.kind == TokenKind::Identifier {
            self.advance();
            return Ok(Ident::new(token.lexeme, token.span));
        }
        if token.kind == TokenKind::Eof {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                token.span,
                "expected identifier, found end of file",
            ));
        }
        Err(ParseError::expected_identifier(token.span, &token.describe()))
    }

    /// Strip the quotes from a string lexeme and decode its escapes.
    ///
    /// Supports `\"`, `\\`, `\n`, `\t` and `\r`.
    fn decode_string(&mut self, lexeme: &'ast str, span: Span) -> Result<&'ast str, ParseError> {
        let content = lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(lexeme);

        if !content.contains('\\') {
            return Ok(content);
        }

        let mut decoded = String::with_capacity(content.len());
        let mut chars = content.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                decoded.push(c);
                continue;
            }
            match chars.next() {
                Some('"') => decoded.push('"'),
                Some('\\') => decoded.push('\\'),
                Some('n') => decoded.push('\n'),
                Some('t') => decoded.push('\t'),
                Some('r') => decoded.push('\r'),
                Some(other) => {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidEscapeSequence,
                        span,
                        format!("unknown escape sequence: \\{}", other),
                    ));
                }
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidEscapeSequence,
                        span,
                        "incomplete escape sequence at end of string",
                    ));
                }
            }
        }

        Ok(self.arena.alloc_str(&decoded))
    }
}
