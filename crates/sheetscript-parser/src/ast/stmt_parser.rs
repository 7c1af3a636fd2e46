//! Statement and program parsing.

use super::parser::Parser;
use crate::ast::stmt::*;
use crate::ast::Ident;
use crate::lexer::TokenKind;
use sheetscript_core::{ParseError, ParseErrorKind, Span};

impl<'ast> Parser<'ast> {
    /// Parse `statement+` up to end of input.
    pub(super) fn parse_script(&mut self) -> Result<(&'ast [Stmt<'ast>], Span), ParseError> {
        let start = self.peek().span;
        if self.is_eof() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyProgram,
                start,
                "a program needs at least one statement",
            ));
        }

        let mut stmts = bumpalo::collections::Vec::new_in(self.arena);
        while !self.is_eof() {
            stmts.push(self.parse_statement()?);
        }

        let span = start.merge(self.previous_span());
        Ok((stmts.into_bump_slice(), span))
    }

    /// Parse one statement of any kind.
    pub fn parse_statement(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let token = *self.peek();
        match token.kind {
            TokenKind::Class => self.parse_class(),
            TokenKind::Fn => self.parse_function(),
            TokenKind::Constructor => self.parse_constructor(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Eof => Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                token.span,
                "expected statement, found end of file",
            )),
            _ => Err(ParseError::new(
                ParseErrorKind::ExpectedStatement,
                token.span,
                format!(
                    "expected 'class', 'fn', 'constructor', 'let' or 'return', found {}",
                    token.describe()
                ),
            )),
        }
    }

    /// `class Name { statement* }`
    fn parse_class(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.expect(TokenKind::Class)?.span;
        let name = self.expect_ident()?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);

        Ok(Stmt::Class(self.arena.alloc(ClassDef { name, body, span })))
    }

    /// `fn name(params) { statement* }`
    fn parse_function(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.expect(TokenKind::Fn)?.span;
        let name = self.expect_ident()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);

        Ok(Stmt::Function(self.arena.alloc(FunctionDef {
            name,
            params,
            body,
            span,
        })))
    }

    /// `constructor(params) { statement* }`
    fn parse_constructor(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.expect(TokenKind::Constructor)?.span;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);

        Ok(Stmt::Constructor(self.arena.alloc(ConstructorDef {
            params,
            body,
            span,
        })))
    }

    /// `let this.field = expr;` or `let name = expr;`
    fn parse_let(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.expect(TokenKind::Let)?.span;

        if self.eat(TokenKind::This).is_some() {
            self.expect(TokenKind::Dot)?;
            let field = self.expect_ident()?;
            self.expect(TokenKind::Equal)?;
            let value = self.parse_expr()?;
            let end = self.expect(TokenKind::Semicolon)?.span;

            return Ok(Stmt::FieldAssign(self.arena.alloc(FieldAssignStmt {
                field,
                value,
                span: start.merge(end),
            })));
        }

        let target = self.expect_ident()?;
        self.expect(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        let end = self.expect(TokenKind::Semicolon)?.span;

        Ok(Stmt::Assign(self.arena.alloc(AssignStmt {
            target,
            value,
            span: start.merge(end),
        })))
    }

    /// `return expr;`
    fn parse_return(&mut self) -> Result<Stmt<'ast>, ParseError> {
        let start = self.expect(TokenKind::Return)?.span;
        let value = self.parse_expr()?;
        let end = self.expect(TokenKind::Semicolon)?.span;

        Ok(Stmt::Return(self.arena.alloc(ReturnStmt {
            value,
            span: start.merge(end),
        })))
    }

    /// `{ statement* }`
    fn parse_block(&mut self) -> Result<Block<'ast>, ParseError> {
        let open = *self.peek();
        if open.kind != TokenKind::LeftBrace {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedBlock,
                open.span,
                format!("expected '{{', found {}", open.describe()),
            ));
        }
        self.advance();

        let mut stmts = bumpalo::collections::Vec::new_in(self.arena);
        while !self.check(TokenKind::RightBrace) {
            if self.is_eof() {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEof,
                    self.peek().span,
                    format!("unclosed block opened at {}", open.span),
                ));
            }
            stmts.push(self.parse_statement()?);
        }
        let close = self.expect(TokenKind::RightBrace)?;

        Ok(Block {
            stmts: stmts.into_bump_slice(),
            span: open.span.merge(close.span),
        })
    }

    /// `( name, ... )`
    fn parse_params(&mut self) -> Result<&'ast [Ident<'ast>], ParseError> {
        let open = *self.peek();
        if open.kind != TokenKind::LeftParen {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedParameters,
                open.span,
                format!("expected '(', found {}", open.describe()),
            ));
        }
        self.advance();

        let mut params = bumpalo::collections::Vec::new_in(self.arena);
        if !self.check(TokenKind::RightParen) {
            params.push(self.expect_ident()?);
            while self.eat(TokenKind::Comma).is_some() {
                params.push(self.expect_ident()?);
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(params.into_bump_slice())
    }
}
