//! Expression AST nodes for SheetScript.
//!
//! Precedence, lowest first:
//! 1. Ternary (`c ? a : b`) - right associative
//! 2. Method call (`recv.name(args)`) - left associative, chainable
//! 3. Primary: literal, `new C(args)`, `f(args)`, variable, `this.field`,
//!    `( expr )`

use crate::ast::Ident;
use sheetscript_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    Literal(LiteralExpr<'ast>),
    /// Variable reference, including a bare `this`.
    Variable(Ident<'ast>),
    /// `new C(args)`
    New(&'ast NewExpr<'ast>),
    /// `f(args)`
    Call(&'ast CallExpr<'ast>),
    /// `this.field`
    FieldAccess(&'ast FieldAccessExpr<'ast>),
    /// `recv.method(args)`
    MethodCall(&'ast MethodCallExpr<'ast>),
    Ternary(&'ast TernaryExpr<'ast>),
    Paren(&'ast ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Variable(e) => e.span,
            Self::New(e) => e.span,
            Self::Call(e) => e.span,
            Self::FieldAccess(e) => e.span,
            Self::MethodCall(e) => e.span,
            Self::Ternary(e) => e.span,
            Self::Paren(e) => e.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub kind: LiteralKind<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// Number exactly as written in the source, sign included.
    Number(&'ast str),
    /// String contents with escapes already decoded.
    String(&'ast str),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpr<'ast> {
    pub class: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub callee: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAccessExpr<'ast> {
    pub field: Ident<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodCallExpr<'ast> {
    pub receiver: &'ast Expr<'ast>,
    pub method: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TernaryExpr<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_expr: &'ast Expr<'ast>,
    pub else_expr: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    pub expr: &'ast Expr<'ast>,
    pub span: Span,
}
