//! Statement AST nodes for SheetScript.
//!
//! Every statement kind parses in every block. Whether a class, method,
//! constructor or field assignment is legal where it appears is decided
//! by the compiler, which knows the enclosing scope.

use crate::ast::{Expr, Ident};
use sheetscript_core::Span;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// `class Name { ... }`
    Class(&'ast ClassDef<'ast>),
    /// `fn name(params) { ... }`: a static function at top level, a method in a class.
    Function(&'ast FunctionDef<'ast>),
    /// `constructor(params) { ... }`
    Constructor(&'ast ConstructorDef<'ast>),
    /// `let this.field = value;`
    FieldAssign(&'ast FieldAssignStmt<'ast>),
    /// `let name = value;`
    Assign(&'ast AssignStmt<'ast>),
    /// `return value;`
    Return(&'ast ReturnStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Class(s) => s.span,
            Self::Function(s) => s.span,
            Self::Constructor(s) => s.span,
            Self::FieldAssign(s) => s.span,
            Self::Assign(s) => s.span,
            Self::Return(s) => s.span,
        }
    }

    /// Short statement-kind name for logs and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Class(_) => "class definition",
            Self::Function(_) => "function definition",
            Self::Constructor(_) => "class constructor",
            Self::FieldAssign(_) => "field assignment",
            Self::Assign(_) => "assignment",
            Self::Return(_) => "return",
        }
    }
}

/// A braced statement list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDef<'ast> {
    pub name: Ident<'ast>,
    pub body: Block<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDef<'ast> {
    pub name: Ident<'ast>,
    pub params: &'ast [Ident<'ast>],
    pub body: Block<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructorDef<'ast> {
    pub params: &'ast [Ident<'ast>],
    pub body: Block<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAssignStmt<'ast> {
    pub field: Ident<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    pub target: Ident<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}
