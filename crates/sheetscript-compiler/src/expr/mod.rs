//! Expression lowering.
//!
//! The [`ExprCompiler`] turns one AST expression into formula text. Every
//! value at run time is a message handler, so lowering never needs types:
//! literals are boxed with `make_builtin`, method calls become message sends
//! and a ternary unboxes its condition.
//!
//! # Example
//!
//! ```ignore
//! let compiler = ExprCompiler::new(Scope::top_level());
//! let text = compiler.compile(&expr)?;
//! ```

mod calls;
mod identifiers;
mod literals;
mod member;
mod ternary;

use sheetscript_core::CompilationError;
use sheetscript_parser::ast::Expr;

use crate::scope::Scope;

type Result<T> = std::result::Result<T, CompilationError>;

/// Lowers expressions within one scope.
pub struct ExprCompiler<'s> {
    scope: Scope<'s>,
}

impl<'s> ExprCompiler<'s> {
    pub fn new(scope: Scope<'s>) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> Scope<'s> {
        self.scope
    }

    /// Lower `expr` to formula text.
    pub fn compile(&self, expr: &Expr<'_>) -> Result<String> {
        match expr {
            Expr::Literal(lit) => Ok(literals::compile_literal(&lit.kind)),
            Expr::Variable(ident) => identifiers::compile_variable(self, ident),
            Expr::New(new) => calls::compile_new(self, new),
            Expr::Call(call) => calls::compile_call(self, call),
            Expr::FieldAccess(access) => member::compile_field_access(self, access),
            Expr::MethodCall(call) => member::compile_method_call(self, call),
            Expr::Ternary(ternary) => ternary::compile_ternary(self, ternary),
            Expr::Paren(paren) => Ok(format!("({})", self.compile(paren.expr)?)),
        }
    }

    /// Lower each argument in order.
    pub fn compile_args(&self, args: &[Expr<'_>]) -> Result<Vec<String>> {
        args.iter().map(|arg| self.compile(arg)).collect()
    }
}
