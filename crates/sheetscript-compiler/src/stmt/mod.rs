//! Statement lowering.
//!
//! The [`StmtCompiler`] lowers the statements that may appear inside a
//! body (function, method or constructor) and at the top level after the
//! definitions are peeled off: `let` bindings and `return`. Definitions
//! are lowered by [`class_def`] and [`function_def`], which build their own
//! statement compilers for the bodies they contain.
//!
//! # Example
//!
//! ```ignore
//! let compiler = StmtCompiler::new(Scope::static_function("id"));
//! let body = compiler.compile_body(func.body.stmts, ReturnContext::Function, func.span)?;
//! let text = body.to_let();
//! ```

mod assignment;
pub mod class_def;
pub mod constructor;
pub mod function_def;

use sheetscript_core::{CompilationError, ReturnContext, Span};
use sheetscript_parser::ast::{Ident, Stmt};

use crate::emit::{ParamList, let_block};
use crate::expr::ExprCompiler;
use crate::names::validate_ident;
use crate::scope::{Scope, ScopeKind};

type Result<T> = std::result::Result<T, CompilationError>;

/// One lowered statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lowered {
    /// `name, value,` to splice into a LET.
    Binding(String),
    /// The value a body produces.
    Return(String),
}

/// A lowered body: its bindings plus the returned expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub bindings: Vec<String>,
    pub result: String,
}

impl Body {
    pub fn to_let(&self) -> String {
        let_block(&self.bindings, &self.result)
    }
}

/// Lowers body statements within one scope.
pub struct StmtCompiler<'s> {
    exprs: ExprCompiler<'s>,
}

impl<'s> StmtCompiler<'s> {
    pub fn new(scope: Scope<'s>) -> Self {
        Self {
            exprs: ExprCompiler::new(scope),
        }
    }

    pub fn scope(&self) -> Scope<'s> {
        self.exprs.scope()
    }

    pub fn exprs(&self) -> &ExprCompiler<'s> {
        &self.exprs
    }

    /// Lower one statement found inside a body.
    pub fn compile(&self, stmt: &Stmt<'_>) -> Result<Lowered> {
        match stmt {
            Stmt::Assign(assign) => assignment::compile_assign(self, assign).map(Lowered::Binding),
            Stmt::FieldAssign(assign) => {
                assignment::compile_field_assign(self, assign).map(Lowered::Binding)
            }
            Stmt::Return(ret) => Ok(Lowered::Return(self.exprs.compile(ret.value)?)),
            Stmt::Class(class) => Err(CompilationError::misplaced(
                "Class definitions cannot be nested within other statements",
                class.span,
            )),
            Stmt::Function(func) => {
                let message = if self.scope().kind == ScopeKind::Class {
                    "Instance methods cannot be nested inside other methods"
                } else {
                    "Instance methods can only be defined within a class"
                };
                Err(CompilationError::misplaced(message, func.span))
            }
            Stmt::Constructor(ctor) => Err(CompilationError::misplaced(
                "Class constructors can only be defined at the top of a class",
                ctor.span,
            )),
        }
    }

    /// Lower statements up to and including the first `return`. Anything
    /// after it is never lowered.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_body(
        &self,
        stmts: &[Stmt<'_>],
        context: ReturnContext,
        span: Span,
    ) -> Result<Body> {
        let mut bindings = Vec::with_capacity(stmts.len());
        for (index, stmt) in stmts.iter().enumerate() {
            match self.compile(stmt)? {
                Lowered::Binding(binding) => bindings.push(binding),
                Lowered::Return(result) => {
                    let skipped = stmts.len() - index - 1;
                    if skipped > 0 {
                        tracing::debug!(skipped, "statements after return are not compiled");
                    }
                    return Ok(Body { bindings, result });
                }
            }
        }
        Err(CompilationError::MissingReturn { context, span })
    }
}

/// Validate parameter names. `this` is never a parameter: instances bind
/// it themselves.
pub fn compile_params<'ast>(params: &[Ident<'ast>]) -> Result<ParamList<'ast>> {
    let names = params
        .iter()
        .map(|param| validate_ident(param, false))
        .collect::<Result<Vec<_>>>()?;
    Ok(ParamList::new(names))
}
