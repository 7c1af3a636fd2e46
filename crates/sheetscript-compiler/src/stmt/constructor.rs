//! Class constructors.

use sheetscript_core::CompilationError;
use sheetscript_parser::ast::{ConstructorDef, Stmt};

use super::{Lowered, Result, StmtCompiler, compile_params};
use crate::emit::{Fragment, ParamList};
use crate::scope::Scope;

/// A lowered constructor: its parameters and the field bindings that wrap
/// the instance's message handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParts<'ast> {
    pub params: ParamList<'ast>,
    pub fields: Fragment,
}

/// `constructor(params) { ... }` of `class`.
///
/// The body runs in constructor scope: it may bind fields and locals, and
/// may not return.
pub fn compile_constructor<'ast>(
    ctor: &ConstructorDef<'ast>,
    class: &str,
) -> Result<ConstructorParts<'ast>> {
    let params = compile_params(ctor.params)?;
    let compiler = StmtCompiler::new(Scope::constructor(class));

    let mut opening = format!("LAMBDA({}LET(", params.leading());
    for stmt in ctor.body.stmts {
        if let Stmt::Return(ret) = stmt {
            return Err(CompilationError::unexpected_return(
                "Constructor cannot return a value",
                ret.span,
            ));
        }
        if let Lowered::Binding(binding) = compiler.compile(stmt)? {
            opening.push_str(&binding);
            opening.push(' ');
        }
    }

    Ok(ConstructorParts {
        params,
        fields: Fragment::new(opening, "))"),
    })
}
