//! Field reads and message sends.

use sheetscript_core::CompilationError;
use sheetscript_parser::ast::{FieldAccessExpr, MethodCallExpr};

use super::{ExprCompiler, Result};
use crate::emit::{call_if_args, send};
use crate::names::validate_ident;

/// `this.field` reads the constructor binding `this_field`.
pub fn compile_field_access(
    compiler: &ExprCompiler<'_>,
    expr: &FieldAccessExpr<'_>,
) -> Result<String> {
    if compiler.scope().is_static() {
        return Err(CompilationError::misplaced(
            "Field access is not allowed at the static scope",
            expr.span,
        ));
    }
    let field = validate_ident(&expr.field, true)?;
    Ok(format!("this_{}", field))
}

/// `recv.m(args)` sends `"m"` to the receiver, then applies the answer to
/// the arguments if there are any.
pub fn compile_method_call(
    compiler: &ExprCompiler<'_>,
    expr: &MethodCallExpr<'_>,
) -> Result<String> {
    let receiver = compiler.compile(expr.receiver)?;
    let method = validate_ident(&expr.method, false)?;
    let args = compiler.compile_args(expr.args)?;
    Ok(call_if_args(send(&receiver, method), &args))
}
