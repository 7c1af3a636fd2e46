//! Conditional expression.

use sheetscript_parser::ast::TernaryExpr;

use super::{ExprCompiler, Result};
use crate::emit::unbox;

/// `c ? a : b` becomes `IF(c("_rawVal"), a, b)`. The condition is unboxed,
/// the branches stay boxed.
pub fn compile_ternary(compiler: &ExprCompiler<'_>, expr: &TernaryExpr<'_>) -> Result<String> {
    let condition = compiler.compile(expr.condition)?;
    let then_expr = compiler.compile(expr.then_expr)?;
    let else_expr = compiler.compile(expr.else_expr)?;
    Ok(format!("IF({}, {}, {})", unbox(&condition), then_expr, else_expr))
}

#[cfg(test)]
mod tests {
    use super::super::tests::lower;
    use crate::scope::Scope;

    #[test]
    fn unboxes_condition() {
        assert_eq!(
            lower("n.lessThan(2) ? 1 : n", Scope::top_level()).unwrap(),
            "IF(n(\"lessThan\")(make_builtin(2))(\"_rawVal\"), make_builtin(1), n)"
        );
    }

    #[test]
    fn nests_to_the_right() {
        assert_eq!(
            lower("a ? b : c ? d : e", Scope::top_level()).unwrap(),
            "IF(a(\"_rawVal\"), b, IF(c(\"_rawVal\"), d, e))"
        );
    }
}
