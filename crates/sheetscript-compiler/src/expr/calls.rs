//! Static function calls and instantiation.

use sheetscript_parser::ast::{CallExpr, NewExpr};

use super::{ExprCompiler, Result};
use crate::emit::call;
use crate::names::validate_ident;

/// `f(args)`.
///
/// Inside the body of `f` itself the function is not yet bound, so the call
/// goes through the bootstrap parameter: `_f(_f)(args)`.
pub fn compile_call(compiler: &ExprCompiler<'_>, expr: &CallExpr<'_>) -> Result<String> {
    let name = validate_ident(&expr.callee, false)?;
    let args = compiler.compile_args(expr.args)?;

    if compiler.scope().is_self_call(name) {
        Ok(call("_f(_f)", &args))
    } else {
        Ok(call(&format!("static_function_{}", name), &args))
    }
}

/// `new C(args)`.
///
/// Inside class `C` the class is not yet bound either; its constructor is
/// reachable as `_constructor`.
pub fn compile_new(compiler: &ExprCompiler<'_>, expr: &NewExpr<'_>) -> Result<String> {
    let class = validate_ident(&expr.class, false)?;
    let args = compiler.compile_args(expr.args)?;

    if compiler.scope().is_self_instantiation(class) {
        Ok(call("_constructor", &args))
    } else {
        Ok(call(&format!("new_{}", class), &args))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::lower;
    use crate::scope::Scope;

    #[test]
    fn static_call() {
        assert_eq!(
            lower("add(x, 1)", Scope::top_level()).unwrap(),
            "static_function_add(x, make_builtin(1))"
        );
        assert_eq!(lower("now()", Scope::top_level()).unwrap(), "static_function_now()");
    }

    #[test]
    fn recursive_call() {
        assert_eq!(
            lower("fact(n)", Scope::static_function("fact")).unwrap(),
            "_f(_f)(n)"
        );
        assert_eq!(
            lower("other(n)", Scope::static_function("fact")).unwrap(),
            "static_function_other(n)"
        );
    }

    #[test]
    fn call_from_method_uses_binding() {
        // Method bodies are class scope: same-named functions are not recursion
        assert_eq!(
            lower("Box(1)", Scope::class("Box")).unwrap(),
            "static_function_Box(make_builtin(1))"
        );
    }

    #[test]
    fn instantiation() {
        assert_eq!(
            lower("new Box(7)", Scope::top_level()).unwrap(),
            "new_Box(make_builtin(7))"
        );
        assert_eq!(lower("new Box(7)", Scope::class("Box")).unwrap(), "_constructor(make_builtin(7))");
        assert_eq!(lower("new Box()", Scope::constructor("Box")).unwrap(), "_constructor()");
        assert_eq!(lower("new Pair()", Scope::class("Box")).unwrap(), "new_Pair()");
    }

    #[test]
    fn names_are_checked() {
        assert!(lower("new A1()", Scope::top_level()).is_err());
        assert!(lower("_f()", Scope::top_level()).is_err());
    }
}
