//! Variable references.

use sheetscript_parser::ast::Ident;

use super::{ExprCompiler, Result};
use crate::names::validate_ident;

/// A bare name. `this` is only a name inside class and constructor scope.
pub fn compile_variable(compiler: &ExprCompiler<'_>, ident: &Ident<'_>) -> Result<String> {
    let name = validate_ident(ident, compiler.scope().allows_this())?;
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::tests::lower;
    use crate::scope::Scope;
    use sheetscript_core::{CompilationError, NameErrorKind};

    #[test]
    fn plain_variable() {
        assert_eq!(lower("total", Scope::top_level()).unwrap(), "total");
    }

    #[test]
    fn this_in_class_scope() {
        assert_eq!(lower("this", Scope::class("Box")).unwrap(), "this");
        assert_eq!(lower("this", Scope::constructor("Box")).unwrap(), "this");
    }

    #[test]
    fn this_at_static_scope() {
        let error = lower("this", Scope::top_level()).unwrap_err();
        assert!(matches!(
            error,
            CompilationError::InvalidName {
                kind: NameErrorKind::ThisOutsideClass,
                ..
            }
        ));
    }

    #[test]
    fn reserved_variable() {
        let error = lower("_message", Scope::class("Box")).unwrap_err();
        assert_eq!(error.message(), "Variable name matches reserved keyword: _message");
    }
}
