//! `let` statements.

use sheetscript_core::CompilationError;
use sheetscript_parser::ast::{AssignStmt, FieldAssignStmt};

use super::{Result, StmtCompiler};
use crate::emit::binding;
use crate::names::validate_ident;
use crate::scope::ScopeKind;

/// `let name = value;`
pub fn compile_assign(compiler: &StmtCompiler<'_>, stmt: &AssignStmt<'_>) -> Result<String> {
    let name = validate_ident(&stmt.target, false)?;
    let value = compiler.exprs().compile(stmt.value)?;
    Ok(binding(name, &value))
}

/// `let this.field = value;`, constructors only. Binds `this_field`, which
/// the message handler closes over.
pub fn compile_field_assign(
    compiler: &StmtCompiler<'_>,
    stmt: &FieldAssignStmt<'_>,
) -> Result<String> {
    if compiler.scope().kind != ScopeKind::Constructor {
        return Err(CompilationError::misplaced(
            "Instance variables can only be assigned within a class constructor",
            stmt.span,
        ));
    }
    let field = validate_ident(&stmt.field, false)?;
    let value = compiler.exprs().compile(stmt.value)?;
    Ok(binding(&format!("this_{}", field), &value))
}

#[cfg(test)]
mod tests {
    use super::super::{Lowered, StmtCompiler};
    use crate::scope::Scope;
    use bumpalo::Bump;
    use sheetscript_parser::Parser;

    fn lower(source: &str, scope: Scope<'_>) -> super::Result<Lowered> {
        let arena = Bump::new();
        let stmt = Parser::statement(source, &arena).expect("statement parses");
        StmtCompiler::new(scope).compile(&stmt)
    }

    #[test]
    fn plain_binding() {
        assert_eq!(
            lower("let x = 5;", Scope::top_level()).unwrap(),
            Lowered::Binding("x, make_builtin(5),".into())
        );
    }

    #[test]
    fn binding_name_checked() {
        let error = lower("let A1 = 5;", Scope::top_level()).unwrap_err();
        assert!(error.message().contains("cell ID"));
        let error = lower("let _constructor = 5;", Scope::constructor("Box")).unwrap_err();
        assert!(error.message().contains("reserved"));
    }

    #[test]
    fn field_binding_in_constructor() {
        assert_eq!(
            lower("let this.v = v;", Scope::constructor("Box")).unwrap(),
            Lowered::Binding("this_v, v,".into())
        );
    }

    #[test]
    fn field_binding_elsewhere() {
        for scope in [Scope::top_level(), Scope::class("Box")] {
            let error = lower("let this.v = 1;", scope).unwrap_err();
            assert_eq!(
                error.message(),
                "Instance variables can only be assigned within a class constructor"
            );
        }
    }
}
