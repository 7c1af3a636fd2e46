//! Literal lowering: every literal is boxed with `make_builtin`.

use sheetscript_parser::ast::LiteralKind;

use crate::emit::{MAKE_BUILTIN, quote_string};

/// Compile a literal expression.
pub fn compile_literal(kind: &LiteralKind<'_>) -> String {
    let raw = match kind {
        // Numbers are emitted exactly as written
        LiteralKind::Number(text) => (*text).to_string(),
        LiteralKind::String(text) => quote_string(text),
        LiteralKind::Bool(true) => "TRUE".to_string(),
        LiteralKind::Bool(false) => "FALSE".to_string(),
    };
    format!("{}({})", MAKE_BUILTIN, raw)
}

#[cfg(test)]
mod tests {
    use super::super::tests::lower;
    use crate::scope::Scope;

    #[test]
    fn numbers() {
        assert_eq!(lower("5", Scope::top_level()).unwrap(), "make_builtin(5)");
        assert_eq!(lower("-2.5e3", Scope::top_level()).unwrap(), "make_builtin(-2.5e3)");
    }

    #[test]
    fn booleans() {
        assert_eq!(lower("true", Scope::top_level()).unwrap(), "make_builtin(TRUE)");
        assert_eq!(lower("false", Scope::top_level()).unwrap(), "make_builtin(FALSE)");
    }

    #[test]
    fn strings_are_requoted() {
        assert_eq!(
            lower(r#""say \"hi\"""#, Scope::top_level()).unwrap(),
            r#"make_builtin("say ""hi""")"#
        );
    }
}
