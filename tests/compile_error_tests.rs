//! Programs the compiler must reject, and how it reports them.


use sheetscript::{CompilationError, ParseErrorKind, ReturnContext, SheetScriptError};
use test_harness::*;

// =============================================================================
// Missing Returns
// =============================================================================

#[test]
fn test_program_without_return() {
    let error = compile_error("let x = 1;");
    assert_eq!(error.message(), "Program must return a value");
    assert!(matches!(
        error,
        CompilationError::MissingReturn {
            context: ReturnContext::Program,
            ..
        }
    ));
}

#[test]
fn test_function_without_return() {
    let error = compile_error("fn f(x) { let y = x; } return f(1);");
    assert_eq!(error.message(), "Function must return a value");
}

#[test]
fn test_method_without_return() {
    let source = r#"
        class Box {
            constructor() {
            }

            fn get() {
                let x = 1;
            }
        }

        return 1;
    "#;
    let error = compile_error(source);
    assert_eq!(error.message(), "Function must return a value");
    assert_eq!(error.span().line, 6);
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_constructor_return() {
    let source = "class Box { constructor() { return 1; } } return 1;";
    let error = compile_error(source);
    assert_eq!(error.message(), "Constructor cannot return a value");
    assert!(matches!(error, CompilationError::UnexpectedReturn { .. }));
}

#[test]
fn test_top_level_constructor() {
    let error = compile_error("constructor(x) { } return 1;");
    assert_eq!(error.message(), "Class constructors must be defined within a class");
}

#[test]
fn test_top_level_field_assignment() {
    let error = compile_error("let this.x = 1; return 1;");
    assert_eq!(
        error.message(),
        "Instance variables cannot be assigned at the outer (static) scope"
    );
}

#[test]
fn test_field_assignment_in_method() {
    let source = r#"
        class Box {
            constructor() {
            }

            fn set(v) {
                let this.v = v;
                return this;
            }
        }

        return 1;
    "#;
    let error = compile_error(source);
    assert_eq!(
        error.message(),
        "Instance variables can only be assigned within a class constructor"
    );
}

#[test]
fn test_nested_class() {
    let error = compile_error("fn f() { class X { constructor() { } } return 1; } return f();");
    assert_eq!(
        error.message(),
        "Class definitions cannot be nested within other statements"
    );
}

#[test]
fn test_function_inside_function() {
    let error = compile_error("fn f() { fn g() { return 1; } return 1; } return f();");
    assert_eq!(
        error.message(),
        "Instance methods can only be defined within a class"
    );
}

#[test]
fn test_constructor_not_first() {
    let source = "class Box { fn get() { return 1; } constructor() { } } return 1;";
    let error = compile_error(source);
    assert!(error.message().starts_with("Expected a constructor as the first statement in class Box"));
}

#[test]
fn test_second_constructor() {
    let source = "class Box { constructor() { } constructor() { } } return 1;";
    let error = compile_error(source);
    assert_eq!(
        error.message(),
        "Class constructors can only be defined at the top of a class"
    );
}

#[test]
fn test_return_in_class_body() {
    let source = "class Box { constructor() { } return 1; } return 1;";
    let error = compile_error(source);
    assert_eq!(error.message(), "Unexpected return statement in class body");
}

#[test]
fn test_field_access_in_static_function() {
    let error = compile_error("fn f() { return this.v; } return f();");
    assert_eq!(error.message(), "Field access is not allowed at the static scope");
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_error_spans_point_at_statement() {
    let source = "let a = 1;\nconstructor() { }\nreturn a;";
    let error = compile_error(source);
    assert_eq!(error.span().line, 2);
    assert_eq!(error.span().col, 1);

    let rendered = error.display_with_source(source);
    assert!(rendered.starts_with("error at 2:1: Class constructors must be defined within a class"));
    assert!(rendered.contains("constructor() { }"));
}

#[test]
fn test_parse_errors_pass_through() {
    match sheetscript::compile("return 1") {
        Err(SheetScriptError::Parse(errors)) => {
            assert_eq!(errors.first().map(|e| e.kind), Some(ParseErrorKind::UnexpectedEof));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_nothing_emitted_on_failure() {
    // A late error discards everything compiled before it
    let source = r#"
        fn ok(x) { return x; }
        class Fine { constructor() { } fn get() { return 1; } }
        let A1 = 2;
        return ok(1);
    "#;
    assert!(sheetscript::compile(source).is_err());
}

#[test]
fn test_this_as_parameter() {
    let source = "class Box { constructor() { } fn set(this) { return this; } } return 1;";
    match sheetscript::compile(source) {
        Err(SheetScriptError::Parse(errors)) => {
            assert_eq!(
                errors.first().map(|e| e.kind),
                Some(ParseErrorKind::ExpectedIdentifier)
            );
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}
