//! The fixed runtime bound ahead of every program.
//!
//! Four bindings: an error raiser, the message comparator used by every
//! dispatch arm, and the boxed-value constructor with its bootstrap.

use sheetscript_core::{BuiltinMessage, Lowering};

use super::{MAKE_BUILTIN, binding, fixed_point, quote_string};

const RAISE_ERROR: &str = "_raise_error_internal";
const MESSAGE_MATCH: &str = "_message_match";
const BOOTSTRAP: &str = "make_builtin_bootstrap";

/// Prelude bindings, in emission order.
pub fn emit_prelude() -> Vec<String> {
    vec![
        // One-parameter lambda called with two arguments evaluates to an error
        binding(RAISE_ERROR, "LAMBDA(LAMBDA(a, a)(\"illegal\", \"syntax\"))"),
        binding(
            MESSAGE_MATCH,
            "LAMBDA(expected, LAMBDA(actual, IFERROR((actual = expected), FALSE)))",
        ),
        binding(BOOTSTRAP, &make_builtin_bootstrap()),
        binding(MAKE_BUILTIN, &fixed_point(BOOTSTRAP)),
    ]
}

/// `LAMBDA(f, LAMBDA(raw, LAMBDA(_message, <arms>)))` with one arm per
/// builtin message and the error raiser as the fallthrough.
pub fn make_builtin_bootstrap() -> String {
    let mut handler = format!("{}()", RAISE_ERROR);
    for message in BuiltinMessage::ALL.iter().rev() {
        handler = format!(
            "IF({}({})(_message), {}, {})",
            MESSAGE_MATCH,
            quote_string(message.name()),
            builtin_answer(*message),
            handler
        );
    }
    format!("LAMBDA(f, LAMBDA(raw, LAMBDA(_message, {})))", handler)
}

/// What a boxed value answers to `message`. Results are re-boxed through
/// `f(f)` so they answer messages too.
fn builtin_answer(message: BuiltinMessage) -> String {
    match message.lowering() {
        Lowering::Unbox => "raw".to_string(),
        Lowering::Infix(op) => format!("LAMBDA(rhs, f(f)(raw {} rhs(\"_rawVal\")))", op),
        Lowering::Binary(func) => format!("LAMBDA(rhs, f(f)({}(raw, rhs(\"_rawVal\"))))", func),
        Lowering::Unary(func) => format!("f(f)({}(raw))", func),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_binds_runtime_in_order() {
        let prelude = emit_prelude();
        assert_eq!(prelude.len(), 4);
        assert!(prelude[0].starts_with("_raise_error_internal, LAMBDA("));
        assert!(prelude[1].starts_with("_message_match, "));
        assert!(prelude[2].starts_with("make_builtin_bootstrap, LAMBDA(f, "));
        assert_eq!(
            prelude[3],
            "make_builtin, (make_builtin_bootstrap)(make_builtin_bootstrap),"
        );
    }

    #[test]
    fn every_builtin_has_an_arm() {
        let bootstrap = make_builtin_bootstrap();
        for message in BuiltinMessage::ALL {
            let arm = format!("_message_match(\"{}\")(_message)", message.name());
            assert!(bootstrap.contains(&arm), "missing arm for {}", message);
        }
        assert!(bootstrap.contains("_raise_error_internal()"));
    }

    #[test]
    fn answers_by_lowering() {
        assert_eq!(builtin_answer(BuiltinMessage::RawVal), "raw");
        assert_eq!(
            builtin_answer(BuiltinMessage::GreaterThanOrEquals),
            "LAMBDA(rhs, f(f)(raw >= rhs(\"_rawVal\")))"
        );
        assert_eq!(
            builtin_answer(BuiltinMessage::Concat),
            "LAMBDA(rhs, f(f)(CONCAT(raw, rhs(\"_rawVal\"))))"
        );
        assert_eq!(builtin_answer(BuiltinMessage::Factorial), "f(f)(FACT(raw))");
    }

    #[test]
    fn parentheses_balance() {
        let bootstrap = make_builtin_bootstrap();
        let open = bootstrap.matches('(').count();
        let close = bootstrap.matches(')').count();
        assert_eq!(open, close);
    }
}
