//! Formula text emission.
//!
//! Lowering produces formula text bottom-up. The helpers here own the
//! punctuation so every construct is spelled the same way: parameter lists,
//! call suffixes, LET bindings and the wrap-around fragments used for
//! constructors and method dispatch.

mod prelude;

pub use prelude::{emit_prelude, make_builtin_bootstrap};

/// Runtime function that boxes a literal.
pub const MAKE_BUILTIN: &str = "make_builtin";
/// Message every value answers with its primitive payload.
pub const RAW_VALUE_MESSAGE: &str = "_rawVal";

/// Text emitted before and after a nested piece of code.
///
/// Constructors wrap the message handler in their field bindings and each
/// method arm wraps the arms defined before it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub opening: String,
    pub closing: String,
}

impl Fragment {
    pub fn new(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: closing.into(),
        }
    }

    pub fn wrap(&self, inner: &str) -> String {
        let mut out = String::with_capacity(self.opening.len() + inner.len() + self.closing.len());
        out.push_str(&self.opening);
        out.push_str(inner);
        out.push_str(&self.closing);
        out
    }
}

/// Validated parameter names of a function, method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamList<'a> {
    names: Vec<&'a str>,
}

impl<'a> ParamList<'a> {
    pub fn new(names: Vec<&'a str>) -> Self {
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `a, b`
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }

    /// `a, b, ` ready to precede a LAMBDA body, or nothing.
    pub fn leading(&self) -> String {
        let mut out = String::new();
        for name in &self.names {
            out.push_str(name);
            out.push_str(", ");
        }
        out
    }
}

/// A formula string literal. Embedded quotes are doubled.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

pub fn join_args(args: &[String]) -> String {
    args.join(", ")
}

/// `callee(args)`
pub fn call(callee: &str, args: &[String]) -> String {
    format!("{}({})", callee, join_args(args))
}

/// `callee(args)` with the argument list omitted when empty.
pub fn call_if_args(callee: String, args: &[String]) -> String {
    if args.is_empty() {
        callee
    } else {
        call(&callee, args)
    }
}

/// One LET binding with its trailing separator.
pub fn binding(name: &str, value: &str) -> String {
    format!("{}, {},", name, value)
}

/// `LET(bindings result)`
pub fn let_block(bindings: &[String], result: &str) -> String {
    let mut out = String::from("LET(");
    for binding in bindings {
        out.push_str(binding);
        out.push(' ');
    }
    out.push_str(result);
    out.push(')');
    out
}

/// Self-application that ties a recursive binding: `(f)(f)`.
pub fn fixed_point(name: &str) -> String {
    format!("({name})({name})")
}

/// Send a message to a value: `recv("name")`.
pub fn send(receiver: &str, message: &str) -> String {
    format!("{}({})", receiver, quote_string(message))
}

/// Unwrap a value to its primitive payload.
pub fn unbox(value: &str) -> String {
    send(value, RAW_VALUE_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_wraps() {
        let fragment = Fragment::new("IF(c, ", ")");
        assert_eq!(fragment.wrap("x"), "IF(c, x)");
    }

    #[test]
    fn param_lists() {
        let params = ParamList::new(vec!["a", "b"]);
        assert_eq!(params.joined(), "a, b");
        assert_eq!(params.leading(), "a, b, ");
        assert_eq!(params.len(), 2);

        let empty = ParamList::default();
        assert!(empty.is_empty());
        assert_eq!(empty.joined(), "");
        assert_eq!(empty.leading(), "");
    }

    #[test]
    fn strings_double_quotes() {
        assert_eq!(quote_string("hi"), "\"hi\"");
        assert_eq!(quote_string("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_string(""), "\"\"");
    }

    #[test]
    fn calls_and_lets() {
        let args = vec!["x".to_string(), "y".to_string()];
        assert_eq!(call("f", &args), "f(x, y)");
        assert_eq!(call("f", &[]), "f()");
        assert_eq!(call_if_args("r(\"get\")".into(), &[]), "r(\"get\")");
        assert_eq!(call_if_args("r(\"add\")".into(), &args), "r(\"add\")(x, y)");
        assert_eq!(
            let_block(&[binding("a", "1"), binding("b", "a")], "b"),
            "LET(a, 1, b, a, b)"
        );
        assert_eq!(let_block(&[], "x"), "LET(x)");
    }

    #[test]
    fn sends() {
        assert_eq!(unbox("x"), "x(\"_rawVal\")");
        assert_eq!(fixed_point("bootstrap_f"), "(bootstrap_f)(bootstrap_f)");
    }
}
