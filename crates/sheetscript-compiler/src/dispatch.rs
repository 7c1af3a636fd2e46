//! Message dispatch for class instances.
//!
//! An instance is `LAMBDA(_message, handler)` where the handler is a chain
//! of `IF(_message_match("m")(_message), answer, rest)` arms ending in the
//! error raiser. Arms are folded in definition order, each wrapping the
//! ones before it, so the last definition of a name is tested first.
//! Message names compare case-insensitively at run time, so `get` and `GET`
//! are the same message.

use rustc_hash::FxHashMap;
use sheetscript_core::Span;
use tracing::warn;

use crate::emit::Fragment;

/// Fallthrough for a message no arm answers.
pub const UNHANDLED_MESSAGE: &str = "_raise_error_internal()";

/// One lowered instance method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArm<'a> {
    pub name: &'a str,
    pub span: Span,
    pub fragment: Fragment,
}

/// Method arms of one class, in definition order.
#[derive(Debug)]
pub struct DispatchChain<'a> {
    class: &'a str,
    arms: Vec<MethodArm<'a>>,
    /// Lowercased method name to the span of its first definition.
    defined: FxHashMap<String, Span>,
}

impl<'a> DispatchChain<'a> {
    pub fn new(class: &'a str) -> Self {
        Self {
            class,
            arms: Vec::new(),
            defined: FxHashMap::default(),
        }
    }

    pub fn push(&mut self, arm: MethodArm<'a>) {
        if let Some(first) = self.defined.insert(arm.name.to_ascii_lowercase(), arm.span) {
            warn!(
                class = self.class,
                method = arm.name,
                first = %first,
                redefined = %arm.span,
                "method defined twice, the later definition answers"
            );
        }
        self.arms.push(arm);
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn defines(&self, name: &str) -> bool {
        self.defined.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct messages answered.
    pub fn message_count(&self) -> usize {
        self.defined.len()
    }

    /// Fold the arms into the handler body.
    pub fn finish(self) -> String {
        self.arms
            .iter()
            .fold(UNHANDLED_MESSAGE.to_string(), |handler, arm| {
                arm.fragment.wrap(&handler)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arm(name: &'static str, answer: &str) -> MethodArm<'static> {
        MethodArm {
            name,
            span: Span::default(),
            fragment: Fragment::new(format!("IF(m({}), {}, ", name, answer), ")"),
        }
    }

    #[test]
    fn empty_chain_raises() {
        assert_eq!(DispatchChain::new("Box").finish(), "_raise_error_internal()");
    }

    #[test]
    fn later_arms_are_outermost() {
        let mut chain = DispatchChain::new("Box");
        chain.push(arm("get", "1"));
        chain.push(arm("set", "2"));
        assert_eq!(chain.len(), 2);
        assert!(chain.defines("get"));
        assert_eq!(
            chain.finish(),
            "IF(m(set), 2, IF(m(get), 1, _raise_error_internal()))"
        );
    }

    #[test]
    fn redefinition_shadows() {
        let mut chain = DispatchChain::new("Box");
        chain.push(arm("get", "1"));
        chain.push(arm("get", "2"));
        let handler = chain.finish();
        assert!(handler.starts_with("IF(m(get), 2, "));
    }

    #[test]
    fn redefinition_ignores_case() {
        let mut chain = DispatchChain::new("Box");
        chain.push(arm("get", "1"));
        chain.push(arm("GET", "2"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.message_count(), 1);
        assert!(chain.defines("Get"));
        assert!(chain.finish().starts_with("IF(m(GET), 2, IF(m(get), 1, "));
    }
}
