//! Lexical context for lowering.
//!
//! The same expression lowers differently depending on where it appears:
//! `this` and field reads need an instance, a call to the enclosing static
//! function becomes a self-application, and `new` of the enclosing class
//! goes through the class's own constructor binding.

/// Where the code being lowered sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Top level or a static function body.
    Static,
    /// A class body or an instance method body.
    Class,
    /// A constructor body.
    Constructor,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Static => "static",
            ScopeKind::Class => "class",
            ScopeKind::Constructor => "constructor",
        }
    }
}

/// Scope kind plus the name of the enclosing static function or class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    pub kind: ScopeKind,
    pub enclosing: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub fn top_level() -> Self {
        Self {
            kind: ScopeKind::Static,
            enclosing: None,
        }
    }

    pub fn static_function(name: &'a str) -> Self {
        Self {
            kind: ScopeKind::Static,
            enclosing: Some(name),
        }
    }

    /// Class body and instance method bodies.
    pub fn class(name: &'a str) -> Self {
        Self {
            kind: ScopeKind::Class,
            enclosing: Some(name),
        }
    }

    pub fn constructor(class: &'a str) -> Self {
        Self {
            kind: ScopeKind::Constructor,
            enclosing: Some(class),
        }
    }

    pub fn is_static(&self) -> bool {
        self.kind == ScopeKind::Static
    }

    /// `this` and field reads are legal.
    pub fn allows_this(&self) -> bool {
        !self.is_static()
    }

    /// A call to `name` from inside the static function of that name.
    pub fn is_self_call(&self, name: &str) -> bool {
        self.is_static() && self.enclosing == Some(name)
    }

    /// `new class` from inside that class.
    pub fn is_self_instantiation(&self, class: &str) -> bool {
        !self.is_static() && self.enclosing == Some(class)
    }
}
