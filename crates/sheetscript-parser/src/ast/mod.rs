//! Abstract Syntax Tree (AST) for SheetScript.
//!
//! # Example
//!
//! ```
//! use sheetscript_parser::Parser;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let source = r#"
//!     fn id(x) { return x; }
//!     return id(5);
//! "#;
//!
//! match Parser::parse(source, &arena) {
//!     Ok(script) => println!("parsed {} statements", script.statements().len()),
//!     Err(errors) => eprintln!("parse errors: {}", errors),
//! }
//! ```

pub mod node;

mod parser;

pub mod expr;
mod expr_parser;

pub mod stmt;
mod stmt_parser;

mod dump;

pub use sheetscript_core::{ParseError, ParseErrorKind, ParseErrors};

pub use dump::dump_script;
pub use expr::*;
pub use node::*;
pub use parser::Parser;
pub use stmt::*;

use sheetscript_core::Span;

/// A parsed SheetScript program.
///
/// All nodes live in the arena passed to [`Parser::parse`].
#[derive(Debug, Clone, Copy)]
pub struct Script<'ast> {
    statements: &'ast [Stmt<'ast>],
    span: Span,
}

impl<'ast> Script<'ast> {
    pub(crate) fn new(statements: &'ast [Stmt<'ast>], span: Span) -> Self {
        Self { statements, span }
    }

    /// Top-level statements in source order.
    pub fn statements(&self) -> &'ast [Stmt<'ast>] {
        self.statements
    }

    pub fn span(&self) -> Span {
        self.span
    }
}
