//! SheetScript parser crate.
//!
//! Provides the lexer, the AST definitions and a recursive-descent parser
//! producing arena-allocated trees.
//!
//! # Example
//!
//! ```
//! use sheetscript_parser::Parser;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let script = Parser::parse("let x = 1; return x.plus(2);", &arena).unwrap();
//! assert_eq!(script.statements().len(), 2);
//! ```

pub mod ast;
pub mod lexer;

pub use ast::{Parser, Script};
pub use lexer::{Lexer, Token, TokenKind};
pub use sheetscript_core::Span;
