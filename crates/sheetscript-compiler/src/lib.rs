//! SheetScript compiler
//!
//! Lowers a parsed SheetScript program to a single spreadsheet formula
//! built from `LET`, `LAMBDA` and `IF`.
//!
//! ## Model
//!
//! Every run-time value is a message handler: a one-argument lambda taking a
//! message name. Literals are boxed by the prelude's `make_builtin`, class
//! instances dispatch on their method names, and recursion is expressed by
//! self-application because a LET binding cannot refer to itself.
//!
//! ## Modules
//!
//! - [`names`]: identifier validation
//! - [`scope`]: lexical context for lowering
//! - [`emit`]: formula text helpers and the prelude
//! - [`expr`]: expression lowering
//! - [`stmt`]: statement, function and class lowering
//! - [`dispatch`]: method dispatch chains
//! - [`program`]: whole-program assembly
//!
//! # Example
//!
//! ```ignore
//! let arena = bumpalo::Bump::new();
//! let script = sheetscript_parser::Parser::parse("return 1.plus(2);", &arena)?;
//! let program = Compiler::compile(&script)?;
//! println!("{}", program.formula);
//! ```

pub mod dispatch;
pub mod emit;
pub mod expr;
pub mod names;
pub mod program;
pub mod scope;
pub mod stmt;

pub use dispatch::{DispatchChain, MethodArm};
pub use expr::ExprCompiler;
pub use names::{RESERVED_NAMES, validate_name};
pub use program::CompiledProgram;
pub use scope::{Scope, ScopeKind};
pub use stmt::StmtCompiler;

// Re-export CompilationError from core for convenience
pub use sheetscript_core::CompilationError;

use sheetscript_parser::ast::Script;

/// Entry point for lowering a parsed program.
pub struct Compiler;

impl Compiler {
    /// Compile `script` to a formula.
    pub fn compile(script: &Script<'_>) -> Result<CompiledProgram, CompilationError> {
        program::compile_program(script)
    }
}
