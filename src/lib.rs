//! SheetScript
//!
//! Compiles a small object-oriented language into one spreadsheet formula.
//! Classes, methods, recursion and message sends are all encoded with
//! `LET`, `LAMBDA` and `IF`, so the whole program runs inside a single cell.
//!
//! # Example
//!
//! ```
//! let program = sheetscript::compile("fn id(x) { return x; } return id(5);").unwrap();
//! assert!(program.formula.starts_with("=LET("));
//! ```
//!
//! Evaluation is left to an engine behind the [`Evaluator`] trait.

use bumpalo::Bump;
use tracing::{enabled, trace, Level};

pub use sheetscript_compiler::{CompilationError, CompiledProgram, Compiler};
pub use sheetscript_core::{
    NameErrorKind, ParseError, ParseErrorKind, ParseErrors, ReturnContext, SheetScriptError, Span,
};
pub use sheetscript_parser::{Parser, Script};

/// A formula engine that can run compiled programs.
pub trait Evaluator {
    /// Evaluate `formula` and return its value as text, or the engine's
    /// error string.
    fn evaluate(&self, formula: &str) -> Result<String, String>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<String, String>,
{
    fn evaluate(&self, formula: &str) -> Result<String, String> {
        self(formula)
    }
}

/// Parse and compile one program.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile(source: &str) -> Result<CompiledProgram, SheetScriptError> {
    let arena = Bump::new();
    let script = Parser::parse(source, &arena)?;
    if enabled!(Level::TRACE) {
        trace!(tree = %sheetscript_parser::ast::dump_script(&script), "parsed program");
    }
    Ok(Compiler::compile(&script)?)
}

/// Compile several source units as one program, joined in order.
///
/// Library units come first so a later submission can use their classes
/// and functions.
pub fn compile_sources(units: &[&str]) -> Result<CompiledProgram, SheetScriptError> {
    compile(&units.join("\n"))
}

/// Compile `source` and run it on `evaluator`.
pub fn compile_and_evaluate<E>(source: &str, evaluator: &E) -> Result<String, SheetScriptError>
where
    E: Evaluator + ?Sized,
{
    let program = compile(source)?;
    evaluator
        .evaluate(&program.formula)
        .map_err(SheetScriptError::Evaluation)
}
