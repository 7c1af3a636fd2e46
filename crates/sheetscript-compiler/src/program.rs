//! Whole-program assembly.
//!
//! The emitted formula is one LET: the prelude, then one group of bindings
//! per top-level statement in source order, then the program's return
//! value unboxed to a primitive.

use sheetscript_core::{CompilationError, ReturnContext};
use sheetscript_parser::ast::{Script, Stmt};
use tracing::{debug, trace};

use crate::emit::{emit_prelude, unbox};
use crate::scope::Scope;
use crate::stmt::class_def::compile_class;
use crate::stmt::function_def::compile_static_function;
use crate::stmt::{Lowered, StmtCompiler};

type Result<T> = std::result::Result<T, CompilationError>;

const INDENT: &str = "  ";

/// The result of compiling a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    /// Formula text, starting with `=`.
    pub formula: String,
    /// Classes defined before the return, in source order.
    pub classes: Vec<String>,
    /// Static functions defined before the return, in source order.
    pub functions: Vec<String>,
}

impl std::fmt::Display for CompiledProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formula)
    }
}

/// Lower top-level statements until the first `return`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_program(script: &Script<'_>) -> Result<CompiledProgram> {
    let top_level = StmtCompiler::new(Scope::top_level());
    let mut bindings = Vec::new();
    let mut classes = Vec::new();
    let mut functions = Vec::new();
    let mut result = None;

    let statements = script.statements();
    for (index, stmt) in statements.iter().enumerate() {
        trace!(kind = stmt.kind_name(), at = %stmt.span(), "lowering top-level statement");
        match stmt {
            Stmt::Class(class) => {
                bindings.extend(compile_class(class)?);
                classes.push(class.name.name.to_string());
            }
            Stmt::Function(func) => {
                bindings.extend(compile_static_function(func)?);
                functions.push(func.name.name.to_string());
            }
            Stmt::Constructor(ctor) => {
                return Err(CompilationError::misplaced(
                    "Class constructors must be defined within a class",
                    ctor.span,
                ));
            }
            Stmt::FieldAssign(assign) => {
                return Err(CompilationError::misplaced(
                    "Instance variables cannot be assigned at the outer (static) scope",
                    assign.span,
                ));
            }
            Stmt::Assign(_) | Stmt::Return(_) => match top_level.compile(stmt)? {
                Lowered::Binding(binding) => bindings.push(binding),
                Lowered::Return(value) => {
                    let skipped = statements.len() - index - 1;
                    if skipped > 0 {
                        debug!(skipped, "statements after the program's return are not compiled");
                    }
                    result = Some(value);
                    break;
                }
            },
        }
    }

    let Some(result) = result else {
        return Err(CompilationError::MissingReturn {
            context: ReturnContext::Program,
            span: script.span(),
        });
    };

    let formula = render(&bindings, &result);
    debug!(
        classes = classes.len(),
        functions = functions.len(),
        bytes = formula.len(),
        "compiled program"
    );

    Ok(CompiledProgram {
        formula,
        classes,
        functions,
    })
}

fn render(bindings: &[String], result: &str) -> String {
    let mut out = String::from("=LET(\n");
    for line in emit_prelude().iter().chain(bindings) {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(INDENT);
    out.push_str(&unbox(result));
    out.push_str("\n)");
    out
}
