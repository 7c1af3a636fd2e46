//! Class definitions.
//!
//! A class lowers to three bindings:
//!
//! ```text
//! class_C, LAMBDA(_constructor, LAMBDA(this, <constructor wrapping LAMBDA(_message, handler)>)),
//! bootstrap_new_C, LAMBDA(_f, LAMBDA(params, class_C(<constructor>)(<this>)(args))),
//! new_C, (bootstrap_new_C)(bootstrap_new_C),
//! ```
//!
//! `this` is a lazy reference to the instance being built: a handler that
//! rebuilds the same instance on demand. `_constructor` does the same for
//! fresh arguments, which is how a class instantiates itself before
//! `new_C` is bound.

use sheetscript_core::CompilationError;
use sheetscript_parser::ast::{ClassDef, Stmt};
use tracing::debug;

use super::Result;
use super::constructor::compile_constructor;
use super::function_def::compile_method;
use crate::dispatch::DispatchChain;
use crate::emit::{binding, fixed_point};
use crate::names::validate_ident;

/// Lower a class to its three bindings.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_class(class: &ClassDef<'_>) -> Result<Vec<String>> {
    let name = validate_ident(&class.name, false)?;

    let (ctor, members) = match class.body.stmts.split_first() {
        Some((Stmt::Constructor(ctor), members)) => (*ctor, members),
        Some((other, _)) => {
            return Err(CompilationError::misplaced(
                format!(
                    "Expected a constructor as the first statement in class {}, found {}",
                    name,
                    other.kind_name()
                ),
                other.span(),
            ));
        }
        None => {
            return Err(CompilationError::misplaced(
                format!("Class {} must begin with a constructor", name),
                class.span,
            ));
        }
    };

    let ctor = compile_constructor(ctor, name)?;

    let mut chain = DispatchChain::new(name);
    for stmt in members {
        match stmt {
            Stmt::Function(func) => chain.push(compile_method(func, name)?),
            Stmt::Constructor(other) => {
                return Err(CompilationError::misplaced(
                    "Class constructors can only be defined at the top of a class",
                    other.span,
                ));
            }
            Stmt::Class(nested) => {
                return Err(CompilationError::misplaced(
                    "Class definitions cannot be nested within other statements",
                    nested.span,
                ));
            }
            Stmt::FieldAssign(assign) => {
                return Err(CompilationError::misplaced(
                    "Instance variables can only be assigned within a class constructor",
                    assign.span,
                ));
            }
            Stmt::Assign(assign) => {
                return Err(CompilationError::misplaced(
                    "Class bodies may only contain a constructor followed by instance methods",
                    assign.span,
                ));
            }
            Stmt::Return(ret) => {
                return Err(CompilationError::unexpected_return(
                    "Unexpected return statement in class body",
                    ret.span,
                ));
            }
        }
    }
    debug!(
        class = name,
        params = ctor.params.len(),
        methods = chain.len(),
        messages = chain.message_count(),
        "compiled class"
    );

    let instance = ctor
        .fields
        .wrap(&format!("LAMBDA(_message, {})", chain.finish()));

    let class_binding = format!("class_{}", name);
    let bootstrap = format!("bootstrap_new_{}", name);
    let leading = ctor.params.leading();
    let args = ctor.params.joined();
    let rebuild = format!("LAMBDA(_message, _f(_f)({})(_message))", args);

    Ok(vec![
        binding(
            &class_binding,
            &format!("LAMBDA(_constructor, LAMBDA(this, {}))", instance),
        ),
        binding(
            &bootstrap,
            &format!(
                "LAMBDA(_f, LAMBDA({leading}{class_binding}(LAMBDA({leading}{rebuild}))({rebuild})({args})))"
            ),
        ),
        binding(&format!("new_{}", name), &fixed_point(&bootstrap)),
    ])
}
