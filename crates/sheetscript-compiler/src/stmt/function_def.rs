//! Static functions and instance methods.

use sheetscript_core::ReturnContext;
use sheetscript_parser::ast::FunctionDef;
use tracing::debug;

use super::{Result, StmtCompiler, compile_params};
use crate::dispatch::MethodArm;
use crate::emit::{Fragment, binding, fixed_point, quote_string};
use crate::names::validate_ident;
use crate::scope::Scope;

/// A top-level `fn`. Emits the bootstrap and its fixed point:
///
/// ```text
/// bootstrap_f, LAMBDA(_f, LAMBDA(params, LET(body))),
/// static_function_f, (bootstrap_f)(bootstrap_f),
/// ```
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_static_function(func: &FunctionDef<'_>) -> Result<Vec<String>> {
    let name = validate_ident(&func.name, false)?;
    debug!(function = name, params = func.params.len(), "compiling static function");

    let scope = Scope::static_function(name);
    let params = compile_params(func.params)?;
    let body = StmtCompiler::new(scope).compile_body(
        func.body.stmts,
        ReturnContext::Function,
        func.span,
    )?;

    let bootstrap = format!("bootstrap_{}", name);
    Ok(vec![
        binding(
            &bootstrap,
            &format!("LAMBDA(_f, LAMBDA({}{}))", params.leading(), body.to_let()),
        ),
        binding(&format!("static_function_{}", name), &fixed_point(&bootstrap)),
    ])
}

/// A `fn` inside a class. Becomes one dispatch arm answering the method
/// name with the body, or with a lambda over the parameters.
pub fn compile_method<'ast>(func: &FunctionDef<'ast>, class: &str) -> Result<MethodArm<'ast>> {
    let name = validate_ident(&func.name, false)?;
    debug!(class, method = name, params = func.params.len(), "compiling method");

    let scope = Scope::class(class);
    let params = compile_params(func.params)?;
    let body = StmtCompiler::new(scope)
        .compile_body(func.body.stmts, ReturnContext::Function, func.span)?
        .to_let();

    let answer = if params.is_empty() {
        body
    } else {
        format!("LAMBDA({}, {})", params.joined(), body)
    };

    Ok(MethodArm {
        name,
        span: func.name.span,
        fragment: Fragment::new(
            format!("IF(_message_match({})(_message), {}, ", quote_string(name), answer),
            ")",
        ),
    })
}
