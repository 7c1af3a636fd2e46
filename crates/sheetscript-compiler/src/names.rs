//! Identifier validation.
//!
//! Every user-chosen name ends up as a LET binding or LAMBDA parameter in
//! the emitted formula, so it must not look like a cell reference and must
//! not collide with the runtime bindings the compiler emits itself.

use std::sync::LazyLock;

use regex::Regex;
use sheetscript_core::{CompilationError, NameErrorKind, Span};
use sheetscript_parser::ast::Ident;

/// Keywords plus the runtime names the emitted formula binds.
pub const RESERVED_NAMES: &[&str] = &[
    "class",
    "fn",
    "constructor",
    "let",
    "return",
    "new",
    "this",
    "true",
    "false",
    "_f",
    "_message",
    "_constructor",
    "_message_match",
    "_raise_error_internal",
    "make_builtin",
    "make_builtin_bootstrap",
];

/// Letters followed by digits: `A1`, `ab12`, `XFD1048576`.
static CELL_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+[0-9]+$").expect("cell reference pattern is valid"));

pub fn is_cell_reference(name: &str) -> bool {
    CELL_REFERENCE.is_match(name)
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Check `name` and hand it back for emission.
///
/// The cell-reference check runs first, then `this` (accepted only when
/// `allow_this` is set), then the reserved list.
pub fn validate_name(name: &str, allow_this: bool, span: Span) -> Result<&str, CompilationError> {
    if is_cell_reference(name) {
        return Err(CompilationError::invalid_name(
            name,
            NameErrorKind::CellReference,
            span,
        ));
    }
    if name == "this" {
        if allow_this {
            return Ok(name);
        }
        return Err(CompilationError::invalid_name(
            name,
            NameErrorKind::ThisOutsideClass,
            span,
        ));
    }
    if is_reserved(name) {
        return Err(CompilationError::invalid_name(
            name,
            NameErrorKind::Reserved,
            span,
        ));
    }
    Ok(name)
}

/// [`validate_name`] for an identifier node.
pub fn validate_ident<'ast>(
    ident: &Ident<'ast>,
    allow_this: bool,
) -> Result<&'ast str, CompilationError> {
    validate_name(ident.name, allow_this, ident.span)?;
    Ok(ident.name)
}
