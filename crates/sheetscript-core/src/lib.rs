//! Core types shared by the SheetScript parser, compiler and tools.
//!
//! - [`Span`] - source locations
//! - [`error`] - the error hierarchy for every phase
//! - [`message`] - the builtin message set of boxed values

pub mod error;
pub mod message;
pub mod span;

pub use error::{
    CompilationError, LexError, NameErrorKind, ParseError, ParseErrorKind, ParseErrors,
    ReturnContext, SheetScriptError,
};
pub use message::{BuiltinMessage, Lowering};
pub use span::Span;
