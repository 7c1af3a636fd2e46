//! Error types for every SheetScript phase.
//!
//! ```text
//! SheetScriptError (top-level wrapper)
//! ├── ParseErrors       - lexer and syntax errors (with ParseErrorKind)
//! ├── CompilationError  - naming, placement and return-shape errors
//! └── Evaluation        - error string reported by the formula engine
//! ```
//!
//! Lexer errors are folded into [`ParseErrors`] by the parser, so callers
//! only see two compile-time domains: "the text is malformed" and "the
//! program is well formed but illegal".

use std::fmt;

use thiserror::Error;

use crate::Span;

// ============================================================================
// Lexer Errors
// ============================================================================

/// Errors that occur while splitting source text into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// Character that cannot start any token.
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar { ch: char, span: Span },

    /// String literal missing its closing quote on the same line.
    #[error("unterminated string at {span}")]
    UnterminatedString { span: Span },

    /// Block comment missing its closing `*/`.
    #[error("unterminated comment at {span}")]
    UnterminatedComment { span: Span },

    /// Malformed numeric literal.
    #[error("invalid number at {span}: {detail}")]
    InvalidNumber { span: Span, detail: String },
}

impl LexError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } => *span,
            LexError::UnterminatedString { span } => *span,
            LexError::UnterminatedComment { span } => *span,
            LexError::InvalidNumber { span, .. } => *span,
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// The kind of syntax error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Expected a specific token but found something else.
    ExpectedToken,
    /// Token that cannot appear here.
    UnexpectedToken,
    /// Input ended in the middle of a construct.
    UnexpectedEof,
    /// Expected the start of an expression.
    ExpectedExpression,
    /// Expected the start of a statement.
    ExpectedStatement,
    /// Expected an identifier.
    ExpectedIdentifier,
    /// Expected a `{ ... }` block.
    ExpectedBlock,
    /// Expected a parenthesized parameter list.
    ExpectedParameters,
    /// Unknown `\x` escape in a string literal.
    InvalidEscapeSequence,
    /// The lexer could not produce a token.
    InvalidToken,
    /// Tokens left over after a complete expression or statement.
    TrailingInput,
    /// A program must hold at least one statement.
    EmptyProgram,
}

impl ParseErrorKind {
    /// Human readable description of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::ExpectedToken => "expected token",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnexpectedEof => "unexpected end of file",
            ParseErrorKind::ExpectedExpression => "expected expression",
            ParseErrorKind::ExpectedStatement => "expected statement",
            ParseErrorKind::ExpectedIdentifier => "expected identifier",
            ParseErrorKind::ExpectedBlock => "expected block",
            ParseErrorKind::ExpectedParameters => "expected parameter list",
            ParseErrorKind::InvalidEscapeSequence => "invalid escape sequence",
            ParseErrorKind::InvalidToken => "invalid token",
            ParseErrorKind::TrailingInput => "trailing input",
            ParseErrorKind::EmptyProgram => "empty program",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax error with location and message.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// "expected X, found Y".
    pub fn expected_token(span: Span, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken,
            span,
            format!("expected {}, found {}", expected, found),
        )
    }

    pub fn unexpected_eof(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof, span, "unexpected end of input")
    }

    pub fn expected_identifier(span: Span, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedIdentifier,
            span,
            format!("expected identifier, found {}", found),
        )
    }

    pub fn expected_expression(span: Span, found: &str) -> Self {
        Self::new(
            ParseErrorKind::ExpectedExpression,
            span,
            format!("expected expression, found {}", found),
        )
    }

    /// Render the error with the offending source line and a caret marker.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = format!("error at {}: {}\n", self.span, self.kind);
        if !self.message.is_empty() {
            output.push_str(&format!("  {}\n", self.message));
        }
        output.push_str(&source_excerpt(source, self.span));
        output
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        let kind = match error {
            LexError::UnterminatedString { .. } | LexError::UnterminatedComment { .. } => {
                ParseErrorKind::UnexpectedEof
            }
            _ => ParseErrorKind::InvalidToken,
        };
        ParseError::new(kind, error.span(), error.to_string())
    }
}

/// The errors collected while parsing one source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter()
    }

    /// The earliest error, if any.
    pub fn first(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    pub fn into_vec(self) -> Vec<ParseError> {
        self.errors
    }

    /// Render every error against `source`.
    pub fn display_with_source(&self, source: &str) -> String {
        self.errors
            .iter()
            .map(|error| error.display_with_source(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<LexError> for ParseErrors {
    fn from(error: LexError) -> Self {
        ParseError::from(error).into()
    }
}

impl FromIterator<ParseError> for ParseErrors {
    fn from_iter<T: IntoIterator<Item = ParseError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no errors"),
            [single] => write!(f, "{}", single),
            errors => {
                writeln!(f, "{} errors:", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}: {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseErrors {}

// ============================================================================
// Compilation Errors
// ============================================================================

/// Why an identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameErrorKind {
    /// Letters followed by digits, which the formula engine reads as a cell.
    CellReference,
    /// `this` used outside class or constructor scope.
    ThisOutsideClass,
    /// A keyword or a compiler-internal runtime binding.
    Reserved,
}

impl NameErrorKind {
    /// Full diagnostic for `name` rejected with this kind.
    pub fn describe(&self, name: &str) -> String {
        match self {
            NameErrorKind::CellReference => format!(
                "Invalid symbol name matches cell ID, try adding an underscore: {}",
                name
            ),
            NameErrorKind::ThisOutsideClass => {
                "The 'this' keyword can only be used in class definitions".to_string()
            }
            NameErrorKind::Reserved => format!("Variable name matches reserved keyword: {}", name),
        }
    }
}

/// The kind of body that reached its end without a `return`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnContext {
    Program,
    Function,
}

impl fmt::Display for ReturnContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnContext::Program => f.write_str("Program"),
            ReturnContext::Function => f.write_str("Function"),
        }
    }
}

/// Errors raised while lowering a well-formed program to a formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilationError {
    /// Identifier rejected by the name validator.
    #[error("at {span}: {}", .kind.describe(.name))]
    InvalidName {
        name: String,
        kind: NameErrorKind,
        span: Span,
    },

    /// Statement kind that is not legal where it appears.
    #[error("at {span}: {message}")]
    MisplacedStatement { message: String, span: Span },

    /// Body without any `return`.
    #[error("at {span}: {context} must return a value")]
    MissingReturn { context: ReturnContext, span: Span },

    /// `return` where no value can be produced.
    #[error("at {span}: {message}")]
    UnexpectedReturn { message: String, span: Span },
}

impl CompilationError {
    pub fn invalid_name(name: impl Into<String>, kind: NameErrorKind, span: Span) -> Self {
        CompilationError::InvalidName {
            name: name.into(),
            kind,
            span,
        }
    }

    pub fn misplaced(message: impl Into<String>, span: Span) -> Self {
        CompilationError::MisplacedStatement {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_return(message: impl Into<String>, span: Span) -> Self {
        CompilationError::UnexpectedReturn {
            message: message.into(),
            span,
        }
    }

    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::InvalidName { span, .. } => *span,
            CompilationError::MisplacedStatement { span, .. } => *span,
            CompilationError::MissingReturn { span, .. } => *span,
            CompilationError::UnexpectedReturn { span, .. } => *span,
        }
    }

    /// The message without the location prefix.
    pub fn message(&self) -> String {
        match self {
            CompilationError::InvalidName { name, kind, .. } => kind.describe(name),
            CompilationError::MisplacedStatement { message, .. }
            | CompilationError::UnexpectedReturn { message, .. } => message.clone(),
            CompilationError::MissingReturn { context, .. } => {
                format!("{} must return a value", context)
            }
        }
    }

    /// Render the error with the offending source line and a caret marker.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = format!("error at {}: {}\n", self.span(), self.message());
        output.push_str(&source_excerpt(source, self.span()));
        output
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for the compile and compile-then-evaluate flows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetScriptError {
    #[error(transparent)]
    Parse(#[from] ParseErrors),

    #[error(transparent)]
    Compilation(#[from] CompilationError),

    /// The formula engine rejected or failed the emitted formula.
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

impl SheetScriptError {
    pub fn is_parse(&self) -> bool {
        matches!(self, SheetScriptError::Parse(_))
    }

    pub fn is_compilation(&self) -> bool {
        matches!(self, SheetScriptError::Compilation(_))
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(self, SheetScriptError::Evaluation(_))
    }

    /// Render with source context where a location is known.
    pub fn display_with_source(&self, source: &str) -> String {
        match self {
            SheetScriptError::Parse(errors) => errors.display_with_source(source),
            SheetScriptError::Compilation(error) => error.display_with_source(source),
            SheetScriptError::Evaluation(_) => format!("{}\n", self),
        }
    }
}

impl From<ParseError> for SheetScriptError {
    fn from(error: ParseError) -> Self {
        SheetScriptError::Parse(error.into())
    }
}

/// Source line for `span` followed by a caret underline.
fn source_excerpt(source: &str, span: Span) -> String {
    let Some(line_text) = span
        .line
        .checked_sub(1)
        .and_then(|index| source.lines().nth(index as usize))
    else {
        return String::new();
    };

    let indent = " ".repeat(span.col.saturating_sub(1) as usize);
    let room = line_text.len().saturating_sub(indent.len()).max(1);
    let width = (span.len() as usize).clamp(1, room);
    let pointer = format!("^{}", "~".repeat(width - 1));

    format!(
        "  |\n{:>3} | {}\n  | {}{}\n",
        span.line, line_text, indent, pointer
    )
}
