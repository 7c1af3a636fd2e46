//! Token types for the SheetScript lexer.

use sheetscript_core::Span;
use std::fmt;

/// A token from the source code.
///
/// The lexeme is copied into the parse arena, so tokens outlive the
/// source string they were scanned from.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'ast> {
    pub kind: TokenKind,
    pub lexeme: &'ast str,
    pub span: Span,
}

impl<'ast> Token<'ast> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'ast str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// How the token reads in a diagnostic, e.g. `'return'` or `end of file`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => self.kind.description().to_string(),
            TokenKind::Error => "invalid token".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.lexeme, self.span)
    }
}

/// Every kind of token in SheetScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Optionally signed integer or decimal: `42`, `-3`, `.5`, `1e10`
    Number,
    /// Double-quoted string, lexeme includes the quotes and raw escapes
    String,

    Identifier,

    // Keywords
    Class,
    Fn,
    Constructor,
    Let,
    Return,
    New,
    This,
    True,
    False,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    Dot,
    Equal,
    Question,
    Colon,

    /// A lexing error; details are in the lexer's error list.
    Error,
    Eof,
}

impl TokenKind {
    pub fn description(self) -> &'static str {
        use TokenKind::*;
        match self {
            Number => "number",
            String => "string literal",
            Identifier => "identifier",
            Class => "'class'",
            Fn => "'fn'",
            Constructor => "'constructor'",
            Let => "'let'",
            Return => "'return'",
            New => "'new'",
            This => "'this'",
            True => "'true'",
            False => "'false'",
            LeftParen => "'('",
            RightParen => "')'",
            LeftBrace => "'{'",
            RightBrace => "'}'",
            Semicolon => "';'",
            Comma => "','",
            Dot => "'.'",
            Equal => "'='",
            Question => "'?'",
            Colon => "':'",
            Error => "invalid token",
            Eof => "end of file",
        }
    }

    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Class | Fn | Constructor | Let | Return | New | This | True | False
        )
    }

    /// Whether a token of this kind can begin an expression.
    pub fn starts_expression(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Number | String | Identifier | New | This | True | False | LeftParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Map a keyword string to its [`TokenKind`], or `None` if not a keyword.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match ident {
        "class" => Class,
        "fn" => Fn,
        "constructor" => Constructor,
        "let" => Let,
        "return" => Return,
        "new" => New,
        "this" => This,
        "true" => True,
        "false" => False,
        _ => return None,
    })
}
