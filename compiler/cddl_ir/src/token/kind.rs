//! Token kinds for CDDL.

use std::fmt;

/// Token kinds produced by a CDDL tokenizer.
///
/// The lexeme for identifiers, strings, numbers and comments is carried in
/// the variant. Float literals store bits as u64 so the kind stays `Eq` and
/// `Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier: `person`, `tstr`, `optional-key`
    Ident(String),
    /// Integer literal: 42, -1, 0x1F
    Int(i64),
    /// Float literal: 1.5, -2.5e3 (stored as bits)
    Float(u64),
    /// String literal with quotes removed and escapes resolved
    String(String),
    /// Full comment lexeme, including the leading marker
    Comment(String),

    Eq,       // =
    Gt,       // >
    Plus,     // +
    Slash,    // /
    Question, // ?
    Star,     // *
    Comma,    // ,
    Dot,      // .
    Colon,    // :
    Caret,    // ^
    Hash,     // #
    LParen,   // (
    RParen,   // )
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]

    /// Unrecognized input.
    Error,
    Eof,
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Short name used in diagnostics: the punctuation itself, or a
    /// category for tokens that carry a lexeme.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Comment(_) => "comment",
            TokenKind::Eq => "=",
            TokenKind::Gt => ">",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Question => "?",
            TokenKind::Star => "*",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Caret => "^",
            TokenKind::Hash => "#",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Error => "unrecognized input",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::String(s) => write!(f, "String({s:?})"),
            TokenKind::Comment(text) => write!(f, "Comment({text:?})"),
            other => write!(f, "{}", other.display_name()),
        }
    }
}

/// Renders the token the way it would appear in a diagnostic: the lexeme
/// for literal-carrying kinds, the symbol otherwise.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "`{name}`"),
            TokenKind::Int(n) => write!(f, "`{n}`"),
            TokenKind::Float(bits) => write!(f, "`{}`", f64::from_bits(*bits)),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Comment(_) => f.write_str("comment"),
            TokenKind::Error | TokenKind::Eof => f.write_str(self.display_name()),
            other => write!(f, "`{}`", other.display_name()),
        }
    }
}
