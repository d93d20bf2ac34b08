//! Token types shared by the lexer and the parser.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a token with no source location, for tests and generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Pull interface between a tokenizer and the parser.
///
/// A source yields `Eof` exactly once, as its final token. Consumers must
/// not pull again after seeing `Eof`.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    #[inline]
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    #[inline]
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
