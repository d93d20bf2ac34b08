//! In-memory token source.

use std::collections::VecDeque;

use super::{Token, TokenKind, TokenSource};
use crate::Span;

/// A buffered list of tokens that can drive the parser.
///
/// Guarantees the `Eof` contract of [`TokenSource`]: if the tokens pushed
/// by the caller do not end in `Eof`, one is appended when the list runs
/// dry, and every pull after that keeps returning `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: VecDeque<Token>,
    eof_span: Span,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.eof_span = Span::point(token.span.end);
        self.tokens.push_back(token);
    }

    /// Kinds of the remaining tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        let mut list = TokenList::new();
        for token in tokens {
            list.push(token);
        }
        list
    }
}

/// Build a list from bare kinds with dummy spans. Mostly for tests and
/// generated schemas.
impl FromIterator<TokenKind> for TokenList {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut list = TokenList::new();
        for kind in iter {
            list.push(Token::dummy(kind));
        }
        list
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Token {
        self.tokens
            .pop_front()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, self.eof_span))
    }
}
