//! Two-token lookahead window over a token source.
//!
//! Every decision in the grammar is made by looking at `current` and
//! `peek` together; nothing needs more lookahead than that.

use cddl_ir::{Span, Token, TokenKind, TokenSource};
use tracing::trace;

/// Lookahead window pulling from a [`TokenSource`] on demand.
///
/// Invariant: once `peek` is `Eof` the source is never pulled again; the
/// window keeps handing out copies of that `Eof`.
pub struct Cursor<S> {
    source: S,
    current: Token,
    peek: Token,
}

impl<S: TokenSource> Cursor<S> {
    /// Fill both slots: `current` holds the first token, `peek` the second.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = if current.is_eof() {
            current.clone()
        } else {
            source.next_token()
        };
        Cursor {
            source,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    #[inline]
    pub fn peek_kind(&self) -> &TokenKind {
        &self.peek.kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Check if the current token is exactly `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    /// Check if the token after the current one is exactly `kind`.
    #[inline]
    pub fn check_peek(&self, kind: &TokenKind) -> bool {
        self.peek.kind == *kind
    }

    /// Shift `peek` into `current`, pull a fresh `peek`, and return the
    /// token that was current.
    pub fn advance(&mut self) -> Token {
        let next = if self.peek.is_eof() {
            self.peek.clone()
        } else {
            self.source.next_token()
        };
        let previous = std::mem::replace(&mut self.current, std::mem::replace(&mut self.peek, next));
        trace!(consumed = ?previous.kind, current = ?self.current.kind, "advance");
        previous
    }
}
