//! Occurrence indicators in front of a member name.
//!
//! ```text
//! occurrence = "?" [uint] / "*" [uint] / "+" [uint] / uint "*" [uint]
//! ```
//!
//! The indicator sits right against the name with no separator, so it is
//! read before the name.

use cddl_ir::{Occurrence, TokenKind, TokenSource};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenSource> Parser<S> {
    /// Parse an optional occurrence indicator. No indicator means exactly one.
    pub(crate) fn parse_occurrence(&mut self) -> Result<Occurrence, ParseError> {
        let (min, default_max) = match self.cursor.current_kind() {
            TokenKind::Question => (0, Some(1)),
            TokenKind::Star => (0, None),
            TokenKind::Plus => (1, None),
            TokenKind::Int(_) if self.cursor.check_peek(&TokenKind::Star) => {
                return self.parse_numbered_occurrence();
            }
            _ => return Ok(Occurrence::EXACTLY_ONE),
        };
        self.cursor.advance();

        let max = match self.eat_bound()? {
            Some(max) => Some(max),
            None => default_max,
        };
        let occurrence = Occurrence { min, max };
        trace!(%occurrence, "occurrence");
        Ok(occurrence)
    }

    /// `n*` or `n*m`.
    fn parse_numbered_occurrence(&mut self) -> Result<Occurrence, ParseError> {
        let min = self.expect_unsigned("an occurrence count")?;
        self.cursor.advance(); // *
        let occurrence = Occurrence {
            min,
            max: self.eat_bound()?,
        };
        trace!(%occurrence, "numbered occurrence");
        Ok(occurrence)
    }

    /// Consume an upper bound if an integer follows the indicator.
    fn eat_bound(&mut self) -> Result<Option<u64>, ParseError> {
        if matches!(self.cursor.current_kind(), TokenKind::Int(_)) {
            return self.expect_unsigned("an occurrence bound").map(Some);
        }
        Ok(None)
    }

    /// Consume a non-negative integer token.
    pub(crate) fn expect_unsigned(&mut self, expected: &'static str) -> Result<u64, ParseError> {
        let value = match self.cursor.current_kind() {
            TokenKind::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        };
        if let Some(value) = value {
            self.cursor.advance();
            return Ok(value);
        }

        let found = self.cursor.current_kind().clone();
        Err(self.error_at_current(if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::ExpectedNumber { expected, found }
        }))
    }
}
