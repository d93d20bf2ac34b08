//! Recursive descent parser for CDDL.
//!
//! Pulls tokens from any [`TokenSource`] through a two-token lookahead
//! [`Cursor`] and produces the top-level rules of a schema as an ordered
//! list of [`Assignment`]s. Parsing is single-pass and all-or-nothing: the
//! first syntax error aborts with a [`ParseError`].
//!
//! ```text
//! let tokens = cddl_lexer::lex("person = { name: tstr, ? age: uint }");
//! let rules = cddl_parse::parse(tokens)?;
//! ```

mod cursor;
mod error;
mod grammar;
mod stack;

pub use cursor::Cursor;
pub use error::{ErrorCode, ParseError, ParseErrorKind};
pub use stack::MAX_NESTING_DEPTH;

use cddl_ir::{Assignment, TokenKind, TokenSource};
use tracing::debug;

/// Parser state: the lookahead window over one token source.
///
/// A parser is consumed by [`Parser::parse`]; parse another schema with a
/// fresh parser.
pub struct Parser<S> {
    cursor: Cursor<S>,
    /// Current nesting of segments, ranges and tags.
    depth: u32,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser {
            cursor: Cursor::new(source),
            depth: 0,
        }
    }

    /// Parse rules until end of input, in declaration order.
    pub fn parse(mut self) -> Result<Vec<Assignment>, ParseError> {
        let mut assignments = Vec::new();

        loop {
            self.skip_comments();
            if self.cursor.is_at_end() {
                break;
            }
            assignments.push(self.parse_assignment()?);
        }

        debug!(rules = assignments.len(), "parsed schema");
        Ok(assignments)
    }

    /// Build an error located at the current token, with `peek` as context.
    #[cold]
    fn error_at_current(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.current_span()).with_peek(self.cursor.peek_kind().clone())
    }

    /// Consume `kind` or fail with `expected`.
    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.cursor.check(kind) {
            self.cursor.advance();
            return Ok(());
        }
        let found = self.cursor.current_kind().clone();
        Err(self.error_at_current(if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken { expected, found }
        }))
    }

    /// Skip comments that do not trail a value: file headers, or a comment
    /// line before a rule or member.
    fn skip_comments(&mut self) {
        while matches!(self.cursor.current_kind(), TokenKind::Comment(_)) {
            self.cursor.advance();
        }
    }
}

/// Parse a whole schema from `source`.
pub fn parse<S: TokenSource>(source: S) -> Result<Vec<Assignment>, ParseError> {
    Parser::new(source).parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]
mod tests;
