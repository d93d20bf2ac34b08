//! Bracketed bodies: `{ ... }`, `( ... )`, `{ ( ... ) }` and `[ ... ]`.
//!
//! The closing delimiters are fixed when the segment opens and threaded
//! through the body loop. Whether the body is a group or an array is
//! decided by the last closer alone.

use cddl_ir::{Array, Group, Property, Span, TokenKind, TokenSource};
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

/// Closing delimiters of an open segment: the one that ends the member
/// list, then an optional outer one (`{(` closes with `)` then `}`).
#[derive(Clone, Debug)]
pub(crate) struct Closers {
    /// The opening delimiter, for diagnostics.
    open: TokenKind,
    open_span: Span,
    innermost: TokenKind,
    outer: Option<TokenKind>,
}

impl Closers {
    fn new(open: TokenKind, open_span: Span, innermost: TokenKind) -> Self {
        Closers {
            open,
            open_span,
            innermost,
            outer: None,
        }
    }

    #[must_use]
    fn with_outer(mut self, outer: TokenKind) -> Self {
        self.outer = Some(outer);
        self
    }

    /// All closers, innermost first.
    pub(crate) fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        std::iter::once(&self.innermost).chain(self.outer.as_ref())
    }

    /// True if `kind` is any of the closers of this segment.
    pub(crate) fn contains(&self, kind: &TokenKind) -> bool {
        self.kinds().any(|close| close == kind)
    }

    /// The last closer decides: `]` makes an array.
    fn is_array(&self) -> bool {
        self.outer.as_ref().unwrap_or(&self.innermost) == &TokenKind::RBracket
    }
}

/// A parsed segment body.
pub(crate) enum Segment {
    Group(Group),
    Array(Array),
}

impl<S: TokenSource> Parser<S> {
    /// If a segment starts here, consume its opening delimiter(s) and
    /// return the closers to expect. `{` directly followed by `(` is one
    /// segment closed by `)` then `}`.
    pub(crate) fn open_segment(&mut self) -> Option<Closers> {
        let open_span = self.cursor.current_span();
        let closers = match self.cursor.current_kind() {
            TokenKind::LBrace => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    self.cursor.advance();
                    Closers::new(TokenKind::LBrace, open_span, TokenKind::RParen)
                        .with_outer(TokenKind::RBrace)
                } else {
                    Closers::new(TokenKind::LBrace, open_span, TokenKind::RBrace)
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                Closers::new(TokenKind::LParen, open_span, TokenKind::RParen)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                Closers::new(TokenKind::LBracket, open_span, TokenKind::RBracket)
            }
            _ => return None,
        };

        debug!(closers = ?closers.kinds().collect::<Vec<_>>(), "opened segment");
        Some(closers)
    }

    /// Parse members up to and including the closing delimiter(s).
    pub(crate) fn parse_segment(
        &mut self,
        name: String,
        closers: &Closers,
    ) -> Result<Segment, ParseError> {
        let mut properties: Vec<Property> = Vec::new();

        loop {
            self.skip_comments();
            if self.cursor.is_at_end() {
                return Err(self.unclosed(closers, &closers.innermost));
            }
            if closers.contains(self.cursor.current_kind()) {
                break;
            }
            properties.push(self.parse_property(closers)?);
        }

        self.close_segment(closers)?;

        Ok(if closers.is_array() {
            Segment::Array(Array {
                name,
                values: properties,
            })
        } else {
            Segment::Group(Group { name, properties })
        })
    }

    /// Consume the closing sequence, one delimiter at a time.
    fn close_segment(&mut self, closers: &Closers) -> Result<(), ParseError> {
        for close in closers.kinds() {
            if self.cursor.check(close) {
                self.cursor.advance();
                continue;
            }
            if self.cursor.is_at_end() {
                return Err(self.unclosed(closers, close));
            }
            let found = self.cursor.current_kind().clone();
            return Err(self.error_at_current(ParseErrorKind::UnexpectedToken {
                expected: closing_description(close),
                found,
            }));
        }
        Ok(())
    }

    #[cold]
    fn unclosed(&self, closers: &Closers, expected_close: &TokenKind) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnclosedSegment {
                open: closers.open.clone(),
                open_span: closers.open_span,
                expected_close: expected_close.clone(),
            },
            self.cursor.current_span(),
        )
    }
}

fn closing_description(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::RParen => "`)` to close the segment",
        TokenKind::RBrace => "`}` to close the segment",
        TokenKind::RBracket => "`]` to close the segment",
        _ => "a closing delimiter",
    }
}
