//! Property types, ranges and tags.
//!
//! ```text
//! type  = scalar [ (".." / "...") type ]
//! scalar = ident / string / int / float / "#" uint "(" type ")"
//! ```

use cddl_ir::{Literal, PropertyType, TokenKind, TokenSource};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenSource> Parser<S> {
    /// Parse one type, including a trailing range.
    pub(crate) fn parse_property_type(&mut self) -> Result<PropertyType, ParseError> {
        self.nested(|p| {
            let scalar = p.parse_scalar_type()?;
            p.parse_range_tail(scalar)
        })
    }

    fn parse_scalar_type(&mut self) -> Result<PropertyType, ParseError> {
        let ty = match self.cursor.current_kind() {
            TokenKind::Ident(name) => PropertyType::from_ident(name),
            TokenKind::String(value) => PropertyType::Literal(Literal::Text(value.clone())),
            TokenKind::Int(n) => PropertyType::Literal(Literal::Int(*n)),
            TokenKind::Float(bits) => PropertyType::Literal(Literal::Float(f64::from_bits(*bits))),
            TokenKind::Hash => {
                self.cursor.advance();
                return self.parse_tag();
            }
            TokenKind::Eof => {
                return Err(self.error_at_current(ParseErrorKind::UnexpectedEof {
                    expected: "a property type",
                }));
            }
            found => {
                let found = found.clone();
                return Err(self.error_at_current(ParseErrorKind::InvalidPropertyType { found }));
            }
        };
        self.cursor.advance();
        Ok(ty)
    }

    /// `#` already consumed: `N(type)`.
    fn parse_tag(&mut self) -> Result<PropertyType, ParseError> {
        let numeric_part = self.expect_unsigned("a tag number after `#`")?;
        self.expect(&TokenKind::LParen, "`(` after the tag number")?;
        let type_part = self.parse_property_type()?;
        self.expect(&TokenKind::RParen, "`)` to close the tag")?;

        trace!(tag = numeric_part, "tag");
        Ok(PropertyType::tag(numeric_part, type_part))
    }

    /// Two dots make an inclusive range, three an exclusive one. The upper
    /// bound is a full type, so ranges nest if written that way.
    fn parse_range_tail(&mut self, min: PropertyType) -> Result<PropertyType, ParseError> {
        if !(self.cursor.check(&TokenKind::Dot) && self.cursor.check_peek(&TokenKind::Dot)) {
            return Ok(min);
        }
        self.cursor.advance();
        self.cursor.advance();

        let inclusive = if self.cursor.check(&TokenKind::Dot) {
            self.cursor.advance();
            false
        } else {
            true
        };

        let max = self.parse_property_type()?;
        trace!(inclusive, "range");
        Ok(PropertyType::range(inclusive, min, max))
    }
}
