//! Members of a group or array body.
//!
//! ```text
//! member = [occurrence] name ( "," | closer )               ; group reference
//!        / [occurrence] name ["^"] (":" / "=>") type *("/" type) [","] [comment]
//! ```

use cddl_ir::{Property, PropertyType, TokenKind, TokenSource};
use tracing::trace;

use super::segment::{Closers, Segment};
use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenSource> Parser<S> {
    /// Parse one member. Must not be called at a closer or at end of input.
    pub(crate) fn parse_property(&mut self, closers: &Closers) -> Result<Property, ParseError> {
        let occurrence = self.parse_occurrence()?;
        let name = self.parse_property_name()?;

        // A name directly followed by `,` or a closer is a reference to
        // another group, not a key.
        if self.cursor.check(&TokenKind::Comma) || closers.contains(self.cursor.current_kind()) {
            trace!(group = %name, "group reference");
            if self.cursor.check(&TokenKind::Comma) {
                self.cursor.advance();
            }
            let comment = self.parse_comment();
            return Ok(Property {
                has_cut: false,
                occurrence,
                name: String::new(),
                ty: vec![group_reference(name)],
                comment,
            });
        }

        let has_cut = self.parse_cut();
        self.expect_separator(&name)?;

        let first = self.parse_value()?;
        let ty = self.parse_union(first)?;

        if self.cursor.check(&TokenKind::Comma) {
            self.cursor.advance();
        }
        let comment = self.parse_comment();

        Ok(Property {
            has_cut,
            occurrence,
            name,
            ty,
            comment,
        })
    }

    /// A bare identifier or a quoted string.
    pub(crate) fn parse_property_name(&mut self) -> Result<String, ParseError> {
        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) | TokenKind::String(name) => name.clone(),
            TokenKind::Eof => {
                return Err(self.error_at_current(ParseErrorKind::UnexpectedEof {
                    expected: "a property name",
                }));
            }
            found => {
                let found = found.clone();
                return Err(self.error_at_current(ParseErrorKind::ExpectedPropertyName { found }));
            }
        };
        self.cursor.advance();
        Ok(name)
    }

    /// `^` marks a cut explicitly; the `:` separator implies one. Only the
    /// `^` is consumed here.
    fn parse_cut(&mut self) -> bool {
        if self.cursor.check(&TokenKind::Caret) {
            self.cursor.advance();
            return true;
        }
        self.cursor.check(&TokenKind::Colon)
    }

    /// Consume `:` or the two tokens of `=>`.
    fn expect_separator(&mut self, property: &str) -> Result<(), ParseError> {
        if self.cursor.check(&TokenKind::Colon) {
            self.cursor.advance();
            return Ok(());
        }
        if self.cursor.check(&TokenKind::Eq) && self.cursor.check_peek(&TokenKind::Gt) {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(());
        }

        let found = self.cursor.current_kind().clone();
        Err(self.error_at_current(ParseErrorKind::ExpectedSeparator {
            property: property.to_owned(),
            found,
        }))
    }

    /// A member value: an inline segment or a single property type.
    pub(crate) fn parse_value(&mut self) -> Result<PropertyType, ParseError> {
        let Some(closers) = self.open_segment() else {
            return self.parse_property_type();
        };
        let segment = self.nested(|p| p.parse_segment(String::new(), &closers))?;
        Ok(match segment {
            Segment::Group(group) => PropertyType::Group(group),
            Segment::Array(array) => PropertyType::Array(array),
        })
    }

    /// Collect `/`-separated alternatives after `first`, in source order.
    pub(crate) fn parse_union(
        &mut self,
        first: PropertyType,
    ) -> Result<Vec<PropertyType>, ParseError> {
        let mut types = vec![first];
        while self.cursor.check(&TokenKind::Slash) {
            self.cursor.advance();
            types.push(self.parse_value()?);
        }
        if types.len() > 1 {
            trace!(alternatives = types.len(), "type union");
        }
        Ok(types)
    }

    /// Take a trailing comment, stripping its two-character marker.
    /// Returns an empty string when there is none.
    pub(crate) fn parse_comment(&mut self) -> String {
        let TokenKind::Comment(text) = self.cursor.current_kind() else {
            return String::new();
        };
        let comment = text.chars().skip(2).collect();
        self.cursor.advance();
        comment
    }
}

/// Type of a group-reference member. Prelude keywords stay primitives.
fn group_reference(name: String) -> PropertyType {
    match cddl_ir::PrimitiveType::from_keyword(&name) {
        Some(primitive) => PropertyType::Primitive(primitive),
        None => PropertyType::GroupRef(name),
    }
}
