//! Top-level rules: `name = value`.

use cddl_ir::{Assignment, TokenKind, TokenSource, Variable};
use tracing::debug;

use super::segment::Segment;
use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenSource> Parser<S> {
    /// Parse one rule. The current token must be an identifier and the
    /// next one `=`.
    pub(crate) fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => name.clone(),
            found => {
                let found = found.clone();
                return Err(self.error_at_current(ParseErrorKind::ExpectedRuleName { found }));
            }
        };

        if !self.cursor.check_peek(&TokenKind::Eq) {
            let found = self.cursor.peek_kind().clone();
            return Err(ParseError::new(
                ParseErrorKind::MissingAssignOperator { rule: name, found },
                self.cursor.peek().span,
            ));
        }

        self.cursor.advance(); // rule name
        self.cursor.advance(); // =

        let assignment = self.parse_assignment_value(name)?;
        debug!(
            rule = assignment.name(),
            members = assignment.members().len(),
            kind = match &assignment {
                Assignment::Variable(_) => "variable",
                Assignment::Group(_) => "group",
                Assignment::Array(_) => "array",
            },
            "parsed rule"
        );
        Ok(assignment)
    }

    /// Right-hand side of a rule: a bracketed body becomes a group or an
    /// array, anything else a variable holding a type union.
    fn parse_assignment_value(&mut self, name: String) -> Result<Assignment, ParseError> {
        if let Some(closers) = self.open_segment() {
            return Ok(match self.parse_segment(name, &closers)? {
                Segment::Group(group) => Assignment::Group(group),
                Segment::Array(array) => Assignment::Array(array),
            });
        }

        let first = self.parse_property_type()?;
        let ty = self.parse_union(first)?;
        Ok(Assignment::Variable(Variable { name, ty }))
    }
}
