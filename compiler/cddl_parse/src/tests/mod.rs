//! Parser tests.
//!
//! - `parser`: schemas lexed from text, checked against the expected AST
//! - `errors`: malformed input and the error it produces
//! - `tokens`: hand-built token streams pinning the token interface
//! - `properties`: property-based checks over generated schemas

mod parser;

use cddl_ir::Assignment;

use crate::{parse, ParseError};

/// Lex and parse `source`.
fn parse_source(source: &str) -> Result<Vec<Assignment>, ParseError> {
    parse(cddl_lexer::lex(source))
}
