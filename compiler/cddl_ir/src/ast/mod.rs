//! Abstract syntax tree for CDDL schemas.
//!
//! A pure value tree: nodes own their children and hold no reference back
//! to the token stream. Built bottom-up by the parser and not mutated
//! afterwards.

mod items;
mod occurrence;
mod types;

pub use items::{Array, Assignment, Group, Property, Variable};
pub use occurrence::Occurrence;
pub use types::{Literal, PrimitiveType, PropertyType, Range, Tag};

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
