//! CDDL IR - tokens, spans and AST types
//!
//! This crate holds the data shared by the tokenizer, the parser and any
//! downstream validator or code generator:
//! - Spans for source locations
//! - Tokens, the [`TokenSource`] pull interface and an in-memory [`TokenList`]
//! - AST nodes ([`Assignment`], [`Group`], [`Array`], [`Property`], ...)
//!
//! Enable the `serde` feature to serialize the AST.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    Array, Assignment, Group, Literal, Occurrence, PrimitiveType, Property, PropertyType, Range,
    Tag, Variable,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList, TokenSource};
