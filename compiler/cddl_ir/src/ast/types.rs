//! Property types: the right-hand side of a member or rule.

use std::fmt;

use super::{Array, Group};

/// Built-in type keywords of the schema prelude.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveType {
    Bool,
    Int,
    Uint,
    Nint,
    Float,
    Float16,
    Float32,
    Float64,
    Bstr,
    Bytes,
    Tstr,
    Text,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 12] = [
        PrimitiveType::Bool,
        PrimitiveType::Int,
        PrimitiveType::Uint,
        PrimitiveType::Nint,
        PrimitiveType::Float,
        PrimitiveType::Float16,
        PrimitiveType::Float32,
        PrimitiveType::Float64,
        PrimitiveType::Bstr,
        PrimitiveType::Bytes,
        PrimitiveType::Tstr,
        PrimitiveType::Text,
    ];

    /// Look up a keyword. Returns `None` for any other identifier.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "bool" => PrimitiveType::Bool,
            "int" => PrimitiveType::Int,
            "uint" => PrimitiveType::Uint,
            "nint" => PrimitiveType::Nint,
            "float" => PrimitiveType::Float,
            "float16" => PrimitiveType::Float16,
            "float32" => PrimitiveType::Float32,
            "float64" => PrimitiveType::Float64,
            "bstr" => PrimitiveType::Bstr,
            "bytes" => PrimitiveType::Bytes,
            "tstr" => PrimitiveType::Tstr,
            "text" => PrimitiveType::Text,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int => "int",
            PrimitiveType::Uint => "uint",
            PrimitiveType::Nint => "nint",
            PrimitiveType::Float => "float",
            PrimitiveType::Float16 => "float16",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Bstr => "bstr",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::Tstr => "tstr",
            PrimitiveType::Text => "text",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(x) => write!(f, "{x:?}"),
            Literal::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// `min..max` (inclusive) or `min...max` (upper bound excluded).
///
/// Both bounds are full property types; a range nested inside a bound is
/// kept as written and left for semantic validation to reject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub inclusive: bool,
    pub min: PropertyType,
    pub max: PropertyType,
}

/// `#N(type)`: a numeric tag wrapping a type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub numeric_part: u64,
    pub type_part: PropertyType,
}

/// One alternative of a property's type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyType {
    /// A prelude keyword such as `tstr` or `uint`.
    Primitive(PrimitiveType),
    /// A bare identifier naming another rule. Not resolved by the parser.
    Named(String),
    /// A member that is only a name: the group it refers to is spliced in.
    GroupRef(String),
    Literal(Literal),
    Range(Box<Range>),
    Tag(Box<Tag>),
    /// Inline `{ ... }` or `( ... )` body.
    Group(Group),
    /// Inline `[ ... ]` body.
    Array(Array),
}

impl PropertyType {
    /// Classify an identifier: prelude keywords become primitives, anything
    /// else a named reference.
    pub fn from_ident(name: &str) -> Self {
        PrimitiveType::from_keyword(name).map_or_else(
            || PropertyType::Named(name.to_owned()),
            PropertyType::Primitive,
        )
    }

    pub fn range(inclusive: bool, min: PropertyType, max: PropertyType) -> Self {
        PropertyType::Range(Box::new(Range {
            inclusive,
            min,
            max,
        }))
    }

    pub fn tag(numeric_part: u64, type_part: PropertyType) -> Self {
        PropertyType::Tag(Box::new(Tag {
            numeric_part,
            type_part,
        }))
    }

    pub fn text(value: impl Into<String>) -> Self {
        PropertyType::Literal(Literal::Text(value.into()))
    }

    pub fn int(value: i64) -> Self {
        PropertyType::Literal(Literal::Int(value))
    }

    pub fn as_range(&self) -> Option<&Range> {
        match self {
            PropertyType::Range(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            PropertyType::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for PropertyType {
    fn from(primitive: PrimitiveType) -> Self {
        PropertyType::Primitive(primitive)
    }
}

impl From<Literal> for PropertyType {
    fn from(literal: Literal) -> Self {
        PropertyType::Literal(literal)
    }
}
