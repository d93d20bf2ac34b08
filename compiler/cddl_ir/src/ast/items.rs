//! Members and top-level rules.

use super::{Occurrence, PropertyType};

/// One member of a group or array body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Key is a cut (`^ =>` or `:`): it must match exactly.
    pub has_cut: bool,
    pub occurrence: Occurrence,
    /// Empty for group references.
    pub name: String,
    /// Union alternatives in source order. Never empty.
    pub ty: Vec<PropertyType>,
    /// Trailing comment with its marker stripped, or empty.
    pub comment: String,
}

impl Property {
    /// True for a member written as a bare name that splices in another
    /// group, e.g. `{ base, extra: int }`.
    pub fn is_group_reference(&self) -> bool {
        self.name.is_empty() && matches!(self.ty.as_slice(), [PropertyType::GroupRef(_)])
    }
}

/// A rule whose value is a bare type expression: `port = uint`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub name: String,
    pub ty: Vec<PropertyType>,
}

/// A `{ ... }` or `( ... )` body.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Rule name; empty when the group is an inline value.
    pub name: String,
    pub properties: Vec<Property>,
}

/// A `[ ... ]` body. Same shape as [`Group`].
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array {
    /// Rule name; empty when the array is an inline value.
    pub name: String,
    pub values: Vec<Property>,
}

/// A top-level rule: `name = value`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Assignment {
    Variable(Variable),
    Group(Group),
    Array(Array),
}

impl Assignment {
    /// The rule name declared before `=`.
    pub fn name(&self) -> &str {
        match self {
            Assignment::Variable(v) => &v.name,
            Assignment::Group(g) => &g.name,
            Assignment::Array(a) => &a.name,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Assignment::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Assignment::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Assignment::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Members of a group or array body; empty for variables.
    pub fn members(&self) -> &[Property] {
        match self {
            Assignment::Variable(_) => &[],
            Assignment::Group(g) => &g.properties,
            Assignment::Array(a) => &a.values,
        }
    }
}
