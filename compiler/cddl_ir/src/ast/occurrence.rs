//! Occurrence indicators: how many times a member may repeat.

use std::fmt;

/// Permitted repetition count of a property inside its group or array.
///
/// `max == None` means unbounded. The parser records what it reads and does
/// not check `min <= max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occurrence {
    pub min: u64,
    pub max: Option<u64>,
}

impl Occurrence {
    /// No indicator: the member appears exactly once.
    pub const EXACTLY_ONE: Occurrence = Occurrence::bounded(1, 1);
    /// `?`
    pub const OPTIONAL: Occurrence = Occurrence::bounded(0, 1);
    /// `*`
    pub const ZERO_OR_MORE: Occurrence = Occurrence::unbounded(0);
    /// `+`
    pub const ONE_OR_MORE: Occurrence = Occurrence::unbounded(1);

    #[inline]
    pub const fn bounded(min: u64, max: u64) -> Self {
        Occurrence {
            min,
            max: Some(max),
        }
    }

    #[inline]
    pub const fn unbounded(min: u64) -> Self {
        Occurrence { min, max: None }
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// True when `min <= max`, or `max` is unbounded.
    pub fn is_well_formed(&self) -> bool {
        self.max.map_or(true, |max| self.min <= max)
    }
}

impl Default for Occurrence {
    fn default() -> Self {
        Occurrence::EXACTLY_ONE
    }
}

/// Renders in CDDL `n*m` notation; the default occurrence renders as `1*1`.
impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}*{}", self.min, max),
            None => write!(f, "{}*", self.min),
        }
    }
}
