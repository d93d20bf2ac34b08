//! Recursion guards for the grammar.
//!
//! Segments nest inside member values and ranges/tags nest inside types,
//! so hostile input can recurse arbitrarily deep. Two guards apply:
//! `stacker` keeps the parse itself off the guard page, and a hard depth
//! limit keeps the resulting tree shallow enough that dropping, cloning or
//! printing it (all recursive) stays within an ordinary thread stack.

use cddl_ir::TokenSource;

use crate::{ParseError, ParseErrorKind, Parser};

/// Deepest nesting of segments, ranges and tags the parser accepts.
pub const MAX_NESTING_DEPTH: u32 = 256;

/// Grow when less than this remains (100 KiB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1 MiB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

impl<S: TokenSource> Parser<S> {
    /// Run `f` one nesting level deeper, failing once the limit is hit.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current(ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}
