//! Sequence and tuple adapters used by destructure patterns.
//!
//! Destructure patterns see aggregates through one of two lenses:
//!
//! - **Tuple-like** values ([`TupleLike`]): the arity is a compile-time
//!   constant and every position may carry a different type.
//! - **Range-like** values ([`Sequence`]): homogeneous elements reached by a
//!   forward traversal, with a size known at runtime (or at compile time for
//!   fixed arrays).
//!
//! A type is one or the other, never both. Range-like values can hand out
//! sub-views of a contiguous span without copying: contiguous storage yields
//! a slice, node-based storage yields a [`Subrange`] (begin iterator plus
//! length).

mod sequence;
mod subrange;
mod tuple;

pub use sequence::{Sequence, ViewOf};
pub use subrange::Subrange;
pub use tuple::TupleLike;

use std::ops::Range;

/// How a value presents itself to a destructure pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Heterogeneous, fixed arity.
    Tuple { arity: usize },
    /// Homogeneous with a compile-time element count (arrays).
    Fixed { len: usize },
    /// Homogeneous with a runtime element count.
    Dynamic { len: usize },
}

impl Shape {
    /// Number of elements the value exposes.
    pub fn element_count(self) -> usize {
        match self {
            Shape::Tuple { arity } => arity,
            Shape::Fixed { len } | Shape::Dynamic { len } => len,
        }
    }

    /// Whether the value is range-like, i.e. may host a rest marker.
    pub fn is_range(self) -> bool {
        !matches!(self, Shape::Tuple { .. })
    }
}

/// Span of a sequence of `len` elements left over for a rest marker that
/// sits between `head` leading and `tail` trailing sub-patterns.
///
/// Returns `None` when the sequence is too short to satisfy the fixed
/// sub-patterns.
pub fn rest_span(len: usize, head: usize, tail: usize) -> Option<Range<usize>> {
    let fixed = head.checked_add(tail)?;
    if len < fixed {
        return None;
    }
    Some(head..len - tail)
}

#[cfg(test)]
mod tests;
