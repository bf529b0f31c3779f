//! The pattern protocol.
//!
//! Matching is a two-step contract. [`Pattern::match_impl`] decides whether a
//! value has the pattern's shape and, along the way, writes tentative
//! bindings into identifiers. [`match_pattern`] wraps that call and then
//! walks every identifier inside the pattern with [`PatternNode::process_ids`]:
//! `Confirm` on success, `Cancel` on failure. Because the walk is keyed by the
//! depth of the attempt, a failure deep inside an alternation undoes exactly
//! the bindings made at that depth or deeper and leaves outer ones alone.

use crate::context::Context;
use crate::predicate::Guard;

/// Nesting level of a match attempt. Arms are matched at depth 0 and every
/// composite pattern matches its children one level deeper.
pub type Depth = u32;

/// Post-order notification sent to the identifiers inside a pattern once an
/// attempt at a given depth has concluded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdProcess {
    /// The attempt failed: drop bindings made at this depth or deeper.
    Cancel,
    /// The attempt succeeded: promote bindings to this depth.
    Confirm,
}

/// Value-independent part of a pattern: the identifiers it contains and the
/// projection slots it may need.
pub trait PatternNode {
    /// Forward `process` to every identifier inside this pattern.
    fn process_ids(&self, _depth: Depth, _process: IdProcess) {}

    /// Number of identifier occurrences in this pattern.
    fn id_count(&self) -> usize {
        0
    }

    /// Upper bound on the projected values this pattern parks in the
    /// [`Context`] during one attempt.
    fn slot_count(&self) -> usize {
        0
    }
}

/// A pattern that can be tried against values of type `V` borrowed for `'v`.
pub trait Pattern<'v, V: ?Sized + 'v>: PatternNode {
    /// Decide whether `value` matches, binding identifiers tentatively.
    ///
    /// Callers go through [`match_pattern`], which settles those bindings.
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool;
}

/// Match `value` against `pattern` at `depth` and settle the bindings made by
/// the attempt.
#[inline]
pub fn match_pattern<'v, V, P>(value: &'v V, pattern: &P, depth: Depth, ctx: &mut Context) -> bool
where
    V: ?Sized + 'v,
    P: Pattern<'v, V> + ?Sized,
{
    let matched = pattern.match_impl(value, depth, ctx);
    let process = if matched {
        IdProcess::Confirm
    } else {
        IdProcess::Cancel
    };
    pattern.process_ids(depth, process);
    matched
}

// Borrowed patterns

impl<P: PatternNode + ?Sized> PatternNode for &P {
    #[inline]
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        (**self).process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        (**self).id_count()
    }

    fn slot_count(&self) -> usize {
        (**self).slot_count()
    }
}

impl<'v, V, P> Pattern<'v, V> for &P
where
    V: ?Sized + 'v,
    P: Pattern<'v, V> + ?Sized,
{
    #[inline]
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        (**self).match_impl(value, depth, ctx)
    }
}

/// An ordered, heterogeneous list of patterns (a tuple of them).
///
/// Composite patterns use it three ways: try every pattern against the same
/// value until one matches, require all of them to match the same value, or
/// pair them up with consecutive elements of a sequence.
pub trait PatternSeq<'v, T: ?Sized + 'v>: PatternNode {
    /// Number of patterns in the list.
    const LEN: usize;

    fn match_any(&self, value: &'v T, depth: Depth, ctx: &mut Context) -> bool;

    fn match_all(&self, value: &'v T, depth: Depth, ctx: &mut Context) -> bool;

    /// Match the patterns against the next `LEN` items, left to right,
    /// stopping at the first failure or when `items` runs dry.
    fn match_each<I>(&self, items: &mut I, depth: Depth, ctx: &mut Context) -> bool
    where
        I: Iterator<Item = &'v T>;
}

impl PatternNode for () {}

impl<'v, T: ?Sized + 'v> PatternSeq<'v, T> for () {
    const LEN: usize = 0;

    fn match_any(&self, _value: &'v T, _depth: Depth, _ctx: &mut Context) -> bool {
        false
    }

    fn match_all(&self, _value: &'v T, _depth: Depth, _ctx: &mut Context) -> bool {
        true
    }

    fn match_each<I>(&self, _items: &mut I, _depth: Depth, _ctx: &mut Context) -> bool
    where
        I: Iterator<Item = &'v T>,
    {
        true
    }
}

macro_rules! impl_pattern_seq {
    ($len:expr; $($P:ident . $idx:tt),+) => {
        impl<$($P: PatternNode),+> PatternNode for ($($P,)+) {
            fn process_ids(&self, depth: Depth, process: IdProcess) {
                $( self.$idx.process_ids(depth, process); )+
            }

            fn id_count(&self) -> usize {
                0 $( + self.$idx.id_count() )+
            }

            fn slot_count(&self) -> usize {
                0 $( + self.$idx.slot_count() )+
            }
        }

        impl<'v, T: ?Sized + 'v, $($P: Pattern<'v, T>),+> PatternSeq<'v, T> for ($($P,)+) {
            const LEN: usize = $len;

            fn match_any(&self, value: &'v T, depth: Depth, ctx: &mut Context) -> bool {
                $(
                    if match_pattern(value, &self.$idx, depth, ctx) {
                        return true;
                    }
                )+
                false
            }

            fn match_all(&self, value: &'v T, depth: Depth, ctx: &mut Context) -> bool {
                $(
                    if !match_pattern(value, &self.$idx, depth, ctx) {
                        return false;
                    }
                )+
                true
            }

            fn match_each<I>(&self, items: &mut I, depth: Depth, ctx: &mut Context) -> bool
            where
                I: Iterator<Item = &'v T>,
            {
                $(
                    let Some(item) = items.next() else {
                        return false;
                    };
                    if !match_pattern(item, &self.$idx, depth, ctx) {
                        return false;
                    }
                )+
                true
            }
        }
    };
}

impl_pattern_seq!(1; P0.0);
impl_pattern_seq!(2; P0.0, P1.1);
impl_pattern_seq!(3; P0.0, P1.1, P2.2);
impl_pattern_seq!(4; P0.0, P1.1, P2.2, P3.3);
impl_pattern_seq!(5; P0.0, P1.1, P2.2, P3.3, P4.4);
impl_pattern_seq!(6; P0.0, P1.1, P2.2, P3.3, P4.4, P5.5);
impl_pattern_seq!(7; P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6);
impl_pattern_seq!(8; P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6, P7.7);

/// Builder methods available on every pattern.
pub trait PatternExt: PatternNode + Sized {
    /// Run `pred` once this pattern has matched; the attempt succeeds only if
    /// it returns `true`. The predicate may read identifiers bound by the
    /// pattern.
    fn when<F: Fn() -> bool>(self, pred: F) -> Guard<Self, F> {
        Guard::new(self, pred)
    }
}

impl<P: PatternNode> PatternExt for P {}
