//! Alternation, conjunction and negation.
//!
//! All three match their sub-patterns one level deeper than themselves, so a
//! failing branch cancels its own bindings without touching bindings that
//! belong to the enclosing pattern.

use crate::context::Context;
use crate::pattern::{match_pattern, Depth, IdProcess, Pattern, PatternNode, PatternSeq};

/// Matches when any sub-pattern matches, trying them left to right.
///
/// Alternatives after the first match are not attempted, so their
/// identifiers stay untouched.
#[derive(Clone, Debug)]
pub struct Or<Ps> {
    patterns: Ps,
}

/// Alternation over a tuple of patterns: `or_((1, 2, 3))`.
pub fn or_<Ps>(patterns: Ps) -> Or<Ps> {
    Or { patterns }
}

impl<Ps: PatternNode> PatternNode for Or<Ps> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.patterns.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        self.patterns.id_count()
    }

    fn slot_count(&self) -> usize {
        self.patterns.slot_count()
    }
}

impl<'v, V, Ps> Pattern<'v, V> for Or<Ps>
where
    V: ?Sized + 'v,
    Ps: PatternSeq<'v, V>,
{
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        self.patterns.match_any(value, depth + 1, ctx)
    }
}

/// Matches when every sub-pattern matches the same value, stopping at the
/// first failure.
#[derive(Clone, Debug)]
pub struct And<Ps> {
    patterns: Ps,
}

/// Conjunction over a tuple of patterns: `and_((meet(is_even), x))`.
pub fn and_<Ps>(patterns: Ps) -> And<Ps> {
    And { patterns }
}

impl<Ps: PatternNode> PatternNode for And<Ps> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.patterns.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        self.patterns.id_count()
    }

    fn slot_count(&self) -> usize {
        self.patterns.slot_count()
    }
}

impl<'v, V, Ps> Pattern<'v, V> for And<Ps>
where
    V: ?Sized + 'v,
    Ps: PatternSeq<'v, V>,
{
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        self.patterns.match_all(value, depth + 1, ctx)
    }
}

/// Matches when the inner pattern does not.
///
/// Whatever the inner pattern binds is cancelled again: either it failed, or
/// it succeeded and the negation as a whole fails.
#[derive(Clone, Debug)]
pub struct Not<P> {
    pattern: P,
}

pub fn not_<P>(pattern: P) -> Not<P> {
    Not { pattern }
}

impl<P: PatternNode> PatternNode for Not<P> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.pattern.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        self.pattern.id_count()
    }

    fn slot_count(&self) -> usize {
        self.pattern.slot_count()
    }
}

impl<'v, V, P> Pattern<'v, V> for Not<P>
where
    V: ?Sized + 'v,
    P: Pattern<'v, V>,
{
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        !match_pattern(value, &self.pattern, depth + 1, ctx)
    }
}

/// Alternation without the tuple: `or!(1, 2, 3)`.
#[macro_export]
macro_rules! or {
    ($($pattern:expr),+ $(,)?) => {
        $crate::or_(($($pattern,)+))
    };
}

/// Conjunction without the tuple: `and!(meet(is_even), x)`.
#[macro_export]
macro_rules! and {
    ($($pattern:expr),+ $(,)?) => {
        $crate::and_(($($pattern,)+))
    };
}
