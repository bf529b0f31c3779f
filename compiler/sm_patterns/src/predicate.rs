//! Predicate patterns: value predicates and post-match guards.

use crate::context::Context;
use crate::pattern::{match_pattern, Depth, IdProcess, Pattern, PatternNode};

/// Matches values satisfying a predicate.
#[derive(Clone)]
pub struct Meet<F> {
    pred: F,
}

/// Match values for which `pred` returns `true`.
pub fn meet<F>(pred: F) -> Meet<F> {
    Meet { pred }
}

impl<F> PatternNode for Meet<F> {}

impl<'v, V, F> Pattern<'v, V> for Meet<F>
where
    V: ?Sized + 'v,
    F: Fn(&V) -> bool,
{
    #[inline]
    fn match_impl(&self, value: &'v V, _depth: Depth, _ctx: &mut Context) -> bool {
        (self.pred)(value)
    }
}

/// A pattern followed by a nullary check.
///
/// The check runs only after the structural part matched, so it can read
/// any identifier the pattern bound.
#[derive(Clone)]
pub struct Guard<P, F> {
    pattern: P,
    pred: F,
}

impl<P, F> Guard<P, F> {
    pub fn new(pattern: P, pred: F) -> Self {
        Guard { pattern, pred }
    }
}

/// Free-function form of [`PatternExt::when`](crate::PatternExt::when).
pub fn guard<P, F: Fn() -> bool>(pattern: P, pred: F) -> Guard<P, F> {
    Guard::new(pattern, pred)
}

impl<P: PatternNode, F> PatternNode for Guard<P, F> {
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

impl<'v, V, P, F> Pattern<'v, V> for Guard<P, F>
where
    V: ?Sized + 'v,
    P: Pattern<'v, V>,
    F: Fn() -> bool,
{
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        match_pattern(value, &self.pattern, depth + 1, ctx) && (self.pred)()
    }
}
