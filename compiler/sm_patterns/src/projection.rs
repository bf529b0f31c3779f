//! Projection: match a function of the value instead of the value itself.

use std::mem;

use crate::context::Context;
use crate::pattern::{match_pattern, Depth, IdProcess, Pattern, PatternNode};

/// Applies a function to the value and matches the result against an inner
/// pattern, one level deeper.
///
/// Results that own resources are parked in the [`Context`] for the rest of
/// the attempt, where an `Id<Rc<R>>` can bind them; plain-data results stay
/// on the stack. Accessors that return a borrow of the value go through
/// [`app_ref`] instead.
#[derive(Clone)]
pub struct App<F, P> {
    unary: F,
    pattern: P,
}

/// Match `pattern` against `unary(value)`.
pub fn app<F, P>(unary: F, pattern: P) -> App<F, P> {
    App { unary, pattern }
}

impl<F, P: PatternNode> PatternNode for App<F, P> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.pattern.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        self.pattern.id_count()
    }

    fn slot_count(&self) -> usize {
        1 + self.pattern.slot_count()
    }
}

impl<'v, V, F, R, P> Pattern<'v, V> for App<F, P>
where
    V: ?Sized + 'v,
    F: Fn(&'v V) -> R,
    R: 'static,
    P: for<'r> Pattern<'r, R>,
{
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        let projected = (self.unary)(value);
        if mem::needs_drop::<R>() {
            let held = ctx.hold(projected);
            match_pattern(&*held, &self.pattern, depth + 1, ctx)
        } else {
            match_pattern(&projected, &self.pattern, depth + 1, ctx)
        }
    }
}

/// Applies an accessor that borrows from the value, such as a field getter,
/// and matches the borrowed part one level deeper.
///
/// Nothing is copied or held: the inner pattern sees the part with the
/// lifetime of the matched value, so an `Id<&U>` can bind it.
#[derive(Clone)]
pub struct AppRef<F, P> {
    accessor: F,
    pattern: P,
}

/// Match `pattern` against the part of the value `accessor` borrows:
/// `app_ref(|p: &Person| &p.name, val("bob"))`.
pub fn app_ref<V, U, F, P>(accessor: F, pattern: P) -> AppRef<F, P>
where
    V: ?Sized,
    U: ?Sized,
    F: for<'a> Fn(&'a V) -> &'a U,
{
    AppRef { accessor, pattern }
}

impl<F, P: PatternNode> PatternNode for AppRef<F, P> {
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

impl<'v, V, U, F, P> Pattern<'v, V> for AppRef<F, P>
where
    V: ?Sized + 'v,
    U: ?Sized + 'v,
    F: Fn(&'v V) -> &'v U,
    P: Pattern<'v, U>,
{
    #[inline]
    fn match_impl(&self, value: &'v V, depth: Depth, ctx: &mut Context) -> bool {
        match_pattern((self.accessor)(value), &self.pattern, depth + 1, ctx)
    }
}
