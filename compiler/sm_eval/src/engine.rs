//! The match engine.
//!
//! Arms are tried strictly in order against one value, each at depth 0 and
//! each from an empty view of one shared [`Context`]. The first arm whose
//! pattern matches runs its handler; its identifiers are released afterwards.
//!
//! Two entry points differ only in what happens when nothing matches:
//! [`evaluate`] is an expression and reports [`MatchError::NoMatch`], while
//! [`execute`] is a statement over `()` handlers and does nothing.

use sm_patterns::{Context, MatchError, MatchResult};

use crate::arm::ArmList;
use crate::stack::ensure_sufficient_stack;

/// Match `value` against `arms` and return the first matching handler's
/// result, converted to the type unified across all handlers.
#[tracing::instrument(level = "trace", skip_all, fields(arms = A::LEN))]
pub fn evaluate<'v, V, A>(value: &'v V, arms: A) -> MatchResult<A::Output>
where
    V: ?Sized + 'v,
    A: ArmList<'v, V>,
{
    ensure_sufficient_stack(|| {
        let mut ctx = Context::with_capacity(arms.slot_count());
        arms.dispatch(value, &mut ctx)
            .ok_or_else(|| MatchError::no_match(A::LEN))
    })
}

/// Match `value` against `arms` for their side effects. A value no arm
/// matches is not an error.
#[tracing::instrument(level = "trace", skip_all, fields(arms = A::LEN))]
pub fn execute<'v, V, A>(value: &'v V, arms: A)
where
    V: ?Sized + 'v,
    A: ArmList<'v, V, Output = ()>,
{
    ensure_sufficient_stack(|| {
        let mut ctx = Context::with_capacity(arms.slot_count());
        if arms.dispatch(value, &mut ctx).is_none() {
            tracing::debug!("no arm matched, statement falls through");
        }
    });
}

#[cfg(test)]
mod tests;
