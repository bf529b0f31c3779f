//! Arms: a pattern paired with a handler.

use sm_patterns::{match_pattern, Context, IdProcess, Pattern};

use crate::unify::Unify;

/// One arm of a match: if `pattern` matches, `handler` produces the result.
///
/// Handlers take no arguments; they read what the pattern bound through the
/// identifiers they share with it.
#[derive(Clone)]
pub struct Arm<P, H> {
    pattern: P,
    handler: H,
}

pub fn arm<P, H>(pattern: P, handler: H) -> Arm<P, H> {
    Arm { pattern, handler }
}

impl<P, H> Arm<P, H> {
    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Try the arm against `value`. On a match the handler runs, then every
    /// identifier in the pattern is released so the next match starts from
    /// empty slots.
    pub fn attempt<'v, V, R>(self, value: &'v V, ctx: &mut Context) -> Option<R>
    where
        V: ?Sized + 'v,
        P: Pattern<'v, V>,
        H: FnOnce() -> R,
    {
        ctx.begin_attempt();
        if !match_pattern(value, &self.pattern, 0, ctx) {
            return None;
        }
        let output = (self.handler)();
        self.pattern.process_ids(0, IdProcess::Cancel);
        Some(output)
    }
}

/// A handler returning a clone of `value`.
pub fn expr<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// An ordered list of arms (a tuple of [`Arm`]s) that can be matched against
/// values of type `V`.
pub trait ArmList<'v, V: ?Sized + 'v> {
    /// Result type unified across all handlers.
    type Output;

    /// Number of arms.
    const LEN: usize;

    /// Context slots the arms need, at most.
    fn slot_count(&self) -> usize;

    /// Try the arms in order and return the result of the first one that
    /// matches.
    fn dispatch(self, value: &'v V, ctx: &mut Context) -> Option<Self::Output>;
}

macro_rules! impl_arm_list {
    ($len:expr; $rets:ty; $($P:ident $H:ident $R:ident $arm:ident $idx:tt),+) => {
        impl<'v, V, $($P, $H, $R),+> ArmList<'v, V> for ($(Arm<$P, $H>,)+)
        where
            V: ?Sized + 'v,
            $( $P: Pattern<'v, V>, $H: FnOnce() -> $R, )+
            $rets: Unify,
            $( $R: Into<<$rets as Unify>::Output>, )+
        {
            type Output = <$rets as Unify>::Output;

            const LEN: usize = $len;

            fn slot_count(&self) -> usize {
                0 $( + self.$idx.pattern.slot_count() )+
            }

            fn dispatch(self, value: &'v V, ctx: &mut Context) -> Option<Self::Output> {
                let ($($arm,)+) = self;
                $(
                    if let Some(output) = $arm.attempt(value, ctx) {
                        tracing::trace!(arm = $idx, "arm matched");
                        return Some(output.into());
                    }
                )+
                None
            }
        }
    };
}

impl_arm_list!(1; (R0,); P0 H0 R0 a0 0);
impl_arm_list!(2; (R0, R1); P0 H0 R0 a0 0, P1 H1 R1 a1 1);
impl_arm_list!(3; (R0, R1, R2); P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2);
impl_arm_list!(4; (R0, R1, R2, R3); P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2, P3 H3 R3 a3 3);
impl_arm_list!(
    5; (R0, R1, R2, R3, R4);
    P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2, P3 H3 R3 a3 3, P4 H4 R4 a4 4
);
impl_arm_list!(
    6; (R0, R1, R2, R3, R4, R5);
    P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2, P3 H3 R3 a3 3, P4 H4 R4 a4 4,
    P5 H5 R5 a5 5
);
impl_arm_list!(
    7; (R0, R1, R2, R3, R4, R5, R6);
    P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2, P3 H3 R3 a3 3, P4 H4 R4 a4 4,
    P5 H5 R5 a5 5, P6 H6 R6 a6 6
);
impl_arm_list!(
    8; (R0, R1, R2, R3, R4, R5, R6, R7);
    P0 H0 R0 a0 0, P1 H1 R1 a1 1, P2 H2 R2 a2 2, P3 H3 R3 a3 3, P4 H4 R4 a4 4,
    P5 H5 R5 a5 5, P6 H6 R6 a6 6, P7 H7 R7 a7 7
);
