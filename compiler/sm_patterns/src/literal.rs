//! Patterns that never bind: literals and the wildcard.

use crate::context::Context;
use crate::pattern::{Depth, Pattern, PatternNode};

/// Matches anything and binds nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wildcard;

/// The wildcard pattern.
#[allow(non_upper_case_globals, clippy::just_underscores_and_digits)]
pub const __: Wildcard = Wildcard;

impl PatternNode for Wildcard {}

impl<'v, V: ?Sized + 'v> Pattern<'v, V> for Wildcard {
    #[inline]
    fn match_impl(&self, _value: &'v V, _depth: Depth, _ctx: &mut Context) -> bool {
        true
    }
}

// Primitive literals match values of their own type by equality.

macro_rules! impl_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PatternNode for $ty {}

            impl<'v> Pattern<'v, $ty> for $ty {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn match_impl(&self, value: &'v $ty, _depth: Depth, _ctx: &mut Context) -> bool {
                    self == value
                }
            }
        )+
    };
}

impl_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

/// A literal of any type comparable with the matched value.
///
/// Covers what the built-in literal impls do not: string slices against
/// `String`, user types, cross-type comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Val<T>(pub T);

/// Match values equal to `expected`.
pub fn val<T>(expected: T) -> Val<T> {
    Val(expected)
}

impl<T> PatternNode for Val<T> {}

impl<'v, V, T> Pattern<'v, V> for Val<T>
where
    V: ?Sized + 'v,
    T: PartialEq<V>,
{
    #[inline]
    fn match_impl(&self, value: &'v V, _depth: Depth, _ctx: &mut Context) -> bool {
        self.0 == *value
    }
}
