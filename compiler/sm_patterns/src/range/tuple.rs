//! Tuple-like aggregates.

use super::Shape;

/// A heterogeneous aggregate whose arity is part of its type.
///
/// Per-position access is plain field access (`.0`, `.1`, ...), so the only
/// thing this trait adds is the arity itself.
pub trait TupleLike {
    const ARITY: usize;

    fn shape(&self) -> Shape {
        Shape::Tuple { arity: Self::ARITY }
    }
}

impl TupleLike for () {
    const ARITY: usize = 0;
}

macro_rules! impl_tuple_like {
    ($arity:expr; $($T:ident),+) => {
        impl<$($T),+> TupleLike for ($($T,)+) {
            const ARITY: usize = $arity;
        }
    };
}

impl_tuple_like!(1; A);
impl_tuple_like!(2; A, B);
impl_tuple_like!(3; A, B, C);
impl_tuple_like!(4; A, B, C, D);
impl_tuple_like!(5; A, B, C, D, E);
impl_tuple_like!(6; A, B, C, D, E, F);
impl_tuple_like!(7; A, B, C, D, E, F, G);
impl_tuple_like!(8; A, B, C, D, E, F, G, H);
