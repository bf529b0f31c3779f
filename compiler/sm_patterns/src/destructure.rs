//! Destructuring of tuples and sequences.
//!
//! [`Ds`] pairs sub-patterns with the positions of an aggregate:
//!
//! - tuples are matched field by field; the arity is checked by the type
//!   system,
//! - sequences ([`Sequence`]) must have exactly as many elements as there
//!   are sub-patterns, otherwise the pattern simply does not match.
//!
//! [`DsRest`] adds a rest marker between a head and a tail list. The marker
//! absorbs whatever the head and tail leave over. On sequences it can bind
//! that span as a borrowed view; on tuples the skipped fields have no common
//! type, so only the plain marker applies there. The [`ds!`](crate::ds)
//! macro builds either node from a single list.

use crate::context::Context;
use crate::ident::Id;
use crate::pattern::{match_pattern, Depth, IdProcess, Pattern, PatternNode, PatternSeq};
use crate::range::{rest_span, Sequence, TupleLike};

/// Positional destructure without a rest marker.
#[derive(Clone, Debug)]
pub struct Ds<Ps> {
    patterns: Ps,
}

/// Destructure an aggregate position by position: `ds((1, &x, __))`.
pub fn ds<Ps>(patterns: Ps) -> Ds<Ps> {
    Ds { patterns }
}

impl<Ps: PatternNode> PatternNode for Ds<Ps> {
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

impl<'v, S, Ps> Pattern<'v, S> for Ds<Ps>
where
    S: Sequence + ?Sized + 'v,
    Ps: PatternSeq<'v, S::Item>,
{
    fn match_impl(&self, value: &'v S, depth: Depth, ctx: &mut Context) -> bool {
        if value.seq_len() != Ps::LEN {
            tracing::trace!(shape = ?value.shape(), expected = Ps::LEN, "destructure size mismatch");
            return false;
        }
        self.patterns
            .match_each(&mut value.seq_iter(), depth + 1, ctx)
    }
}

impl<'v> Pattern<'v, ()> for Ds<()> {
    fn match_impl(&self, _value: &'v (), _depth: Depth, _ctx: &mut Context) -> bool {
        true
    }
}

macro_rules! impl_tuple_ds {
    ($($V:ident $P:ident . $idx:tt),+) => {
        impl<'v, $($V: 'v, $P: Pattern<'v, $V>),+> Pattern<'v, ($($V,)+)> for Ds<($($P,)+)> {
            fn match_impl(&self, value: &'v ($($V,)+), depth: Depth, ctx: &mut Context) -> bool {
                $( match_pattern(&value.$idx, &self.patterns.$idx, depth + 1, ctx) )&&+
            }
        }
    };
}

impl_tuple_ds!(V0 P0.0);
impl_tuple_ds!(V0 P0.0, V1 P1.1);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2, V3 P3.3);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2, V3 P3.3, V4 P4.4);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2, V3 P3.3, V4 P4.4, V5 P5.5);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2, V3 P3.3, V4 P4.4, V5 P5.5, V6 P6.6);
impl_tuple_ds!(V0 P0.0, V1 P1.1, V2 P2.2, V3 P3.3, V4 P4.4, V5 P5.5, V6 P6.6, V7 P7.7);

/// The rest marker: zero or more elements, bound to nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ooo;

pub fn ooo() -> Ooo {
    Ooo
}

impl Ooo {
    /// A rest marker that binds the span it absorbs to `binder`.
    pub fn bind<T>(self, binder: &Id<T>) -> OooBinder<T> {
        OooBinder {
            binder: binder.clone(),
        }
    }
}

/// A rest marker carrying a binder for the absorbed span.
pub struct OooBinder<T> {
    binder: Id<T>,
}

impl<T> Clone for OooBinder<T> {
    fn clone(&self) -> Self {
        OooBinder {
            binder: self.binder.clone(),
        }
    }
}

/// What may sit in the rest position of a [`DsRest`].
///
/// `W` is the view type of the sequence being matched. The view is built
/// lazily so markers without a binder never pay for it.
pub trait RestPattern<W>: PatternNode {
    fn match_rest<F>(&self, view: F, depth: Depth, ctx: &mut Context) -> bool
    where
        F: FnOnce() -> W;
}

impl PatternNode for Ooo {}

impl<W> RestPattern<W> for Ooo {
    #[inline]
    fn match_rest<F>(&self, _view: F, _depth: Depth, _ctx: &mut Context) -> bool
    where
        F: FnOnce() -> W,
    {
        true
    }
}

impl<T> PatternNode for OooBinder<T> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.binder.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        1
    }
}

impl<T: Clone> RestPattern<T> for OooBinder<T> {
    fn match_rest<F>(&self, view: F, depth: Depth, ctx: &mut Context) -> bool
    where
        F: FnOnce() -> T,
    {
        match_pattern(&view(), &self.binder, depth + 1, ctx)
    }
}

/// Destructure with a rest marker between `head` and `tail`.
#[derive(Clone, Debug)]
pub struct DsRest<Head, Rest, Tail> {
    head: Head,
    rest: Rest,
    tail: Tail,
}

/// `ds_rest((a,), ooo(), (b,))` is `ds![a, .., b]`.
pub fn ds_rest<Head, Rest, Tail>(head: Head, rest: Rest, tail: Tail) -> DsRest<Head, Rest, Tail> {
    DsRest { head, rest, tail }
}

impl<Head, Rest, Tail> PatternNode for DsRest<Head, Rest, Tail>
where
    Head: PatternNode,
    Rest: PatternNode,
    Tail: PatternNode,
{
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        self.head.process_ids(depth, process);
        self.rest.process_ids(depth, process);
        self.tail.process_ids(depth, process);
    }

    fn id_count(&self) -> usize {
        self.head.id_count() + self.rest.id_count() + self.tail.id_count()
    }

    fn slot_count(&self) -> usize {
        self.head.slot_count() + self.tail.slot_count()
    }
}

impl<'v, S, Head, Rest, Tail> Pattern<'v, S> for DsRest<Head, Rest, Tail>
where
    S: Sequence + ?Sized + 'v,
    Head: PatternSeq<'v, S::Item>,
    Rest: RestPattern<S::View<'v>>,
    Tail: PatternSeq<'v, S::Item>,
{
    fn match_impl(&self, value: &'v S, depth: Depth, ctx: &mut Context) -> bool {
        let len = value.seq_len();
        let Some(span) = rest_span(len, Head::LEN, Tail::LEN) else {
            tracing::trace!(len, head = Head::LEN, tail = Tail::LEN, "sequence too short for rest");
            return false;
        };

        if !self.head.match_each(&mut value.seq_iter(), depth + 1, ctx) {
            return false;
        }

        // The rest is settled at this node's own depth; its binder one below.
        let (start, end) = (span.start, span.end);
        let rest_matched = self
            .rest
            .match_rest(|| value.sub_view(start, end), depth, ctx);
        let process = if rest_matched {
            IdProcess::Confirm
        } else {
            IdProcess::Cancel
        };
        self.rest.process_ids(depth, process);
        if !rest_matched {
            return false;
        }

        self.tail
            .match_each(&mut value.seq_iter().skip(end), depth + 1, ctx)
    }
}

/// Leading sub-patterns of a tuple destructure, matched against the first
/// fields of `Tup`.
pub trait TupleHead<'v, Tup: 'v>: PatternNode + TupleLike {
    fn match_head(&self, value: &'v Tup, depth: Depth, ctx: &mut Context) -> bool;
}

/// Trailing sub-patterns of a tuple destructure, matched against the last
/// fields of `Tup`.
pub trait TupleTail<'v, Tup: 'v>: PatternNode + TupleLike {
    fn match_tail(&self, value: &'v Tup, depth: Depth, ctx: &mut Context) -> bool;
}

// Each field group is `(ValueType PatternType value_binding pattern_binding)`.

macro_rules! impl_tuple_head {
    (
        [$(($V:ident $P:ident $v:ident $p:ident))*]
        [$(($U:ident $Q:ident $u:ident $q:ident))*]
    ) => {
        impl<'v, $($V: 'v, $P: Pattern<'v, $V>,)* $($U: 'v,)*> TupleHead<'v, ($($V,)* $($U,)*)>
            for ($($P,)*)
        {
            #[allow(unused_variables)]
            fn match_head(
                &self,
                value: &'v ($($V,)* $($U,)*),
                depth: Depth,
                ctx: &mut Context,
            ) -> bool {
                let ($($v,)* ..) = value;
                let ($($p,)*) = self;
                $(
                    if !match_pattern($v, $p, depth, ctx) {
                        return false;
                    }
                )*
                true
            }
        }
    };
}

macro_rules! impl_tuple_tail {
    (
        [$(($U:ident $Q:ident $u:ident $q:ident))*]
        [$(($V:ident $P:ident $v:ident $p:ident))*]
    ) => {
        impl<'v, $($U: 'v,)* $($V: 'v, $P: Pattern<'v, $V>,)*> TupleTail<'v, ($($U,)* $($V,)*)>
            for ($($P,)*)
        {
            #[allow(unused_variables)]
            fn match_tail(
                &self,
                value: &'v ($($U,)* $($V,)*),
                depth: Depth,
                ctx: &mut Context,
            ) -> bool {
                let (.. $(, $v)*) = value;
                let ($($p,)*) = self;
                $(
                    if !match_pattern($v, $p, depth, ctx) {
                        return false;
                    }
                )*
                true
            }
        }
    };
}

// Every split of one arity into leading and trailing fields.
macro_rules! impl_tuple_splits {
    (@split [$($front:tt)*] []) => {
        impl_tuple_head!([$($front)*] []);
        impl_tuple_tail!([$($front)*] []);
    };
    (@split [$($front:tt)*] [$next:tt $($back:tt)*]) => {
        impl_tuple_head!([$($front)*] [$next $($back)*]);
        impl_tuple_tail!([$($front)*] [$next $($back)*]);
        impl_tuple_splits!(@split [$($front)* $next] [$($back)*]);
    };
    ($(($V:ident $P:ident $v:ident $p:ident))*) => {
        impl_tuple_splits!(@split [] [$(($V $P $v $p))*]);

        impl<'v, $($V: 'v,)* Head, Tail> Pattern<'v, ($($V,)*)> for DsRest<Head, Ooo, Tail>
        where
            Head: TupleHead<'v, ($($V,)*)>,
            Tail: TupleTail<'v, ($($V,)*)>,
        {
            fn match_impl(&self, value: &'v ($($V,)*), depth: Depth, ctx: &mut Context) -> bool {
                let arity = <($($V,)*) as TupleLike>::ARITY;
                if Head::ARITY + Tail::ARITY > arity {
                    tracing::trace!(
                        arity,
                        head = Head::ARITY,
                        tail = Tail::ARITY,
                        "tuple too short for rest"
                    );
                    return false;
                }
                self.head.match_head(value, depth + 1, ctx)
                    && self.tail.match_tail(value, depth + 1, ctx)
            }
        }
    };
}

impl_tuple_splits!();
impl_tuple_splits!((V0 P0 v0 p0));
impl_tuple_splits!((V0 P0 v0 p0) (V1 P1 v1 p1));
impl_tuple_splits!((V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2));
impl_tuple_splits!((V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2) (V3 P3 v3 p3));
impl_tuple_splits!((V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2) (V3 P3 v3 p3) (V4 P4 v4 p4));
impl_tuple_splits!(
    (V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2) (V3 P3 v3 p3) (V4 P4 v4 p4) (V5 P5 v5 p5)
);
impl_tuple_splits!(
    (V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2) (V3 P3 v3 p3) (V4 P4 v4 p4) (V5 P5 v5 p5)
    (V6 P6 v6 p6)
);
impl_tuple_splits!(
    (V0 P0 v0 p0) (V1 P1 v1 p1) (V2 P2 v2 p2) (V3 P3 v3 p3) (V4 P4 v4 p4) (V5 P5 v5 p5)
    (V6 P6 v6 p6) (V7 P7 v7 p7)
);

/// Destructure from a flat list, with at most one rest marker.
///
/// ```
/// # use sm_patterns::{ds, Id, __};
/// let first = Id::<i32>::new();
/// let rest = Id::<&[i32]>::new();
/// let _exact = ds![1, &first, __];
/// let _skip = ds![&first, .., 9];
/// let _bound = ds![&first, rest @ ..];
/// ```
///
/// `..` absorbs any number of elements or tuple fields; `name @ ..` also
/// binds the skipped elements of a sequence to the identifier `name`. A
/// second rest marker is a compile error.
#[macro_export]
macro_rules! ds {
    ($($items:tt)*) => {
        $crate::__ds_munch!(@head [] $($items)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ds_munch {
    (@head [$($head:expr,)*]) => {
        $crate::ds(($($head,)*))
    };
    (@head [$($head:expr,)*] .. $(, $($tail:tt)*)?) => {
        $crate::__ds_munch!(@tail [$($head,)*] [$crate::Ooo] [] $($($tail)*)?)
    };
    (@head [$($head:expr,)*] $binder:ident @ .. $(, $($tail:tt)*)?) => {
        $crate::__ds_munch!(@tail [$($head,)*] [$crate::Ooo.bind(&$binder)] [] $($($tail)*)?)
    };
    (@head [$($head:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::__ds_munch!(@head [$($head,)* $next,] $($($rest)*)?)
    };

    (@tail [$($head:expr,)*] [$marker:expr] [$($tail:expr,)*]) => {
        $crate::ds_rest(($($head,)*), $marker, ($($tail,)*))
    };
    (@tail $head:tt $marker:tt $tail:tt .. $($rest:tt)*) => {
        compile_error!("a destructure pattern takes at most one rest marker")
    };
    (@tail $head:tt $marker:tt $tail:tt $binder:ident @ .. $($rest:tt)*) => {
        compile_error!("a destructure pattern takes at most one rest marker")
    };
    (@tail $head:tt $marker:tt [$($tail:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::__ds_munch!(@tail $head $marker [$($tail,)* $next,] $($($rest)*)?)
    };
}
