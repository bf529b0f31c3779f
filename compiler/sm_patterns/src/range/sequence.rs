//! Range-like aggregates.

use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};
use std::slice;

use super::{Shape, Subrange};

/// A homogeneous aggregate with a forward traversal and a size.
///
/// `sub_view` must not copy elements: contiguous containers return a slice
/// and node-based ones return a [`Subrange`].
pub trait Sequence {
    type Item;

    type Iter<'a>: Iterator<Item = &'a Self::Item> + Clone
    where
        Self: 'a;

    /// Borrowed view of a `[start, end)` span.
    type View<'a>
    where
        Self: 'a;

    /// Element count when it is part of the type (arrays).
    const FIXED_LEN: Option<usize> = None;

    fn seq_len(&self) -> usize;

    fn seq_iter(&self) -> Self::Iter<'_>;

    /// # Panics
    ///
    /// Contiguous implementations panic when `start > end` or `end` exceeds
    /// the length, the same way slice indexing does.
    fn sub_view(&self, start: usize, end: usize) -> Self::View<'_>;

    fn shape(&self) -> Shape {
        match Self::FIXED_LEN {
            Some(len) => Shape::Fixed { len },
            None => Shape::Dynamic {
                len: self.seq_len(),
            },
        }
    }
}

/// The view type a rest binder receives for a sequence `S`.
pub type ViewOf<'a, S> = <S as Sequence>::View<'a>;

impl<T> Sequence for [T] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type View<'a> = &'a [T] where Self: 'a;

    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn sub_view(&self, start: usize, end: usize) -> &[T] {
        &self[start..end]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type View<'a> = &'a [T] where Self: 'a;

    const FIXED_LEN: Option<usize> = Some(N);

    #[inline]
    fn seq_len(&self) -> usize {
        N
    }

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn sub_view(&self, start: usize, end: usize) -> &[T] {
        &self[start..end]
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type View<'a> = &'a [T] where Self: 'a;

    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn sub_view(&self, start: usize, end: usize) -> &[T] {
        &self[start..end]
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;
    type View<'a> = Subrange<vec_deque::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn sub_view(&self, start: usize, end: usize) -> Self::View<'_> {
        Subrange::new(self.range(start..end), end - start)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;
    type View<'a> = Subrange<linked_list::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    // Linear in `start`: the list has no random access.
    fn sub_view(&self, start: usize, end: usize) -> Self::View<'_> {
        let mut begin = self.iter();
        for _ in 0..start {
            if begin.next().is_none() {
                break;
            }
        }
        Subrange::new(begin, end.saturating_sub(start))
    }
}
