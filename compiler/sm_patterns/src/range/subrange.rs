//! Iterator-pair views over node-based sequences.

use std::fmt;
use std::iter::Take;

/// A `[begin, begin + len)` window over a sequence, expressed as a cloneable
/// iterator positioned at the first element plus an element count.
///
/// Cloning a `Subrange` clones the iterator, never the elements.
#[derive(Clone)]
pub struct Subrange<I> {
    begin: I,
    len: usize,
}

impl<I> Subrange<I> {
    pub fn new(begin: I, len: usize) -> Self {
        Subrange { begin, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<I: Iterator + Clone> Subrange<I> {
    /// Walk the window from the start. Each call starts over.
    pub fn iter(&self) -> Take<I> {
        self.begin.clone().take(self.len)
    }
}

impl<'a, T: Clone + 'a, I> Subrange<I>
where
    I: Iterator<Item = &'a T> + Clone,
{
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<I: Iterator + Clone> IntoIterator for &Subrange<I> {
    type Item = I::Item;
    type IntoIter = Take<I>;

    fn into_iter(self) -> Take<I> {
        self.iter()
    }
}

impl<I, J> PartialEq<Subrange<J>> for Subrange<I>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
    I::Item: PartialEq<J::Item>,
{
    fn eq(&self, other: &Subrange<J>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, T, I> PartialEq<[T]> for Subrange<I>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T, I, const N: usize> PartialEq<[T; N]> for Subrange<I>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<I> fmt::Debug for Subrange<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
