//! Binding identifiers.
//!
//! An [`Id`] is the only pattern that stores anything. Its slot goes through
//! a small state machine driven by the depth of the attempts it takes part
//! in:
//!
//! ```text
//!            bind                confirm(d)
//!   Empty ─────────▶ Tentative ─────────────▶ Confirmed
//!     ▲                  │                        │
//!     └──── reset(d) ────┴────────────────────────┘
//!          (depth ≥ d)
//! ```
//!
//! A binding made while matching at depth `k` is undone by a cancel at any
//! depth `d ≤ k`, so backtracking out of an alternation or a failed
//! destructure forgets exactly what that branch bound. A confirm at depth
//! `d` lowers the binding's depth one level at a time as enclosing patterns
//! succeed; at depth 0 the binding belongs to the arm and is visible to its
//! guard and handler.
//!
//! What the slot stores depends on the identifier's type parameter:
//!
//! - `Id<T>` matching a `T` stores a clone. Meant for scalars and views.
//! - `Id<&T>` matching a `T` stores the borrow itself, so any type can be
//!   bound without copying it.
//! - `Id<Rc<R>>` matching a projected `R` that the [`Context`] holds shares
//!   the context's allocation with the handler.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::context::Context;
use crate::errors::{MatchError, MatchResult};
use crate::logic::{and_, And};
use crate::pattern::{Depth, IdProcess, Pattern, PatternNode};

/// Where a binding slot stands in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingState {
    Empty,
    /// Bound by an attempt that has not reported back yet.
    Tentative { depth: Depth },
    /// Bound, and every attempt up to `depth` succeeded.
    Confirmed { depth: Depth },
}

/// The slot behind an identifier: an optional value plus the depth of the
/// attempt that owns it.
pub struct Binding<T> {
    value: Option<T>,
    depth: Depth,
    confirmed: bool,
    eq: fn(&T, &T) -> bool,
}

impl<T> Binding<T> {
    pub fn new(eq: fn(&T, &T) -> bool) -> Self {
        Binding {
            value: None,
            depth: 0,
            confirmed: false,
            eq,
        }
    }

    /// Store `candidate` if the slot is empty, otherwise require it to equal
    /// the stored value. Depth is left to `confirm`/`reset`.
    pub fn bind(&mut self, candidate: &T) -> bool
    where
        T: Clone,
    {
        match &self.value {
            Some(bound) => (self.eq)(candidate, bound),
            None => {
                self.value = Some(candidate.clone());
                self.confirmed = false;
                true
            }
        }
    }

    /// Undo the binding if it was made at `depth` or deeper.
    pub fn reset(&mut self, depth: Depth) {
        if self.depth >= depth {
            self.value = None;
            self.confirmed = false;
            self.depth = depth;
        }
    }

    /// Record that the attempt at `depth` succeeded.
    pub fn confirm(&mut self, depth: Depth) {
        if self.depth > depth || self.depth == 0 {
            debug_assert!(
                self.depth == 0 || self.depth == depth || self.depth == depth + 1,
                "confirm skipped a level: slot at depth {}, confirming {depth}",
                self.depth,
            );
            self.depth = depth;
        }
        self.confirmed = self.value.is_some();
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn take(&mut self) -> Option<T> {
        self.confirmed = false;
        self.value.take()
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn state(&self) -> BindingState {
        match (&self.value, self.confirmed) {
            (None, _) => BindingState::Empty,
            (Some(_), false) => BindingState::Tentative { depth: self.depth },
            (Some(_), true) => BindingState::Confirmed { depth: self.depth },
        }
    }
}

impl<T: PartialEq> Default for Binding<T> {
    fn default() -> Self {
        Binding::new(T::eq)
    }
}

struct Slot<T> {
    binding: Binding<T>,
    name: Option<&'static str>,
}

/// A binding identifier.
///
/// Clones alias the same slot, so the copy placed in a pattern and the copy
/// read by a handler see the same value. Identifiers can be used in patterns
/// by value or by reference (`&x`).
pub struct Id<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Id<T> {
    pub fn new() -> Self
    where
        T: PartialEq,
    {
        Id::with_equality(T::eq)
    }

    /// An identifier whose name shows up in errors and traces.
    pub fn named(name: &'static str) -> Self
    where
        T: PartialEq,
    {
        let id = Id::new();
        id.slot.borrow_mut().name = Some(name);
        id
    }

    /// An identifier that compares repeated bindings with `eq` instead of
    /// `PartialEq`.
    pub fn with_equality(eq: fn(&T, &T) -> bool) -> Self {
        Id {
            slot: Rc::new(RefCell::new(Slot {
                binding: Binding::new(eq),
                name: None,
            })),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.slot.borrow().name
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().binding.value().is_some()
    }

    pub fn state(&self) -> BindingState {
        self.slot.borrow().binding.state()
    }

    pub fn depth(&self) -> Depth {
        self.slot.borrow().binding.depth()
    }

    /// Whether `self` and `other` share one slot.
    pub fn same_slot(&self, other: &Id<T>) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Run `f` on the bound value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> MatchResult<R> {
        let slot = self.slot.borrow();
        match slot.binding.value() {
            Some(value) => Ok(f(value)),
            None => Err(MatchError::invalid_binding_access(slot.name)),
        }
    }

    /// A copy of the bound value.
    pub fn try_get(&self) -> MatchResult<T>
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// A copy of the bound value.
    ///
    /// # Panics
    ///
    /// Panics when nothing is bound. Handlers only run after their pattern
    /// matched, so this points at an identifier read outside of the pattern
    /// that binds it.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Move the bound value out, leaving the slot empty.
    pub fn take(&self) -> MatchResult<T> {
        let mut slot = self.slot.borrow_mut();
        let name = slot.name;
        slot.binding
            .take()
            .ok_or_else(|| MatchError::invalid_binding_access(name))
    }

    /// Bind the value only if it also matches `pattern`.
    pub fn at<P>(&self, pattern: P) -> And<(P, Id<T>)> {
        and_((pattern, self.clone()))
    }

    fn bind(&self, candidate: &T) -> bool
    where
        T: Clone,
    {
        let mut slot = self.slot.borrow_mut();
        let bound = slot.binding.bind(candidate);
        tracing::trace!(name = slot.name, bound, "bind identifier");
        bound
    }
}

impl<T: PartialEq> Default for Id<T> {
    fn default() -> Self {
        Id::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Id {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Id")
            .field("name", &slot.name)
            .field("value", &slot.binding.value())
            .field("state", &slot.binding.state())
            .finish()
    }
}

impl<T> PatternNode for Id<T> {
    fn process_ids(&self, depth: Depth, process: IdProcess) {
        let mut slot = self.slot.borrow_mut();
        match process {
            IdProcess::Cancel => slot.binding.reset(depth),
            IdProcess::Confirm => slot.binding.confirm(depth),
        }
    }

    fn id_count(&self) -> usize {
        1
    }
}

// Scalars and other cheap values: the slot keeps its own copy.
impl<'v, T: Clone + 'v> Pattern<'v, T> for Id<T> {
    #[inline]
    fn match_impl(&self, value: &'v T, _depth: Depth, _ctx: &mut Context) -> bool {
        self.bind(value)
    }
}

// Everything else: the slot keeps a borrow of the matched value, which need
// not be `Clone`.
impl<'v, T: ?Sized + 'v> Pattern<'v, T> for Id<&'v T> {
    #[inline]
    fn match_impl(&self, value: &'v T, _depth: Depth, _ctx: &mut Context) -> bool {
        self.bind(&value)
    }
}

// Projected values parked in the context: the slot shares the context's
// allocation, so the value outlives the attempt without being copied.
impl<'v, R: 'static> Pattern<'v, R> for Id<Rc<R>> {
    fn match_impl(&self, value: &'v R, _depth: Depth, ctx: &mut Context) -> bool {
        match ctx.find_held(value) {
            Some(held) => self.bind(&held),
            None => {
                tracing::trace!(name = self.name(), "value is not held by the context");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
