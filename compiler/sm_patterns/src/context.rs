//! Per-invocation storage for projected values.

use std::any::Any;
use std::ptr;
use std::rc::Rc;

use smallvec::SmallVec;

/// Slots kept inline before the context spills to the heap.
const INLINE_SLOTS: usize = 4;

/// Transient storage owned by one match invocation.
///
/// A projection whose result needs dropping parks that result here so it
/// stays alive while the rest of the arm is matched, and an `Id<Rc<R>>` can
/// bind it by sharing the allocation ([`Context::find_held`]). Every arm
/// attempt starts from an empty view ([`Context::begin_attempt`]); the
/// storage itself is reused across the arms of one invocation and never
/// shared between invocations.
pub struct Context {
    slots: SmallVec<[Rc<dyn Any>; INLINE_SLOTS]>,
}

impl Context {
    /// Create a context able to hold `capacity` projected values without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Context {
            slots: SmallVec::with_capacity(capacity),
        }
    }

    /// Forget everything held by the previous attempt.
    pub fn begin_attempt(&mut self) {
        self.slots.clear();
    }

    /// Keep `value` alive until the next attempt and hand back a handle to it.
    pub fn hold<R: 'static>(&mut self, value: R) -> Rc<R> {
        let held = Rc::new(value);
        self.slots.push(Rc::clone(&held) as Rc<dyn Any>);
        held
    }

    /// The `index`-th value held during the current attempt, if it has type `R`.
    pub fn held<R: 'static>(&self, index: usize) -> Option<Rc<R>> {
        let slot = self.slots.get(index)?;
        Rc::clone(slot).downcast::<R>().ok()
    }

    /// The held value `value` points into, if this attempt parked it here.
    ///
    /// Identifiers use this to share a projected value with the handler
    /// instead of copying it.
    pub fn find_held<R: 'static>(&self, value: &R) -> Option<Rc<R>> {
        self.slots.iter().rev().find_map(|slot| {
            let held = Rc::clone(slot).downcast::<R>().ok()?;
            ptr::eq(&*held, value).then_some(held)
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::with_capacity(0)
    }
}
