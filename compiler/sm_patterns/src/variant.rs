//! Patterns over `Option` and `Result`.

use crate::context::Context;
use crate::pattern::{match_pattern, Depth, IdProcess, Pattern, PatternNode};

macro_rules! wrapping_node {
    ($name:ident) => {
        impl<P: PatternNode> PatternNode for $name<P> {
            fn process_ids(&self, depth: Depth, process: IdProcess) {
                self.0.process_ids(depth, process);
            }

            fn id_count(&self) -> usize {
                self.0.id_count()
            }

            fn slot_count(&self) -> usize {
                self.0.slot_count()
            }
        }
    };
}

/// `Some(inner)` whose payload matches `P`.
#[derive(Clone, Debug)]
pub struct SomeOf<P>(P);

pub fn some<P>(pattern: P) -> SomeOf<P> {
    SomeOf(pattern)
}

wrapping_node!(SomeOf);

impl<'v, T: 'v, P: Pattern<'v, T>> Pattern<'v, Option<T>> for SomeOf<P> {
    fn match_impl(&self, value: &'v Option<T>, depth: Depth, ctx: &mut Context) -> bool {
        match value {
            Some(inner) => match_pattern(inner, &self.0, depth + 1, ctx),
            None => false,
        }
    }
}

/// Matches `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoneOf;

pub fn none() -> NoneOf {
    NoneOf
}

impl PatternNode for NoneOf {}

impl<'v, T: 'v> Pattern<'v, Option<T>> for NoneOf {
    fn match_impl(&self, value: &'v Option<T>, _depth: Depth, _ctx: &mut Context) -> bool {
        value.is_none()
    }
}

/// `Ok(inner)` whose payload matches `P`.
#[derive(Clone, Debug)]
pub struct OkOf<P>(P);

pub fn ok<P>(pattern: P) -> OkOf<P> {
    OkOf(pattern)
}

wrapping_node!(OkOf);

impl<'v, T: 'v, E: 'v, P: Pattern<'v, T>> Pattern<'v, Result<T, E>> for OkOf<P> {
    fn match_impl(&self, value: &'v Result<T, E>, depth: Depth, ctx: &mut Context) -> bool {
        match value {
            Ok(inner) => match_pattern(inner, &self.0, depth + 1, ctx),
            Err(_) => false,
        }
    }
}

/// `Err(inner)` whose payload matches `P`.
#[derive(Clone, Debug)]
pub struct ErrOf<P>(P);

pub fn err<P>(pattern: P) -> ErrOf<P> {
    ErrOf(pattern)
}

wrapping_node!(ErrOf);

impl<'v, T: 'v, E: 'v, P: Pattern<'v, E>> Pattern<'v, Result<T, E>> for ErrOf<P> {
    fn match_impl(&self, value: &'v Result<T, E>, depth: Depth, ctx: &mut Context) -> bool {
        match value {
            Err(inner) => match_pattern(inner, &self.0, depth + 1, ctx),
            Ok(_) => false,
        }
    }
}
