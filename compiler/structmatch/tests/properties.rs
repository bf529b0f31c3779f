//! Property-based tests for matching semantics.
//!
//! These cover the guarantees callers rely on:
//! 1. Wildcards and negations never leave bindings behind
//! 2. Identifiers hand the matched value to the handler and are released after
//! 3. Repeated identifiers unify, rest markers capture exactly the middle span
//! 4. The binding slot follows its depth-keyed state machine for arbitrary
//!    operation sequences

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use structmatch::prelude::*;
use structmatch::Binding;

// -- Binding state machine --

#[derive(Clone, Copy, Debug)]
enum Op {
    Bind(i8),
    Reset(u32),
    Confirm(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3i8..3).prop_map(Op::Bind),
        (0u32..4).prop_map(Op::Reset),
        (0u32..4).prop_map(Op::Confirm),
    ]
}

/// Straight-line rendition of the slot transitions.
#[derive(Clone, Copy, Debug, Default)]
struct Model {
    value: Option<i8>,
    depth: u32,
    confirmed: bool,
}

impl Model {
    fn bind(&mut self, candidate: i8) -> bool {
        match self.value {
            Some(bound) => bound == candidate,
            None => {
                self.value = Some(candidate);
                self.confirmed = false;
                true
            }
        }
    }

    fn reset(&mut self, depth: u32) {
        if self.depth >= depth {
            *self = Model {
                value: None,
                depth,
                confirmed: false,
            };
        }
    }

    /// Confirms only ever step one level up during real matching.
    fn confirm_is_well_formed(&self, depth: u32) -> bool {
        let promotes = self.depth > depth || self.depth == 0;
        !promotes || self.depth == 0 || self.depth == depth || self.depth == depth + 1
    }

    fn confirm(&mut self, depth: u32) {
        if self.depth > depth || self.depth == 0 {
            self.depth = depth;
        }
        self.confirmed = self.value.is_some();
    }

    fn state(&self) -> BindingState {
        match (self.value, self.confirmed) {
            (None, _) => BindingState::Empty,
            (Some(_), false) => BindingState::Tentative { depth: self.depth },
            (Some(_), true) => BindingState::Confirmed { depth: self.depth },
        }
    }
}

proptest! {
    #[test]
    fn binding_follows_state_machine(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut binding = Binding::<i8>::default();
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Bind(v) => prop_assert_eq!(binding.bind(&v), model.bind(v)),
                Op::Reset(d) => {
                    let undone = binding.depth() >= d;
                    binding.reset(d);
                    model.reset(d);
                    if undone {
                        prop_assert_eq!(binding.state(), BindingState::Empty);
                    }
                }
                Op::Confirm(d) => {
                    if !model.confirm_is_well_formed(d) {
                        continue;
                    }
                    let before = binding.depth();
                    binding.confirm(d);
                    model.confirm(d);
                    prop_assert!(before == 0 || binding.depth() <= before);
                }
            }
            prop_assert_eq!(binding.state(), model.state());
            prop_assert_eq!(binding.depth(), model.depth);
            prop_assert_eq!(binding.value().copied(), model.value);
        }
    }
}

// -- Matching --

proptest! {
    #[test]
    fn wildcard_matches_everything_and_binds_nothing(value in any::<i64>()) {
        let untouched = Id::<i64>::new();
        let out = evaluate(&value, (arm(__, || untouched.state()),));
        prop_assert_eq!(out, Ok(BindingState::Empty));
    }

    #[test]
    fn identifier_hands_value_to_handler(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let x = Id::<Vec<i32>>::new();
        let out = evaluate(&values, (arm(&x, || x.get()),));
        prop_assert_eq!(out, Ok(values.clone()));
        prop_assert_eq!(x.state(), BindingState::Empty);
    }

    #[test]
    fn repeated_identifier_matches_iff_equal(a in -5i32..5, b in -5i32..5) {
        let x = Id::<i32>::new();
        let out = evaluate(&(a, b), (arm(ds((&x, &x)), || true), arm(__, || false)));
        prop_assert_eq!(out, Ok(a == b));
    }

    #[test]
    fn rest_captures_the_middle(values in prop::collection::vec(any::<u16>(), 2..24)) {
        let first = Id::<u16>::new();
        let last = Id::<u16>::new();
        let middle = Id::<&[u16]>::new();
        let out = evaluate(
            &values,
            (arm(ds![&first, middle @ .., &last], || {
                (first.get(), middle.get().to_vec(), last.get())
            }),),
        );
        let n = values.len();
        prop_assert_eq!(out, Ok((values[0], values[1..n - 1].to_vec(), values[n - 1])));
    }

    #[test]
    fn rest_position_is_respected(
        values in prop::collection::vec(0u8..4, 0..12),
        head in 0usize..3,
    ) {
        // `head` leading wildcards, a bound rest, two trailing wildcards.
        let rest = Id::<&[u8]>::new();
        let captured = match head {
            0 => evaluate(&values, (arm(ds![rest @ .., __, __], || rest.get().len()),)),
            1 => evaluate(&values, (arm(ds![__, rest @ .., __, __], || rest.get().len()),)),
            _ => evaluate(&values, (arm(ds![__, __, rest @ .., __, __], || rest.get().len()),)),
        };
        let fixed = head + 2;
        if values.len() >= fixed {
            prop_assert_eq!(captured, Ok(values.len() - fixed));
        } else {
            prop_assert_eq!(captured, Err(MatchError::NoMatch { arms: 1 }));
        }
    }

    #[test]
    fn alternation_stops_at_first_match(value in any::<i16>()) {
        let x = Id::<i16>::new();
        let y = Id::<i16>::new();
        let out = evaluate(&value, (arm(or_((&x, &y)), || (x.is_bound(), y.is_bound())),));
        prop_assert_eq!(out, Ok((true, false)));
    }

    #[test]
    fn negation_never_binds(value in any::<i32>(), other in any::<i32>()) {
        let x = Id::<i32>::new();
        let out = evaluate(
            &value,
            (arm(not_(and_((&x, other))), || x.is_bound()), arm(__, || x.is_bound())),
        );
        prop_assert_eq!(out, Ok(false));
    }

    #[test]
    fn no_arm_means_no_match_error(value in 10u32..1000) {
        let out = evaluate(&value, (arm(0u32, || ()), arm(1u32, || ())));
        prop_assert_eq!(out, Err(MatchError::NoMatch { arms: 2 }));
    }

    #[test]
    fn failed_arms_release_their_bindings(values in prop::collection::vec(any::<i8>(), 0..6)) {
        let a = Id::<i8>::new();
        let b = Id::<i8>::new();
        let seen = evaluate(
            &values,
            (
                arm(ds![&a, &b, 100i8], || 3),
                arm(ds![&a, &a, ..], || 2),
                arm(ds![&b, ..], || 1),
                arm(__, || 0),
            ),
        );
        prop_assert!(seen.is_ok());
        prop_assert_eq!(a.state(), BindingState::Empty);
        prop_assert_eq!(b.state(), BindingState::Empty);
    }
}
