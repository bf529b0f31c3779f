use std::cell::{Cell, RefCell};

use pretty_assertions::assert_eq;
use sm_patterns::{app, ds, meet, none, or_, some, BindingState, Id, PatternExt, __};

use super::*;
use crate::arm::{arm, expr};

fn sum(values: &[i64]) -> i64 {
    let head = Id::<i64>::new();
    let tail = Id::<&[i64]>::new();
    evaluate(
        values,
        (
            arm(ds![], || 0i64),
            arm(ds![&head, tail @ ..], || head.get() + sum(tail.get())),
        ),
    )
    .unwrap_or_default()
}

#[test]
fn first_matching_arm_wins() {
    let hits = RefCell::new(Vec::new());
    let out = evaluate(
        &3,
        (
            arm(1, || "one"),
            arm(or_((2, 3)), || {
                hits.borrow_mut().push(1);
                "two or three"
            }),
            arm(__, || {
                hits.borrow_mut().push(2);
                "other"
            }),
        ),
    );
    assert_eq!(out, Ok("two or three"));
    assert_eq!(*hits.borrow(), vec![1]);
}

#[test]
fn expression_without_match_is_an_error() {
    let out = evaluate(&10, (arm(1, || 'a'), arm(2, || 'b')));
    assert_eq!(out, Err(MatchError::NoMatch { arms: 2 }));
}

#[test]
fn statement_without_match_is_a_no_op() {
    let runs = Cell::new(0);
    execute(&"quiet", (arm(sm_patterns::val("loud"), || runs.set(runs.get() + 1)),));
    assert_eq!(runs.get(), 0);

    execute(&"loud", (arm(sm_patterns::val("loud"), || runs.set(runs.get() + 1)),));
    assert_eq!(runs.get(), 1);
}

#[test]
fn handler_reads_bindings_then_they_are_released() {
    let x = Id::<i32>::new();
    let seen = Cell::new(BindingState::Empty);
    let out = evaluate(
        &21,
        (arm(&x, || {
            seen.set(x.state());
            x.get() * 2
        }),),
    );
    assert_eq!(out, Ok(42));
    assert_eq!(seen.get(), BindingState::Confirmed { depth: 0 });
    assert_eq!(x.state(), BindingState::Empty);

    // A second match starts from an empty slot.
    assert_eq!(evaluate(&8, (arm(&x, || x.get()),)), Ok(8));
}

#[test]
fn failed_arms_leave_no_bindings_for_later_arms() {
    let x = Id::<i32>::new();
    let out = evaluate(
        &(1, 2),
        (
            arm(ds((&x, 5)), || x.get()),
            arm(ds((__, &x)), || x.get() * 10),
        ),
    );
    assert_eq!(out, Ok(20));
}

#[test]
fn guard_arms_fall_through_when_the_guard_fails() {
    let x = Id::<u32>::new();
    let classify = |n: u32| {
        evaluate(
            &n,
            (
                arm((&x).when(|| x.get() >= 100), || "big"),
                arm(&x, || "small"),
            ),
        )
    };
    assert_eq!(classify(500), Ok("big"));
    assert_eq!(classify(5), Ok("small"));
}

#[test]
fn results_unify_across_arms() {
    let wide: Result<i64, _> = evaluate(&0u8, (arm(0u8, || 1i32), arm(__, || 2i64)));
    assert_eq!(wide, Ok(1i64));

    let text = evaluate(&true, (arm(false, || String::from("no")), arm(true, || "yes")));
    assert_eq!(text, Ok(String::from("yes")));
}

#[test]
fn option_square() {
    let square = |value: Option<i32>| {
        let id = Id::<i32>::new();
        evaluate(
            &value,
            (arm(some(&id), || id.get() * id.get()), arm(none(), expr(0))),
        )
    };
    assert_eq!(square(Some(5)), Ok(25));
    assert_eq!(square(Some(3)), Ok(9));
    assert_eq!(square(None), Ok(0));
}

#[test]
fn projections_in_arms() {
    let len = Id::<usize>::new();
    let words = vec!["a", "bb", "ccc"];
    let out = evaluate(
        &words,
        (
            arm(app(Vec::len, 0usize), || 0usize),
            arm(app(|w: &Vec<&str>| w.concat(), app(|s: &String| s.len(), &len)), || len.get()),
        ),
    );
    assert_eq!(out, Ok(6));
}

#[test]
fn nested_matches_in_handlers_recurse() {
    assert_eq!(sum(&[1, 2, 3, 4]), 10);
    assert_eq!(sum(&[]), 0);
}

#[test]
fn deep_recursion_grows_the_stack() {
    let values: Vec<i64> = (1..=5_000).collect();
    assert_eq!(sum(&values), 5_000 * 5_001 / 2);
}

#[test]
fn predicates_select_arms() {
    let parity = |n: i32| {
        evaluate(
            &n,
            (
                arm(meet(|v: &i32| v % 2 == 0), || "even"),
                arm(__, || "odd"),
            ),
        )
    };
    assert_eq!(parity(4), Ok("even"));
    assert_eq!(parity(7), Ok("odd"));
}
