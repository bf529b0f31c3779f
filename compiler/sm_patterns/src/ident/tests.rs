use pretty_assertions::assert_eq;

use super::*;
use crate::pattern::match_pattern;

fn ci_eq(a: &String, b: &String) -> bool {
    a.eq_ignore_ascii_case(b)
}

// Binding state machine

#[test]
fn fresh_binding_is_empty() {
    let binding = Binding::<i32>::default();
    assert_eq!(binding.state(), BindingState::Empty);
    assert_eq!(binding.depth(), 0);
}

#[test]
fn bind_is_tentative_until_confirmed() {
    let mut binding = Binding::<i32>::default();
    assert!(binding.bind(&7));
    assert_eq!(binding.state(), BindingState::Tentative { depth: 0 });

    binding.confirm(2);
    assert_eq!(binding.state(), BindingState::Confirmed { depth: 2 });
    binding.confirm(1);
    assert_eq!(binding.state(), BindingState::Confirmed { depth: 1 });
    binding.confirm(0);
    assert_eq!(binding.state(), BindingState::Confirmed { depth: 0 });
}

#[test]
fn bound_slot_compares_instead_of_overwriting() {
    let mut binding = Binding::<i32>::default();
    assert!(binding.bind(&3));
    assert!(binding.bind(&3));
    assert!(!binding.bind(&4));
    assert_eq!(binding.value(), Some(&3));
}

#[test]
fn reset_only_undoes_deeper_bindings() {
    let mut binding = Binding::<i32>::default();
    assert!(binding.bind(&1));
    binding.confirm(1);

    // A cancel deeper than the binding leaves it alone.
    binding.reset(2);
    assert_eq!(binding.value(), Some(&1));

    binding.reset(1);
    assert_eq!(binding.state(), BindingState::Empty);
    assert_eq!(binding.depth(), 1);
}

#[test]
fn confirm_does_not_raise_depth() {
    let mut binding = Binding::<i32>::default();
    assert!(binding.bind(&1));
    binding.confirm(1);
    binding.confirm(2);
    assert_eq!(binding.depth(), 1);
}

#[test]
fn custom_equality_is_used_for_rebinding() {
    let mut binding = Binding::new(ci_eq);
    assert!(binding.bind(&String::from("Rust")));
    assert!(binding.bind(&String::from("RUST")));
    assert!(!binding.bind(&String::from("rusty")));
}

// Id

#[test]
fn clones_alias_one_slot() {
    let x = Id::<i32>::new();
    let alias = x.clone();
    let mut ctx = Context::default();

    assert!(match_pattern(&5, &alias, 0, &mut ctx));
    assert!(x.same_slot(&alias));
    assert_eq!(x.get(), 5);
    assert_eq!(x.state(), BindingState::Confirmed { depth: 0 });
}

#[test]
fn failed_match_leaves_identifier_empty() {
    let x = Id::<i32>::new();
    let mut ctx = Context::default();
    assert!(match_pattern(&1, &x, 0, &mut ctx));
    assert!(!match_pattern(&2, &x, 0, &mut ctx));
    assert!(!x.is_bound());
}

#[test]
fn reading_unbound_identifier_is_an_error() {
    let x = Id::<u8>::named("x");
    assert_eq!(
        x.try_get(),
        Err(MatchError::InvalidBindingAccess { name: "x" })
    );
    assert_eq!(
        Id::<u8>::new().take(),
        Err(MatchError::InvalidBindingAccess { name: "<anonymous>" })
    );
}

#[test]
#[should_panic(expected = "identifier `y` was read before a value was bound to it")]
fn get_panics_when_unbound() {
    let y = Id::<i64>::named("y");
    let _ = y.get();
}

#[test]
fn take_moves_the_value_out() {
    let name = Id::<String>::new();
    let mut ctx = Context::default();
    assert!(match_pattern(&String::from("moved"), &name, 0, &mut ctx));

    assert_eq!(name.take(), Ok(String::from("moved")));
    assert_eq!(name.state(), BindingState::Empty);
}

#[test]
fn with_borrows_the_value() {
    let words = Id::<Vec<&str>>::new();
    let mut ctx = Context::default();
    assert!(match_pattern(&vec!["a", "b"], &words, 0, &mut ctx));
    assert_eq!(words.with(Vec::len), Ok(2));
}

#[test]
fn at_binds_only_when_inner_pattern_matches() {
    let x = Id::<i32>::new();
    let mut ctx = Context::default();

    assert!(!match_pattern(&4, &x.at(5), 0, &mut ctx));
    assert!(!x.is_bound());

    assert!(match_pattern(&5, &x.at(5), 0, &mut ctx));
    assert_eq!(x.get(), 5);
}

#[test]
fn id_counts_itself() {
    let x = Id::<i32>::new();
    assert_eq!(x.id_count(), 1);
    assert_eq!((&x).id_count(), 1);
}

#[test]
fn debug_shows_name_and_state() {
    let x = Id::<i32>::named("x");
    assert_eq!(
        format!("{x:?}"),
        r#"Id { name: Some("x"), value: None, state: Empty }"#
    );
}

// Storage modes

/// Neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq)]
struct Ticket(u32);

#[test]
fn reference_identifier_binds_without_cloning() {
    let ticket = Ticket(5);
    let held = Id::<&Ticket>::new();
    let mut ctx = Context::default();
    assert!(match_pattern(&ticket, &held, 0, &mut ctx));
    assert!(std::ptr::eq(held.get(), &ticket));
    assert_eq!(held.state(), BindingState::Confirmed { depth: 0 });
}

#[test]
fn reference_identifier_compares_the_referents() {
    let (a, b, c) = (Ticket(1), Ticket(1), Ticket(2));
    let held = Id::<&Ticket>::new();
    let mut ctx = Context::default();
    assert!(match_pattern(&a, &held, 0, &mut ctx));
    assert!(match_pattern(&b, &held, 0, &mut ctx));
    assert!(std::ptr::eq(held.get(), &a));

    // A failed attempt at depth 0 cancels the binding it compared against.
    assert!(!match_pattern(&c, &held, 0, &mut ctx));
    assert!(!held.is_bound());
}

#[test]
fn shared_identifier_rejects_values_outside_the_context() {
    let shared = Id::<std::rc::Rc<String>>::new();
    let mut ctx = Context::default();
    assert!(!match_pattern(&String::from("loose"), &shared, 0, &mut ctx));

    let held = ctx.hold(String::from("held"));
    assert!(match_pattern(&*held, &shared, 0, &mut ctx));
    assert!(std::rc::Rc::ptr_eq(&shared.get(), &held));
}
