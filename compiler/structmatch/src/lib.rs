//! Structural pattern matching.
//!
//! Match a value against an ordered list of arms; the first arm whose pattern
//! matches runs its handler. Patterns are built from small combinators and
//! can bind parts of the value to identifiers that the handler reads.
//!
//! ```
//! use structmatch::prelude::*;
//!
//! fn describe(values: &[i32]) -> String {
//!     let first = Id::<i32>::new();
//!     let last = Id::<i32>::new();
//!     let middle = Id::<&[i32]>::new();
//!     evaluate(values, (
//!         arm(ds![], || "empty".to_string()),
//!         arm(ds![&first], || format!("just {}", first.get())),
//!         arm(ds![&first, middle @ .., &last], || {
//!             format!("{} .. {} ({} between)", first.get(), last.get(), middle.get().len())
//!         }),
//!     ))
//!     .unwrap_or_default()
//! }
//!
//! assert_eq!(describe(&[]), "empty");
//! assert_eq!(describe(&[7]), "just 7");
//! assert_eq!(describe(&[1, 2, 3, 4]), "1 .. 4 (2 between)");
//! ```
//!
//! # Crates
//!
//! - [`sm_patterns`]: the pattern protocol, combinators, identifiers and
//!   sequence adapters
//! - [`sm_eval`]: arms, the match engine and result type unification
//!
//! # Logging
//!
//! Matching emits `tracing` events at `trace` level. With the default
//! `tracing-setup` feature, [`init_tracing`] installs a subscriber filtered by
//! `STRUCTMATCH_LOG` (or `RUST_LOG`).

pub use sm_eval::{
    arm, ensure_sufficient_stack, evaluate, execute, expr, Arm, ArmList, Common, CommonType,
    Unify,
};
pub use sm_patterns::{
    and, and_, app, app_ref, ds, ds_rest, err, guard, match_pattern, meet, none, not_, ok, ooo,
    or, or_, range, some, val, And, App, AppRef, Binding, BindingState, Context, Depth, Ds, DsRest,
    ErrOf, Guard, Id, IdProcess, MatchError, MatchResult, Meet, NoneOf, Not, OkOf, Ooo, OooBinder,
    Or, Pattern, PatternExt, PatternNode, PatternSeq, RestPattern, Sequence, Shape, SomeOf,
    Subrange, TupleHead, TupleLike, TupleTail, Val, ViewOf, Wildcard, __,
};

#[cfg(feature = "tracing-setup")]
mod tracing_setup;

#[cfg(feature = "tracing-setup")]
pub use tracing_setup::init_tracing;

/// Everything needed to write matches.
pub mod prelude {
    pub use crate::{
        and, and_, app, app_ref, arm, ds, ds_rest, err, evaluate, execute, expr, guard, meet, none,
        not_, ok, ooo, or, or_, some, val, BindingState, Id, MatchError, PatternExt, Subrange,
        ViewOf, __,
    };
}
