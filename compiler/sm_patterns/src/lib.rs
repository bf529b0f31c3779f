//! Pattern combinators and binding identifiers.
//!
//! This crate provides:
//! - The pattern protocol ([`Pattern`], [`PatternNode`], [`match_pattern`])
//! - Binding identifiers and their depth-keyed lifecycle ([`Id`], [`Binding`])
//! - Combinators: literals, wildcard, alternation, conjunction, negation,
//!   predicates, guards, projections, destructuring with rest capture, and
//!   `Option`/`Result` variants
//! - Sequence and tuple adapters used by destructuring ([`Sequence`], [`Subrange`])
//! - The per-invocation [`Context`] and the crate's error type
//!
//! # Depth
//!
//! Every attempt carries a depth. An arm is matched at depth 0 and every
//! composite pattern matches its children at depth + 1. When an attempt ends,
//! the identifiers inside the attempted pattern are told whether it succeeded
//! (see [`IdProcess`]): failures undo bindings made at that depth or deeper,
//! successes hand bindings up one level. Backtracking therefore needs no undo
//! log and no allocation.
//!
//! # Example
//!
//! ```
//! use sm_patterns::{ds, match_pattern, or_, Context, Id};
//!
//! let values = vec![1, 2, 3, 4];
//! let first = Id::<i32>::new();
//! let rest = Id::<&[i32]>::new();
//!
//! let pattern = ds![or_((0, 1)), &first, rest @ ..];
//! let mut ctx = Context::default();
//! assert!(match_pattern(&values, &pattern, 0, &mut ctx));
//! assert_eq!(first.get(), 2);
//! assert_eq!(rest.get(), &[3, 4]);
//! ```

mod context;
mod destructure;
mod errors;
mod ident;
mod literal;
mod logic;
mod pattern;
mod predicate;
mod projection;
pub mod range;
mod variant;

pub use context::Context;
pub use destructure::{
    ds, ds_rest, ooo, Ds, DsRest, Ooo, OooBinder, RestPattern, TupleHead, TupleTail,
};
pub use errors::{MatchError, MatchResult};
pub use ident::{Binding, BindingState, Id};
pub use literal::{val, Val, Wildcard, __};
pub use logic::{and_, not_, or_, And, Not, Or};
pub use pattern::{match_pattern, Depth, IdProcess, Pattern, PatternExt, PatternNode, PatternSeq};
pub use predicate::{guard, meet, Guard, Meet};
pub use projection::{app, app_ref, App, AppRef};
pub use range::{Sequence, Shape, Subrange, TupleLike, ViewOf};
pub use variant::{err, none, ok, some, ErrOf, NoneOf, OkOf, SomeOf};
