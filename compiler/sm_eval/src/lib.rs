//! Match engine for structmatch.
//!
//! This crate provides:
//! - Arms ([`Arm`], [`arm`]) and ordered arm lists ([`ArmList`])
//! - Expression and statement matching ([`evaluate`], [`execute`])
//! - Result type unification across arms ([`CommonType`], [`Unify`])
//! - Stack growth for matches nested inside handlers
//!
//! ```
//! use sm_eval::{arm, evaluate, expr};
//! use sm_patterns::{none, some, Id};
//!
//! fn square(value: Option<i32>) -> i32 {
//!     let id = Id::<i32>::new();
//!     evaluate(&value, (
//!         arm(some(&id), || id.get() * id.get()),
//!         arm(none(), expr(0)),
//!     ))
//!     .unwrap_or_default()
//! }
//!
//! assert_eq!(square(Some(5)), 25);
//! assert_eq!(square(None), 0);
//! ```

mod arm;
mod engine;
mod stack;
mod unify;

pub use arm::{arm, expr, Arm, ArmList};
pub use engine::{evaluate, execute};
pub use stack::ensure_sufficient_stack;
pub use unify::{Common, CommonType, Unify};
