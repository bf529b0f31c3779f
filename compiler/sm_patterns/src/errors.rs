//! Error types for pattern matching.
//!
//! Structural mismatch is never an error: patterns answer `false` and the
//! engine moves on to the next arm. The variants here cover the two runtime
//! failures a caller can observe. Malformed patterns (two rest markers,
//! handlers whose result types do not unify, a pattern that cannot apply to
//! the value type) are rejected at compile time instead.

use thiserror::Error;

/// Result of a fallible match or identifier access.
pub type MatchResult<T> = Result<T, MatchError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An expression-mode match ran out of arms.
    #[error("no pattern matched the value ({arms} arms tried)")]
    NoMatch { arms: usize },

    /// An identifier was read while nothing was bound to it.
    #[error("identifier `{name}` was read before a value was bound to it")]
    InvalidBindingAccess { name: &'static str },
}

impl MatchError {
    pub fn no_match(arms: usize) -> Self {
        MatchError::NoMatch { arms }
    }

    pub fn invalid_binding_access(name: Option<&'static str>) -> Self {
        MatchError::InvalidBindingAccess {
            name: name.unwrap_or("<anonymous>"),
        }
    }
}
