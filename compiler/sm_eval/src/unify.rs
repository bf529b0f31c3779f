//! Result type unification across arms.
//!
//! Every arm of a match expression produces a value, and the match as a
//! whole produces one type. [`CommonType`] names the least upper bound of two
//! handler result types; [`Unify`] folds it over the result types of all
//! arms, right to left. Each handler's result is then converted `Into` the
//! unified type. Types without a common type fail to compile.
//!
//! Supported pairs:
//! - a type with itself,
//! - lossless numeric widening (`i8` and `i64` unify to `i64`, `u16` and
//!   `f32` to `f32`, `f32` and `f64` to `f64`, ...),
//! - signed with unsigned integers, which meet at the next signed type
//!   holding both (`i8` and `u8` unify to `i16`, `i32` and `u32` to `i64`),
//! - `&str` with `String`, which unify to `String`.

/// The type both `Self` and `Rhs` convert into.
pub trait CommonType<Rhs> {
    type Output;
}

/// Shorthand for `<L as CommonType<R>>::Output`.
pub type Common<L, R> = <L as CommonType<R>>::Output;

impl<T> CommonType<T> for T {
    type Output = T;
}

macro_rules! widen {
    ($($narrow:ty => $($wide:ty),+;)+) => {
        $($(
            impl CommonType<$wide> for $narrow {
                type Output = $wide;
            }

            impl CommonType<$narrow> for $wide {
                type Output = $wide;
            }
        )+)+
    };
}

widen! {
    i8 => i16, i32, i64, i128, isize, f32, f64;
    i16 => i32, i64, i128, isize, f32, f64;
    i32 => i64, i128, f64;
    i64 => i128;
    u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64;
    u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64;
    u32 => u64, u128, i64, i128, f64;
    u64 => u128, i128;
    f32 => f64;
}

// Mixed-sign pairs meet at the next signed type wide enough for both.
macro_rules! meet_at {
    ($($lhs:ty, $rhs:ty => $common:ty;)+) => {
        $(
            impl CommonType<$rhs> for $lhs {
                type Output = $common;
            }

            impl CommonType<$lhs> for $rhs {
                type Output = $common;
            }
        )+
    };
}

meet_at! {
    i8, u8 => i16;
    i8, u16 => i32;
    i16, u16 => i32;
    i8, u32 => i64;
    i16, u32 => i64;
    i32, u32 => i64;
    i8, u64 => i128;
    i16, u64 => i128;
    i32, u64 => i128;
    i64, u64 => i128;
}

impl<'a> CommonType<String> for &'a str {
    type Output = String;
}

impl<'a> CommonType<&'a str> for String {
    type Output = String;
}

/// Unified result type of a tuple of handler result types.
pub trait Unify {
    type Output;
}

macro_rules! impl_unify {
    ($R:ident) => {
        impl<$R> Unify for ($R,) {
            type Output = $R;
        }
    };
    ($R:ident, $($rest:ident),+) => {
        impl<$R, $($rest),+> Unify for ($R, $($rest),+)
        where
            ($($rest,)+): Unify,
            $R: CommonType<<($($rest,)+) as Unify>::Output>,
        {
            type Output = Common<$R, <($($rest,)+) as Unify>::Output>;
        }

        impl_unify!($($rest),+);
    };
}

impl_unify!(R0, R1, R2, R3, R4, R5, R6, R7);
