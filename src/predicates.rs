//! Small predicates for use with filters and guards.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::predicates::{even, some};
//!
//! let evens: Vec<i32> = (0..6).filter(|n| even(*n)).collect();
//! assert_eq!(evens, vec![0, 2, 4]);
//!
//! let present = [Some(1), None, Some(3)].iter().filter(|x| some(*x)).count();
//! assert_eq!(present, 2);
//! ```

use std::ops::Rem;

/// Returns `true` iff the optional value is present.
#[inline]
pub const fn some<A>(value: &Option<A>) -> bool {
    value.is_some()
}

/// Returns `true` iff the optional value is absent.
#[inline]
pub const fn none<A>(value: &Option<A>) -> bool {
    value.is_none()
}

/// Returns `true` iff `number` is even.
#[inline]
pub fn even<N>(number: N) -> bool
where
    N: Rem<Output = N> + PartialEq + From<u8>,
{
    number % N::from(2) == N::from(0)
}

/// Returns `true` iff `number` is odd.
#[inline]
pub fn odd<N>(number: N) -> bool
where
    N: Rem<Output = N> + PartialEq + From<u8>,
{
    !even(number)
}

/// Variadic `and`: `true` when every value is `true`, including when there
/// are no values at all.
///
/// ```rust
/// use ftoolz::predicates::vall;
///
/// assert!(vall([]));
/// assert!(vall([true, true]));
/// assert!(!vall([true, false]));
/// ```
#[inline]
pub fn vall<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    values.into_iter().all(|value| value)
}

/// Variadic `or`: `true` when at least one value is `true`; `false` for no
/// values.
#[inline]
pub fn vany<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    values.into_iter().any(|value| value)
}
