//! Function-level helpers: left-to-right chaining and recoverable fallbacks.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::compose::chain;
//!
//! let increment_then_show = chain(|x: i32| x + 1, |x: i32| x.to_string());
//! assert_eq!(increment_then_show(41), "42");
//! ```

/// Composes two functions in application order: `chain(f, g)(x) == g(f(x))`.
#[inline]
pub fn chain<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value: A| second(first(value))
}

/// Composes a sequence of endo-functions left to right.
///
/// An empty sequence yields the identity function.
///
/// ```rust
/// use ftoolz::functor::compose::chain_all;
///
/// let functions: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 10)];
/// assert_eq!(chain_all(functions)(1), 20);
///
/// let identity = chain_all(Vec::<fn(i32) -> i32>::new());
/// assert_eq!(identity(42), 42);
/// ```
pub fn chain_all<A, F, I>(functions: I) -> impl Fn(A) -> A
where
    I: IntoIterator<Item = F>,
    F: Fn(A) -> A,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |value: A| functions.iter().fold(value, |accumulator, function| function(accumulator))
}

/// Calls `primary(argument)` and falls back to `fallback(argument)` when the
/// failure is accepted by `recover`.
///
/// Errors rejected by `recover` propagate unchanged.
///
/// # Errors
///
/// Returns the error of `primary` when `recover` does not accept it.
///
/// ```rust
/// use ftoolz::functor::compose::try_except;
/// use std::num::{IntErrorKind, ParseIntError};
///
/// let parse = |s: &str| s.parse::<i64>();
/// let recover = |error: &ParseIntError| *error.kind() == IntErrorKind::InvalidDigit;
///
/// assert_eq!(try_except(recover, parse, |_| -1, "1"), Ok(1));
/// assert_eq!(try_except(recover, parse, |_| -1, "a"), Ok(-1));
/// assert!(try_except(recover, parse, |_| -1, "").is_err());
/// ```
pub fn try_except<A, B, E, R, F, G>(recover: R, primary: F, fallback: G, argument: A) -> Result<B, E>
where
    A: Clone,
    R: FnOnce(&E) -> bool,
    F: FnOnce(A) -> Result<B, E>,
    G: FnOnce(A) -> B,
{
    match primary(argument.clone()) {
        Ok(value) => Ok(value),
        Err(error) if recover(&error) => Ok(fallback(argument)),
        Err(error) => Err(error),
    }
}
