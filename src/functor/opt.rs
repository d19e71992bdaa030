//! Optional functor over the nullable context.
//!
//! Every combinator short-circuits on absence: when any required operand is
//! `None`, the result is `None` and the supplied function is never called.
//!
//! Prefer the fixed-arity forms ([`fmap`], [`fmap2`], [`fmap3`], [`apply`],
//! [`apply2`]). The variadic forms ([`fmap_n`], [`apply_n`]) hand the present
//! values to the function as a `Vec`, so the compiler cannot check that the
//! number of operands matches what the function expects; a mismatch is the
//! function's own failure, never an absence.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::opt;
//!
//! fn reciprocal(x: i32) -> Option<String> {
//!     (x != 0).then(|| (100 / x).to_string())
//! }
//!
//! assert_eq!(opt::flat_map(reciprocal, Some(42)), Some("2".to_string()));
//! assert_eq!(opt::flat_map(reciprocal, Some(0)), None);
//! assert_eq!(opt::flat_map(reciprocal, None), None);
//! ```

use crate::error::ToolzError;

// =============================================================================
// Functor
// =============================================================================

/// Applies `function` to a present value.
///
/// ```rust
/// use ftoolz::functor::opt;
///
/// assert_eq!(opt::fmap(|x: i32| (x + 1).to_string(), Some(1)), Some("2".to_string()));
/// assert_eq!(opt::fmap(|x: i32| (x + 1).to_string(), None), None);
/// ```
#[inline]
pub fn fmap<A, B, F>(function: F, value: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    value.map(function)
}

/// Applies `function` when both operands are present.
#[inline]
pub fn fmap2<A, B, C, F>(function: F, first: Option<A>, second: Option<B>) -> Option<C>
where
    F: FnOnce(A, B) -> C,
{
    flat_map(|a| fmap(|b| function(a, b), second), first)
}

/// Applies `function` when all three operands are present.
#[inline]
pub fn fmap3<A, B, C, D, F>(
    function: F,
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
) -> Option<D>
where
    F: FnOnce(A, B, C) -> D,
{
    flat_map(|a| fmap2(|b, c| function(a, b, c), second, third), first)
}

/// Applies `function` to all operands when every one of them is present.
///
/// The operands are passed to `function` in order. The function decides what
/// a wrong number of operands means; it is called whenever all operands are
/// present, including when there are none.
///
/// ```rust
/// use ftoolz::functor::opt;
///
/// let concat = |parts: Vec<i32>| -> Result<String, String> {
///     match parts.as_slice() {
///         [x, y] => Ok(format!("{x}{y}")),
///         other => Err(format!("expected 2 operands, got {}", other.len())),
///     }
/// };
///
/// assert_eq!(opt::fmap_n(concat, [Some(4), Some(2)]), Some(Ok("42".to_string())));
/// assert_eq!(opt::fmap_n(concat, [Some(4), None]), None);
/// assert!(matches!(opt::fmap_n(concat, [Some(4), Some(2), Some(0)]), Some(Err(_))));
/// ```
pub fn fmap_n<A, B, I, F>(function: F, values: I) -> Option<B>
where
    I: IntoIterator<Item = Option<A>>,
    F: FnOnce(Vec<A>) -> B,
{
    values.into_iter().collect::<Option<Vec<A>>>().map(function)
}

// =============================================================================
// Applicative
// =============================================================================

/// Applies an optional function to an optional value.
///
/// ```rust
/// use ftoolz::functor::opt;
///
/// let function = Some(|x: i32| x.to_string());
/// assert_eq!(opt::apply(function, Some(42)), Some("42".to_string()));
/// assert_eq!(opt::apply(function, None), None);
/// assert_eq!(opt::apply(None::<fn(i32) -> String>, Some(42)), None);
/// ```
#[inline]
pub fn apply<A, B, F>(function: Option<F>, value: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    fmap2(|function, a| function(a), function, value)
}

/// Applies an optional binary function to two optional values.
#[inline]
pub fn apply2<A, B, C, F>(function: Option<F>, first: Option<A>, second: Option<B>) -> Option<C>
where
    F: FnOnce(A, B) -> C,
{
    fmap3(|function, a, b| function(a, b), function, first, second)
}

/// Variadic form of [`apply`]; see [`fmap_n`] for the arity contract.
#[inline]
pub fn apply_n<A, B, I, F>(function: Option<F>, values: I) -> Option<B>
where
    I: IntoIterator<Item = Option<A>>,
    F: FnOnce(Vec<A>) -> B,
{
    fmap_n(function?, values)
}

// =============================================================================
// Monad
// =============================================================================

/// Feeds a present value into `function`, which itself may produce absence.
#[inline]
pub fn flat_map<A, B, F>(function: F, value: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    value.and_then(function)
}

/// Collapses two layers of `Option` into one.
#[inline]
pub fn flatten<A>(nested: Option<Option<A>>) -> Option<A> {
    nested.flatten()
}

/// Pairs two optional values; present only when both are.
#[inline]
pub fn product<A, B>(first: Option<A>, second: Option<B>) -> Option<(A, B)> {
    fmap2(|a, b| (a, b), first, second)
}

/// Pairs a present value with `function` applied to it.
///
/// ```rust
/// use ftoolz::functor::opt;
///
/// assert_eq!(opt::fproduct(|x: &i32| x.to_string(), Some(42)), Some((42, "42".to_string())));
/// ```
#[inline]
pub fn fproduct<A, B, F>(function: F, value: Option<A>) -> Option<(A, B)>
where
    F: FnOnce(&A) -> B,
{
    fmap(
        |a| {
            let b = function(&a);
            (a, b)
        },
        value,
    )
}

/// Lifts `function` into the nullable context.
#[inline]
pub fn lift<A, B, F>(function: F) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> B,
{
    move |value: Option<A>| fmap(&function, value)
}

/// Unit value for the nullable context.
#[inline]
pub const fn unit<A>(value: A) -> Option<A> {
    Some(value)
}

/// Returns the present value or [`ToolzError::MissingValue`].
///
/// # Errors
///
/// Returns [`ToolzError::MissingValue`] when `value` is `None`.
///
/// ```rust
/// use ftoolz::{error::ToolzError, functor::opt};
///
/// assert_eq!(opt::assert_some(Some('a')), Ok('a'));
/// assert_eq!(opt::assert_some::<char>(None), Err(ToolzError::MissingValue));
/// ```
#[inline]
pub fn assert_some<A>(value: Option<A>) -> Result<A, ToolzError> {
    value.ok_or(ToolzError::MissingValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn concat(a: i32, b: &str) -> String {
        format!("{a}{b}")
    }

    // =========================================================================
    // fmap family
    // =========================================================================

    #[rstest]
    #[case(None, None, None)]
    #[case(Some(4), None, None)]
    #[case(None, Some("2"), None)]
    #[case(Some(4), Some("2"), Some("42".to_string()))]
    fn test_fmap2(
        #[case] first: Option<i32>,
        #[case] second: Option<&str>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(fmap2(concat, first, second), expected);
    }

    #[rstest]
    #[case(Some(1), Some(2), None, None)]
    #[case(Some(1), None, Some(3), None)]
    #[case(None, Some(2), Some(3), None)]
    #[case(Some(1), Some(2), Some(3), Some(6))]
    fn test_fmap3(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] third: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(fmap3(|a, b, c| a + b + c, first, second, third), expected);
    }

    #[rstest]
    fn test_fmap_does_not_call_function_on_absence() {
        let calls = Cell::new(0);
        let result = fmap2(
            |a: i32, b: i32| {
                calls.set(calls.get() + 1);
                a + b
            },
            Some(1),
            None,
        );
        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_fmap_n_empty_operands_calls_function() {
        assert_eq!(fmap_n(|values: Vec<i32>| values.len(), []), Some(0));
    }

    #[rstest]
    fn test_fmap_n_absent_operand() {
        assert_eq!(
            fmap_n(|values: Vec<i32>| values.len(), [Some(1), None, Some(3)]),
            None
        );
    }

    // =========================================================================
    // apply family
    // =========================================================================

    #[rstest]
    fn test_apply2() {
        let function = Some(concat);
        assert_eq!(apply2(function, Some(4), Some("2")), Some("42".to_string()));
        assert_eq!(apply2(function, None, Some("2")), None);
        assert_eq!(apply2(None::<fn(i32, &str) -> String>, Some(4), Some("2")), None);
    }

    #[rstest]
    fn test_apply_n() {
        let sum = |values: Vec<i32>| values.iter().sum::<i32>();
        assert_eq!(apply_n(Some(sum), [Some(1), Some(2)]), Some(3));
        assert_eq!(apply_n(Some(sum), [Some(1), None]), None);
        assert_eq!(apply_n(None::<fn(Vec<i32>) -> i32>, [Some(1)]), None);
    }

    // =========================================================================
    // Monad
    // =========================================================================

    #[rstest]
    fn test_flatten() {
        assert_eq!(flatten::<i32>(None), None);
        assert_eq!(flatten::<i32>(Some(None)), None);
        assert_eq!(flatten(Some(Some(42))), Some(42));
    }

    #[rstest]
    fn test_product() {
        assert_eq!(product::<i32, &str>(None, None), None);
        assert_eq!(product(Some(1), None::<&str>), None);
        assert_eq!(product(Some(4), Some("2")), Some((4, "2")));
    }

    #[rstest]
    fn test_flatten_of_unit_is_identity() {
        assert_eq!(flatten(fmap(unit, Some(7))), Some(7));
        assert_eq!(flatten(fmap(unit, None::<i32>)), None);
    }

    #[rstest]
    fn test_lift() {
        let lifted = lift(|x: i32| x.to_string());
        assert_eq!(lifted(Some(42)), Some("42".to_string()));
        assert_eq!(lifted(None), None);
    }
}
