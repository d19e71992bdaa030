//! Element access: take, first/last, find, head/tail.
//!
//! Not-found results are reported as `None`. Only contract violations
//! (negative counts, empty input where an element is required) are errors.

use crate::error::ToolzError;

/// Returns the first `count` elements as a `Vec`.
///
/// Returns fewer elements when the input is shorter. Only `count` elements
/// are read, so a caller passing `&mut iterator` can continue from where
/// `take` stopped.
///
/// # Errors
///
/// Returns [`ToolzError::InvalidArgument`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use ftoolz::itertools::take;
///
/// let mut numbers = vec![1, 2, 3].into_iter();
/// assert_eq!(take(2, &mut numbers), Ok(vec![1, 2]));
/// assert_eq!(numbers.next(), Some(3));
/// assert_eq!(take(2, &mut numbers), Ok(vec![]));
///
/// assert!(take(-1, Vec::<i32>::new()).is_err());
/// ```
pub fn take<I>(count: isize, elements: I) -> Result<Vec<I::Item>, ToolzError>
where
    I: IntoIterator,
{
    let count = usize::try_from(count)
        .map_err(|_| ToolzError::invalid_argument("take", "n must be non-negative integer"))?;
    Ok(elements.into_iter().take(count).collect())
}

/// Returns the first element.
///
/// # Errors
///
/// Returns [`ToolzError::Exhausted`] if there is no element left.
#[inline]
pub fn take_first<I: IntoIterator>(elements: I) -> Result<I::Item, ToolzError> {
    elements
        .into_iter()
        .next()
        .ok_or(ToolzError::Exhausted { operation: "take_first" })
}

/// Returns the first element, if any. Only one element is read.
#[inline]
pub fn try_take_first<I: IntoIterator>(elements: I) -> Option<I::Item> {
    elements.into_iter().next()
}

/// Returns the last element, if any. Terminal.
#[inline]
pub fn try_take_last<I: IntoIterator>(elements: I) -> Option<I::Item> {
    elements.into_iter().last()
}

/// Returns the first element satisfying `predicate`.
///
/// Reading stops at the match, so elements after it remain available to a
/// caller holding `&mut iterator`.
///
/// ```rust
/// use ftoolz::itertools::find;
///
/// let even = |x: &i32| x % 2 == 0;
/// assert_eq!(find(even, [1, 5, 4, 7, 2]), Some(4));
/// assert_eq!(find(even, [1, 3, 5]), None);
/// ```
#[inline]
pub fn find<I, P>(predicate: P, elements: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    elements.into_iter().find(predicate)
}

/// First element of a slice.
#[inline]
pub const fn first<E>(elements: &[E]) -> Option<&E> {
    elements.first()
}

/// Last element of a slice.
#[inline]
pub const fn last<E>(elements: &[E]) -> Option<&E> {
    elements.last()
}

/// Splits the input into its first element and an iterator over the rest.
///
/// # Errors
///
/// Returns [`ToolzError::EmptyInput`] if the input has no elements.
///
/// ```rust
/// use ftoolz::itertools::head_tail;
///
/// let (head, tail) = head_tail([1, 2, 3]).unwrap();
/// assert_eq!(head, 1);
/// assert_eq!(tail.collect::<Vec<_>>(), vec![2, 3]);
/// ```
pub fn head_tail<I: IntoIterator>(elements: I) -> Result<(I::Item, I::IntoIter), ToolzError> {
    let mut iterator = elements.into_iter();
    let head = iterator
        .next()
        .ok_or(ToolzError::EmptyInput { operation: "head_tail" })?;
    Ok((head, iterator))
}

/// Like [`head_tail`], with the tail collected into a `Vec`.
///
/// # Errors
///
/// Returns [`ToolzError::EmptyInput`] if the input has no elements.
pub fn head_tail_list<I: IntoIterator>(elements: I) -> Result<(I::Item, Vec<I::Item>), ToolzError> {
    let (head, tail) = head_tail(elements)?;
    Ok((head, tail.collect()))
}
