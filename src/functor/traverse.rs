//! Traversal of collections under the `Option` effect.
//!
//! `traverse` lifts a function `A -> Option<B>` over a whole collection,
//! producing `Option<collection of B>`: `Some` with every result in input
//! order when every application succeeds, `None` otherwise.
//!
//! The implementation folds from the right, consing each result onto the
//! front of the accumulator. The fold stops at the first `None` it meets, so
//! `function` is never called for elements to the left of a failure.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::traverse::{sequence_seq, traverse_seq};
//!
//! let positive = |x: &i32| (*x > 0).then(|| x.to_string());
//! assert_eq!(traverse_seq(positive, &[1, 2, 3]), Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]));
//! assert_eq!(traverse_seq(positive, &[0, 1, 2]), None);
//!
//! assert_eq!(sequence_seq(&[Some(1), Some(2), Some(3)]), Some(vec![1, 2, 3]));
//! assert_eq!(sequence_seq(&[Some(1), None, Some(3)]), None);
//! assert_eq!(sequence_seq::<i32>(&[]), Some(vec![]));
//! ```

use std::collections::VecDeque;

use crate::itertools::try_fold_right;

/// Threads the `Option` effect of `function` through every element of
/// `elements`. Terminal.
///
/// The returned iterator yields the unwrapped results in input order.
pub fn traverse_iter<A, B, I, F>(mut function: F, elements: I) -> Option<impl Iterator<Item = B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    try_fold_right(
        |element, mut accumulator: VecDeque<B>| {
            accumulator.push_front(function(element)?);
            Some(accumulator)
        },
        elements,
        VecDeque::new(),
    )
    .map(VecDeque::into_iter)
}

/// Turns an iterable of optional values into an optional iterator. Terminal.
///
/// ```rust
/// use ftoolz::functor::traverse::sequence_iter;
///
/// let mut source = vec![Some(1), Some(2)].into_iter();
/// let values: Option<Vec<i32>> = sequence_iter(&mut source).map(Iterator::collect);
/// assert_eq!(values, Some(vec![1, 2]));
/// assert_eq!(source.next(), None);
/// ```
#[inline]
pub fn sequence_iter<A, I>(elements: I) -> Option<impl Iterator<Item = A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    traverse_iter(|element| element, elements)
}

/// [`traverse_iter`] over a slice, collecting into a `Vec`.
#[inline]
pub fn traverse_seq<A, B, F>(function: F, elements: &[A]) -> Option<Vec<B>>
where
    F: FnMut(&A) -> Option<B>,
{
    traverse_iter(function, elements).map(Iterator::collect)
}

/// [`sequence_iter`] over a slice, collecting into a `Vec`.
#[inline]
pub fn sequence_seq<A: Clone>(elements: &[Option<A>]) -> Option<Vec<A>> {
    traverse_seq(Clone::clone, elements)
}
