//! Partitioning, materialization and string joining.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Peekable;

use crate::hash::DefaultHashBuilder;

/// Collects `elements` into a `Vec`. Terminal.
#[inline]
pub fn collect<I: IntoIterator>(elements: I) -> Vec<I::Item> {
    elements.into_iter().collect()
}

/// Checks whether `elements` is empty without losing any element.
///
/// Returns the flag together with an iterator that still yields every
/// original element; use it in place of the input.
///
/// ```rust
/// use ftoolz::itertools::empty;
///
/// let (is_empty, rest) = empty(vec![1, 2, 3]);
/// assert!(!is_empty);
/// assert_eq!(rest.collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let (is_empty, _) = empty(Vec::<i32>::new());
/// assert!(is_empty);
/// ```
pub fn empty<I: IntoIterator>(elements: I) -> (bool, Peekable<I::IntoIter>) {
    let mut peekable = elements.into_iter().peekable();
    let is_empty = peekable.peek().is_none();
    (is_empty, peekable)
}

/// Splits `elements` into `(matching, non_matching)`, preserving relative
/// order in each part. Terminal.
///
/// ```rust
/// use ftoolz::itertools::split_by;
///
/// let (even, odd) = split_by(|x: &i32| x % 2 == 0, [1, 5, 4, 7, 2]);
/// assert_eq!(even, vec![4, 2]);
/// assert_eq!(odd, vec![1, 5, 7]);
/// ```
#[inline]
pub fn split_by<I, P>(predicate: P, elements: I) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    elements.into_iter().partition(predicate)
}

/// Lazily drops absent values.
#[inline]
pub fn filter_not_none<A, I>(elements: I) -> impl Iterator<Item = A>
where
    I: IntoIterator<Item = Option<A>>,
{
    elements.into_iter().flatten()
}

/// Joins the string form of every element, chosen by `key`, with
/// `separator`. Terminal.
///
/// ```rust
/// use ftoolz::itertools::make_str;
///
/// assert_eq!(make_str([1, 2, 3], |x| x.to_string(), "; "), "1; 2; 3");
/// assert_eq!(make_str(Vec::<i32>::new(), |x| x.to_string(), ","), "");
/// ```
pub fn make_str<I, S, F>(elements: I, mut key: F, separator: &str) -> String
where
    I: IntoIterator,
    S: std::fmt::Display,
    F: FnMut(I::Item) -> S,
{
    let mut result = String::new();
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            result.push_str(separator);
        }
        result.push_str(&key(element).to_string());
    }
    result
}

/// Distinct elements in order of first occurrence.
///
/// Membership is tracked with the crate's [`DefaultHashBuilder`].
pub fn unique_list<I>(elements: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    let mut seen = HashSet::with_hasher(DefaultHashBuilder::default());
    elements
        .into_iter()
        .filter(|element| seen.insert(element.clone()))
        .collect()
}

/// Distinct elements in ascending order.
pub fn unique_sorted<I>(elements: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut sorted: Vec<I::Item> = elements.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}
