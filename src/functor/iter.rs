//! Lazy-iterator functor over single-pass sequences.
//!
//! The algebra matches [`seq`](super::seq), but inputs are any
//! `IntoIterator` and results are fresh lazy iterators. Every operation is
//! **terminal** in each iterator it receives: it takes the iterator by value
//! and consumes it exactly once.
//!
//! Passing `&mut iterator` keeps a handle on the caller's side, which makes
//! consumption observable: once the result is drained, reading the handle
//! yields `None`.
//!
//! # Materialization
//!
//! Binary combinators that pair every left element with every right element
//! ([`fmap2`], [`product`], [`apply`]) must replay the right-hand input, so
//! they collect it eagerly when called. The left-hand input is streamed.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::iter;
//!
//! let mut first = vec![1, 2, 3].into_iter();
//! let mut second = vec!['a', 'b'].into_iter();
//!
//! let pairs: Vec<(i32, char)> = iter::product(&mut first, &mut second).collect();
//! assert_eq!(pairs.len(), 6);
//!
//! // Both inputs were consumed by `product`.
//! assert_eq!(first.next(), None);
//! assert_eq!(second.next(), None);
//! ```

use std::iter::{FlatMap, Flatten, Once};

// =============================================================================
// Nested iteration
// =============================================================================

/// Iterator pairing every element of a streamed outer iterator with every
/// element of a materialized inner collection.
///
/// Created by [`fmap2`], [`product`] and [`apply`].
pub struct Nested<I: Iterator, B, F> {
    outer: I,
    current: Option<I::Item>,
    inner: Vec<B>,
    index: usize,
    function: F,
}

impl<I: Iterator, B, F> Nested<I, B, F> {
    fn new(outer: I, inner: Vec<B>, function: F) -> Self {
        Self {
            outer,
            current: None,
            inner,
            index: 0,
            function,
        }
    }
}

impl<I, B, C, F> Iterator for Nested<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(&I::Item, B) -> C,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.inner.is_empty() {
            // Nothing to pair with, but the outer input is still consumed.
            self.outer.by_ref().for_each(drop);
            return None;
        }
        loop {
            if let Some(current) = &self.current
                && let Some(b) = self.inner.get(self.index)
            {
                self.index += 1;
                return Some((self.function)(current, b.clone()));
            }
            self.current = Some(self.outer.next()?);
            self.index = 0;
        }
    }
}

// =============================================================================
// Positional iteration
// =============================================================================

/// Iterator applying a function to one element of each input at a time.
///
/// Created by [`zip_map_n`].
#[derive(Debug, Clone)]
pub struct ZipMapN<I, F> {
    iterators: Vec<I>,
    function: F,
    finished: bool,
}

impl<I, B, F> Iterator for ZipMapN<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.finished || self.iterators.is_empty() {
            return None;
        }
        let mut column = Vec::with_capacity(self.iterators.len());
        for iterator in &mut self.iterators {
            if let Some(element) = iterator.next() {
                column.push(element);
            } else {
                self.finished = true;
                break;
            }
        }
        if self.finished {
            // Inputs after the exhausted one still have to be consumed.
            for iterator in &mut self.iterators {
                iterator.by_ref().for_each(drop);
            }
            return None;
        }
        Some((self.function)(column))
    }
}

/// Iterator applying a function to one element of each of two inputs.
///
/// When either input runs out, the other one is drained before `None` is
/// returned. Created by [`zip_map`] and [`zip_map3`].
#[derive(Debug, Clone)]
pub struct ZipMap<I, J, F> {
    first: I,
    second: J,
    function: F,
    finished: bool,
}

impl<I, J, C, F> Iterator for ZipMap<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, J::Item) -> C,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.finished {
            return None;
        }
        match (self.first.next(), self.second.next()) {
            (Some(a), Some(b)) => Some((self.function)(a, b)),
            _ => {
                self.finished = true;
                self.first.by_ref().for_each(drop);
                self.second.by_ref().for_each(drop);
                None
            }
        }
    }
}

// =============================================================================
// Functor
// =============================================================================

/// Lazily applies `function` to every element.
#[inline]
pub fn fmap<I, B, F>(function: F, elements: I) -> impl Iterator<Item = B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    elements.into_iter().map(function)
}

/// Applies `function` to every pair in nested order.
///
/// `second` is collected immediately; `first` is streamed.
///
/// ```rust
/// use ftoolz::functor::iter;
///
/// let repeated: Vec<String> = iter::fmap2(|a: usize, b: &str| b.repeat(a), vec![1, 2, 3], vec!["a", "b"]).collect();
/// assert_eq!(repeated, vec!["a", "b", "aa", "bb", "aaa", "bbb"]);
/// ```
pub fn fmap2<I, J, C, F>(
    mut function: F,
    first: I,
    second: J,
) -> Nested<I::IntoIter, J::Item, impl FnMut(&I::Item, J::Item) -> C>
where
    I: IntoIterator,
    I::Item: Clone,
    J: IntoIterator,
    J::Item: Clone,
    F: FnMut(I::Item, J::Item) -> C,
{
    Nested::new(
        first.into_iter(),
        second.into_iter().collect(),
        move |a: &I::Item, b: J::Item| function(a.clone(), b),
    )
}

/// Lazily feeds every element into `function` and concatenates the results.
#[inline]
pub fn flat_map<I, J, F>(function: F, elements: I) -> FlatMap<I::IntoIter, J, F>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item) -> J,
{
    elements.into_iter().flat_map(function)
}

/// Lazily concatenates an iterator of iterables.
///
/// ```rust
/// use ftoolz::functor::iter;
///
/// let mut nested = vec![vec![1], vec![2], vec![], vec![3, 4]].into_iter();
/// let flat: Vec<i32> = iter::flatten(&mut nested).collect();
/// assert_eq!(flat, vec![1, 2, 3, 4]);
/// assert_eq!(nested.next(), None);
/// ```
#[inline]
pub fn flatten<I>(nested: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested.into_iter().flatten()
}

/// Cartesian product in nested order; `second` is collected immediately.
#[inline]
pub fn product<I, J>(
    first: I,
    second: J,
) -> Nested<I::IntoIter, J::Item, impl FnMut(&I::Item, J::Item) -> (I::Item, J::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
    J: IntoIterator,
    J::Item: Clone,
{
    fmap2(|a, b| (a, b), first, second)
}

/// Lazily pairs every element with `function` applied to it.
#[inline]
pub fn fproduct<I, B, F>(mut function: F, elements: I) -> impl Iterator<Item = (I::Item, B)>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> B,
{
    elements.into_iter().map(move |a| {
        let b = function(&a);
        (a, b)
    })
}

/// Lifts `function` to operate on iterables of a fixed type `I`.
///
/// ```rust
/// use ftoolz::functor::iter;
///
/// let lifted = iter::lift::<Vec<i32>, _, _>(|x| x.to_string());
/// assert_eq!(lifted(vec![1, 2]).collect::<Vec<_>>(), vec!["1", "2"]);
/// ```
#[inline]
pub fn lift<I, B, F>(function: F) -> impl Fn(I) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> B + Clone,
{
    move |elements: I| elements.into_iter().map(function.clone())
}

/// Single-element iterator.
#[inline]
pub fn unit<A>(value: A) -> Once<A> {
    std::iter::once(value)
}

// =============================================================================
// Applicative
// =============================================================================

/// Applies every function to every element, functions on the outside.
///
/// `elements` is collected immediately; `functions` is streamed.
///
/// ```rust
/// use ftoolz::functor::iter;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x + 3];
/// let result: Vec<i32> = iter::apply(functions, vec![1, 2]).collect();
/// assert_eq!(result, vec![2, 3, 4, 5]);
/// ```
#[inline]
pub fn apply<G, I, B, Fun>(
    functions: G,
    elements: I,
) -> Nested<G::IntoIter, I::Item, impl FnMut(&Fun, I::Item) -> B>
where
    G: IntoIterator<Item = Fun>,
    I: IntoIterator,
    I::Item: Clone,
    Fun: Fn(I::Item) -> B,
{
    Nested::new(
        functions.into_iter(),
        elements.into_iter().collect(),
        |function: &Fun, a: I::Item| function(a),
    )
}

/// Applies `function` positionally across two iterables, stopping at the
/// first exhausted one.
///
/// The longer input is still consumed to the end once the result is
/// drained.
///
/// ```rust
/// use ftoolz::functor::iter;
///
/// let zipped: Vec<String> = iter::zip_map(|a: usize, b: &str| b.repeat(a), vec![1, 2, 3, 4], vec!["a", "b", "c"]).collect();
/// assert_eq!(zipped, vec!["a", "bb", "ccc"]);
/// ```
#[inline]
pub fn zip_map<I, J, C, F>(function: F, first: I, second: J) -> ZipMap<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item, J::Item) -> C,
{
    ZipMap {
        first: first.into_iter(),
        second: second.into_iter(),
        function,
        finished: false,
    }
}

/// Applies `function` positionally across three iterables.
///
/// Like [`zip_map`], every input is drained once the shortest one runs out.
#[inline]
pub fn zip_map3<I, J, K, D, F>(
    mut function: F,
    first: I,
    second: J,
    third: K,
) -> impl Iterator<Item = D>
where
    I: IntoIterator,
    J: IntoIterator,
    K: IntoIterator,
    F: FnMut(I::Item, J::Item, K::Item) -> D,
{
    let rest = zip_map(|b, c| (b, c), second, third);
    zip_map(move |a, (b, c)| function(a, b, c), first, rest)
}

/// Variadic form of [`zip_map`] over homogeneous iterables.
///
/// Elements are pulled from the inputs in order; iteration stops at the
/// first input that is exhausted, after draining every input. No inputs at
/// all yields nothing.
pub fn zip_map_n<S, I, B, F>(function: F, inputs: S) -> ZipMapN<I::IntoIter, F>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    F: FnMut(Vec<I::Item>) -> B,
{
    ZipMapN {
        iterators: inputs.into_iter().map(IntoIterator::into_iter).collect(),
        function,
        finished: false,
    }
}
