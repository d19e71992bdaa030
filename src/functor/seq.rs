//! Sequence functor over ordered finite collections.
//!
//! Inputs are borrowed slices, so they can be traversed any number of times;
//! every operation returns a freshly allocated `Vec`. Elements that must
//! appear in the output unchanged are cloned.
//!
//! # Ordering
//!
//! Binary combinators (`fmap2`, `product`, `apply`) iterate in nested order:
//! the outer loop runs over the left-hand input, the inner loop over the
//! right-hand input. The result length is the product of the input lengths,
//! so an empty input on either side yields an empty result.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::seq;
//!
//! let repeated = seq::fmap2(|a: &usize, b: &&str| b.repeat(*a), &[1, 2, 3], &["a", "b"]);
//! assert_eq!(repeated, vec!["a", "b", "aa", "bb", "aaa", "bbb"]);
//! ```

/// Applies `function` to every element.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// assert_eq!(seq::fmap(|x: &i32| x.to_string(), &[1, 2, 3]), vec!["1", "2", "3"]);
/// assert!(seq::fmap(|x: &i32| x + 1, &[]).is_empty());
/// ```
#[inline]
pub fn fmap<A, B, F>(function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    elements.iter().map(function).collect()
}

/// Applies `function` to every pair `(a, b)` in nested order.
///
/// The result has `first.len() * second.len()` elements.
pub fn fmap2<A, B, C, F>(mut function: F, first: &[A], second: &[B]) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    let capacity = first.len().saturating_mul(second.len());
    let mut result = Vec::with_capacity(capacity);
    for a in first {
        for b in second {
            result.push(function(a, b));
        }
    }
    result
}

/// Feeds every element into `function` and concatenates the returned
/// collections in order.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let doubled = seq::flat_map(|x: &i32| vec![*x, *x], &[1, 2, 3]);
/// assert_eq!(doubled, vec![1, 1, 2, 2, 3, 3]);
/// ```
#[inline]
pub fn flat_map<A, B, I, F>(function: F, elements: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> I,
    I: IntoIterator<Item = B>,
{
    elements.iter().flat_map(function).collect()
}

/// Concatenates a collection of collections.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let nested = [vec![1], vec![2], vec![], vec![3, 4], vec![]];
/// assert_eq!(seq::flatten(&nested), vec![1, 2, 3, 4]);
/// ```
#[inline]
pub fn flatten<A, S>(nested: &[S]) -> Vec<A>
where
    S: AsRef<[A]>,
    A: Clone,
{
    nested
        .iter()
        .flat_map(|inner| inner.as_ref().iter().cloned())
        .collect()
}

/// Cartesian product of two collections, in the same order as [`fmap2`].
#[inline]
pub fn product<A, B>(first: &[A], second: &[B]) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    fmap2(|a, b| (a.clone(), b.clone()), first, second)
}

/// Applies `function` positionally across two collections, truncating to the
/// shorter one.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let zipped = seq::zip_map(|a: &usize, b: &&str| b.repeat(*a), &[1, 2, 3, 4], &["a", "b", "c"]);
/// assert_eq!(zipped, vec!["a", "bb", "ccc"]);
/// ```
#[inline]
pub fn zip_map<A, B, C, F>(mut function: F, first: &[A], second: &[B]) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second)
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Applies `function` positionally across three collections, truncating to
/// the shortest one.
#[inline]
pub fn zip_map3<A, B, C, D, F>(mut function: F, first: &[A], second: &[B], third: &[C]) -> Vec<D>
where
    F: FnMut(&A, &B, &C) -> D,
{
    first
        .iter()
        .zip(second)
        .zip(third)
        .map(|((a, b), c)| function(a, b, c))
        .collect()
}

/// Variadic form of [`zip_map`] over homogeneous collections.
///
/// `function` receives one element from each input, in input order. The
/// result is truncated to the shortest input; no inputs at all yields an
/// empty result.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let sums = seq::zip_map_n(|column: &[&i32]| column.iter().copied().sum::<i32>(), &[&[1, 2, 3][..], &[10, 20], &[100, 200, 300]]);
/// assert_eq!(sums, vec![111, 222]);
/// ```
pub fn zip_map_n<A, B, S, F>(mut function: F, inputs: &[S]) -> Vec<B>
where
    S: AsRef<[A]>,
    F: FnMut(&[&A]) -> B,
{
    let Some(length) = inputs.iter().map(|input| input.as_ref().len()).min() else {
        return Vec::new();
    };
    let mut column = Vec::with_capacity(inputs.len());
    (0..length)
        .map(|index| {
            column.clear();
            column.extend(inputs.iter().map(|input| &input.as_ref()[index]));
            function(column.as_slice())
        })
        .collect()
}

/// Wraps a single value as a one-element collection.
#[inline]
pub fn unit<A>(value: A) -> Vec<A> {
    vec![value]
}

/// Applies every function in `functions` to every element, in nested order
/// with the functions on the outside.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let functions: [fn(&i32) -> String; 2] = [|x| (x + 1).to_string(), |x| (x + 3).to_string()];
/// assert_eq!(seq::apply(&functions, &[1, 2]), vec!["2", "3", "4", "5"]);
/// ```
pub fn apply<A, B, F>(functions: &[F], elements: &[A]) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    let capacity = functions.len().saturating_mul(elements.len());
    let mut result = Vec::with_capacity(capacity);
    for function in functions {
        result.extend(elements.iter().map(function));
    }
    result
}

/// Pairs every element with the result of `function` applied to it.
#[inline]
pub fn fproduct<A, B, F>(mut function: F, elements: &[A]) -> Vec<(A, B)>
where
    A: Clone,
    F: FnMut(&A) -> B,
{
    fmap(|a| (a.clone(), function(a)), elements)
}

/// Lifts `function` to operate on collections.
///
/// ```rust
/// use ftoolz::functor::seq;
///
/// let lifted = seq::lift(|x: &i32| x.to_string());
/// assert_eq!(lifted(&[1, 2, 3]), vec!["1", "2", "3"]);
/// ```
#[inline]
pub fn lift<A, B, F>(function: F) -> impl Fn(&[A]) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    move |elements: &[A]| fmap(&function, elements)
}
