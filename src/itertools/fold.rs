//! Right-associative folds.

/// Folds `elements` from the right: `fold_right(op, [1, 2, 3], z)` is
/// `op(1, op(2, op(3, z)))`.
///
/// The input is materialized once and walked backwards once. An empty input
/// returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use ftoolz::itertools::fold_right;
///
/// let described = fold_right(|a: i32, b: String| format!("{b} then {a}"), vec![1, 2, 3], "4".to_string());
/// assert_eq!(described, "4 then 3 then 2 then 1");
///
/// assert_eq!(fold_right(|a: i32, b: i32| a + b, Vec::new(), 42), 42);
/// ```
pub fn fold_right<A, B, I, F>(mut function: F, elements: I, initial: B) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, B) -> B,
{
    let elements: Vec<A> = elements.into_iter().collect();
    elements
        .into_iter()
        .rev()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Short-circuiting variant of [`fold_right`].
///
/// The fold stops at the first step that returns `None`; `function` is not
/// called for any element to the left of it.
///
/// ```rust
/// use ftoolz::itertools::try_fold_right;
///
/// let checked_sum = |a: u8, b: u8| a.checked_add(b);
/// assert_eq!(try_fold_right(checked_sum, [1, 2, 3], 0), Some(6));
/// assert_eq!(try_fold_right(checked_sum, [1, 255, 3], 0), None);
/// ```
pub fn try_fold_right<A, B, I, F>(mut function: F, elements: I, initial: B) -> Option<B>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, B) -> Option<B>,
{
    let elements: Vec<A> = elements.into_iter().collect();
    elements
        .into_iter()
        .rev()
        .try_fold(initial, |accumulator, element| function(element, accumulator))
}
