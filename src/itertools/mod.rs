//! Iterator utilities.
//!
//! Helpers in this module take their input iterables by value. Unless stated
//! otherwise they are **terminal**: the input is consumed, and a caller that
//! passed `&mut iterator` observes `None` on the next read.
//!
//! - Keyed collection: [`associate`], [`associate_to`], [`positions`]
//! - Ordering: [`order_by`], [`group_and_order_by`]
//! - Final-element flags: [`iter_with_final`], [`enumerate_with_final`]
//! - Folding: [`fold_right`], [`try_fold_right`]
//! - Access: [`take`], [`take_first`], [`try_take_first`], [`try_take_last`],
//!   [`find`], [`first`], [`last`], [`head_tail`], [`head_tail_list`]
//! - Partitioning and collection: [`split_by`], [`collect`], [`empty`],
//!   [`filter_not_none`], [`make_str`], [`unique_list`], [`unique_sorted`]
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::itertools::{order_by, take};
//!
//! let ordered: Vec<Option<char>> = order_by(['a', 'c'], ['c', 'b', 'a']).collect();
//! assert_eq!(ordered, vec![Some('c'), None, Some('a')]);
//!
//! let mut numbers = vec![1, 2, 3].into_iter();
//! assert_eq!(take(2, &mut numbers), Ok(vec![1, 2]));
//! assert_eq!(numbers.next(), Some(3));
//! ```

mod access;
mod associate;
mod collect;
mod final_flag;
mod fold;
mod order;

pub use access::{
    find, first, head_tail, head_tail_list, last, take, take_first, try_take_first,
    try_take_last,
};
pub use associate::{Positions, associate, associate_to, positions};
pub use collect::{
    collect, empty, filter_not_none, make_str, split_by, unique_list, unique_sorted,
};
pub use final_flag::{IterWithFinal, enumerate_with_final, iter_with_final};
pub use fold::{fold_right, try_fold_right};
pub use order::{group_and_order_by, order_by};
