//! Functor, applicative and monad combinators as free functions.
//!
//! The same algebra is provided for three contexts:
//!
//! - [`seq`]: ordered finite collections (borrowed slices in, `Vec` out)
//! - [`opt`]: the nullable context (`Option`)
//! - [`iter`]: single-pass lazy sequences (any `IntoIterator`)
//!
//! Every module exposes `fmap`, `fmap2`, `flat_map`, `flatten`, `product`,
//! `fproduct`, `apply` and `lift`. [`traverse`] threads the `Option` effect
//! through whole collections, and [`compose`] holds function-level helpers.
//!
//! # Laws
//!
//! For every context the unit law holds:
//!
//! ```text
//! flatten(fmap(unit, xs)) == xs
//! ```
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::functor::{iter, opt, seq};
//!
//! assert_eq!(seq::product(&[1, 2], &['a']), vec![(1, 'a'), (2, 'a')]);
//! assert_eq!(opt::product(Some(1), Some('a')), Some((1, 'a')));
//!
//! let pairs: Vec<(i32, char)> = iter::product(vec![1, 2], vec!['a']).collect();
//! assert_eq!(pairs, vec![(1, 'a'), (2, 'a')]);
//! ```

pub mod compose;
pub mod iter;
pub mod opt;
pub mod seq;

#[cfg(feature = "traverse")]
pub mod traverse;
