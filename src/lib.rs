//! # ftoolz
//!
//! A functional toolkit for Rust, layered on top of the standard collection
//! types.
//!
//! ## Overview
//!
//! - **Functor combinators**: `fmap`, `fmap2`, `flat_map`, `product`,
//!   `apply`, `zip_map` for slices ([`functor::seq`]), `Option`
//!   ([`functor::opt`]) and lazy iterators ([`functor::iter`])
//! - **Traversal**: `traverse` and `sequence` under the `Option` effect
//! - **Iterator utilities**: grouping, ordering by key, final-element flags,
//!   right folds, take/first/last helpers
//! - **Map utilities**: value swap and value update returning new maps
//! - **Registry**: explicit, statically-populated implementation discovery
//! - **ADTs**: [`adt::MutIter`] and [`adt::Ring`]
//!
//! ## Feature Flags
//!
//! - `functor`: functor modules for slices, `Option` and iterators
//! - `traverse`: `traverse` / `sequence` (enables `functor` and `itertools`)
//! - `itertools`: iterator utilities
//! - `dict`: map utilities
//! - `adt`: `MutIter` and `Ring`
//! - `registry`: implementation registry
//! - `fxhash` / `ahash`: faster hasher for the [`hash::Map`] alias
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ftoolz::prelude::*;
//!
//! let doubled = seq::fmap(|x: &i32| x * 2, &[1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let sum = opt::fmap2(|a, b| a + b, Some(1), Some(2));
//! assert_eq!(sum, Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the functor modules under short names together with the
/// commonly used types.
///
/// # Usage
///
/// ```rust
/// use ftoolz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ToolzError;
    pub use crate::hash::Map;
    pub use crate::predicates::*;

    #[cfg(feature = "functor")]
    pub use crate::functor::{compose::*, iter, opt, seq};

    #[cfg(feature = "traverse")]
    pub use crate::functor::traverse::*;

    #[cfg(feature = "itertools")]
    pub use crate::itertools::*;

    #[cfg(feature = "dict")]
    pub use crate::dict::*;

    #[cfg(feature = "adt")]
    pub use crate::adt::*;

    #[cfg(feature = "registry")]
    pub use crate::registry::{Kind, Registration, Registry, RegistryError};
}

pub mod error;
pub mod hash;
pub mod predicates;

#[cfg(feature = "functor")]
pub mod functor;

#[cfg(feature = "itertools")]
pub mod itertools;

#[cfg(feature = "dict")]
pub mod dict;

#[cfg(feature = "adt")]
pub mod adt;

#[cfg(feature = "registry")]
pub mod registry;
