//! Small iterator data types.
//!
//! - [`MutIter`]: a queue that can be appended to and consumed as an iterator
//! - [`Ring`]: a fixed-size rotating sequence that never runs out while it
//!   holds elements

mod mut_iter;
mod ring;

pub use mut_iter::MutIter;
pub use ring::Ring;
