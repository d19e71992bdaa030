//! Error types for the toolkit.
//!
//! Most operations in this crate report "not found" through `Option` and
//! never fail. [`ToolzError`] covers the remaining contract violations:
//! invalid arguments, empty inputs and exhausted iterators.
//!
//! Errors raised by caller-supplied functions are never wrapped in
//! [`ToolzError`]; they propagate unchanged through the caller's own types.

use thiserror::Error;

/// Errors reported by toolkit operations.
///
/// # Examples
///
/// ```rust
/// use ftoolz::error::ToolzError;
///
/// let error = ToolzError::EmptyInput { operation: "head_tail" };
/// assert_eq!(format!("{error}"), "head_tail: empty input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolzError {
    /// An argument violated the operation's contract (e.g. a negative count).
    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        message: String,
    },

    /// The operation requires at least one element.
    #[error("{operation}: empty input")]
    EmptyInput {
        /// The name of the operation that received the empty input.
        operation: &'static str,
    },

    /// The iterator had no more elements to read.
    #[error("{operation}: iterator exhausted")]
    Exhausted {
        /// The name of the operation that read past the end.
        operation: &'static str,
    },

    /// A value was expected to be present but was `None`.
    #[error("item expected to be present, none given")]
    MissingValue,
}

impl ToolzError {
    /// Creates an [`ToolzError::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }
}

static_assertions::assert_impl_all!(ToolzError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ToolzError::invalid_argument("take", "n must be non-negative"),
        "take: invalid argument: n must be non-negative"
    )]
    #[case(ToolzError::EmptyInput { operation: "head_tail" }, "head_tail: empty input")]
    #[case(ToolzError::Exhausted { operation: "take_first" }, "take_first: iterator exhausted")]
    #[case(ToolzError::MissingValue, "item expected to be present, none given")]
    fn test_error_display(#[case] error: ToolzError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_equality() {
        let error1 = ToolzError::EmptyInput { operation: "head_tail" };
        let error2 = ToolzError::EmptyInput { operation: "head_tail" };
        let error3 = ToolzError::Exhausted { operation: "head_tail" };

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
