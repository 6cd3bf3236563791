//! Error types for sequence operations.
//!
//! This module provides the error taxonomy shared by both sequence
//! containers. Every fallible operation reports which named operation
//! failed and why; no failure is swallowed, retried, or recovered from
//! internally, and a failed call never leaves a container partially
//! mutated.

use std::fmt;

/// Represents a failed sequence or cursor operation.
///
/// Two kinds of failure exist:
///
/// - [`Empty`](Self::Empty): an operation that requires at least one element
///   was called on an empty container (`pop_front`, `pop_back`, `remove`).
/// - [`OutOfRange`](Self::OutOfRange): a position fell outside the valid
///   `[begin, end]` window: dereferencing or stepping a cursor past a
///   boundary, removing at the end position, offset arithmetic leaving the
///   window, or a detached position that no longer resolves.
///
/// The `operation` field names the call that failed.
///
/// # Examples
///
/// ```rust
/// use linseq::sequence::SequenceError;
///
/// let error = SequenceError::Empty {
///     operation: "pop_front",
/// };
/// assert_eq!(format!("{}", error), "pop_front: sequence is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The operation requires a non-empty sequence.
    Empty {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// The position lies outside the valid window of the sequence.
    OutOfRange {
        /// The name of the operation that failed.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Empty { operation } | Self::OutOfRange { operation } => operation,
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(formatter, "{operation}: sequence is empty")
            }
            Self::OutOfRange { operation } => {
                write!(formatter, "{operation}: position out of range")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
