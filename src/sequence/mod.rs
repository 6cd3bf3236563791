//! Linear sequence containers.
//!
//! This module provides two mutable sequence containers that expose the
//! same conceptual contract, so client code is container-agnostic:
//!
//! - [`ContiguousSequence`]: a dynamically-resized contiguous buffer with
//!   amortized O(1) append and O(n) insertion/removal elsewhere
//! - [`LinkedSequence`]: a doubly-linked node list over an index arena with
//!   O(1) insertion/removal at both ends and at a known position
//!
//! # The container contract
//!
//! Both containers support size queries, insertion at either end or before
//! an arbitrary position, removal at either end, at a position, or over a
//! half-open position range, and bidirectional position-based traversal
//! through cursors. The shared mutation surface is captured by the
//! [`Sequence`] trait, which the benchmark driver and the cross-container
//! tests are written against.
//!
//! # Positions and invalidation
//!
//! Traversal happens through borrowing cursor types (`cursor_begin`,
//! `cursor_end` and their `_mut` variants). A cursor can be *detached* into
//! a plain position token (a `usize` offset for [`ContiguousSequence`], a
//! [`NodeHandle`] for [`LinkedSequence`]) which the structural mutators
//! accept. Structural mutation invalidates previously detached positions
//! into the mutated region: a stale offset or a freed arena slot reports
//! [`SequenceError::OutOfRange`], while a recycled arena slot resolves to
//! whatever node now owns it. Cursor equality compares storage identity
//! (buffer offset or node identity), never element values.
//!
//! # Examples
//!
//! ## `ContiguousSequence`
//!
//! ```rust
//! use linseq::sequence::ContiguousSequence;
//!
//! let mut sequence = ContiguousSequence::from([1, 2, 3]);
//! sequence.push_front(0);
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(sequence.pop_front(), Ok(0));
//! ```
//!
//! ## `LinkedSequence`
//!
//! ```rust
//! use linseq::sequence::LinkedSequence;
//!
//! let mut sequence = LinkedSequence::from([1, 2, 3]);
//! let position = sequence.cursor_begin().forward(1).unwrap().handle();
//! sequence.insert(position, 10).unwrap();
//! let collected: Vec<i32> = sequence.iter().copied().collect();
//! assert_eq!(collected, vec![1, 10, 2, 3]);
//! ```

mod contiguous;
mod error;
mod linked;

pub use contiguous::ContiguousCursor;
pub use contiguous::ContiguousCursorMut;
pub use contiguous::ContiguousSequence;
pub use contiguous::ContiguousSequenceIntoIterator;
pub use contiguous::ContiguousSequenceIterator;
pub use contiguous::ContiguousSequenceIteratorMut;
pub use error::SequenceError;
pub use linked::LinkedCursor;
pub use linked::LinkedCursorMut;
pub use linked::LinkedSequence;
pub use linked::LinkedSequenceIntoIterator;
pub use linked::LinkedSequenceIterator;
pub use linked::NodeHandle;

/// The mutation surface shared by both sequence containers.
///
/// Client code written against this trait, such as the benchmark driver,
/// runs unchanged over either container kind.
///
/// # Examples
///
/// ```rust
/// use linseq::sequence::{ContiguousSequence, LinkedSequence, Sequence};
///
/// fn drain_front<S: Sequence<i32>>(sequence: &mut S) -> Vec<i32> {
///     let mut drained = Vec::new();
///     while let Ok(element) = sequence.pop_front() {
///         drained.push(element);
///     }
///     drained
/// }
///
/// let mut contiguous: ContiguousSequence<i32> = (0..3).collect();
/// let mut linked: LinkedSequence<i32> = (0..3).collect();
/// assert_eq!(drain_front(&mut contiguous), drain_front(&mut linked));
/// ```
pub trait Sequence<T> {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element at the front of the sequence.
    fn push_front(&mut self, element: T);

    /// Appends an element at the back of the sequence.
    fn push_back(&mut self, element: T);

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence is empty.
    fn pop_front(&mut self) -> Result<T, SequenceError>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence is empty.
    fn pop_back(&mut self) -> Result<T, SequenceError>;
}

// =============================================================================
// Tests
// =============================================================================
