//! # linseq
//!
//! Linear sequence containers for Rust: a growable contiguous buffer and an
//! arena-backed doubly-linked list exposing one container/cursor contract.
//!
//! ## Overview
//!
//! This library provides two generic, random-access-agnostic sequence
//! containers that share the same conceptual API, so client code can be
//! written against either:
//!
//! - **[`ContiguousSequence`]**: a single heap buffer with amortized-growth
//!   insertion at both ends and O(n) insertion/removal in the middle.
//! - **[`LinkedSequence`]**: a doubly-linked node list over an index arena
//!   with a sentinel terminal node and O(1) insertion/removal at both ends
//!   and at a known position.
//!
//! Both containers support bidirectional, position-based traversal through
//! cursor types, and every boundary violation is reported as a
//! [`SequenceError`] instead of being silently absorbed.
//!
//! [`ContiguousSequence`]: sequence::ContiguousSequence
//! [`LinkedSequence`]: sequence::LinkedSequence
//! [`SequenceError`]: sequence::SequenceError
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for both containers
//!
//! ## Example
//!
//! ```rust
//! use linseq::prelude::*;
//!
//! let mut sequence = ContiguousSequence::new();
//! sequence.push_back(1);
//! sequence.push_front(0);
//! assert_eq!(sequence.len(), 2);
//! assert_eq!(sequence.pop_back(), Ok(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use linseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;
