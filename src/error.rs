//! Error types for [`DynamicArray`](crate::DynamicArray) operations.
//!
//! Every fallible operation on the array reports one of three conditions:
//! a rank outside the valid element range, a malformed range argument,
//! or an allocation failure while the storage manager resizes the buffer.
//! Errors are raised at the call that violates the bound; nothing is
//! clamped or retried.

use thiserror::Error;

/// Represents errors that can occur while operating on a `DynamicArray`.
///
/// # Examples
///
/// ```rust
/// use rankvec::{ArrayError, DynamicArray};
///
/// let array: DynamicArray<i32> = DynamicArray::new();
/// assert_eq!(
///     array.at(0),
///     Err(ArrayError::IndexOutOfRange { rank: 0, size: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A rank argument exceeds the current size.
    #[error("rank {rank} out of range for array of size {size}")]
    IndexOutOfRange {
        /// The offending rank.
        rank: usize,
        /// The array size at the time of the call.
        size: usize,
    },

    /// A range argument violates the ordering its operation requires.
    #[error("invalid range [{lo}, {hi})")]
    InvalidArgument {
        /// Inclusive lower bound of the range.
        lo: usize,
        /// Exclusive upper bound of the range.
        hi: usize,
    },

    /// The storage manager could not allocate a buffer of the requested capacity.
    #[error("failed to allocate buffer for {capacity} elements")]
    OutOfMemory {
        /// The capacity that could not be satisfied.
        capacity: usize,
    },
}

/// A specialized `Result` type for array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;

static_assertions::assert_impl_all!(ArrayError: std::error::Error, Send, Sync, Clone);
