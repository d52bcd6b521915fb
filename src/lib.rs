//! # rankvec
//!
//! A generic, contiguous, resizable sequence container with rank-based
//! access, ordered and unordered search, stable in-place sorting, and
//! duplicate elimination.
//!
//! ## Overview
//!
//! [`DynamicArray`] owns its buffer and manages capacity explicitly:
//!
//! - **Storage**: the buffer doubles when an insertion finds it full and halves
//!   when a removal leaves it at most a quarter full, never dropping below the
//!   floor of its [`CapacityPolicy`].
//! - **Access & Mutation**: rank-checked `at`, `insert`, `remove`, and
//!   `remove_range`, plus copy construction and assignment.
//! - **Ordering**: `disorder`, backward linear `find`, stable merge `sort`,
//!   binary `search` that resolves ties to the highest rank, and random
//!   `unsort`.
//! - **Duplicates & Traversal**: `deduplicate` for unordered data,
//!   `uniquify` for sorted data, and visitor-based `traverse`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `DynamicArray`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rankvec::prelude::*;
//!
//! let mut array: DynamicArray<i32> = [3, 1, 4, 1, 5, 9, 2, 6, 1].into_iter().collect();
//! assert_eq!(array.deduplicate(), 2);
//!
//! array.sort();
//! assert_eq!(format!("{array}"), "[1, 2, 3, 4, 5, 6, 9]");
//! assert_eq!(array.search(&4), Some(3));
//!
//! array.insert(0, 10).unwrap();
//! assert_eq!(array.remove_range(1, 8), Ok(7));
//! assert_eq!(format!("{array}"), "[10]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its configuration, and its error types.
///
/// # Usage
///
/// ```rust
/// use rankvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::DynamicArray;
    pub use crate::error::{ArrayError, Result};
    pub use crate::storage::{CapacityPolicy, StorageStats};
}

pub mod array;
pub mod error;
pub mod storage;

mod dedup;
mod ordering;

pub use array::{DynamicArray, IntoIter, Iter, IterMut};
pub use error::{ArrayError, Result};
pub use storage::{CapacityPolicy, DEFAULT_CAPACITY, SHRINK_RATIO, StorageStats};

static_assertions::assert_impl_all!(DynamicArray<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(DynamicArray<std::rc::Rc<i32>>: Send, Sync);
