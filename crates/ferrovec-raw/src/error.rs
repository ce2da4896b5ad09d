//! Storage acquisition errors.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors that can occur while acquiring a block of raw storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The byte size of the requested block does not fit in `isize::MAX`.
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocationFailed {
        /// Layout that was passed to the allocator.
        layout: Layout,
    },
}

impl StorageError {
    /// Diverge the way the standard collections do for this error.
    ///
    /// `CapacityOverflow` panics; `AllocationFailed` goes through
    /// [`std::alloc::handle_alloc_error`].
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow { .. } => panic!("{self}"),
            Self::AllocationFailed { layout } => std::alloc::handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots do not fit in isize::MAX bytes")
            }
            Self::AllocationFailed { layout } => {
                write!(
                    f,
                    "allocation failed: {} bytes with alignment {}",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for StorageError {}
