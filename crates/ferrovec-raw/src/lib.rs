//! Raw storage for the ferrovec growable array.
//!
//! This is the leaf crate of the workspace. It owns blocks of
//! uninitialised memory sized for a fixed number of `T` slots and knows
//! nothing about which slots hold live values:
//!
//! ```text
//! RawStorage<T>
//! ├── ptr: NonNull<T>     (dangling when nothing is allocated)
//! └── capacity: usize     (slot count, live or not)
//! ```
//!
//! Growth is never done in place. The owner acquires a new block,
//! relocates its live elements, and drops the old block, which releases
//! the memory without running any destructor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod storage;

pub use error::StorageError;
pub use storage::RawStorage;
