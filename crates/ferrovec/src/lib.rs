//! A growable, contiguous array that manages its own raw storage.
//!
//! # Architecture
//!
//! ```text
//! Vector<T>
//! ├── RawStorage<T>   (ferrovec-raw: acquire, release, address slots)
//! └── len             (live elements at the front of the block)
//! ```
//!
//! [`RawStorage`] only ever acquires and releases memory. [`Vector`]
//! constructs and destroys every element explicitly inside that block,
//! and is the only layer that knows which slots are live.
//!
//! # Failure guarantees
//!
//! Operations either complete or leave the vector as it was. Element
//! constructors that panic (or return `Err` through the `try_` variants)
//! trigger local cleanup of whatever the call built, followed by
//! propagation. Storage exhaustion is reported before any element is
//! touched. See the [`vector`](mod@vector) module for the one documented exception.
//!
//! # Example
//!
//! ```
//! use ferrovec::{vector, Vector};
//!
//! let mut v: Vector<i32> = vector![1, 2, 3];
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 2, 3]);
//! assert_eq!(v.remove(0), 1);
//! v.pop();
//! assert_eq!(v, [9, 2]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

mod guard;
mod impls;
pub mod into_iter;
pub mod vector;

pub use ferrovec_raw::{RawStorage, StorageError};
pub use into_iter::IntoIter;
pub use vector::Vector;

/// Build a [`Vector`] from a list of elements or a repeated element.
///
/// ```
/// use ferrovec::vector;
///
/// let empty: ferrovec::Vector<u8> = vector![];
/// let listed = vector![1, 2, 3];
/// let repeated = vector![String::from("x"); 2];
/// assert!(empty.is_empty());
/// assert_eq!(listed.len(), 3);
/// assert_eq!(repeated, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {{
        let elem = $elem;
        $crate::Vector::from_fn($n, |_| ::core::clone::Clone::clone(&elem))
    }};
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}
