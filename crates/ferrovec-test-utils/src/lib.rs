//! Test utilities for ferrovec development.
//!
//! - [`probe`]: [`Probe`], an element type that keeps a per-thread
//!   ledger of constructions, clones and drops, and can be armed to
//!   panic on the k-th construction.
//! - [`script`]: [`OpScript`], a seeded generator of valid container
//!   operations for replay against a reference model.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod probe;
pub mod script;

pub use probe::{Probe, Tally};
pub use script::{Op, OpScript};

/// Run `f`, reporting whether it unwound.
///
/// The closure is treated as unwind-safe; callers inspect state after
/// the panic on purpose.
pub fn unwinds<F: FnOnce()>(f: F) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).is_err()
}
