//! Benchmark workloads for the ferrovec growable array.
//!
//! - [`scripted_workload`]: a deterministic operation script via seed
//! - [`replay`]: apply a script to a [`Vector`]
//! - [`replay_std`]: apply the same script to a `std::vec::Vec`, the
//!   baseline the benches and the integration tests compare against

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferrovec::Vector;
use ferrovec_test_utils::{Op, OpScript};

/// Generate `count` ops from `seed`, keeping the length at most `max_len`.
pub fn scripted_workload(seed: u64, count: usize, max_len: usize) -> Vec<Op> {
    OpScript::new(seed).with_max_len(max_len).generate(count)
}

/// Apply `ops` to `target` in order.
///
/// `Reserve` is an absolute capacity, matching [`Vector::reserve`].
pub fn replay(target: &mut Vector<i64>, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::Push(value) => {
                target.push(value);
            }
            Op::Pop => {
                target.pop();
            }
            Op::Insert { at, value } => {
                target.insert(at, value);
            }
            Op::Remove { at } => {
                target.remove(at);
            }
            Op::Resize(len) => target.resize(len),
            Op::Reserve(capacity) => target.reserve(capacity),
            Op::Truncate(len) => target.truncate(len),
            Op::Clear => target.clear(),
        }
    }
}

/// Apply `ops` to a `Vec` with the same semantics as [`replay`].
pub fn replay_std(target: &mut Vec<i64>, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::Push(value) => target.push(value),
            Op::Pop => {
                target.pop();
            }
            Op::Insert { at, value } => target.insert(at, value),
            Op::Remove { at } => {
                target.remove(at);
            }
            Op::Resize(len) => target.resize(len, 0),
            Op::Reserve(capacity) => target.reserve(capacity.saturating_sub(target.len())),
            Op::Truncate(len) => target.truncate(len),
            Op::Clear => target.clear(),
        }
    }
}
