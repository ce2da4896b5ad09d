//! Seeded operation scripts.
//!
//! [`OpScript`] emits an endless stream of container operations that are
//! valid for the length the script is tracking, so positions never need
//! to be clamped by the consumer. The same seed always yields the same
//! stream (`ChaCha8Rng`), which keeps failures reproducible.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One container operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append a value.
    Push(i64),
    /// Remove the last value. Only emitted when non-empty.
    Pop,
    /// Insert `value` so that it ends up at `at` (`at <= len`).
    Insert {
        /// Target position.
        at: usize,
        /// Value to insert.
        value: i64,
    },
    /// Remove the value at `at` (`at < len`).
    Remove {
        /// Position to remove.
        at: usize,
    },
    /// Resize to the given length, default-filling growth.
    Resize(usize),
    /// Reserve the given absolute capacity.
    Reserve(usize),
    /// Drop everything past the given length (`<= len`).
    Truncate(usize),
    /// Drop everything.
    Clear,
}

/// Deterministic generator of [`Op`]s.
pub struct OpScript {
    rng: ChaCha8Rng,
    /// Length of the container the emitted ops have been applied to.
    len: usize,
    max_len: usize,
}

impl OpScript {
    /// Default upper bound on the tracked length.
    pub const DEFAULT_MAX_LEN: usize = 256;

    /// A script seeded with `seed`, starting from an empty container.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            len: 0,
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }

    /// Bound the tracked length. Must be at least 1.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        assert!(max_len >= 1, "max_len must be at least 1");
        self.max_len = max_len;
        self
    }

    /// Length the container will have after every emitted op so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tracked container is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Emit the next `count` ops.
    pub fn generate(&mut self, count: usize) -> Vec<Op> {
        self.by_ref().take(count).collect()
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.rng.next_u64() % bound as u64) as usize
    }

    fn value(&mut self) -> i64 {
        (self.rng.next_u64() % 2_000) as i64 - 1_000
    }

    fn next_op(&mut self) -> Op {
        let roll = self.below(100);
        let full = self.len >= self.max_len;
        let op = match roll {
            0..=39 if !full => Op::Push(self.value()),
            0..=51 if self.len > 0 => Op::Pop,
            52..=69 if !full => {
                let at = self.below(self.len + 1);
                Op::Insert {
                    at,
                    value: self.value(),
                }
            }
            52..=81 if self.len > 0 => Op::Remove {
                at: self.below(self.len),
            },
            82..=87 => Op::Resize(self.below(self.max_len + 1)),
            88..=92 => Op::Reserve(self.below(self.max_len * 2 + 1)),
            93..=97 => Op::Truncate(self.below(self.len + 1)),
            98..=99 => Op::Clear,
            // Fallbacks when the preferred op is not valid for `len`.
            _ if full => Op::Pop,
            _ => Op::Push(self.value()),
        };
        self.len = match op {
            Op::Push(_) | Op::Insert { .. } => self.len + 1,
            Op::Pop | Op::Remove { .. } => self.len - 1,
            Op::Resize(n) => n,
            Op::Reserve(_) => self.len,
            Op::Truncate(n) => n.min(self.len),
            Op::Clear => 0,
        };
        op
    }
}

impl Iterator for OpScript {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        Some(self.next_op())
    }
}
