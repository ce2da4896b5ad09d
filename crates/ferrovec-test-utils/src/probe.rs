//! Instrumented element type.
//!
//! Every [`Probe`] construction, clone and drop is recorded in a ledger
//! local to the current thread. libtest runs each test on its own
//! thread, so tests do not see each other's counts; call [`reset`] at
//! the start of a test anyway to zero anything left by setup code.
//! Probes still alive at a reset are carried over, so [`Tally::live`]
//! stays exact when they are dropped afterwards.
//!
//! Fault injection: [`fail_on_construction`]`(k)` makes the k-th
//! following construction (`new`, `default` or `clone`) panic before a
//! value exists. The ledger only counts constructions that succeeded,
//! so `tally().live()` is the number of probes alive right now.

use std::cell::RefCell;
use std::fmt;

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::new(Ledger::default());
}

#[derive(Default)]
struct Ledger {
    tally: Tally,
    /// Constructions left until the injected failure; `None` when disarmed.
    fail_in: Option<usize>,
}

/// Snapshot of the current thread's probe ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Successful constructions of any kind, clones included.
    pub constructed: usize,
    /// Successful clones.
    pub cloned: usize,
    /// Drops, including drops of carried probes.
    pub dropped: usize,
    /// Probes that were alive when the ledger was last reset.
    pub carried: usize,
}

impl Tally {
    /// Probes currently alive on this thread.
    pub fn live(&self) -> usize {
        self.carried + self.constructed - self.dropped
    }
}

/// Zero the counts and disarm any pending failure.
///
/// Probes alive at this point are recorded in [`Tally::carried`].
pub fn reset() {
    LEDGER.with(|l| {
        let mut ledger = l.borrow_mut();
        let carried = ledger.tally.live();
        *ledger = Ledger {
            tally: Tally {
                carried,
                ..Tally::default()
            },
            fail_in: None,
        };
    });
}

/// Current ledger counts.
pub fn tally() -> Tally {
    LEDGER.with(|l| l.borrow().tally)
}

/// Make the `k`-th construction from now panic. `k` must be at least 1.
pub fn fail_on_construction(k: usize) {
    assert!(k >= 1, "construction index is 1-based");
    LEDGER.with(|l| l.borrow_mut().fail_in = Some(k));
}

/// Cancel a pending [`fail_on_construction`].
pub fn disarm() {
    LEDGER.with(|l| l.borrow_mut().fail_in = None);
}

fn record_construction(cloned: bool) {
    let fail = LEDGER.with(|l| {
        let mut ledger = l.borrow_mut();
        match ledger.fail_in {
            Some(1) => {
                ledger.fail_in = None;
                true
            }
            Some(n) => {
                ledger.fail_in = Some(n - 1);
                false
            }
            None => false,
        }
    });
    if fail {
        panic!("probe: injected construction failure");
    }
    LEDGER.with(|l| {
        let mut ledger = l.borrow_mut();
        ledger.tally.constructed += 1;
        if cloned {
            ledger.tally.cloned += 1;
        }
    });
}

/// An `i64` payload whose lifecycle is recorded in the thread's ledger.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Probe {
    value: i64,
}

impl Probe {
    /// Construct a probe. Panics if a failure is armed for this construction.
    pub fn new(value: i64) -> Self {
        record_construction(false);
        Self { value }
    }

    /// The payload.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        record_construction(true);
        Self { value: self.value }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        // `try_with` so a probe dropped during thread teardown does not abort.
        let _ = LEDGER.try_with(|l| l.borrow_mut().tally.dropped += 1);
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({})", self.value)
    }
}

impl From<i64> for Probe {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Payloads of a probe slice, for compact assertions.
pub fn values(probes: &[Probe]) -> Vec<i64> {
    probes.iter().map(Probe::value).collect()
}
