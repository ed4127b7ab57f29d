//! Snapshot identity for grids.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`GridId`] allocation.
static GRID_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of one grid snapshot.
///
/// Every grid built or derived through an obstacle change receives a fresh
/// id from a monotonic counter. Cloning a grid preserves its id, which is
/// correct because a grid is immutable once built: equal ids imply equal
/// contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(u64);

impl GridId {
    /// Allocate a fresh id. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
