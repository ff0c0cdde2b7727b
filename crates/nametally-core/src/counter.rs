//! In-memory tally of greeted names.
//!
//! `NameCounter` is the only shared mutable state in the system. One exclusive
//! lock guards the map, and the lock scope covers exactly the map access:
//! callers never hold it across formatting, JSON encoding, or I/O. The counter
//! is an injected service object, not a process global, so tests can run
//! independent instances in parallel.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// One `(name, count)` entry from a [`NameCounter::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

/// Mutex-guarded name -> visit-count map.
///
/// Invariants:
/// - every key present has count >= 1; a never-seen name is absent;
/// - increments are never lost or duplicated under concurrent callers;
/// - a snapshot reflects the map at a single instant, never a partial mutation.
#[derive(Debug, Default)]
pub struct NameCounter {
    counts: Mutex<HashMap<String, u64>>,
}

impl NameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicked lock holder can only have completed or not-completed a
    // single-step mutation, so the map is still consistent after poison.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add 1 to `name`, inserting it at 1 if absent.
    ///
    /// Accepts any string, the empty one included. Safe to call from
    /// arbitrarily many tasks concurrently with no lost updates.
    pub fn increment(&self, name: &str) {
        let mut counts = self.lock();
        match counts.get_mut(name) {
            Some(n) => *n += 1,
            None => {
                counts.insert(name.to_string(), 1);
            }
        }
    }

    /// Point-in-time copy of the tally, order unspecified.
    ///
    /// The returned entries are owned; later mutations of the counter are not
    /// visible through them.
    pub fn snapshot(&self) -> Vec<NameCount> {
        let counts = self.lock();
        counts
            .iter()
            .map(|(name, &count)| NameCount {
                name: name.clone(),
                count,
            })
            .collect()
    }

    /// Atomically discard all entries.
    ///
    /// A concurrent [`snapshot`](Self::snapshot) observes either the fully-old
    /// or the fully-new map, never a mix.
    pub fn clear(&self) {
        let mut counts = self.lock();
        *counts = HashMap::new();
    }
}
