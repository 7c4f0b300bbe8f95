// SPDX-License-Identifier: MPL-2.0
//! In-memory single-flight guard.
//!
//! Tracks which keys have an operation in flight so that a second request
//! for the same key can be refused until the first one completes.

use std::collections::HashSet;
use std::hash::Hash;

/// Set of keys with an operation currently in flight.
#[derive(Debug, Clone)]
pub struct SingleFlight<K> {
    in_flight: HashSet<K>,
}

impl<K> Default for SingleFlight<K> {
    fn default() -> Self {
        Self {
            in_flight: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> SingleFlight<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as in flight.
    ///
    /// Returns `false` if an operation for `key` is already running, in which
    /// case the caller must not start another one.
    pub fn try_begin(&mut self, key: &K) -> bool {
        self.in_flight.insert(key.clone())
    }

    /// Marks the operation for `key` as completed.
    ///
    /// Returns `true` if `key` was in flight.
    pub fn finish(&mut self, key: &K) -> bool {
        self.in_flight.remove(key)
    }

    #[must_use]
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.in_flight.contains(key)
    }
}
