//! Simulation statistics collection and reporting.
//!
//! [`CacheStats`] is owned by a single run and passed explicitly to the cache
//! model; there are no process-wide counters. Counters only ever increase.

use std::fmt;

use crate::cache::AccessResult;

/// Hit, miss, and eviction counters for one simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheStats {
    /// Creates a zeroed set of counters.
    pub const fn new() -> Self {
        Self {
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Counts one hit.
    #[inline]
    pub const fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts one miss.
    #[inline]
    pub const fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts one eviction.
    #[inline]
    pub const fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts the outcome of one access. An eviction is also a miss.
    pub const fn record(&mut self, result: AccessResult) {
        match result {
            AccessResult::Hit => self.record_hit(),
            AccessResult::MissCold => self.record_miss(),
            AccessResult::MissEviction => {
                self.record_miss();
                self.record_eviction();
            }
        }
    }

    /// Returns `(hits, misses, evictions)`.
    pub const fn snapshot(&self) -> (u64, u64, u64) {
        (self.hits, self.misses, self.evictions)
    }

    /// Number of hits.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of misses, cold and evicting.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of misses that displaced a valid line.
    pub const fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Total accesses classified.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0.0 for an empty run.
    pub fn hit_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

impl fmt::Display for CacheStats {
    /// Formats the summary line: `hits:<h> misses:<m> evictions:<e>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}
