//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the line whose last use is oldest. Every access stamps the touched
//! line with a fresh value of the model's logical clock, so the victim is
//! simply the line with the smallest stamp. This is exact LRU for any access
//! order, unlike counters that only age the lines scanned before a hit.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()` is O(W) where W is the associativity.
//! - **Space Complexity:** one `u64` stamp per line, stored in the line.

use super::ReplacementPolicy;
use crate::cache::set::CacheSet;

/// LRU policy. Stateless; recency is carried by the line stamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Returns the way with the smallest stamp.
    ///
    /// Equal stamps cannot occur while the clock is monotonic; if they did,
    /// the lowest way wins because `min_by_key` keeps the first minimum.
    fn select_victim(&self, set: &CacheSet) -> usize {
        set.lines()
            .iter()
            .enumerate()
            .min_by_key(|(_, line)| line.stamp)
            .map_or(0, |(way, _)| way)
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
