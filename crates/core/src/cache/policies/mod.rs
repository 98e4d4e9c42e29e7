//! Cache Replacement Policies.
//!
//! A policy picks the victim way when a miss lands in a full set. Recency
//! bookkeeping lives in the lines themselves (see
//! [`CacheLine::stamp`](crate::cache::CacheLine::stamp)), so a policy only
//! reads the set it is handed.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, by logical-clock stamp.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

use super::set::CacheSet;

/// Trait for cache replacement policies.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Selects the way to evict from a full set.
    ///
    /// # Arguments
    ///
    /// * `set` - The target set; every line in it is valid.
    ///
    /// # Returns
    ///
    /// The index of the way to evict, in `[0, set.ways())`.
    fn select_victim(&self, set: &CacheSet) -> usize;

    /// Short policy name for logs.
    fn name(&self) -> &'static str;
}
