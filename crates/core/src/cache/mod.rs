//! Set-Associative Cache Model.
//!
//! This module implements the storage and lookup side of the simulator. It provides:
//! 1. **Storage:** `S` sets of `E` lines each, owned exclusively by the model.
//! 2. **Lookup:** Tag matching within the decoded set.
//! 3. **Replacement:** Cold fills into the lowest invalid way, otherwise the
//!    victim chosen by a [`ReplacementPolicy`] (LRU by default).
//!
//! A single logical clock advances once per access and stamps the touched
//! line. Stamps are therefore unique across the whole model.

/// Cache line type.
pub mod line;

/// Replacement policy implementations.
pub mod policies;

/// Cache set type.
pub mod set;

use std::fmt;

use tracing::{debug, trace};

pub use self::line::CacheLine;
pub use self::policies::{LruPolicy, ReplacementPolicy};
pub use self::set::CacheSet;
use crate::common::{AccessRequest, Addr, Result, decode};
use crate::config::CacheGeometry;
use crate::stats::CacheStats;

/// Classification of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessResult {
    /// The tag was resident.
    Hit,
    /// The tag was filled into a previously invalid line.
    MissCold,
    /// The tag replaced a valid line.
    MissEviction,
}

impl AccessResult {
    /// Returns `true` for [`AccessResult::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Returns `true` if a valid line was displaced.
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::MissEviction)
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::MissCold => "miss",
            Self::MissEviction => "miss eviction",
        })
    }
}

/// Set-associative cache with a global logical clock.
#[derive(Debug)]
pub struct CacheModel {
    geometry: CacheGeometry,
    sets: Vec<CacheSet>,
    clock: u64,
    policy: Box<dyn ReplacementPolicy>,
}

impl CacheModel {
    /// Creates an empty LRU cache with the given geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`](crate::common::SimError::Configuration)
    /// if the geometry fails [`CacheGeometry::validate`].
    pub fn new(geometry: CacheGeometry) -> Result<Self> {
        Self::with_policy(geometry, Box::new(LruPolicy::new()))
    }

    /// Creates an empty cache with a custom replacement policy.
    ///
    /// # Errors
    ///
    /// Same as [`CacheModel::new`].
    pub fn with_policy(
        geometry: CacheGeometry,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self> {
        geometry.validate()?;
        let num_sets = geometry.num_sets();

        debug!(
            sets = num_sets,
            ways = geometry.lines_per_set,
            block_bits = geometry.block_bits,
            policy = policy.name(),
            "cache model created"
        );

        Ok(Self {
            geometry,
            sets: (0..num_sets)
                .map(|_| CacheSet::new(geometry.lines_per_set))
                .collect(),
            clock: 0,
            policy,
        })
    }

    /// The geometry this model was built with.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Current logical time; equals the number of accesses performed.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Number of sets.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Borrows the set at `index`, if it exists.
    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    /// Decodes `addr` with this model's geometry.
    #[inline]
    pub fn decode(&self, addr: Addr) -> AccessRequest {
        decode(addr, self.geometry.set_bits, self.geometry.block_bits)
    }

    /// Returns `true` if the block containing `addr` is resident.
    ///
    /// Does not advance the clock or change any recency.
    pub fn contains(&self, addr: Addr) -> bool {
        let req = self.decode(addr);
        self.sets[req.set_index].find(req.tag).is_some()
    }

    /// Performs one access and records its outcome in `stats`.
    ///
    /// 1. Advance the clock.
    /// 2. On a tag match, restamp that line: `Hit`.
    /// 3. Otherwise fill the lowest invalid way: `MissCold`.
    /// 4. Otherwise replace the policy's victim: `MissEviction`.
    ///
    /// The set index is reduced modulo `S`, so any request is accepted.
    pub fn access(&mut self, req: AccessRequest, stats: &mut CacheStats) -> AccessResult {
        self.clock += 1;
        let now = self.clock;
        let set_index = req.set_index & (self.sets.len() - 1);
        let set = &mut self.sets[set_index];

        let result = if let Some(way) = set.find(req.tag) {
            set.line_mut(way).touch(now);
            AccessResult::Hit
        } else if let Some(way) = set.first_invalid() {
            set.line_mut(way).fill(req.tag, now);
            AccessResult::MissCold
        } else {
            let way = self.policy.select_victim(set);
            set.line_mut(way).fill(req.tag, now);
            AccessResult::MissEviction
        };

        trace!(set = set_index, tag = req.tag, clock = now, %result, "access");
        stats.record(result);
        result
    }

    /// Decodes `addr` and performs one access.
    pub fn access_addr(&mut self, addr: Addr, stats: &mut CacheStats) -> AccessResult {
        let req = self.decode(addr);
        self.access(req, stats)
    }
}
