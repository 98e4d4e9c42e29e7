//! Trace-driven set-associative cache simulator library.
//!
//! This crate classifies every memory access of a trace as a hit, a cold
//! miss, or an evicting miss against a configurable cache:
//! 1. **Geometry:** `2^s` sets of `E` lines with `2^b`-byte blocks.
//! 2. **Model:** Exact LRU replacement driven by a global logical clock.
//! 3. **Traces:** Decoding of `<op> <hexaddr>,<size>` lines (`I`, `L`, `S`, `M`).
//! 4. **Simulation:** Ordered replay and hit/miss/eviction totals.
//!
//! ```
//! use csim_core::{CacheGeometry, Operation, OpKind, replay};
//!
//! let ops = [
//!     Operation::new(OpKind::Modify, 0x0, 1),
//!     Operation::new(OpKind::Load, 0x4, 1),
//! ];
//! let stats = replay(CacheGeometry::new(0, 1, 3), ops.into_iter().map(Ok)).unwrap();
//! assert_eq!(stats.snapshot(), (2, 1, 0));
//! ```

/// Cache storage, lookup, and replacement.
pub mod cache;
/// Common types (addresses, decoding, errors).
pub mod common;
/// Cache geometry configuration.
pub mod config;
/// Trace replay and whole-run entry points.
pub mod sim;
/// Hit/miss/eviction statistics.
pub mod stats;
/// Trace operations, parsing, and reading.
pub mod trace;

/// The cache model; construct with `CacheModel::new`.
pub use crate::cache::{AccessResult, CacheModel};
/// Error type and result alias.
pub use crate::common::{Result, SimError};
/// Geometry; use `CacheGeometry::new(s, E, b)`, or layer sources with `PartialGeometry`.
pub use crate::config::{CacheGeometry, PartialGeometry};
/// Replay driver and run helpers.
pub use crate::sim::{Outcome, TraceReplay, replay, simulate_file};
/// Statistics aggregator.
pub use crate::stats::CacheStats;
/// Trace types.
pub use crate::trace::{OpKind, Operation, TraceReader};
