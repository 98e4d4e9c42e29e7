//! Trace replay driver.
//!
//! Operations are applied strictly in order:
//! - `I`: ignored; no access, no counters.
//! - `L`, `S`: one access.
//! - `M`: two accesses to the same block. The second always hits because the
//!   first just made the block resident.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::cache::{AccessResult, CacheModel};
use crate::common::Result;
use crate::config::CacheGeometry;
use crate::stats::CacheStats;
use crate::trace::{OpKind, Operation, TraceReader};

/// Cache outcome of one trace operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Instruction fetch; nothing was simulated.
    Ignored,
    /// A load or store.
    Single(AccessResult),
    /// A modify: the read access, then the write access.
    Modify {
        /// Outcome of the read half.
        read: AccessResult,
        /// Outcome of the write half.
        write: AccessResult,
    },
}

impl Outcome {
    /// The individual access results, in issue order.
    pub fn results(&self) -> impl Iterator<Item = AccessResult> {
        let pair = match *self {
            Self::Ignored => [None, None],
            Self::Single(r) => [Some(r), None],
            Self::Modify { read, write } => [Some(read), Some(write)],
        };
        pair.into_iter().flatten()
    }
}

impl fmt::Display for Outcome {
    /// Space-separated results, e.g. `miss eviction hit`. Empty for `Ignored`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{result}")?;
        }
        Ok(())
    }
}

/// Replays decoded operations against a cache model.
///
/// Owns both the model and the statistics for the duration of one run.
#[derive(Debug)]
pub struct TraceReplay {
    model: CacheModel,
    stats: CacheStats,
}

impl TraceReplay {
    /// Creates a replay over a fresh LRU cache.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `geometry` is invalid.
    pub fn new(geometry: CacheGeometry) -> Result<Self> {
        Ok(Self::with_model(CacheModel::new(geometry)?))
    }

    /// Creates a replay over an existing model, with zeroed statistics.
    pub const fn with_model(model: CacheModel) -> Self {
        Self {
            model,
            stats: CacheStats::new(),
        }
    }

    /// Applies a single operation.
    pub fn apply(&mut self, op: &Operation) -> Outcome {
        match op.kind {
            OpKind::Instruction => Outcome::Ignored,
            OpKind::Load | OpKind::Store => {
                Outcome::Single(self.model.access_addr(op.addr, &mut self.stats))
            }
            OpKind::Modify => {
                let req = self.model.decode(op.addr);
                let read = self.model.access(req, &mut self.stats);
                let write = self.model.access(req, &mut self.stats);
                Outcome::Modify { read, write }
            }
        }
    }

    /// Applies every operation in `ops`, calling `observe` after each one.
    ///
    /// Stops at the first error; statistics gathered so far are discarded
    /// with `self` by the caller.
    ///
    /// # Errors
    ///
    /// Propagates the first error yielded by `ops`.
    pub fn run_with<I, F>(&mut self, ops: I, mut observe: F) -> Result<()>
    where
        I: IntoIterator<Item = Result<Operation>>,
        F: FnMut(&Operation, &Outcome),
    {
        for op in ops {
            let op = op?;
            let outcome = self.apply(&op);
            observe(&op, &outcome);
        }
        Ok(())
    }

    /// Applies every operation in `ops`.
    ///
    /// # Errors
    ///
    /// Propagates the first error yielded by `ops`.
    pub fn run<I>(&mut self, ops: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<Operation>>,
    {
        self.run_with(ops, |_, _| {})
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The underlying cache model.
    pub const fn model(&self) -> &CacheModel {
        &self.model
    }

    /// Ends the run, releasing the model and returning the totals.
    pub fn finish(self) -> CacheStats {
        debug!(
            hits = self.stats.hits(),
            misses = self.stats.misses(),
            evictions = self.stats.evictions(),
            accesses = self.model.clock(),
            "replay finished"
        );
        self.stats
    }
}

/// Runs `ops` through a fresh cache and returns the totals.
///
/// # Errors
///
/// Returns a configuration error for an invalid geometry, or the first error
/// yielded by `ops`. No partial statistics are returned on failure.
pub fn replay<I>(geometry: CacheGeometry, ops: I) -> Result<CacheStats>
where
    I: IntoIterator<Item = Result<Operation>>,
{
    let mut run = TraceReplay::new(geometry)?;
    run.run(ops)?;
    Ok(run.finish())
}

/// Simulates the trace file at `path`, calling `observe` after each operation.
///
/// The geometry is validated before the file is opened.
///
/// # Errors
///
/// Configuration, source, and decode errors, in that order of detection.
pub fn simulate_file<F>(
    path: impl AsRef<Path>,
    geometry: CacheGeometry,
    observe: F,
) -> Result<CacheStats>
where
    F: FnMut(&Operation, &Outcome),
{
    let mut run = TraceReplay::new(geometry)?;
    let reader = TraceReader::open(path)?;
    run.run_with(reader, observe)?;
    Ok(run.finish())
}
