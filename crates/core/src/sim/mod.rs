//! Trace replay and whole-run entry points.
//!
//! This module ties the components together:
//! 1. **Replay:** Issues zero, one, or two cache accesses per operation.
//! 2. **Runs:** Drives a full trace through a fresh model and returns the totals.

/// Operation-by-operation replay driver.
pub mod replay;

pub use replay::{Outcome, TraceReplay, replay, simulate_file};
