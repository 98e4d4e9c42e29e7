//! Simulation error kinds.
//!
//! Every failure aborts the run before any statistics are reported:
//! 1. **Configuration:** The cache geometry is missing or unusable.
//! 2. **Source Unavailable:** The trace cannot be opened or read.
//! 3. **Decode:** A trace line does not follow `<op> <hexaddr>,<size>`.
//! 4. **Output:** The report could not be written.
//!
//! The cache model itself never fails; any `(set_index, tag)` produced by
//! [`decode`](super::addr::decode) is a valid lookup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A geometry parameter is missing or out of range.
    #[error("invalid cache configuration: {reason}")]
    Configuration {
        /// Human-readable description of the offending parameter.
        reason: String,
    },

    /// The trace source could not be opened or stopped being readable.
    #[error("cannot read '{}'", path.display())]
    SourceUnavailable {
        /// Path of the trace that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A trace line does not match the expected grammar.
    #[error("malformed trace line {line}: {reason} (\"{content}\")")]
    Decode {
        /// 1-based line number within the trace.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The report could not be written to its destination.
    #[error("cannot write report")]
    Output {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl SimError {
    /// Shorthand for a [`SimError::Configuration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Wraps a failed write of the report.
    pub const fn output(source: io::Error) -> Self {
        Self::Output { source }
    }

    /// Process exit status for this error; every kind is fatal.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration { .. } => 2,
            Self::SourceUnavailable { .. } | Self::Decode { .. } | Self::Output { .. } => 1,
        }
    }
}

/// Result alias used throughout the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
