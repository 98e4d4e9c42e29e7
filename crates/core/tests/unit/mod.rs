//! # Unit Components
//!
//! One module per simulator component.




/// Tests for error messages, sources, and exit statuses.
pub mod error;



/// Tests for the replay driver and whole-run scenarios.
pub mod replay;

/// Tests for the statistics aggregator.
pub mod stats;
