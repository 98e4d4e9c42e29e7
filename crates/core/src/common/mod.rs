//! Common types shared across the cache simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Address Decoding:** Splitting a raw address into set index and tag.
//! 2. **Error Handling:** The error kinds a simulation run can abort with.

/// Address type and tag/set-index decoding.
pub mod addr;

/// Error types for configuration, trace sources, and trace decoding.
pub mod error;

pub use addr::{AccessRequest, Addr, decode};
pub use error::{Result, SimError};
