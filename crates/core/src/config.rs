//! Cache geometry configuration.
//!
//! A simulated cache is fully described by three numbers, using the
//! conventional names:
//! 1. **`s`:** Set-index bits; the cache has `S = 2^s` sets.
//! 2. **`E`:** Associativity; each set holds `E` lines.
//! 3. **`b`:** Block-offset bits; each block spans `B = 2^b` bytes.
//!
//! Geometry is supplied on the command line or deserialized from JSON; use
//! [`CacheGeometry::validate`] before building a model from untrusted input.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Result, SimError};

/// Default geometry constants.
mod defaults {
    /// Default set-index bits (a single set, i.e. fully associative).
    pub const SET_BITS: u32 = 0;

    /// Default associativity (direct-mapped).
    pub const LINES_PER_SET: usize = 1;

    /// Default block-offset bits (1-byte blocks).
    pub const BLOCK_BITS: u32 = 0;

    /// Largest accepted `s`; beyond this the set table cannot be allocated.
    pub const MAX_SET_BITS: u32 = 31;

    /// Width of the simulated address space.
    pub const ADDRESS_BITS: u32 = 64;
}

/// Set-associative cache geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheGeometry {
    /// Number of set-index bits (`s`).
    #[serde(default = "CacheGeometry::default_set_bits", alias = "s")]
    pub set_bits: u32,

    /// Lines per set (`E`).
    #[serde(default = "CacheGeometry::default_lines_per_set", alias = "E")]
    pub lines_per_set: usize,

    /// Number of block-offset bits (`b`).
    #[serde(default = "CacheGeometry::default_block_bits", alias = "b")]
    pub block_bits: u32,
}

impl CacheGeometry {
    const fn default_set_bits() -> u32 {
        defaults::SET_BITS
    }

    const fn default_lines_per_set() -> usize {
        defaults::LINES_PER_SET
    }

    const fn default_block_bits() -> u32 {
        defaults::BLOCK_BITS
    }

    /// Creates a geometry from `s`, `E` and `b` without validating it.
    pub const fn new(set_bits: u32, lines_per_set: usize, block_bits: u32) -> Self {
        Self {
            set_bits,
            lines_per_set,
            block_bits,
        }
    }

    /// Number of sets, `S = 2^s`.
    ///
    /// Only meaningful for a geometry that passed [`validate`](Self::validate).
    pub const fn num_sets(&self) -> usize {
        1usize << self.set_bits
    }

    /// Block size in bytes, `B = 2^b`, or `None` if it does not fit in 64 bits.
    pub const fn block_bytes(&self) -> Option<u64> {
        1u64.checked_shl(self.block_bits)
    }

    /// Total capacity in bytes (`S * E * B`), if representable.
    pub fn capacity_bytes(&self) -> Option<u64> {
        let lines = (self.num_sets() as u64).checked_mul(self.lines_per_set as u64)?;
        lines.checked_mul(self.block_bytes()?)
    }

    /// Checks that the geometry describes a cache that can be simulated.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] if `E` is zero, `s` is too large
    /// to allocate, or `s + b` exceeds the 64-bit address width.
    pub fn validate(&self) -> Result<()> {
        if self.lines_per_set == 0 {
            return Err(SimError::config("associativity (-E) must be at least 1"));
        }
        if self.set_bits > defaults::MAX_SET_BITS {
            return Err(SimError::config(format!(
                "set-index bits (-s) must be at most {}, got {}",
                defaults::MAX_SET_BITS,
                self.set_bits
            )));
        }
        if self.set_bits.saturating_add(self.block_bits) > defaults::ADDRESS_BITS {
            return Err(SimError::config(format!(
                "set-index bits plus block bits must fit in a {}-bit address, got {} + {}",
                defaults::ADDRESS_BITS,
                self.set_bits,
                self.block_bits
            )));
        }
        Ok(())
    }

    /// Parses and validates a geometry from a JSON document.
    ///
    /// Both long (`set_bits`) and short (`s`) field names are accepted;
    /// absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] on malformed JSON or an invalid
    /// geometry.
    pub fn from_json(text: &str) -> Result<Self> {
        let geometry: Self = serde_json::from_str(text)
            .map_err(|e| SimError::config(format!("bad geometry JSON: {e}")))?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reads a geometry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::SourceUnavailable`] if the file cannot be read and
    /// [`SimError::Configuration`] if its contents are not a valid geometry.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_config(path.as_ref())?)
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// A geometry whose fields may still be unset.
///
/// Used to layer sources (a JSON file, then explicit flags) before any
/// validation happens. Nothing is defaulted: an unset field is an error when
/// the layers are [resolved](Self::resolve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialGeometry {
    /// Number of set-index bits (`s`), if given.
    #[serde(default, alias = "s")]
    pub set_bits: Option<u32>,

    /// Lines per set (`E`), if given.
    #[serde(default, alias = "E")]
    pub lines_per_set: Option<usize>,

    /// Number of block-offset bits (`b`), if given.
    #[serde(default, alias = "b")]
    pub block_bits: Option<u32>,
}

impl PartialGeometry {
    /// Parses a partial geometry from JSON without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] on malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SimError::config(format!("bad geometry JSON: {e}")))
    }

    /// Reads a partial geometry from a JSON file without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::SourceUnavailable`] if the file cannot be read and
    /// [`SimError::Configuration`] on malformed JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_config(path.as_ref())?)
    }

    /// Layers `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn overridden_by(self, over: Self) -> Self {
        Self {
            set_bits: over.set_bits.or(self.set_bits),
            lines_per_set: over.lines_per_set.or(self.lines_per_set),
            block_bits: over.block_bits.or(self.block_bits),
        }
    }

    /// Produces a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] if any field is unset or the
    /// complete geometry fails [`CacheGeometry::validate`].
    pub fn resolve(self) -> Result<CacheGeometry> {
        let geometry = CacheGeometry::new(
            self.set_bits
                .ok_or_else(|| SimError::config("missing set-index bits (-s)"))?,
            self.lines_per_set
                .ok_or_else(|| SimError::config("missing associativity (-E)"))?,
            self.block_bits
                .ok_or_else(|| SimError::config("missing block bits (-b)"))?,
        );
        geometry.validate()?;
        Ok(geometry)
    }
}

impl Default for CacheGeometry {
    fn default() -> Self {
        Self::new(
            defaults::SET_BITS,
            defaults::LINES_PER_SET,
            defaults::BLOCK_BITS,
        )
    }
}
