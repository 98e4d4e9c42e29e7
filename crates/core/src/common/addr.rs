//! Memory address type and address decoding.
//!
//! A raw address is split into three fields, from low to high bits:
//! `[ tag | set index (s bits) | block offset (b bits) ]`.
//! The block offset only decides which byte of a block is touched, so it is
//! discarded; the set index selects a set and the tag identifies the block
//! inside that set.

use std::fmt;

/// A byte address in the simulated 64-bit address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u64);

impl Addr {
    /// Creates a new address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// A decoded cache lookup: which set to search and which tag to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessRequest {
    /// Set index, always in `[0, 2^s)`.
    pub set_index: usize,
    /// Remaining high-order address bits.
    pub tag: u64,
}

/// Splits `addr` into its set index and tag for a cache with `2^s` sets and
/// `2^b`-byte blocks.
///
/// `tag = addr >> (s + b)` and `set_index = (addr >> b) mod 2^s`. The function
/// is total: shift amounts of 64 or more yield zero instead of overflowing.
///
/// # Arguments
///
/// * `addr` - The byte address being accessed.
/// * `s` - Number of set-index bits.
/// * `b` - Number of block-offset bits.
#[inline]
pub fn decode(addr: Addr, s: u32, b: u32) -> AccessRequest {
    let raw = addr.val();
    let tag = raw.checked_shr(s.saturating_add(b)).unwrap_or(0);
    let block = raw.checked_shr(b).unwrap_or(0);
    let mask = 1u64.checked_shl(s).map_or(u64::MAX, |sets| sets - 1);

    AccessRequest {
        set_index: (block & mask) as usize,
        tag,
    }
}
