//! A single cache line.

/// One line of a cache set: validity, the resident tag, and the logical
/// time of its last use.
///
/// `stamp` values come from the owning model's logical clock, which starts at
/// 1 and never repeats, so two valid lines never share a stamp. Invalid lines
/// keep stamp 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the line holds a block.
    pub valid: bool,
    /// Tag of the resident block; meaningless while `valid` is false.
    pub tag: u64,
    /// Logical time of the last access; lower means less recently used.
    pub stamp: u64,
}

impl CacheLine {
    /// Returns `true` if this line currently holds the block with `tag`.
    #[inline(always)]
    pub const fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Fills the line with `tag`, stamped at logical time `now`.
    #[inline]
    pub(crate) const fn fill(&mut self, tag: u64, now: u64) {
        self.valid = true;
        self.tag = tag;
        self.stamp = now;
    }

    /// Marks the line as used at logical time `now`.
    #[inline]
    pub(crate) const fn touch(&mut self, now: u64) {
        self.stamp = now;
    }
}
