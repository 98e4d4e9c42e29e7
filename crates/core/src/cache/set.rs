//! Fixed-capacity cache set.

use super::line::CacheLine;

/// The `E` lines sharing one set index.
///
/// The number of lines is fixed at construction. At most one valid line holds
/// any given tag; the model only fills a line after [`find`](Self::find)
/// reported the tag absent.
#[derive(Clone, Debug)]
pub struct CacheSet {
    lines: Box<[CacheLine]>,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines.
    pub fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways].into_boxed_slice(),
        }
    }

    /// Associativity of the set.
    #[inline]
    pub fn ways(&self) -> usize {
        self.lines.len()
    }

    /// All lines, in way order.
    #[inline]
    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    /// Way holding a valid copy of `tag`, if any.
    #[inline]
    pub fn find(&self, tag: u64) -> Option<usize> {
        self.lines.iter().position(|line| line.holds(tag))
    }

    /// Lowest-numbered invalid way, if any.
    #[inline]
    pub fn first_invalid(&self) -> Option<usize> {
        self.lines.iter().position(|line| !line.valid)
    }

    /// Returns `true` when every way holds a valid block.
    pub fn is_full(&self) -> bool {
        self.lines.iter().all(|line| line.valid)
    }

    /// Number of valid lines.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().filter(|line| line.valid).count()
    }

    #[inline]
    pub(crate) fn line_mut(&mut self, way: usize) -> &mut CacheLine {
        &mut self.lines[way]
    }
}
