//! Cache Line Storage.

use crate::common::Word;

/// One way of one set.
///
/// `lru_age` ranks recency within the set: 0 is the most recently used
/// line and `associativity - 1` the least. Invalid lines sit at the
/// maximum age so that they never disturb the order of valid lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheLine {
    pub valid: bool,
    pub dirty: bool,
    /// Set this line belongs to, kept for base address reconstruction.
    pub set_index: usize,
    pub tag: usize,
    pub lru_age: usize,
    pub data: Vec<Word>,
}

impl CacheLine {
    /// Creates an invalid line with a zeroed block.
    pub fn new(block_size: usize, associativity: usize) -> Self {
        Self {
            valid: false,
            dirty: false,
            set_index: 0,
            tag: 0,
            lru_age: associativity - 1,
            data: vec![0; block_size],
        }
    }
}

/// Location of a line inside the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineHandle {
    pub set: usize,
    pub way: usize,
}
