//! Least Recently Used (LRU) Replacement Policy.
//!
//! Recency is stored in each line as an age. The touched line moves to
//! age 0 and every valid line that was more recent than it ages by one,
//! so the valid lines of a set always hold the ages `0..k` with no gaps
//! or duplicates. The victim of a full set is the line at the oldest age.

use super::super::line::CacheLine;

/// LRU policy over age-ranked lines.
pub struct LruPolicy;

impl LruPolicy {
    /// Makes `way` the most recently used line of `set`.
    ///
    /// Uses the line's current age as the pivot; for a line being filled
    /// this is its pre-install age.
    pub fn touch(set: &mut [CacheLine], way: usize) {
        let pivot = set[way].lru_age;
        for (i, line) in set.iter_mut().enumerate() {
            if i != way && line.valid && line.lru_age < pivot {
                line.lru_age += 1;
            }
        }
        set[way].lru_age = 0;
    }

    /// Picks the way that receives a new block.
    ///
    /// The first invalid way wins; otherwise the least recently used line.
    pub fn fill_slot(set: &[CacheLine]) -> usize {
        set.iter()
            .position(|line| !line.valid)
            .unwrap_or_else(|| Self::victim(set))
    }

    /// Returns the least recently used way of a full set.
    pub fn victim(set: &[CacheLine]) -> usize {
        let oldest = set.len() - 1;
        set.iter()
            .position(|line| line.lru_age == oldest)
            .unwrap_or_else(|| {
                set.iter()
                    .enumerate()
                    .max_by_key(|(_, line)| line.lru_age)
                    .map(|(i, _)| i)
                    .unwrap_or(0)
            })
    }
}
