//! Memory Access Helpers.
//!
//! Every instruction fetch, load, and store goes through the cache. A hit
//! refreshes the line's LRU position; a miss installs the block first.
//! Either way exactly one of the hit/miss counters moves.

use super::Cpu;
use crate::common::{AccessType, SimError, Word};
use crate::core::units::cache::LineHandle;
use crate::sim::trace::{TransferKind, TransferLog};
use log::debug;

impl<L: TransferLog> Cpu<L> {
    /// Returns the line holding `addr`, installing it on a miss.
    fn access_line(&mut self, addr: i64, access: AccessType) -> Result<LineHandle, SimError> {
        match self.cache.lookup(addr, access)? {
            Some(handle) => {
                self.stats.hits += 1;
                self.cache.touch_lru(handle);
                debug!("{} hit at {} (set {} way {})", access, addr, handle.set, handle.way);
                Ok(handle)
            }
            None => {
                self.stats.misses += 1;
                debug!("{} miss at {}", access, addr);
                self.cache
                    .install(&mut self.memory, addr, access, &mut self.log)
            }
        }
    }

    /// Reads the instruction word at `pc`.
    pub(super) fn fetch(&mut self) -> Result<Word, SimError> {
        let addr = i64::from(self.pc);
        let handle = self.access_line(addr, AccessType::Fetch)?;
        let word = self.cache.read_word(handle, addr as usize);
        self.log.transfer(addr as usize, 1, TransferKind::CacheToProcessor);
        Ok(word)
    }

    /// Reads a data word for `lw`.
    pub(super) fn load(&mut self, addr: i64) -> Result<Word, SimError> {
        let handle = self.access_line(addr, AccessType::Read)?;
        let word = self.cache.read_word(handle, addr as usize);
        self.log.transfer(addr as usize, 1, TransferKind::CacheToProcessor);
        Ok(word)
    }

    /// Writes a data word for `sw`, leaving the line dirty.
    pub(super) fn store(&mut self, addr: i64, val: Word) -> Result<(), SimError> {
        let handle = self.access_line(addr, AccessType::Write)?;
        self.cache.write_word(handle, addr as usize, val);
        self.log.transfer(addr as usize, 1, TransferKind::ProcessorToCache);
        self.cache.mark_dirty(handle);
        Ok(())
    }
}
