//! Set-Associative Write-Back Cache.
//!
//! The cache holds `num_sets` sets of `associativity` lines, each line
//! carrying a full block of data. Stores only update the cached copy and
//! mark the line dirty; memory is updated when a dirty line is evicted or
//! when the cache is flushed at halt. Replacement is strict LRU.
//!
//! The cache never counts hits or misses itself. Callers perform a
//! `lookup`, record the outcome, and then either `touch_lru` (hit) or
//! `install` (miss).

/// Address field decoding.
pub mod decoder;

/// Cache line storage and handles.
pub mod line;

/// Replacement policies.
pub mod policies;

pub use decoder::AddressDecoder;
pub use line::{CacheLine, LineHandle};

use self::policies::LruPolicy;
use crate::common::{AccessType, SimError, Word};
use crate::config::CacheConfig;
use crate::sim::trace::{TransferKind, TransferLog};
use crate::soc::Memory;
use log::debug;

/// The cache model.
pub struct CacheSim {
    sets: Vec<Vec<CacheLine>>,
    decoder: AddressDecoder,
    associativity: usize,
    /// Size of the memory behind the cache, in words.
    capacity: usize,

    /// Dirty blocks written back to memory (evictions and flushes).
    pub writebacks: u64,
    /// Valid blocks evicted to make room for new ones.
    pub evictions: u64,
}

impl CacheSim {
    /// Creates an empty cache.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache geometry.
    /// * `capacity` - Size of the backing memory in words.
    ///
    /// # Returns
    ///
    /// `ConfigurationError` for a non-power-of-two block size or set
    /// count, an associativity of zero, or a capacity that is not a
    /// whole number of blocks.
    pub fn new(config: &CacheConfig, capacity: usize) -> Result<Self, SimError> {
        let decoder = config.address_decoder()?;
        config.check_capacity(capacity)?;

        let sets = (0..config.num_sets)
            .map(|_| {
                (0..config.associativity)
                    .map(|_| CacheLine::new(config.block_size, config.associativity))
                    .collect()
            })
            .collect();

        Ok(Self {
            sets,
            decoder,
            associativity: config.associativity,
            capacity,
            writebacks: 0,
            evictions: 0,
        })
    }

    pub fn block_size(&self) -> usize {
        self.decoder.block_size()
    }

    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    pub fn associativity(&self) -> usize {
        self.associativity
    }

    /// Returns the lines of one set.
    pub fn set(&self, index: usize) -> &[CacheLine] {
        &self.sets[index]
    }

    /// Returns every set.
    pub fn sets(&self) -> &[Vec<CacheLine>] {
        &self.sets
    }

    pub fn line(&self, handle: LineHandle) -> &CacheLine {
        &self.sets[handle.set][handle.way]
    }

    fn line_mut(&mut self, handle: LineHandle) -> &mut CacheLine {
        &mut self.sets[handle.set][handle.way]
    }

    fn check(&self, addr: i64, access: AccessType) -> Result<usize, SimError> {
        if addr < 0 || addr as u64 >= self.capacity as u64 {
            return Err(SimError::AddressOutOfRange { addr, access });
        }
        Ok(addr as usize)
    }

    /// Finds the line holding `addr`, if any.
    ///
    /// Does not change any state.
    pub fn lookup(&self, addr: i64, access: AccessType) -> Result<Option<LineHandle>, SimError> {
        let addr = self.check(addr, access)?;
        let set = self.decoder.set_index(addr);
        let tag = self.decoder.tag(addr);

        Ok(self.sets[set]
            .iter()
            .position(|line| line.valid && line.tag == tag)
            .map(|way| LineHandle { set, way }))
    }

    /// Marks a line as the most recently used of its set.
    pub fn touch_lru(&mut self, handle: LineHandle) {
        LruPolicy::touch(&mut self.sets[handle.set], handle.way);
    }

    /// Brings the block containing `addr` into the cache.
    ///
    /// Fills an invalid way if the set has one, otherwise evicts the LRU
    /// line, writing it back first when dirty. Emits the eviction events
    /// followed by the memory-to-cache fill.
    pub fn install(
        &mut self,
        mem: &mut Memory,
        addr: i64,
        access: AccessType,
        log: &mut dyn TransferLog,
    ) -> Result<LineHandle, SimError> {
        let addr = self.check(addr, access)?;
        let set = self.decoder.set_index(addr);
        let tag = self.decoder.tag(addr);
        let block_size = self.block_size();
        let start = self.decoder.block_start(addr);

        // The set is left untouched if the block cannot be read.
        let mut block = vec![0; block_size];
        mem.read_block(start, &mut block)
            .map_err(|_| SimError::AddressOutOfRange {
                addr: addr as i64,
                access,
            })?;

        let way = LruPolicy::fill_slot(&self.sets[set]);
        let handle = LineHandle { set, way };

        let (valid, dirty, victim_base) = {
            let victim = self.line(handle);
            let base = self.decoder.base_address(victim.tag, victim.set_index);
            (victim.valid, victim.dirty, base)
        };
        if valid {
            debug!(
                "evicting block {} from set {} way {} (dirty={})",
                victim_base, set, way, dirty
            );
            if dirty {
                self.write_back(handle, mem, log)?;
            }
            log.transfer(victim_base, block_size, TransferKind::CacheToNowhere);
            self.evictions += 1;
        }

        let line = self.line_mut(handle);
        line.data = block;
        line.valid = true;
        line.dirty = false;
        line.tag = tag;
        line.set_index = set;
        self.touch_lru(handle);

        log.transfer(start, block_size, TransferKind::MemoryToCache);
        Ok(handle)
    }

    /// Copies a line's block back to memory.
    ///
    /// The dirty flag is left untouched.
    pub fn write_back(
        &mut self,
        handle: LineHandle,
        mem: &mut Memory,
        log: &mut dyn TransferLog,
    ) -> Result<(), SimError> {
        let line = &self.sets[handle.set][handle.way];
        let base = self.decoder.base_address(line.tag, line.set_index);
        mem.write_block(base, &line.data)?;
        log.transfer(base, line.data.len(), TransferKind::CacheToMemory);
        self.writebacks += 1;
        Ok(())
    }

    pub fn mark_dirty(&mut self, handle: LineHandle) {
        self.line_mut(handle).dirty = true;
    }

    /// Reads the word at `addr` from a line that holds it.
    pub fn read_word(&self, handle: LineHandle, addr: usize) -> Word {
        self.line(handle).data[self.decoder.block_offset(addr)]
    }

    /// Overwrites the word at `addr` in a line that holds it.
    pub fn write_word(&mut self, handle: LineHandle, addr: usize, val: Word) {
        let offset = self.decoder.block_offset(addr);
        self.line_mut(handle).data[offset] = val;
    }

    /// Writes back every dirty line, set by set.
    pub fn flush_all(&mut self, mem: &mut Memory, log: &mut dyn TransferLog) -> Result<(), SimError> {
        for set in 0..self.sets.len() {
            for way in 0..self.associativity {
                if self.sets[set][way].dirty {
                    self.write_back(LineHandle { set, way }, mem, log)?;
                }
            }
        }
        Ok(())
    }
}
