//! Address Field Decoder.
//!
//! Splits a word address into block offset, set index, and tag using the
//! cache geometry. Both the block size and the set count are powers of
//! two, so every field is a plain shift and mask:
//!
//! ```text
//! | tag | set index (set_bits) | block offset (block_bits) |
//! ```

use crate::common::SimError;

/// Shift/mask decoder for one cache geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressDecoder {
    block_bits: u32,
    set_bits: u32,
}

impl AddressDecoder {
    /// Creates a decoder for the given geometry.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Words per block, a power of two.
    /// * `num_sets` - Number of sets, a power of two.
    ///
    /// # Returns
    ///
    /// `ConfigurationError` if either value is not a power of two.
    pub fn new(block_size: usize, num_sets: usize) -> Result<Self, SimError> {
        if !block_size.is_power_of_two() {
            return Err(SimError::config(format!(
                "block size {} is not a power of two",
                block_size
            )));
        }
        if !num_sets.is_power_of_two() {
            return Err(SimError::config(format!(
                "set count {} is not a power of two",
                num_sets
            )));
        }
        Ok(Self {
            block_bits: block_size.trailing_zeros(),
            set_bits: num_sets.trailing_zeros(),
        })
    }

    /// Width of the block offset field.
    pub fn block_bits(&self) -> u32 {
        self.block_bits
    }

    /// Width of the set index field.
    pub fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Words per block.
    pub fn block_size(&self) -> usize {
        1 << self.block_bits
    }

    /// Number of sets.
    pub fn num_sets(&self) -> usize {
        1 << self.set_bits
    }

    pub fn block_offset(&self, addr: usize) -> usize {
        addr & ((1 << self.block_bits) - 1)
    }

    pub fn set_index(&self, addr: usize) -> usize {
        (addr >> self.block_bits) & ((1 << self.set_bits) - 1)
    }

    pub fn tag(&self, addr: usize) -> usize {
        addr >> (self.block_bits + self.set_bits)
    }

    /// Address of the first word of the block containing `addr`.
    pub fn block_start(&self, addr: usize) -> usize {
        addr - self.block_offset(addr)
    }

    /// Rebuilds a block's base address from its tag and set index.
    pub fn base_address(&self, tag: usize, set_index: usize) -> usize {
        (tag << (self.set_bits + self.block_bits)) | (set_index << self.block_bits)
    }
}
