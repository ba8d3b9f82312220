//! Flat Word Memory.
//!
//! Main memory is a fixed-capacity array of words addressed from zero.
//! The cache validates addresses before it moves blocks; memory still
//! refuses out-of-range blocks with `AddressOutOfRange`.

use crate::common::{AccessType, SimError, Word};

/// Backing store for the simulated machine.
pub struct Memory {
    words: Vec<Word>,
    /// Number of words supplied by the memory image.
    loaded: usize,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Size of memory in words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
            loaded: 0,
        }
    }

    /// Total capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Number of words written by the last image load.
    pub fn loaded_len(&self) -> usize {
        self.loaded
    }

    /// Copies an image into memory starting at address zero.
    pub fn load_image(&mut self, image: &[Word]) -> Result<(), SimError> {
        if image.len() > self.words.len() {
            return Err(SimError::ImageLoad {
                path: "<image>".to_string(),
                reason: format!(
                    "image has {} words but memory holds {}",
                    image.len(),
                    self.words.len()
                ),
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        self.loaded = image.len();
        Ok(())
    }

    /// Reads one word.
    pub fn read(&self, addr: usize) -> Result<Word, SimError> {
        self.words
            .get(addr)
            .copied()
            .ok_or(SimError::AddressOutOfRange {
                addr: addr as i64,
                access: AccessType::Read,
            })
    }

    /// Fills `buf` with consecutive words starting at `start`.
    pub fn read_block(&self, start: usize, buf: &mut [Word]) -> Result<(), SimError> {
        let src = self
            .words
            .get(start..start + buf.len())
            .ok_or(SimError::AddressOutOfRange {
                addr: (start + buf.len()) as i64 - 1,
                access: AccessType::Read,
            })?;
        buf.copy_from_slice(src);
        Ok(())
    }

    /// Stores `data` to consecutive words starting at `start`.
    pub fn write_block(&mut self, start: usize, data: &[Word]) -> Result<(), SimError> {
        let dst = self
            .words
            .get_mut(start..start + data.len())
            .ok_or(SimError::AddressOutOfRange {
                addr: (start + data.len()) as i64 - 1,
                access: AccessType::Write,
            })?;
        dst.copy_from_slice(data);
        Ok(())
    }

    /// Returns the memory contents as a slice.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}
