//! Register File.
//!
//! Eight general-purpose word registers addressed by 3-bit instruction
//! fields. Unlike RISC-V there is no hardwired zero register; every
//! register is writable.

use super::constants::NUM_REGS;
use super::Word;

/// General-purpose register file.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    regs: [Word; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low 3 bits are used.
    pub fn read(&self, idx: usize) -> Word {
        self.regs[idx % NUM_REGS]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low 3 bits are used.
    /// * `val` - The value to store.
    pub fn write(&mut self, idx: usize, val: Word) {
        self.regs[idx % NUM_REGS] = val;
    }

    /// Returns all register values in index order.
    pub fn as_slice(&self) -> &[Word] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            println!("\t\treg[{}]={}", i, val);
        }
    }
}
