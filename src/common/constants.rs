//! Machine-wide constants.

/// Number of architectural registers. Register fields are 3 bits wide.
pub const NUM_REGS: usize = 8;

/// Default capacity of the flat memory, in words.
pub const DEFAULT_MEMORY_WORDS: usize = 65536;
