//! Memory Access Types.
//!
//! This module defines the classification of memory accesses routed
//! through the cache. The kind of access decides which transfer events are
//! emitted and is reported in diagnostics when an access fails.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data reads,
/// and data writes so that hit/miss handling and error reporting can
/// tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Issued once per executed instruction at the current program counter.
    Fetch,

    /// Data read access.
    ///
    /// Issued by `lw` to move a word from the cache into a register.
    Read,

    /// Data write access.
    ///
    /// Issued by `sw` to move a register into the cache. Leaves the
    /// target line dirty.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Fetch => write!(f, "fetch"),
            AccessType::Read => write!(f, "load"),
            AccessType::Write => write!(f, "store"),
        }
    }
}
