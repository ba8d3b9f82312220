//! Memory side of the simulated machine.
//!
//! The simulator has a single flat main memory behind the cache; there is
//! no bus, no devices, and no address translation.

/// Flat, bounds-checked word memory.
pub mod memory;

pub use memory::Memory;
