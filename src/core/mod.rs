//! Processor core: execution loop and functional units.

/// Processor state and the fetch/decode/execute loop.
pub mod cpu;

/// ALU and cache.
pub mod units;

pub use cpu::{Cpu, EngineState};
