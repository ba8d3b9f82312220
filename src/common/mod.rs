//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the fundamental word type, memory access
//! classification, error handling, and the register file shared by the
//! cache and the execution engine.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for configuration, loading, and runtime failures.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DEFAULT_MEMORY_WORDS, NUM_REGS};
pub use data::AccessType;
pub use error::SimError;
pub use reg::RegisterFile;

/// A single machine word. Memory, registers, and cache blocks all hold words.
pub type Word = i32;
