//! Functional units of the core.

/// Integer ALU.
pub mod alu;

/// Set-associative cache with LRU replacement.
pub mod cache;
