//! Word-Addressed Cache Simulator Library.
//!
//! This crate simulates a small eight-instruction processor whose every
//! instruction fetch, load, and store goes through a configurable
//! set-associative, write-back cache with strict LRU replacement. The
//! simulator reports each data movement between processor, cache, and
//! memory, and counts hits and misses.
//!
//! # Modules
//!
//! * `common`: Shared types, constants, and error handling.
//! * `config`: Configuration loading and validation.
//! * `core`: Processor state, execution loop, ALU, and cache.
//! * `isa`: Instruction encoding.
//! * `sim`: Memory image loading and transfer logging.
//! * `soc`: Flat main memory.
//! * `stats`: Hit/miss and instruction statistics.

/// Shared types, constants, error handling, and the register file.
pub mod common;

/// Configuration system for cache geometry and simulation limits.
///
/// Loads TOML configuration files and validates the cache geometry
/// before any simulation begins.
pub mod config;

/// Processor core including the execution loop and the cache.
pub mod core;

/// Instruction set definitions, decoding, and encoding.
pub mod isa;

/// Memory image loader and transfer event sinks.
pub mod sim;

/// Main memory.
pub mod soc;

/// Statistics collection and reporting.
pub mod stats;
