//! Simulator configuration.
//!
//! Configuration is read from a TOML file and/or supplied on the command
//! line. The cache geometry has no defaults: block size, set count, and
//! associativity must all be given. Simulation settings are optional.

use crate::common::{SimError, DEFAULT_MEMORY_WORDS};
use crate::core::units::cache::AddressDecoder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache: CacheConfig,
    #[serde(default)]
    pub sim: SimConfig,
}

/// Cache geometry.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Words per block. Must be a power of two.
    pub block_size: usize,

    /// Number of sets. Must be a power of two.
    pub num_sets: usize,

    /// Lines per set. Must be at least one.
    pub associativity: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SimConfig {
    #[serde(default = "default_memory_words")]
    pub memory_words: usize,

    #[serde(default)]
    pub max_instructions: Option<u64>,

    #[serde(default = "default_print_transfers")]
    pub print_transfers: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            memory_words: default_memory_words(),
            max_instructions: None,
            print_transfers: default_print_transfers(),
        }
    }
}

fn default_memory_words() -> usize {
    DEFAULT_MEMORY_WORDS
}

fn default_print_transfers() -> bool {
    true
}

impl CacheConfig {
    pub fn new(block_size: usize, num_sets: usize, associativity: usize) -> Self {
        Self {
            block_size,
            num_sets,
            associativity,
        }
    }

    /// Builds the address decoder for this geometry.
    ///
    /// # Returns
    ///
    /// `ConfigurationError` for a block size or set count that is not a
    /// power of two, or an associativity of zero.
    pub fn address_decoder(&self) -> Result<AddressDecoder, SimError> {
        if self.associativity < 1 {
            return Err(SimError::config("associativity must be at least 1"));
        }
        AddressDecoder::new(self.block_size, self.num_sets)
    }

    /// Checks that the geometry can be decoded with shifts and masks.
    pub fn validate(&self) -> Result<(), SimError> {
        self.address_decoder().map(|_| ())
    }

    /// Checks that a memory of `capacity` words holds a whole number of blocks.
    pub fn check_capacity(&self, capacity: usize) -> Result<(), SimError> {
        if capacity == 0 {
            return Err(SimError::config("memory capacity must be non-zero"));
        }
        if capacity.checked_rem(self.block_size) != Some(0) {
            return Err(SimError::config(format!(
                "memory capacity {} is not a multiple of the block size {}",
                capacity, self.block_size
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Builds a configuration from a cache geometry with default simulation settings.
    pub fn with_cache(cache: CacheConfig) -> Self {
        Self {
            cache,
            sim: SimConfig::default(),
        }
    }

    /// Loads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SimError::config(format!("cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| SimError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parses a TOML configuration string.
    pub fn from_toml(content: &str) -> Result<Self, SimError> {
        toml::from_str(content).map_err(|e| SimError::config(format!("invalid config: {}", e)))
    }

    /// Validates the cache geometry and the memory capacity.
    pub fn validate(&self) -> Result<(), SimError> {
        self.cache.validate()?;
        self.cache.check_capacity(self.sim.memory_words)
    }
}
