//! Simulator Error Types.
//!
//! Every failure the simulator can encounter is fatal. Configuration and
//! image problems are reported before simulation begins; anything later
//! aborts the run with a non-zero exit status. `SimError`
//! carries enough context to identify the failing address or operation.

use super::data::AccessType;
use std::fmt;

/// Fatal simulator error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Invalid cache geometry or simulator settings.
    Configuration(String),

    /// A fetch, load, or store touched an address outside memory.
    AddressOutOfRange {
        /// The offending word address (may be negative).
        addr: i64,
        /// The access that produced it.
        access: AccessType,
    },

    /// The memory image could not be read or does not fit in memory.
    ImageLoad {
        /// Path (or description) of the image source.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// A report file could not be produced.
    Output {
        /// Destination that could not be written.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// The program ran past the configured instruction ceiling without halting.
    InstructionLimit(u64),
}

impl SimError {
    /// Shorthand for a configuration error with a formatted message.
    pub fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration(msg) => write!(f, "ConfigurationError: {}", msg),
            SimError::AddressOutOfRange { addr, access } => {
                write!(f, "AddressOutOfRange: {} at address {}", access, addr)
            }
            SimError::ImageLoad { path, reason } => {
                write!(f, "ImageLoadError: '{}': {}", path, reason)
            }
            SimError::Output { path, reason } => {
                write!(f, "OutputError: '{}': {}", path, reason)
            }
            SimError::InstructionLimit(n) => {
                write!(f, "InstructionLimit: no halt after {} instructions", n)
            }
        }
    }
}

impl std::error::Error for SimError {}
