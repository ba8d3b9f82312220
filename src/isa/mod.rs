//! Instruction set definitions.
//!
//! The machine has eight instructions packed into 25-bit words. See
//! `instruction` for the encoding.

/// Instruction decoding and encoding.
pub mod instruction;

pub use instruction::{sign_extend_16, Instruction, Opcode};
