//! Arithmetic Logic Unit (ALU).
//!
//! The machine has only two register-register operations: two's-complement
//! addition and bitwise NAND.

use crate::common::Word;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Nand,
}

/// Arithmetic Logic Unit.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand
    ///
    /// # Returns
    ///
    /// The result word. Addition wraps on overflow.
    pub fn execute(op: AluOp, a: Word, b: Word) -> Word {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Nand => !(a & b),
        }
    }
}
