//! Instruction Encoding.
//!
//! ```text
//!  24    22 21  19 18  16 15                0
//! | opcode | regA | regB |      field2       |
//! ```
//!
//! `field2` is either a 16-bit two's-complement offset (`lw`, `sw`, `beq`)
//! or, for `add` and `nand`, the destination register in its low 3 bits.

use crate::common::Word;
use std::fmt;

/// Opcode of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Nand,
    Lw,
    Sw,
    Beq,
    Jalr,
    Halt,
    Noop,
}

impl Opcode {
    /// Maps the 3-bit opcode field to an opcode. Every value is defined.
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x7 {
            0 => Opcode::Add,
            1 => Opcode::Nand,
            2 => Opcode::Lw,
            3 => Opcode::Sw,
            4 => Opcode::Beq,
            5 => Opcode::Jalr,
            6 => Opcode::Halt,
            _ => Opcode::Noop,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Opcode::Add => 0,
            Opcode::Nand => 1,
            Opcode::Lw => 2,
            Opcode::Sw => 3,
            Opcode::Beq => 4,
            Opcode::Jalr => 5,
            Opcode::Halt => 6,
            Opcode::Noop => 7,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Opcode::Add => "add",
            Opcode::Nand => "nand",
            Opcode::Lw => "lw",
            Opcode::Sw => "sw",
            Opcode::Beq => "beq",
            Opcode::Jalr => "jalr",
            Opcode::Halt => "halt",
            Opcode::Noop => "noop",
        };
        f.write_str(s)
    }
}

/// Sign-extends the low 16 bits of `value`.
pub fn sign_extend_16(value: u32) -> Word {
    value as u16 as i16 as Word
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub field0: usize,
    pub field1: usize,
    pub field2: u16,
}

impl Instruction {
    const OPCODE_SHIFT: u32 = 22;
    const FIELD0_SHIFT: u32 = 19;
    const FIELD1_SHIFT: u32 = 16;
    const REG_MASK: u32 = 0x7;
    const FIELD2_MASK: u32 = 0xffff;

    /// Splits a memory word into its fields. Bits above 24 are ignored.
    pub fn decode(word: Word) -> Self {
        let raw = word as u32;
        Self {
            opcode: Opcode::from_bits(raw >> Self::OPCODE_SHIFT),
            field0: ((raw >> Self::FIELD0_SHIFT) & Self::REG_MASK) as usize,
            field1: ((raw >> Self::FIELD1_SHIFT) & Self::REG_MASK) as usize,
            field2: (raw & Self::FIELD2_MASK) as u16,
        }
    }

    /// Packs the instruction back into a memory word.
    pub fn encode(&self) -> Word {
        let raw = (self.opcode.bits() << Self::OPCODE_SHIFT)
            | ((self.field0 as u32 & Self::REG_MASK) << Self::FIELD0_SHIFT)
            | ((self.field1 as u32 & Self::REG_MASK) << Self::FIELD1_SHIFT)
            | u32::from(self.field2);
        raw as Word
    }

    /// `add`/`nand` form: operands in `a` and `b`, result in `dest`.
    pub fn r_type(opcode: Opcode, a: usize, b: usize, dest: usize) -> Self {
        Self {
            opcode,
            field0: a,
            field1: b,
            field2: (dest as u32 & Self::REG_MASK) as u16,
        }
    }

    /// `lw`/`sw`/`beq` form with a signed 16-bit offset.
    pub fn i_type(opcode: Opcode, a: usize, b: usize, offset: i32) -> Self {
        Self {
            opcode,
            field0: a,
            field1: b,
            field2: offset as u16,
        }
    }

    /// `jalr` form: link into `a`, jump to the address in `b`.
    pub fn j_type(a: usize, b: usize) -> Self {
        Self::i_type(Opcode::Jalr, a, b, 0)
    }

    pub fn halt() -> Self {
        Self::i_type(Opcode::Halt, 0, 0, 0)
    }

    pub fn noop() -> Self {
        Self::i_type(Opcode::Noop, 0, 0, 0)
    }

    /// `field2` as a signed offset.
    pub fn offset(&self) -> Word {
        sign_extend_16(u32::from(self.field2))
    }

    /// Destination register of `add`/`nand`.
    pub fn dest(&self) -> usize {
        (u32::from(self.field2) & Self::REG_MASK) as usize
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::Add | Opcode::Nand => write!(
                f,
                "{} {} {} {}",
                self.opcode,
                self.field0,
                self.field1,
                self.dest()
            ),
            Opcode::Lw | Opcode::Sw | Opcode::Beq => write!(
                f,
                "{} {} {} {}",
                self.opcode,
                self.field0,
                self.field1,
                self.offset()
            ),
            Opcode::Jalr => write!(f, "{} {} {}", self.opcode, self.field0, self.field1),
            Opcode::Halt | Opcode::Noop => write!(f, "{}", self.opcode),
        }
    }
}
