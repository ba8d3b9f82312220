//! Instruction Execution.
//!
//! Runs after the program counter has been incremented, so `jalr` links
//! and `beq` branches relative to the address of the next instruction.

use super::Cpu;
use crate::common::SimError;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Instruction, Opcode};
use crate::sim::trace::TransferLog;

impl<L: TransferLog> Cpu<L> {
    pub(super) fn execute(&mut self, inst: Instruction) -> Result<(), SimError> {
        let reg_a = self.regs.read(inst.field0);
        let reg_b = self.regs.read(inst.field1);
        let offset = inst.offset();

        match inst.opcode {
            Opcode::Add => {
                self.regs
                    .write(inst.dest(), Alu::execute(AluOp::Add, reg_a, reg_b));
            }
            Opcode::Nand => {
                self.regs
                    .write(inst.dest(), Alu::execute(AluOp::Nand, reg_a, reg_b));
            }
            Opcode::Lw => {
                let addr = i64::from(reg_b) + i64::from(offset);
                let val = self.load(addr)?;
                self.regs.write(inst.field0, val);
                self.stats.loads += 1;
            }
            Opcode::Sw => {
                let addr = i64::from(reg_b) + i64::from(offset);
                self.store(addr, reg_a)?;
                self.stats.stores += 1;
            }
            Opcode::Jalr => {
                // The target is read after the link, so regA == regB jumps to pc.
                self.regs.write(inst.field0, self.pc);
                self.pc = self.regs.read(inst.field1);
            }
            Opcode::Beq => {
                if reg_a == reg_b {
                    self.pc = self.pc.wrapping_add(offset);
                }
            }
            Opcode::Noop | Opcode::Halt => {}
        }
        Ok(())
    }
}
