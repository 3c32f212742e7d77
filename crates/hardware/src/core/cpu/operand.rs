//! Operand access.
//!
//! Handlers receive decoded [`Operand`]s and use these helpers to turn them
//! into values, store results back, or compute transfer targets. Memory is
//! touched only through the CPU's [`Memory`](crate::soc::Memory), in the
//! order the helpers are called.

use super::Cpu;
use crate::common::error::Result;
use crate::core::arch::reg::Width;
use crate::isa::instruction::{Instruction, Operand};

impl Cpu {
    /// Effective address of a memory operand.
    ///
    /// `RegAddress` adds the signed displacement to the base register with
    /// 16-bit wraparound. Returns `None` for non-memory operands.
    pub fn effective_address(&self, op: Operand) -> Option<u16> {
        match op {
            Operand::Address(addr) => Some(addr),
            Operand::RegAddress { base, offset } => {
                Some(self.regs.read(base).wrapping_add_signed(i16::from(offset)))
            }
            Operand::Byte(_) | Operand::Word(_) | Operand::Register(_) => None,
        }
    }

    /// Reads the value an operand denotes at `width`.
    ///
    /// Registers are read through their own view, literals are taken as-is,
    /// and memory operands load a byte or a word depending on `width`.
    pub fn read_operand(&mut self, op: Operand, width: Width) -> u16 {
        match op {
            Operand::Byte(value) => u16::from(value),
            Operand::Word(value) => width.truncate(value),
            Operand::Register(reg) => self.regs.read(reg),
            Operand::Address(_) | Operand::RegAddress { .. } => {
                let addr = self.effective_address(op).unwrap_or_default();
                match width {
                    Width::Byte => u16::from(self.memory.load_byte(addr)),
                    Width::Word => self.memory.load_word(addr),
                }
            }
        }
    }

    /// Stores `value` into a register or memory operand at `width`.
    ///
    /// # Returns
    ///
    /// An error if the operand is a literal, which no table entry produces.
    pub fn write_operand(
        &mut self,
        instr: &Instruction,
        op: Operand,
        width: Width,
        value: u16,
    ) -> Result<()> {
        match op {
            Operand::Register(reg) => self.regs.write(reg, value),
            Operand::Address(_) | Operand::RegAddress { .. } => {
                let addr = self.effective_address(op).unwrap_or_default();
                match width {
                    Width::Byte => self.memory.store_byte(addr, value as u8),
                    Width::Word => self.memory.store_word(addr, value),
                }
            }
            Operand::Byte(_) | Operand::Word(_) => return Err(instr.unsupported()),
        }
        Ok(())
    }

    /// Destination of a control transfer.
    ///
    /// An address literal is the target itself; a register supplies the
    /// target from its current value.
    pub fn target(&self, op: Operand) -> u16 {
        match op {
            Operand::Address(addr) | Operand::Word(addr) => addr,
            Operand::Byte(value) => u16::from(value),
            Operand::Register(reg) => self.regs.read(reg),
            Operand::RegAddress { .. } => self.effective_address(op).unwrap_or_default(),
        }
    }
}
