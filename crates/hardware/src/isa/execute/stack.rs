//! Stack handlers.
//!
//! Push operands may be a register, a memory operand or a literal; pop
//! destinations are a register or a memory operand.

use super::single;
use crate::common::error::Result;
use crate::core::Cpu;
use crate::core::arch::reg::Width;
use crate::isa::instruction::{Instruction, Operand};

/// `PUSH src`
pub fn push(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    let src = single(instr)?;
    let value = cpu.read_operand(src, Width::Word);
    cpu.push_word(value);
    Ok(true)
}

/// `PUSHB src`
pub fn pushb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    let src = single(instr)?;
    let value = cpu.read_operand(src, Width::Byte);
    cpu.push_byte(value as u8);
    Ok(true)
}

/// `POP dst`
pub fn pop(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    let dst = destination(instr)?;
    let value = cpu.pop_word();
    cpu.write_operand(instr, dst, Width::Word, value)?;
    Ok(true)
}

/// `POPB dst`
pub fn popb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    let dst = destination(instr)?;
    let value = cpu.pop_byte();
    cpu.write_operand(instr, dst, Width::Byte, u16::from(value))?;
    Ok(true)
}

fn destination(instr: &Instruction) -> Result<Operand> {
    match single(instr)? {
        Operand::Byte(_) | Operand::Word(_) => Err(instr.unsupported()),
        dst => Ok(dst),
    }
}
