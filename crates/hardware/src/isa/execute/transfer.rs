//! Data movement handlers. Flags are never touched.

use super::pair;
use crate::common::error::Result;
use crate::core::Cpu;
use crate::core::arch::reg::Width;
use crate::isa::instruction::Instruction;

/// `MOV dst, src` on words.
pub fn mov(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    copy(cpu, instr, Width::Word)
}

/// `MOVB dst, src` on bytes.
pub fn movb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    copy(cpu, instr, Width::Byte)
}

fn copy(cpu: &mut Cpu, instr: &Instruction, width: Width) -> Result<bool> {
    let (dst, src) = pair(instr)?;
    let value = cpu.read_operand(src, width);
    cpu.write_operand(instr, dst, width, value)?;
    Ok(true)
}
