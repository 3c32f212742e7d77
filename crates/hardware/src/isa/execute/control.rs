//! Control transfer handlers.
//!
//! A taken transfer sets `IP` itself and returns `false`; an untaken
//! conditional jump returns `true` so the control unit falls through.

use super::single;
use crate::common::error::Result;
use crate::core::Cpu;
use crate::core::arch::status::StatusRegister;
use crate::isa::instruction::Instruction;

/// `HLT`: sets the halt latch and freezes `IP` on the `HLT`.
pub fn hlt(cpu: &mut Cpu, _instr: &Instruction) -> Result<bool> {
    cpu.regs.update_status(|sr| sr.set_halt(true));
    Ok(false)
}

/// `JMP target`
pub fn jmp(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, |_| true)
}

/// `JC target`: jumps when carry is set.
pub fn jc(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, StatusRegister::carry)
}

/// `JNC target`
pub fn jnc(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, |sr| !sr.carry())
}

/// `JZ target`
pub fn jz(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, StatusRegister::zero)
}

/// `JNZ target`
pub fn jnz(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, |sr| !sr.zero())
}

/// `JA target`: jumps when both carry and zero are clear.
pub fn ja(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, |sr| !sr.carry() && !sr.zero())
}

/// `JNA target`: jumps when carry or zero is set.
pub fn jna(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    jump_if(cpu, instr, |sr| sr.carry() || sr.zero())
}

/// `CALL target`: pushes the address of the next instruction, then jumps.
pub fn call(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    let target = cpu.target(single(instr)?);
    cpu.push_word(instr.next_ip);
    cpu.regs.set_ip(target);
    Ok(false)
}

/// `RET`: pops `IP`.
pub fn ret(cpu: &mut Cpu, _instr: &Instruction) -> Result<bool> {
    let ip = cpu.pop_word();
    cpu.regs.set_ip(ip);
    Ok(false)
}

fn jump_if(
    cpu: &mut Cpu,
    instr: &Instruction,
    cond: impl FnOnce(StatusRegister) -> bool,
) -> Result<bool> {
    let target = cpu.target(single(instr)?);
    if cond(cpu.regs.status()) {
        cpu.regs.set_ip(target);
        Ok(false)
    } else {
        Ok(true)
    }
}
