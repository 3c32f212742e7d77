//! Interrupt mask and privilege transition handlers.

use crate::common::error::Result;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;

/// `CLI`: clears the interrupt mask.
///
/// A request that is already pending is taken at once, returning to the
/// instruction after the `CLI`.
pub fn cli(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    cpu.regs.update_status(|sr| sr.set_irq_mask(false));
    if cpu.irq_pending() {
        cpu.regs.set_ip(instr.next_ip);
        cpu.enter_interrupt();
        return Ok(false);
    }
    Ok(true)
}

/// `STI`: sets the interrupt mask.
pub fn sti(cpu: &mut Cpu, _instr: &Instruction) -> Result<bool> {
    cpu.regs.update_status(|sr| sr.set_irq_mask(true));
    Ok(true)
}

/// `IRET`
pub fn iret(cpu: &mut Cpu, _instr: &Instruction) -> Result<bool> {
    cpu.return_from_interrupt();
    Ok(false)
}

/// `SYSCALL`: traps to the syscall vector from user mode.
pub fn syscall(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    cpu.enter_syscall(instr.next_ip)?;
    Ok(false)
}

/// `SYSRET`: returns from a syscall handler to user mode.
pub fn sysret(cpu: &mut Cpu, _instr: &Instruction) -> Result<bool> {
    cpu.return_from_syscall()?;
    Ok(false)
}
