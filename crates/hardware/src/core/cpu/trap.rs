//! Interrupt and Privilege Controller.
//!
//! This module implements trap entry and return for the CPU. It performs the following:
//! 1. **Interrupt Requests:** Latches hardware requests and delivers them when unmasked.
//! 2. **Trap Entry:** Pushes `SR` then `IP`, jumps to a fixed vector and enters supervisor mode.
//! 3. **Return Handling:** Implements the `IRET` and `SYSRET` stack unwinding.
//! 4. **Privilege Checks:** Rejects `SYSCALL` from supervisor and `SYSRET` from user mode.
//!
//! Entry pushes `SR` first, so returns pop `IP` first and `SR` second.

use super::Cpu;
use crate::common::constants::{IRQ_VECTOR, SYSCALL_VECTOR};
use crate::common::error::{CpuError, Result};
use crate::core::arch::status::{SR_FAULT, StatusRegister};

impl Cpu {
    /// Asserts the hardware interrupt line.
    ///
    /// Sets the pending latch and, when the mask is clear, enters the
    /// interrupt handler immediately. A masked request waits until `CLI`
    /// or an `IRET` that restores a clear mask.
    ///
    /// Must only be called between steps.
    ///
    /// # Returns
    ///
    /// [`CpuError::Faulted`] if the CPU has already faulted; the fault latch
    /// stays set and nothing else changes.
    pub fn raise_interrupt(&mut self) -> Result<()> {
        if self.is_faulted() {
            return Err(CpuError::Faulted);
        }
        self.irq_pending = true;
        if !self.regs.status().irq_mask() {
            self.enter_interrupt();
        }
        Ok(())
    }

    /// Deasserts the hardware interrupt line.
    ///
    /// An interrupt that has already been entered is not undone.
    pub fn lower_interrupt(&mut self) {
        self.irq_pending = false;
    }

    /// Delivers the pending interrupt if there is one and the mask is clear.
    ///
    /// # Returns
    ///
    /// `true` if the CPU entered the interrupt handler.
    pub fn deliver_pending(&mut self) -> bool {
        if self.irq_pending && !self.regs.status().irq_mask() {
            self.enter_interrupt();
            true
        } else {
            false
        }
    }

    /// Trap entry for a hardware interrupt. Returns to the current `IP`.
    pub(crate) fn enter_interrupt(&mut self) {
        let return_ip = self.regs.ip();
        self.enter_trap(IRQ_VECTOR, return_ip, true);
        self.stats.interrupts_taken += 1;
        tracing::debug!(
            return_ip = format_args!("{return_ip:#06x}"),
            "interrupt entered"
        );
    }

    /// Trap entry for `SYSCALL`.
    ///
    /// # Arguments
    ///
    /// * `return_ip` - Address of the instruction after the `SYSCALL`.
    pub(crate) fn enter_syscall(&mut self, return_ip: u16) -> Result<()> {
        if self.regs.status().supervisor() {
            return Err(CpuError::SyscallInSupervisor);
        }
        self.enter_trap(SYSCALL_VECTOR, return_ip, false);
        self.stats.syscalls += 1;
        tracing::debug!(
            return_ip = format_args!("{return_ip:#06x}"),
            "syscall entered"
        );
        Ok(())
    }

    fn enter_trap(&mut self, vector: u16, return_ip: u16, mask: bool) {
        let sr = self.regs.status().bits();
        self.push_word(sr);
        self.push_word(return_ip);
        self.regs.set_ip(vector);
        self.regs.update_status(|sr| {
            if mask {
                sr.set_irq_mask(true);
            }
            sr.set_supervisor(true);
        });
    }

    /// `IRET`: restores `IP` and `SR` from the stack.
    ///
    /// A restored clear mask lets a still-pending interrupt in immediately.
    pub(crate) fn return_from_interrupt(&mut self) {
        let ip = self.pop_word();
        let sr = self.pop_word();
        self.regs.set_ip(ip);
        self.regs.update_status(|status| restore_status(status, sr));
        let _ = self.deliver_pending();
    }

    /// `SYSRET`: restores `IP` and `SR` from the stack and leaves supervisor mode.
    pub(crate) fn return_from_syscall(&mut self) -> Result<()> {
        if !self.regs.status().supervisor() {
            return Err(CpuError::SysretOutsideSupervisor);
        }
        let ip = self.pop_word();
        let sr = self.pop_word();
        self.regs.set_ip(ip);
        self.regs.update_status(|status| {
            restore_status(status, sr);
            status.set_supervisor(false);
        });
        Ok(())
    }
}

/// Loads a stacked status word. The fault latch is never taken from memory.
const fn restore_status(status: &mut StatusRegister, saved: u16) {
    status.set_bits((saved & !SR_FAULT) | (status.bits() & SR_FAULT));
}
