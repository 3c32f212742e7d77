//! Main Execution Loop.
//!
//! This module implements the fetch/decode/dispatch cycle of the CPU. It performs the following:
//! 1. **Latch Checks:** Refuses to run once faulted and idles while halted.
//! 2. **Decode:** Reads the opcode and operands starting at `IP` (see [`crate::isa::decode`]).
//! 3. **Dispatch:** Calls the opcode's handler and commits or discards the decode cursor.
//! 4. **Fault Latching:** Any error raised by a step sets the fault latch before returning.

use super::Cpu;
use crate::common::error::{CpuError, Result};
use crate::isa::decode::decode;

impl Cpu {
    /// Executes one instruction.
    ///
    /// A halted CPU does nothing and returns `Ok`. A faulted CPU returns
    /// [`CpuError::Faulted`] on every call.
    ///
    /// # Returns
    ///
    /// `Ok(())` after an instruction retires (or while halted); otherwise the
    /// error that stopped the instruction. That error has already latched the
    /// fault flag, so the CPU must be rebuilt before it runs again.
    pub fn step(&mut self) -> Result<()> {
        if self.is_faulted() {
            return Err(CpuError::Faulted);
        }
        if self.is_halted() {
            self.stats.halted_steps += 1;
            return Ok(());
        }

        match self.execute_next() {
            Ok(()) => {
                self.stats.instructions_retired += 1;
                Ok(())
            }
            Err(err) => {
                self.latch_fault(&err);
                Err(err)
            }
        }
    }

    fn execute_next(&mut self) -> Result<()> {
        let ip = self.regs.ip();
        let instr = decode(&mut *self.memory, ip)?;

        if self.trace {
            tracing::trace!(
                target: "sim16::exec",
                ip = format_args!("{ip:#06x}"),
                "{instr}"
            );
        }

        if (instr.info.handler)(self, &instr)? {
            self.regs.set_ip(instr.next_ip);
        }
        Ok(())
    }

    /// Sets the fault latch in response to `err`.
    fn latch_fault(&mut self, err: &CpuError) {
        self.regs.update_status(|sr| sr.set_fault(true));
        self.stats.faults += 1;
        tracing::warn!(
            ip = format_args!("{:#06x}", self.regs.ip()),
            error = %err,
            "cpu faulted"
        );
    }
}
