//! Simulator: owns the CPU and drives it under a step budget.

use crate::common::error::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::Memory;

/// Why [`Simulator::run`] stopped without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The CPU halted after `steps` instructions.
    Halted {
        /// Instructions executed by this call.
        steps: u64,
    },
    /// The budget ran out with the CPU still running.
    StepLimit {
        /// Instructions executed by this call.
        steps: u64,
    },
}

/// Top-level simulator: the CPU plus a step budget.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Upper bound on instructions per [`Simulator::run`].
    pub max_steps: u64,
}

impl Simulator {
    /// Creates a simulator around a CPU built from `memory` and `config`.
    ///
    /// The CPU is in its reset state, which is halted; call
    /// [`Cpu::resume`] on `self.cpu` before running.
    pub fn new(memory: impl Memory + 'static, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(Box::new(memory), config),
            max_steps: config.run.max_steps,
        }
    }

    /// Executes a single instruction.
    pub fn tick(&mut self) -> Result<()> {
        self.cpu.step()
    }

    /// Steps until the CPU halts or the budget is spent.
    ///
    /// # Returns
    ///
    /// How the run ended, or the error that faulted the CPU.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let mut steps = 0;
        while steps < self.max_steps {
            if self.cpu.is_halted() {
                return Ok(RunOutcome::Halted { steps });
            }
            self.tick()?;
            steps += 1;
        }
        if self.cpu.is_halted() {
            Ok(RunOutcome::Halted { steps })
        } else {
            tracing::info!(steps, "step budget exhausted");
            Ok(RunOutcome::StepLimit { steps })
        }
    }
}
