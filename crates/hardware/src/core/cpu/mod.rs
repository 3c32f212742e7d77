//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Register bank, pending-interrupt latch and statistics.
//! 2. **Control Unit:** The fetch/decode/dispatch step loop ([`execution`]).
//! 3. **Stack Engine:** Byte and word push/pop through `SP` ([`stack`]).
//! 4. **Interrupts:** Trap entry, return and privilege checks ([`trap`]).
//! 5. **Operands:** Reading and writing decoded operands ([`operand`]).

/// Fetch/decode/dispatch loop.
pub mod execution;

/// Operand value access for instruction handlers.
pub mod operand;

/// Stack push/pop primitives.
pub mod stack;

/// Interrupt and privilege controller.
pub mod trap;

use std::fmt;

use crate::config::Config;
use crate::core::arch::file::RegisterFile;
use crate::core::arch::mode::PrivilegeMode;
use crate::core::observer::TracingObserver;
use crate::soc::Memory;
use crate::stats::CpuStats;

/// Run state derived from the halt and fault latches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    /// Executing instructions.
    Running,
    /// Halt latch set; steps are no-ops.
    Halted,
    /// Fault latch set; every step fails. Terminal.
    Faulted,
}

/// Main CPU structure containing all processor state.
///
/// The register bank is built once at construction and never torn down; a
/// faulted CPU must be replaced by constructing a new one.
pub struct Cpu {
    /// Architectural registers.
    pub regs: RegisterFile,
    /// Memory the CPU executes against.
    pub memory: Box<dyn Memory>,
    /// Execution counters.
    pub stats: CpuStats,
    /// Log each decoded instruction at trace level.
    pub trace: bool,
    irq_pending: bool,
}

impl Cpu {
    /// Creates a CPU in the reset state.
    ///
    /// `IP` and `SP` come from `config`; `SR` holds its reset value, so the
    /// CPU starts halted until the host calls [`Cpu::resume`].
    ///
    /// # Arguments
    ///
    /// * `memory` - Store the CPU fetches from and reads/writes data in.
    /// * `config` - Reset state and tracing options.
    pub fn new(memory: Box<dyn Memory>, config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        if config.general.trace_registers {
            let _ = regs.set_observer(Some(Box::new(TracingObserver)));
        }
        regs.set_ip(config.general.start_ip);
        regs.set_sp(config.general.initial_sp);

        Self {
            regs,
            memory,
            stats: CpuStats::default(),
            trace: config.general.trace_instructions,
            irq_pending: false,
        }
    }

    /// Current run state. Fault takes precedence over halt.
    pub const fn state(&self) -> CpuState {
        let sr = self.regs.status();
        if sr.fault() {
            CpuState::Faulted
        } else if sr.halt() {
            CpuState::Halted
        } else {
            CpuState::Running
        }
    }

    /// True while the halt latch is set.
    pub const fn is_halted(&self) -> bool {
        self.regs.status().halt()
    }

    /// True once the fault latch is set.
    pub const fn is_faulted(&self) -> bool {
        self.regs.status().fault()
    }

    /// Current privilege level.
    pub const fn privilege(&self) -> PrivilegeMode {
        PrivilegeMode::from_status(self.regs.status())
    }

    /// True while a hardware interrupt request is latched.
    pub const fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// Clears the halt latch so stepping executes instructions again.
    ///
    /// Has no effect on the fault latch.
    pub fn resume(&mut self) {
        self.regs.update_status(|sr| sr.set_halt(false));
    }

    /// Dumps the register state to stdout.
    pub fn dump_state(&self) {
        println!("{}", self.regs);
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("state", &self.state())
            .field("irq_pending", &self.irq_pending)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
