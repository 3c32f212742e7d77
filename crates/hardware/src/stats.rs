//! Execution statistics.
//!
//! Counters maintained by the control unit and the trap controller. They are
//! informational only and never influence execution.

use serde::Serialize;

/// Per-CPU execution counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CpuStats {
    /// Instructions that completed without error.
    pub instructions_retired: u64,
    /// Steps skipped because the CPU was halted.
    pub halted_steps: u64,
    /// Hardware interrupts delivered to the IRQ vector.
    pub interrupts_taken: u64,
    /// `SYSCALL` instructions that entered the system-call vector.
    pub syscalls: u64,
    /// Times the fault latch was set.
    pub faults: u64,
}

impl CpuStats {
    /// Renders the counters as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
