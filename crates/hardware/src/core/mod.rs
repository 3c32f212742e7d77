//! Core processor implementation.
//!
//! This module contains the CPU itself, its architectural state, the
//! register observer channel, and the ALU the instruction handlers use.

/// Architecture-specific components (register file, status register, privilege modes).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Register-mutation notifications.
pub mod observer;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
