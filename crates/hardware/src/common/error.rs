//! Execution errors.
//!
//! Every failure the execution core can report is a variant of [`CpuError`].
//! All of them are fatal: the control unit latches the fault bit in the
//! status register before returning the error, and every later step reports
//! [`CpuError::Faulted`] until the host rebuilds the CPU.

use thiserror::Error;

use crate::core::arch::reg::RegisterClass;

/// Shorthand for results produced by the execution core.
pub type Result<T> = std::result::Result<T, CpuError>;

/// Position of an operand slot within an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandPosition {
    /// The first operand (usually the destination).
    First,
    /// The second operand (usually the source).
    Second,
}

impl OperandPosition {
    /// Returns the 1-based slot number.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl std::fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operand {}", self.number())
    }
}

/// Fatal conditions raised while stepping the CPU.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The byte at the instruction pointer is not a known opcode.
    #[error("invalid opcode {opcode:#04x} at {address:#06x}")]
    InvalidOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },

    /// A register operand names a register outside the class its slot accepts.
    #[error("{position}: register code {found:#04x} is not a {expected} register")]
    InvalidOperand {
        /// Which operand slot carried the bad register.
        position: OperandPosition,
        /// Register class the slot requires.
        expected: RegisterClass,
        /// Raw register identity byte found in the instruction stream.
        found: u8,
    },

    /// `DIV` or `DIVB` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `SYSCALL` executed while already in supervisor mode.
    #[error("SYSCALL executed in supervisor mode")]
    SyscallInSupervisor,

    /// `SYSRET` executed outside supervisor mode.
    #[error("SYSRET executed outside supervisor mode")]
    SysretOutsideSupervisor,

    /// The CPU is latched in the fault state.
    #[error("CPU is in the fault state")]
    Faulted,
}
