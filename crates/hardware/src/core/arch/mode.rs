//! Privilege Modes.
//!
//! The CPU runs in one of two privilege levels, selected by the supervisor bit
//! of the status register. Supervisor mode is entered through the trap-entry
//! path (hardware interrupt or `SYSCALL`) and left through `IRET` or `SYSRET`.

use crate::core::arch::status::StatusRegister;

/// Privilege level derived from the status register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// Unprivileged program code.
    User,
    /// Interrupt and system-call handlers.
    Supervisor,
}

impl PrivilegeMode {
    /// Reads the privilege level encoded in `sr`.
    pub const fn from_status(sr: StatusRegister) -> Self {
        if sr.supervisor() { Self::Supervisor } else { Self::User }
    }

    /// Returns the human-readable name of the privilege mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Supervisor => "Supervisor",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
