//! Architectural state of the SIM16 CPU.
//!
//! This module contains the programmer-visible building blocks:
//! 1. **Registers:** Identities, widths and operand classes.
//! 2. **GPRs:** 16-bit cells with overlapping 8-bit views.
//! 3. **Status:** The flag word and its fixed bit layout.
//! 4. **Register Bank:** Storage for all registers with mutation reporting.
//! 5. **Modes:** Privilege levels derived from the status register.

/// Register bank addressed by register identity.
pub mod file;

/// General-purpose register cells.
pub mod gpr;

/// Privilege mode definitions.
pub mod mode;

/// Register identities, widths and classes.
pub mod reg;

/// Status register layout and accessors.
pub mod status;
