//! Common types and constants used throughout the execution core.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Trap vectors, operand widths and encoding shifts.
//! 2. **Error Handling:** The fatal error type reported by the control unit.

/// Architectural constants (vectors, widths, masks).
pub mod constants;

/// Error types raised by the execution core.
pub mod error;

pub use constants::{IRQ_VECTOR, SYSCALL_VECTOR};
pub use error::{CpuError, OperandPosition, Result};
