//! Execution units.

/// Arithmetic logic unit and flag normalizer.
pub mod alu;
