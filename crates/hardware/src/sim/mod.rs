//! Simulation host layer.
//!
//! Wraps the CPU for the programs that drive it: loading images into memory,
//! stepping under a budget, and sharing the CPU with a thread that raises
//! interrupts.

/// Thread-safe CPU handle.
pub mod handle;

/// Image loading.
pub mod loader;

/// Step loop with a budget.
pub mod simulator;

pub use handle::CpuHandle;
pub use simulator::{RunOutcome, Simulator};
