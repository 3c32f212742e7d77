//! Memory system.
//!
//! This module organizes the boundary between the CPU and its storage:
//! the [`Memory`] contract the core executes against, and a flat 64 KiB
//! implementation for hosts and tests.

/// Flat RAM implementation.
pub mod memory;

/// Memory collaborator trait.
pub mod traits;

pub use memory::FlatMemory;
pub use traits::Memory;
