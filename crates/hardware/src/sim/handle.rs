//! Shared CPU handle.
//!
//! `step`, `raise_interrupt` and `lower_interrupt` each run under one lock,
//! so an interrupt request raised from another thread always lands between
//! two instructions, never inside a decode.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::common::error::Result;
use crate::core::Cpu;

/// Cloneable, thread-safe handle to a [`Cpu`].
#[derive(Clone, Debug)]
pub struct CpuHandle {
    inner: Arc<Mutex<Cpu>>,
}

impl CpuHandle {
    /// Wraps `cpu` for sharing.
    pub fn new(cpu: Cpu) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cpu)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cpu> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes one instruction. See [`Cpu::step`].
    pub fn step(&self) -> Result<()> {
        self.lock().step()
    }

    /// Asserts the interrupt line. See [`Cpu::raise_interrupt`].
    pub fn raise_interrupt(&self) -> Result<()> {
        self.lock().raise_interrupt()
    }

    /// Deasserts the interrupt line.
    pub fn lower_interrupt(&self) {
        self.lock().lower_interrupt();
    }

    /// Runs `f` with exclusive access to the CPU.
    pub fn with<R>(&self, f: impl FnOnce(&mut Cpu) -> R) -> R {
        f(&mut *self.lock())
    }
}
