//! Register mutation reporting.
//!
//! Hosts that display machine state attach a [`RegisterObserver`] to the
//! register bank. Events are delivered synchronously from inside the mutating
//! call, one per mutation, with no buffering.

use crate::core::arch::reg::RegisterId;

/// One register mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterEvent {
    /// Identity the write went through (an 8-bit half reports as itself).
    pub register: RegisterId,
    /// Value before the write, at the identity's width.
    pub old: u16,
    /// Value after the write, at the identity's width.
    pub new: u16,
}

/// Receiver for register mutation events.
pub trait RegisterObserver: Send {
    /// Called once for every register mutation.
    fn register_written(&mut self, event: RegisterEvent);
}

/// Observer that forwards every mutation to `tracing` at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RegisterObserver for TracingObserver {
    fn register_written(&mut self, event: RegisterEvent) {
        tracing::trace!(
            target: "sim16::registers",
            register = %event.register,
            old = event.old,
            new = event.new,
            "register write"
        );
    }
}
