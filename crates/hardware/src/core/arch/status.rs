//! Status Register.
//!
//! The status register (`SR`) is a plain 16-bit cell with named flags at fixed
//! bit positions. The whole word is pushed and popped during interrupt and
//! system-call transitions, so the layout below must never change:
//!
//! | Bit | Flag         |
//! |-----|--------------|
//! | 15  | halt         |
//! | 14  | fault        |
//! | 13  | supervisor   |
//! | 12  | interrupt mask |
//! | 1   | carry        |
//! | 0   | zero         |
//!
//! The remaining bits carry no meaning but are preserved as raw storage.

use std::fmt;

/// Halt latch; the control unit does nothing while set.
pub const SR_HALT: u16 = 1 << 15;

/// Fault latch; every step reports an error while set.
pub const SR_FAULT: u16 = 1 << 14;

/// Supervisor (privileged) mode.
pub const SR_SUPERVISOR: u16 = 1 << 13;

/// Interrupt mask; a pending interrupt is deferred while set.
pub const SR_IRQ_MASK: u16 = 1 << 12;

/// Carry (also reports borrow/underflow).
pub const SR_CARRY: u16 = 1 << 1;

/// Zero result.
pub const SR_ZERO: u16 = 1 << 0;

/// Value of `SR` after reset: halted, everything else clear.
pub const SR_RESET: u16 = SR_HALT;

/// Status register with flag accessors over its raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusRegister {
    bits: u16,
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::from_bits(SR_RESET)
    }
}

impl StatusRegister {
    /// Wraps a raw status word.
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// Returns the raw status word.
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Replaces the raw status word.
    pub const fn set_bits(&mut self, bits: u16) {
        self.bits = bits;
    }

    const fn get(self, mask: u16) -> bool {
        self.bits & mask != 0
    }

    const fn put(&mut self, mask: u16, on: bool) {
        if on {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
    }

    /// Halt latch.
    pub const fn halt(self) -> bool {
        self.get(SR_HALT)
    }

    /// Sets or clears the halt latch.
    pub const fn set_halt(&mut self, on: bool) {
        self.put(SR_HALT, on);
    }

    /// Fault latch.
    pub const fn fault(self) -> bool {
        self.get(SR_FAULT)
    }

    /// Sets or clears the fault latch.
    pub const fn set_fault(&mut self, on: bool) {
        self.put(SR_FAULT, on);
    }

    /// Supervisor mode.
    pub const fn supervisor(self) -> bool {
        self.get(SR_SUPERVISOR)
    }

    /// Enters or leaves supervisor mode.
    pub const fn set_supervisor(&mut self, on: bool) {
        self.put(SR_SUPERVISOR, on);
    }

    /// Interrupt mask.
    pub const fn irq_mask(self) -> bool {
        self.get(SR_IRQ_MASK)
    }

    /// Sets or clears the interrupt mask.
    pub const fn set_irq_mask(&mut self, on: bool) {
        self.put(SR_IRQ_MASK, on);
    }

    /// Carry flag.
    pub const fn carry(self) -> bool {
        self.get(SR_CARRY)
    }

    /// Sets or clears the carry flag.
    pub const fn set_carry(&mut self, on: bool) {
        self.put(SR_CARRY, on);
    }

    /// Zero flag.
    pub const fn zero(self) -> bool {
        self.get(SR_ZERO)
    }

    /// Sets or clears the zero flag.
    pub const fn set_zero(&mut self, on: bool) {
        self.put(SR_ZERO, on);
    }
}

impl fmt::Display for StatusRegister {
    /// Formats as `HFSICZ`-style letters, `-` for clear flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{}{}{}{}{}{}",
            flag(self.halt(), 'H'),
            flag(self.fault(), 'F'),
            flag(self.supervisor(), 'S'),
            flag(self.irq_mask(), 'I'),
            flag(self.carry(), 'C'),
            flag(self.zero(), 'Z'),
        )
    }
}
