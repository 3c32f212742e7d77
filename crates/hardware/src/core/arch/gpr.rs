//! General-Purpose Register Cells.
//!
//! Each of `A`, `B`, `C` and `D` is one 16-bit cell. The 8-bit halves
//! (`AH`/`AL` and so on) are masked views onto that cell rather than
//! separate storage, so writing one half never disturbs the other.

use crate::common::constants::{BYTE_SHIFT, HIGH_BYTE_MASK, LOW_BYTE_MASK};

/// One 16-bit general-purpose register with high/low byte views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GprCell(u16);

impl GprCell {
    /// Creates a cell holding `value`.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Reads the full 16-bit value.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Replaces the full 16-bit value.
    pub const fn set(&mut self, value: u16) {
        self.0 = value;
    }

    /// Reads the high byte (`xH`).
    pub const fn high(self) -> u8 {
        (self.0 >> BYTE_SHIFT) as u8
    }

    /// Reads the low byte (`xL`).
    pub const fn low(self) -> u8 {
        (self.0 & LOW_BYTE_MASK) as u8
    }

    /// Replaces the high byte, keeping the low byte.
    pub const fn set_high(&mut self, value: u8) {
        self.0 = (self.0 & LOW_BYTE_MASK) | ((value as u16) << BYTE_SHIFT);
    }

    /// Replaces the low byte, keeping the high byte.
    pub const fn set_low(&mut self, value: u8) {
        self.0 = (self.0 & HIGH_BYTE_MASK) | value as u16;
    }
}
