//! Global Architectural Constants.
//!
//! This module defines constants shared across the execution core. It includes:
//! 1. **Trap Vectors:** Fixed entry points for hardware interrupts and system calls.
//! 2. **Widths:** Moduli and masks for the 8-bit and 16-bit operand widths.
//! 3. **Encoding:** Byte masks and shifts for splitting words into halves.

/// Entry point of the maskable hardware interrupt handler.
pub const IRQ_VECTOR: u16 = 0x0003;

/// Entry point of the software system-call handler.
pub const SYSCALL_VECTOR: u16 = 0x0006;

/// Number of distinct values representable in a byte.
pub const BYTE_MODULUS: i64 = 0x100;

/// Number of distinct values representable in a word.
pub const WORD_MODULUS: i64 = 0x1_0000;

/// Mask selecting the low byte of a word.
pub const LOW_BYTE_MASK: u16 = 0x00FF;

/// Mask selecting the high byte of a word.
pub const HIGH_BYTE_MASK: u16 = 0xFF00;

/// Shift that moves the high byte of a word into the low position.
pub const BYTE_SHIFT: u32 = 8;

/// Upper bound applied to shift amounts before widening.
///
/// Any shift of a 16-bit value by 32 or more bits yields the same normalized
/// result as a shift by 32, so larger amounts are clamped.
pub const MAX_SHIFT: u32 = 32;

/// Size of the addressable memory space in bytes.
pub const ADDRESS_SPACE: usize = 0x1_0000;
