//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the instruction handlers.
//! Every operation produces a raw result that is folded into the operand
//! width by the [`flags`] normalizer, which also yields carry and zero.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Width folding and carry/zero computation.
pub mod flags;

/// Bitwise operations (and, or, xor, not).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use crate::common::error::Result;
use crate::core::arch::reg::Width;
use flags::{Normalized, normalize};

/// Operation selector for [`Alu::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `floor(a / b)`
    Div,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!a` within the width
    Not,
    /// `a << b`
    Shl,
    /// `a >> b`
    Shr,
}

/// Arithmetic Logic Unit for 8-bit and 16-bit integer operations.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation and normalizes the result.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `a`     - First operand (already at `width`).
    /// * `b`     - Second operand, or the shift amount.
    /// * `width` - Width the result is folded into.
    ///
    /// # Returns
    ///
    /// The normalized result with its flags, or an error for division by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim16_core::core::arch::reg::Width;
    /// use sim16_core::core::units::alu::{Alu, AluOp};
    ///
    /// let r = Alu::execute(AluOp::Sub, 5, 6, Width::Word).unwrap();
    /// assert_eq!(r.value, 0xFFFF);
    /// assert!(r.carry);
    ///
    /// let r = Alu::execute(AluOp::Add, 0xFF, 1, Width::Byte).unwrap();
    /// assert_eq!(r.value, 0);
    /// assert!(r.carry && !r.zero);
    /// ```
    pub fn execute(op: AluOp, a: u16, b: u16, width: Width) -> Result<Normalized> {
        let raw = match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => arithmetic::execute(op, a, b)?,
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b, width),
            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),
        };
        Ok(normalize(raw, width))
    }
}
