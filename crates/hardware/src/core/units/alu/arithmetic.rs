//! ALU arithmetic operations.
//!
//! Addition, subtraction, multiplication and division on unsigned operands.
//! Results are raw (unbounded) so the normalizer can see overflow and underflow.
//! Division is floor division; both operands are non-negative, so it matches
//! truncating division.

use super::AluOp;
use crate::common::error::{CpuError, Result};

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The raw result, or [`CpuError::DivisionByZero`] for `Div` with `b == 0`.
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u16, b: u16) -> Result<i64> {
    let (a, b) = (i64::from(a), i64::from(b));
    Ok(match op {
        AluOp::Add => a + b,
        AluOp::Sub => a - b,
        AluOp::Mul => a * b,
        AluOp::Div => {
            if b == 0 {
                return Err(CpuError::DivisionByZero);
            }
            a.div_euclid(b)
        }
        _ => 0,
    })
}
