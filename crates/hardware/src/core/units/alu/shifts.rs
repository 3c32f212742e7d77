//! ALU shift operations.
//!
//! Shifts are computed on a widened value so bits shifted past the operand
//! width are still visible to the normalizer (as carry). Amounts are clamped
//! to [`MAX_SHIFT`]: every larger amount folds to the same result.

use super::AluOp;
use crate::common::constants::MAX_SHIFT;

/// Executes a shift of `a` by `amount` bits.
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u16, amount: u16) -> i64 {
    let amount = u32::from(amount).min(MAX_SHIFT);
    let a = i64::from(a);
    match op {
        AluOp::Shl => a << amount,
        AluOp::Shr => a >> amount,
        _ => 0,
    }
}
