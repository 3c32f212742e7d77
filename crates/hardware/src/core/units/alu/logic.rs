//! ALU bitwise operations.

use super::AluOp;
use crate::core::arch::reg::Width;

/// Executes a bitwise operation at `width`.
///
/// `Not` ignores `b` and inverts only the bits inside `width`.
/// Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u16, b: u16, width: Width) -> i64 {
    let result = match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => a ^ width.mask(),
        _ => 0,
    };
    i64::from(width.truncate(result))
}
