//! Instruction Executors.
//!
//! One handler per mnemonic family. Every handler has the [`Handler`]
//! signature: it receives the CPU and the decoded instruction and returns
//! whether the control unit should advance `IP` to the post-decode cursor
//! (`true`) or leave it where the handler put it (`false`).
//!
//! Handlers check everything that can fail before they mutate any state, so
//! an instruction that raises leaves registers, flags and memory untouched.
//!
//! [`Handler`]: crate::isa::instruction::Handler

/// ADD, SUB, INC, DEC, CMP, MUL, DIV and their byte forms.
pub mod arith;

/// HLT, jumps, CALL and RET.
pub mod control;

/// AND, OR, XOR, NOT, SHL, SHR and their byte forms.
pub mod logic;

/// PUSH and POP.
pub mod stack;

/// CLI, STI, IRET, SYSCALL and SYSRET.
pub mod system;

/// MOV and MOVB.
pub mod transfer;

use crate::common::error::{CpuError, OperandPosition, Result};
use crate::core::Cpu;
use crate::core::arch::reg::Width;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::{Instruction, Operand};

/// Checks a register operand against the class its slot requires.
fn checked(instr: &Instruction, position: OperandPosition) -> Result<Operand> {
    let op = instr.operand(position).ok_or_else(|| instr.unsupported())?;
    let reg = match op {
        Operand::Register(reg) | Operand::RegAddress { base: reg, .. } => reg,
        Operand::Byte(_) | Operand::Word(_) | Operand::Address(_) => return Ok(op),
    };
    let slot = usize::from(position.number() - 1);
    let class = instr
        .info
        .operands
        .get(slot)
        .and_then(|ty| instr.info.register_class(*ty));
    match class {
        Some(class) if class.contains(reg) => Ok(op),
        Some(class) => Err(CpuError::InvalidOperand {
            position,
            expected: class,
            found: reg.code(),
        }),
        None => Err(instr.unsupported()),
    }
}

/// The validated operand of a one-operand form.
pub(crate) fn single(instr: &Instruction) -> Result<Operand> {
    checked(instr, OperandPosition::First)
}

/// The validated operands of a two-operand form.
pub(crate) fn pair(instr: &Instruction) -> Result<(Operand, Operand)> {
    Ok((
        checked(instr, OperandPosition::First)?,
        checked(instr, OperandPosition::Second)?,
    ))
}

/// `dst = dst <op> src`, updating carry and zero.
///
/// With `writeback` unset only the flags change (`CMP`).
pub(crate) fn binary(
    cpu: &mut Cpu,
    instr: &Instruction,
    op: AluOp,
    width: Width,
    writeback: bool,
) -> Result<bool> {
    let (dst, src) = pair(instr)?;
    let a = cpu.read_operand(dst, width);
    let b = cpu.read_operand(src, width);
    let result = Alu::execute(op, a, b, width)?;
    if writeback {
        cpu.write_operand(instr, dst, width, result.value)?;
    }
    cpu.regs.update_status(|sr| result.apply(sr));
    Ok(true)
}

/// `dst = <op> dst`, with `rhs` as the implicit second operand.
pub(crate) fn unary(
    cpu: &mut Cpu,
    instr: &Instruction,
    op: AluOp,
    rhs: u16,
    width: Width,
) -> Result<bool> {
    let dst = single(instr)?;
    let a = cpu.read_operand(dst, width);
    let result = Alu::execute(op, a, rhs, width)?;
    cpu.write_operand(instr, dst, width, result.value)?;
    cpu.regs.update_status(|sr| result.apply(sr));
    Ok(true)
}
