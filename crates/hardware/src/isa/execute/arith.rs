//! Arithmetic handlers.
//!
//! `MUL` and `DIV` take one explicit operand and work on the accumulator:
//! the word forms use all of `A`, the byte forms only `AL`.

use super::{binary, single, unary};
use crate::common::error::Result;
use crate::core::Cpu;
use crate::core::arch::reg::{RegisterId, Width};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::Instruction;

/// `ADD r16, src`
pub fn add(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Add, Width::Word, true)
}

/// `ADDB r8, src`
pub fn addb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Add, Width::Byte, true)
}

/// `SUB r16, src`
pub fn sub(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Sub, Width::Word, true)
}

/// `SUBB r8, src`
pub fn subb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Sub, Width::Byte, true)
}

/// `INC r16`
pub fn inc(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Add, 1, Width::Word)
}

/// `INCB r8`
pub fn incb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Add, 1, Width::Byte)
}

/// `DEC r16`
pub fn dec(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Sub, 1, Width::Word)
}

/// `DECB r8`
pub fn decb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Sub, 1, Width::Byte)
}

/// `CMP r16, src`: subtracts and keeps only the flags.
pub fn cmp(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Sub, Width::Word, false)
}

/// `CMPB r8, src`
pub fn cmpb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Sub, Width::Byte, false)
}

/// `MUL src`: `A = A * src`
pub fn mul(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    accumulate(cpu, instr, AluOp::Mul, Width::Word)
}

/// `MULB src`: `AL = AL * src`
pub fn mulb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    accumulate(cpu, instr, AluOp::Mul, Width::Byte)
}

/// `DIV src`: `A = floor(A / src)`
pub fn div(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    accumulate(cpu, instr, AluOp::Div, Width::Word)
}

/// `DIVB src`: `AL = floor(AL / src)`
pub fn divb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    accumulate(cpu, instr, AluOp::Div, Width::Byte)
}

fn accumulate(cpu: &mut Cpu, instr: &Instruction, op: AluOp, width: Width) -> Result<bool> {
    let acc = match width {
        Width::Byte => RegisterId::AL,
        Width::Word => RegisterId::A,
    };
    let src = single(instr)?;
    let b = cpu.read_operand(src, width);
    let a = cpu.regs.read(acc);
    let result = Alu::execute(op, a, b, width)?;
    cpu.regs.write(acc, result.value);
    cpu.regs.update_status(|sr| result.apply(sr));
    Ok(true)
}
