//! Bitwise and shift handlers.

use super::{binary, unary};
use crate::common::error::Result;
use crate::core::Cpu;
use crate::core::arch::reg::Width;
use crate::core::units::alu::AluOp;
use crate::isa::instruction::Instruction;

/// `AND r16, src`
pub fn and(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::And, Width::Word, true)
}

/// `ANDB r8, src`
pub fn andb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::And, Width::Byte, true)
}

/// `OR r16, src`
pub fn or(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Or, Width::Word, true)
}

/// `ORB r8, src`
pub fn orb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Or, Width::Byte, true)
}

/// `XOR r16, src`
pub fn xor(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Xor, Width::Word, true)
}

/// `XORB r8, src`
pub fn xorb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Xor, Width::Byte, true)
}

/// `NOT r16`
pub fn not(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Not, 0, Width::Word)
}

/// `NOTB r8`
pub fn notb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    unary(cpu, instr, AluOp::Not, 0, Width::Byte)
}

/// `SHL r16, amount`
pub fn shl(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Shl, Width::Word, true)
}

/// `SHLB r8, amount`
pub fn shlb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Shl, Width::Byte, true)
}

/// `SHR r16, amount`
pub fn shr(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Shr, Width::Word, true)
}

/// `SHRB r8, amount`
pub fn shrb(cpu: &mut Cpu, instr: &Instruction) -> Result<bool> {
    binary(cpu, instr, AluOp::Shr, Width::Byte, true)
}
