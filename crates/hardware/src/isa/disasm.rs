//! Instruction Disassembler.
//!
//! Renders decoded instructions as assembler text for debug tracing, the
//! CLI listing and test diagnostics.
//!
//! Syntax:
//!
//! - literals in hex: `0x2a`, `0x1234`
//! - direct memory operands in brackets: `[0x1234]`
//! - register-relative operands: `[SP+4]`, `[B-2]`, `[C]`
//! - transfer targets without brackets: `JMP 0x0100`, `CALL B`
//!
//! # Usage
//!
//! ```
//! use sim16_core::isa::disasm::disassemble;
//! use sim16_core::soc::FlatMemory;
//!
//! // MOV A, 0x0005
//! let mut mem = FlatMemory::with_image(&[0x06, 0x00, 0x05, 0x00]);
//! let (text, len) = disassemble(&mut mem, 0).unwrap();
//! assert_eq!(text, "MOV A, 0x0005");
//! assert_eq!(len, 4);
//! ```

use std::fmt;

use crate::common::error::Result;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Operand};
use crate::soc::Memory;

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Byte(value) => write!(f, "{value:#04x}"),
            Self::Word(value) => write!(f, "{value:#06x}"),
            Self::Address(addr) => write!(f, "[{addr:#06x}]"),
            Self::Register(reg) => write!(f, "{reg}"),
            Self::RegAddress { base, offset } => match offset {
                0 => write!(f, "[{base}]"),
                o if o < 0 => write!(f, "[{base}-{}]", o.unsigned_abs()),
                o => write!(f, "[{base}+{o}]"),
            },
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        let transfer = self.mnemonic().is_control_transfer();
        for (i, op) in self.operands.iter().flatten().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            match op {
                Operand::Address(addr) if transfer => write!(f, "{addr:#06x}")?,
                _ => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}

/// Disassembles the instruction at `addr`.
///
/// # Returns
///
/// The assembler text and the encoded length in bytes, or the decode error
/// for an undefined opcode or malformed register operand.
pub fn disassemble(mem: &mut dyn Memory, addr: u16) -> Result<(String, u16)> {
    let instr = decode(mem, addr)?;
    Ok((instr.to_string(), instr.len()))
}

/// Produces an address-annotated listing of `count` consecutive instructions.
///
/// Bytes that do not decode are listed as `DB` and skipped one at a time.
pub fn listing(mem: &mut dyn Memory, start: u16, count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count);
    let mut addr = start;
    for _ in 0..count {
        match disassemble(mem, addr) {
            Ok((text, len)) => {
                lines.push(format!("{addr:#06x}: {text}"));
                addr = addr.wrapping_add(len);
            }
            Err(_) => {
                let byte = mem.load_byte(addr);
                lines.push(format!("{addr:#06x}: DB {byte:#04x}"));
                addr = addr.wrapping_add(1);
            }
        }
    }
    lines
}
