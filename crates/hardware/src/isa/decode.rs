//! Operand Decoder.
//!
//! This module turns the bytes at an address into an [`Instruction`]. It performs
//! the following:
//! 1. **Fetch:** Reads the opcode byte and resolves its metadata.
//! 2. **Operand Decode:** Consumes each operand slot in order, fully advancing the
//!    cursor for operand 1 before operand 2 is read.
//! 3. **Validation:** Checks every register identity against the class its slot
//!    requires, so handlers only ever see well-formed register operands.
//!
//! Slot encodings:
//!
//! | Type         | Bytes | Meaning                                        |
//! |--------------|-------|------------------------------------------------|
//! | `Byte`       | 1     | literal                                        |
//! | `Register8`  | 1     | register identity                              |
//! | `Register16` | 1     | register identity                              |
//! | `Word`       | 2     | little-endian literal                          |
//! | `Address`    | 2     | little-endian literal                          |
//! | `RegAddress` | 2     | low byte base register, high byte `i8` offset  |

use crate::common::error::{CpuError, OperandPosition, Result};
use crate::core::arch::reg::{RegisterClass, RegisterId};
use crate::isa::instruction::{Instruction, InstructionInfo, Operand, OperandType};
use crate::isa::table;
use crate::soc::Memory;

/// Decodes the instruction whose opcode is at `address`.
///
/// # Arguments
///
/// * `mem` - Memory holding the instruction stream.
/// * `address` - Address of the opcode byte.
///
/// # Returns
///
/// The decoded instruction, [`CpuError::InvalidOpcode`] for an undefined opcode,
/// or [`CpuError::InvalidOperand`] for a register outside its slot's class.
pub fn decode(mem: &mut dyn Memory, address: u16) -> Result<Instruction> {
    let opcode = mem.load_byte(address);
    let info = table::lookup(opcode).ok_or(CpuError::InvalidOpcode { opcode, address })?;

    let mut cursor = address.wrapping_add(1);
    let mut operands = [None; 2];
    for (slot, (ty, position)) in info
        .operands
        .iter()
        .zip([OperandPosition::First, OperandPosition::Second])
        .enumerate()
    {
        operands[slot] = Some(decode_operand(mem, info, *ty, position, &mut cursor)?);
    }

    Ok(Instruction {
        address,
        info,
        operands,
        next_ip: cursor,
    })
}

/// Decodes one operand slot at `cursor` and advances the cursor past it.
fn decode_operand(
    mem: &mut dyn Memory,
    info: &InstructionInfo,
    ty: OperandType,
    position: OperandPosition,
    cursor: &mut u16,
) -> Result<Operand> {
    let at = *cursor;
    *cursor = at.wrapping_add(ty.size());
    let operand = match ty {
        OperandType::Byte => Operand::Byte(mem.load_byte(at)),
        OperandType::Word => Operand::Word(mem.load_word(at)),
        OperandType::Address => Operand::Address(mem.load_word(at)),
        OperandType::Register8 | OperandType::Register16 => {
            let class = info
                .register_class(ty)
                .unwrap_or(RegisterClass::GeneralOrStack);
            Operand::Register(resolve(mem.load_byte(at), class, position)?)
        }
        OperandType::RegAddress => {
            let [code, offset] = mem.load_word(at).to_le_bytes();
            Operand::RegAddress {
                base: resolve(code, RegisterClass::GeneralOrStack, position)?,
                offset: offset as i8,
            }
        }
    };
    Ok(operand)
}

fn resolve(
    code: u8,
    class: RegisterClass,
    position: OperandPosition,
) -> Result<RegisterId> {
    class.resolve(code).ok_or(CpuError::InvalidOperand {
        position,
        expected: class,
        found: code,
    })
}
