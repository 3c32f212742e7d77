//! Opcode table.
//!
//! The table is an explicit list of [`InstructionInfo`] entries, indexed once
//! into a 256-slot lookup array on first use. Lookup is a single array access.

use std::sync::LazyLock;

use crate::isa::execute::{arith, control, logic, stack, system, transfer};
use crate::isa::instruction::{InstructionInfo, Mnemonic, OperandType};
use crate::isa::opcodes as op;

use OperandType::{Address, Byte, RegAddress, Register8, Register16, Word};

const NONE: &[OperandType] = &[];
const R16: &[OperandType] = &[Register16];
const R8: &[OperandType] = &[Register8];
const ADDR: &[OperandType] = &[Address];
const REGADDR: &[OperandType] = &[RegAddress];
const WORD: &[OperandType] = &[Word];
const BYTE: &[OperandType] = &[Byte];

const R16_R16: &[OperandType] = &[Register16, Register16];
const R16_ADDR: &[OperandType] = &[Register16, Address];
const R16_REGADDR: &[OperandType] = &[Register16, RegAddress];
const R16_WORD: &[OperandType] = &[Register16, Word];
const ADDR_R16: &[OperandType] = &[Address, Register16];
const REGADDR_R16: &[OperandType] = &[RegAddress, Register16];
const ADDR_WORD: &[OperandType] = &[Address, Word];
const REGADDR_WORD: &[OperandType] = &[RegAddress, Word];

const R8_R8: &[OperandType] = &[Register8, Register8];
const R8_ADDR: &[OperandType] = &[Register8, Address];
const R8_REGADDR: &[OperandType] = &[Register8, RegAddress];
const R8_BYTE: &[OperandType] = &[Register8, Byte];
const ADDR_R8: &[OperandType] = &[Address, Register8];
const REGADDR_R8: &[OperandType] = &[RegAddress, Register8];
const ADDR_BYTE: &[OperandType] = &[Address, Byte];
const REGADDR_BYTE: &[OperandType] = &[RegAddress, Byte];

const fn e(
    opcode: u8,
    mnemonic: Mnemonic,
    operands: &'static [OperandType],
    handler: crate::isa::instruction::Handler,
) -> InstructionInfo {
    InstructionInfo::new(opcode, mnemonic, operands, handler)
}

/// Every defined instruction form.
pub static INSTRUCTIONS: &[InstructionInfo] = &[
    e(op::HLT, Mnemonic::Hlt, NONE, control::hlt),
    e(op::MOV_R16_R16, Mnemonic::Mov, R16_R16, transfer::mov).with_stack(),
    e(op::MOV_R16_ADDR, Mnemonic::Mov, R16_ADDR, transfer::mov).with_stack(),
    e(op::MOV_R16_REGADDR, Mnemonic::Mov, R16_REGADDR, transfer::mov).with_stack(),
    e(op::MOV_ADDR_R16, Mnemonic::Mov, ADDR_R16, transfer::mov).with_stack(),
    e(op::MOV_REGADDR_R16, Mnemonic::Mov, REGADDR_R16, transfer::mov).with_stack(),
    e(op::MOV_R16_WORD, Mnemonic::Mov, R16_WORD, transfer::mov).with_stack(),
    e(op::MOV_ADDR_WORD, Mnemonic::Mov, ADDR_WORD, transfer::mov).with_stack(),
    e(op::MOV_REGADDR_WORD, Mnemonic::Mov, REGADDR_WORD, transfer::mov).with_stack(),
    e(op::MOVB_R8_R8, Mnemonic::Movb, R8_R8, transfer::movb),
    e(op::MOVB_R8_ADDR, Mnemonic::Movb, R8_ADDR, transfer::movb),
    e(op::MOVB_R8_REGADDR, Mnemonic::Movb, R8_REGADDR, transfer::movb),
    e(op::MOVB_ADDR_R8, Mnemonic::Movb, ADDR_R8, transfer::movb),
    e(op::MOVB_REGADDR_R8, Mnemonic::Movb, REGADDR_R8, transfer::movb),
    e(op::MOVB_R8_BYTE, Mnemonic::Movb, R8_BYTE, transfer::movb),
    e(op::MOVB_ADDR_BYTE, Mnemonic::Movb, ADDR_BYTE, transfer::movb),
    e(op::MOVB_REGADDR_BYTE, Mnemonic::Movb, REGADDR_BYTE, transfer::movb),
    e(op::ADD_R16_R16, Mnemonic::Add, R16_R16, arith::add).with_stack(),
    e(op::ADD_R16_REGADDR, Mnemonic::Add, R16_REGADDR, arith::add).with_stack(),
    e(op::ADD_R16_ADDR, Mnemonic::Add, R16_ADDR, arith::add).with_stack(),
    e(op::ADD_R16_WORD, Mnemonic::Add, R16_WORD, arith::add).with_stack(),
    e(op::ADDB_R8_R8, Mnemonic::Addb, R8_R8, arith::addb),
    e(op::ADDB_R8_REGADDR, Mnemonic::Addb, R8_REGADDR, arith::addb),
    e(op::ADDB_R8_ADDR, Mnemonic::Addb, R8_ADDR, arith::addb),
    e(op::ADDB_R8_BYTE, Mnemonic::Addb, R8_BYTE, arith::addb),
    e(op::SUB_R16_R16, Mnemonic::Sub, R16_R16, arith::sub).with_stack(),
    e(op::SUB_R16_REGADDR, Mnemonic::Sub, R16_REGADDR, arith::sub).with_stack(),
    e(op::SUB_R16_ADDR, Mnemonic::Sub, R16_ADDR, arith::sub).with_stack(),
    e(op::SUB_R16_WORD, Mnemonic::Sub, R16_WORD, arith::sub).with_stack(),
    e(op::SUBB_R8_R8, Mnemonic::Subb, R8_R8, arith::subb),
    e(op::SUBB_R8_REGADDR, Mnemonic::Subb, R8_REGADDR, arith::subb),
    e(op::SUBB_R8_ADDR, Mnemonic::Subb, R8_ADDR, arith::subb),
    e(op::SUBB_R8_BYTE, Mnemonic::Subb, R8_BYTE, arith::subb),
    e(op::INC_R16, Mnemonic::Inc, R16, arith::inc).with_stack(),
    e(op::INCB_R8, Mnemonic::Incb, R8, arith::incb),
    e(op::DEC_R16, Mnemonic::Dec, R16, arith::dec).with_stack(),
    e(op::DECB_R8, Mnemonic::Decb, R8, arith::decb),
    e(op::CMP_R16_R16, Mnemonic::Cmp, R16_R16, arith::cmp).with_stack(),
    e(op::CMP_R16_REGADDR, Mnemonic::Cmp, R16_REGADDR, arith::cmp).with_stack(),
    e(op::CMP_R16_ADDR, Mnemonic::Cmp, R16_ADDR, arith::cmp).with_stack(),
    e(op::CMP_R16_WORD, Mnemonic::Cmp, R16_WORD, arith::cmp).with_stack(),
    e(op::CMPB_R8_R8, Mnemonic::Cmpb, R8_R8, arith::cmpb),
    e(op::CMPB_R8_REGADDR, Mnemonic::Cmpb, R8_REGADDR, arith::cmpb),
    e(op::CMPB_R8_ADDR, Mnemonic::Cmpb, R8_ADDR, arith::cmpb),
    e(op::CMPB_R8_BYTE, Mnemonic::Cmpb, R8_BYTE, arith::cmpb),
    e(op::AND_R16_R16, Mnemonic::And, R16_R16, logic::and),
    e(op::AND_R16_REGADDR, Mnemonic::And, R16_REGADDR, logic::and),
    e(op::AND_R16_ADDR, Mnemonic::And, R16_ADDR, logic::and),
    e(op::AND_R16_WORD, Mnemonic::And, R16_WORD, logic::and),
    e(op::ANDB_R8_R8, Mnemonic::Andb, R8_R8, logic::andb),
    e(op::ANDB_R8_REGADDR, Mnemonic::Andb, R8_REGADDR, logic::andb),
    e(op::ANDB_R8_ADDR, Mnemonic::Andb, R8_ADDR, logic::andb),
    e(op::ANDB_R8_BYTE, Mnemonic::Andb, R8_BYTE, logic::andb),
    e(op::OR_R16_R16, Mnemonic::Or, R16_R16, logic::or),
    e(op::OR_R16_REGADDR, Mnemonic::Or, R16_REGADDR, logic::or),
    e(op::OR_R16_ADDR, Mnemonic::Or, R16_ADDR, logic::or),
    e(op::OR_R16_WORD, Mnemonic::Or, R16_WORD, logic::or),
    e(op::ORB_R8_R8, Mnemonic::Orb, R8_R8, logic::orb),
    e(op::ORB_R8_REGADDR, Mnemonic::Orb, R8_REGADDR, logic::orb),
    e(op::ORB_R8_ADDR, Mnemonic::Orb, R8_ADDR, logic::orb),
    e(op::ORB_R8_BYTE, Mnemonic::Orb, R8_BYTE, logic::orb),
    e(op::XOR_R16_R16, Mnemonic::Xor, R16_R16, logic::xor),
    e(op::XOR_R16_REGADDR, Mnemonic::Xor, R16_REGADDR, logic::xor),
    e(op::XOR_R16_ADDR, Mnemonic::Xor, R16_ADDR, logic::xor),
    e(op::XOR_R16_WORD, Mnemonic::Xor, R16_WORD, logic::xor),
    e(op::XORB_R8_R8, Mnemonic::Xorb, R8_R8, logic::xorb),
    e(op::XORB_R8_REGADDR, Mnemonic::Xorb, R8_REGADDR, logic::xorb),
    e(op::XORB_R8_ADDR, Mnemonic::Xorb, R8_ADDR, logic::xorb),
    e(op::XORB_R8_BYTE, Mnemonic::Xorb, R8_BYTE, logic::xorb),
    e(op::NOT_R16, Mnemonic::Not, R16, logic::not),
    e(op::NOTB_R8, Mnemonic::Notb, R8, logic::notb),
    e(op::SHL_R16_R16, Mnemonic::Shl, R16_R16, logic::shl),
    e(op::SHL_R16_REGADDR, Mnemonic::Shl, R16_REGADDR, logic::shl),
    e(op::SHL_R16_ADDR, Mnemonic::Shl, R16_ADDR, logic::shl),
    e(op::SHL_R16_WORD, Mnemonic::Shl, R16_WORD, logic::shl),
    e(op::SHLB_R8_R8, Mnemonic::Shlb, R8_R8, logic::shlb),
    e(op::SHLB_R8_REGADDR, Mnemonic::Shlb, R8_REGADDR, logic::shlb),
    e(op::SHLB_R8_ADDR, Mnemonic::Shlb, R8_ADDR, logic::shlb),
    e(op::SHLB_R8_BYTE, Mnemonic::Shlb, R8_BYTE, logic::shlb),
    e(op::SHR_R16_R16, Mnemonic::Shr, R16_R16, logic::shr),
    e(op::SHR_R16_REGADDR, Mnemonic::Shr, R16_REGADDR, logic::shr),
    e(op::SHR_R16_ADDR, Mnemonic::Shr, R16_ADDR, logic::shr),
    e(op::SHR_R16_WORD, Mnemonic::Shr, R16_WORD, logic::shr),
    e(op::SHRB_R8_R8, Mnemonic::Shrb, R8_R8, logic::shrb),
    e(op::SHRB_R8_REGADDR, Mnemonic::Shrb, R8_REGADDR, logic::shrb),
    e(op::SHRB_R8_ADDR, Mnemonic::Shrb, R8_ADDR, logic::shrb),
    e(op::SHRB_R8_BYTE, Mnemonic::Shrb, R8_BYTE, logic::shrb),
    e(op::MUL_R16, Mnemonic::Mul, R16, arith::mul),
    e(op::MUL_REGADDR, Mnemonic::Mul, REGADDR, arith::mul),
    e(op::MUL_ADDR, Mnemonic::Mul, ADDR, arith::mul),
    e(op::MUL_WORD, Mnemonic::Mul, WORD, arith::mul),
    e(op::MULB_R8, Mnemonic::Mulb, R8, arith::mulb),
    e(op::MULB_REGADDR, Mnemonic::Mulb, REGADDR, arith::mulb),
    e(op::MULB_ADDR, Mnemonic::Mulb, ADDR, arith::mulb),
    e(op::MULB_BYTE, Mnemonic::Mulb, BYTE, arith::mulb),
    e(op::DIV_R16, Mnemonic::Div, R16, arith::div),
    e(op::DIV_REGADDR, Mnemonic::Div, REGADDR, arith::div),
    e(op::DIV_ADDR, Mnemonic::Div, ADDR, arith::div),
    e(op::DIV_WORD, Mnemonic::Div, WORD, arith::div),
    e(op::DIVB_R8, Mnemonic::Divb, R8, arith::divb),
    e(op::DIVB_REGADDR, Mnemonic::Divb, REGADDR, arith::divb),
    e(op::DIVB_ADDR, Mnemonic::Divb, ADDR, arith::divb),
    e(op::DIVB_BYTE, Mnemonic::Divb, BYTE, arith::divb),
    e(op::JMP_ADDR, Mnemonic::Jmp, ADDR, control::jmp),
    e(op::JMP_R16, Mnemonic::Jmp, R16, control::jmp),
    e(op::JC_ADDR, Mnemonic::Jc, ADDR, control::jc),
    e(op::JC_R16, Mnemonic::Jc, R16, control::jc),
    e(op::JNC_ADDR, Mnemonic::Jnc, ADDR, control::jnc),
    e(op::JNC_R16, Mnemonic::Jnc, R16, control::jnc),
    e(op::JZ_ADDR, Mnemonic::Jz, ADDR, control::jz),
    e(op::JZ_R16, Mnemonic::Jz, R16, control::jz),
    e(op::JNZ_ADDR, Mnemonic::Jnz, ADDR, control::jnz),
    e(op::JNZ_R16, Mnemonic::Jnz, R16, control::jnz),
    e(op::JA_ADDR, Mnemonic::Ja, ADDR, control::ja),
    e(op::JA_R16, Mnemonic::Ja, R16, control::ja),
    e(op::JNA_ADDR, Mnemonic::Jna, ADDR, control::jna),
    e(op::JNA_R16, Mnemonic::Jna, R16, control::jna),
    e(op::PUSH_R16, Mnemonic::Push, R16, stack::push).with_stack(),
    e(op::PUSH_REGADDR, Mnemonic::Push, REGADDR, stack::push).with_stack(),
    e(op::PUSH_ADDR, Mnemonic::Push, ADDR, stack::push).with_stack(),
    e(op::PUSH_WORD, Mnemonic::Push, WORD, stack::push).with_stack(),
    e(op::PUSHB_R8, Mnemonic::Pushb, R8, stack::pushb),
    e(op::PUSHB_REGADDR, Mnemonic::Pushb, REGADDR, stack::pushb),
    e(op::PUSHB_ADDR, Mnemonic::Pushb, ADDR, stack::pushb),
    e(op::PUSHB_BYTE, Mnemonic::Pushb, BYTE, stack::pushb),
    e(op::POP_R16, Mnemonic::Pop, R16, stack::pop).with_stack(),
    e(op::POP_REGADDR, Mnemonic::Pop, REGADDR, stack::pop).with_stack(),
    e(op::POP_ADDR, Mnemonic::Pop, ADDR, stack::pop).with_stack(),
    e(op::POPB_R8, Mnemonic::Popb, R8, stack::popb),
    e(op::POPB_REGADDR, Mnemonic::Popb, REGADDR, stack::popb),
    e(op::POPB_ADDR, Mnemonic::Popb, ADDR, stack::popb),
    e(op::CALL_ADDR, Mnemonic::Call, ADDR, control::call),
    e(op::CALL_R16, Mnemonic::Call, R16, control::call),
    e(op::RET, Mnemonic::Ret, NONE, control::ret),
    e(op::CLI, Mnemonic::Cli, NONE, system::cli),
    e(op::STI, Mnemonic::Sti, NONE, system::sti),
    e(op::IRET, Mnemonic::Iret, NONE, system::iret),
    e(op::SYSCALL, Mnemonic::Syscall, NONE, system::syscall),
    e(op::SYSRET, Mnemonic::Sysret, NONE, system::sysret),
];

static LOOKUP: LazyLock<[Option<&'static InstructionInfo>; 256]> = LazyLock::new(|| {
    let mut table = [None; 256];
    for info in INSTRUCTIONS {
        table[usize::from(info.opcode)] = Some(info);
    }
    table
});

/// Looks up the metadata for `opcode`.
///
/// # Returns
///
/// `None` if the byte is not a defined opcode.
pub fn lookup(opcode: u8) -> Option<&'static InstructionInfo> {
    LOOKUP[usize::from(opcode)]
}
