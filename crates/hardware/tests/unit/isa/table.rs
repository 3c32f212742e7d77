//! Opcode Table Consistency Tests.

use std::collections::HashSet;

use sim16_core::isa::instruction::{Mnemonic, OperandType};
use sim16_core::isa::opcodes as op;
use sim16_core::isa::table::{INSTRUCTIONS, lookup};

#[test]
fn opcodes_are_unique_and_indexed() {
    let mut seen = HashSet::new();
    for info in INSTRUCTIONS {
        assert!(seen.insert(info.opcode), "duplicate opcode {:#04x}", info.opcode);
        let found = lookup(info.opcode).unwrap();
        assert_eq!(found.mnemonic, info.mnemonic);
        assert_eq!(found.operands, info.operands);
    }
    assert_eq!(INSTRUCTIONS.len(), 139);
}

#[test]
fn opcode_space_is_dense_from_zero() {
    for opcode in 0x00..=op::SYSRET {
        assert!(lookup(opcode).is_some(), "{opcode:#04x} missing");
    }
    for opcode in op::SYSRET + 1..=0xFF {
        assert!(lookup(opcode).is_none(), "{opcode:#04x} unexpectedly defined");
    }
}

#[test]
fn stack_capable_families() {
    let stack_capable = [
        Mnemonic::Mov,
        Mnemonic::Add,
        Mnemonic::Sub,
        Mnemonic::Inc,
        Mnemonic::Dec,
        Mnemonic::Cmp,
        Mnemonic::Push,
        Mnemonic::Pop,
    ];
    for info in INSTRUCTIONS {
        assert_eq!(
            info.stack_operand,
            stack_capable.contains(&info.mnemonic),
            "{} ({:#04x})",
            info.mnemonic,
            info.opcode
        );
    }
}

#[test]
fn at_most_two_operands() {
    for info in INSTRUCTIONS {
        assert!(info.operands.len() <= 2, "{}", info.mnemonic);
    }
}

#[test]
fn encoded_lengths() {
    let len = |opcode| lookup(opcode).unwrap().len();
    assert_eq!(len(op::HLT), 1);
    assert_eq!(len(op::PUSHB_BYTE), 2);
    assert_eq!(len(op::JMP_ADDR), 3);
    assert_eq!(len(op::MOV_R16_WORD), 4);
    assert_eq!(len(op::MOV_REGADDR_WORD), 5);
    assert_eq!(len(op::MOVB_REGADDR_BYTE), 4);
}

#[test]
fn byte_families_use_byte_registers() {
    for info in INSTRUCTIONS {
        let name = info.mnemonic.name();
        let byte_form = name.ends_with('B') && name != "SUB";
        if byte_form {
            assert!(
                !info.operands.contains(&OperandType::Register16),
                "{name} ({:#04x}) takes a 16-bit register",
                info.opcode
            );
            assert!(!info.operands.contains(&OperandType::Word), "{name}");
        }
    }
}
