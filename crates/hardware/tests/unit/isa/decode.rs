//! Operand Decoder Tests.
//!
//! Checks slot encodings, register-class validation at decode time, cursor
//! wraparound, and that memory is read strictly in slot order.

// mockall expectation builders return `&mut Expectation`.
#![allow(unused_results)]

use mockall::Sequence;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use sim16_core::common::error::{CpuError, OperandPosition};
use sim16_core::core::arch::reg::{RegisterClass, RegisterId};
use sim16_core::isa::decode::decode;
use sim16_core::isa::instruction::{Mnemonic, Operand};
use sim16_core::isa::opcodes as op;
use sim16_core::soc::{FlatMemory, Memory};

use crate::common::builder::program::Program;
use crate::common::mocks::memory::MockBus;

fn memory_with(addr: u16, bytes: &[u8]) -> FlatMemory {
    let mut mem = FlatMemory::new();
    mem.store_bytes(addr, bytes);
    mem
}

#[test]
fn register_and_register_relative() {
    let image = Program::new()
        .op(op::MOV_R16_REGADDR)
        .reg(RegisterId::A)
        .regaddr(RegisterId::SP, -2)
        .build();
    let mut mem = memory_with(0x0020, &image);

    let instr = decode(&mut mem, 0x0020).unwrap();

    assert_eq!(instr.mnemonic(), Mnemonic::Mov);
    assert_eq!(
        instr.operands,
        [
            Some(Operand::Register(RegisterId::A)),
            Some(Operand::RegAddress {
                base: RegisterId::SP,
                offset: -2
            }),
        ]
    );
    assert_eq!(instr.next_ip, 0x0024);
    assert_eq!(instr.len(), 4);
}

#[test]
fn literals_are_little_endian() {
    let image = Program::new().op(op::MOV_ADDR_WORD).word(0x1234).word(0xBEEF).build();
    assert_eq!(image[1..], [0x34, 0x12, 0xEF, 0xBE]);
    let mut mem = memory_with(0, &image);

    let instr = decode(&mut mem, 0).unwrap();

    assert_eq!(
        instr.operands,
        [Some(Operand::Address(0x1234)), Some(Operand::Word(0xBEEF))]
    );
}

#[test]
fn zero_operand_form() {
    let mut mem = memory_with(0x0010, &[op::RET]);
    let instr = decode(&mut mem, 0x0010).unwrap();
    assert_eq!(instr.operands, [None, None]);
    assert_eq!(instr.next_ip, 0x0011);
}

#[test]
fn cursor_wraps_past_end_of_memory() {
    let image = Program::new().op(op::MOV_R16_WORD).reg(RegisterId::B).word(0x4321).build();
    let mut mem = FlatMemory::new();
    mem.store_bytes(0xFFFE, &image);

    let instr = decode(&mut mem, 0xFFFE).unwrap();

    assert_eq!(instr.operands[1], Some(Operand::Word(0x4321)));
    assert_eq!(instr.next_ip, 0x0002);
}

#[test]
fn undefined_opcode() {
    let mut mem = memory_with(0x0010, &[0x8B]);
    assert_eq!(
        decode(&mut mem, 0x0010).unwrap_err(),
        CpuError::InvalidOpcode {
            opcode: 0x8B,
            address: 0x0010
        }
    );
}

#[test]
fn word_register_in_byte_slot() {
    let image = Program::new().op(op::INCB_R8).reg(RegisterId::A).build();
    let mut mem = memory_with(0, &image);
    assert_eq!(
        decode(&mut mem, 0).unwrap_err(),
        CpuError::InvalidOperand {
            position: OperandPosition::First,
            expected: RegisterClass::Byte,
            found: 0x00,
        }
    );
}

#[test]
fn instruction_pointer_is_never_a_base() {
    let image = Program::new()
        .op(op::MOV_R16_REGADDR)
        .reg(RegisterId::A)
        .regaddr(RegisterId::IP, 0)
        .build();
    let mut mem = memory_with(0, &image);
    assert_eq!(
        decode(&mut mem, 0).unwrap_err(),
        CpuError::InvalidOperand {
            position: OperandPosition::Second,
            expected: RegisterClass::GeneralOrStack,
            found: RegisterId::IP.code(),
        }
    );
}

#[test]
fn unknown_register_code() {
    let image = Program::new().op(op::PUSH_R16).raw(0x20).build();
    let mut mem = memory_with(0, &image);
    assert!(matches!(
        decode(&mut mem, 0),
        Err(CpuError::InvalidOperand { found: 0x20, .. })
    ));
}

#[test]
fn slots_are_read_in_order() {
    let mut bus = MockBus::new();
    let mut seq = Sequence::new();
    let script: [(u16, u8); 4] = [
        (0x0010, op::MOV_R16_REGADDR),
        (0x0011, RegisterId::C.code()),
        (0x0012, RegisterId::SP.code()),
        (0x0013, 0x04),
    ];
    for (addr, value) in script {
        bus.expect_load_byte()
            .with(eq(addr))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(value);
    }
    bus.expect_store_byte().never();

    let instr = decode(&mut bus, 0x0010).unwrap();

    assert_eq!(
        instr.operands,
        [
            Some(Operand::Register(RegisterId::C)),
            Some(Operand::RegAddress {
                base: RegisterId::SP,
                offset: 4
            }),
        ]
    );
}

#[test]
fn decode_stops_at_first_bad_slot() {
    let mut bus = MockBus::new();
    let mut seq = Sequence::new();
    bus.expect_load_byte()
        .with(eq(0))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(op::MOVB_R8_R8);
    bus.expect_load_byte()
        .with(eq(1))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(RegisterId::SP.code());

    assert!(decode(&mut bus, 0).is_err());
}
