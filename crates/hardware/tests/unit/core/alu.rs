//! ALU and Flag Normalizer Unit Tests.
//!
//! Property tests pin the normalizer contract for both widths; table tests
//! cover each operation's raw result and the flags it produces.

use proptest::prelude::*;
use rstest::rstest;
use sim16_core::common::error::CpuError;
use sim16_core::core::arch::reg::Width;
use sim16_core::core::units::alu::flags::{normalize8, normalize16};
use sim16_core::core::units::alu::{Alu, AluOp};

proptest! {
    #[test]
    fn normalize16_contract(raw in -0x3_0000i64..0x3_0000) {
        let n = normalize16(raw);
        prop_assert_eq!(n.carry, !(0..0x1_0000).contains(&raw));
        prop_assert_eq!(n.zero, raw == 0);
        prop_assert!(!(n.carry && n.zero));
        prop_assert_eq!(i64::from(n.value), raw.rem_euclid(0x1_0000));
    }

    #[test]
    fn normalize8_contract(raw in -0x300i64..0x300) {
        let n = normalize8(raw);
        prop_assert!(n.value <= 0xFF);
        prop_assert_eq!(n.carry, !(0..0x100).contains(&raw));
        prop_assert_eq!(n.zero, raw == 0);
        prop_assert!(!(n.carry && n.zero));
        prop_assert_eq!(i64::from(n.value), raw.rem_euclid(0x100));
    }
}

#[test]
fn wrap_to_zero_reports_carry_only() {
    let n = normalize16(0x1_0000);
    assert_eq!(n.value, 0);
    assert!(n.carry);
    assert!(!n.zero);

    let n = normalize8(-0x100);
    assert_eq!(n.value, 0);
    assert!(n.carry);
    assert!(!n.zero);
}

#[rstest]
#[case::add_overflow(AluOp::Add, 0xFFFF, 1, Width::Word, 0x0000, true, false)]
#[case::add_plain(AluOp::Add, 0x1000, 0x0234, Width::Word, 0x1234, false, false)]
#[case::sub_borrow(AluOp::Sub, 5, 6, Width::Word, 0xFFFF, true, false)]
#[case::sub_equal(AluOp::Sub, 5, 5, Width::Word, 0, false, true)]
#[case::sub_byte_borrow(AluOp::Sub, 0, 1, Width::Byte, 0xFF, true, false)]
#[case::mul_overflow(AluOp::Mul, 0x100, 0x100, Width::Word, 0, true, false)]
#[case::mul_byte(AluOp::Mul, 0x10, 0x03, Width::Byte, 0x30, false, false)]
#[case::div_floor(AluOp::Div, 7, 2, Width::Word, 3, false, false)]
#[case::div_to_zero(AluOp::Div, 1, 2, Width::Word, 0, false, true)]
#[case::and(AluOp::And, 0xF0F0, 0xFF00, Width::Word, 0xF000, false, false)]
#[case::or(AluOp::Or, 0xF0, 0x0F, Width::Byte, 0xFF, false, false)]
#[case::xor_self(AluOp::Xor, 0x5A5A, 0x5A5A, Width::Word, 0, false, true)]
#[case::not_word(AluOp::Not, 0x00FF, 0, Width::Word, 0xFF00, false, false)]
#[case::not_byte(AluOp::Not, 0xFF, 0, Width::Byte, 0, false, true)]
#[case::shl_out(AluOp::Shl, 0x8000, 1, Width::Word, 0, true, false)]
#[case::shl_byte(AluOp::Shl, 0x01, 7, Width::Byte, 0x80, false, false)]
#[case::shl_clamped(AluOp::Shl, 1, 40, Width::Word, 0, true, false)]
#[case::shr(AluOp::Shr, 0x0100, 4, Width::Word, 0x0010, false, false)]
#[case::shr_clamped(AluOp::Shr, 0xFFFF, 40, Width::Word, 0, false, true)]
fn alu_results(
    #[case] op: AluOp,
    #[case] a: u16,
    #[case] b: u16,
    #[case] width: Width,
    #[case] value: u16,
    #[case] carry: bool,
    #[case] zero: bool,
) {
    let r = Alu::execute(op, a, b, width).unwrap();
    assert_eq!(r.value, value, "{op:?} {a:#x}, {b:#x}");
    assert_eq!(r.carry, carry, "carry for {op:?} {a:#x}, {b:#x}");
    assert_eq!(r.zero, zero, "zero for {op:?} {a:#x}, {b:#x}");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        Alu::execute(AluOp::Div, 10, 0, Width::Word),
        Err(CpuError::DivisionByZero)
    );
    assert_eq!(
        Alu::execute(AluOp::Div, 10, 0, Width::Byte),
        Err(CpuError::DivisionByZero)
    );
}
