//! Interrupt and Privilege Controller Tests.
//!
//! Trap entry pushes `SR` then `IP`; returns pop `IP` then `SR`. The IRQ
//! vector is `0x0003` and the syscall vector `0x0006`.

use pretty_assertions::assert_eq;
use sim16_core::common::error::CpuError;
use sim16_core::common::{IRQ_VECTOR, SYSCALL_VECTOR};
use sim16_core::core::arch::mode::PrivilegeMode;
use sim16_core::core::arch::status::{SR_CARRY, SR_FAULT, SR_IRQ_MASK, SR_SUPERVISOR};
use sim16_core::core::cpu::CpuState;
use sim16_core::isa::opcodes as op;

use crate::common::harness::TestContext;

const ENTRY: u16 = 0x0100;

/// A running CPU at `ENTRY` with `program` loaded there.
fn running(program: &[u8]) -> TestContext {
    TestContext::new().load_program(ENTRY, program)
}

// ══════════════════════════════════════════════════════════
// 1. Hardware interrupts
// ══════════════════════════════════════════════════════════

#[test]
fn unmasked_interrupt_enters_immediately() {
    let mut ctx = running(&[op::HLT]);
    ctx.cpu.regs.update_status(|sr| sr.set_carry(true));

    ctx.cpu.raise_interrupt().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), IRQ_VECTOR);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFB);
    assert_eq!(ctx.read_word(0xFFFE), SR_CARRY, "SR pushed first");
    assert_eq!(ctx.read_word(0xFFFC), ENTRY, "IP pushed second");

    let sr = ctx.cpu.regs.status();
    assert!(sr.irq_mask());
    assert!(sr.supervisor());
    assert!(sr.carry());
    assert_eq!(ctx.cpu.privilege(), PrivilegeMode::Supervisor);
    assert_eq!(ctx.cpu.stats.interrupts_taken, 1);
}

#[test]
fn masked_interrupt_is_deferred_until_cli() {
    let mut ctx = running(&[op::CLI]);
    ctx.cpu.regs.update_status(|sr| sr.set_irq_mask(true));

    ctx.cpu.raise_interrupt().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), ENTRY);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFF);
    assert!(ctx.cpu.irq_pending());

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), IRQ_VECTOR);
    assert_eq!(ctx.read_word(0xFFFE), 0, "SR pushed with the mask already clear");
    assert_eq!(ctx.read_word(0xFFFC), ENTRY + 1, "returns past the CLI");
    assert!(ctx.cpu.regs.status().irq_mask());
    assert!(ctx.cpu.regs.status().supervisor());
}

#[test]
fn cli_without_pending_request_falls_through() {
    let mut ctx = running(&[op::CLI]);
    ctx.cpu.regs.update_status(|sr| sr.set_irq_mask(true));

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), ENTRY + 1);
    assert!(!ctx.cpu.regs.status().irq_mask());
    assert_eq!(ctx.cpu.stats.interrupts_taken, 0);
}

#[test]
fn lowered_request_is_not_delivered() {
    let mut ctx = running(&[op::CLI]);
    ctx.cpu.regs.update_status(|sr| sr.set_irq_mask(true));

    ctx.cpu.raise_interrupt().unwrap();
    ctx.cpu.lower_interrupt();
    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), ENTRY + 1);
    assert_eq!(ctx.cpu.stats.interrupts_taken, 0);
}

#[test]
fn sti_masks_without_checking_pending() {
    let mut ctx = running(&[op::STI]);

    ctx.step().unwrap();

    assert!(ctx.cpu.regs.status().irq_mask());
    assert_eq!(ctx.cpu.regs.ip(), ENTRY + 1);

    ctx.cpu.raise_interrupt().unwrap();
    assert_eq!(ctx.cpu.regs.ip(), ENTRY + 1);
}

#[test]
fn iret_restores_ip_and_status() {
    let mut ctx = running(&[op::HLT]);
    ctx.write_byte(IRQ_VECTOR, op::IRET);
    ctx.cpu.regs.update_status(|sr| sr.set_zero(true));

    ctx.cpu.raise_interrupt().unwrap();
    ctx.cpu.lower_interrupt();
    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), ENTRY);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFF);
    let sr = ctx.cpu.regs.status();
    assert!(sr.zero());
    assert!(!sr.supervisor());
    assert!(!sr.irq_mask());
}

#[test]
fn iret_ignores_fault_bit_in_stacked_status() {
    let mut ctx = running(&[op::IRET]);
    ctx.cpu.regs.update_status(|sr| sr.set_supervisor(true));
    ctx.cpu.push_word(SR_FAULT | SR_CARRY);
    ctx.cpu.push_word(0x0200);

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), 0x0200);
    assert_eq!(ctx.cpu.state(), CpuState::Running);
    assert!(ctx.cpu.regs.status().carry());
    assert_eq!(ctx.cpu.stats.faults, 0);

    // 0x0200 holds zero, which is HLT.
    ctx.step().unwrap();
    assert_eq!(ctx.cpu.state(), CpuState::Halted);
}

#[test]
fn iret_redelivers_a_request_still_pending() {
    let mut ctx = running(&[op::HLT]);
    ctx.write_byte(IRQ_VECTOR, op::IRET);

    ctx.cpu.raise_interrupt().unwrap();
    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), IRQ_VECTOR);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFB);
    assert_eq!(ctx.read_word(0xFFFC), ENTRY);
    assert_eq!(ctx.cpu.stats.interrupts_taken, 2);
}

#[test]
fn raise_while_faulted_is_an_error() {
    let mut ctx = running(&[0xFF]);
    assert!(ctx.step().is_err());

    assert_eq!(ctx.cpu.raise_interrupt(), Err(CpuError::Faulted));

    assert_eq!(ctx.cpu.state(), CpuState::Faulted);
    assert_eq!(ctx.cpu.regs.ip(), ENTRY);
    assert!(!ctx.cpu.irq_pending());
}

#[test]
fn halted_cpu_takes_interrupt_but_stays_halted() {
    let mut ctx = TestContext::new();

    ctx.cpu.raise_interrupt().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), IRQ_VECTOR);
    assert_eq!(ctx.cpu.state(), CpuState::Halted);
}

// ══════════════════════════════════════════════════════════
// 2. System calls
// ══════════════════════════════════════════════════════════

#[test]
fn syscall_from_user_mode() {
    let mut ctx = running(&[op::SYSCALL]);

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), SYSCALL_VECTOR);
    assert_eq!(ctx.read_word(0xFFFE), 0);
    assert_eq!(ctx.read_word(0xFFFC), ENTRY + 1);
    let sr = ctx.cpu.regs.status();
    assert!(sr.supervisor());
    assert!(!sr.irq_mask(), "syscall entry leaves the mask alone");
    assert_eq!(ctx.cpu.stats.syscalls, 1);
}

#[test]
fn syscall_in_supervisor_faults() {
    let mut ctx = running(&[op::SYSCALL]);
    ctx.cpu.regs.update_status(|sr| sr.set_supervisor(true));

    assert_eq!(ctx.step(), Err(CpuError::SyscallInSupervisor));

    assert!(ctx.cpu.is_faulted());
    assert_eq!(ctx.cpu.regs.ip(), ENTRY);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFF);
    assert_eq!(ctx.step(), Err(CpuError::Faulted));
}

#[test]
fn sysret_returns_to_user_mode() {
    let mut ctx = running(&[op::SYSCALL]);
    ctx.write_byte(SYSCALL_VECTOR, op::SYSRET);

    ctx.step().unwrap();
    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), ENTRY + 1);
    assert_eq!(ctx.cpu.regs.sp(), 0xFFFF);
    assert_eq!(ctx.cpu.privilege(), PrivilegeMode::User);
}

#[test]
fn sysret_clears_supervisor_even_if_saved_status_had_it() {
    let mut ctx = running(&[op::SYSRET]);
    ctx.cpu.regs.update_status(|sr| sr.set_supervisor(true));
    ctx.cpu.push_word(SR_SUPERVISOR | SR_IRQ_MASK);
    ctx.cpu.push_word(0x0200);

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), 0x0200);
    let sr = ctx.cpu.regs.status();
    assert!(!sr.supervisor());
    assert!(sr.irq_mask());
}

#[test]
fn sysret_ignores_fault_bit_in_stacked_status() {
    let mut ctx = running(&[op::SYSRET]);
    ctx.cpu.regs.update_status(|sr| sr.set_supervisor(true));
    ctx.cpu.push_word(SR_FAULT | SR_SUPERVISOR);
    ctx.cpu.push_word(0x0200);

    ctx.step().unwrap();

    assert_eq!(ctx.cpu.regs.ip(), 0x0200);
    assert!(!ctx.cpu.is_faulted());
    assert_eq!(ctx.cpu.privilege(), PrivilegeMode::User);
    assert_eq!(ctx.cpu.stats.faults, 0);
}

#[test]
fn sysret_outside_supervisor_faults() {
    let mut ctx = running(&[op::SYSRET]);

    assert_eq!(ctx.step(), Err(CpuError::SysretOutsideSupervisor));

    assert!(ctx.cpu.is_faulted());
    assert_eq!(ctx.cpu.regs.ip(), ENTRY);
}
