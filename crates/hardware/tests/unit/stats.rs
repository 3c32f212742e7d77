//! CpuStats unit tests.
//!
//! Verifies default initialization, the counters maintained while
//! stepping, and the JSON report.

use sim16_core::core::arch::reg::RegisterId;
use sim16_core::isa::opcodes as op;
use sim16_core::stats::CpuStats;

use crate::common::builder::program::Program;
use crate::common::harness::TestContext;

#[test]
fn default_stats_all_zero() {
    let stats = CpuStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.halted_steps, 0);
    assert_eq!(stats.interrupts_taken, 0);
    assert_eq!(stats.syscalls, 0);
    assert_eq!(stats.faults, 0);
}

#[test]
fn counters_track_execution() {
    let image = Program::new()
        .op(op::INC_R16)
        .reg(RegisterId::A)
        .op(op::SYSCALL)
        .build();
    let mut ctx = TestContext::new().load_program(0x0100, &image);
    ctx.write_byte(0x0006, op::HLT);

    let _ = ctx.run_to_halt(10);
    ctx.step().unwrap();
    ctx.cpu.raise_interrupt().unwrap();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.syscalls, 1);
    assert_eq!(stats.halted_steps, 1);
    assert_eq!(stats.interrupts_taken, 1);
    assert_eq!(stats.faults, 0);
}

#[test]
fn json_report_names_every_counter() {
    let stats = CpuStats {
        instructions_retired: 12,
        faults: 1,
        ..CpuStats::default()
    };
    let json: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();
    assert_eq!(json["instructions_retired"], 12);
    assert_eq!(json["halted_steps"], 0);
    assert_eq!(json["interrupts_taken"], 0);
    assert_eq!(json["syscalls"], 0);
    assert_eq!(json["faults"], 1);
}
