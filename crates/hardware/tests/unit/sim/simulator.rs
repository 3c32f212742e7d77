//! Simulator Run Loop Tests.

use pretty_assertions::assert_eq;
use sim16_core::common::error::CpuError;
use sim16_core::config::Config;
use sim16_core::core::arch::reg::RegisterId;
use sim16_core::isa::opcodes as op;
use sim16_core::sim::{RunOutcome, Simulator};
use sim16_core::soc::FlatMemory;

use crate::common::builder::program::Program;

fn simulator(image: &[u8], max_steps: u64) -> Simulator {
    let mut config = Config::default();
    config.run.max_steps = max_steps;
    let mut sim = Simulator::new(FlatMemory::with_image(image), &config);
    sim.cpu.resume();
    sim
}

#[test]
fn runs_until_halt() {
    let image = Program::new()
        .op(op::MOV_R16_WORD)
        .reg(RegisterId::A)
        .word(6)
        .op(op::MUL_WORD)
        .word(7)
        .op(op::HLT)
        .build();
    let mut sim = simulator(&image, 100);

    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 3 });
    assert_eq!(sim.cpu.regs.read(RegisterId::A), 42);
}

#[test]
fn stops_at_step_budget() {
    let image = Program::new().op(op::JMP_ADDR).word(0).build();
    let mut sim = simulator(&image, 50);

    assert_eq!(sim.run().unwrap(), RunOutcome::StepLimit { steps: 50 });
    assert!(!sim.cpu.is_halted());
    assert_eq!(sim.cpu.stats.instructions_retired, 50);
}

#[test]
fn reset_cpu_does_not_run() {
    let image = [op::HLT];
    let mut sim = Simulator::new(FlatMemory::with_image(&image), &Config::default());

    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 0 });
}

#[test]
fn fault_ends_the_run() {
    let image = Program::new().op(op::SYSRET).build();
    let mut sim = simulator(&image, 10);

    assert_eq!(sim.run(), Err(CpuError::SysretOutsideSupervisor));
    assert_eq!(sim.tick(), Err(CpuError::Faulted));
    assert_eq!(sim.cpu.stats.faults, 1);
}

#[test]
fn halt_on_last_budgeted_step_reports_halted() {
    let image = Program::new().op(op::INC_R16).reg(RegisterId::B).op(op::HLT).build();
    let mut sim = simulator(&image, 2);

    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 2 });
}
