use crate::common::mocks::observer::RecordingObserver;
use sim16_core::common::error::Result;
use sim16_core::config::Config;
use sim16_core::core::Cpu;
use sim16_core::core::arch::reg::RegisterId;
use sim16_core::core::observer::RegisterEvent;
use sim16_core::sim::loader;
use sim16_core::soc::{FlatMemory, Memory};
use std::sync::{Arc, Mutex};

/// Owns a CPU over flat memory and exposes the operations tests need.
pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("sim16=trace")
            .try_init();

        Self {
            cpu: Cpu::new(Box::new(FlatMemory::new()), config),
        }
    }

    /// Loads `image` at `addr`, points `IP` at it and clears the halt latch.
    pub fn load_program(mut self, addr: u16, image: &[u8]) -> Self {
        loader::load_image(&mut *self.cpu.memory, addr, image).unwrap();
        self.cpu.regs.set_ip(addr);
        self.cpu.resume();
        self
    }

    /// Attaches a recording observer and returns its shared event log.
    pub fn record_events(&mut self) -> Arc<Mutex<Vec<RegisterEvent>>> {
        let observer = RecordingObserver::default();
        let events = observer.events();
        let _ = self.cpu.regs.set_observer(Some(Box::new(observer)));
        events
    }

    pub fn set_reg(&mut self, reg: RegisterId, value: u16) {
        self.cpu.regs.write(reg, value);
    }

    pub fn get_reg(&self, reg: RegisterId) -> u16 {
        self.cpu.regs.read(reg)
    }

    pub fn step(&mut self) -> Result<()> {
        self.cpu.step()
    }

    /// Steps `n` times, panicking on the first error.
    pub fn run(&mut self, n: usize) {
        for i in 0..n {
            if let Err(e) = self.cpu.step() {
                panic!("step {i} failed: {e}");
            }
        }
    }

    /// Steps until halted, with a safety bound.
    pub fn run_to_halt(&mut self, limit: usize) -> usize {
        for i in 0..limit {
            if self.cpu.is_halted() {
                return i;
            }
            self.cpu.step().unwrap();
        }
        panic!("CPU did not halt within {limit} steps");
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.cpu.memory.load_byte(addr)
    }

    pub fn read_word(&mut self, addr: u16) -> u16 {
        self.cpu.memory.load_word(addr)
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.cpu.memory.store_word(addr, value);
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.cpu.memory.store_byte(addr, value);
    }
}
