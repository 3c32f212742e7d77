//! 16-bit teaching CPU emulator library.
//!
//! This crate implements the execution core of a small 16-bit CPU with the following:
//! 1. **Core:** Register bank with aliased 8-bit halves, status flags, and the fetch/decode/dispatch loop.
//! 2. **ALU:** Width-folding arithmetic with carry and zero flags.
//! 3. **ISA:** Opcode table, operand decoder, instruction handlers and disassembler.
//! 4. **Interrupts:** Maskable hardware interrupt, syscall trap, and the terminal fault latch.
//! 5. **Simulation:** Flat memory, image loader, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use sim16_core::{Config, Simulator};
//! use sim16_core::sim::RunOutcome;
//! use sim16_core::soc::FlatMemory;
//!
//! // MOV A, 0x0002 ; ADD A, 0x0003 ; HLT
//! let image = [0x06, 0x00, 0x02, 0x00, 0x14, 0x00, 0x03, 0x00, 0x00];
//! let mut sim = Simulator::new(FlatMemory::with_image(&image), &Config::default());
//! sim.cpu.resume();
//!
//! assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 3 });
//! assert_eq!(sim.cpu.regs.read(sim16_core::core::arch::reg::RegisterId::A), 5);
//! ```

/// Common types and constants (errors, vectors, widths).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (register file, execution, stack, traps, ALU).
pub mod core;
/// Instruction set (opcodes, table, decode, handlers, disassembler).
pub mod isa;
/// Host layer: simulator, shared handle and image loader.
pub mod sim;
/// Memory interface and the flat 64 KiB implementation.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
