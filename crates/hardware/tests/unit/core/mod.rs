pub mod alu;
pub mod interrupts;
