//! Stack Engine.
//!
//! The stack grows downward and `SP` always addresses the next free byte.
//! A word push stores at `SP - 1 ..= SP`; pops read from `SP + 1`. All
//! address arithmetic wraps at 16 bits.

use super::Cpu;

impl Cpu {
    /// Stores `value` at `SP`, then decrements `SP` by 1.
    pub fn push_byte(&mut self, value: u8) {
        let sp = self.regs.sp();
        self.memory.store_byte(sp, value);
        self.regs.set_sp(sp.wrapping_sub(1));
    }

    /// Stores `value` at `SP - 1` (occupying `SP - 1 ..= SP`), then decrements `SP` by 2.
    pub fn push_word(&mut self, value: u16) {
        let sp = self.regs.sp();
        self.memory.store_word(sp.wrapping_sub(1), value);
        self.regs.set_sp(sp.wrapping_sub(2));
    }

    /// Loads the byte at `SP + 1`, then increments `SP` by 1.
    pub fn pop_byte(&mut self) -> u8 {
        let sp = self.regs.sp();
        let value = self.memory.load_byte(sp.wrapping_add(1));
        self.regs.set_sp(sp.wrapping_add(1));
        value
    }

    /// Loads the word at `SP + 1`, then increments `SP` by 2.
    pub fn pop_word(&mut self) -> u16 {
        let sp = self.regs.sp();
        let value = self.memory.load_word(sp.wrapping_add(1));
        self.regs.set_sp(sp.wrapping_add(2));
        value
    }
}
