//! Memory collaborator contract.
//!
//! The execution core never owns storage itself; every fetch, operand read,
//! stack access and store goes through a [`Memory`] implementation. It provides:
//! 1. **Access:** Byte and word loads and stores at unsigned 16-bit addresses.
//! 2. **Ordering:** Calls are synchronous and issued strictly in program order.
//!
//! Words are little-endian: the byte at `addr` is the low half and the byte at
//! `addr + 1` (wrapping) is the high half. Implementors decide what happens
//! outside their backing storage.
//!
//! All implementors must be `Send` so a CPU can be shared behind a mutex.

/// Byte/word-addressable store the CPU executes against.
pub trait Memory: Send {
    /// Loads one byte.
    fn load_byte(&mut self, addr: u16) -> u8;

    /// Loads the little-endian word at `addr`, `addr + 1`.
    fn load_word(&mut self, addr: u16) -> u16 {
        let lo = self.load_byte(addr);
        let hi = self.load_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Stores one byte.
    fn store_byte(&mut self, addr: u16, value: u8);

    /// Stores `value` little-endian at `addr`, `addr + 1`.
    fn store_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.store_byte(addr, lo);
        self.store_byte(addr.wrapping_add(1), hi);
    }

    /// Writes a contiguous byte slice starting at `addr` (default: byte-by-byte, wrapping).
    fn store_bytes(&mut self, addr: u16, data: &[u8]) {
        let mut cursor = addr;
        for byte in data {
            self.store_byte(cursor, *byte);
            cursor = cursor.wrapping_add(1);
        }
    }
}
