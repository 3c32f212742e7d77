//! Flat system memory.
//!
//! A single 64 KiB array covering the whole address space. This is the store
//! the CLI host and the test harness execute against.

use std::fmt;

use crate::common::constants::ADDRESS_SPACE;
use crate::soc::traits::Memory;

/// 64 KiB byte-addressable RAM with no holes and no side effects.
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Vec<u8>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    /// Creates zero-filled memory spanning the full address space.
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE],
        }
    }

    /// Creates memory holding `image` at address 0, zero-filled beyond it.
    ///
    /// Bytes past the end of the address space are dropped.
    pub fn with_image(image: &[u8]) -> Self {
        let mut mem = Self::new();
        let len = image.len().min(ADDRESS_SPACE);
        mem.data[..len].copy_from_slice(&image[..len]);
        mem
    }

    /// Borrows the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Memory for FlatMemory {
    fn load_byte(&mut self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    fn store_byte(&mut self, addr: u16, value: u8) {
        self.data[usize::from(addr)] = value;
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.data.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .field("high_water", &used)
            .finish()
    }
}
