//! Register Bank.
//!
//! This module implements the architectural register bank. It performs the following:
//! 1. **Storage:** Four general-purpose cells, `SP`, `IP` and the status register.
//! 2. **Aliasing:** Routes the 8-bit identities to masked views of their 16-bit cell.
//! 3. **Observability:** Reports every mutation to an attached [`RegisterObserver`].

use std::fmt;

use crate::core::arch::gpr::GprCell;
use crate::core::arch::reg::RegisterId;
use crate::core::arch::status::StatusRegister;
use crate::core::observer::{RegisterEvent, RegisterObserver};

/// Number of general-purpose cells (`A`, `B`, `C`, `D`).
const GPR_COUNT: usize = 4;

/// Register bank addressed by [`RegisterId`].
///
/// Values written through an identity are truncated to that identity's width,
/// so every register stays within `0..=255` or `0..=65535` after any mutation.
pub struct RegisterFile {
    gpr: [GprCell; GPR_COUNT],
    sp: u16,
    ip: u16,
    sr: StatusRegister,
    observer: Option<Box<dyn RegisterObserver>>,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register bank in the reset state.
    ///
    /// General-purpose registers, `SP` and `IP` are zero; `SR` holds its
    /// reset value (halt latch set).
    pub fn new() -> Self {
        Self {
            gpr: [GprCell::default(); GPR_COUNT],
            sp: 0,
            ip: 0,
            sr: StatusRegister::default(),
            observer: None,
        }
    }

    /// Attaches an observer, returning the previous one.
    pub fn set_observer(
        &mut self,
        observer: Option<Box<dyn RegisterObserver>>,
    ) -> Option<Box<dyn RegisterObserver>> {
        std::mem::replace(&mut self.observer, observer)
    }

    /// Reads a register through its identity's view.
    pub fn read(&self, reg: RegisterId) -> u16 {
        match reg {
            RegisterId::A | RegisterId::B | RegisterId::C | RegisterId::D => {
                self.cell(reg).get()
            }
            RegisterId::AH | RegisterId::BH | RegisterId::CH | RegisterId::DH => {
                u16::from(self.cell(reg).high())
            }
            RegisterId::AL | RegisterId::BL | RegisterId::CL | RegisterId::DL => {
                u16::from(self.cell(reg).low())
            }
            RegisterId::SP => self.sp,
            RegisterId::IP => self.ip,
            RegisterId::SR => self.sr.bits(),
        }
    }

    /// Writes a register through its identity's view.
    ///
    /// `value` is truncated to the register's width. Writing an 8-bit half
    /// leaves the other half of the cell untouched.
    pub fn write(&mut self, reg: RegisterId, value: u16) {
        let old = self.read(reg);
        let new = reg.width().truncate(value);
        match reg {
            RegisterId::A | RegisterId::B | RegisterId::C | RegisterId::D => {
                self.cell_mut(reg).set(new);
            }
            RegisterId::AH | RegisterId::BH | RegisterId::CH | RegisterId::DH => {
                self.cell_mut(reg).set_high(new as u8);
            }
            RegisterId::AL | RegisterId::BL | RegisterId::CL | RegisterId::DL => {
                self.cell_mut(reg).set_low(new as u8);
            }
            RegisterId::SP => self.sp = new,
            RegisterId::IP => self.ip = new,
            RegisterId::SR => self.sr.set_bits(new),
        }
        self.notify(reg, old, new);
    }

    /// Instruction pointer.
    pub const fn ip(&self) -> u16 {
        self.ip
    }

    /// Sets the instruction pointer.
    pub fn set_ip(&mut self, value: u16) {
        self.write(RegisterId::IP, value);
    }

    /// Stack pointer.
    pub const fn sp(&self) -> u16 {
        self.sp
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.write(RegisterId::SP, value);
    }

    /// Snapshot of the status register.
    pub const fn status(&self) -> StatusRegister {
        self.sr
    }

    /// Applies `f` to the status register as one mutation.
    ///
    /// Observers see a single `SR` event carrying the word before and after `f`.
    pub fn update_status(&mut self, f: impl FnOnce(&mut StatusRegister)) {
        let old = self.sr.bits();
        f(&mut self.sr);
        let new = self.sr.bits();
        self.notify(RegisterId::SR, old, new);
    }

    fn cell(&self, reg: RegisterId) -> GprCell {
        reg.gpr_index().map_or_else(GprCell::default, |idx| self.gpr[idx])
    }

    fn cell_mut(&mut self, reg: RegisterId) -> &mut GprCell {
        let idx = reg.gpr_index().unwrap_or_default();
        &mut self.gpr[idx]
    }

    fn notify(&mut self, register: RegisterId, old: u16, new: u16) {
        if let Some(observer) = self.observer.as_mut() {
            observer.register_written(RegisterEvent { register, old, new });
        }
    }
}

impl fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterFile")
            .field("gpr", &self.gpr)
            .field("sp", &self.sp)
            .field("ip", &self.ip)
            .field("sr", &self.sr)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "A={:#06x} B={:#06x} C={:#06x} D={:#06x}",
            self.gpr[0].get(),
            self.gpr[1].get(),
            self.gpr[2].get(),
            self.gpr[3].get()
        )?;
        write!(
            f,
            "SP={:#06x} IP={:#06x} SR={:#06x} [{}]",
            self.sp,
            self.ip,
            self.sr.bits(),
            self.sr
        )
    }
}
