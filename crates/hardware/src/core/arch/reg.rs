//! Register identities.
//!
//! This module names every architectural register and classifies them. It provides:
//! 1. **Identity:** [`RegisterId`] with its one-byte encoding used in the instruction stream.
//! 2. **Width:** [`Width`], the 8-bit or 16-bit view a register or operation works on.
//! 3. **Classes:** [`RegisterClass`], the sets of registers an operand slot may name.

use std::fmt;

use crate::common::constants::{BYTE_MODULUS, WORD_MODULUS};

/// Operand width of a register view or an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit operand.
    Byte,
    /// 16-bit operand.
    Word,
}

impl Width {
    /// Number of distinct values at this width (256 or 65536).
    pub const fn modulus(self) -> i64 {
        match self {
            Self::Byte => BYTE_MODULUS,
            Self::Word => WORD_MODULUS,
        }
    }

    /// Largest value representable at this width.
    pub const fn mask(self) -> u16 {
        match self {
            Self::Byte => 0x00FF,
            Self::Word => 0xFFFF,
        }
    }

    /// Truncates `value` to this width.
    pub const fn truncate(self, value: u16) -> u16 {
        value & self.mask()
    }
}

/// Architectural register identity.
///
/// The discriminant is the byte that encodes the register in a
/// `REGISTER_8`, `REGISTER_16` or `REGADDRESS` operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RegisterId {
    /// General-purpose register A.
    A = 0x00,
    /// High byte of A.
    AH = 0x01,
    /// Low byte of A.
    AL = 0x02,
    /// General-purpose register B.
    B = 0x03,
    /// High byte of B.
    BH = 0x04,
    /// Low byte of B.
    BL = 0x05,
    /// General-purpose register C.
    C = 0x06,
    /// High byte of C.
    CH = 0x07,
    /// Low byte of C.
    CL = 0x08,
    /// General-purpose register D.
    D = 0x09,
    /// High byte of D.
    DH = 0x0A,
    /// Low byte of D.
    DL = 0x0B,
    /// Stack pointer.
    SP = 0x0C,
    /// Instruction pointer.
    IP = 0x0D,
    /// Status register.
    SR = 0x0E,
}

impl RegisterId {
    /// Every register, in encoding order.
    pub const ALL: [Self; 15] = [
        Self::A,
        Self::AH,
        Self::AL,
        Self::B,
        Self::BH,
        Self::BL,
        Self::C,
        Self::CH,
        Self::CL,
        Self::D,
        Self::DH,
        Self::DL,
        Self::SP,
        Self::IP,
        Self::SR,
    ];

    /// Decodes a register identity byte.
    ///
    /// # Returns
    ///
    /// `None` if `code` does not name a register.
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Returns the identity byte for this register.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the width of the register view.
    pub const fn width(self) -> Width {
        if self.is_byte() { Width::Byte } else { Width::Word }
    }

    /// True for the 8-bit halves `AH`..`DL`.
    pub const fn is_byte(self) -> bool {
        matches!(
            self,
            Self::AH | Self::AL | Self::BH | Self::BL | Self::CH | Self::CL | Self::DH | Self::DL
        )
    }

    /// True for the 16-bit general-purpose registers `A`..`D`.
    pub const fn is_general(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C | Self::D)
    }

    /// Index of the general-purpose cell backing this register, if any.
    ///
    /// `A`, `AH` and `AL` share cell 0, `B`, `BH` and `BL` share cell 1, and so on.
    pub const fn gpr_index(self) -> Option<usize> {
        match self {
            Self::A | Self::AH | Self::AL => Some(0),
            Self::B | Self::BH | Self::BL => Some(1),
            Self::C | Self::CH | Self::CL => Some(2),
            Self::D | Self::DH | Self::DL => Some(3),
            Self::SP | Self::IP | Self::SR => None,
        }
    }

    /// Returns the assembler name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AH => "AH",
            Self::AL => "AL",
            Self::B => "B",
            Self::BH => "BH",
            Self::BL => "BL",
            Self::C => "C",
            Self::CH => "CH",
            Self::CL => "CL",
            Self::D => "D",
            Self::DH => "DH",
            Self::DL => "DL",
            Self::SP => "SP",
            Self::IP => "IP",
            Self::SR => "SR",
        }
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of registers an operand slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    /// 8-bit halves `AH`..`DL`.
    Byte,
    /// 16-bit general-purpose registers `A`..`D`.
    General,
    /// 16-bit general-purpose registers or `SP`.
    GeneralOrStack,
}

impl RegisterClass {
    /// Returns true if `reg` belongs to this class.
    pub const fn contains(self, reg: RegisterId) -> bool {
        match self {
            Self::Byte => reg.is_byte(),
            Self::General => reg.is_general(),
            Self::GeneralOrStack => reg.is_general() || matches!(reg, RegisterId::SP),
        }
    }

    /// Resolves a raw identity byte against this class.
    ///
    /// # Returns
    ///
    /// The register if `code` names a member of the class, otherwise `None`.
    pub const fn resolve(self, code: u8) -> Option<RegisterId> {
        match RegisterId::from_code(code) {
            Some(reg) if self.contains(reg) => Some(reg),
            _ => None,
        }
    }
}

impl fmt::Display for RegisterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Byte => "8-bit",
            Self::General => "16-bit general-purpose",
            Self::GeneralOrStack => "16-bit general-purpose or stack",
        })
    }
}
