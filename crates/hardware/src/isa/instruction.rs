//! Instruction metadata and decoded instructions.
//!
//! Provides the static description of every opcode and the structures the
//! decoder produces from the instruction stream:
//! 1. **Operand Types:** The six addressing shapes an operand slot can take.
//! 2. **Metadata:** [`InstructionInfo`], binding an opcode to its mnemonic, operand
//!    shapes and handler.
//! 3. **Decoded Form:** [`Operand`] values and the [`Instruction`] passed to handlers.

use std::fmt;

use crate::common::error::{CpuError, OperandPosition, Result};
use crate::core::Cpu;
use crate::core::arch::reg::{RegisterClass, RegisterId};

/// Instruction handler.
///
/// Returns `Ok(true)` when the control unit should advance `IP` past the
/// instruction, `Ok(false)` when the handler already set `IP` itself.
pub type Handler = fn(&mut Cpu, &Instruction) -> Result<bool>;

/// Addressing shape of one operand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandType {
    /// 8-bit literal.
    Byte,
    /// 16-bit literal.
    Word,
    /// 16-bit literal address (memory operand, or a jump target).
    Address,
    /// One byte naming an 8-bit register half.
    Register8,
    /// One byte naming a 16-bit register.
    Register16,
    /// Base register (low byte) plus signed 8-bit displacement (high byte).
    RegAddress,
}

impl OperandType {
    /// Number of instruction-stream bytes this operand consumes.
    pub const fn size(self) -> u16 {
        match self {
            Self::Byte | Self::Register8 | Self::Register16 => 1,
            Self::Word | Self::Address | Self::RegAddress => 2,
        }
    }
}

/// Assembler mnemonics.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Hlt,
    Mov,
    Movb,
    Add,
    Addb,
    Sub,
    Subb,
    Inc,
    Incb,
    Dec,
    Decb,
    Cmp,
    Cmpb,
    And,
    Andb,
    Or,
    Orb,
    Xor,
    Xorb,
    Not,
    Notb,
    Shl,
    Shlb,
    Shr,
    Shrb,
    Mul,
    Mulb,
    Div,
    Divb,
    Jmp,
    Jc,
    Jnc,
    Jz,
    Jnz,
    Ja,
    Jna,
    Push,
    Pushb,
    Pop,
    Popb,
    Call,
    Ret,
    Cli,
    Sti,
    Iret,
    Syscall,
    Sysret,
}

impl Mnemonic {
    /// Upper-case assembler spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Mov => "MOV",
            Self::Movb => "MOVB",
            Self::Add => "ADD",
            Self::Addb => "ADDB",
            Self::Sub => "SUB",
            Self::Subb => "SUBB",
            Self::Inc => "INC",
            Self::Incb => "INCB",
            Self::Dec => "DEC",
            Self::Decb => "DECB",
            Self::Cmp => "CMP",
            Self::Cmpb => "CMPB",
            Self::And => "AND",
            Self::Andb => "ANDB",
            Self::Or => "OR",
            Self::Orb => "ORB",
            Self::Xor => "XOR",
            Self::Xorb => "XORB",
            Self::Not => "NOT",
            Self::Notb => "NOTB",
            Self::Shl => "SHL",
            Self::Shlb => "SHLB",
            Self::Shr => "SHR",
            Self::Shrb => "SHRB",
            Self::Mul => "MUL",
            Self::Mulb => "MULB",
            Self::Div => "DIV",
            Self::Divb => "DIVB",
            Self::Jmp => "JMP",
            Self::Jc => "JC",
            Self::Jnc => "JNC",
            Self::Jz => "JZ",
            Self::Jnz => "JNZ",
            Self::Ja => "JA",
            Self::Jna => "JNA",
            Self::Push => "PUSH",
            Self::Pushb => "PUSHB",
            Self::Pop => "POP",
            Self::Popb => "POPB",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cli => "CLI",
            Self::Sti => "STI",
            Self::Iret => "IRET",
            Self::Syscall => "SYSCALL",
            Self::Sysret => "SYSRET",
        }
    }

    /// True for instructions whose operand is a transfer target rather than data.
    pub const fn is_control_transfer(self) -> bool {
        matches!(
            self,
            Self::Jmp
                | Self::Jc
                | Self::Jnc
                | Self::Jz
                | Self::Jnz
                | Self::Ja
                | Self::Jna
                | Self::Call
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one opcode.
#[derive(Clone, Copy)]
pub struct InstructionInfo {
    /// Opcode byte.
    pub opcode: u8,
    /// Assembler mnemonic.
    pub mnemonic: Mnemonic,
    /// Operand shapes, in instruction-stream order (zero to two).
    pub operands: &'static [OperandType],
    /// `REGISTER_16` slots also accept `SP`.
    pub stack_operand: bool,
    /// Executor for the opcode.
    pub handler: Handler,
}

impl InstructionInfo {
    /// Describes an opcode whose `REGISTER_16` slots accept only `A`..`D`.
    pub const fn new(
        opcode: u8,
        mnemonic: Mnemonic,
        operands: &'static [OperandType],
        handler: Handler,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            operands,
            stack_operand: false,
            handler,
        }
    }

    /// Lets `REGISTER_16` slots name `SP` as well.
    pub const fn with_stack(mut self) -> Self {
        self.stack_operand = true;
        self
    }

    /// Register class a slot of type `ty` requires, if it names a register.
    pub const fn register_class(&self, ty: OperandType) -> Option<RegisterClass> {
        match ty {
            OperandType::Register8 => Some(RegisterClass::Byte),
            OperandType::Register16 if self.stack_operand => Some(RegisterClass::GeneralOrStack),
            OperandType::Register16 => Some(RegisterClass::General),
            OperandType::RegAddress => Some(RegisterClass::GeneralOrStack),
            OperandType::Byte | OperandType::Word | OperandType::Address => None,
        }
    }

    /// Encoded length in bytes, opcode included.
    pub fn len(&self) -> u16 {
        1 + self.operands.iter().map(|ty| ty.size()).sum::<u16>()
    }
}

impl fmt::Debug for InstructionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructionInfo")
            .field("opcode", &format_args!("{:#04x}", self.opcode))
            .field("mnemonic", &self.mnemonic)
            .field("operands", &self.operands)
            .field("stack_operand", &self.stack_operand)
            .finish_non_exhaustive()
    }
}

/// A decoded operand value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// 8-bit literal.
    Byte(u8),
    /// 16-bit literal.
    Word(u16),
    /// Literal address.
    Address(u16),
    /// Register, already validated against the slot's class.
    Register(RegisterId),
    /// Base register plus signed displacement.
    RegAddress {
        /// Base register (16-bit general-purpose or `SP`).
        base: RegisterId,
        /// Displacement in `-128..=127`.
        offset: i8,
    },
}

/// An instruction decoded at a specific address.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub address: u16,
    /// Metadata of the opcode.
    pub info: &'static InstructionInfo,
    /// Decoded operands; unused slots are `None`.
    pub operands: [Option<Operand>; 2],
    /// Address of the following instruction (the post-decode cursor).
    pub next_ip: u16,
}

impl Instruction {
    /// Opcode byte.
    pub const fn opcode(&self) -> u8 {
        self.info.opcode
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(&self) -> Mnemonic {
        self.info.mnemonic
    }

    /// Encoded length in bytes.
    pub const fn len(&self) -> u16 {
        self.next_ip.wrapping_sub(self.address)
    }

    /// Operand at `position`.
    pub const fn operand(&self, position: OperandPosition) -> Option<Operand> {
        match position {
            OperandPosition::First => self.operands[0],
            OperandPosition::Second => self.operands[1],
        }
    }

    /// Error for an operand shape the opcode's handler cannot execute.
    pub const fn unsupported(&self) -> CpuError {
        CpuError::InvalidOpcode {
            opcode: self.info.opcode,
            address: self.address,
        }
    }
}
