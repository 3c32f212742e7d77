//! SIM16 Opcodes.
//!
//! One byte per instruction form. Families with several operand shapes occupy
//! consecutive opcodes; suffixes name the shape (`R16`/`R8` register,
//! `ADDR` memory at a literal address, `REGADDR` memory at register plus
//! displacement, `WORD`/`BYTE` immediate).

/// `HLT`: stop the CPU.
pub const HLT: u8 = 0x00;

/// `MOV reg16, reg16`.
pub const MOV_R16_R16: u8 = 0x01;

/// `MOV reg16, [address]`.
pub const MOV_R16_ADDR: u8 = 0x02;

/// `MOV reg16, [reg + offset]`.
pub const MOV_R16_REGADDR: u8 = 0x03;

/// `MOV [address], reg16`.
pub const MOV_ADDR_R16: u8 = 0x04;

/// `MOV [reg + offset], reg16`.
pub const MOV_REGADDR_R16: u8 = 0x05;

/// `MOV reg16, word`.
pub const MOV_R16_WORD: u8 = 0x06;

/// `MOV [address], word`.
pub const MOV_ADDR_WORD: u8 = 0x07;

/// `MOV [reg + offset], word`.
pub const MOV_REGADDR_WORD: u8 = 0x08;

/// `MOVB reg8, reg8`.
pub const MOVB_R8_R8: u8 = 0x09;

/// `MOVB reg8, [address]`.
pub const MOVB_R8_ADDR: u8 = 0x0A;

/// `MOVB reg8, [reg + offset]`.
pub const MOVB_R8_REGADDR: u8 = 0x0B;

/// `MOVB [address], reg8`.
pub const MOVB_ADDR_R8: u8 = 0x0C;

/// `MOVB [reg + offset], reg8`.
pub const MOVB_REGADDR_R8: u8 = 0x0D;

/// `MOVB reg8, byte`.
pub const MOVB_R8_BYTE: u8 = 0x0E;

/// `MOVB [address], byte`.
pub const MOVB_ADDR_BYTE: u8 = 0x0F;

/// `MOVB [reg + offset], byte`.
pub const MOVB_REGADDR_BYTE: u8 = 0x10;

/// `ADD reg16, reg16`.
pub const ADD_R16_R16: u8 = 0x11;

/// `ADD reg16, [reg + offset]`.
pub const ADD_R16_REGADDR: u8 = 0x12;

/// `ADD reg16, [address]`.
pub const ADD_R16_ADDR: u8 = 0x13;

/// `ADD reg16, word`.
pub const ADD_R16_WORD: u8 = 0x14;

/// `ADDB reg8, reg8`.
pub const ADDB_R8_R8: u8 = 0x15;

/// `ADDB reg8, [reg + offset]`.
pub const ADDB_R8_REGADDR: u8 = 0x16;

/// `ADDB reg8, [address]`.
pub const ADDB_R8_ADDR: u8 = 0x17;

/// `ADDB reg8, byte`.
pub const ADDB_R8_BYTE: u8 = 0x18;

/// `SUB reg16, reg16`.
pub const SUB_R16_R16: u8 = 0x19;

/// `SUB reg16, [reg + offset]`.
pub const SUB_R16_REGADDR: u8 = 0x1A;

/// `SUB reg16, [address]`.
pub const SUB_R16_ADDR: u8 = 0x1B;

/// `SUB reg16, word`.
pub const SUB_R16_WORD: u8 = 0x1C;

/// `SUBB reg8, reg8`.
pub const SUBB_R8_R8: u8 = 0x1D;

/// `SUBB reg8, [reg + offset]`.
pub const SUBB_R8_REGADDR: u8 = 0x1E;

/// `SUBB reg8, [address]`.
pub const SUBB_R8_ADDR: u8 = 0x1F;

/// `SUBB reg8, byte`.
pub const SUBB_R8_BYTE: u8 = 0x20;

/// `INC reg16`.
pub const INC_R16: u8 = 0x21;

/// `INCB reg8`.
pub const INCB_R8: u8 = 0x22;

/// `DEC reg16`.
pub const DEC_R16: u8 = 0x23;

/// `DECB reg8`.
pub const DECB_R8: u8 = 0x24;

/// `CMP reg16, reg16`.
pub const CMP_R16_R16: u8 = 0x25;

/// `CMP reg16, [reg + offset]`.
pub const CMP_R16_REGADDR: u8 = 0x26;

/// `CMP reg16, [address]`.
pub const CMP_R16_ADDR: u8 = 0x27;

/// `CMP reg16, word`.
pub const CMP_R16_WORD: u8 = 0x28;

/// `CMPB reg8, reg8`.
pub const CMPB_R8_R8: u8 = 0x29;

/// `CMPB reg8, [reg + offset]`.
pub const CMPB_R8_REGADDR: u8 = 0x2A;

/// `CMPB reg8, [address]`.
pub const CMPB_R8_ADDR: u8 = 0x2B;

/// `CMPB reg8, byte`.
pub const CMPB_R8_BYTE: u8 = 0x2C;

/// `AND reg16, reg16`.
pub const AND_R16_R16: u8 = 0x2D;

/// `AND reg16, [reg + offset]`.
pub const AND_R16_REGADDR: u8 = 0x2E;

/// `AND reg16, [address]`.
pub const AND_R16_ADDR: u8 = 0x2F;

/// `AND reg16, word`.
pub const AND_R16_WORD: u8 = 0x30;

/// `ANDB reg8, reg8`.
pub const ANDB_R8_R8: u8 = 0x31;

/// `ANDB reg8, [reg + offset]`.
pub const ANDB_R8_REGADDR: u8 = 0x32;

/// `ANDB reg8, [address]`.
pub const ANDB_R8_ADDR: u8 = 0x33;

/// `ANDB reg8, byte`.
pub const ANDB_R8_BYTE: u8 = 0x34;

/// `OR reg16, reg16`.
pub const OR_R16_R16: u8 = 0x35;

/// `OR reg16, [reg + offset]`.
pub const OR_R16_REGADDR: u8 = 0x36;

/// `OR reg16, [address]`.
pub const OR_R16_ADDR: u8 = 0x37;

/// `OR reg16, word`.
pub const OR_R16_WORD: u8 = 0x38;

/// `ORB reg8, reg8`.
pub const ORB_R8_R8: u8 = 0x39;

/// `ORB reg8, [reg + offset]`.
pub const ORB_R8_REGADDR: u8 = 0x3A;

/// `ORB reg8, [address]`.
pub const ORB_R8_ADDR: u8 = 0x3B;

/// `ORB reg8, byte`.
pub const ORB_R8_BYTE: u8 = 0x3C;

/// `XOR reg16, reg16`.
pub const XOR_R16_R16: u8 = 0x3D;

/// `XOR reg16, [reg + offset]`.
pub const XOR_R16_REGADDR: u8 = 0x3E;

/// `XOR reg16, [address]`.
pub const XOR_R16_ADDR: u8 = 0x3F;

/// `XOR reg16, word`.
pub const XOR_R16_WORD: u8 = 0x40;

/// `XORB reg8, reg8`.
pub const XORB_R8_R8: u8 = 0x41;

/// `XORB reg8, [reg + offset]`.
pub const XORB_R8_REGADDR: u8 = 0x42;

/// `XORB reg8, [address]`.
pub const XORB_R8_ADDR: u8 = 0x43;

/// `XORB reg8, byte`.
pub const XORB_R8_BYTE: u8 = 0x44;

/// `NOT reg16`.
pub const NOT_R16: u8 = 0x45;

/// `NOTB reg8`.
pub const NOTB_R8: u8 = 0x46;

/// `SHL reg16, reg16`.
pub const SHL_R16_R16: u8 = 0x47;

/// `SHL reg16, [reg + offset]`.
pub const SHL_R16_REGADDR: u8 = 0x48;

/// `SHL reg16, [address]`.
pub const SHL_R16_ADDR: u8 = 0x49;

/// `SHL reg16, word`.
pub const SHL_R16_WORD: u8 = 0x4A;

/// `SHLB reg8, reg8`.
pub const SHLB_R8_R8: u8 = 0x4B;

/// `SHLB reg8, [reg + offset]`.
pub const SHLB_R8_REGADDR: u8 = 0x4C;

/// `SHLB reg8, [address]`.
pub const SHLB_R8_ADDR: u8 = 0x4D;

/// `SHLB reg8, byte`.
pub const SHLB_R8_BYTE: u8 = 0x4E;

/// `SHR reg16, reg16`.
pub const SHR_R16_R16: u8 = 0x4F;

/// `SHR reg16, [reg + offset]`.
pub const SHR_R16_REGADDR: u8 = 0x50;

/// `SHR reg16, [address]`.
pub const SHR_R16_ADDR: u8 = 0x51;

/// `SHR reg16, word`.
pub const SHR_R16_WORD: u8 = 0x52;

/// `SHRB reg8, reg8`.
pub const SHRB_R8_R8: u8 = 0x53;

/// `SHRB reg8, [reg + offset]`.
pub const SHRB_R8_REGADDR: u8 = 0x54;

/// `SHRB reg8, [address]`.
pub const SHRB_R8_ADDR: u8 = 0x55;

/// `SHRB reg8, byte`.
pub const SHRB_R8_BYTE: u8 = 0x56;

/// `MUL reg16` (A = A * src).
pub const MUL_R16: u8 = 0x57;

/// `MUL [reg + offset]` (A = A * src).
pub const MUL_REGADDR: u8 = 0x58;

/// `MUL [address]` (A = A * src).
pub const MUL_ADDR: u8 = 0x59;

/// `MUL word` (A = A * src).
pub const MUL_WORD: u8 = 0x5A;

/// `MULB reg8` (AL = AL * src).
pub const MULB_R8: u8 = 0x5B;

/// `MULB [reg + offset]` (AL = AL * src).
pub const MULB_REGADDR: u8 = 0x5C;

/// `MULB [address]` (AL = AL * src).
pub const MULB_ADDR: u8 = 0x5D;

/// `MULB byte` (AL = AL * src).
pub const MULB_BYTE: u8 = 0x5E;

/// `DIV reg16` (A = A / src).
pub const DIV_R16: u8 = 0x5F;

/// `DIV [reg + offset]` (A = A / src).
pub const DIV_REGADDR: u8 = 0x60;

/// `DIV [address]` (A = A / src).
pub const DIV_ADDR: u8 = 0x61;

/// `DIV word` (A = A / src).
pub const DIV_WORD: u8 = 0x62;

/// `DIVB reg8` (AL = AL / src).
pub const DIVB_R8: u8 = 0x63;

/// `DIVB [reg + offset]` (AL = AL / src).
pub const DIVB_REGADDR: u8 = 0x64;

/// `DIVB [address]` (AL = AL / src).
pub const DIVB_ADDR: u8 = 0x65;

/// `DIVB byte` (AL = AL / src).
pub const DIVB_BYTE: u8 = 0x66;

/// `JMP address`.
pub const JMP_ADDR: u8 = 0x67;

/// `JMP reg16`.
pub const JMP_R16: u8 = 0x68;

/// `JC address`.
pub const JC_ADDR: u8 = 0x69;

/// `JC reg16`.
pub const JC_R16: u8 = 0x6A;

/// `JNC address`.
pub const JNC_ADDR: u8 = 0x6B;

/// `JNC reg16`.
pub const JNC_R16: u8 = 0x6C;

/// `JZ address`.
pub const JZ_ADDR: u8 = 0x6D;

/// `JZ reg16`.
pub const JZ_R16: u8 = 0x6E;

/// `JNZ address`.
pub const JNZ_ADDR: u8 = 0x6F;

/// `JNZ reg16`.
pub const JNZ_R16: u8 = 0x70;

/// `JA address`.
pub const JA_ADDR: u8 = 0x71;

/// `JA reg16`.
pub const JA_R16: u8 = 0x72;

/// `JNA address`.
pub const JNA_ADDR: u8 = 0x73;

/// `JNA reg16`.
pub const JNA_R16: u8 = 0x74;

/// `PUSH reg16`.
pub const PUSH_R16: u8 = 0x75;

/// `PUSH [reg + offset]`.
pub const PUSH_REGADDR: u8 = 0x76;

/// `PUSH [address]`.
pub const PUSH_ADDR: u8 = 0x77;

/// `PUSH word`.
pub const PUSH_WORD: u8 = 0x78;

/// `PUSHB reg8`.
pub const PUSHB_R8: u8 = 0x79;

/// `PUSHB [reg + offset]`.
pub const PUSHB_REGADDR: u8 = 0x7A;

/// `PUSHB [address]`.
pub const PUSHB_ADDR: u8 = 0x7B;

/// `PUSHB byte`.
pub const PUSHB_BYTE: u8 = 0x7C;

/// `POP reg16`.
pub const POP_R16: u8 = 0x7D;

/// `POP [reg + offset]`.
pub const POP_REGADDR: u8 = 0x7E;

/// `POP [address]`.
pub const POP_ADDR: u8 = 0x7F;

/// `POPB reg8`.
pub const POPB_R8: u8 = 0x80;

/// `POPB [reg + offset]`.
pub const POPB_REGADDR: u8 = 0x81;

/// `POPB [address]`.
pub const POPB_ADDR: u8 = 0x82;

/// `CALL address`.
pub const CALL_ADDR: u8 = 0x83;

/// `CALL reg16`.
pub const CALL_R16: u8 = 0x84;

/// `RET`: pop IP.
pub const RET: u8 = 0x85;

/// `CLI`: clear the interrupt mask.
pub const CLI: u8 = 0x86;

/// `STI`: set the interrupt mask.
pub const STI: u8 = 0x87;

/// `IRET`: return from an interrupt handler.
pub const IRET: u8 = 0x88;

/// `SYSCALL`: trap into the system-call handler.
pub const SYSCALL: u8 = 0x89;

/// `SYSRET`: return from the system-call handler.
pub const SYSRET: u8 = 0x8A;
