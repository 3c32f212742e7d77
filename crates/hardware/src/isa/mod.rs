//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode map, the instruction metadata table, the operand
//! decoder, the instruction handlers and the disassembler.
//!
//! # Encoding
//!
//! An instruction is one opcode byte followed by zero, one or two operand
//! slots. Each opcode fixes the type of every slot, so the length of an
//! instruction is known from its first byte.

/// Operand decoding from the instruction stream.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction handlers, grouped by family.
pub mod execute;

/// Operand types, decoded operands and instruction metadata.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;

/// Opcode to metadata lookup.
pub mod table;
