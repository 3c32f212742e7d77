//! Instruction stream builders.
