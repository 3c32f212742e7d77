//! Shared test infrastructure.

pub mod builder;
pub mod harness;
