//! Configuration for the SIM16 execution core.
//!
//! This module defines the configuration structures used to build a CPU and
//! drive a simulation. It provides:
//! 1. **Defaults:** Reset values for the instruction and stack pointers.
//! 2. **Structures:** General (reset state, tracing) and run (step budget) sections.
//! 3. **Loading:** Deserialization from JSON, with every field optional.
//!
//! Configuration is supplied as JSON by the CLI (`--config`), or use `Config::default()`.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Address of the first instruction after reset.
    ///
    /// Images conventionally start with a `JMP` over the trap vectors at
    /// `0x0003` and `0x0006`.
    pub const START_IP: u16 = 0x0000;

    /// Initial stack pointer; the first pushed word lands at `0xFFFE..=0xFFFF`.
    pub const INITIAL_SP: u16 = 0xFFFF;

    /// Step budget for a single `run`.
    pub const MAX_STEPS: u64 = 1_000_000;
}

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reset state and tracing.
    pub general: GeneralConfig,
    /// Simulation loop limits.
    pub run: RunConfig,
}

impl Config {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim16_core::Config;
    ///
    /// let config = Config::from_json(r#"{ "general": { "initial_sp": 512 } }"#).unwrap();
    /// assert_eq!(config.general.initial_sp, 0x200);
    /// assert_eq!(config.general.start_ip, 0);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Reset state of the CPU and tracing switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// `IP` after reset.
    pub start_ip: u16,
    /// `SP` after reset.
    pub initial_sp: u16,
    /// Log every decoded instruction at trace level.
    pub trace_instructions: bool,
    /// Attach a tracing observer that logs every register mutation.
    pub trace_registers: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_ip: defaults::START_IP,
            initial_sp: defaults::INITIAL_SP,
            trace_instructions: false,
            trace_registers: false,
        }
    }
}

/// Limits for [`Simulator::run`](crate::sim::Simulator::run).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Maximum number of steps before `run` gives up.
    pub max_steps: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: defaults::MAX_STEPS,
        }
    }
}
