//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (instruction budget, memory geometry).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Loading:** JSON deserialization with per-field defaults and validation.
//!
//! Every field is optional in JSON; use `Config::default()` when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Instruction budget of a single run.
    pub const INSTRUCTION_LIMIT: u64 = constants::DEFAULT_INSTRUCTION_LIMIT;

    /// Memory capacity in bytes (8 KiB).
    pub const MEM_SIZE: usize = constants::MEM_SIZE;

    /// Granularity to which the memory capacity is rounded up.
    pub const BLOCK_SIZE: usize = constants::BLOCK_SIZE;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rvseq_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "size": 65536 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.instruction_limit, 10_000);
/// assert_eq!(config.memory.size, 65536);
/// assert_eq!(config.memory.block_size, 32);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that the values can build a machine.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.memory.size == 0 {
            return Err(SimError::InvalidConfig("memory.size must be non-zero".into()));
        }
        if self.memory.block_size == 0 {
            return Err(SimError::InvalidConfig(
                "memory.block_size must be non-zero".into(),
            ));
        }
        if u32::try_from(self.memory.size).is_err() {
            return Err(SimError::InvalidConfig(
                "memory.size must fit the 32-bit address space".into(),
            ));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Maximum number of instructions a run may execute
    #[serde(default = "GeneralConfig::default_instruction_limit")]
    pub instruction_limit: u64,

    /// Log every fetched instruction and committed store
    #[serde(default)]
    pub trace_instructions: bool,
}

impl GeneralConfig {
    /// Returns the default instruction budget.
    fn default_instruction_limit() -> u64 {
        defaults::INSTRUCTION_LIMIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            instruction_limit: defaults::INSTRUCTION_LIMIT,
            trace_instructions: false,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Requested capacity in bytes; rounded up to `block_size`
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Rounding granularity of the capacity, in bytes
    #[serde(default = "MemoryConfig::default_block_size")]
    pub block_size: usize,
}

impl MemoryConfig {
    fn default_size() -> usize {
        defaults::MEM_SIZE
    }

    fn default_block_size() -> usize {
        defaults::BLOCK_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEM_SIZE,
            block_size: defaults::BLOCK_SIZE,
        }
    }
}
