//! Configuration system for the APEX pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (code base address, data memory size).
//! 2. **Structures:** Hierarchical config for general, pipeline and memory settings.
//! 3. **Enums:** Flag update policy and run mode.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or taken from `Config::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Address of the first instruction slot.
    pub const BASE_ADDRESS: i32 = constants::CODE_BASE_ADDRESS;

    /// Data memory size in 32-bit words.
    pub const DATA_WORDS: usize = constants::DATA_MEMORY_SIZE;

    /// Number of memory words shown by dumps.
    pub const MEMORY_DUMP_WORDS: usize = constants::DEFAULT_MEMORY_DUMP_WORDS;
}

/// How arithmetic and logic instructions update the zero and positive flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FlagPolicy {
    /// Every ALU result sets `Z = (r == 0)` and `P = (r > 0)`.
    #[default]
    Corrected,
    /// Arithmetic sets `P` for any non-zero result (negative included);
    /// AND/OR/XOR leave both flags untouched.
    Legacy,
}

/// How the driver decides when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run until HALT retires.
    #[default]
    Run,
    /// Run one tick at a time under external control.
    SingleStep,
    /// Run at most the given number of ticks.
    Cycles(u64),
}

impl RunMode {
    /// Cycle budget implied by the mode, if any.
    pub const fn cycle_limit(self) -> Option<u64> {
        match self {
            Self::Cycles(n) => Some(n),
            Self::Run | Self::SingleStep => None,
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use apex_pipe_core::config::{Config, FlagPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.pipeline.base_address, 4000);
/// assert_eq!(config.pipeline.flag_policy, FlagPolicy::Corrected);
/// ```
///
/// Deserializing from JSON, with omitted sections falling back to defaults:
///
/// ```
/// use apex_pipe_core::config::{Config, FlagPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "pipeline": { "flag_policy": "Legacy" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.pipeline.flag_policy, FlagPolicy::Legacy);
/// assert_eq!(config.memory.data_words, 4096);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline layout and flag behaviour
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SimError::Config(format!("could not read '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), SimError> {
        if self.memory.data_words == 0 {
            return Err(SimError::Config("memory.data_words must be non-zero".into()));
        }
        if self.pipeline.base_address < 0 {
            return Err(SimError::Config(
                "pipeline.base_address must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events for every instruction movement
    #[serde(default)]
    pub trace_instructions: bool,

    /// Number of data memory words included in dumps and snapshots
    #[serde(default = "GeneralConfig::default_memory_dump_words")]
    pub memory_dump_words: usize,
}

impl GeneralConfig {
    fn default_memory_dump_words() -> usize {
        defaults::MEMORY_DUMP_WORDS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            memory_dump_words: defaults::MEMORY_DUMP_WORDS,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Address of instruction 0; later instructions follow every 4 bytes
    #[serde(default = "PipelineConfig::default_base_address")]
    pub base_address: i32,

    /// Flag update behaviour for ALU instructions
    #[serde(default)]
    pub flag_policy: FlagPolicy,
}

impl PipelineConfig {
    fn default_base_address() -> i32 {
        defaults::BASE_ADDRESS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            flag_policy: FlagPolicy::default(),
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Size of the word-addressed data memory
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,
}

impl MemoryConfig {
    fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: defaults::DATA_WORDS,
        }
    }
}
