//! TOML-backed configuration for the simulator's tunable knobs:
//! trace output, register count, data memory size, and the starting
//! program counter.

use serde::Deserialize;

const DEFAULT_REGISTER_COUNT: usize = 32;
const DEFAULT_DATA_MEMORY_SIZE: usize = 4096;
const DEFAULT_START_PC: i64 = 4000;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,

    #[serde(default = "default_register_count")]
    pub register_count: usize,

    #[serde(default = "default_data_memory_size")]
    pub data_memory_size: usize,

    #[serde(default = "default_start_pc")]
    pub start_pc: String,
}

impl GeneralConfig {
    /// Parses `start_pc` as hex (with or without a `0x` prefix) or
    /// decimal, falling back to the default base address if neither
    /// parse succeeds.
    pub fn start_pc_val(&self) -> i64 {
        let s = self.start_pc.trim_start_matches("0x");
        i64::from_str_radix(s, 16)
            .or_else(|_| self.start_pc.parse())
            .unwrap_or(DEFAULT_START_PC)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            register_count: default_register_count(),
            data_memory_size: default_data_memory_size(),
            start_pc: default_start_pc(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
        }
    }
}

fn default_register_count() -> usize {
    DEFAULT_REGISTER_COUNT
}

fn default_data_memory_size() -> usize {
    DEFAULT_DATA_MEMORY_SIZE
}

fn default_start_pc() -> String {
    DEFAULT_START_PC.to_string()
}
