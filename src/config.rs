use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

pub const MAX_BOGUS_INTENSITY: u8 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cycle count must be at least 1")]
    ZeroCycles,
    #[error("bogus intensity {0} is out of range (0-{MAX_BOGUS_INTENSITY})")]
    IntensityOutOfRange(u8),
}

/// Encoder run parameters. Built once from parsed CLI arguments and read-only
/// afterwards; also serialized verbatim as the report's `input_parameters`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObfuscationConfig {
    pub cycles: u32,
    pub enable_string_encryption: bool,
    pub enable_bogus_control_flow: bool,
    pub bogus_code_intensity: u8,
    pub random_seed: u64,
}

impl ObfuscationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        if self.bogus_code_intensity > MAX_BOGUS_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange(self.bogus_code_intensity));
        }
        Ok(())
    }
}

/// What the decoder does with a `\x` prefix that is not followed by two hex
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedEscapePolicy {
    /// Treat the position as a literal, non-consumed character.
    Skip,
    /// Fail the run with a parse error.
    Abort,
}

#[derive(Debug, Clone)]
pub struct DeobfuscationConfig {
    pub cycles: u32,
    pub on_malformed_escape: MalformedEscapePolicy,
}

impl Default for DeobfuscationConfig {
    fn default() -> Self {
        Self {
            cycles: 1,
            on_malformed_escape: MalformedEscapePolicy::Skip,
        }
    }
}

/// Seed 0 selects a wall-clock seed; any other value is used as-is. Only the
/// binary entry points call this, so library code never reads the clock.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
