use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::ObfuscationConfig;
use crate::metrics::Metrics;

/// Filename the encoder writes when no override is given.
pub const DEFAULT_REPORT_PATH: &str = "obfuscation_report.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ObfuscationReport {
    pub input_parameters: ObfuscationConfig,
    pub cycles_completed: u64,
    pub bogus_blocks: u64,
    pub string_encryptions: u64,
}

impl ObfuscationReport {
    pub fn from_run(config: &ObfuscationConfig, metrics: &Metrics) -> Self {
        Self {
            input_parameters: config.clone(),
            cycles_completed: metrics.cycles_completed.get(),
            bogus_blocks: metrics.bogus_blocks.get(),
            string_encryptions: metrics.string_encryptions.get(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}
