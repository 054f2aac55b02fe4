use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::ObfuscationConfig;
use crate::metrics::Metrics;
use crate::{noise, xor};

pub struct Obfuscator<'a> {
    config: &'a ObfuscationConfig,
    rng: StdRng,
}

impl<'a> Obfuscator<'a> {
    pub fn new(config: &'a ObfuscationConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.random_seed),
        }
    }

    /// Runs the configured cycle chain over `input`. Order within a cycle is
    /// fixed: encrypt, then insert noise. The transforms are pure; every
    /// counter update happens here.
    pub fn run(&mut self, input: &str, metrics: &Metrics) -> String {
        let mut output = input.to_string();
        for cycle in 1..=self.config.cycles {
            if self.config.enable_string_encryption {
                output = xor::encrypt_with_random_key(&output, &mut self.rng);
                metrics.string_encryptions.inc();
            }
            if self.config.enable_bogus_control_flow {
                let (expanded, inserted) =
                    noise::insert(&output, &mut self.rng, self.config.bogus_code_intensity);
                output = expanded;
                metrics.bogus_blocks.inc_by(inserted);
            }
            metrics.cycles_completed.inc();
            debug!(cycle, len = output.len(), "cycle complete");
        }
        output
    }
}
