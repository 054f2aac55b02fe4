use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use prometheus::Registry;
use tracing::info;

use string_obfuscator::config::{resolve_seed, ObfuscationConfig};
use string_obfuscator::errors::AppError;
use string_obfuscator::logger;
use string_obfuscator::metrics::Metrics;
use string_obfuscator::obfuscator::Obfuscator;
use string_obfuscator::report::{ObfuscationReport, DEFAULT_REPORT_PATH};

#[derive(Parser)]
#[command(name = "obfuscate", version)]
struct Cli {
    /// Number of obfuscation cycles to run.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,

    /// XOR-encrypt the text with a fresh random key each cycle.
    #[arg(long)]
    enable_string_encryption: bool,

    /// Inject bracketed noise tokens between characters.
    #[arg(long)]
    enable_bogus: bool,

    /// Noise injection intensity, 0-100.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(..=100))]
    bogus_intensity: u8,

    /// RNG seed; 0 selects a wall-clock seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Where to write the run report.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,
}

fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();

    let config = ObfuscationConfig {
        cycles: cli.cycles,
        enable_string_encryption: cli.enable_string_encryption,
        enable_bogus_control_flow: cli.enable_bogus,
        bogus_code_intensity: cli.bogus_intensity,
        random_seed: resolve_seed(cli.seed),
    };
    config.validate()?;

    let registry = Registry::new();
    let metrics = Metrics::new(&registry);

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let input = line.trim_end_matches(['\r', '\n']);

    let mut obfuscator = Obfuscator::new(&config);
    let output = obfuscator.run(input, &metrics);
    println!("{output}");

    let report = ObfuscationReport::from_run(&config, &metrics);
    report.write(&cli.report)?;
    info!("report written to {}", cli.report.display());

    Ok(())
}
