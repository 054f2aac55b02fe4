use std::io::{self, BufRead};

use clap::Parser;

use string_obfuscator::config::{DeobfuscationConfig, MalformedEscapePolicy};
use string_obfuscator::deobfuscator::deobfuscate_text;
use string_obfuscator::errors::AppError;
use string_obfuscator::logger;

#[derive(Parser)]
#[command(name = "deobfuscate", version)]
struct Cli {
    /// Number of decode cycles; must match the count the text was encoded
    /// with.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,

    /// What to do with a `\x` prefix that is not followed by two hex digits.
    #[arg(long, value_enum, default_value = "skip")]
    on_malformed_escape: MalformedEscapePolicy,
}

fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();

    let config = DeobfuscationConfig {
        cycles: cli.cycles,
        on_malformed_escape: cli.on_malformed_escape,
    };

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let input = line.trim_end_matches(['\r', '\n']);

    let output = deobfuscate_text(input, &config)?;
    println!("{output}");

    Ok(())
}
