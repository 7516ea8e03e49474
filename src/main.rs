use std::fs;

use clap::Parser;
use formulex::scanner::{
    config::{Mode, ScannerConfig},
    core::Scanner,
};

/// formulex splits an arithmetic formula into numbers, identifiers,
/// operators and brackets, and prints one token per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formulex to read the formula from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Locale whose decimal separator to use, such as `de-DE`.
    #[arg(short, long, conflicts_with = "decimal_separator")]
    locale: Option<String>,

    /// Character separating the integer and fractional part of a number.
    #[arg(short, long)]
    decimal_separator: Option<char>,

    /// Fail on malformed numbers and unrecognized characters instead of
    /// skipping them.
    #[arg(short, long)]
    strict: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let config = build_config(&args).unwrap_or_else(|e| {
                                         eprintln!("{e}");
                                         std::process::exit(1);
                                     });

    let formula = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match Scanner::new(config).scan(formula.trim_end_matches(['\r', '\n'])) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn build_config(args: &Args) -> Result<ScannerConfig, formulex::error::ConfigError> {
    let config = match (&args.locale, args.decimal_separator) {
        (Some(tag), _) => ScannerConfig::for_locale(tag)?,
        (None, Some(separator)) => ScannerConfig::default().with_decimal_separator(separator)?,
        (None, None) => ScannerConfig::default(),
    };
    let mode = if args.strict { Mode::Strict } else { Mode::Lenient };
    Ok(config.with_mode(mode))
}
