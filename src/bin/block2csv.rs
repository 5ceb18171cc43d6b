//! CLI tool to flatten an `@@`-delimited block file into CSV.
//!
//! Usage:
//!   block2csv                      reads query.txt, writes query.csv
//!   block2csv <input> <output>
//!   block2csv <input> <output> --crlf

use block_csv::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, LineTerminator, convert};
use clap::Parser;
use log::LevelFilter;
use std::process;

/// Convert `key: value` blocks separated by `@@` lines into a CSV table.
///
/// Columns are the sorted union of all keys; missing fields are left blank.
#[derive(Parser)]
#[command(name = "block2csv")]
struct Cli {
    /// Input file of @@-delimited blocks
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// CSV file to create (overwritten if it exists; missing parent directories are created)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: String,

    /// End CSV lines with CRLF instead of LF
    #[arg(long)]
    crlf: bool,

    /// Log paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let terminator = if cli.crlf {
        LineTerminator::Crlf
    } else {
        LineTerminator::Lf
    };
    let config = Config::new(&cli.input, &cli.output).with_terminator(terminator);

    match convert(&config) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
