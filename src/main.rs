//! BarberFlow CLI
//!
//! Command-line front end of the barbershop finance tracker.
//!
//! # Usage
//!
//! ```bash
//! barberflow cut --customer "João" --service cut-beard
//! barberflow add --type expense --category other --value 800 --description Aluguel
//! barberflow dashboard --filter week
//! barberflow statement --filter all
//! barberflow export --filter month --output outubro.csv
//! barberflow theme toggle
//! ```
//!
//! State lives under `--data-dir` (default `.barberflow`), one file per
//! storage key. Logs go to stderr, filtered by `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown id, invalid value, unwritable data directory, etc.)

use barberflow::cli;
use std::process;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(format!("barberflow={}", args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
