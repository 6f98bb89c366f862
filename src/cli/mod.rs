// CLI module
// Command-line interface, argument parsing and command execution

mod args;
mod commands;

pub use args::{
    AddArgs, CliArgs, Command, CutArgs, EditArgs, FilterArgs, ProductCommand, ThemeMode,
};
pub use commands::{execute, run};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Global options fall back to their environment variables
/// (`BARBERFLOW_DATA_DIR`, `BARBERFLOW_TODAY`, `BARBERFLOW_LOG`). If parsing
/// fails, or `--help` is passed, clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
