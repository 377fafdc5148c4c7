//! CLI for shelfql
//!
//! Commands:
//! - shelfql serve [--host <host>] [--port <port>]
//!   [--cors-origin <origin> ...] [--seed <file.json>]
//! - shelfql schema

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    commands::execute(cli.command)
}
