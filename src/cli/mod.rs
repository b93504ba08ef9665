mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::{core::error::ChartError, logging};

/// Parse the command line, then chart the input to stdout.
///
/// # Errors
/// Invalid configuration, unreadable input, a malformed line, or a failed
/// write to stdout.
pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    logging::init(cli.debug);
    handlers::chart(&cli)
}
