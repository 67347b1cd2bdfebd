//! CLI module for Multiview.
//!
//! This module provides command-line access to the mosaic engine: computing
//! layouts for a container, inspecting the packer and the auto-fit solver,
//! encoding orderings as paths, and managing the configuration file.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::MultiviewError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), MultiviewError> {
    let cli = Cli::parse();
    cli.execute()
}
