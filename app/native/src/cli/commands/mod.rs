//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `layout` - Layout, raw packing and auto-fit commands
//! - `path` - Path encoding and decoding commands
//! - `types` - Shared types used across commands

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config;
use crate::error::MultiviewError;

pub mod config_cmd;
pub mod layout;
pub mod path;
pub mod types;

// Re-export commonly used types for convenience
pub use config_cmd::ConfigCommands;
pub use layout::{AutofitArgs, LayoutArgs, PackArgs};
pub use path::PathCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Multiview CLI - lay out many live streams in one viewport.
#[derive(Parser, Debug)]
#[command(name = "multiview")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Compute tile rectangles for streams in a container.
    Layout(LayoutArgs),

    /// Run the raw grid packer.
    ///
    /// Shows the packing before slack redistribution, with the short row
    /// placed as requested.
    Pack(PackArgs),

    /// Solve the automatic focus height.
    Autofit(AutofitArgs),

    /// Convert between stream lists and shareable paths.
    #[command(subcommand)]
    Path(PathCommands),

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Multiview configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(multiview completions --shell zsh)"
    ///   multiview completions --shell fish > ~/.config/fish/completions/multiview.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), MultiviewError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(MultiviewError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Layout(args) => layout::execute_layout(args),
            Commands::Pack(args) => layout::execute_pack(args),
            Commands::Autofit(args) => layout::execute_autofit(args),
            Commands::Path(cmd) => path::execute(cmd),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", config::print_schema());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "multiview", &mut io::stdout());
    }
}
