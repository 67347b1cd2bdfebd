//! Shared types for CLI commands.
//!
//! This module contains types that are used across multiple CLI command modules.

use crate::config::ViewMode;
use crate::mosaic::RowPolicy;

/// View mode (CLI representation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliViewMode {
    /// One focused tile above a grid of the others.
    Focused,
    /// All tiles packed as an equal grid.
    Grid,
}

impl From<CliViewMode> for ViewMode {
    fn from(mode: CliViewMode) -> Self {
        match mode {
            CliViewMode::Focused => Self::Focused,
            CliViewMode::Grid => Self::Grid,
        }
    }
}

/// Short row placement for raw grid packing (CLI representation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CliRowPolicy {
    /// Short row first.
    #[default]
    Top,
    /// Short row last.
    Bottom,
}

impl From<CliRowPolicy> for RowPolicy {
    fn from(policy: CliRowPolicy) -> Self {
        match policy {
            CliRowPolicy::Top => Self::TopRowLight,
            CliRowPolicy::Bottom => Self::BottomRowLight,
        }
    }
}

/// Container dimensions shared by the geometry commands.
#[derive(Debug, Clone, Copy, PartialEq, clap::Args)]
pub struct ContainerArgs {
    /// Container width in pixels.
    #[arg(long, short = 'W', default_value_t = 1920.0)]
    pub width: f64,

    /// Container height in pixels.
    #[arg(long, short = 'H', default_value_t = 1080.0)]
    pub height: f64,
}
