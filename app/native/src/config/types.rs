//! Configuration types for Multiview.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mosaic::constants::{gesture, layout, timing};
use crate::mosaic::stream::{Platform, Tile};

// ============================================================================
// View Preferences
// ============================================================================

/// How tiles are arranged on the layout surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One enlarged primary tile above a grid of the remaining tiles.
    #[default]
    Focused,
    /// All tiles equal-sized and packed to cover the most area.
    Grid,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focused => write!(f, "focused"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

/// Keyword accepted in place of a focus height percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FocusHeightKeyword {
    /// Solve the height so the secondary grid leaves no vertical gap.
    Auto,
}

/// Height of the focus row, as a percentage of the container or `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FocusHeight {
    /// Fixed percentage (0-100) of the container height.
    Percent(f64),
    /// Solved automatically.
    Keyword(FocusHeightKeyword),
}

impl Default for FocusHeight {
    fn default() -> Self { Self::AUTO }
}

impl FocusHeight {
    /// The automatic focus height.
    pub const AUTO: Self = Self::Keyword(FocusHeightKeyword::Auto);

    /// Returns whether the height is solved automatically.
    #[must_use]
    pub const fn is_auto(&self) -> bool { matches!(self, Self::Keyword(FocusHeightKeyword::Auto)) }

    /// Returns the fixed percentage clamped to `[0, 100]`, if any.
    ///
    /// Non-finite percentages resolve to the default focus height.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Percent(pct) if pct.is_finite() => Some(pct.clamp(0.0, 100.0)),
            Self::Percent(_) => Some(layout::DEFAULT_FOCUS_HEIGHT_PERCENT),
            Self::Keyword(_) => None,
        }
    }
}

impl FromStr for FocusHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::AUTO);
        }
        trimmed
            .trim_end_matches('%')
            .parse::<f64>()
            .ok()
            .filter(|pct| pct.is_finite() && (0.0..=100.0).contains(pct))
            .map(Self::Percent)
            .ok_or_else(|| {
                format!("Invalid focus height '{s}'. Expected 'auto' or a number between 0 and 100.")
            })
    }
}

impl std::fmt::Display for FocusHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "{pct}%"),
            Self::Keyword(FocusHeightKeyword::Auto) => write!(f, "auto"),
        }
    }
}

// ============================================================================
// Streams
// ============================================================================

/// A stream listed in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreamConfig {
    /// Channel identity on its platform.
    pub id: String,

    /// Platform hosting the channel. Default: "twitch"
    #[serde(default)]
    pub platform: Platform,
}

impl From<&StreamConfig> for Tile {
    fn from(stream: &StreamConfig) -> Self { Self::new(stream.id.clone(), stream.platform) }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration for Multiview.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiviewConfig {
    /// Optional JSON schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Initial view mode: "focused" or "grid".
    /// Default: "focused"
    pub view_mode: ViewMode,

    /// Focus row height: "auto" or a percentage between 0 and 100.
    /// Default: "auto"
    pub focus_height: FocusHeight,

    /// Focus row height (percent) assumed while solving the automatic height.
    /// Default: 70
    pub auto_fit_base_focus: f64,

    /// Pointer travel in pixels before a press turns into a drag.
    /// Default: 5
    pub drag_threshold: f64,

    /// Maximum delay between two clicks on a tile to request fullscreen (ms).
    /// Default: 300
    pub double_click_ms: u64,

    /// Minimum interval between visual drag updates (ms).
    /// Default: 16
    pub frame_interval_ms: u64,

    /// Streams shown when the surface is first populated.
    pub streams: Vec<StreamConfig>,
}

impl Default for MultiviewConfig {
    fn default() -> Self {
        Self {
            schema: None,
            view_mode: ViewMode::default(),
            focus_height: FocusHeight::default(),
            auto_fit_base_focus: layout::DEFAULT_FOCUS_HEIGHT_PERCENT,
            drag_threshold: gesture::DRAG_THRESHOLD_PX,
            double_click_ms: timing::DOUBLE_CLICK_MS,
            frame_interval_ms: timing::FRAME_INTERVAL_MS,
            streams: Vec::new(),
        }
    }
}

impl MultiviewConfig {
    /// Returns the configured streams as tiles.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> { self.streams.iter().map(Tile::from).collect() }
}

// ============================================================================
// Loading
// ============================================================================

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/multiview/config.jsonc, \
        the platform config directory, or ~/.multiview.jsonc"
    )]
    NotFound,
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Directory name used under the config roots.
const CONFIG_DIR_NAME: &str = "multiview";

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".multiview.jsonc", ".multiview.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/multiview/config.jsonc` when the variable is set
/// 2. `~/.config/multiview/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir()`)
/// 4. `~/.multiview.jsonc` or `~/.multiview.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let dir = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and
/// `ConfigError::ParseError` if it contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(MultiviewConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: MultiviewConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`].
pub fn load_config() -> Result<(MultiviewConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
