//! Stream tiles as seen by the layout engine.
//!
//! A tile is only an identity plus the platform hosting it. The engine never
//! looks at playback state; identities are the keys of the position map.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform hosting a stream.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Twitch channel.
    #[default]
    Twitch,
    /// `YouTube` live video.
    #[serde(rename = "youtube")]
    YouTube,
    /// Kick channel.
    Kick,
}

impl Platform {
    /// All platforms, in suffix lookup order.
    pub const ALL: [Self; 3] = [Self::Twitch, Self::YouTube, Self::Kick];

    /// Suffix appended to an identity in a route path segment.
    #[must_use]
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::Twitch => "",
            Self::YouTube => "~yt",
            Self::Kick => "~kick",
        }
    }

    /// Lowercase name as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Twitch => "twitch",
            Self::YouTube => "youtube",
            Self::Kick => "kick",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitch" | "tw" => Ok(Self::Twitch),
            "youtube" | "yt" => Ok(Self::YouTube),
            "kick" => Ok(Self::Kick),
            _ => Err(format!(
                "Invalid platform '{s}'. Expected 'twitch', 'youtube' or 'kick'."
            )),
        }
    }
}

/// One stream placed on the layout surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Stream identity; unique within a surface.
    pub id: String,
    /// Platform hosting the stream.
    pub platform: Platform,
}

impl Tile {
    /// Creates a new tile.
    #[must_use]
    pub fn new(id: impl Into<String>, platform: Platform) -> Self {
        Self { id: id.into(), platform }
    }

    /// Creates a Twitch tile.
    #[must_use]
    pub fn twitch(id: impl Into<String>) -> Self { Self::new(id, Platform::Twitch) }
}

impl FromStr for Tile {
    type Err = String;

    /// Parses `id` or `id:platform`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, platform) = match s.rsplit_once(':') {
            Some((id, platform)) => (id, platform.parse()?),
            None => (s, Platform::Twitch),
        };
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("Invalid stream '{s}'. The identity is empty."));
        }
        Ok(Self::new(id, platform))
    }
}
