//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
///
/// This creates a JSONC file documenting every available option with its
/// default value.
#[must_use]
pub fn generate_config_template() -> String {
    r##"// Multiview Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Layout
  // ============================================================================
  // Arrangement of the tiles: "focused" (one large tile above a grid)
  // or "grid" (all tiles equal-sized)
  // "viewMode": "focused",

  // Height of the focus row: "auto" or a percentage between 0 and 100.
  // "auto" sizes the row so the secondary grid leaves no vertical gap.
  // "focusHeight": "auto",

  // Focus row height (percent) assumed while solving the "auto" height
  // "autoFitBaseFocus": 70,

  // ============================================================================
  // Gestures
  // ============================================================================
  // Pointer travel in pixels before a press on a tile becomes a drag
  // "dragThreshold": 5,

  // Maximum delay between two clicks on a tile to open it fullscreen (ms)
  // "doubleClickMs": 300,

  // Minimum interval between visual drag updates (ms)
  // "frameIntervalMs": 16,

  // ============================================================================
  // Streams
  // ============================================================================
  // Streams shown on startup. Platform is "twitch", "youtube" or "kick".
  // "streams": [
  //   // { "id": "shroud" },
  //   // { "id": "jfKfPfyJRdk", "platform": "youtube" }
  // ]
}
"##
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MultiviewConfig;

    #[test]
    fn test_generate_config_template_is_valid_jsonc() {
        let template = generate_config_template();
        let stripped = json_comments::StripComments::new(template.as_bytes());
        let config: MultiviewConfig = serde_json::from_reader(stripped).unwrap();
        assert!(config.streams.is_empty());
    }

    #[test]
    fn test_generate_config_template_contains_all_sections() {
        let template = generate_config_template();
        assert!(template.contains("viewMode"));
        assert!(template.contains("focusHeight"));
        assert!(template.contains("autoFitBaseFocus"));
        assert!(template.contains("dragThreshold"));
        assert!(template.contains("doubleClickMs"));
        assert!(template.contains("frameIntervalMs"));
        assert!(template.contains("streams"));
    }

    #[test]
    fn test_create_config_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");
        create_config_file(&path).unwrap();
        assert!(path.exists());
    }
}
