//! Double-click detection on tiles.
//!
//! A double click is not part of the drag state machine: it is two completed
//! clicks on the same tile within a short window. It asks the renderer to
//! show that tile fullscreen.

use std::time::{Duration, Instant};

use super::constants::timing::DOUBLE_CLICK_MS;

/// Request for the renderer to show one tile exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenRequest {
    /// Tile to show fullscreen.
    pub id: String,
}

/// Tracks clicks and reports double clicks.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(String, Instant)>,
}

impl Default for ClickTracker {
    fn default() -> Self { Self::new(Duration::from_millis(DOUBLE_CLICK_MS)) }
}

impl ClickTracker {
    /// Creates a tracker pairing clicks no more than `window` apart.
    #[must_use]
    pub const fn new(window: Duration) -> Self { Self { window, last: None } }

    /// Records a click and returns a fullscreen request when it completes a
    /// double click.
    ///
    /// The click that completes a double click is consumed, so a third click
    /// starts over.
    pub fn click(&mut self, id: &str, now: Instant) -> Option<FullscreenRequest> {
        let is_double = self.last.as_ref().is_some_and(|(last_id, at)| {
            last_id == id && now.saturating_duration_since(*at) <= self.window
        });

        if is_double {
            self.last = None;
            tracing::debug!(id, "double click");
            return Some(FullscreenRequest { id: id.to_string() });
        }

        self.last = Some((id.to_string(), now));
        None
    }

    /// Forgets the last click.
    pub fn reset(&mut self) { self.last = None; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_same_tile() {
        let mut tracker = ClickTracker::default();
        let start = Instant::now();
        assert_eq!(tracker.click("a", start), None);
        assert_eq!(
            tracker.click("a", start + Duration::from_millis(120)),
            Some(FullscreenRequest { id: "a".to_string() })
        );
        // Third click starts a new pair
        assert_eq!(tracker.click("a", start + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_timeout_resets() {
        let mut tracker = ClickTracker::new(Duration::from_millis(300));
        let start = Instant::now();
        tracker.click("a", start);
        assert_eq!(tracker.click("a", start + Duration::from_millis(301)), None);
    }

    #[test]
    fn test_different_tile_resets() {
        let mut tracker = ClickTracker::default();
        let start = Instant::now();
        tracker.click("a", start);
        assert_eq!(tracker.click("b", start + Duration::from_millis(50)), None);
        assert!(tracker.click("b", start + Duration::from_millis(100)).is_some());
    }
}
