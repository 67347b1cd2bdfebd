//! Helper functions for layout calculations.

use crate::mosaic::geometry::Rect;

/// Splits a frame vertically (top/bottom) at the given ratio.
///
/// # Arguments
///
/// * `frame` - The frame to split
/// * `ratio` - Split ratio (0.0-1.0), where ratio is the top portion
///
/// # Returns
///
/// A tuple of (`top_frame`, `bottom_frame`)
#[must_use]
pub fn split_vertical(frame: &Rect, ratio: f64) -> (Rect, Rect) {
    let top_height = frame.height * ratio.clamp(0.0, 1.0);
    let bottom_height = frame.height - top_height;

    let top = Rect::new(frame.x, frame.y, frame.width, top_height);
    let bottom = Rect::new(frame.x, frame.y + top_height, frame.width, bottom_height);

    (top, bottom)
}

/// Clamps a focus height percentage to `[0, 100]`.
///
/// Non-finite values resolve to `fallback`.
#[must_use]
pub fn clamp_percent(percent: f64, fallback: f64) -> f64 {
    if percent.is_finite() { percent.clamp(0.0, 100.0) } else { fallback }
}
