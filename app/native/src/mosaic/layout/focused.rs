//! Focused layout - one primary tile above a grid of the others.
//!
//! ```text
//! +---------------------------+
//! |        +---------+        |
//! |        |   W1    |        |   focus band: H * p / 100
//! |        +---------+        |
//! +---------------------------+
//! |   +----+ +----+ +----+    |   secondary band: H * (1 - p / 100)
//! |   | W2 | | W3 | | W4 |    |
//! |   +----+ +----+ +----+    |
//! +---------------------------+
//! ```
//!
//! With a single tile the focus band is the whole container.

use smallvec::smallvec;

use super::LayoutResult;
use super::grid::{self, RowPolicy};
use super::helpers::{clamp_percent, split_vertical};
use crate::mosaic::constants::layout::DEFAULT_FOCUS_HEIGHT_PERCENT;
use crate::mosaic::geometry::Rect;

/// Focused layout.
///
/// # Arguments
///
/// * `count` - Number of tiles; the first one is the focused tile
/// * `container` - The layout surface
/// * `focus_height_percent` - Height of the focus band (0-100)
///
/// Always returns `count` rectangles for a usable container. Tiles that get a
/// band with no height come back as zero-sized rectangles centered in it.
#[must_use]
pub fn layout(count: usize, container: &Rect, focus_height_percent: f64) -> LayoutResult {
    let usable = container.width.is_finite()
        && container.height.is_finite()
        && container.width > 0.0
        && container.height > 0.0;
    if count == 0 || !usable {
        return LayoutResult::new();
    }

    if count == 1 {
        return smallvec![Rect::fit_tile(container)];
    }

    let percent = clamp_percent(focus_height_percent, DEFAULT_FOCUS_HEIGHT_PERCENT);
    let (focus_band, secondary_band) = split_vertical(container, percent / 100.0);

    let mut cells = LayoutResult::with_capacity(count);
    cells.push(Rect::fit_tile(&focus_band));

    let secondary = grid::pack(count - 1, &secondary_band, RowPolicy::TopRowLight);
    if secondary.cells.len() == count - 1 {
        cells.extend(secondary.cells);
    } else {
        let center = secondary_band.center();
        cells.extend((1..count).map(|_| Rect::new(center.x, center.y, 0.0, 0.0)));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect { Rect::new(0.0, 0.0, 1600.0, 900.0) }

    #[test]
    fn test_layout_empty() {
        assert!(layout(0, &container(), 70.0).is_empty());
        assert!(layout(3, &Rect::new(0.0, 0.0, 0.0, 900.0), 70.0).is_empty());
    }

    #[test]
    fn test_single_tile_fills_container() {
        let cells = layout(1, &container(), 30.0);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0], container());
    }

    #[test]
    fn test_focus_band_and_secondary_grid() {
        let cells = layout(4, &container(), 70.0);
        assert_eq!(cells.len(), 4);

        // Focus tile fits the 630px band
        let focus = cells[0];
        assert!((focus.height - 630.0).abs() < 1e-6);
        assert!((focus.width - 1120.0).abs() < 1e-6);
        assert!((focus.x - 240.0).abs() < 1e-6);
        assert_eq!(focus.y, 0.0);

        // Secondary tiles live in the lower 270px band
        for cell in &cells[1..] {
            assert!(cell.y >= 630.0 - 1e-6);
            assert!(cell.bottom() <= 900.0 + 1e-6);
            assert!(!cell.overlaps(&focus, 1e-6));
        }
    }

    #[test]
    fn test_full_height_focus_keeps_count() {
        let cells = layout(3, &container(), 100.0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], container());
        assert_eq!(cells[1].area(), 0.0);
        assert_eq!(cells[2].area(), 0.0);
    }

    #[test]
    fn test_zero_height_focus_keeps_count() {
        let cells = layout(3, &container(), 0.0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].area(), 0.0);
        assert!(cells[1].area() > 0.0);
    }

    #[test]
    fn test_nan_focus_uses_default() {
        assert_eq!(
            layout(3, &container(), f64::NAN),
            layout(3, &container(), DEFAULT_FOCUS_HEIGHT_PERCENT)
        );
    }
}
