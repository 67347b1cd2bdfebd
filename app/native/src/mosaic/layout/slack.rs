//! Slack redistribution - grows the first row of a grid into unused margin.
//!
//! A multi-row packing that is width-limited leaves empty bands above and
//! below the mosaic. This pass hands that slack to the first row: its tiles
//! grow until either the slack is used up or the row would no longer fit the
//! container width at 16:9.
//!
//! ```text
//! before                    after
//! .................         +-------+-------+
//!   +----+----+             |  W1   |  W2   |
//!   | W1 | W2 |             |       |       |
//! +----+----+----+          +----+--+-+-----+
//! | W3 | W4 | W5 |          | W3 | W4 | W5 |
//! +----+----+----+          +----+----+----+
//! .................         .................
//! ```
//!
//! Whatever slack is left after growing is split 10% above the mosaic and
//! 90% below it.

use smallvec::SmallVec;

use super::LayoutResult;
use super::grid::{self, GridPacking, RowPolicy};
use crate::mosaic::constants::layout::{
    GEOMETRY_EPSILON, NEGLIGIBLE_GROWTH, SLACK_TOP_BIAS, TILE_ASPECT,
};
use crate::mosaic::geometry::Rect;

/// Outcome of a successful redistribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackOutcome {
    /// Adjusted cells, in the same order as the input packing.
    pub cells: LayoutResult,
    /// Pixels added to the height of the first row.
    pub growth: f64,
    /// Growth as a percentage of the original row height.
    pub growth_percent: f64,
}

/// Largest growth of the first row that keeps it within the container width.
///
/// A row of `len` tiles at height `h` is `len * h * 16/9` wide, so the row
/// may grow to `width / (len * 16/9)`.
#[allow(clippy::cast_precision_loss)]
fn max_growth_by_width(container_width: f64, first_row_len: usize, row_height: f64) -> f64 {
    let denominator = first_row_len as f64 * TILE_ASPECT;
    if denominator < GEOMETRY_EPSILON {
        return 0.0;
    }
    (container_width / denominator - row_height).max(0.0)
}

/// Redistributes the vertical slack of a top-row-light packing into its first row.
///
/// Returns `None` when nothing changes: fewer than two rows, a packing that
/// is not top-row-light, or growth too small to matter. Callers fall back to
/// a bottom-row-light packing in that case when the grid is ragged.
#[must_use]
pub fn redistribute(packing: &GridPacking, container: &Rect) -> Option<SlackOutcome> {
    if packing.rows < 2 || packing.policy != RowPolicy::TopRowLight {
        return None;
    }

    let row_height = packing.tile_height;
    let first_row_len = packing.row_len(0);
    if row_height < GEOMETRY_EPSILON || first_row_len == 0 {
        return None;
    }

    let top_gap = (packing.bounds.y - container.y).max(0.0);
    let bottom_gap = (container.bottom() - packing.bounds.bottom()).max(0.0);
    let total_gap = top_gap + bottom_gap;

    let growth = total_gap.min(max_growth_by_width(container.width, first_row_len, row_height));
    let growth_percent = growth / row_height * 100.0;
    if growth <= NEGLIGIBLE_GROWTH || growth_percent <= NEGLIGIBLE_GROWTH {
        return None;
    }

    let leftover = total_gap - growth;
    let top = leftover.mul_add(SLACK_TOP_BIAS, container.y);
    let band = Rect::new(container.x, top, container.width, row_height + growth);
    let first_row = grid::pack(first_row_len, &band, RowPolicy::TopRowLight);
    if first_row.cells.len() != first_row_len {
        return None;
    }

    // Remaining rows sit directly below the grown row
    let shift = top + growth - packing.bounds.y;
    let mut cells: LayoutResult = SmallVec::with_capacity(packing.cells.len());
    cells.extend(first_row.cells);
    cells.extend(packing.cells[first_row_len..].iter().map(|cell| cell.translate(0.0, shift)));

    Some(SlackOutcome { cells, growth, growth_percent })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect { Rect::new(0.0, 0.0, 1600.0, 900.0) }

    fn packed(count: usize) -> GridPacking { grid::pack(count, &container(), RowPolicy::TopRowLight) }

    #[test]
    fn test_single_row_is_untouched() {
        assert!(redistribute(&packed(3), &container()).is_none());
    }

    #[test]
    fn test_bottom_row_light_is_untouched() {
        let packing = grid::pack(5, &container(), RowPolicy::BottomRowLight);
        assert!(redistribute(&packing, &container()).is_none());
    }

    #[test]
    fn test_height_limited_grid_has_no_slack() {
        // 2×2 at 1600×900 fills the container exactly
        assert!(redistribute(&packed(4), &container()).is_none());
    }

    #[test]
    fn test_five_tiles_grow_first_row() {
        let packing = packed(5);
        let outcome = redistribute(&packing, &container()).unwrap();

        // 300px rows leave 300px of slack; two tiles may grow to 450px tall
        assert!((outcome.growth - 150.0).abs() < 1e-6);
        assert!((outcome.growth_percent - 50.0).abs() < 1e-6);
        assert_eq!(outcome.cells.len(), 5);

        let first = outcome.cells[0];
        assert!((first.height - 450.0).abs() < 1e-6);
        assert!((first.width - 800.0).abs() < 1e-6);

        // Leftover 150px: 15px above, 135px below
        assert!((first.y - 15.0).abs() < 1e-6);
        let last = outcome.cells[4];
        assert!((last.y - (15.0 + 450.0)).abs() < 1e-6);
        assert!((container().bottom() - last.bottom() - 135.0).abs() < 1e-6);
    }

    #[test]
    fn test_growth_never_exceeds_container_width() {
        let frames = [
            Rect::new(0.0, 0.0, 1600.0, 900.0),
            Rect::new(0.0, 0.0, 1200.0, 1400.0),
            Rect::new(0.0, 0.0, 2560.0, 1080.0),
            Rect::new(0.0, 0.0, 700.0, 2000.0),
        ];

        for frame in frames {
            for count in 2..=20 {
                let packing = grid::pack(count, &frame, RowPolicy::TopRowLight);
                let Some(outcome) = redistribute(&packing, &frame) else {
                    continue;
                };
                let first_len = packing.row_len(0);
                let first_row = &outcome.cells[..first_len];
                let row_width: f64 = first_row.iter().map(|c| c.width).sum();

                assert!(row_width <= frame.width + 1e-6, "count {count} in {frame:?}");
                for cell in first_row {
                    assert!(cell.right() <= frame.right() + 1e-6);
                }
                for (i, cell) in outcome.cells.iter().enumerate() {
                    assert!(cell.bottom() <= frame.bottom() + 1e-6);
                    assert!(cell.y >= frame.y - 1e-6);
                    for other in &outcome.cells[i + 1..] {
                        assert!(!cell.overlaps(other, 1e-6));
                    }
                }
            }
        }
    }

    #[test]
    fn test_max_growth_by_width_guards_zero_denominator() {
        assert_eq!(max_growth_by_width(1600.0, 0, 300.0), 0.0);
        assert_eq!(max_growth_by_width(100.0, 4, 300.0), 0.0);
    }
}
