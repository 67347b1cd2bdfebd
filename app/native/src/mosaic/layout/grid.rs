//! Grid packer - equal 16:9 tiles arranged to cover the most area.
//!
//! Every column count from 1 to N is tried. For `cols` columns the grid needs
//! `rows = ceil(N / cols)` rows, and the largest uniform tile that fits is
//! limited either by the container width or by its height:
//!
//! ```text
//! scale = min(W / (16 * cols), H / (9 * rows))
//! tile  = 16 * scale  x  9 * scale
//! ```
//!
//! The candidate with the largest tile wins. Candidates are scanned in
//! increasing `cols` order and ties overwrite, so the widest grid wins a tie.
//! The winning mosaic is centered in the container.
//!
//! When N is not a multiple of `cols`, one row is short. The caller chooses
//! whether it is the first row or the last row; either way it is centered
//! horizontally.
//!
//! # Examples (1600×900, N = 5)
//!
//! ```text
//! top-row-light            bottom-row-light
//! +----+----+              +----+----+----+
//! | W1 | W2 |              | W1 | W2 | W3 |
//! +----+----+----+         +----+----+----+
//! | W3 | W4 | W5 |              | W4 | W5 |
//! +----+----+----+              +----+----+
//! ```

use smallvec::SmallVec;

use super::LayoutResult;
use crate::mosaic::constants::layout::{ASPECT_HEIGHT, ASPECT_WIDTH};
use crate::mosaic::geometry::Rect;

/// Where the short row of a ragged grid goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// The short row is the first row.
    #[default]
    TopRowLight,
    /// The short row is the last row.
    BottomRowLight,
}

/// Result of a grid packing, with the geometry needed by later passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridPacking {
    /// One rectangle per tile, row by row.
    pub cells: LayoutResult,
    /// Number of columns in a full row.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Width of every tile.
    pub tile_width: f64,
    /// Height of every tile.
    pub tile_height: f64,
    /// Number of tiles in the short row (equals `cols` when no row is short).
    pub short_row_len: usize,
    /// Bounding box of all cells.
    pub bounds: Rect,
    /// Placement of the short row.
    pub policy: RowPolicy,
}

impl GridPacking {
    /// Returns whether one row holds fewer tiles than the others.
    #[must_use]
    pub const fn is_ragged(&self) -> bool { self.short_row_len < self.cols }

    /// Index of the short row.
    #[must_use]
    pub const fn short_row(&self) -> usize {
        match self.policy {
            RowPolicy::TopRowLight => 0,
            RowPolicy::BottomRowLight => self.rows.saturating_sub(1),
        }
    }

    /// Number of tiles in the given row.
    #[must_use]
    pub const fn row_len(&self, row: usize) -> usize {
        if row == self.short_row() { self.short_row_len } else { self.cols }
    }
}

/// Grid candidate kept while scanning column counts.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cols: usize,
    rows: usize,
    scale: f64,
    area: f64,
}

/// Finds the best column/row factorization for `count` tiles.
#[allow(clippy::cast_precision_loss)]
fn best_candidate(count: usize, width: f64, height: f64) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for cols in 1..=count {
        let rows = count.div_ceil(cols);
        let scale = (width / (ASPECT_WIDTH * cols as f64))
            .min(height / (ASPECT_HEIGHT * rows as f64));
        let area = (ASPECT_WIDTH * scale) * (ASPECT_HEIGHT * scale);

        // Later candidates win ties
        if best.is_none_or(|b| area >= b.area) {
            best = Some(Candidate { cols, rows, scale, area });
        }
    }

    best
}

/// Packs `count` equal 16:9 tiles into `container`.
///
/// Returns an empty packing when `count` is zero or the container has no
/// usable area.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn pack(count: usize, container: &Rect, policy: RowPolicy) -> GridPacking {
    let usable = container.width.is_finite()
        && container.height.is_finite()
        && container.width > 0.0
        && container.height > 0.0;
    if count == 0 || !usable {
        return GridPacking { policy, ..GridPacking::default() };
    }

    let Some(Candidate { cols, rows, scale, .. }) =
        best_candidate(count, container.width, container.height)
    else {
        return GridPacking { policy, ..GridPacking::default() };
    };

    let tile_width = ASPECT_WIDTH * scale;
    let tile_height = ASPECT_HEIGHT * scale;
    let mosaic_width = cols as f64 * tile_width;
    let mosaic_height = rows as f64 * tile_height;
    let origin_x = container.x + (container.width - mosaic_width) / 2.0;
    let origin_y = container.y + (container.height - mosaic_height) / 2.0;

    let mut packing = GridPacking {
        cells: SmallVec::with_capacity(count),
        cols,
        rows,
        tile_width,
        tile_height,
        short_row_len: count - (rows - 1) * cols,
        bounds: Rect::new(origin_x, origin_y, mosaic_width, mosaic_height),
        policy,
    };

    for row in 0..rows {
        let len = packing.row_len(row);
        let row_x = ((cols - len) as f64 * tile_width).mul_add(0.5, origin_x);
        let y = (row as f64).mul_add(tile_height, origin_y);

        for col in 0..len {
            let x = (col as f64).mul_add(tile_width, row_x);
            packing.cells.push(Rect::new(x, y, tile_width, tile_height));
        }
    }

    packing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mosaic::constants::layout::TILE_ASPECT;

    fn container() -> Rect { Rect::new(0.0, 0.0, 1600.0, 900.0) }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
    }

    // ========================================================================
    // Degenerate Input
    // ========================================================================

    #[test]
    fn test_pack_empty() {
        let packing = pack(0, &container(), RowPolicy::TopRowLight);
        assert!(packing.cells.is_empty());
        assert_eq!(packing.rows, 0);
    }

    #[test]
    fn test_pack_degenerate_container() {
        for frame in [
            Rect::new(0.0, 0.0, 0.0, 900.0),
            Rect::new(0.0, 0.0, 1600.0, -1.0),
            Rect::new(0.0, 0.0, f64::NAN, 900.0),
        ] {
            assert!(pack(3, &frame, RowPolicy::TopRowLight).cells.is_empty());
        }
    }

    // ========================================================================
    // Factorization
    // ========================================================================

    #[test]
    fn test_pack_single_fills_matching_container() {
        let packing = pack(1, &container(), RowPolicy::TopRowLight);
        assert_eq!(packing.cells.len(), 1);
        assert_eq!(packing.cells[0], container());
    }

    #[test]
    fn test_pack_single_is_centered_in_wide_container() {
        let frame = Rect::new(0.0, 0.0, 2000.0, 900.0);
        let packing = pack(1, &frame, RowPolicy::TopRowLight);
        let cell = packing.cells[0];
        assert_close(cell.width, 1600.0);
        assert_close(cell.height, 900.0);
        assert_close(cell.x, 200.0);
        assert_close(frame.right() - cell.right(), 200.0);
    }

    #[test]
    fn test_pack_two_ties_prefer_more_columns() {
        // 1×2 and 2×1 give the same tile; the later (2 columns) wins
        let packing = pack(2, &container(), RowPolicy::TopRowLight);
        assert_eq!(packing.cols, 2);
        assert_eq!(packing.rows, 1);
        assert_close(packing.tile_width, 800.0);
        assert_close(packing.cells[1].x, 800.0);
    }

    #[test]
    fn test_pack_four_is_two_by_two() {
        let packing = pack(4, &container(), RowPolicy::TopRowLight);
        assert_eq!((packing.cols, packing.rows), (2, 2));
        assert!(!packing.is_ragged());
        assert_close(packing.tile_height, 450.0);
    }

    #[test]
    fn test_pack_five_top_row_light() {
        let packing = pack(5, &container(), RowPolicy::TopRowLight);
        assert_eq!((packing.cols, packing.rows), (3, 2));
        assert_eq!(packing.short_row_len, 2);
        assert!(packing.is_ragged());

        let cells = &packing.cells;
        // Short first row is centered horizontally
        let row_width = cells[1].right() - cells[0].x;
        assert_close(cells[0].x - packing.bounds.x, (packing.bounds.width - row_width) / 2.0);
        assert_close(cells[0].y, cells[1].y);
        // Full second row
        assert_close(cells[2].x, packing.bounds.x);
        assert!(cells[2].y > cells[0].y);
    }

    #[test]
    fn test_pack_five_bottom_row_light() {
        let packing = pack(5, &container(), RowPolicy::BottomRowLight);
        let cells = &packing.cells;
        assert_close(cells[0].x, packing.bounds.x);
        assert_close(cells[0].y, cells[2].y);
        assert!(cells[3].y > cells[0].y);
        assert_close(cells[3].x - packing.bounds.x, packing.tile_width / 2.0);
    }

    #[test]
    fn test_pack_respects_container_origin() {
        let frame = Rect::new(100.0, 500.0, 1600.0, 900.0);
        let packing = pack(1, &frame, RowPolicy::TopRowLight);
        assert_eq!(packing.cells[0], frame);
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    #[test]
    fn test_pack_invariants_across_counts_and_sizes() {
        let frames = [
            Rect::new(0.0, 0.0, 1600.0, 900.0),
            Rect::new(0.0, 0.0, 1080.0, 1920.0),
            Rect::new(0.0, 0.0, 3440.0, 1440.0),
            Rect::new(0.0, 0.0, 333.0, 777.0),
        ];

        for frame in frames {
            for policy in [RowPolicy::TopRowLight, RowPolicy::BottomRowLight] {
                for count in 1..=24 {
                    let packing = pack(count, &frame, policy);
                    let cells = &packing.cells;
                    assert_eq!(cells.len(), count, "count {count} in {frame:?}");

                    for (i, cell) in cells.iter().enumerate() {
                        assert!(cell.x >= frame.x - 1e-6 && cell.right() <= frame.right() + 1e-6);
                        assert!(cell.y >= frame.y - 1e-6 && cell.bottom() <= frame.bottom() + 1e-6);
                        assert!((cell.width / cell.height - TILE_ASPECT).abs() < 1e-9);

                        for other in &cells[i + 1..] {
                            assert!(!cell.overlaps(other, 1e-6), "{cell:?} overlaps {other:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_pack_is_deterministic() {
        let a = pack(7, &container(), RowPolicy::TopRowLight);
        let b = pack(7, &container(), RowPolicy::TopRowLight);
        assert_eq!(a, b);
    }
}
