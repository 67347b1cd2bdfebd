//! Internal constants for mosaic layout and gesture tuning.
//!
//! This module centralizes the magic numbers used throughout the layout
//! engine and the drag controller.
//!
//! # Organization
//!
//! Constants are grouped by functionality:
//! - `layout` - Tile geometry and packing thresholds
//! - `gesture` - Pointer gesture thresholds
//! - `timing` - Frame coalescing and multi-click windows

/// Tile geometry and packing thresholds.
pub mod layout {
    /// Horizontal units of the tile aspect ratio.
    pub const ASPECT_WIDTH: f64 = 16.0;

    /// Vertical units of the tile aspect ratio.
    pub const ASPECT_HEIGHT: f64 = 9.0;

    /// Width over height of every tile.
    pub const TILE_ASPECT: f64 = ASPECT_WIDTH / ASPECT_HEIGHT;

    /// Growth (pixels, or percent of the row height) at or below which slack
    /// redistribution is treated as having no effect.
    ///
    /// Arbitrary; tune freely.
    pub const NEGLIGIBLE_GROWTH: f64 = 1e-6;

    /// Fraction of the leftover slack placed above the mosaic after the first
    /// row has grown. The remainder goes below it.
    pub const SLACK_TOP_BIAS: f64 = 0.1;

    /// Denominators smaller than this are treated as zero.
    pub const GEOMETRY_EPSILON: f64 = 1e-9;

    /// Default focus row height when no preference is set (percent).
    pub const DEFAULT_FOCUS_HEIGHT_PERCENT: f64 = 70.0;
}

/// Pointer gesture thresholds.
pub mod gesture {
    /// Pointer travel (pixels) beyond which a press becomes a drag.
    pub const DRAG_THRESHOLD_PX: f64 = 5.0;
}

/// Timing constants for frame coalescing and multi-click detection.
pub mod timing {
    /// Target interval between visual drag commits (ms), one display frame.
    pub const FRAME_INTERVAL_MS: u64 = 16;

    /// Maximum delay between two clicks on one tile to count as a double click (ms).
    pub const DOUBLE_CLICK_MS: u64 = 300;
}
