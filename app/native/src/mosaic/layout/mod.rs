//! Layout algorithms for the stream mosaic.
//!
//! Every layout takes a tile count and a container size and returns one
//! rectangle per tile, in slot order. Layouts are pure: identical requests
//! always produce identical rectangles, and nothing is cached between calls.
//!
//! # Supported Layouts
//!
//! - **Focused**: One primary tile in a band at the top, the rest packed below
//! - **Grid**: All tiles equal-sized and packed to cover the most area
//!
//! Grid mode packs with the short row first and then hands unused vertical
//! slack to that row. When the slack cannot be used and a row is short, it
//! falls back to putting the short row last.
//!
//! # Performance
//!
//! Layout results use `SmallVec` to avoid heap allocations for surfaces with
//! up to 16 tiles (the common case).

pub mod autofit;
mod focused;
pub mod grid;
mod helpers;
pub mod slack;

pub use autofit::{AutoFitSolver, auto_fit_focus_height};
pub use grid::{GridPacking, RowPolicy};
use serde::{Deserialize, Serialize};
pub use slack::SlackOutcome;
use smallvec::SmallVec;

use crate::config::ViewMode;
use crate::mosaic::constants::layout::DEFAULT_FOCUS_HEIGHT_PERCENT;
use crate::mosaic::error::{MosaicError, MosaicResult};
use crate::mosaic::geometry::Rect;

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for layout results.
///
/// Most surfaces show fewer than 16 streams, so this allows layout results
/// to be stored on the stack without heap allocation in the common case.
pub const LAYOUT_INLINE_CAP: usize = 16;

/// Result of a layout calculation: one rectangle per tile, in slot order.
pub type LayoutResult = SmallVec<[Rect; LAYOUT_INLINE_CAP]>;

// ============================================================================
// Layout Request
// ============================================================================

/// The complete input of a layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    /// Number of tiles.
    pub count: usize,
    /// Container width in pixels.
    pub container_width: f64,
    /// Container height in pixels.
    pub container_height: f64,
    /// Focused or grid arrangement.
    pub view_mode: ViewMode,
    /// Height of the focus band (0-100). Ignored in grid mode.
    pub focus_height_percent: f64,
}

impl LayoutRequest {
    /// Creates a request, clamping out-of-range values.
    ///
    /// Negative or NaN dimensions become zero, which lays out nothing. A NaN
    /// focus height becomes the default.
    #[must_use]
    pub fn new(
        count: usize,
        container_width: f64,
        container_height: f64,
        view_mode: ViewMode,
        focus_height_percent: f64,
    ) -> Self {
        Self {
            count,
            container_width: sanitize_dimension(container_width),
            container_height: sanitize_dimension(container_height),
            view_mode,
            focus_height_percent: helpers::clamp_percent(
                focus_height_percent,
                DEFAULT_FOCUS_HEIGHT_PERCENT,
            ),
        }
    }

    /// Creates a request, rejecting non-finite or negative dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidDimensions`] when either dimension is
    /// negative or not finite.
    pub fn checked(
        count: usize,
        container_width: f64,
        container_height: f64,
        view_mode: ViewMode,
        focus_height_percent: f64,
    ) -> MosaicResult<Self> {
        for (name, value) in [("width", container_width), ("height", container_height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MosaicError::invalid_dimensions(format!(
                    "container {name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(Self::new(count, container_width, container_height, view_mode, focus_height_percent))
    }

    /// The container as a rectangle at the origin.
    #[must_use]
    pub const fn container(&self) -> Rect {
        Rect::new(0.0, 0.0, self.container_width, self.container_height)
    }
}

fn sanitize_dimension(value: f64) -> f64 { if value.is_finite() { value.max(0.0) } else { 0.0 } }

// ============================================================================
// Main Layout Function
// ============================================================================

/// Calculates tile rectangles for a request.
///
/// Focused mode, or a single tile, uses the focused composer. Everything else
/// is packed as a grid.
///
/// # Returns
///
/// One rectangle per tile, or nothing when the request has no tiles or the
/// container has no area.
#[must_use]
pub fn calculate_layout(request: &LayoutRequest) -> LayoutResult {
    let container = request.container();

    let result = if request.view_mode == ViewMode::Focused || request.count <= 1 {
        focused::layout(request.count, &container, request.focus_height_percent)
    } else {
        layout_grid(request.count, &container)
    };

    tracing::debug!(
        count = request.count,
        mode = %request.view_mode,
        width = request.container_width,
        height = request.container_height,
        cells = result.len(),
        "calculated layout"
    );

    result
}

/// Packs `count` tiles into a `width` x `height` container as a grid.
///
/// This is the grid arrangement used by [`calculate_layout`], including slack
/// redistribution and the bottom-row-light fallback.
#[must_use]
pub fn pack(count: usize, width: f64, height: f64) -> LayoutResult {
    layout_grid(count, &Rect::new(0.0, 0.0, sanitize_dimension(width), sanitize_dimension(height)))
}

/// Focused arrangement of `count` tiles in a `width` x `height` container.
#[must_use]
pub fn compose_focused(count: usize, width: f64, height: f64, focus_height_percent: f64) -> LayoutResult {
    let container = Rect::new(0.0, 0.0, sanitize_dimension(width), sanitize_dimension(height));
    focused::layout(count, &container, focus_height_percent)
}

fn layout_grid(count: usize, container: &Rect) -> LayoutResult {
    let packing = grid::pack(count, container, RowPolicy::TopRowLight);

    if let Some(outcome) = slack::redistribute(&packing, container) {
        tracing::trace!(growth = outcome.growth, percent = outcome.growth_percent, "grew first row");
        return outcome.cells;
    }

    if packing.is_ragged() {
        return grid::pack(count, container, RowPolicy::BottomRowLight).cells;
    }

    packing.cells
}
