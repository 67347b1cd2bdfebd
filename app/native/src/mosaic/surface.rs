//! A layout surface: one independent mosaic with its own state.
//!
//! The surface owns everything that persists between layout passes for one
//! area of the screen: the active tiles, their slots, the container size,
//! the view preferences, the auto-fit solver and the drag controller.
//! Several surfaces never share state.
//!
//! Inputs arrive through setters (`set_streams`, `resize`, ...) and pointer
//! entry points; [`MosaicSurface::layout`] turns the current state into one
//! rectangle per tile.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::click::{ClickTracker, FullscreenRequest};
use super::constants::layout::DEFAULT_FOCUS_HEIGHT_PERCENT;
use super::drag::{
    DragConfig, DragController, DragSession, GestureOutcome, GesturePhase, ListenerHost,
    NoopListeners, TileBounds,
};
use super::error::MosaicResult;
use super::geometry::{Point, Rect, Size};
use super::layout::{AutoFitSolver, LayoutRequest, calculate_layout};
use super::positions::PositionMap;
use super::route;
use super::stream::Tile;
use crate::config::{FocusHeight, MultiviewConfig, ViewMode};

// ============================================================================
// Types
// ============================================================================

/// A tile with its computed rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedTile {
    /// The tile.
    #[serde(flatten)]
    pub tile: Tile,
    /// Slot the tile occupies after ordering.
    pub slot: usize,
    /// Computed rectangle in container pixels.
    pub rect: Rect,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerRelease {
    /// What the gesture did.
    pub outcome: GestureOutcome,
    /// Set when the release completed a double click on a tile.
    pub fullscreen: Option<FullscreenRequest>,
}

/// Construction options for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    /// Initial view mode.
    pub view_mode: ViewMode,
    /// Initial focus height preference.
    pub focus_height: FocusHeight,
    /// Focus band assumed by the auto-fit solver while measuring.
    pub auto_fit_base_focus: f64,
    /// Drag tunables.
    pub drag: DragConfig,
    /// Double-click window.
    pub double_click: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self { Self::from(&MultiviewConfig::default()) }
}

impl From<&MultiviewConfig> for SurfaceOptions {
    fn from(config: &MultiviewConfig) -> Self {
        Self {
            view_mode: config.view_mode,
            focus_height: config.focus_height,
            auto_fit_base_focus: config.auto_fit_base_focus,
            drag: DragConfig {
                threshold: config.drag_threshold,
                frame_interval_ms: config.frame_interval_ms,
            },
            double_click: Duration::from_millis(config.double_click_ms),
        }
    }
}

// ============================================================================
// MosaicSurface
// ============================================================================

/// One independent layout surface.
#[derive(Debug)]
pub struct MosaicSurface<H: ListenerHost = NoopListeners> {
    tiles: Vec<Tile>,
    positions: PositionMap,
    size: Size,
    view_mode: ViewMode,
    focus_height: FocusHeight,
    focus_percent: f64,
    solver: AutoFitSolver,
    drag: DragController<H>,
    clicks: ClickTracker,
    rendered: Vec<TileBounds>,
}

impl Default for MosaicSurface<NoopListeners> {
    fn default() -> Self { Self::new(NoopListeners, SurfaceOptions::default()) }
}

impl<H: ListenerHost> MosaicSurface<H> {
    /// Creates an empty surface.
    pub fn new(host: H, options: SurfaceOptions) -> Self {
        let mut surface = Self {
            tiles: Vec::new(),
            positions: PositionMap::new(),
            size: Size::default(),
            view_mode: options.view_mode,
            focus_height: options.focus_height,
            focus_percent: DEFAULT_FOCUS_HEIGHT_PERCENT,
            solver: AutoFitSolver::new(options.auto_fit_base_focus),
            drag: DragController::new(host, options.drag),
            clicks: ClickTracker::new(options.double_click),
            rendered: Vec::new(),
        };
        surface.refresh_focus_height();
        surface
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Replaces the active tiles.
    ///
    /// Tiles that stay keep their relative order, removed tiles are pruned
    /// and new tiles are appended. Duplicate identities keep their first
    /// occurrence.
    pub fn set_streams(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        let mut unique: Vec<Tile> = Vec::new();
        for tile in tiles {
            if unique.iter().any(|t| t.id == tile.id) {
                tracing::warn!(id = %tile.id, "duplicate stream ignored");
                continue;
            }
            unique.push(tile);
        }

        let ids: Vec<&str> = unique.iter().map(|t| t.id.as_str()).collect();
        self.positions.sync(ids.as_slice());
        self.rendered.retain(|b| ids.contains(&b.id.as_str()));
        self.tiles = unique;
        self.refresh_focus_height();
    }

    /// Updates the container size.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.refresh_focus_height();
    }

    /// Switches between focused and grid arrangements.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        self.refresh_focus_height();
    }

    /// Sets the focus height preference.
    pub fn set_focus_height(&mut self, focus_height: FocusHeight) {
        self.focus_height = focus_height;
        self.solver.invalidate();
        self.refresh_focus_height();
    }

    fn refresh_focus_height(&mut self) {
        if let Some(percent) = self.focus_height.percent() {
            self.focus_percent = percent;
            return;
        }
        if let Some(percent) =
            self.solver.observe(self.view_mode, self.tiles.len(), self.size, self.focus_height)
        {
            self.focus_percent = percent;
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Active tiles in the order they were supplied.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] { &self.tiles }

    /// Current slot assignment.
    #[must_use]
    pub const fn positions(&self) -> &PositionMap { &self.positions }

    /// Current container size.
    #[must_use]
    pub const fn size(&self) -> Size { self.size }

    /// Current view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode { self.view_mode }

    /// Focus height in effect, after auto-fit.
    #[must_use]
    pub const fn focus_height_percent(&self) -> f64 { self.focus_percent }

    /// The layout request for the current state.
    #[must_use]
    pub fn request(&self) -> LayoutRequest {
        LayoutRequest::new(
            self.tiles.len(),
            self.size.width,
            self.size.height,
            self.view_mode,
            self.focus_percent,
        )
    }

    /// Active tiles in slot order.
    #[must_use]
    pub fn ordered_tiles(&self) -> Vec<Tile> { self.positions.order_tiles(&self.tiles) }

    /// Computes the rectangle of every active tile, in slot order.
    #[must_use]
    pub fn layout(&self) -> Vec<PlacedTile> {
        let rects = calculate_layout(&self.request());
        self.ordered_tiles()
            .into_iter()
            .zip(rects)
            .enumerate()
            .map(|(slot, (tile, rect))| PlacedTile { tile, slot, rect })
            .collect()
    }

    /// The focused tile's rectangle as percentages of the container.
    ///
    /// `None` outside focused mode or when nothing is laid out.
    #[must_use]
    pub fn focus_region_percent(&self) -> Option<Rect> {
        if self.view_mode != ViewMode::Focused {
            return None;
        }
        calculate_layout(&self.request()).first().map(|rect| rect.to_percent_of(self.size))
    }

    /// Path form of the current ordering.
    #[must_use]
    pub fn route_path(&self) -> String { route::encode_path(&self.ordered_tiles()) }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Exchanges the slots of two tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if either tile is not active.
    pub fn swap(&mut self, a: &str, b: &str) -> MosaicResult<()> { self.positions.swap(a, b) }

    /// Moves a tile into the focused slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not active or the surface is empty.
    pub fn promote(&mut self, id: &str) -> MosaicResult<()> { self.positions.promote(id) }

    /// Reorders from user-typed text. See [`route::parse_order_text`].
    ///
    /// # Errors
    ///
    /// Propagates the rebuild error, which parsing already rules out by
    /// never repeating an identity.
    pub fn reorder_from_text(&mut self, text: &str) -> MosaicResult<()> {
        let ids: Vec<&str> = self.tiles.iter().map(|t| t.id.as_str()).collect();
        let ordered = route::parse_order_text(text, &ids);
        self.positions.set_all(ordered.as_slice())
    }

    // ========================================================================
    // Pointer Input
    // ========================================================================

    /// Stores the bounds the renderer last drew, used for drop hit-testing.
    pub fn record_rendered_bounds(&mut self, bounds: Vec<TileBounds>) { self.rendered = bounds; }

    /// Uses the computed layout as the rendered bounds.
    pub fn record_layout_bounds(&mut self) {
        self.rendered = self
            .layout()
            .into_iter()
            .map(|placed| TileBounds::new(placed.tile.id, placed.rect))
            .collect();
    }

    /// Pointer pressed on a tile.
    pub fn pointer_down(&mut self, id: &str, at: Point) { self.drag.pointer_down(id, at); }

    /// Pointer moved.
    pub fn pointer_move(&mut self, at: Point) -> GesturePhase { self.drag.pointer_move(at) }

    /// Frame callback; returns the drag position committed this frame.
    pub fn on_frame(&mut self, now: Instant) -> Option<Point> { self.drag.on_frame(now) }

    /// Pointer released.
    pub fn pointer_up(&mut self, at: Point, now: Instant) -> PointerRelease {
        let outcome = self.drag.pointer_up(at, &self.rendered, &mut self.positions);
        let fullscreen = match &outcome {
            GestureOutcome::Click { id } => self.clicks.click(id, now),
            _ => {
                self.clicks.reset();
                None
            }
        };
        PointerRelease { outcome, fullscreen }
    }

    /// Pointer cancelled.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        self.clicks.reset();
        self.drag.pointer_cancel()
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn gesture_phase(&self) -> GesturePhase { self.drag.phase() }

    /// The live drag session, if any.
    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> { self.drag.session() }
}
