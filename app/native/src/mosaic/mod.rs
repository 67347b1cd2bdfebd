//! Multi-stream mosaic engine.
//!
//! Places any number of 16:9 stream tiles on a layout surface, either as one
//! focused tile above a grid of the rest or as an evenly packed grid, and
//! lets the user reorder tiles by dragging them onto each other.
//!
//! # Features
//!
//! - Area-maximizing grid packing with centered short rows
//! - Slack redistribution into the first row of width-limited grids
//! - Focused mode with an automatically solved focus height
//! - Slot-based ordering with swap, rebuild and compaction
//! - Drag gesture state machine with per-frame move coalescing
//! - Path encoding of the current ordering
//!
//! # Usage
//!
//! ```bash
//! multiview layout --count 5 --width 1600 --height 900 --mode grid
//! multiview autofit --count 5 --width 1600 --height 900
//! multiview path encode shroud abc123:youtube
//! ```

pub mod click;
pub mod constants;
pub mod drag;
pub mod error;
pub mod frame_coalescer;
pub mod geometry;
pub mod layout;
pub mod positions;
pub mod route;
pub mod stream;
pub mod surface;

// Re-export commonly used types
pub use click::{ClickTracker, FullscreenRequest};
pub use drag::{
    DragConfig, DragController, DragSession, GestureOutcome, GesturePhase, ListenerHost,
    NoopListeners, TileBounds, hit_test,
};
pub use error::{MosaicError, MosaicResult};
pub use frame_coalescer::FrameCoalescer;
pub use geometry::{Point, Rect, Size};
pub use layout::{
    AutoFitSolver, LayoutRequest, LayoutResult, RowPolicy, auto_fit_focus_height,
    calculate_layout, compose_focused, pack,
};
pub use positions::PositionMap;
pub use route::{decode_path, encode_path, parse_order_text};
pub use stream::{Platform, Tile};
pub use surface::{MosaicSurface, PlacedTile, PointerRelease, SurfaceOptions};
