//! Drag-to-reorder gesture tracking.
//!
//! Converts raw pointer events on the layout surface into tile swaps.
//!
//! # Flow
//!
//! 1. Pointer goes down on a tile: the gesture is armed and the host attaches
//!    its surface-wide move/up listeners
//! 2. Pointer travels more than the threshold: a drag session starts
//! 3. Moves during the drag are coalesced to one visual commit per frame
//! 4. Pointer goes up:
//!    - If still armed, the gesture was a click on the tile
//!    - If dragging, the release point is hit-tested against the other
//!      tiles' last rendered bounds and exactly one hit swaps the two tiles
//!
//! ```text
//! Idle --down--> Armed --move > threshold--> Dragging
//!  ^               |                            |
//!  +------up-------+ (click)                    |
//!  +------up (hit test, maybe swap)-------------+
//!  +------cancel (no swap)----------------------+
//! ```
//!
//! Listeners are held exactly while the gesture is armed or dragging and are
//! released on every exit: up, cancel, or the controller being dropped.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::constants::{gesture::DRAG_THRESHOLD_PX, timing::FRAME_INTERVAL_MS};
use super::frame_coalescer::FrameCoalescer;
use super::geometry::{Point, Rect};
use super::positions::PositionMap;

// ============================================================================
// Listener Host
// ============================================================================

/// Surface-wide pointer listener registration owned by the embedding host.
pub trait ListenerHost {
    /// Starts delivering move/up/cancel events for the whole surface.
    fn attach(&mut self);

    /// Stops delivering them.
    fn detach(&mut self);
}

/// Host that needs no listener registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListeners;

impl ListenerHost for NoopListeners {
    fn attach(&mut self) {}

    fn detach(&mut self) {}
}

// ============================================================================
// Types
// ============================================================================

/// Public phase of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// Pointer is down but has not travelled past the threshold.
    Armed,
    /// A tile is being dragged.
    Dragging,
}

/// A drag in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    /// Tile being dragged.
    pub dragged_id: String,
    /// Where the pointer went down.
    pub origin: Point,
    /// Last committed pointer position.
    pub current: Point,
    /// Whether the session is still live.
    pub active: bool,
}

impl DragSession {
    /// Offset of the dragged tile from its laid-out position.
    #[must_use]
    pub fn offset(&self) -> (f64, f64) { (self.current.x - self.origin.x, self.current.y - self.origin.y) }
}

/// Last rendered bounds of one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileBounds {
    /// Tile identity.
    pub id: String,
    /// Rendered rectangle.
    pub rect: Rect,
}

impl TileBounds {
    /// Creates new tile bounds.
    #[must_use]
    pub fn new(id: impl Into<String>, rect: Rect) -> Self { Self { id: id.into(), rect } }
}

/// What a pointer-up (or cancel) produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was in progress.
    Ignored,
    /// Pointer went up before the threshold; a click on the tile.
    Click {
        /// Clicked tile.
        id: String,
    },
    /// The dragged tile was dropped on another tile and they swapped slots.
    Swapped {
        /// Tile that was dragged.
        dragged: String,
        /// Tile it was dropped on.
        target: String,
    },
    /// The drag ended without a unique drop target, or was cancelled.
    Discarded {
        /// Tile that was dragged.
        dragged: String,
    },
}

/// Tunables of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Pointer travel (pixels) beyond which a press becomes a drag.
    pub threshold: f64,
    /// Minimum interval between visual commits while dragging (ms).
    pub frame_interval_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: DRAG_THRESHOLD_PX,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Armed { id: String, origin: Point },
    Dragging(DragSession),
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Finds the single tile under `point`, ignoring `exclude`.
///
/// Returns `None` when no tile or more than one tile contains the point.
#[must_use]
pub fn hit_test<'a>(point: Point, bounds: &'a [TileBounds], exclude: &str) -> Option<&'a str> {
    let mut hits = bounds.iter().filter(|b| b.id != exclude && b.rect.contains(point));
    let first = hits.next()?;
    if hits.next().is_some() {
        return None;
    }
    Some(first.id.as_str())
}

// ============================================================================
// DragController
// ============================================================================

/// Gesture state machine for one layout surface.
#[derive(Debug)]
pub struct DragController<H: ListenerHost> {
    host: H,
    listening: bool,
    state: DragState,
    frames: FrameCoalescer<Point>,
    config: DragConfig,
}

impl Default for DragController<NoopListeners> {
    fn default() -> Self { Self::new(NoopListeners, DragConfig::default()) }
}

impl<H: ListenerHost> DragController<H> {
    /// Creates an idle controller.
    pub fn new(host: H, config: DragConfig) -> Self {
        Self {
            host,
            listening: false,
            state: DragState::Idle,
            frames: FrameCoalescer::with_millis(config.frame_interval_ms),
            config,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        match self.state {
            DragState::Idle => GesturePhase::Idle,
            DragState::Armed { .. } => GesturePhase::Armed,
            DragState::Dragging(_) => GesturePhase::Dragging,
        }
    }

    /// The live drag session, if dragging.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Returns whether surface-wide listeners are currently attached.
    #[must_use]
    pub const fn is_listening(&self) -> bool { self.listening }

    /// The listener host.
    #[must_use]
    pub const fn host(&self) -> &H { &self.host }

    /// Pointer pressed on a tile.
    ///
    /// Ignored while another gesture is in progress.
    pub fn pointer_down(&mut self, id: &str, at: Point) {
        if !matches!(self.state, DragState::Idle) {
            tracing::debug!(id, "pointer down ignored, gesture already in progress");
            return;
        }
        self.acquire_listeners();
        self.state = DragState::Armed { id: id.to_string(), origin: at };
    }

    /// Pointer moved anywhere on the surface.
    ///
    /// Returns the new phase. Crossing the threshold starts a drag with the
    /// current position committed immediately; later moves are staged for
    /// the next frame.
    pub fn pointer_move(&mut self, at: Point) -> GesturePhase {
        match &mut self.state {
            DragState::Idle => {}
            DragState::Armed { id, origin } => {
                if origin.distance_to(at) > self.config.threshold {
                    tracing::debug!(id = %id, "drag started");
                    let session = DragSession {
                        dragged_id: std::mem::take(id),
                        origin: *origin,
                        current: at,
                        active: true,
                    };
                    self.state = DragState::Dragging(session);
                }
            }
            DragState::Dragging(_) => self.frames.stage(at),
        }
        self.phase()
    }

    /// Frame callback. Commits the latest staged position if a frame is due
    /// and returns it.
    pub fn on_frame(&mut self, now: Instant) -> Option<Point> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        let point = self.frames.poll(now)?;
        session.current = point;
        Some(point)
    }

    /// Pointer released at `at`.
    ///
    /// `bounds` are the last rendered bounds of the tiles. A drag dropped on
    /// exactly one other tile swaps the two in `positions`, immediately and
    /// regardless of any pending frame.
    pub fn pointer_up(
        &mut self,
        at: Point,
        bounds: &[TileBounds],
        positions: &mut PositionMap,
    ) -> GestureOutcome {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        self.release_listeners();

        match state {
            DragState::Idle => GestureOutcome::Ignored,
            DragState::Armed { id, .. } => GestureOutcome::Click { id },
            DragState::Dragging(session) => {
                let dragged = session.dragged_id;
                let Some(target) = hit_test(at, bounds, &dragged) else {
                    tracing::debug!(dragged = %dragged, "drop without a unique target");
                    return GestureOutcome::Discarded { dragged };
                };

                match positions.swap(&dragged, target) {
                    Ok(()) => GestureOutcome::Swapped { target: target.to_string(), dragged },
                    Err(err) => {
                        tracing::warn!(dragged = %dragged, error = %err, "drop target is not positioned");
                        GestureOutcome::Discarded { dragged }
                    }
                }
            }
        }
    }

    /// Pointer cancelled by the platform. Never swaps.
    pub fn pointer_cancel(&mut self) -> GestureOutcome {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        self.release_listeners();

        match state {
            DragState::Idle | DragState::Armed { .. } => GestureOutcome::Ignored,
            DragState::Dragging(session) => {
                tracing::debug!(dragged = %session.dragged_id, "drag cancelled");
                GestureOutcome::Discarded { dragged: session.dragged_id }
            }
        }
    }

    fn acquire_listeners(&mut self) {
        if !self.listening {
            self.host.attach();
            self.listening = true;
        }
    }

    /// Ends listener registration. Any staged move is dropped; the release
    /// point supersedes it.
    fn release_listeners(&mut self) {
        self.frames.clear();
        if self.listening {
            self.host.detach();
            self.listening = false;
        }
    }
}

impl<H: ListenerHost> Drop for DragController<H> {
    fn drop(&mut self) {
        if !matches!(self.state, DragState::Idle) {
            tracing::debug!("controller dropped mid-gesture");
        }
        self.release_listeners();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    /// Host recording attach/detach calls.
    #[derive(Debug, Clone, Default)]
    struct CountingHost {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ListenerHost for CountingHost {
        fn attach(&mut self) { self.log.borrow_mut().push("attach"); }

        fn detach(&mut self) { self.log.borrow_mut().push("detach"); }
    }

    fn positions() -> PositionMap { PositionMap::from_ordered(&["x", "y", "z"]).unwrap() }

    fn bounds() -> Vec<TileBounds> {
        vec![
            TileBounds::new("x", Rect::from_edges(0.0, 50.0, 190.0, 150.0)),
            TileBounds::new("y", Rect::from_edges(200.0, 50.0, 300.0, 150.0)),
            TileBounds::new("z", Rect::from_edges(0.0, 200.0, 300.0, 300.0)),
        ]
    }

    #[test]
    fn test_drag_scenario_swaps_once() {
        let host = CountingHost::default();
        let log = Rc::clone(&host.log);
        let mut controller = DragController::new(host, DragConfig::default());
        let mut map = positions();

        controller.pointer_down("x", Point::new(100.0, 100.0));
        assert_eq!(controller.phase(), GesturePhase::Armed);

        assert_eq!(controller.pointer_move(Point::new(100.0, 103.0)), GesturePhase::Armed);
        assert_eq!(controller.pointer_move(Point::new(120.0, 100.0)), GesturePhase::Dragging);
        assert_eq!(controller.session().unwrap().current, Point::new(120.0, 100.0));

        let outcome = controller.pointer_up(Point::new(250.0, 100.0), &bounds(), &mut map);
        assert_eq!(
            outcome,
            GestureOutcome::Swapped { dragged: "x".to_string(), target: "y".to_string() }
        );
        assert_eq!(map.ordered_ids(), vec!["y", "x", "z"]);
        assert_eq!(controller.phase(), GesturePhase::Idle);
        assert_eq!(*log.borrow(), vec!["attach", "detach"]);

        // A second release does nothing
        let outcome = controller.pointer_up(Point::new(250.0, 100.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(map.ordered_ids(), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_release_before_threshold_is_click() {
        let mut controller = DragController::default();
        let mut map = positions();
        controller.pointer_down("z", Point::new(10.0, 10.0));
        controller.pointer_move(Point::new(13.0, 14.0));
        let outcome = controller.pointer_up(Point::new(13.0, 14.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Click { id: "z".to_string() });
        assert_eq!(map, positions());
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut controller = DragController::default();
        controller.pointer_down("x", Point::new(0.0, 0.0));
        assert_eq!(controller.pointer_move(Point::new(3.0, 4.0)), GesturePhase::Armed);
        assert_eq!(controller.pointer_move(Point::new(3.0, 4.1)), GesturePhase::Dragging);
    }

    #[test]
    fn test_drop_on_nothing_is_discarded() {
        let mut controller = DragController::default();
        let mut map = positions();
        controller.pointer_down("x", Point::new(100.0, 100.0));
        controller.pointer_move(Point::new(100.0, 180.0));
        let outcome = controller.pointer_up(Point::new(500.0, 500.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Discarded { dragged: "x".to_string() });
        assert_eq!(map, positions());
    }

    #[test]
    fn test_drop_on_self_is_discarded() {
        let mut controller = DragController::default();
        let mut map = positions();
        controller.pointer_down("x", Point::new(100.0, 100.0));
        controller.pointer_move(Point::new(150.0, 100.0));
        let outcome = controller.pointer_up(Point::new(150.0, 100.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Discarded { dragged: "x".to_string() });
        assert_eq!(map, positions());
    }

    #[test]
    fn test_ambiguous_hit_is_discarded() {
        let overlapping = vec![
            TileBounds::new("y", Rect::new(0.0, 0.0, 100.0, 100.0)),
            TileBounds::new("z", Rect::new(50.0, 50.0, 100.0, 100.0)),
        ];
        assert_eq!(hit_test(Point::new(75.0, 75.0), &overlapping, "x"), None);
        assert_eq!(hit_test(Point::new(25.0, 25.0), &overlapping, "x"), Some("y"));
        assert_eq!(hit_test(Point::new(75.0, 75.0), &overlapping, "y"), Some("z"));
    }

    #[test]
    fn test_cancel_never_swaps() {
        let host = CountingHost::default();
        let log = Rc::clone(&host.log);
        let mut controller = DragController::new(host, DragConfig::default());
        let mut map = positions();

        controller.pointer_down("x", Point::new(100.0, 100.0));
        controller.pointer_move(Point::new(250.0, 100.0));
        let outcome = controller.pointer_cancel();
        assert_eq!(outcome, GestureOutcome::Discarded { dragged: "x".to_string() });
        assert!(!controller.is_listening());

        // The release that follows a cancel is ignored
        let outcome = controller.pointer_up(Point::new(250.0, 100.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(map, positions());
        assert_eq!(*log.borrow(), vec!["attach", "detach"]);
    }

    #[test]
    fn test_moves_commit_once_per_frame() {
        let mut controller = DragController::default();
        let start = Instant::now();
        controller.pointer_down("x", Point::new(0.0, 0.0));
        controller.pointer_move(Point::new(10.0, 0.0));

        controller.pointer_move(Point::new(20.0, 0.0));
        controller.pointer_move(Point::new(30.0, 0.0));
        assert_eq!(controller.on_frame(start), Some(Point::new(30.0, 0.0)));
        assert_eq!(controller.session().unwrap().offset(), (30.0, 0.0));

        controller.pointer_move(Point::new(40.0, 0.0));
        assert_eq!(controller.on_frame(start + Duration::from_millis(4)), None);
        assert_eq!(controller.session().unwrap().current, Point::new(30.0, 0.0));
        assert_eq!(
            controller.on_frame(start + Duration::from_millis(16)),
            Some(Point::new(40.0, 0.0))
        );
    }

    #[test]
    fn test_release_with_pending_frame_still_swaps() {
        let mut controller = DragController::default();
        let mut map = positions();
        controller.pointer_down("x", Point::new(100.0, 100.0));
        controller.pointer_move(Point::new(120.0, 100.0));
        controller.pointer_move(Point::new(240.0, 100.0));
        let outcome = controller.pointer_up(Point::new(250.0, 100.0), &bounds(), &mut map);
        assert!(matches!(outcome, GestureOutcome::Swapped { .. }));
        assert_eq!(map.slot("x"), Some(1));
    }

    #[test]
    fn test_drop_releases_listeners() {
        let host = CountingHost::default();
        let log = Rc::clone(&host.log);
        {
            let mut controller = DragController::new(host, DragConfig::default());
            controller.pointer_down("x", Point::new(0.0, 0.0));
            assert!(controller.is_listening());
        }
        assert_eq!(*log.borrow(), vec!["attach", "detach"]);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let host = CountingHost::default();
        let log = Rc::clone(&host.log);
        let mut controller = DragController::new(host, DragConfig::default());
        controller.pointer_down("x", Point::new(0.0, 0.0));
        controller.pointer_down("y", Point::new(50.0, 50.0));
        let mut map = positions();
        let outcome = controller.pointer_up(Point::new(0.0, 0.0), &bounds(), &mut map);
        assert_eq!(outcome, GestureOutcome::Click { id: "x".to_string() });
        assert_eq!(log.borrow().len(), 2);
    }
}
