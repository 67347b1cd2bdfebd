//! Geometric primitives shared by the layout engine and the drag controller.

use serde::{Deserialize, Serialize};

use super::constants::layout::TILE_ASPECT;

// ============================================================================
// Point
// ============================================================================

/// A point in 2D space, in container pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 { (other.x - self.x).hypot(other.y - self.y) }
}

// ============================================================================
// Size
// ============================================================================

/// Pixel dimensions of a layout surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Returns whether both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: f64,
    /// Y coordinate of the origin (top-left corner).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from edge coordinates.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Returns whether a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Returns whether the interiors of two rectangles intersect by more than `eps`.
    #[must_use]
    pub fn overlaps(&self, other: &Self, eps: f64) -> bool {
        self.x + eps < other.right()
            && self.right() > other.x + eps
            && self.y + eps < other.bottom()
            && self.bottom() > other.y + eps
    }

    /// Returns the same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Expresses the rectangle as percentages of a container.
    ///
    /// Used for the top-level focused region, which renderers position in
    /// relative units so it follows container resizes between passes.
    #[must_use]
    pub fn to_percent_of(&self, container: Size) -> Self {
        if !container.is_usable() {
            return Self::default();
        }
        Self::new(
            self.x / container.width * 100.0,
            self.y / container.height * 100.0,
            self.width / container.width * 100.0,
            self.height / container.height * 100.0,
        )
    }

    /// Largest tile-aspect rectangle that fits inside `bounds`, centered.
    #[must_use]
    pub fn fit_tile(bounds: &Self) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            let center = bounds.center();
            return Self::new(center.x, center.y, 0.0, 0.0);
        }
        let width = bounds.width.min(bounds.height * TILE_ASPECT);
        let height = width / TILE_ASPECT;
        Self::new(
            bounds.x + (bounds.width - width) / 2.0,
            bounds.y + (bounds.height - height) / 2.0,
            width,
            height,
        )
    }
}
