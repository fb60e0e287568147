//! Coordinate mapping between the browser viewport and the room.
//!
//! Pointer and drop events arrive in viewport (client) coordinates. The
//! canvas may scroll or reflow at any time, so hosts pass the canvas's
//! current bounding rect with every event and nothing here is cached.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

/// A point in either viewport or room-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// The canvas element's bounding rect in viewport coordinates, as reported by
/// `getBoundingClientRect()` at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner of the canvas in viewport coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Convert a viewport point to room-local coordinates. The result is not
    /// clamped; points outside the canvas map to negative or oversized values.
    #[must_use]
    pub fn to_room(&self, client: Point) -> Point {
        client.offset_from(self.origin())
    }

    /// Convert a room-local point back to viewport coordinates.
    #[must_use]
    pub fn to_client(&self, room: Point) -> Point {
        Point::new(room.x + self.left, room.y + self.top)
    }

    /// Whether a viewport point lies over the canvas.
    #[must_use]
    pub fn contains_client(&self, client: Point) -> bool {
        client.x >= self.left
            && client.x < self.left + self.width
            && client.y >= self.top
            && client.y < self.top + self.height
    }
}
