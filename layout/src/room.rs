//! Room dimensions.
//!
//! A [`Room`] is the bounded rectangle furniture is laid out on. Its size is
//! owned by the page-level editor state and only changes through explicit
//! width/height edits, which are clamped into the configured [`RoomBounds`].
//! The canvas renders at exactly these dimensions.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, ROOM_MAX_DIM, ROOM_MIN_DIM};
use crate::placement::PlacedFurniture;

/// Bounds were inverted, non-positive or non-finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid room bounds: min {min}, max {max}")]
pub struct InvalidBounds {
    pub min: f64,
    pub max: f64,
}

/// Inclusive limits applied to both room width and room height.
///
/// Always satisfies `0 < min <= max` with both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct RoomBounds {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RawBounds> for RoomBounds {
    type Error = InvalidBounds;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self { min: ROOM_MIN_DIM, max: ROOM_MAX_DIM }
    }
}

impl RoomBounds {
    /// # Errors
    ///
    /// Returns [`InvalidBounds`] unless both limits are finite and
    /// `0 < min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidBounds> {
        if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
            Ok(Self { min, max })
        } else {
            Err(InvalidBounds { min, max })
        }
    }

    /// Smallest allowed dimension.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed dimension.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `value` into `[min, max]`. Returns `None` for non-finite input.
    #[must_use]
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if value.is_finite() {
            Some(value.clamp(self.min, self.max))
        } else {
            None
        }
    }
}

/// The room being furnished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    width: f64,
    height: f64,
    bounds: RoomBounds,
}

impl Default for Room {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT, RoomBounds::default())
    }
}

impl Room {
    /// Create a room, clamping the requested size into `bounds`.
    ///
    /// Non-finite dimensions fall back to `bounds.min`.
    #[must_use]
    pub fn new(width: f64, height: f64, bounds: RoomBounds) -> Self {
        Self {
            width: bounds.clamp(width).unwrap_or(bounds.min),
            height: bounds.clamp(height).unwrap_or(bounds.min),
            bounds,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn bounds(&self) -> RoomBounds {
        self.bounds
    }

    /// Set the width, clamped into bounds. Non-finite input is ignored.
    /// Returns the width now in effect.
    pub fn set_width(&mut self, width: f64) -> f64 {
        if let Some(w) = self.bounds.clamp(width) {
            self.width = w;
        }
        self.width
    }

    /// Set the height, clamped into bounds. Non-finite input is ignored.
    /// Returns the height now in effect.
    pub fn set_height(&mut self, height: f64) -> f64 {
        if let Some(h) = self.bounds.clamp(height) {
            self.height = h;
        }
        self.height
    }

    /// Whether `instance` lies entirely inside the room.
    ///
    /// Placement never enforces this; it is only reported.
    #[must_use]
    pub fn contains(&self, instance: &PlacedFurniture) -> bool {
        instance.x >= 0.0
            && instance.y >= 0.0
            && instance.x + instance.width <= self.width
            && instance.y + instance.height <= self.height
    }
}
