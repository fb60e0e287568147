//! Room-plan snapshot and the save interface.
//!
//! The editor exposes a "Save Room Plan" action but does not own any
//! persistence. Hosts supply a [`PlanSink`]; [`UnwiredPlanSink`] models the
//! case where nothing is connected yet.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use serde::{Deserialize, Serialize};

use crate::placement::PlacedFurniture;
use crate::room::Room;

/// Serializable snapshot of a room and everything placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub width: f64,
    pub height: f64,
    /// Instances in paint order.
    pub instances: Vec<PlacedFurniture>,
}

impl RoomPlan {
    #[must_use]
    pub fn capture(room: &Room, instances: &[PlacedFurniture]) -> Self {
        Self { width: room.width(), height: room.height(), instances: instances.to_vec() }
    }
}

/// Errors a plan sink may report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// No persistence is available.
    #[error("room plan saving is unavailable: {0}")]
    Unavailable(String),

    /// The plan could not be serialized.
    #[error("room plan encode failed: {0}")]
    Encode(String),

    /// The destination rejected the write.
    #[error("room plan write failed: {0}")]
    Io(String),
}

/// Destination for saved room plans.
pub trait PlanSink {
    /// Persist the room and its instances.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the plan cannot be stored.
    fn save(&mut self, room: &Room, instances: &[PlacedFurniture]) -> Result<(), SaveError>;
}

/// Sink used when no persistence has been wired up. Every save fails with
/// [`SaveError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredPlanSink;

impl PlanSink for UnwiredPlanSink {
    fn save(&mut self, _room: &Room, _instances: &[PlacedFurniture]) -> Result<(), SaveError> {
        Err(SaveError::Unavailable("no persistence configured".to_owned()))
    }
}

/// Sink that keeps every saved plan in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanSink {
    pub saved: Vec<RoomPlan>,
}

impl MemoryPlanSink {
    /// The most recently saved plan.
    #[must_use]
    pub fn latest(&self) -> Option<&RoomPlan> {
        self.saved.last()
    }
}

impl PlanSink for MemoryPlanSink {
    fn save(&mut self, room: &Room, instances: &[PlacedFurniture]) -> Result<(), SaveError> {
        self.saved.push(RoomPlan::capture(room, instances));
        Ok(())
    }
}
