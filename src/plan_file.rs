//! JSON file destination for saved room plans.

use std::path::{Path, PathBuf};

use layout::placement::PlacedFurniture;
use layout::plan::{PlanSink, RoomPlan, SaveError};
use layout::room::Room;
use tracing::info;

#[cfg(test)]
#[path = "plan_file_test.rs"]
mod plan_file_test;

/// Writes each saved plan to a single file as pretty-printed JSON,
/// replacing whatever was there.
#[derive(Debug, Clone)]
pub struct JsonFilePlanSink {
    path: PathBuf,
}

impl JsonFilePlanSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanSink for JsonFilePlanSink {
    fn save(&mut self, room: &Room, instances: &[PlacedFurniture]) -> Result<(), SaveError> {
        let plan = RoomPlan::capture(room, instances);
        let body = serde_json::to_string_pretty(&plan).map_err(|e| SaveError::Encode(e.to_string()))?;
        std::fs::write(&self.path, body).map_err(|e| SaveError::Io(format!("{}: {e}", self.path.display())))?;
        info!(path = %self.path.display(), instances = instances.len(), "room plan saved");
        Ok(())
    }
}

/// Read a plan previously written by [`JsonFilePlanSink`].
///
/// # Errors
///
/// Returns [`SaveError::Io`] if the file cannot be read and
/// [`SaveError::Encode`] if it is not a valid plan.
pub fn load_plan(path: &Path) -> Result<RoomPlan, SaveError> {
    let body = std::fs::read_to_string(path).map_err(|e| SaveError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&body).map_err(|e| SaveError::Encode(e.to_string()))
}
