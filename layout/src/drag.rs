//! Drag-and-drop protocol between the catalog list and the canvas.
//!
//! Drag start serializes a [`DragMessage`] into the platform's plain-text
//! drag channel; drop parses it back and validates it before anything touches
//! the store. The internal types never travel over the channel directly: the
//! wire shape is the tagged message `{"kind":"placeTemplate","template":{..}}`
//! carrying only name, width and height.
//!
//! Drag data is untrusted (it may come from another window or application).
//! Anything that fails to parse or validate is a [`DragError::MalformedPayload`],
//! which the engine drops without creating an instance.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::consts::DRAG_MIME_TYPE;
use crate::placement::{FurnitureFootprint, FurnitureTemplate};

/// Errors raised at the drag-data boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DragError {
    /// Drop data could not be parsed or failed validation.
    #[error("malformed drag payload: {0}")]
    MalformedPayload(String),

    /// The template handed to drag start cannot be placed.
    #[error("invalid template for drag: {0}")]
    InvalidTemplate(String),
}

/// A message carried on the drag-data channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DragMessage {
    /// Place a new instance of `template` at the drop point.
    PlaceTemplate { template: FurnitureFootprint },
}

/// Accepted encodings on drop. The bare record is what older drag sources
/// put on the channel before messages were tagged.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireMessage {
    Tagged(DragMessage),
    Bare(FurnitureFootprint),
}

/// What the host should put on the native drag channel at drag start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// MIME type to register the data under.
    pub mime_type: &'static str,
    /// Serialized [`DragMessage`].
    pub data: String,
}

impl DragMessage {
    /// Serialize for the drag channel.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidTemplate`] if the footprint would be
    /// rejected on drop.
    pub fn encode(&self) -> Result<String, DragError> {
        let Self::PlaceTemplate { template } = self;
        validate_footprint(template).map_err(DragError::InvalidTemplate)?;
        serde_json::to_string(self).map_err(|e| DragError::InvalidTemplate(e.to_string()))
    }

    /// Parse and validate drop data.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::MalformedPayload`] for non-JSON text, unknown
    /// message kinds, missing fields, empty names, and non-finite or
    /// non-positive dimensions.
    pub fn decode(raw: &str) -> Result<Self, DragError> {
        let wire: WireMessage =
            serde_json::from_str(raw).map_err(|e| DragError::MalformedPayload(e.to_string()))?;
        let message = match wire {
            WireMessage::Tagged(message) => message,
            WireMessage::Bare(template) => Self::PlaceTemplate { template },
        };
        let Self::PlaceTemplate { template } = &message;
        validate_footprint(template).map_err(DragError::MalformedPayload)?;
        Ok(message)
    }
}

/// Build the drag payload for a catalog template.
///
/// Depth and description stay behind; only the footprint is carried.
///
/// # Errors
///
/// Returns [`DragError::InvalidTemplate`] if the template has an empty name
/// or unusable dimensions.
pub fn start_drag(template: &FurnitureTemplate) -> Result<DragPayload, DragError> {
    let data = DragMessage::PlaceTemplate { template: template.footprint() }.encode()?;
    Ok(DragPayload { mime_type: DRAG_MIME_TYPE, data })
}

/// Whether the canvas should accept a drag carrying data of `mime_type`.
#[must_use]
pub fn accepts(mime_type: &str) -> bool {
    mime_type.eq_ignore_ascii_case(DRAG_MIME_TYPE)
}

fn validate_footprint(footprint: &FurnitureFootprint) -> Result<(), String> {
    if footprint.name.trim().is_empty() {
        return Err("empty name".to_owned());
    }
    for (field, value) in [("width", footprint.width), ("height", footprint.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("{field} must be a positive number, got {value}"));
        }
    }
    Ok(())
}
