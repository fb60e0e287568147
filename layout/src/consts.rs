//! Shared constants for the layout crate.

// ── Room ────────────────────────────────────────────────────────

/// Smallest width or height a room may be given, in length units.
pub const ROOM_MIN_DIM: f64 = 100.0;

/// Largest width or height a room may be given, in length units.
pub const ROOM_MAX_DIM: f64 = 1000.0;

/// Room width on editor mount.
pub const DEFAULT_ROOM_WIDTH: f64 = 400.0;

/// Room height on editor mount.
pub const DEFAULT_ROOM_HEIGHT: f64 = 300.0;

// ── Drag and drop ───────────────────────────────────────────────

/// MIME type the drag payload travels under on the native drag-data channel.
pub const DRAG_MIME_TYPE: &str = "text/plain";

// ── Rendering ───────────────────────────────────────────────────

/// Fill for unselected furniture rectangles.
pub const ITEM_FILL: &str = "#C9B79C";

/// Fill for the selected furniture rectangle.
pub const SELECTED_FILL: &str = "#7FA7D9";

/// Stroke for furniture rectangles.
pub const ITEM_STROKE: &str = "#3B3024";

/// Stroke for the selected furniture rectangle.
pub const SELECTED_STROKE: &str = "#1D4E89";

/// Dash pattern for instances that extend past the room border.
pub const OVERFLOW_DASH: &str = "6 3";

/// Room floor fill.
pub const ROOM_FILL: &str = "#FAF7F2";

/// Room border stroke.
pub const ROOM_STROKE: &str = "#1F1A17";

/// Label font size in length units.
pub const LABEL_FONT_SIZE: f64 = 12.0;
