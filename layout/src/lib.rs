//! Floor-plan layout editor core.
//!
//! This crate owns the interactive part of the room planner: the in-memory
//! placement model, the drag-and-drop protocol that turns catalog templates
//! into placed furniture, single selection with keyboard deletion, and the
//! mapping from viewport pointer coordinates to room-local coordinates. It
//! performs no I/O, so the same core runs behind a browser host (which wires
//! DOM events in and paints the resulting [`render::Scene`]) or a native one.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorCore`] event routing and emitted [`engine::Action`]s |
//! | [`view`] | Mounted editor lifecycle owning the keyboard subscription |
//! | [`placement`] | Furniture templates, placed instances, and the placement store |
//! | [`room`] | Room dimensions bounded by configured limits |
//! | [`viewport`] | Viewport-to-room coordinate mapping |
//! | [`hit`] | Hit-testing pointer positions against placed instances |
//! | [`input`] | Pointer/key event types and the pointer gesture state machine |
//! | [`drag`] | Drag payload encoding and boundary validation |
//! | [`selection`] | Single-selection state machine and delete shortcut |
//! | [`keyboard`] | Document-scoped key listener hub with scoped subscriptions |
//! | [`render`] | Display list and SVG rendering of the canvas |
//! | [`plan`] | Room-plan snapshot and the save interface |
//! | [`consts`] | Shared constants (room limits, MIME type, palette) |

pub mod consts;
pub mod drag;
pub mod engine;
pub mod hit;
pub mod input;
pub mod keyboard;
pub mod placement;
pub mod plan;
pub mod render;
pub mod room;
pub mod selection;
pub mod view;
pub mod viewport;
