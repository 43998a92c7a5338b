//! Presence indicator rendering.

pub mod colors;
pub mod geometry;
pub mod presence;
pub mod surface;

pub use colors::{DotFill, DotStyle, PresenceColors};
pub use geometry::{Padding, Point, PresenceGeometry, ViewBounds, DEFAULT_DENSITY};
pub use presence::PresenceView;
pub use surface::{CircleCall, CircleLayer, DrawSurface, FilledCircle, RecordingSurface};
