//! Domain model types (pure).
//!
//! Presence statuses, the identity boundary the widget reads from, and the
//! error taxonomy shared by the binary.

pub mod error;
pub mod identity;
pub mod status;

// Re-export for convenience
pub use error::AppError;
pub use identity::{Identity, Participant};
pub use status::{PresenceStatus, StatusParseError};
