//! Identity boundary between the messaging layer and the widget.

use super::PresenceStatus;
use std::hash::{Hash, Hasher};

/// A chat identity whose presence can be displayed.
///
/// Implemented by whatever type the messaging layer uses for users. The widget
/// only ever reads the status; it never owns or mutates the identity.
pub trait Identity {
    /// Current presence status, or `None` when the backend has not reported one.
    fn presence_status(&self) -> Option<PresenceStatus>;
}

impl<T: Identity + ?Sized> Identity for &T {
    fn presence_status(&self) -> Option<PresenceStatus> {
        (**self).presence_status()
    }
}

/// Minimal owned identity.
///
/// Equality and hashing use only the id, so a `HashSet<Participant>` holds
/// each user once regardless of their current status.
#[derive(Debug, Clone)]
pub struct Participant {
    id: String,
    display_name: String,
    status: Option<PresenceStatus>,
}

impl Participant {
    /// Create a participant with a known status.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        status: PresenceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            status: Some(status),
        }
    }

    /// Create a participant whose status has not been reported yet.
    pub fn without_status(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            status: None,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Replace the reported status.
    pub fn set_status(&mut self, status: Option<PresenceStatus>) {
        self.status = status;
    }
}

impl Identity for Participant {
    fn presence_status(&self) -> Option<PresenceStatus> {
        self.status
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
