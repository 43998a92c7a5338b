//! Presence status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Availability status of a chat participant.
///
/// `Unknown` covers any value the messaging backend reports that has no
/// dedicated rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Online and reachable.
    Available,
    /// Online but idle.
    Away,
    /// Not connected.
    Offline,
    /// Connected but appearing offline to others.
    Invisible,
    /// Online, do not disturb.
    Busy,
    /// Unrecognized status value.
    Unknown,
}

impl PresenceStatus {
    /// Every status, in the order the preview cycles through them.
    pub const ALL: [PresenceStatus; 6] = [
        PresenceStatus::Available,
        PresenceStatus::Away,
        PresenceStatus::Busy,
        PresenceStatus::Invisible,
        PresenceStatus::Offline,
        PresenceStatus::Unknown,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            PresenceStatus::Available => "available",
            PresenceStatus::Away => "away",
            PresenceStatus::Offline => "offline",
            PresenceStatus::Invisible => "invisible",
            PresenceStatus::Busy => "busy",
            PresenceStatus::Unknown => "unknown",
        }
    }

    /// The status after this one in [`PresenceStatus::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|status| *status == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown presence status: {0:?} (expected available, away, busy, invisible, offline or unknown)")]
pub struct StatusParseError(pub String);

impl FromStr for PresenceStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}
