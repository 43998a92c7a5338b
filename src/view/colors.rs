//! Presence color configuration and the status → style table.

use crate::model::PresenceStatus;
use ratatui::style::Color;

/// Default color for [`PresenceStatus::Available`] (#4FBF62).
pub const DEFAULT_AVAILABLE: Color = Color::Rgb(0x4F, 0xBF, 0x62);
/// Default color for [`PresenceStatus::Busy`] (#E6443F).
pub const DEFAULT_BUSY: Color = Color::Rgb(0xE6, 0x44, 0x3F);
/// Default color for [`PresenceStatus::Away`] (#F7CA40).
pub const DEFAULT_AWAY: Color = Color::Rgb(0xF7, 0xCA, 0x40);
/// Default color for [`PresenceStatus::Invisible`] (#50C062).
pub const DEFAULT_INVISIBLE: Color = Color::Rgb(0x50, 0xC0, 0x62);
/// Default color for [`PresenceStatus::Offline`] (#99999C).
pub const DEFAULT_OFFLINE: Color = Color::Rgb(0x99, 0x99, 0x9C);
/// Default border and punch-out color (white).
pub const DEFAULT_BACKGROUND: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Default color for [`PresenceStatus::Unknown`], same gray as offline.
pub const DEFAULT_UNKNOWN: Color = DEFAULT_OFFLINE;

/// Whether the status circle is filled or drawn as a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotFill {
    /// Filled circle.
    Solid,
    /// Ring: the center is punched out with the background color.
    Hollow,
}

/// Resolved rendering style for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotStyle {
    /// Fill color of the status circle.
    pub color: Color,
    /// Solid or hollow.
    pub fill: DotFill,
}

/// Colors used by the presence indicator.
///
/// Built once when the widget is constructed and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceColors {
    /// Available status color.
    pub available: Color,
    /// Busy status color.
    pub busy: Color,
    /// Away status color.
    pub away: Color,
    /// Invisible status color.
    pub invisible: Color,
    /// Offline status color.
    pub offline: Color,
    /// Border ring and hollow punch-out color.
    pub background: Color,
    /// Color for statuses without a dedicated entry.
    pub unknown: Color,
}

impl Default for PresenceColors {
    fn default() -> Self {
        Self {
            available: DEFAULT_AVAILABLE,
            busy: DEFAULT_BUSY,
            away: DEFAULT_AWAY,
            invisible: DEFAULT_INVISIBLE,
            offline: DEFAULT_OFFLINE,
            background: DEFAULT_BACKGROUND,
            unknown: DEFAULT_UNKNOWN,
        }
    }
}

impl PresenceColors {
    /// Style for a status.
    ///
    /// | Status    | Color     | Fill   |
    /// |-----------|-----------|--------|
    /// | Available | available | Solid  |
    /// | Busy      | busy      | Solid  |
    /// | Away      | away      | Solid  |
    /// | Offline   | offline   | Hollow |
    /// | Invisible | invisible | Hollow |
    /// | Unknown   | unknown   | Solid  |
    pub fn style_for(&self, status: PresenceStatus) -> DotStyle {
        let (color, fill) = match status {
            PresenceStatus::Available => (self.available, DotFill::Solid),
            PresenceStatus::Busy => (self.busy, DotFill::Solid),
            PresenceStatus::Away => (self.away, DotFill::Solid),
            PresenceStatus::Offline => (self.offline, DotFill::Hollow),
            PresenceStatus::Invisible => (self.invisible, DotFill::Hollow),
            PresenceStatus::Unknown => (self.unknown, DotFill::Solid),
        };
        DotStyle { color, fill }
    }

    /// Configured color for a status.
    pub fn color_for(&self, status: PresenceStatus) -> Color {
        self.style_for(status).color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_rgb_values() {
        let colors = PresenceColors::default();
        assert_eq!(colors.available, Color::Rgb(79, 191, 98));
        assert_eq!(colors.busy, Color::Rgb(230, 68, 63));
        assert_eq!(colors.away, Color::Rgb(247, 202, 64));
        assert_eq!(colors.invisible, Color::Rgb(80, 192, 98));
        assert_eq!(colors.offline, Color::Rgb(153, 153, 156));
    }

    #[test]
    fn online_statuses_are_solid() {
        let colors = PresenceColors::default();
        for status in [
            PresenceStatus::Available,
            PresenceStatus::Busy,
            PresenceStatus::Away,
        ] {
            assert_eq!(colors.style_for(status).fill, DotFill::Solid, "{status}");
        }
    }

    #[test]
    fn offline_and_invisible_are_hollow() {
        let colors = PresenceColors::default();
        assert_eq!(
            colors.style_for(PresenceStatus::Offline),
            DotStyle {
                color: DEFAULT_OFFLINE,
                fill: DotFill::Hollow
            }
        );
        assert_eq!(
            colors.style_for(PresenceStatus::Invisible),
            DotStyle {
                color: DEFAULT_INVISIBLE,
                fill: DotFill::Hollow
            }
        );
    }

    #[test]
    fn unknown_uses_neutral_color() {
        let colors = PresenceColors {
            unknown: Color::Blue,
            ..PresenceColors::default()
        };
        assert_eq!(
            colors.style_for(PresenceStatus::Unknown),
            DotStyle {
                color: Color::Blue,
                fill: DotFill::Solid
            }
        );
    }

    #[test]
    fn color_for_reads_the_table() {
        let colors = PresenceColors {
            away: Color::Magenta,
            ..PresenceColors::default()
        };
        assert_eq!(colors.color_for(PresenceStatus::Away), Color::Magenta);
        assert_eq!(colors.color_for(PresenceStatus::Busy), DEFAULT_BUSY);
    }
}
