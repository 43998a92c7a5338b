//! Presence dot widget.
//!
//! Shows the availability of a single chat participant as a small colored dot
//! in the bottom-right corner of the widget area, e.g. overlaid on an avatar.
//! Conversations with zero or several participants show nothing.

use super::colors::{DotFill, PresenceColors};
use super::geometry::{
    sanitize_density, Padding, PresenceGeometry, ViewBounds, DEFAULT_DENSITY,
};
use super::surface::{CircleLayer, DrawSurface};
use crate::model::Identity;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{canvas::Canvas, Widget},
};
use std::cell::Cell;
use std::fmt;
use tracing::{debug, trace};

/// Presence indicator bound to at most one identity.
///
/// # Examples
///
/// ```rust
/// use presence_dot::model::{Participant, PresenceStatus};
/// use presence_dot::view::{PresenceView, RecordingSurface, ViewBounds};
///
/// let alice = Participant::new("u1", "Alice", PresenceStatus::Away);
/// let mut view = PresenceView::default();
/// view.set_participants([&alice]);
/// assert!(view.is_visible());
///
/// let mut surface = RecordingSurface::new();
/// view.draw(&ViewBounds::new(48.0, 48.0), &mut surface);
/// assert_eq!(surface.calls().len(), 2);
/// ```
pub struct PresenceView<'a> {
    colors: PresenceColors,
    padding: Padding,
    density: f64,
    identity: Option<&'a dyn Identity>,
    visible: bool,
    redraw_requested: bool,
    /// Color picked for the status circle on the last draw.
    current_color: Cell<Option<Color>>,
}

impl<'a> PresenceView<'a> {
    /// Create a hidden view with the given colors.
    pub fn new(colors: PresenceColors) -> Self {
        Self {
            colors,
            padding: Padding::default(),
            density: DEFAULT_DENSITY,
            identity: None,
            visible: false,
            redraw_requested: false,
            current_color: Cell::new(None),
        }
    }

    /// Set the padding used when rendering into a ratatui buffer.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the pixels per density unit used when rendering into a ratatui buffer.
    ///
    /// Zero, negative and non-finite values fall back to [`DEFAULT_DENSITY`]
    /// so the border between the two discs never disappears.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = sanitize_density(density);
        self
    }

    /// Bind the participants of a conversation.
    ///
    /// # Arguments
    ///
    /// * `participants` - Any collection of identity references: a slice,
    ///   an array, a `Vec` or a `HashSet`
    ///
    /// # Behavior
    ///
    /// - Exactly one participant → bound, view visible, redraw requested
    /// - Zero participants → view hidden, previous identity forgotten
    /// - Two or more participants → view hidden, previous identity forgotten
    pub fn set_participants<T, P>(&mut self, participants: P)
    where
        T: Identity + 'a,
        P: IntoIterator<Item = &'a T>,
    {
        let mut iter = participants.into_iter();
        match (iter.next(), iter.next()) {
            (Some(only), None) => {
                debug!(status = ?only.presence_status(), "Binding single participant");
                self.identity = Some(only);
                self.visible = true;
                self.redraw_requested = true;
            }
            (first, _) => {
                debug!(
                    empty = first.is_none(),
                    "Hiding presence: participant count is not one"
                );
                self.identity = None;
                self.visible = false;
            }
        }
    }

    /// Whether the view should be shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The bound identity, if any.
    pub fn identity(&self) -> Option<&'a dyn Identity> {
        self.identity
    }

    /// Colors this view was built with.
    pub fn colors(&self) -> &PresenceColors {
        &self.colors
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Color most recently selected for the status circle.
    ///
    /// `None` until a draw with a set status has happened.
    pub fn current_color(&self) -> Option<Color> {
        self.current_color.get()
    }

    /// Paint the dot onto `surface`.
    ///
    /// # Behavior
    ///
    /// - No identity bound, or status unset → no draw calls
    /// - Otherwise, all centered on the bottom-right dot position:
    ///   1. background disc at the dot's outer radius
    ///   2. status disc one border width smaller, in the status color
    ///   3. `Offline`/`Invisible` only: background disc at half the status radius
    ///
    /// The status color is remembered for [`PresenceView::current_color`].
    pub fn draw<S: DrawSurface + ?Sized>(&self, bounds: &ViewBounds, surface: &mut S) {
        let Some(status) = self.identity.and_then(|identity| identity.presence_status()) else {
            trace!("No presence status to draw");
            return;
        };

        let style = self.colors.style_for(status);
        self.current_color.set(Some(style.color));

        let geometry = PresenceGeometry::compute(bounds);
        let center = geometry.presence_center;
        trace!(%status, ?geometry, "Drawing presence");

        surface.draw_circle(center, geometry.presence_outer_radius, self.colors.background);
        surface.draw_circle(center, geometry.presence_inner_radius, style.color);
        if style.fill == DotFill::Hollow {
            surface.draw_circle(center, geometry.hollow_radius(), self.colors.background);
        }
    }
}

impl Default for PresenceView<'_> {
    fn default() -> Self {
        Self::new(PresenceColors::default())
    }
}

impl fmt::Debug for PresenceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceView")
            .field("colors", &self.colors)
            .field("padding", &self.padding)
            .field("density", &self.density)
            .field(
                "status",
                &self.identity.map(|identity| identity.presence_status()),
            )
            .field("visible", &self.visible)
            .field("current_color", &self.current_color.get())
            .finish()
    }
}

/// Renders with half-block pixels: each cell is one pixel wide and two high.
impl Widget for &PresenceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.is_empty() {
            return;
        }

        let width = usize::from(area.width);
        let height = usize::from(area.height) * 2;
        let bounds = ViewBounds::new(width as f64, height as f64)
            .with_padding(self.padding)
            .with_density(self.density);

        let mut layer = CircleLayer::new(width, height);
        self.draw(&bounds, &mut layer);
        if layer.is_empty() {
            return;
        }

        Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, width as f64 - 1.0])
            .y_bounds([0.0, height as f64 - 1.0])
            .paint(|ctx| ctx.draw(&layer))
            .render(area, buf);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "presence_tests.rs"]
mod tests;
