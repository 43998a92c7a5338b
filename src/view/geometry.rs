//! Layout of the presence dot inside the view bounds.
//!
//! All values are in pixels. The dot sits tangent to the bottom-right corner of
//! the largest square that fits inside the padded area.

use tracing::warn;

/// Border between the background ring and the status circle, in density units.
const BORDER_SIZE_DP: f64 = 1.0;

/// Fraction of the square the avatar circle occupies.
const FRACTION: f64 = 1.0;

/// Density used when none, or an unusable one, is given.
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Whether `density` is a finite, positive pixels-per-unit value.
pub fn is_valid_density(density: f64) -> bool {
    density.is_finite() && density > 0.0
}

/// Return `density` if valid, otherwise log and return [`DEFAULT_DENSITY`].
pub fn sanitize_density(density: f64) -> f64 {
    if is_valid_density(density) {
        density
    } else {
        warn!(density, "Ignoring non-positive density, using default");
        DEFAULT_DENSITY
    }
}

/// A point in view coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Padding on each side of the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Left padding.
    pub left: f64,
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
}

impl Padding {
    /// Same padding on all four sides.
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Size and padding of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Full width including padding.
    pub width: f64,
    /// Full height including padding.
    pub height: f64,
    /// Padding inside the bounds.
    pub padding: Padding,
    /// Pixels per density unit.
    pub density: f64,
}

impl ViewBounds {
    /// Bounds with no padding and a density of one pixel per unit.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
            density: DEFAULT_DENSITY,
        }
    }

    /// Replace the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the density.
    ///
    /// Zero, negative and non-finite values fall back to [`DEFAULT_DENSITY`].
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = sanitize_density(density);
        self
    }
}

/// Computed circle layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceGeometry {
    /// Radius of the full (avatar sized) circle.
    pub outer_radius: f64,
    /// Outer radius minus the border.
    pub inner_radius: f64,
    /// Center of the full circle.
    pub center: Point,
    /// Radius of the background disc behind the dot.
    pub presence_outer_radius: f64,
    /// Radius of the status colored disc.
    pub presence_inner_radius: f64,
    /// Center of the dot.
    pub presence_center: Point,
}

impl PresenceGeometry {
    /// Compute the layout for the given bounds.
    pub fn compute(bounds: &ViewBounds) -> Self {
        let padding = bounds.padding;
        let drawable_width = bounds.width - (padding.left + padding.right);
        let drawable_height = bounds.height - (padding.top + padding.bottom);
        let dimension = drawable_width.min(drawable_height);

        let outer_radius = FRACTION * dimension / 2.0;
        // `density` is a public field, so it may bypass `with_density`
        let density = if is_valid_density(bounds.density) {
            bounds.density
        } else {
            DEFAULT_DENSITY
        };
        let inner_radius = outer_radius - density * BORDER_SIZE_DP;
        let center = Point::new(padding.left + outer_radius, padding.top + outer_radius);

        let presence_outer_radius = outer_radius / 3.0;
        let presence_inner_radius = inner_radius / 3.0;
        let presence_center = Point::new(
            center.x + outer_radius - presence_outer_radius,
            center.y + outer_radius - presence_outer_radius,
        );

        Self {
            outer_radius,
            inner_radius,
            center,
            presence_outer_radius,
            presence_inner_radius,
            presence_center,
        }
    }

    /// Radius of the background punch-out for hollow styles.
    pub fn hollow_radius(&self) -> f64 {
        self.presence_inner_radius / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_view_without_padding() {
        let geometry = PresenceGeometry::compute(&ViewBounds::new(60.0, 60.0));

        assert_eq!(geometry.outer_radius, 30.0);
        assert_eq!(geometry.inner_radius, 29.0);
        assert_eq!(geometry.center, Point::new(30.0, 30.0));
        assert_eq!(geometry.presence_outer_radius, 10.0);
        assert_eq!(geometry.presence_inner_radius, 29.0 / 3.0);
        assert_eq!(geometry.presence_center, Point::new(50.0, 50.0));
        assert_eq!(geometry.hollow_radius(), 29.0 / 6.0);
    }

    #[test]
    fn smaller_side_determines_dimension() {
        let geometry = PresenceGeometry::compute(&ViewBounds::new(90.0, 30.0));
        assert_eq!(geometry.outer_radius, 15.0);
        assert_eq!(geometry.center, Point::new(15.0, 15.0));
    }

    #[test]
    fn padding_shrinks_and_offsets_the_square() {
        let bounds = ViewBounds::new(40.0, 50.0).with_padding(Padding {
            left: 4.0,
            top: 2.0,
            right: 6.0,
            bottom: 2.0,
        });
        let geometry = PresenceGeometry::compute(&bounds);

        // drawable 30 x 46 → dimension 30
        assert_eq!(geometry.outer_radius, 15.0);
        assert_eq!(geometry.center, Point::new(19.0, 17.0));
        assert_eq!(geometry.presence_outer_radius, 5.0);
        assert_eq!(geometry.presence_center, Point::new(29.0, 27.0));
    }

    #[test]
    fn density_scales_the_border() {
        let geometry = PresenceGeometry::compute(&ViewBounds::new(60.0, 60.0).with_density(3.0));
        assert_eq!(geometry.inner_radius, 27.0);
        assert_eq!(geometry.presence_inner_radius, 9.0);
    }

    #[test]
    fn unusable_density_falls_back_to_default() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let bounds = ViewBounds::new(60.0, 60.0).with_density(bad);
            assert_eq!(bounds.density, DEFAULT_DENSITY, "{bad}");

            let geometry = PresenceGeometry::compute(&bounds);
            assert_eq!(geometry.inner_radius, 29.0, "{bad}");
            assert!(
                geometry.presence_inner_radius < geometry.presence_outer_radius,
                "border should stay visible for density {bad}"
            );
        }
    }

    #[test]
    fn compute_ignores_unusable_density_set_directly() {
        let bounds = ViewBounds {
            density: 0.0,
            ..ViewBounds::new(60.0, 60.0)
        };
        let geometry = PresenceGeometry::compute(&bounds);
        assert!(geometry.presence_inner_radius < geometry.presence_outer_radius);
    }

    #[test]
    fn sanitize_density_keeps_valid_values() {
        assert_eq!(sanitize_density(2.5), 2.5);
        assert!(!is_valid_density(-0.5));
    }

    #[test]
    fn dot_is_tangent_to_bottom_right_edge() {
        let geometry = PresenceGeometry::compute(&ViewBounds::new(48.0, 48.0));
        let right_edge = geometry.presence_center.x + geometry.presence_outer_radius;
        let bottom_edge = geometry.presence_center.y + geometry.presence_outer_radius;
        assert_eq!(right_edge, 48.0);
        assert_eq!(bottom_edge, 48.0);
    }

    #[test]
    fn uniform_padding_sets_all_sides() {
        assert_eq!(
            Padding::uniform(3.0),
            Padding {
                left: 3.0,
                top: 3.0,
                right: 3.0,
                bottom: 3.0
            }
        );
    }
}
