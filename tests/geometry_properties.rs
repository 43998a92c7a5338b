//! Property-based tests for presence geometry invariants.
//!
//! Tests validate:
//! 1. The dot is a third of the full circle
//! 2. The border is always visible (inner < outer)
//! 3. The dot touches the bottom-right edge of the padded square

use presence_dot::view::{Padding, PresenceGeometry, ViewBounds};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn bounds_strategy() -> impl Strategy<Value = ViewBounds> {
    (
        1.0f64..2000.0,
        1.0f64..2000.0,
        0.0f64..50.0,
        0.0f64..50.0,
        0.0f64..50.0,
        0.0f64..50.0,
        0.25f64..4.0,
    )
        .prop_filter(
            "padding must leave a drawable area",
            |(w, h, left, top, right, bottom, _)| {
                w - (left + right) > 0.0 && h - (top + bottom) > 0.0
            },
        )
        .prop_map(|(w, h, left, top, right, bottom, density)| {
            ViewBounds::new(w, h)
                .with_padding(Padding {
                    left,
                    top,
                    right,
                    bottom,
                })
                .with_density(density)
        })
}

proptest! {
    #[test]
    fn presence_outer_radius_is_a_third(bounds in bounds_strategy()) {
        let geometry = PresenceGeometry::compute(&bounds);
        prop_assert_eq!(geometry.presence_outer_radius, geometry.outer_radius / 3.0);
        prop_assert_eq!(geometry.presence_inner_radius, geometry.inner_radius / 3.0);
    }

    #[test]
    fn border_is_always_visible(bounds in bounds_strategy()) {
        let geometry = PresenceGeometry::compute(&bounds);
        prop_assert!(geometry.presence_inner_radius < geometry.presence_outer_radius);
        if geometry.presence_inner_radius > 0.0 {
            prop_assert!(geometry.hollow_radius() < geometry.presence_inner_radius);
        }
    }

    #[test]
    fn dot_touches_bottom_right_of_square(bounds in bounds_strategy()) {
        let geometry = PresenceGeometry::compute(&bounds);
        let padding = bounds.padding;
        let dimension = (bounds.width - padding.left - padding.right)
            .min(bounds.height - padding.top - padding.bottom);

        let right = geometry.presence_center.x + geometry.presence_outer_radius;
        let bottom = geometry.presence_center.y + geometry.presence_outer_radius;

        let tolerance = EPSILON * dimension.max(1.0) * 100.0;

        prop_assert!((right - (padding.left + dimension)).abs() < tolerance);
        prop_assert!((bottom - (padding.top + dimension)).abs() < tolerance);
    }

    #[test]
    fn dot_stays_inside_view(bounds in bounds_strategy()) {
        let geometry = PresenceGeometry::compute(&bounds);
        let center = geometry.presence_center;
        let radius = geometry.presence_outer_radius;

        prop_assert!(center.x - radius >= bounds.padding.left - EPSILON);
        prop_assert!(center.y - radius >= bounds.padding.top - EPSILON);
        prop_assert!(center.x + radius <= bounds.width * (1.0 + EPSILON));
        prop_assert!(center.y + radius <= bounds.height * (1.0 + EPSILON));
    }
}
