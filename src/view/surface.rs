//! Drawing surfaces the presence widget paints onto.
//!
//! The widget only needs one primitive: a filled circle. [`DrawSurface`] keeps
//! the drawing logic independent of the backend so tests can record calls,
//! while [`CircleLayer`] replays them onto a ratatui canvas.

use super::geometry::Point;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// A surface that can fill circles.
pub trait DrawSurface {
    /// Fill a circle. Circles are painted in call order; later ones cover
    /// earlier ones.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color);
}

/// One recorded `draw_circle` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCall {
    /// Circle center in view coordinates.
    pub center: Point,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    calls: Vec<CircleCall>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> &[CircleCall] {
        &self.calls
    }

    /// Whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.calls.push(CircleCall {
            center,
            radius,
            color,
        });
    }
}

/// Filled circle on a pixel grid of `width` x `height`.
///
/// Canvas bounds must be `[0, width - 1]` by `[0, height - 1]` so that one
/// canvas unit is one pixel. Pixels whose centers fall inside the radius are
/// painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledCircle {
    /// Center in view coordinates (y down).
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Grid width in pixels.
    pub width: usize,
    /// Grid height in pixels.
    pub height: usize,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        if self.radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        let r_squared = self.radius * self.radius;
        let min_x = (self.center.x - self.radius).floor().max(0.0) as usize;
        let min_y = (self.center.y - self.radius).floor().max(0.0) as usize;
        let max_x = ((self.center.x + self.radius).ceil().max(0.0) as usize).min(self.width);
        let max_y = ((self.center.y + self.radius).ceil().max(0.0) as usize).min(self.height);

        for py in min_y..max_y {
            let dy = py as f64 + 0.5 - self.center.y;
            for px in min_x..max_x {
                let dx = px as f64 + 0.5 - self.center.x;
                if dx * dx + dy * dy > r_squared {
                    continue;
                }
                // Canvas y grows upward
                let canvas_y = (self.height - 1 - py) as f64;
                if let Some((x, y)) = painter.get_point(px as f64, canvas_y) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}

/// Collects circles and paints them onto a ratatui canvas in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleLayer {
    width: usize,
    height: usize,
    circles: Vec<FilledCircle>,
}

impl CircleLayer {
    /// Create an empty layer for a `width` x `height` pixel grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            circles: Vec::new(),
        }
    }

    /// Circles collected so far.
    pub fn circles(&self) -> &[FilledCircle] {
        &self.circles
    }

    /// Whether nothing will be painted.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl DrawSurface for CircleLayer {
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.circles.push(FilledCircle {
            center,
            radius,
            color,
            width: self.width,
            height: self.height,
        });
    }
}

impl Shape for CircleLayer {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        for circle in &self.circles {
            circle.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::symbols::Marker;
    use ratatui::widgets::canvas::Canvas;
    use ratatui::widgets::Widget;

    fn render_layer(layer: &CircleLayer, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, f64::from(area.width) - 1.0])
            .y_bounds([0.0, f64::from(area.height) * 2.0 - 1.0])
            .paint(|ctx| ctx.draw(layer))
            .render(area, &mut buf);
        buf
    }

    fn cell_has_color(buf: &Buffer, x: u16, y: u16, color: Color) -> bool {
        let cell = &buf[(x, y)];
        cell.fg == color || cell.bg == color
    }

    #[test]
    fn recording_surface_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        surface.draw_circle(Point::new(1.0, 2.0), 3.0, Color::Red);
        surface.draw_circle(Point::new(4.0, 5.0), 6.0, Color::Blue);

        assert_eq!(
            surface.calls(),
            &[
                CircleCall {
                    center: Point::new(1.0, 2.0),
                    radius: 3.0,
                    color: Color::Red
                },
                CircleCall {
                    center: Point::new(4.0, 5.0),
                    radius: 6.0,
                    color: Color::Blue
                },
            ]
        );
    }

    #[test]
    fn circle_layer_stamps_grid_size_on_each_circle() {
        let mut layer = CircleLayer::new(10, 20);
        layer.draw_circle(Point::new(5.0, 5.0), 2.0, Color::Green);
        assert_eq!(layer.circles().len(), 1);
        assert_eq!(layer.circles()[0].width, 10);
        assert_eq!(layer.circles()[0].height, 20);
    }

    #[test]
    fn filled_circle_paints_its_center_cell() {
        let area = Rect::new(0, 0, 10, 5);
        let mut layer = CircleLayer::new(10, 10);
        layer.draw_circle(Point::new(5.0, 5.0), 3.0, Color::Green);

        let buf = render_layer(&layer, area);
        // Pixel row 5 lives in cell row 2
        assert!(cell_has_color(&buf, 5, 2, Color::Green));
        // Corner is outside the circle
        assert!(!cell_has_color(&buf, 0, 0, Color::Green));
    }

    #[test]
    fn later_circles_cover_earlier_ones() {
        let area = Rect::new(0, 0, 10, 5);
        let mut layer = CircleLayer::new(10, 10);
        layer.draw_circle(Point::new(5.0, 5.0), 4.0, Color::Green);
        layer.draw_circle(Point::new(5.0, 5.0), 4.0, Color::Red);

        let buf = render_layer(&layer, area);
        assert!(cell_has_color(&buf, 5, 2, Color::Red));
        assert!(!cell_has_color(&buf, 5, 2, Color::Green));
    }

    #[test]
    fn non_positive_radius_paints_nothing() {
        let area = Rect::new(0, 0, 6, 3);
        let mut layer = CircleLayer::new(6, 6);
        layer.draw_circle(Point::new(3.0, 3.0), 0.0, Color::Green);
        layer.draw_circle(Point::new(3.0, 3.0), -2.0, Color::Green);

        let buf = render_layer(&layer, area);
        for y in 0..3 {
            for x in 0..6 {
                assert!(!cell_has_color(&buf, x, y, Color::Green));
            }
        }
    }
}
