//! Data space → pixel space.
//!
//! Axis limits map onto the configured pixel viewport with y pointing up in
//! data space and down in pixels. Every output (SVG, Vello, hit testing)
//! goes through [`markers`] so they agree on where each point lands.

use crate::axes::ScatterCollection;
use crate::canvas::Canvas;
use gridplot_core::{Color, Coordinate, Limits, NodeId, NodeStyle};
use kurbo::{Affine, Point, Rect};

/// Points per inch; scatter sizes are areas in points².
const POINTS_PER_INCH: f64 = 72.0;

/// Affine map from data coordinates to pixels for the given limits.
pub fn data_to_pixel(limits: Limits, width: f64, height: f64) -> Affine {
    // Scale by half extents: `hi - lo` overflows for limits near ±f64::MAX.
    let scale = |px: f64, lo: f64, hi: f64| {
        if hi > lo {
            (px / 2.0) / (hi / 2.0 - lo / 2.0)
        } else {
            px
        }
    };
    let sx = scale(width, limits.min_x, limits.max_x);
    let sy = scale(height, limits.min_y, limits.max_y);
    Affine::new([sx, 0.0, 0.0, -sy, -limits.min_x * sx, height + limits.min_y * sy])
}

/// One resolved scatter marker, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Index of the point within its collection.
    pub index: usize,
    pub center: Point,
    /// Half the marker's side (square) or its radius (circle).
    pub radius: f64,
    pub style: NodeStyle,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub label: Option<NodeId>,
}

impl Marker {
    /// Pixel bounding box, including half the outline width.
    pub fn bounds(&self) -> Rect {
        let r = self.radius + self.stroke_width / 2.0;
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        let r = self.radius + self.stroke_width / 2.0;
        match self.style {
            NodeStyle::Circle => self.center.distance(p) <= r,
            NodeStyle::Square => contains_closed(self.bounds(), p),
        }
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_width > 0.0 && !self.stroke.is_transparent()
    }
}

/// `Rect::contains` is half-open; markers count their far edge as inside.
fn contains_closed(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

/// Marker radius in pixels for a scatter size (points²) at a given dpi.
pub fn marker_radius(size: f64, dpi: f64) -> f64 {
    size.max(0.0).sqrt() / 2.0 * dpi / POINTS_PER_INCH
}

/// Resolve a collection's points into pixel-space markers, in draw order.
pub fn collection_markers(collection: &ScatterCollection, canvas: &Canvas) -> Vec<Marker> {
    let config = canvas.config();
    let transform = data_to_pixel(
        canvas.axes().limits(),
        config.width as f64,
        config.height as f64,
    );
    let px_per_pt = config.dpi / POINTS_PER_INCH;

    collection
        .offsets
        .iter()
        .enumerate()
        .map(|(i, &Coordinate { x, y })| Marker {
            index: i,
            center: transform * Point::new(x, y),
            radius: marker_radius(collection.size_at(i), config.dpi),
            style: collection.style_at(i),
            fill: collection.facecolor_at(i),
            stroke: collection.edgecolor_at(i),
            stroke_width: collection.line_width_at(i) * px_per_pt,
            label: collection.label_at(i),
        })
        .collect()
}

/// Markers for every collection on the canvas's axes, in draw order.
pub fn markers(canvas: &Canvas) -> Vec<Marker> {
    canvas
        .axes()
        .collections()
        .iter()
        .flat_map(|c| collection_markers(c, canvas))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn corners_map_to_viewport_corners() {
        let limits = Limits {
            min_x: -1.0,
            max_x: 3.0,
            min_y: 0.0,
            max_y: 2.0,
        };
        let t = data_to_pixel(limits, 400.0, 200.0);
        assert!(close(t * Point::new(-1.0, 0.0), Point::new(0.0, 200.0)));
        assert!(close(t * Point::new(3.0, 2.0), Point::new(400.0, 0.0)));
        assert!(close(t * Point::new(1.0, 1.0), Point::new(200.0, 100.0)));
    }

    #[test]
    fn widest_limits_map_to_finite_pixels() {
        let limits = Limits {
            min_x: f64::MIN,
            max_x: f64::MAX,
            min_y: f64::MIN,
            max_y: f64::MAX,
        };
        let t = data_to_pixel(limits, 800.0, 600.0);
        assert!(close(t * Point::new(0.0, 0.0), Point::new(400.0, 300.0)));
        assert!(close(t * Point::new(f64::MAX, f64::MIN), Point::new(800.0, 600.0)));
    }

    #[test]
    fn marker_radius_scales_with_dpi() {
        assert_eq!(marker_radius(400.0, 72.0), 10.0);
        assert_eq!(marker_radius(400.0, 144.0), 20.0);
        assert_eq!(marker_radius(-4.0, 72.0), 0.0);
    }

    #[test]
    fn circle_and_square_containment() {
        let mut m = Marker {
            index: 0,
            center: Point::new(10.0, 10.0),
            radius: 5.0,
            style: NodeStyle::Circle,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            stroke_width: 0.0,
            label: None,
        };
        assert!(m.contains(Point::new(13.0, 13.0)));
        assert!(!m.contains(Point::new(14.5, 14.5)));
        m.style = NodeStyle::Square;
        assert!(m.contains(Point::new(14.5, 14.5)));
        assert!(m.contains(Point::new(15.0, 15.0)));
        assert!(!m.contains(Point::new(15.5, 10.0)));
    }
}
