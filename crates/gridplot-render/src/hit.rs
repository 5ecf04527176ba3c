//! Hit testing: pixel point → node lookup.
//!
//! Works on the drawn state of a grid, so nodes added since the last
//! `draw()` are not hittable yet.

use crate::grid::GridCanvas;
use crate::view::collection_markers;
use gridplot_core::GridNode;
use kurbo::{Point, Rect};

/// Find the topmost node at pixel position (px, py).
/// Returns its index in `GridCanvas::nodes`, or `None` for background.
pub fn hit_test<N: GridNode>(grid: &GridCanvas<N>, px: f64, py: f64) -> Option<usize> {
    let p = Point::new(px, py);
    // Last drawn = topmost
    collection_markers(grid.collection(), grid.canvas())
        .iter()
        .rev()
        .find(|m| m.contains(p))
        .map(|m| m.index)
}

/// Indices of all drawn nodes whose marker bounds intersect the given
/// pixel rectangle, in draw order. Used for marquee selection; `rw`/`rh`
/// are negative when the marquee is dragged up or left.
pub fn hit_test_rect<N: GridNode>(grid: &GridCanvas<N>, rx: f64, ry: f64, rw: f64, rh: f64) -> Vec<usize> {
    let area = Rect::new(rx, ry, rx + rw, ry + rh).abs();
    collection_markers(grid.collection(), grid.canvas())
        .iter()
        .filter(|m| intersects(m.bounds(), area))
        .map(|m| m.index)
        .collect()
}

/// AABB overlap; touching edges count.
fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasConfig;
    use gridplot_core::Node2D;
    use pretty_assertions::assert_eq;

    /// 100x100 px canvas, no margin, 72 dpi: data (0..10, 0..10) maps 10 px per unit.
    fn grid() -> GridCanvas {
        let config = CanvasConfig {
            width: 100,
            height: 100,
            dpi: 72.0,
            margin_ratio: 0.0,
            ..CanvasConfig::default()
        };
        let mut grid = GridCanvas::new(config).unwrap();
        grid.add_node(Node2D::new((0.0, 0.0)).with_size(16.0)).unwrap();
        grid.add_node(Node2D::new((10.0, 10.0)).with_size(16.0)).unwrap();
        grid.add_node(Node2D::new((5.0, 5.0)).with_size(400.0)).unwrap();
        grid.add_node(Node2D::new((5.5, 5.0)).with_size(16.0)).unwrap();
        grid.draw().unwrap();
        grid
    }

    #[test]
    fn hit_finds_corner_nodes() {
        let grid = grid();
        // (0, 0) sits at the bottom-left pixel corner.
        assert_eq!(hit_test(&grid, 1.0, 99.0), Some(0));
        assert_eq!(hit_test(&grid, 99.0, 1.0), Some(1));
    }

    #[test]
    fn topmost_marker_wins() {
        let grid = grid();
        // Node 3 is drawn after node 2 and overlaps it.
        assert_eq!(hit_test(&grid, 55.0, 50.0), Some(3));
        assert_eq!(hit_test(&grid, 45.0, 50.0), Some(2));
    }

    #[test]
    fn background_misses() {
        let grid = grid();
        assert_eq!(hit_test(&grid, 20.0, 20.0), None);
    }

    #[test]
    fn undrawn_nodes_are_not_hittable() {
        let mut grid: GridCanvas = GridCanvas::default();
        grid.add_node(Node2D::new((0.0, 0.0))).unwrap();
        assert_eq!(hit_test(&grid, 400.0, 300.0), None);
    }

    #[test]
    fn marquee_selects_overlapping_markers() {
        let grid = grid();
        assert_eq!(hit_test_rect(&grid, 40.0, 40.0, 20.0, 20.0), vec![2, 3]);
        assert_eq!(hit_test_rect(&grid, 0.0, 0.0, 100.0, 100.0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn marquee_dragged_up_and_left() {
        let grid = grid();
        assert_eq!(hit_test_rect(&grid, 60.0, 60.0, -20.0, -20.0), vec![2, 3]);
        assert_eq!(hit_test_rect(&grid, 60.0, 40.0, -20.0, 20.0), vec![2, 3]);
    }
}
