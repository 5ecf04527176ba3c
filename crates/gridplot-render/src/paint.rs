//! Canvas → Vello drawing commands.
//!
//! Fills the background, then emits one fill (and optional stroke) per
//! scatter marker in draw order.

use crate::canvas::Canvas;
use crate::view::{Marker, markers};
use gridplot_core::NodeStyle;
use kurbo::{Affine, Circle, Rect, Shape, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Paint the canvas to a Vello scene.
///
/// Call with a freshly-cleared `Scene`; the caller presents it via wgpu.
pub fn paint_scene(scene: &mut Scene, canvas: &Canvas) {
    let config = canvas.config();
    let background = Rect::new(0.0, 0.0, config.width as f64, config.height as f64);
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        to_peniko(config.facecolor),
        None,
        &background,
    );

    for m in markers(canvas) {
        paint_marker(scene, &m);
    }
}

fn paint_marker(scene: &mut Scene, m: &Marker) {
    log::trace!(
        "MARKER #{} {:?} at ({:.1}, {:.1}) r={:.1}",
        m.index,
        m.style,
        m.center.x,
        m.center.y,
        m.radius
    );
    match m.style {
        NodeStyle::Circle => fill_and_stroke(scene, &Circle::new(m.center, m.radius), m),
        NodeStyle::Square => {
            let r = m.radius;
            let rect = Rect::new(m.center.x - r, m.center.y - r, m.center.x + r, m.center.y + r);
            fill_and_stroke(scene, &rect, m);
        }
    }
}

fn fill_and_stroke<S: Shape>(scene: &mut Scene, shape: &S, m: &Marker) {
    if !m.fill.is_transparent() {
        scene.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(m.fill), None, shape);
    }
    if m.has_stroke() {
        let stroke = Stroke::new(m.stroke_width);
        scene.stroke(&stroke, Affine::IDENTITY, to_peniko(m.stroke), None, shape);
    }
}

fn to_peniko(c: gridplot_core::Color) -> Color {
    let [r, g, b, a] = c.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCanvas;
    use gridplot_core::Node2D;

    #[test]
    fn paints_a_drawn_grid() {
        let mut grid: GridCanvas = GridCanvas::default();
        grid.add_node(Node2D::new((0.0, 0.0)).with_line_width(1.0)).unwrap();
        grid.add_node(Node2D::new((1.0, 1.0)).with_style(NodeStyle::Square)).unwrap();
        grid.draw().unwrap();

        let mut background_only = Scene::new();
        paint_scene(&mut background_only, &Canvas::default());
        assert!(!background_only.encoding().is_empty());

        let mut scene = Scene::new();
        paint_scene(&mut scene, grid.canvas());
        // Background, two marker fills, one outline.
        assert_eq!(
            scene.encoding().n_paths,
            background_only.encoding().n_paths + 3
        );
    }

    #[test]
    fn transparent_fill_is_skipped() {
        let mut grid: GridCanvas = GridCanvas::default();
        grid.add_node(Node2D::new((0.0, 0.0)).with_color(gridplot_core::Color::TRANSPARENT))
            .unwrap();
        grid.draw().unwrap();

        let mut background_only = Scene::new();
        paint_scene(&mut background_only, &Canvas::default());
        let mut scene = Scene::new();
        paint_scene(&mut scene, grid.canvas());
        assert_eq!(scene.encoding().n_paths, background_only.encoding().n_paths);
    }
}
