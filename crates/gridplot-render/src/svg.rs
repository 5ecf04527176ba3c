//! Canvas → standalone SVG document.
//!
//! One `<circle>` or `<rect>` per scatter marker, in draw order, over a
//! background rect. Labelled markers carry their label as the SVG `id`.

use crate::canvas::Canvas;
use crate::view::{Marker, markers};
use gridplot_core::{Color, NodeStyle};

fn svg_color(c: Color) -> String {
    let [r, g, b, a] = c.to_rgba8();
    if c.is_transparent() {
        "none".to_string()
    } else if a == 255 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, c.a)
    }
}

/// Render every scatter collection on the canvas to a standalone SVG document.
///
/// Uses the axis limits as they are; call `GridCanvas::draw` first to fit them.
pub fn render_svg(canvas: &Canvas) -> String {
    let config = canvas.config();
    let (width, height) = (config.width, config.height);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"{}\" />\n",
        svg_color(config.facecolor)
    ));

    let (xmin, xmax) = canvas.axes().xlim();
    let (ymin, ymax) = canvas.axes().ylim();
    svg.push_str(&format!(
        "<g class=\"scatter\" data-xlim=\"{xmin} {xmax}\" data-ylim=\"{ymin} {ymax}\">\n"
    ));
    for m in markers(canvas) {
        render_marker_svg(&mut svg, &m);
    }
    svg.push_str("</g>\n</svg>");
    svg
}

fn render_marker_svg(out: &mut String, m: &Marker) {
    let fill = svg_color(m.fill);
    let (stroke, stroke_width) = if m.has_stroke() {
        (svg_color(m.stroke), m.stroke_width)
    } else {
        ("none".to_string(), 0.0)
    };
    // Labels are XML names, so they need no escaping.
    let id = m.label.map(|l| format!(" id=\"{l}\"")).unwrap_or_default();

    match m.style {
        NodeStyle::Circle => {
            out.push_str(&format!(
                "  <circle{} cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />\n",
                id, m.center.x, m.center.y, m.radius, fill, stroke, stroke_width
            ));
        }
        NodeStyle::Square => {
            let side = m.radius * 2.0;
            out.push_str(&format!(
                "  <rect{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />\n",
                id,
                m.center.x - m.radius,
                m.center.y - m.radius,
                side,
                side,
                fill,
                stroke,
                stroke_width
            ));
        }
    }
}
