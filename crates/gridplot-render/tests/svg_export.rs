//! Integration tests: config → grid → draw → SVG.

use gridplot_core::{Color, Node2D, NodeId, NodeStyle};
use gridplot_render::{CanvasConfig, GridCanvas, render_svg};
use pretty_assertions::assert_eq;

fn small_grid() -> GridCanvas {
    let config = CanvasConfig::from_json(include_str!("fixtures/small_canvas.json")).unwrap();
    GridCanvas::new(config).unwrap()
}

#[test]
fn config_fixture_loads() {
    let grid = small_grid();
    let config = grid.canvas().config();
    assert_eq!((config.width, config.height), (200, 100));
    assert_eq!(config.facecolor, Color::BLACK);
}

#[test]
fn one_marker_per_node() {
    let mut grid = small_grid();
    for (i, j) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        grid.add_node(Node2D::new((i as f64, j as f64))).unwrap();
    }
    grid.add_node(Node2D::new((0.5, 0.5)).with_style(NodeStyle::Square)).unwrap();
    grid.draw().unwrap();

    let svg = render_svg(grid.canvas());
    assert_eq!(svg.matches("<circle").count(), 4);
    // Background plus one square marker
    assert_eq!(svg.matches("<rect").count(), 2);
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn markers_land_on_pixel_grid() {
    let mut grid = small_grid();
    grid.add_node(
        Node2D::new((0.0, 0.0))
            .with_id(NodeId::new("origin").unwrap())
            .with_size(16.0)
            .with_color(Color::rgb(1.0, 0.0, 0.0)),
    )
    .unwrap();
    grid.add_node(
        Node2D::new((1.0, 1.0))
            .with_id(NodeId::new("far-corner").unwrap())
            .with_size(16.0)
            .with_color(Color::rgb(0.0, 0.0, 1.0))
            .with_line_width(1.0),
    )
    .unwrap();
    grid.draw().unwrap();

    let svg = render_svg(grid.canvas());
    assert!(
        svg.contains(
            "<circle id=\"origin\" cx=\"0\" cy=\"100\" r=\"2\" fill=\"#FF0000\" stroke=\"none\" stroke-width=\"0\" />"
        ),
        "{svg}"
    );
    assert!(
        svg.contains(
            "<circle id=\"far-corner\" cx=\"200\" cy=\"0\" r=\"2\" fill=\"#0000FF\" stroke=\"#000000\" stroke-width=\"1\" />"
        ),
        "{svg}"
    );
}

#[test]
fn undrawn_grid_exports_background_only() {
    let mut grid = small_grid();
    grid.add_node(Node2D::new((0.0, 0.0))).unwrap();
    let svg = render_svg(grid.canvas());
    assert!(!svg.contains("<circle"));
}

#[test]
fn every_node_label_becomes_an_svg_id() {
    let mut grid = small_grid();
    let generated = Node2D::new((0.0, 0.0));
    let generated_id = generated.id;
    grid.add_node(generated).unwrap();
    grid.add_node(
        Node2D::new((1.0, 1.0))
            .with_id(NodeId::new("anchor").unwrap())
            .with_style(NodeStyle::Square),
    )
    .unwrap();
    grid.draw().unwrap();

    assert_eq!(
        grid.collection().labels,
        vec![Some(generated_id), Some(NodeId::new("anchor").unwrap())]
    );
    let svg = render_svg(grid.canvas());
    assert!(svg.contains(&format!("<circle id=\"{generated_id}\" ")), "{svg}");
    assert!(svg.contains("<rect id=\"anchor\" "), "{svg}");
}
