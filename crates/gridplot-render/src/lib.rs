pub mod axes;
pub mod canvas;
pub mod grid;
pub mod hit;
pub mod paint;
pub mod svg;
pub mod view;

pub use axes::{Axes, CollectionHandle, ScatterCollection};
pub use canvas::{Canvas, CanvasConfig};
pub use grid::{DrawOutcome, GridCanvas};
pub use hit::{hit_test, hit_test_rect};
pub use paint::paint_scene;
pub use svg::render_svg;

// Re-export the data model so downstream crates don't need a direct dependency
pub use gridplot_core;
