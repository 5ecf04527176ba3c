//! The plotting surface: axes with limits and scatter collections.
//!
//! Collections are created once with [`Axes::scatter`] and then mutated in
//! place through their [`CollectionHandle`]; nothing here ever recreates a
//! collection.

use gridplot_core::{Color, Coordinate, Limits, NodeId, NodeStyle};
use serde::Serialize;

/// Index of a scatter collection inside the [`Axes`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionHandle(usize);

/// A set of scatter markers. All channels are indexed by point.
///
/// Color, size, and width channels may be shorter than `offsets` (or
/// empty); readers fall back to the last entry, then to a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScatterCollection {
    pub offsets: Vec<Coordinate>,
    pub facecolors: Vec<Color>,
    pub edgecolors: Vec<Color>,
    pub sizes: Vec<f64>,
    pub line_widths: Vec<f64>,
    pub styles: Vec<NodeStyle>,
    /// Per-point labels. Not broadcast: a missing entry means unlabelled.
    pub labels: Vec<Option<NodeId>>,
}

fn channel<T: Copy>(values: &[T], i: usize, default: T) -> T {
    values.get(i).or(values.last()).copied().unwrap_or(default)
}

impl ScatterCollection {
    pub fn set_offsets(&mut self, offsets: Vec<Coordinate>) {
        self.offsets = offsets;
    }

    pub fn set_facecolor(&mut self, colors: Vec<Color>) {
        self.facecolors = colors;
    }

    pub fn set_edgecolor(&mut self, colors: Vec<Color>) {
        self.edgecolors = colors;
    }

    pub fn set_sizes(&mut self, sizes: Vec<f64>) {
        self.sizes = sizes;
    }

    pub fn set_line_widths(&mut self, widths: Vec<f64>) {
        self.line_widths = widths;
    }

    pub fn set_styles(&mut self, styles: Vec<NodeStyle>) {
        self.styles = styles;
    }

    pub fn set_labels(&mut self, labels: Vec<Option<NodeId>>) {
        self.labels = labels;
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn facecolor_at(&self, i: usize) -> Color {
        channel(&self.facecolors, i, Color::rgb(0.5, 0.5, 0.5))
    }

    pub fn edgecolor_at(&self, i: usize) -> Color {
        channel(&self.edgecolors, i, Color::TRANSPARENT)
    }

    pub fn size_at(&self, i: usize) -> f64 {
        channel(&self.sizes, i, gridplot_core::DEFAULT_MARKER_SIZE)
    }

    pub fn line_width_at(&self, i: usize) -> f64 {
        channel(&self.line_widths, i, 0.0)
    }

    pub fn style_at(&self, i: usize) -> NodeStyle {
        channel(&self.styles, i, NodeStyle::Circle)
    }

    pub fn label_at(&self, i: usize) -> Option<NodeId> {
        self.labels.get(i).copied().flatten()
    }
}

/// One plotting area. Owned by exactly one canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axes {
    limits: Limits,
    collections: Vec<ScatterCollection>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scatter collection at the given offsets.
    pub fn scatter(&mut self, offsets: Vec<Coordinate>) -> CollectionHandle {
        let handle = CollectionHandle(self.collections.len());
        self.collections.push(ScatterCollection {
            offsets,
            ..ScatterCollection::default()
        });
        handle
    }

    /// Handles are only minted by `scatter` on this axes, so indexing is in bounds.
    pub fn collection(&self, handle: CollectionHandle) -> &ScatterCollection {
        &self.collections[handle.0]
    }

    pub fn collection_mut(&mut self, handle: CollectionHandle) -> &mut ScatterCollection {
        &mut self.collections[handle.0]
    }

    pub fn collections(&self) -> &[ScatterCollection] {
        &self.collections
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.limits.min_x = min;
        self.limits.max_x = max;
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.limits.min_y = min;
        self.limits.max_y = max;
    }

    pub fn xlim(&self) -> (f64, f64) {
        self.limits.x_range()
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.limits.y_range()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scatter_returns_distinct_handles() {
        let mut axes = Axes::new();
        let a = axes.scatter(Vec::new());
        let b = axes.scatter(vec![Coordinate::new(1.0, 1.0)]);
        assert_ne!(a, b);
        assert!(axes.collection(a).is_empty());
        assert_eq!(axes.collection(b).len(), 1);
    }

    #[test]
    fn collection_is_mutated_in_place() {
        let mut axes = Axes::new();
        let h = axes.scatter(Vec::new());
        axes.collection_mut(h).set_offsets(vec![Coordinate::new(3.0, 4.0)]);
        axes.collection_mut(h).set_facecolor(vec![Color::WHITE]);
        assert_eq!(axes.collections().len(), 1);
        assert_eq!(axes.collection(h).offsets, vec![Coordinate::new(3.0, 4.0)]);
    }

    #[test]
    fn short_channels_broadcast_last_value() {
        let c = ScatterCollection {
            offsets: vec![Coordinate::default(); 3],
            facecolors: vec![Color::BLACK],
            ..ScatterCollection::default()
        };
        assert_eq!(c.facecolor_at(2), Color::BLACK);
        assert_eq!(c.line_width_at(1), 0.0);
        assert_eq!(c.style_at(0), NodeStyle::Circle);
        assert_eq!(c.label_at(0), None);
    }

    #[test]
    fn limits_setters() {
        let mut axes = Axes::new();
        axes.set_xlim(-2.0, 3.0);
        axes.set_ylim(0.5, 1.5);
        assert_eq!(axes.xlim(), (-2.0, 3.0));
        assert_eq!(axes.ylim(), (0.5, 1.5));
    }
}
