//! Grid canvas: an ordered node list drawn as one scatter collection.
//!
//! Nodes accumulate through [`GridCanvas::add_node`]; [`GridCanvas::draw`]
//! projects them into the canvas's scatter collection and fits the axis
//! limits to their extent. Every projection is recomputed on each call.

use crate::axes::{Axes, CollectionHandle, ScatterCollection};
use crate::canvas::{Canvas, CanvasConfig};
use gridplot_core::{CanvasError, Color, Coordinate, Edge2D, Extent, GridNode, Limits, Node2D};

/// What a call to [`GridCanvas::draw`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOutcome {
    /// Nothing to draw: no nodes and no edges. Drawable state is untouched.
    Skipped,
    /// The collection was refreshed. `extent`/`limits` are `None` when the
    /// canvas holds edges but no nodes; the axis limits are then left as is.
    Drawn {
        extent: Option<Extent>,
        limits: Option<Limits>,
    },
}

/// Canvas for 2D grid plotting.
#[derive(Debug, Clone)]
pub struct GridCanvas<N: GridNode = Node2D> {
    canvas: Canvas,
    nodes: Vec<N>,
    edges: Vec<Edge2D>,
    collection: CollectionHandle,
}

impl<N: GridNode> GridCanvas<N> {
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        Ok(Self::with_canvas(Canvas::new(config)?))
    }

    /// Wrap an existing canvas; the grid's scatter collection is added to its axes.
    pub fn with_canvas(mut canvas: Canvas) -> Self {
        let collection = canvas.axes_mut().scatter(Vec::new());
        Self {
            canvas,
            nodes: Vec::new(),
            edges: Vec::new(),
            collection,
        }
    }

    /// Append a node. A node that fails validation is rejected and the
    /// node list is left unchanged.
    pub fn add_node(&mut self, node: N) -> Result<(), CanvasError> {
        node.validate()?;
        self.nodes.push(node);
        Ok(())
    }

    /// Append an edge. Edges are stored but not drawn.
    pub fn add_edge(&mut self, edge: Edge2D) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge2D] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn axes(&self) -> &Axes {
        self.canvas.axes()
    }

    /// The scatter collection this grid draws into.
    pub fn collection(&self) -> &ScatterCollection {
        self.canvas.axes().collection(self.collection)
    }

    pub fn node_coordinates(&self) -> Vec<Coordinate> {
        self.nodes.iter().map(GridNode::coordinate).collect()
    }

    pub fn node_colors(&self) -> Vec<Color> {
        self.nodes.iter().map(GridNode::color).collect()
    }

    pub fn node_edgecolors(&self) -> Vec<Color> {
        self.nodes.iter().map(GridNode::edgecolor).collect()
    }

    /// Raw node extent and the padded limits derived from it.
    pub fn data_limits(&self) -> Result<Option<(Extent, Limits)>, CanvasError> {
        let Some(e) = Extent::of(&self.node_coordinates())? else {
            return Ok(None);
        };
        let limits = self.canvas.limits(e.max_x, e.min_x, e.max_y, e.min_y);
        Ok(Some((e, limits)))
    }

    /// Draw all nodes on the canvas and fit the axes to them.
    pub fn draw(&mut self) -> Result<DrawOutcome, CanvasError> {
        if self.is_empty() {
            log::warn!("Attempted to draw in an empty canvas");
            return Ok(DrawOutcome::Skipped);
        }

        // Reduce first so a bad coordinate leaves the drawable untouched.
        let fitted = self.data_limits()?;

        let offsets = self.node_coordinates();
        let facecolors = self.node_colors();
        let edgecolors = self.node_edgecolors();
        let sizes = self.nodes.iter().map(GridNode::size).collect();
        let line_widths = self.nodes.iter().map(GridNode::line_width).collect();
        let styles = self.nodes.iter().map(GridNode::style).collect();
        let labels = self.nodes.iter().map(GridNode::id).collect();

        let axes = self.canvas.axes_mut();
        let collection = axes.collection_mut(self.collection);
        collection.set_offsets(offsets);
        collection.set_facecolor(facecolors);
        collection.set_edgecolor(edgecolors);
        collection.set_sizes(sizes);
        collection.set_line_widths(line_widths);
        collection.set_styles(styles);
        collection.set_labels(labels);

        let Some((extent, limits)) = fitted else {
            log::debug!("drew 0 nodes ({} edges not rendered)", self.edges.len());
            return Ok(DrawOutcome::Drawn {
                extent: None,
                limits: None,
            });
        };

        axes.set_xlim(limits.min_x, limits.max_x);
        axes.set_ylim(limits.min_y, limits.max_y);

        log::debug!(
            "drew {} nodes, xlim {:?}, ylim {:?}",
            self.nodes.len(),
            limits.x_range(),
            limits.y_range()
        );
        Ok(DrawOutcome::Drawn {
            extent: Some(extent),
            limits: Some(limits),
        })
    }
}

impl<N: GridNode> Default for GridCanvas<N> {
    fn default() -> Self {
        Self::with_canvas(Canvas::default())
    }
}
