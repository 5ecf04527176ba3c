//! Data extents and axis limits.
//!
//! An [`Extent`] is the raw bounding box of node coordinates. [`Limits`]
//! are what ends up on the axes after a canvas applies its padding policy.

use crate::error::{Axis, CanvasError};
use crate::model::Coordinate;
use serde::{Deserialize, Serialize};

/// Raw min/max of node coordinates along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// Reduce coordinates to their bounding extent.
    ///
    /// Returns `Ok(None)` for an empty slice. Fails if any extremum is
    /// not finite.
    pub fn of(coords: &[Coordinate]) -> Result<Option<Extent>, CanvasError> {
        let Some(first) = coords.first() else {
            return Ok(None);
        };
        let init = Extent {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        let extent = coords[1..].iter().fold(init, |e, c| Extent {
            min_x: e.min_x.min(c.x),
            max_x: e.max_x.max(c.x),
            min_y: e.min_y.min(c.y),
            max_y: e.max_y.max(c.y),
        });

        // f64::min/max skip NaN unless every value is NaN, so check the inputs.
        if coords.iter().any(|c| !c.x.is_finite()) {
            return Err(CanvasError::InvalidExtent { axis: Axis::X });
        }
        if coords.iter().any(|c| !c.y.is_finite()) {
            return Err(CanvasError::InvalidExtent { axis: Axis::Y });
        }
        Ok(Some(extent))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Final axis bounds, as applied to the plotting surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Limits {
    pub fn x_range(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }
}

impl Default for Limits {
    /// The unit square, matching an empty plot.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }
}
