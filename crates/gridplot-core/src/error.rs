//! Error type shared by the gridplot crates.

use std::fmt;
use thiserror::Error;

/// Plot axis, used to say which reduction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CanvasError {
    /// A node was rejected by `add_node`. The canvas is unchanged.
    #[error("invalid node: {reason}")]
    InvalidNode { reason: String },

    /// Node coordinates could not be reduced to finite extrema.
    #[error("cannot compute {axis} extent: coordinates are not finite")]
    InvalidExtent { axis: Axis },

    #[error("invalid canvas config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse canvas config: {0}")]
    Config(#[from] serde_json::Error),
}
