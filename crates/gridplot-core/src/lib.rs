pub mod error;
pub mod extent;
pub mod id;
pub mod model;

pub use error::{Axis, CanvasError};
pub use extent::{Extent, Limits};
pub use id::NodeId;
pub use model::*;
