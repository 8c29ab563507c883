mod bounding;
pub mod body;
mod iter;
mod metrics;
pub mod types;
mod validate;

pub use body::Body;
pub use iter::{FaceHalfEdgeIter, FaceVertexIter, VertexOutgoingIter};
pub use types::*;
