//! Scene accumulation and indexed mesh document emission.

pub mod accumulator;
pub mod document;
pub mod emitter;

pub use accumulator::{GeometryKind, SceneAccumulator};
pub use document::{
    BrepDocument, EdgeRecord, FaceRecord, GeometryRecord, TriangleDocument, TriangleRecord,
    VertexRecord, SHELL_PLACEHOLDER,
};
pub use emitter::{document_to_string, write_document};
