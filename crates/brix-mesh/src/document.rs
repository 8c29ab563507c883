//! Serialized shape of the indexed mesh document.

use serde::{Deserialize, Serialize};

/// Shell reference list emitted for every surface-tagged geometry group.
///
/// A fixed placeholder carried over from the source tool; it is not derived
/// from scene data.
pub const SHELL_PLACEHOLDER: [usize; 4] = [0, 1, 2, 93];

/// One geometry-group descriptor: either a shell list (surface groups) or a
/// 0-based running index among the solid groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeometryRecord {
    Shells { shells: Vec<usize> },
    Solids { solids: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub position: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub vertices: [usize; 2],
    #[serde(rename = "arcLength")]
    pub arc_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleRecord {
    pub indices: [usize; 3],
}

/// The consolidated scene document: geometry groups in insertion order,
/// vertices by global index, edges and faces in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrepDocument {
    pub geometries: Vec<GeometryRecord>,
    pub vertices: Vec<VertexRecord>,
    pub edges: Vec<EdgeRecord>,
    pub faces: Vec<FaceRecord>,
}

/// Raw-triangle emission mode: vertices plus index triples, no geometry
/// groups or edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleDocument {
    pub vertices: Vec<VertexRecord>,
    pub faces: Vec<TriangleRecord>,
}

impl Default for GeometryRecord {
    fn default() -> Self {
        GeometryRecord::Shells {
            shells: SHELL_PLACEHOLDER.to_vec(),
        }
    }
}
