//! Scene-level accumulation of constructed bodies.

use brix_math::{Point3, PointIndexTable};
use brix_topology::Body;

use crate::document::{
    BrepDocument, EdgeRecord, FaceRecord, GeometryRecord, TriangleDocument, TriangleRecord,
    VertexRecord, SHELL_PLACEHOLDER,
};

/// How a body entered the scene; selects its geometry-group descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Surface,
    Solid,
}

/// Owns constructed bodies and their kind tags in insertion order, and walks
/// them once into a consolidated document.
#[derive(Debug, Default)]
pub struct SceneAccumulator {
    bodies: Vec<Body>,
    kinds: Vec<GeometryKind>,
}

impl SceneAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body and its tag; both lists stay index-parallel.
    pub fn add(&mut self, body: Body, kind: GeometryKind) {
        self.bodies.push(body);
        self.kinds.push(kind);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn kinds(&self) -> &[GeometryKind] {
        &self.kinds
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Walk every body's adjacency into one consolidated document.
    ///
    /// A fresh scene-global point table assigns vertex indices in body order.
    /// Every face loop contributes one edge record per boundary half-edge and
    /// one face record; nothing is deduplicated across edges or faces, so
    /// coincident edges from different bodies stay separate records.
    pub fn finalize(&self) -> BrepDocument {
        let mut table = PointIndexTable::new();
        let mut edges = Vec::new();
        let mut faces = Vec::new();

        for body in &self.bodies {
            for (_, vertex) in &body.vertices {
                table.lookup_or_insert(vertex.position);
            }

            for (face_id, _) in &body.faces {
                let Some(loop_halfedges) = body.face_halfedges(face_id) else {
                    continue;
                };
                for he_id in loop_halfedges {
                    let (Some(start), Some(end)) =
                        (body.halfedge_start(he_id), body.halfedge_end(he_id))
                    else {
                        continue;
                    };
                    // Vertices were inserted above, so both lookups hit
                    let (Some(i), Some(j)) = (table.get(start), table.get(end)) else {
                        continue;
                    };
                    edges.push(EdgeRecord {
                        vertices: [i, j],
                        arc_length: (end - start).length(),
                    });
                }
                faces.push(FaceRecord {
                    area: body.face_area(face_id).unwrap_or(0.0),
                });
            }
        }

        let mut geometries = Vec::with_capacity(self.kinds.len());
        let mut solid_index = 0;
        for kind in &self.kinds {
            match kind {
                GeometryKind::Surface => geometries.push(GeometryRecord::Shells {
                    shells: SHELL_PLACEHOLDER.to_vec(),
                }),
                GeometryKind::Solid => {
                    geometries.push(GeometryRecord::Solids {
                        solids: solid_index,
                    });
                    solid_index += 1;
                }
            }
        }

        let vertices = table
            .ordered_points()
            .into_iter()
            .map(|p| VertexRecord {
                position: [p.x, p.y, p.z],
            })
            .collect();

        BrepDocument {
            geometries,
            vertices,
            edges,
            faces,
        }
    }

    /// The raw-triangle emission mode: deduplicate triangle corners into a
    /// global table and emit index triples, with no groups or edges.
    pub fn triangle_document(triangles: &[[Point3; 3]]) -> TriangleDocument {
        let mut table = PointIndexTable::new();
        let faces = triangles
            .iter()
            .map(|tri| TriangleRecord {
                indices: [
                    table.lookup_or_insert(tri[0]),
                    table.lookup_or_insert(tri[1]),
                    table.lookup_or_insert(tri[2]),
                ],
            })
            .collect();

        let vertices = table
            .ordered_points()
            .into_iter()
            .map(|p| VertexRecord {
                position: [p.x, p.y, p.z],
            })
            .collect();

        TriangleDocument { vertices, faces }
    }
}
