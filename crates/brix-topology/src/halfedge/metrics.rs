//! Derived metrics: edge lengths, face areas, face normals.

use brix_math::{Point3, Vector3};

use super::body::Body;
use super::types::*;

impl Body {
    /// Position of a half-edge's origin vertex.
    pub fn halfedge_start(&self, he_id: HalfEdgeId) -> Option<Point3> {
        let he = self.halfedges.get(he_id)?;
        Some(self.vertices.get(he.origin)?.position)
    }

    /// Position of a half-edge's target vertex.
    pub fn halfedge_end(&self, he_id: HalfEdgeId) -> Option<Point3> {
        let target = self.halfedge_target(he_id)?;
        Some(self.vertices.get(target)?.position)
    }

    /// Straight-line length of a half-edge.
    pub fn halfedge_length(&self, he_id: HalfEdgeId) -> Option<f64> {
        let start = self.halfedge_start(he_id)?;
        let end = self.halfedge_end(he_id)?;
        Some((end - start).length())
    }

    /// Straight-line length of an edge.
    pub fn edge_length(&self, edge_id: EdgeId) -> Option<f64> {
        let edge = self.edges.get(edge_id)?;
        self.halfedge_length(edge.halfedge_a)
    }

    /// Face normal scaled by twice the face area (Newell's method).
    ///
    /// Newell's method stays robust on slightly non-planar loops:
    /// ```text
    /// nx = sum((y_i - y_j) * (z_i + z_j)) for each edge (i, j)
    /// ny = sum((z_i - z_j) * (x_i + x_j))
    /// nz = sum((x_i - x_j) * (y_i + y_j))
    /// ```
    pub fn face_newell_normal(&self, face_id: FaceId) -> Option<Vector3> {
        let positions: Vec<Point3> = self
            .face_vertices(face_id)?
            .filter_map(|vid| self.vertices.get(vid).map(|v| v.position))
            .collect();
        if positions.len() < 3 {
            return None;
        }

        let mut normal = Vector3::ZERO;
        let n = positions.len();
        for i in 0..n {
            let vi = positions[i];
            let vj = positions[(i + 1) % n];
            normal.x += (vi.y - vj.y) * (vi.z + vj.z);
            normal.y += (vi.z - vj.z) * (vi.x + vj.x);
            normal.z += (vi.x - vj.x) * (vi.y + vj.y);
        }
        Some(normal)
    }

    /// Unit face normal, or None for degenerate faces.
    pub fn face_normal(&self, face_id: FaceId) -> Option<Vector3> {
        let normal = self.face_newell_normal(face_id)?;
        if normal.length_squared() < 1e-20 {
            None
        } else {
            Some(normal.normalize())
        }
    }

    /// Area of a planar face (half the Newell normal magnitude).
    pub fn face_area(&self, face_id: FaceId) -> Option<f64> {
        Some(self.face_newell_normal(face_id)?.length() * 0.5)
    }
}
