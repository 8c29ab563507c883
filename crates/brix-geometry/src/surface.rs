//! Surface bodies from flattened polygon loops.

use brix_core::{BrixError, Result};
use brix_math::{Point3, PointIndexTable, Vector3};
use brix_topology::Body;

/// Build a surface body from polygon loops that are already flattened out of
/// their boundary/face/bound nesting.
///
/// Loop vertices are deduplicated through a table local to this construction;
/// the table's indices become the face indices. Triangles go in directly;
/// larger loops are ear-clipped. Loops with fewer than 3 points are rejected,
/// and whatever the polyhedron constructor refuses (degenerate or
/// non-manifold input) propagates unrecovered.
pub fn surface_from_polygons(polygons: &[Vec<Point3>]) -> Result<Body> {
    let mut table = PointIndexTable::new();
    let mut face_data: Vec<usize> = Vec::new();

    for polygon in polygons {
        if polygon.len() < 3 {
            return Err(BrixError::MeshConstruction(format!(
                "Polygon loop with {} points (minimum is 3)",
                polygon.len()
            )));
        }

        let indices: Vec<usize> = polygon
            .iter()
            .map(|&p| table.lookup_or_insert(p))
            .collect();

        if polygon.len() == 3 {
            face_data.push(3);
            face_data.extend(&indices);
        } else {
            for [a, b, c] in triangulate_loop(polygon)? {
                face_data.extend([3, indices[a], indices[b], indices[c]]);
            }
        }
    }

    Body::from_face_data(&table.ordered_points(), &face_data)
}

/// Ear-clip a polygon loop with more than 3 vertices.
fn triangulate_loop(points: &[Point3]) -> Result<Vec<[usize; 3]>> {
    let normal = newell_normal(points);
    if normal.length_squared() < 1e-20 {
        return Err(BrixError::MeshConstruction(
            "Degenerate polygon loop (zero area)".into(),
        ));
    }

    let coords = project_to_2d(points, &normal);
    match earcutr::earcut(&coords, &[], 2) {
        Ok(indices) if !indices.is_empty() => Ok(indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect()),
        // earcutr can fail on near-degenerate input; fall back to a fan
        _ => Ok(fan_triangulate(points)),
    }
}

/// Project 3D points to 2D coordinates for ear clipping.
///
/// Uses the loop normal to pick the dominant axis, then projects onto the
/// other two.
fn project_to_2d(vertices: &[Point3], normal: &Vector3) -> Vec<f64> {
    let abs_nx = normal.x.abs();
    let abs_ny = normal.y.abs();
    let abs_nz = normal.z.abs();

    let mut coords = Vec::with_capacity(vertices.len() * 2);

    if abs_nz >= abs_nx && abs_nz >= abs_ny {
        for v in vertices {
            coords.push(v.x);
            coords.push(v.y);
        }
    } else if abs_ny >= abs_nx {
        for v in vertices {
            coords.push(v.x);
            coords.push(v.z);
        }
    } else {
        for v in vertices {
            coords.push(v.y);
            coords.push(v.z);
        }
    }

    coords
}

fn fan_triangulate(vertices: &[Point3]) -> Vec<[usize; 3]> {
    let n = vertices.len();
    let mut triangles = Vec::with_capacity(n.saturating_sub(2));
    for i in 1..n.saturating_sub(1) {
        triangles.push([0, i, i + 1]);
    }
    triangles
}

fn newell_normal(vertices: &[Point3]) -> Vector3 {
    let mut normal = Vector3::ZERO;
    let n = vertices.len();
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[(i + 1) % n];
        normal.x += (vi.y - vj.y) * (vi.z + vj.z);
        normal.y += (vi.z - vj.z) * (vi.x + vj.x);
        normal.z += (vi.x - vj.x) * (vi.y + vj.y);
    }
    normal
}
