//! Sweeping a closed 2D profile into a solid body.

use brix_core::{BrixError, Result, Tolerance};
use brix_math::{Point2, Point3, Transform, Vector3};
use brix_topology::Body;

use crate::deviation::DeviationParams;
use crate::profile::Profile2D;

/// Sweep the profile's outer contour along `direction * depth`, mapped
/// through `placement`.
///
/// The contour is tessellated per the deviation parameters, the resulting
/// ring is extruded into a closed prism: reversed bottom cap, forward top
/// cap, one side quad per ring segment. The extrusion direction is taken
/// as given (unit length by convention) and both it and the profile points
/// pass through the placement transform.
pub fn extrude_profile(
    profile: &Profile2D,
    placement: &Transform,
    direction: Vector3,
    depth: f64,
    params: &DeviationParams,
) -> Result<Body> {
    let contour = profile
        .outer()
        .ok_or_else(|| BrixError::MeshConstruction("Profile has no contour".into()))?;
    if !contour.is_closed() {
        return Err(BrixError::MeshConstruction(
            "Swept profile contour is not closed".into(),
        ));
    }

    let ring = dedup_ring(&contour.tessellate(params), Tolerance::default());
    if ring.len() < 3 {
        return Err(BrixError::MeshConstruction(format!(
            "Degenerate swept profile: {} distinct points after tessellation",
            ring.len()
        )));
    }

    let n = ring.len();
    let offset = placement.transform_vector(direction * depth);

    let mut positions: Vec<Point3> = Vec::with_capacity(2 * n);
    for p in &ring {
        positions.push(placement.transform_point(Point3::new(p.x, p.y, 0.0)));
    }
    for i in 0..n {
        let base = positions[i];
        positions.push(base + offset);
    }

    // Bottom cap reversed, top cap forward, so both face outward and every
    // shared edge is traversed once per direction
    let mut face_data: Vec<usize> = Vec::with_capacity(2 * (n + 1) + 5 * n);
    face_data.push(n);
    face_data.extend((0..n).rev());
    face_data.push(n);
    face_data.extend(n..2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        face_data.extend([4, i, j, n + j, n + i]);
    }

    Body::from_face_data(&positions, &face_data)
}

/// Drop consecutive coincident ring points, including the wrap-around pair.
fn dedup_ring(points: &[Point2], tol: Tolerance) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if let Some(&last) = ring.last() {
            if tol.is_zero((p - last).length()) {
                continue;
            }
        }
        ring.push(p);
    }
    while ring.len() > 1 {
        let first = ring[0];
        let last = ring[ring.len() - 1];
        if tol.is_zero((first - last).length()) {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}
