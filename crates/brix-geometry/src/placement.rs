use brix_math::{Point3, Transform, Vector3};

/// A local placement frame: origin plus axis (z) and reference direction.
///
/// The third axis is derived as axis x ref-direction, the source convention.
/// The axes go into the transform as given; the schema guarantees they arrive
/// orthogonal, and the builder does not re-orthonormalize them.
#[derive(Debug, Clone, Copy)]
pub struct Axis2Placement3 {
    pub location: Point3,
    pub axis: Vector3,
    pub ref_direction: Vector3,
}

impl Axis2Placement3 {
    pub fn new(location: Point3, axis: Vector3, ref_direction: Vector3) -> Self {
        Self {
            location,
            axis,
            ref_direction,
        }
    }

    /// Convert this placement to a rigid body Transform.
    pub fn to_transform(&self) -> Transform {
        let z = self.axis;
        let y = self.ref_direction;
        let x = z.cross(y);
        Transform::from_frame(self.location, x, y, z)
    }
}

impl Default for Axis2Placement3 {
    fn default() -> Self {
        Self {
            location: Point3::ZERO,
            axis: Vector3::Z,
            ref_direction: Vector3::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brix_math::DVec3;

    #[test]
    fn test_default_placement_axes() {
        let p = Axis2Placement3::default();
        assert_eq!(p.location, DVec3::ZERO);
        assert_eq!(p.axis, DVec3::Z);
        assert_eq!(p.ref_direction, DVec3::X);
    }

    #[test]
    fn test_default_placement_swaps_xy() {
        // axis x ref-direction = Z x X = Y, so the frame maps the profile's
        // x axis onto world Y and vice versa
        let t = Axis2Placement3::default().to_transform();
        let result = t.transform_point(DVec3::new(1.0, 0.0, 0.0));
        assert!((result - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
        let result = t.transform_point(DVec3::new(0.0, 1.0, 0.0));
        assert!((result - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_placement_applies_translation() {
        let p = Axis2Placement3 {
            location: DVec3::new(10.0, 20.0, 30.0),
            ..Default::default()
        };
        let t = p.to_transform();
        let result = t.transform_point(DVec3::ZERO);
        assert!((result - DVec3::new(10.0, 20.0, 30.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_axes_collapse_rotation() {
        // Unset placement vectors (the permissive accessor default) leave a
        // pure translation to the origin
        let p = Axis2Placement3::new(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO, DVec3::ZERO);
        let t = p.to_transform();
        let result = t.transform_point(DVec3::new(5.0, 6.0, 7.0));
        assert!((result - DVec3::new(1.0, 2.0, 3.0)).length() < 1e-12);
    }
}
