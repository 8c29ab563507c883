use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid body transform (rotation + translation, no shear/scale).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    /// Build a transform from an origin and three axis column vectors.
    ///
    /// The axes are taken as given; callers are responsible for handing in an
    /// orthogonal frame.
    pub fn from_frame(origin: Point3, x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self::from_mat4(DMat4::from_cols(
            crate::DVec4::new(x.x, x.y, x.z, 0.0),
            crate::DVec4::new(y.x, y.y, y.z, 0.0),
            crate::DVec4::new(z.x, z.y, z.z, 0.0),
            crate::DVec4::new(origin.x, origin.y, origin.z, 1.0),
        ))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }

    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }

    pub fn inverse(&self) -> Option<Transform> {
        let m = self.to_mat4();
        let inv = m.inverse();
        // Check if inverse is valid (determinant != 0)
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_mat4(inv))
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
