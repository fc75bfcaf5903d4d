//! 3D transformation utilities

use crate::vertex::{Point3f, Vector3f};
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points and vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3f) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Rotation that points the local +Z axis from `target` towards `eye`.
    ///
    /// Matches the three.js `Matrix4.lookAt` construction, including the
    /// axis nudge applied when the view direction is parallel to `up`.
    pub fn look_at(eye: Point3f, target: Point3f, up: Vector3f) -> Self {
        let mut z = eye - target;
        if z.norm_squared() == 0.0 {
            z.z = 1.0;
        }
        z.normalize_mut();

        let mut x = up.cross(&z);
        if x.norm_squared() == 0.0 {
            if up.z.abs() == 1.0 {
                z.x += 0.0001;
            } else {
                z.z += 0.0001;
            }
            z.normalize_mut();
            x = up.cross(&z);
        }
        x.normalize_mut();
        let y = z.cross(&x);

        Self {
            matrix: Matrix4::new(
                x.x, y.x, z.x, 0.0, //
                x.y, y.y, z.y, 0.0, //
                x.z, y.z, z.z, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Transform placing a Y-axis-aligned cylinder along the path from
    /// `start` to `end`: a look-at orientation followed by a quarter turn
    /// about X to swing the cylinder axis onto the view direction, positioned
    /// at the segment midpoint.
    pub fn oriented_segment(start: Point3f, end: Point3f) -> Self {
        let quarter_turn = Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        let mut matrix = Self::look_at(start, end, Vector3f::y()).matrix * quarter_turn;
        matrix[(0, 3)] = (start.x + end.x) / 2.0;
        matrix[(1, 3)] = (start.y + end.y) / 2.0;
        matrix[(2, 3)] = (start.z + end.z) / 2.0;
        Self { matrix }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3f) -> Point3f {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3f::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3f) -> Vector3f {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}
