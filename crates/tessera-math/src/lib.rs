#![warn(missing_docs)]

//! Math types for the tessera geometry kernel.
//!
//! Thin aliases over nalgebra for the points, vectors and matrices used by
//! the primitive tests, plus the rigid [`Transform`] that places a camera
//! in world space.

use nalgebra::{Isometry3, Matrix4, Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A point in 2D space (texture space for the rasterizer).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// A homogeneous 4-vector, also used for raw plane coefficients `(a, b, c, d)`.
pub type Vec4 = Vector4<f64>;

/// A 4x4 matrix, column-major storage, indexed as `m[(row, col)]`.
pub type Mat4 = Matrix4<f64>;

/// Determinant of the 2x2 matrix whose columns are `a` and `b`.
///
/// ```text
/// | a.x b.x |
/// | a.y b.y |
/// ```
#[inline]
pub fn det2(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// A 4x4 affine transformation, used as the object-to-world pose of a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Wrap an existing matrix.
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Pose of an observer at `eye` looking at `target`.
    ///
    /// The local frame looks down its -Z axis with +Y towards `up`, so the
    /// inverse of this transform is a right-handed view matrix.
    pub fn look_at(eye: &Point3, target: &Point3, up: &Vec3) -> Self {
        Self {
            matrix: Isometry3::look_at_rh(eye, target, up)
                .inverse()
                .to_homogeneous(),
        }
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
