//! View frustum.
//!
//! Planes are extracted from a combined projection × view matrix with the
//! Gribb/Hartmann row-combination method, for OpenGL-style clip space
//! (`-w <= x, y, z <= w`).

use serde::{Deserialize, Serialize};
use tessera_math::{Mat4, Vec4};

use crate::Plane;

/// Six clipping planes with unit normals pointing into the viewing volume.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frustum {
    /// Left clipping plane.
    pub left: Plane,
    /// Right clipping plane.
    pub right: Plane,
    /// Bottom clipping plane.
    pub bottom: Plane,
    /// Top clipping plane.
    pub top: Plane,
    /// Near clipping plane.
    pub near: Plane,
    /// Far clipping plane.
    pub far: Plane,
}

impl Frustum {
    /// Create a frustum from its six planes.
    pub fn new(left: Plane, right: Plane, bottom: Plane, top: Plane, near: Plane, far: Plane) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Extract the frustum of a projection × view matrix.
    pub fn from_matrix(m: &Mat4) -> Self {
        let row = |i: usize| -> Vec4 { m.row(i).transpose() };
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let frustum = Self {
            left: unit_plane(r3 + r0),
            right: unit_plane(r3 - r0),
            bottom: unit_plane(r3 + r1),
            top: unit_plane(r3 - r1),
            near: unit_plane(r3 + r2),
            far: unit_plane(r3 - r2),
        };
        log::trace!("extracted frustum {:?}", frustum);
        frustum
    }

    /// The planes in the order left, right, bottom, top, near, far.
    pub fn planes(&self) -> [Plane; 6] {
        [self.left, self.right, self.bottom, self.top, self.near, self.far]
    }
}

fn unit_plane(coefficients: Vec4) -> Plane {
    Plane::from(coefficients).normalized()
}
