//! Triangles and quads. Vertices are expected in counter-clockwise order.

use serde::{Deserialize, Serialize};
use tessera_math::{Point2, Point3};

use crate::{Aabb2, Aabb3};

/// A triangle in texture space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle2 {
    /// First vertex.
    pub p0: Point2,
    /// Second vertex.
    pub p1: Point2,
    /// Third vertex.
    pub p2: Point2,
}

impl Triangle2 {
    /// Create a triangle.
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Bounding box of the three vertices.
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points([&self.p0, &self.p1, &self.p2])
    }
}

/// A triangle in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle3 {
    /// First vertex.
    pub p0: Point3,
    /// Second vertex.
    pub p1: Point3,
    /// Third vertex.
    pub p2: Point3,
}

impl Triangle3 {
    /// Create a triangle.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Bounding box of the three vertices.
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_points([&self.p0, &self.p1, &self.p2])
    }
}

/// A quad in texture space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad2 {
    /// First vertex, shared by both halves of the quad.
    pub p0: Point2,
    /// Second vertex.
    pub p1: Point2,
    /// Third vertex, on the diagonal from `p0`.
    pub p2: Point2,
    /// Fourth vertex.
    pub p3: Point2,
}

impl Quad2 {
    /// Create a quad.
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Bounding box of the four vertices.
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points([&self.p0, &self.p1, &self.p2, &self.p3])
    }

    /// The halves `p0p1p2` and `p0p2p3`.
    pub fn triangles(&self) -> [Triangle2; 2] {
        [
            Triangle2::new(self.p0, self.p1, self.p2),
            Triangle2::new(self.p0, self.p2, self.p3),
        ]
    }
}

/// A quad in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad3 {
    /// First vertex, shared by both halves of the quad.
    pub p0: Point3,
    /// Second vertex.
    pub p1: Point3,
    /// Third vertex, on the diagonal from `p0`.
    pub p2: Point3,
    /// Fourth vertex.
    pub p3: Point3,
}

impl Quad3 {
    /// Create a quad.
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The halves `p0p1p2` and `p0p2p3`.
    pub fn triangles(&self) -> [Triangle3; 2] {
        [
            Triangle3::new(self.p0, self.p1, self.p2),
            Triangle3::new(self.p0, self.p2, self.p3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_aabb() {
        let tri = Triangle2::new(
            Point2::new(0.2, 0.1),
            Point2::new(0.8, 0.3),
            Point2::new(0.4, 0.9),
        );
        let aabb = tri.aabb();
        assert_eq!(aabb.min(), Point2::new(0.2, 0.1));
        assert_eq!(aabb.max(), Point2::new(0.8, 0.9));
    }

    #[test]
    fn test_quad_halves_share_p0() {
        let q = Quad3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let [a, b] = q.triangles();
        assert_eq!(a.p0, q.p0);
        assert_eq!(b.p0, q.p0);
        assert_eq!(a.p2, b.p1);
        assert_eq!(b.p2, q.p3);
    }
}
