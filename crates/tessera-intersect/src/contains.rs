//! Point containment tests.

use tessera_math::{det2, Point2, Point3};
use tessera_primitives::{Frustum, Quad2, Sphere, Triangle2};

use crate::classify::{Side, SignedDistance};

/// Whether `p` is strictly in front of all six frustum planes.
///
/// Points exactly on a boundary plane are outside.
pub fn frustum_contains(frustum: &Frustum, p: &Point3) -> bool {
    frustum
        .planes()
        .iter()
        .all(|plane| plane.classify(p) == Side::Front)
}

/// [`frustum_contains`] for a point given by its coordinates.
pub fn frustum_contains_xyz(frustum: &Frustum, x: f64, y: f64, z: f64) -> bool {
    frustum_contains(frustum, &Point3::new(x, y, z))
}

/// Whether `p` is strictly inside the sphere.
pub fn sphere_contains(sphere: &Sphere, p: &Point3) -> bool {
    (p - sphere.center).norm_squared() < sphere.radius2
}

/// Whether `p` lies in the triangle, boundary included.
pub fn triangle_contains(triangle: &Triangle2, p: &Point2) -> bool {
    triangle_contains_vertices(&triangle.p0, &triangle.p1, &triangle.p2, p)
}

/// Whether `p` lies in the triangle `p0 p1 p2`, boundary included.
///
/// Solves `p - p0 = s·(p1 - p0) + t·(p2 - p0)` and accepts
/// `s >= 0`, `t >= 0`, `s + t <= 1`. A degenerate triangle contains nothing.
pub fn triangle_contains_vertices(p0: &Point2, p1: &Point2, p2: &Point2, p: &Point2) -> bool {
    match solve_edges(p0, p1, p2, p) {
        Some((s, t)) => s >= 0.0 && t >= 0.0 && s + t <= 1.0,
        None => false,
    }
}

/// Whether `p` lies in the quad, boundary included.
pub fn quad_contains(quad: &Quad2, p: &Point2) -> bool {
    quad_contains_vertices(&quad.p0, &quad.p1, &quad.p2, &quad.p3, p)
}

/// Whether `p` lies in the quad `p0 p1 p2 p3`.
///
/// Uses the edges `p1 - p0` and `p3 - p0` with the bound `s + t <= 2`.
/// This accepts every point of a convex quad but also some points beyond
/// `p1` and `p3`. `p2` is not consulted.
pub fn quad_contains_vertices(
    p0: &Point2,
    p1: &Point2,
    _p2: &Point2,
    p3: &Point2,
    p: &Point2,
) -> bool {
    match solve_edges(p0, p1, p3, p) {
        Some((s, t)) => s >= 0.0 && t >= 0.0 && s + t <= 2.0,
        None => false,
    }
}

/// Coordinates of `p` in the frame `p0 + s·(e1 - p0) + t·(e2 - p0)`.
fn solve_edges(p0: &Point2, e1: &Point2, e2: &Point2, p: &Point2) -> Option<(f64, f64)> {
    let v1 = e1 - p0;
    let v2 = e2 - p0;
    let q = p - p0;
    let d = det2(&v1, &v2);
    if d == 0.0 {
        return None;
    }
    Some((det2(&q, &v2) / d, det2(&v1, &q) / d))
}
