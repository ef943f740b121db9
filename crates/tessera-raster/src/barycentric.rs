//! Barycentric coordinates in texture space and interpolation in 3D.
//!
//! Coordinates `(s, t)` locate a point as `p0 + s·(p1 - p0) + t·(p2 - p0)`.
//! A quad carries a third coordinate `u` naming the half the point fell
//! in: `+1` for `p0 p1 p2`, `-1` for `p0 p2 p3`.

use tessera_intersect::triangle_contains_vertices;
use tessera_math::{det2, Point2, Point3, Vec2, Vec3};
use tessera_primitives::{Quad2, Quad3, Triangle2, Triangle3};

/// Coordinates `(s, t)` of `p` relative to a triangle.
///
/// A degenerate triangle yields non-finite coordinates.
pub fn barycentric_triangle(triangle: &Triangle2, p: &Point2) -> Vec2 {
    barycentric(&triangle.p0, &triangle.p1, &triangle.p2, p)
}

/// Coordinates `(s, t, u)` of `p` relative to a quad.
///
/// `(s, t)` are taken in `p0 p1 p2` when that half contains `p`
/// (`u = 1`), otherwise in `p0 p2 p3` (`u = -1`).
pub fn barycentric_quad(quad: &Quad2, p: &Point2) -> Vec3 {
    if triangle_contains_vertices(&quad.p0, &quad.p1, &quad.p2, p) {
        barycentric(&quad.p0, &quad.p1, &quad.p2, p).push(1.0)
    } else {
        barycentric(&quad.p0, &quad.p2, &quad.p3, p).push(-1.0)
    }
}

fn barycentric(p0: &Point2, p1: &Point2, p2: &Point2, p: &Point2) -> Vec2 {
    let v1 = p1 - p0;
    let v2 = p2 - p0;
    let q = p - p0;
    let d = det2(&v1, &v2);
    Vec2::new(det2(&q, &v2) / d, det2(&v1, &q) / d)
}

/// The point at coordinates `st` on a triangle.
pub fn interpolate_triangle(triangle: &Triangle3, st: &Vec2) -> Point3 {
    interpolate(&triangle.p0, &triangle.p1, &triangle.p2, st)
}

/// The point at coordinates `stu` on a quad. The half is picked by the sign of `u`.
pub fn interpolate_quad(quad: &Quad3, stu: &Vec3) -> Point3 {
    let st = stu.xy();
    if stu.z > 0.0 {
        interpolate(&quad.p0, &quad.p1, &quad.p2, &st)
    } else {
        interpolate(&quad.p0, &quad.p2, &quad.p3, &st)
    }
}

fn interpolate(p0: &Point3, p1: &Point3, p2: &Point3, st: &Vec2) -> Point3 {
    p0 + st.x * (p1 - p0) + st.y * (p2 - p0)
}
