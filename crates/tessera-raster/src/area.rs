//! Surface area of 3D triangles and quads.

use tessera_math::Point3;
use tessera_primitives::{Quad3, Triangle3};

/// Area of a triangle.
pub fn triangle_area(triangle: &Triangle3) -> f64 {
    area(&triangle.p0, &triangle.p1, &triangle.p2)
}

/// Area of a quad, as the sum of its halves `p0 p1 p2` and `p0 p2 p3`.
pub fn quad_area(quad: &Quad3) -> f64 {
    area(&quad.p0, &quad.p1, &quad.p2) + area(&quad.p0, &quad.p2, &quad.p3)
}

fn area(p0: &Point3, p1: &Point3, p2: &Point3) -> f64 {
    (p1 - p0).cross(&(p2 - p0)).norm() / 2.0
}
