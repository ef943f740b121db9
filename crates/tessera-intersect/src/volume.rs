//! Plane-box, plane-triangle and frustum-box classification.

use serde::{Deserialize, Serialize};
use tessera_primitives::{Aabb3, Frustum, Plane, Triangle3};

use crate::classify::{sign, SignedDistance};

/// Position of a shape relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneIntersection {
    /// Entirely on the side the normal points to.
    Front,
    /// Entirely on the other side.
    Back,
    /// The plane cuts through the shape.
    Intersecting,
    /// The shape lies in the plane.
    Containing,
}

/// Position of a box relative to a convex volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeIntersection {
    /// Entirely inside.
    Inside,
    /// Entirely outside.
    Outside,
    /// Possibly crossing the boundary.
    Intersecting,
}

/// Classify a box against a plane.
///
/// Projects the box half-extent onto the normal, `e = Σ h_i·|n_i|`, and
/// compares it with the signed distance `s` of the box center: `s - e > 0`
/// is [`Front`](PlaneIntersection::Front), `s + e < 0` is
/// [`Back`](PlaneIntersection::Back), anything else is
/// [`Intersecting`](PlaneIntersection::Intersecting). A box touching the
/// plane counts as intersecting. Never returns `Containing`.
pub fn plane_aabb(plane: &Plane, aabb: &Aabb3) -> PlaneIntersection {
    let n = plane.normal();
    let h = aabb.half_extent();
    let e = h.x * n.x.abs() + h.y * n.y.abs() + h.z * n.z.abs();
    let s = plane.distance_to(&aabb.center());
    if s - e > 0.0 {
        PlaneIntersection::Front
    } else if s + e < 0.0 {
        PlaneIntersection::Back
    } else {
        PlaneIntersection::Intersecting
    }
}

/// Classify a triangle against a plane or axis-aligned plane.
///
/// Each vertex contributes the sign of its distance (-1, 0 or 1):
///
/// | sum | result |
/// |-----|--------|
/// | ±1 | `Intersecting` |
/// | 3 | `Front` |
/// | -3 | `Back` |
/// | 2 | `Front` (one vertex on the plane) |
/// | -2 | `Back` |
/// | 0 | `Containing` |
///
/// A sum of 0 is reported as `Containing` even when it comes from one
/// vertex on each side and one on the plane; split/clip code relies on
/// this exact table.
pub fn plane_triangle<P: SignedDistance>(plane: &P, triangle: &Triangle3) -> PlaneIntersection {
    let s = sign(plane.distance_to(&triangle.p0))
        + sign(plane.distance_to(&triangle.p1))
        + sign(plane.distance_to(&triangle.p2));
    match s {
        1 | -1 => PlaneIntersection::Intersecting,
        3 => PlaneIntersection::Front,
        -3 => PlaneIntersection::Back,
        s if s > 0 => PlaneIntersection::Front,
        s if s < 0 => PlaneIntersection::Back,
        _ => PlaneIntersection::Containing,
    }
}

/// Conservative frustum culling of a box.
///
/// Planes are visited left, right, bottom, top, near, far. A box behind
/// any plane is `Outside` immediately; otherwise it is `Intersecting` if
/// any plane cut it, `Inside` if none did. Boxes near the frustum corners
/// may be reported `Intersecting` while actually outside.
pub fn frustum_aabb(frustum: &Frustum, aabb: &Aabb3) -> VolumeIntersection {
    let mut intersecting = false;
    for (i, plane) in frustum.planes().iter().enumerate() {
        match plane_aabb(plane, aabb) {
            PlaneIntersection::Back => {
                log::trace!("box {:?} culled by frustum plane {}", aabb, i);
                return VolumeIntersection::Outside;
            }
            PlaneIntersection::Intersecting => intersecting = true,
            PlaneIntersection::Front | PlaneIntersection::Containing => {}
        }
    }
    if intersecting {
        VolumeIntersection::Intersecting
    } else {
        VolumeIntersection::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_math::{Mat4, Point3, Vec3};
    use tessera_primitives::{Axis, AxisPlane};

    fn unit_box_at(x: f64, y: f64, z: f64) -> Aabb3 {
        Aabb3::new(Point3::new(x, y, z), Point3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle3 {
        Triangle3::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    #[test]
    fn test_plane_aabb_sides() {
        let plane = Plane::from_point_normal(&Point3::origin(), &Vec3::z());
        assert_eq!(plane_aabb(&plane, &unit_box_at(0.0, 0.0, 2.0)), PlaneIntersection::Front);
        assert_eq!(plane_aabb(&plane, &unit_box_at(0.0, 0.0, -3.0)), PlaneIntersection::Back);
        assert_eq!(
            plane_aabb(&plane, &unit_box_at(0.0, 0.0, -0.5)),
            PlaneIntersection::Intersecting
        );
    }

    #[test]
    fn test_plane_aabb_touching_is_intersecting() {
        let plane = Plane::from_point_normal(&Point3::origin(), &Vec3::z());
        assert_eq!(
            plane_aabb(&plane, &unit_box_at(0.0, 0.0, 0.0)),
            PlaneIntersection::Intersecting
        );
    }

    #[test]
    fn test_plane_aabb_oblique() {
        // x + y = 3 cuts the box [0,2]^3 but not [0,1]^3
        let plane = Plane::new(1.0, 1.0, 0.0, -3.0);
        let big = Aabb3::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0));
        assert_eq!(plane_aabb(&plane, &big), PlaneIntersection::Intersecting);
        assert_eq!(plane_aabb(&plane, &unit_box_at(0.0, 0.0, 0.0)), PlaneIntersection::Back);
    }

    #[test]
    fn test_plane_triangle_sign_sum_table() {
        let plane = Plane::from_point_normal(&Point3::origin(), &Vec3::z());
        let cases = [
            // all front
            (tri([0., 0., 1.], [1., 0., 1.], [0., 1., 2.]), PlaneIntersection::Front),
            // all back
            (tri([0., 0., -1.], [1., 0., -1.], [0., 1., -2.]), PlaneIntersection::Back),
            // two front, one back: sum 1
            (tri([0., 0., 1.], [1., 0., 1.], [0., 1., -1.]), PlaneIntersection::Intersecting),
            // one front, two back: sum -1
            (tri([0., 0., 1.], [1., 0., -1.], [0., 1., -1.]), PlaneIntersection::Intersecting),
            // two front, one on: sum 2
            (tri([0., 0., 1.], [1., 0., 1.], [0., 1., 0.]), PlaneIntersection::Front),
            // two back, one on: sum -2
            (tri([0., 0., -1.], [1., 0., -1.], [0., 1., 0.]), PlaneIntersection::Back),
            // one front, two on: sum 1
            (tri([0., 0., 1.], [1., 0., 0.], [0., 1., 0.]), PlaneIntersection::Intersecting),
            // all on
            (tri([0., 0., 0.], [1., 0., 0.], [0., 1., 0.]), PlaneIntersection::Containing),
            // front, back, on: sum 0
            (tri([0., 0., 1.], [1., 0., -1.], [0., 1., 0.]), PlaneIntersection::Containing),
        ];
        for (t, expected) in cases {
            assert_eq!(plane_triangle(&plane, &t), expected, "triangle {:?}", t);
        }
    }

    #[test]
    fn test_axis_plane_triangle() {
        let plane = AxisPlane::new(Axis::X, 0.5);
        let crossing = tri([0., 0., 0.], [1., 0., 0.], [1., 1., 0.]);
        assert_eq!(plane_triangle(&plane, &crossing), PlaneIntersection::Intersecting);
        let beyond = tri([1., 0., 0.], [2., 0., 0.], [1., 1., 0.]);
        assert_eq!(plane_triangle(&plane, &beyond), PlaneIntersection::Front);
    }

    #[test]
    fn test_frustum_aabb() {
        // Clip volume [-1,1]^3
        let frustum = Frustum::from_matrix(&Mat4::identity());
        let inside = Aabb3::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
        let straddling = Aabb3::new(Point3::new(0.5, -0.5, -0.5), Point3::new(1.5, 0.5, 0.5));
        let outside = Aabb3::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
        assert_eq!(frustum_aabb(&frustum, &inside), VolumeIntersection::Inside);
        assert_eq!(frustum_aabb(&frustum, &straddling), VolumeIntersection::Intersecting);
        assert_eq!(frustum_aabb(&frustum, &outside), VolumeIntersection::Outside);
    }

    #[test]
    fn test_frustum_aabb_outside_wins_over_intersecting() {
        // Cut by the left plane but entirely above the top plane
        let frustum = Frustum::from_matrix(&Mat4::identity());
        let aabb = Aabb3::new(Point3::new(-1.5, 1.5, -0.5), Point3::new(-0.5, 2.5, 0.5));
        assert_eq!(frustum_aabb(&frustum, &aabb), VolumeIntersection::Outside);
    }
}
