//! Ray intersection tests.
//!
//! Every parameter `t` is measured in multiples of the ray's direction,
//! which need not be unit length.

use serde::{Deserialize, Serialize};
use tessera_math::Point3;
use tessera_primitives::{Aabb3, AxisPlane, Plane, Ray, Sphere, Triangle3};

use crate::tolerance::TriangleTolerance;

/// Outcome of a successful ray-sphere test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SphereHit {
    /// The ray starts strictly inside the sphere. No parameters are computed.
    OriginInside,
    /// The ray enters the sphere at `t_min` and leaves it at `t_max`.
    Crossing {
        /// Entry parameter.
        t_min: f64,
        /// Exit parameter.
        t_max: f64,
    },
}

/// Intersection point of a ray's supporting line with a plane.
///
/// No sign constraint is applied to `t`, so points behind the origin are
/// returned. `None` only when the ray is exactly parallel to the plane.
pub fn ray_plane_point(ray: &Ray, plane: &Plane) -> Option<Point3> {
    line_plane_param(ray, plane).map(|t| ray.at(t))
}

/// Parameter at which a ray hits a plane.
///
/// `None` when the ray is exactly parallel or the plane lies behind the
/// origin.
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<f64> {
    line_plane_param(ray, plane).filter(|&t| t >= 0.0)
}

/// Whether a ray hits a plane at `t >= 0`.
pub fn ray_hits_plane(ray: &Ray, plane: &Plane) -> bool {
    ray_plane(ray, plane).is_some()
}

fn line_plane_param(ray: &Ray, plane: &Plane) -> Option<f64> {
    let n = plane.normal();
    let denom = n.dot(&ray.direction);
    if denom == 0.0 {
        return None;
    }
    Some((-n.dot(&ray.origin.coords) - plane.d) / denom)
}

/// Parameter at which a ray's supporting line crosses an axis-aligned plane.
///
/// `None` iff the direction has no component along the axis, even if the
/// origin lies on the plane. Negative parameters are returned as is.
pub fn ray_axis_plane(ray: &Ray, plane: &AxisPlane) -> Option<f64> {
    let i = plane.axis.index();
    let denom = ray.direction[i];
    if denom == 0.0 {
        return None;
    }
    Some((plane.constant - ray.origin[i]) / denom)
}

/// Whether a ray's supporting line crosses an axis-aligned plane.
pub fn ray_hits_axis_plane(ray: &Ray, plane: &AxisPlane) -> bool {
    ray_axis_plane(ray, plane).is_some()
}

/// Slab test of a ray against a box.
///
/// Returns the raw `(t_min, t_max)` interval of the ray inside the box.
/// `t_min` is negative when the origin is inside. A hit requires
/// `t_max >= 0` and `t_min <= t_max`. On an axis where the direction is
/// zero the origin must lie within the slab. An empty box is never hit.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb3) -> Option<(f64, f64)> {
    let Aabb3::Bounded { min, max } = aabb else {
        return None;
    };

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    for i in 0..3 {
        let o = ray.origin[i];
        let d = ray.direction[i];
        if d == 0.0 {
            if o < min[i] || o > max[i] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t1, t2) = {
            let t1 = (min[i] - o) * inv;
            let t2 = (max[i] - o) * inv;
            if t1 > t2 {
                (t2, t1)
            } else {
                (t1, t2)
            }
        };
        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
    }

    if t_max >= 0.0 && t_min <= t_max {
        Some((t_min, t_max))
    } else {
        None
    }
}

/// Whether a ray hits a box.
pub fn ray_hits_aabb(ray: &Ray, aabb: &Aabb3) -> bool {
    ray_aabb(ray, aabb).is_some()
}

/// Ray-sphere test by projection onto the ray.
///
/// A ray whose origin is strictly inside yields
/// [`SphereHit::OriginInside`]. Otherwise the sphere must lie ahead of the
/// origin and the ray must pass strictly closer to the center than the
/// radius; the entry and exit parameters are then returned.
pub fn ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<SphereHit> {
    let l = sphere.center - ray.origin;
    let l2 = l.norm_squared();
    if l2 < sphere.radius2 {
        return Some(SphereHit::OriginInside);
    }

    let dd = ray.direction.norm_squared();
    if dd == 0.0 {
        return None;
    }
    let ld = l.dot(&ray.direction);
    let proj = ld / dd;
    if proj < 0.0 {
        return None;
    }

    // Squared distance from the center to the supporting line
    let m2 = l2 - ld * ld / dd;
    if m2 >= sphere.radius2 {
        return None;
    }
    let half_chord = ((sphere.radius2 - m2) / dd).sqrt();
    Some(SphereHit::Crossing {
        t_min: proj - half_chord,
        t_max: proj + half_chord,
    })
}

/// Whether a ray hits a sphere. Short-circuits when the origin is inside.
pub fn ray_hits_sphere(ray: &Ray, sphere: &Sphere) -> bool {
    ray_sphere(ray, sphere).is_some()
}

/// Parameter at which a ray hits a triangle.
pub fn ray_triangle(ray: &Ray, triangle: &Triangle3, tol: &TriangleTolerance) -> Option<f64> {
    ray_triangle_vertices(ray, &triangle.p0, &triangle.p1, &triangle.p2, tol)
}

/// Parameter at which a ray hits the triangle `p0 p1 p2`.
///
/// Möller-Trumbore with edges taken relative to `p2`. The determinant
/// must reach `tol.tau` in magnitude. Barycentric bounds and `t >= 0` are
/// relaxed by `tol.eps`, so hits on shared edges register for both
/// neighbours. With `tol.cull_backfaces` only counter-clockwise faces
/// (positive determinant) are hit.
pub fn ray_triangle_vertices(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    tol: &TriangleTolerance,
) -> Option<f64> {
    let a = p0 - p2;
    let b = p1 - p2;
    let c = ray.origin - p2;

    let s = a.cross(&ray.direction);
    let sb = s.dot(&b);
    if sb.abs() < tol.tau {
        return None;
    }
    if tol.cull_backfaces && sb <= 0.0 {
        return None;
    }

    let e = b.cross(&c);
    let u = e.dot(&ray.direction) / sb;
    let v = s.dot(&c) / sb;
    let t = e.dot(&a) / sb;

    let eps = tol.eps;
    if u + eps >= 0.0 && v + eps >= 0.0 && u + v - eps <= 1.0 && t + eps >= 0.0 {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SignedDistance;
    use approx::assert_relative_eq;
    use tessera_math::Vec3;
    use tessera_primitives::Axis;

    fn unit_box() -> Aabb3 {
        Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    fn xy_triangle() -> Triangle3 {
        Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let plane = Plane::from_point_normal(&Point3::origin(), &Vec3::z());
        let ray = Ray::new(Point3::new(3.0, 4.0, 10.0), Vec3::new(0.0, 0.0, -2.0));
        let t = ray_plane(&ray, &plane).unwrap();
        assert_relative_eq!(t, 5.0);
        assert!(ray_hits_plane(&ray, &plane));
    }

    #[test]
    fn test_ray_plane_hit_lies_on_plane() {
        let plane = Plane::new(0.3, -1.2, 0.7, 2.5);
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(-0.2, 0.9, 0.1));
        let t = ray_plane(&ray, &plane).unwrap();
        assert!(plane.distance_to(&ray.at(t)).abs() < 1e-9);
    }

    #[test]
    fn test_ray_plane_behind_and_parallel() {
        let plane = Plane::from_point_normal(&Point3::origin(), &Vec3::z());
        let away = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::z());
        assert_eq!(ray_plane(&away, &plane), None);
        // The line still meets the plane behind the origin
        assert_eq!(ray_plane_point(&away, &plane), Some(Point3::origin()));

        let parallel = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::x());
        assert_eq!(ray_plane(&parallel, &plane), None);
        assert_eq!(ray_plane_point(&parallel, &plane), None);
    }

    #[test]
    fn test_ray_axis_plane() {
        let plane = AxisPlane::new(Axis::Y, 2.0);
        let ray = Ray::new(Point3::new(0.0, 6.0, 0.0), Vec3::new(1.0, -2.0, 0.0));
        assert_eq!(ray_axis_plane(&ray, &plane), Some(2.0));

        // No sign constraint
        let back = Ray::new(Point3::new(0.0, 6.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(ray_axis_plane(&back, &plane), Some(-2.0));
        assert!(ray_hits_axis_plane(&back, &plane));
    }

    #[test]
    fn test_ray_axis_plane_parallel_on_plane() {
        let plane = AxisPlane::new(Axis::Z, 0.0);
        let ray = Ray::new(Point3::origin(), Vec3::x());
        assert_eq!(ray_axis_plane(&ray, &plane), None);
        assert!(!ray_hits_axis_plane(&ray, &plane));
    }

    #[test]
    fn test_ray_aabb_hit() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let (t_min, t_max) = ray_aabb(&ray, &unit_box()).unwrap();
        assert_relative_eq!(t_min, 5.0);
        assert_relative_eq!(t_max, 6.0);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let ray = Ray::new(Point3::new(-5.0, 5.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray_aabb(&ray, &unit_box()), None);

        let diagonal_miss = Ray::new(Point3::new(-1.0, 3.0, 0.5), Vec3::new(1.0, 1.0, 0.0));
        assert!(!ray_hits_aabb(&diagonal_miss, &unit_box()));
    }

    #[test]
    fn test_ray_inside_aabb() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vec3::new(2.0, 0.0, 0.0));
        let (t_min, t_max) = ray_aabb(&ray, &unit_box()).unwrap();
        assert_relative_eq!(t_min, -0.25);
        assert_relative_eq!(t_max, 0.25);
    }

    #[test]
    fn test_ray_aabb_behind() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(ray_aabb(&ray, &unit_box()), None);
    }

    #[test]
    fn test_ray_aabb_diagonal() {
        let ray = Ray::new(Point3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let (t_min, t_max) = ray_aabb(&ray, &unit_box()).unwrap();
        assert_relative_eq!(t_min, 1.0);
        assert_relative_eq!(t_max, 2.0);
    }

    #[test]
    fn test_ray_aabb_zero_direction_axis() {
        // Parallel to the x slab and outside it
        let outside = Ray::new(Point3::new(2.0, -5.0, 0.5), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ray_aabb(&outside, &unit_box()), None);

        let inside = Ray::new(Point3::new(0.5, -5.0, 0.5), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ray_aabb(&inside, &unit_box()), Some((5.0, 6.0)));
    }

    #[test]
    fn test_ray_aabb_empty_box() {
        let ray = Ray::new(Point3::origin(), Vec3::x());
        assert_eq!(ray_aabb(&ray, &Aabb3::empty()), None);
    }

    #[test]
    fn test_ray_sphere_crossing() {
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            ray_sphere(&ray, &sphere),
            Some(SphereHit::Crossing {
                t_min: 4.0,
                t_max: 6.0
            })
        );
    }

    #[test]
    fn test_ray_sphere_scaled_direction() {
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -2.0));
        match ray_sphere(&ray, &sphere) {
            Some(SphereHit::Crossing { t_min, t_max }) => {
                assert_relative_eq!(t_min, 2.0);
                assert_relative_eq!(t_max, 3.0);
                assert_relative_eq!(ray.at(t_min).z, 1.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ray_sphere_origin_inside() {
        let sphere = Sphere::with_radius(Point3::new(1.0, 1.0, 1.0), 2.0);
        let ray = Ray::new(Point3::new(1.5, 1.0, 1.0), Vec3::x());
        assert_eq!(ray_sphere(&ray, &sphere), Some(SphereHit::OriginInside));
        assert!(ray_hits_sphere(&ray, &sphere));
    }

    #[test]
    fn test_ray_sphere_misses() {
        let sphere = Sphere::new(Point3::origin(), 1.0);
        // Pointing away
        let away = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::z());
        assert_eq!(ray_sphere(&away, &sphere), None);
        // Passing beside
        let beside = Ray::new(Point3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_sphere(&beside, &sphere), None);
        // Tangent is a miss
        let tangent = Ray::new(Point3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_sphere(&tangent, &sphere), None);
    }

    #[test]
    fn test_ray_triangle_front_hit() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray_triangle(&ray, &xy_triangle(), &TriangleTolerance::default()).unwrap();
        assert_relative_eq!(t, 1.0);
    }

    #[test]
    fn test_ray_triangle_outside() {
        let ray = Ray::new(Point3::new(0.9, 0.9, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_triangle(&ray, &xy_triangle(), &TriangleTolerance::default()), None);
    }

    #[test]
    fn test_ray_triangle_parallel() {
        let ray = Ray::new(Point3::new(-1.0, 0.25, 0.0), Vec3::x());
        assert_eq!(ray_triangle(&ray, &xy_triangle(), &TriangleTolerance::default()), None);
    }

    #[test]
    fn test_ray_triangle_behind_origin() {
        let ray = Ray::new(Point3::new(0.25, 0.25, -1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_triangle(&ray, &xy_triangle(), &TriangleTolerance::default()), None);
    }

    #[test]
    fn test_ray_triangle_edge_is_shared() {
        // Through the hypotenuse of both halves of the unit square
        let tol = TriangleTolerance::default();
        let ray = Ray::new(Point3::new(0.5, 0.5, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let lower = xy_triangle();
        let upper = Triangle3::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert!(ray_triangle(&ray, &lower, &tol).is_some());
        assert!(ray_triangle(&ray, &upper, &tol).is_some());
    }

    #[test]
    fn test_ray_triangle_backface_culling() {
        let from_below = Ray::new(Point3::new(0.25, 0.25, -1.0), Vec3::z());
        let tol = TriangleTolerance::default();
        assert!(ray_triangle(&from_below, &xy_triangle(), &tol).is_some());

        let culling = TriangleTolerance {
            cull_backfaces: true,
            ..tol
        };
        assert_eq!(ray_triangle(&from_below, &xy_triangle(), &culling), None);

        let from_above = Ray::new(Point3::new(0.25, 0.25, 1.0), -Vec3::z());
        assert!(ray_triangle(&from_above, &xy_triangle(), &culling).is_some());
    }

    #[test]
    fn test_ray_triangle_eps_slack() {
        let ray = Ray::new(Point3::new(-1e-8, 0.25, 1.0), -Vec3::z());
        let loose = TriangleTolerance::default();
        assert!(ray_triangle(&ray, &xy_triangle(), &loose).is_some());
        let exact = TriangleTolerance { eps: 0.0, ..loose };
        assert_eq!(ray_triangle(&ray, &xy_triangle(), &exact), None);
    }
}
