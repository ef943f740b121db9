#![warn(missing_docs)]

//! Classification, intersection and containment tests for the tessera kernel.
//!
//! All tests are pure functions over the value types of
//! `tessera-primitives`. Degenerate configurations never fail: a parallel
//! ray, a near-zero determinant or an exact-zero distance resolves to a
//! negative answer (`None` / `false`) or to a documented classification.
//!
//! # Modules
//!
//! - [`classify`] - signed distances and [`Side`] classification
//! - [`volume`] - plane-box, plane-triangle and frustum-box tests
//! - [`ray`] - ray against plane, axis plane, box, sphere and triangle
//! - [`contains`] - point containment in frustums, spheres, triangles and quads
//! - [`tolerance`] - the `eps` / `tau` settings of the ray-triangle test
//!
//! # Example
//!
//! ```
//! use tessera_intersect::{ray_sphere, SphereHit};
//! use tessera_math::{Point3, Vec3};
//! use tessera_primitives::{Ray, Sphere};
//!
//! let sphere = Sphere::new(Point3::origin(), 1.0);
//! let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! assert_eq!(ray_sphere(&ray, &sphere), Some(SphereHit::Crossing { t_min: 4.0, t_max: 6.0 }));
//! ```

pub mod classify;
pub mod contains;
pub mod error;
pub mod ray;
pub mod tolerance;
pub mod volume;

pub use classify::{SignedDistance, Side};
pub use contains::{
    frustum_contains, frustum_contains_xyz, quad_contains, quad_contains_vertices,
    sphere_contains, triangle_contains, triangle_contains_vertices,
};
pub use error::{Result, ToleranceError};
pub use ray::{
    ray_aabb, ray_axis_plane, ray_hits_aabb, ray_hits_axis_plane, ray_hits_plane,
    ray_hits_sphere, ray_plane, ray_plane_point, ray_sphere, ray_triangle,
    ray_triangle_vertices, SphereHit,
};
pub use tolerance::TriangleTolerance;
pub use volume::{frustum_aabb, plane_aabb, plane_triangle, PlaneIntersection, VolumeIntersection};
