#![warn(missing_docs)]

//! tessera - geometric intersection, classification and rasterization
//!
//! Pairwise tests between rays, planes, boxes, spheres, triangles, quads
//! and view frustums, plus conversion of texture-space shapes into texel
//! coverage. This crate re-exports the workspace members:
//!
//! - [`math`] - nalgebra aliases and the camera pose [`Transform`]
//! - [`primitives`] - value types
//! - [`intersect`] - classification, intersection and containment tests
//! - [`camera`] - projections and frustum extraction
//! - [`raster`] - barycentric interpolation and rasterization
//!
//! # Example
//!
//! ```
//! use tessera::{frustum_aabb, Aabb3, Camera, Point3, Projection, Vec3, VolumeIntersection};
//!
//! let projection = Projection::perspective(60.0, 1.0, 0.1, 100.0)?;
//! let camera = Camera::look_at(projection, &Point3::new(0.0, 0.0, 10.0), &Point3::origin(), &Vec3::y());
//! let frustum = camera.frustum()?;
//!
//! let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
//! assert_eq!(frustum_aabb(&frustum, &aabb), VolumeIntersection::Inside);
//! # Ok::<(), tessera::CameraError>(())
//! ```

pub use tessera_camera as camera;
pub use tessera_intersect as intersect;
pub use tessera_math as math;
pub use tessera_primitives as primitives;
pub use tessera_raster as raster;

pub use tessera_camera::{Camera, CameraError, OrthographicProjection, PerspectiveProjection, Projection};
pub use tessera_intersect::{
    frustum_aabb, frustum_contains, frustum_contains_xyz, plane_aabb, plane_triangle,
    quad_contains, quad_contains_vertices, ray_aabb, ray_axis_plane, ray_hits_aabb,
    ray_hits_axis_plane, ray_hits_plane, ray_hits_sphere, ray_plane, ray_plane_point, ray_sphere,
    ray_triangle, ray_triangle_vertices, sphere_contains, triangle_contains,
    triangle_contains_vertices, PlaneIntersection, Side, SignedDistance, SphereHit,
    ToleranceError, TriangleTolerance, VolumeIntersection,
};
pub use tessera_math::{det2, Mat4, Point2, Point3, Transform, Vec2, Vec3, Vec4};
pub use tessera_primitives::{
    Aabb, Aabb2, Aabb3, Axis, AxisPlane, Frustum, Plane, Quad2, Quad3, Ray, Sphere, Texel,
    Triangle2, Triangle3,
};
pub use tessera_raster::{
    barycentric_quad, barycentric_triangle, image_coordinates, interpolate_quad,
    interpolate_triangle, quad_area, rasterize_aabb_overlapping, rasterize_quad_contained,
    rasterize_triangle_contained, rasterize_triangles_contained, texture_coordinates,
    triangle_area,
};
