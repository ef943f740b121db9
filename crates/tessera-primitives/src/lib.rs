#![warn(missing_docs)]

//! Primitive value types for the tessera geometry kernel.
//!
//! Every type here is a small `Copy` value describing a shape. None of
//! them carries behaviour beyond construction and the incremental `add`
//! mutators used to grow bounding volumes; the spatial tests live in
//! `tessera-intersect` and the texel walkers in `tessera-raster`.
//!
//! # Types
//!
//! - [`Plane`] / [`AxisPlane`] - general and axis-aligned planes
//! - [`Aabb2`] / [`Aabb3`] - axis-aligned bounding boxes with an explicit empty state
//! - [`Sphere`] - center and squared radius
//! - [`Ray`] - origin and (not necessarily unit) direction
//! - [`Triangle2`], [`Triangle3`], [`Quad2`], [`Quad3`] - CCW polygons
//! - [`Frustum`] - six inward-facing clipping planes
//! - [`Texel`] - integer image coordinate, origin at the top-left corner

pub mod aabb;
mod frustum;
mod plane;
mod ray;
mod shapes;
mod sphere;
mod texel;

pub use aabb::{Aabb, Aabb2, Aabb3};
pub use frustum::Frustum;
pub use plane::{Axis, AxisPlane, Plane};
pub use ray::Ray;
pub use shapes::{Quad2, Quad3, Triangle2, Triangle3};
pub use sphere::Sphere;
pub use texel::Texel;
