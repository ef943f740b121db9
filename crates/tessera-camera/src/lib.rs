#![warn(missing_docs)]

//! Cameras for the tessera geometry kernel.
//!
//! A [`Camera`] pairs a [`Projection`] with a world-space pose and yields
//! the [`Frustum`](tessera_primitives::Frustum) used for visibility tests.
//! Clip space follows the OpenGL convention: `-w <= x, y, z <= w`, camera
//! looking down its local -Z axis.
//!
//! ```
//! use tessera_camera::{Camera, Projection};
//! use tessera_math::{Point3, Vec3};
//!
//! let projection = Projection::perspective(60.0, 16.0 / 9.0, 0.1, 100.0)?;
//! let camera = Camera::look_at(projection, &Point3::new(0.0, 0.0, 10.0), &Point3::origin(), &Vec3::y());
//! let frustum = camera.frustum()?;
//! assert!(frustum.near.normal().z < 0.0);
//! # Ok::<(), tessera_camera::CameraError>(())
//! ```

mod camera;
pub mod error;
mod projection;

pub use camera::Camera;
pub use error::{CameraError, Result};
pub use projection::{OrthographicProjection, PerspectiveProjection, Projection};
