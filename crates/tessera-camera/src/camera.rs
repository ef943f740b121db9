use serde::{Deserialize, Serialize};
use tessera_math::{Mat4, Point3, Transform, Vec3};
use tessera_primitives::Frustum;

use crate::error::{CameraError, Result};
use crate::projection::Projection;

/// A projection placed in the world.
///
/// `pose` maps camera space to world space; its inverse is the view matrix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    /// How camera space is projected to clip space.
    pub projection: Projection,
    /// Camera-to-world transform.
    pub pose: Transform,
}

impl Camera {
    /// Create a camera.
    pub fn new(projection: Projection, pose: Transform) -> Self {
        Self { projection, pose }
    }

    /// Camera at `eye` looking towards `target`, with `up` as the vertical hint.
    pub fn look_at(projection: Projection, eye: &Point3, target: &Point3, up: &Vec3) -> Self {
        Self::new(projection, Transform::look_at(eye, target, up))
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> Result<Mat4> {
        match self.pose.inverse() {
            Some(view) => Ok(view.matrix),
            None => {
                log::debug!("camera pose {:?} has no inverse", self.pose.matrix);
                Err(CameraError::SingularPose)
            }
        }
    }

    /// Projection × view.
    pub fn view_projection(&self) -> Result<Mat4> {
        Ok(self.projection.matrix() * self.view_matrix()?)
    }

    /// The world-space view frustum.
    pub fn frustum(&self) -> Result<Frustum> {
        let m = self.view_projection()?;
        Ok(Frustum::from_matrix(&m))
    }
}
