//! Error types for cameras.

use thiserror::Error;

/// Errors that can occur when building a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// Projection parameters describe no usable volume.
    #[error("invalid projection: {0}")]
    InvalidProjection(String),

    /// The camera pose has no inverse, so no view matrix exists.
    #[error("camera pose is not invertible")]
    SingularPose,
}

/// Result type for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;
