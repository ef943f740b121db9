//! Perspective and orthographic projections.

use serde::{Deserialize, Serialize};
use tessera_math::Mat4;

use crate::error::{CameraError, Result};

/// Symmetric perspective projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveProjection {
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Width over height of the viewport.
    pub aspect: f64,
    /// Distance to the near plane.
    pub near: f64,
    /// Distance to the far plane.
    pub far: f64,
}

impl PerspectiveProjection {
    /// Create a perspective projection, rejecting unusable parameters.
    pub fn new(fovy: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        let projection = Self {
            fovy,
            aspect,
            near,
            far,
        };
        projection.validate()?;
        Ok(projection)
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        let values = [self.fovy, self.aspect, self.near, self.far];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CameraError::InvalidProjection(
                "perspective parameters must be finite".into(),
            ));
        }
        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(CameraError::InvalidProjection(format!(
                "fovy must be between 0 and 180 degrees, got {}",
                self.fovy
            )));
        }
        if self.aspect <= 0.0 {
            return Err(CameraError::InvalidProjection(format!(
                "aspect must be positive, got {}",
                self.aspect
            )));
        }
        if self.near == self.far {
            return Err(CameraError::InvalidProjection(
                "near and far planes must differ".into(),
            ));
        }
        if self.near == 0.0 || self.far == 0.0 {
            return Err(CameraError::InvalidProjection(
                "near and far planes must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// `1 / tan(fovy / 2)`.
    fn focal(&self) -> f64 {
        1.0 / (self.fovy.to_radians() / 2.0).tan()
    }

    /// The projection matrix.
    #[rustfmt::skip]
    pub fn matrix(&self) -> Mat4 {
        let f = self.focal();
        let (n, r) = (self.near, self.far);
        let a = n - r;
        Mat4::new(
            f / self.aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (r + n) / a, 2.0 * r * n / a,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Closed-form inverse of [`matrix`](Self::matrix).
    #[rustfmt::skip]
    pub fn inverse_matrix(&self) -> Mat4 {
        let f = self.focal();
        let (n, r) = (self.near, self.far);
        let a = 2.0 * r * n;
        Mat4::new(
            self.aspect / f, 0.0, 0.0, 0.0,
            0.0, 1.0 / f, 0.0, 0.0,
            0.0, 0.0, 0.0, -1.0,
            0.0, 0.0, (n - r) / a, (r + n) / a,
        )
    }
}

/// Orthographic projection of an axis-aligned view volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicProjection {
    /// Left clipping plane.
    pub left: f64,
    /// Right clipping plane.
    pub right: f64,
    /// Bottom clipping plane.
    pub bottom: f64,
    /// Top clipping plane.
    pub top: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

impl Default for OrthographicProjection {
    /// The canonical `[-1, 1]` cube.
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: -1.0,
            far: 1.0,
        }
    }
}

impl OrthographicProjection {
    /// Create an orthographic projection, rejecting flat volumes.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Result<Self> {
        let projection = Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        };
        projection.validate()?;
        Ok(projection)
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        let values = [self.left, self.right, self.bottom, self.top, self.near, self.far];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CameraError::InvalidProjection(
                "orthographic parameters must be finite".into(),
            ));
        }
        if self.left == self.right {
            return Err(CameraError::InvalidProjection("view volume has zero width".into()));
        }
        if self.bottom == self.top {
            return Err(CameraError::InvalidProjection("view volume has zero height".into()));
        }
        if self.near == self.far {
            return Err(CameraError::InvalidProjection("view volume has zero depth".into()));
        }
        Ok(())
    }

    /// The projection matrix.
    #[rustfmt::skip]
    pub fn matrix(&self) -> Mat4 {
        let (l, r, b, t, n, f) = (self.left, self.right, self.bottom, self.top, self.near, self.far);
        Mat4::new(
            2.0 / (r - l), 0.0, 0.0, -(r + l) / (r - l),
            0.0, 2.0 / (t - b), 0.0, -(t + b) / (t - b),
            0.0, 0.0, -2.0 / (f - n), -(f + n) / (f - n),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Closed-form inverse of [`matrix`](Self::matrix).
    #[rustfmt::skip]
    pub fn inverse_matrix(&self) -> Mat4 {
        let (l, r, b, t, n, f) = (self.left, self.right, self.bottom, self.top, self.near, self.far);
        Mat4::new(
            (r - l) / 2.0, 0.0, 0.0, (r + l) / 2.0,
            0.0, (t - b) / 2.0, 0.0, (t + b) / 2.0,
            0.0, 0.0, -(f - n) / 2.0, -(f + n) / 2.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// A camera projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Perspective projection.
    Perspective(PerspectiveProjection),
    /// Orthographic projection.
    Orthographic(OrthographicProjection),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Orthographic(OrthographicProjection::default())
    }
}

impl Projection {
    /// Validated perspective projection; `fovy` is in degrees.
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        PerspectiveProjection::new(fovy, aspect, near, far).map(Self::Perspective)
    }

    /// Validated orthographic projection.
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        OrthographicProjection::new(left, right, bottom, top, near, far).map(Self::Orthographic)
    }

    /// Validate parameters, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Perspective(p) => p.validate(),
            Self::Orthographic(o) => o.validate(),
        }
    }

    /// The projection matrix.
    pub fn matrix(&self) -> Mat4 {
        match self {
            Self::Perspective(p) => p.matrix(),
            Self::Orthographic(o) => o.matrix(),
        }
    }

    /// The inverse projection matrix.
    pub fn inverse_matrix(&self) -> Mat4 {
        match self {
            Self::Perspective(p) => p.inverse_matrix(),
            Self::Orthographic(o) => o.inverse_matrix(),
        }
    }

    /// The near plane.
    pub fn near(&self) -> f64 {
        match self {
            Self::Perspective(p) => p.near,
            Self::Orthographic(o) => o.near,
        }
    }

    /// The far plane.
    pub fn far(&self) -> f64 {
        match self {
            Self::Perspective(p) => p.far,
            Self::Orthographic(o) => o.far,
        }
    }
}
