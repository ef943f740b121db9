//! Tolerances for the ray-triangle test.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToleranceError};

/// Ray-triangle tolerance settings.
///
/// Missing fields take their default when deserializing, so a config
/// only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleTolerance {
    /// Slack on the barycentric bounds and on `t >= 0`. Positive values
    /// accept hits slightly outside the triangle edges.
    pub eps: f64,
    /// Rays whose determinant is smaller than this in magnitude are
    /// treated as parallel to the triangle.
    pub tau: f64,
    /// Reject hits on the back face (determinant not positive).
    pub cull_backfaces: bool,
}

impl Default for TriangleTolerance {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            tau: 1e-9,
            cull_backfaces: false,
        }
    }
}

impl TriangleTolerance {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("eps", self.eps), ("tau", self.tau)] {
            if !value.is_finite() {
                return Err(ToleranceError::NonFinite(name));
            }
            if value < 0.0 {
                return Err(ToleranceError::Negative { name, value });
            }
        }
        Ok(())
    }
}
