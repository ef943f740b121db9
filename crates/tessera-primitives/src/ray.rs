//! Ray representation.

use serde::{Deserialize, Serialize};
use tessera_math::{Point3, Vec3};

/// A ray `origin + t * direction`.
///
/// The direction is stored as given and is not required to be unit
/// length; every ray parameter `t` in this workspace is measured in
/// multiples of `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// The parameter `t` such that `p = self.at(t)`, assuming `p` is on the ray.
    ///
    /// Solved along the first non-zero direction component; a zero
    /// direction yields 0.
    pub fn param_of(&self, p: &Point3) -> f64 {
        (0..3)
            .find(|&i| self.direction[i] != 0.0)
            .map_or(0.0, |i| (p[i] - self.origin[i]) / self.direction[i])
    }

    /// The same ray re-based at `self.at(offset)`.
    pub fn advanced(&self, offset: f64) -> Self {
        Self::new(self.at(offset), self.direction)
    }
}
