//! Bounding spheres.

use serde::{Deserialize, Serialize};
use tessera_math::Point3;

/// A sphere stored as center and squared radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius squared.
    pub radius2: f64,
}

impl Sphere {
    /// Create a sphere from its center and squared radius.
    pub fn new(center: Point3, radius2: f64) -> Self {
        Self { center, radius2 }
    }

    /// Create a sphere from its center and (non-squared) radius.
    pub fn with_radius(center: Point3, radius: f64) -> Self {
        Self::new(center, radius * radius)
    }

    /// Grow the sphere to contain `p`. The center never moves.
    pub fn add(&mut self, p: &Point3) {
        self.radius2 = self.radius2.max((p - self.center).norm_squared());
    }

    /// The sphere's radius.
    pub fn radius(&self) -> f64 {
        self.radius2.sqrt()
    }
}

impl Default for Sphere {
    /// Degenerate sphere of radius 0 at the origin.
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0)
    }
}
