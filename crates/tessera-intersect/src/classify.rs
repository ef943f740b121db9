//! Signed distance and point classification against planes.

use serde::{Deserialize, Serialize};
use tessera_math::Point3;
use tessera_primitives::{AxisPlane, Plane};

/// Side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Positive distance: the side the normal points to.
    Front,
    /// Negative distance.
    Back,
    /// Exactly on the plane.
    Zero,
}

/// Planes that can measure the signed distance of a point.
pub trait SignedDistance {
    /// Signed distance from the plane to `p`, positive on the front side.
    ///
    /// For planes with a non-unit normal the value is scaled by the normal's length.
    fn distance_to(&self, p: &Point3) -> f64;

    /// Classify `p` by the sign of its distance.
    ///
    /// Only an exact zero is [`Side::Zero`]; no tolerance is applied, so
    /// callers wanting one must offset their inputs.
    fn classify(&self, p: &Point3) -> Side {
        let d = self.distance_to(p);
        if d > 0.0 {
            Side::Front
        } else if d < 0.0 {
            Side::Back
        } else {
            Side::Zero
        }
    }
}

impl SignedDistance for Plane {
    #[inline]
    fn distance_to(&self, p: &Point3) -> f64 {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }
}

impl SignedDistance for AxisPlane {
    #[inline]
    fn distance_to(&self, p: &Point3) -> f64 {
        p[self.axis.index()] - self.constant
    }
}

/// Sign of `x` as -1, 0 or 1, with zero kept distinct.
pub(crate) fn sign(x: f64) -> i32 {
    if x == 0.0 {
        0
    } else if x > 0.0 {
        1
    } else {
        -1
    }
}
