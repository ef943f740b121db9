//! Axis-aligned bounding boxes.
//!
//! A box is either [`Aabb::Empty`] or [`Aabb::Bounded`]. The empty state
//! stands in for the "uninitialised" sentinel box `min = (1, 1, ..)`,
//! `max = (-1, -1, ..)` and keeps its observable behaviour:
//!
//! - an empty box reports the sentinel corners from [`Aabb::min`] / [`Aabb::max`];
//! - [`Aabb::new`] called with exactly the sentinel corners yields an empty box;
//! - the first point added to an empty box becomes both corners, later
//!   points are merged component-wise.

use nalgebra::{Point, SVector};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in `D` dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Aabb<const D: usize> {
    /// No point has been added yet.
    #[default]
    Empty,
    /// A box spanning `min..=max`.
    Bounded {
        /// Minimum corner.
        min: Point<f64, D>,
        /// Maximum corner.
        max: Point<f64, D>,
    },
}

/// Axis-aligned bounding box in texture space.
pub type Aabb2 = Aabb<2>;

/// Axis-aligned bounding box in 3D.
pub type Aabb3 = Aabb<3>;

fn sentinel_min<const D: usize>() -> Point<f64, D> {
    Point::from(SVector::<f64, D>::repeat(1.0))
}

fn sentinel_max<const D: usize>() -> Point<f64, D> {
    Point::from(SVector::<f64, D>::repeat(-1.0))
}

impl<const D: usize> Aabb<D> {
    /// Create an empty box suitable for growing with [`add`](Aabb::add).
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Create a box from its corners.
    ///
    /// The sentinel pair `min = (1, ..)`, `max = (-1, ..)` is read as the
    /// empty box. Other corners are stored as given, without reordering.
    pub fn new(min: Point<f64, D>, max: Point<f64, D>) -> Self {
        if min == sentinel_min() && max == sentinel_max() {
            Self::Empty
        } else {
            Self::Bounded { min, max }
        }
    }

    /// Build the smallest box containing all `points`.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<f64, D>>,
    {
        let mut aabb = Self::Empty;
        for p in points {
            aabb.add(p);
        }
        aabb
    }

    /// True if no point has been added.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Minimum corner (the sentinel `(1, ..)` for an empty box).
    pub fn min(&self) -> Point<f64, D> {
        match self {
            Self::Empty => sentinel_min(),
            Self::Bounded { min, .. } => *min,
        }
    }

    /// Maximum corner (the sentinel `(-1, ..)` for an empty box).
    pub fn max(&self) -> Point<f64, D> {
        match self {
            Self::Empty => sentinel_max(),
            Self::Bounded { max, .. } => *max,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point<f64, D> {
        nalgebra::center(&self.min(), &self.max())
    }

    /// Half of the box extent along each axis.
    pub fn half_extent(&self) -> SVector<f64, D> {
        (self.max() - self.min()) / 2.0
    }

    /// Grow the box to contain `p`.
    pub fn add(&mut self, p: &Point<f64, D>) {
        *self = match *self {
            Self::Empty => Self::Bounded { min: *p, max: *p },
            Self::Bounded { min, max } => Self::Bounded {
                min: min.inf(p),
                max: max.sup(p),
            },
        };
    }

    /// Grow the box to contain `other`, by adding its two corners.
    pub fn add_aabb(&mut self, other: &Self) {
        self.add(&other.min());
        self.add(&other.max());
    }

    /// Return a copy with `max` moved by `delta`.
    pub fn with_max_offset(&self, delta: &SVector<f64, D>) -> Self {
        Self::new(self.min(), self.max() + *delta)
    }
}
