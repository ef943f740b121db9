//! General and axis-aligned planes.

use serde::{Deserialize, Serialize};
use tessera_math::{Point3, Vec3, Vec4};

use crate::Triangle3;

/// A plane `a·x + b·y + c·z + d = 0`.
///
/// `(a, b, c)` is the normal. It is only unit length when the plane was
/// built from a triangle or explicitly [`normalized`](Plane::normalized).
/// Signed distances are positive on the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Plane {
    /// Normal x component.
    pub a: f64,
    /// Normal y component.
    pub b: f64,
    /// Normal z component.
    pub c: f64,
    /// Constant term.
    pub d: f64,
}

impl Plane {
    /// Create a plane from its four coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a plane from a normal and the constant term `d`.
    pub fn from_normal(normal: &Vec3, d: f64) -> Self {
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Create the plane through `point` with the given normal.
    pub fn from_point_normal(point: &Point3, normal: &Vec3) -> Self {
        Self::from_normal(normal, -point.coords.dot(normal))
    }

    /// Supporting plane of a triangle given in counter-clockwise order.
    ///
    /// The normal is `normalize((p1 - p0) × (p2 - p0))`.
    pub fn from_triangle(triangle: &Triangle3) -> Self {
        let v1 = triangle.p1 - triangle.p0;
        let v2 = triangle.p2 - triangle.p0;
        let n = v1.cross(&v2).normalize();
        Self::from_point_normal(&triangle.p0, &n)
    }

    /// The plane's normal `(a, b, c)`.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// The coefficients as `(a, b, c, d)`.
    #[inline]
    pub fn coefficients(&self) -> Vec4 {
        Vec4::new(self.a, self.b, self.c, self.d)
    }

    /// The same plane with a unit normal.
    ///
    /// A plane with a zero normal is returned unchanged.
    pub fn normalized(&self) -> Self {
        let n = self.normal().norm();
        if n == 0.0 {
            return *self;
        }
        Self::new(self.a / n, self.b / n, self.c / n, self.d / n)
    }
}

impl From<Vec4> for Plane {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// The x axis.
    #[default]
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// Component index of this axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// An axis-aligned plane `coordinate[axis] = constant`.
///
/// The default is the plane `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisPlane {
    /// Axis the plane is perpendicular to.
    pub axis: Axis,
    /// The constant in `x = c`, `y = c` or `z = c`.
    pub constant: f64,
}

impl AxisPlane {
    /// Create an axis-aligned plane.
    pub fn new(axis: Axis, constant: f64) -> Self {
        Self { axis, constant }
    }

    /// The equivalent general plane, normal pointing along +axis.
    pub fn to_plane(&self) -> Plane {
        let mut normal = Vec3::zeros();
        normal[self.axis.index()] = 1.0;
        Plane::from_normal(&normal, -self.constant)
    }
}
