use nalgebra::{Scalar, Vector2};
use num_traits::{Bounded, FromPrimitive, Num};

/// A point in 2d cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y
    }
}

/// Point that can be constructed from its 2d coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// A point in 3d cartesian coordinate space. The first two coordinates are accessible through
/// [`CartesianPoint2d`], so all planar algorithms work on 3d points by ignoring `z`.
pub trait CartesianPoint3d: CartesianPoint2d {
    /// Z coordinate.
    fn z(&self) -> Self::Num;
}

/// Point that can be constructed from its 3d coordinates.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}
