pub use nalgebra::{Point2, Point3, Vector2};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num};

use crate::cartesian::traits::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;
/// 3d point with `f64` coordinates.
///
/// When produced from geographic positions, `x` is longitude, `y` is latitude (both in degrees) and `z` is altitude
/// in meters.
pub type Point3d = Point3<f64>;

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<N> for Point2<N> {
    fn new(x: N, y: N) -> Self {
        Point2::new(x, y)
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Point3<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint3d for Point3<N> {
    fn z(&self) -> N {
        self.z
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> NewCartesianPoint3d<N> for Point3<N> {
    fn new(x: N, y: N, z: N) -> Self {
        Point3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn difference_of_points() {
        let a = Point3d::new(10.0, 20.0, 500.0);
        let b = Point2d::new(7.0, 24.0);
        assert_eq!(a.sub(&b), Vector2::new(3.0, -4.0));
        assert_eq!(a.distance_sq(&b), 25.0);
        assert_eq!(CartesianPoint3d::z(&a), 500.0);
    }

    #[test]
    fn cross_product_sign() {
        let east = Point2d::new(1.0, 0.0).sub(&Point2d::origin());
        assert_eq!(east.perp(&Vector2::new(0.0, 1.0)), 1.0);
        assert_eq!(east.perp(&Vector2::new(0.0, -1.0)), -1.0);
        assert_eq!(east.perp(&Vector2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn points_compare_approximately() {
        assert_abs_diff_eq!(
            Point3d::new(1.0, 2.0, 3.0),
            Point3d::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12),
            epsilon = 1e-9
        );
    }
}
